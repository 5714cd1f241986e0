pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod http {
            pub mod envelope;
        }
    }
}

pub mod modules {
    pub mod fulfillment {
        pub mod core {
            pub mod errors;
            pub mod events;
            pub mod evolve;
            pub mod order;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod import_orders {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_scan {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod record_transfer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod set_order_status {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_order {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod list_line_items {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod store_in_memory;
            }
        }
    }
    pub mod system {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
