// Composition root for the fulfillment service.
//
// Responsibilities
// - Build the shared application state around one store instance.
// - Expose the HTTP and GraphQL routers.
// - Load seed orders at boot.

pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
