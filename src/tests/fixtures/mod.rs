pub mod clock;
pub mod orders;
