//! Typed clients over the record actors.

pub mod account_client;
pub mod product_client;

pub use account_client::AccountClient;
pub use product_client::ProductClient;
