//! # Storefront
//!
//! Accounts, a product catalog, and the order-assembly pipeline that ties
//! them together.
//!
//! - **[model]**: plain data types ([`Account`](model::Account),
//!   [`Product`](model::Product), [`Order`](model::Order), ...).
//! - **[account_actor]**, **[catalog_actor]**: record actors owning accounts
//!   and products, reached through [`clients`].
//! - **[order_store]**: atomic order writes and the regrouping read path.
//! - **[assembly]**: placing and reading orders.
//! - **[lifecycle]**: starting and stopping everything, plus log setup.
//!
//! See `src/main.rs` for a walk through the whole flow.

pub mod account_actor;
pub mod assembly;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod ids;
pub mod lifecycle;
pub mod model;
pub mod order_store;
