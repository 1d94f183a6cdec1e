//! # System Lifecycle
//!
//! Starting, wiring and stopping the whole storefront.
//!
//! [`StorefrontSystem::start`] brings the pieces up in dependency order:
//!
//! 1. the account and catalog actors, each in its own task;
//! 2. the order store, connected and migrated;
//! 3. the [`OrderAssembly`](crate::assembly::OrderAssembly) service, holding
//!    clones of the two clients as its resolvers and the store as its
//!    persister.
//!
//! [`StorefrontSystem::shutdown`] drops every client (including the
//! assembly's clones), closes the store pool and waits for the actor tasks.
//! An actor exits when the last clone of its client is gone, so clients
//! cloned out of the system must be dropped before shutdown completes.
//!
//! [`setup_tracing`] installs the log subscriber:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and placed orders
//! RUST_LOG=debug cargo run    # request payloads
//! ```

pub mod system;
pub mod tracing;

pub use self::tracing::*;
pub use system::*;
