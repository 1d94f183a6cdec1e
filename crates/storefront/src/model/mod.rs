//! Pure data structures shared by the record actors, the order store and the
//! assembly service.

pub mod account;
pub mod id;
pub mod order;
pub mod page;
pub mod product;

pub use account::*;
pub use id::*;
pub use order::*;
pub use page::*;
pub use product::*;
