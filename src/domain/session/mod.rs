//! Session aggregate: the persisted record, its resolved in-memory form,
//! the patch-based mutation path and startup reconciliation.

pub mod reconcile;
pub mod repository;
pub mod service;
pub mod state;

pub use reconcile::*;
pub use repository::*;
pub use service::*;
pub use state::*;
