//! Sale/inventory reconciliation engine for the Coffee UrbanTech point of sale
//!
//! The rules that keep the sales register, the purchase log, and the
//! inventory ledger consistent with each other. The engine is an
//! in-process, fully synchronous library: the presentation layer calls in
//! from its event handlers and renders whatever it reads back. Committed
//! records hold value snapshots, never references into the ledger, so
//! history does not rewrite itself when products change.

pub mod cart;
pub mod committer;
pub mod config;
pub mod error;
pub mod ledger;
pub mod report;
pub mod reversal;
pub mod store;

pub use cart::Cart;
pub use committer::PurchaseInput;
pub use config::PosConfig;
pub use error::{ErrorDetail, PosError, PosResult};
pub use ledger::{Ledger, NewProduct, ProductUpdate};
pub use report::{ActivityEntry, ActivityKind, Summary};
pub use store::PosStore;
