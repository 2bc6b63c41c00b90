pub mod snapshot;
pub mod store;

pub use snapshot::Export;
pub use store::{next_id, Store};
