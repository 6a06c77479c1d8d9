pub mod event_ops;
pub mod guest_ops;
pub mod membership_ops;
pub mod query_ops;
pub mod store;

pub use store::Store;
