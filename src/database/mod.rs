/// Subscription record types and the persisted document layout
pub mod models;
/// File-backed subscription store
pub mod store;
