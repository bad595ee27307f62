//! Roleorder Client
//!
//! Decides what happens when a role is dragged in the server settings role
//! list, and hands accepted orderings to a role store.

pub mod config;
pub mod observability;
pub mod permissions;
pub mod scenario;
pub mod service;
pub mod store;

pub use permissions::Decision;
pub use service::RoleOrderingService;
