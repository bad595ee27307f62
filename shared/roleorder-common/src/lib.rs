//! Roleorder Common Library
//!
//! Snapshot types shared by the role ordering client and its tooling.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
