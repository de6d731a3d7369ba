//! Core types for Hive Image.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order_ref;
pub mod status;

pub use id::*;
pub use order_ref::{OrderRef, OrderRefError};
pub use status::*;
