//! Hive Image Core - Shared types library.
//!
//! This crate provides common types used across all Hive Image components:
//! - `storefront` - Public-facing e-commerce site
//! - `cli` - Command-line tools for catalog inspection and smoke tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, order references, and
//!   statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
