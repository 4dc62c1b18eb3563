//! # idsvr-core
//!
//! Core error handling for the multi-tenant identity server.
//!
//! This crate provides the shared error taxonomy used across all other
//! identity server crates.
//!
//! ## NIST 800-53 Rev5 Controls
//!
//! - SI-11: Error handling
//! - IA-6: Authentication feedback

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;

pub use error::{Error, Result};
