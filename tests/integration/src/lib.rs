//! End-to-end router tests for the multi-tenant identity server.
//!
//! The tests live under `tests/`; this crate has no library surface.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
