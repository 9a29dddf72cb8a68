//! Shared domain logic for the IGTF site.
//!
//! Everything here is target independent so it can be exercised by native
//! tests and reused by the wasm frontend:
//!
//! - `model`: category data and the registration form models.
//! - `carousel`: circular positioning math and the carousel state owner.
//! - `submission`: the registration submission status machine and the
//!   resolution of HTTP responses into user-visible outcomes.
//! - `config`: API endpoint configuration.

pub mod carousel;
pub mod config;
pub mod model;
pub mod submission;
