//! HTTP services of the site server.
//!
//! The registration API is hosted elsewhere; this server only ships the
//! frontend bundle.

pub mod assets;
