//! Site chrome shared by every page.

pub mod footer;
pub mod hero;
pub mod navbar;
