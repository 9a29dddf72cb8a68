pub mod categories;
pub mod exhibition;
pub mod gallery;
pub mod not_found;
pub mod visitors;
