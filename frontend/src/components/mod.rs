pub mod carousel;
pub mod registration;
