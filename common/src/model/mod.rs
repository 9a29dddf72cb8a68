pub mod category;
pub mod registration;
