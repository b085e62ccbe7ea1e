pub mod factory;
pub mod source;
