//! Contacts → BBDB conversion: field schema, contact sources, line decoding
//! and BBDB record rendering.

pub mod api;
pub mod bbdb;
pub mod config;
pub mod convert;
pub mod error;
pub mod record;
pub mod schema;
pub mod source;
