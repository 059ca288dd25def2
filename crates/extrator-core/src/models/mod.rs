//! Data models: configuration and result records.

pub mod config;
pub mod record;
