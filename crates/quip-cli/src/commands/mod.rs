//! CLI command handlers

pub mod config;
pub mod favorite;
pub mod quote;
pub mod share;
pub mod theme;
