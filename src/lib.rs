//! Task REST API Library
//!
//! This module exports the core components for testing and integration.

pub mod cli;
pub mod db;
pub mod error;
pub mod server;
pub mod types;
