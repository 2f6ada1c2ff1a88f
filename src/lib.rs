//! KeepNote library
//!
//! Core functionality of the KeepNote web application, exposed for the
//! integration tests.

pub mod config;
pub mod database;
pub mod error;
pub mod http;
pub mod services;
