//! HTTP request handlers.

pub mod auth_handler;
