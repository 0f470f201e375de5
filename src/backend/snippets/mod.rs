//! Snippets Module
//!
//! This module handles the snippet document store and its HTTP handlers.

pub mod handlers;
pub mod db;

pub use handlers::*;
