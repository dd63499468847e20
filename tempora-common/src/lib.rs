//! # Tempora Common Library
//!
//! Shared code for the Tempora heritage-tour services including:
//! - Tour and Era record types
//! - The Period enumeration
//! - Common error types
//! - Configuration loading and root folder resolution

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Era, Period, Tour};
