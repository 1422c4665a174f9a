//! fc-roster core - Foundation crate for the fc-roster workspace.
//!
//! This crate provides the shared types, error handling, and configuration
//! management that the scraper and storage crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`FreeCompanyId`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, DirectoryConfig, ScrapingConfig, StorageConfig};
pub use error::{ConfigError, ConfigResult, Result, RosterError};
pub use types::FreeCompanyId;
