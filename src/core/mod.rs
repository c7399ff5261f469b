//! core
//!
//! Domain types and configuration for Grove.
//!
//! # Modules
//!
//! - [`types`] - Service, Repo, Scratchpad, and the Target trait
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Entities are read-only for the lifetime of a resolution call
//! - Repos are constructed on demand and never cached across calls
//! - Collaborators are passed in explicitly; no global state

pub mod config;
pub mod types;

pub use config::{Config, ConfigError};
pub use types::{Repo, Scratchpad, Service, Target};
