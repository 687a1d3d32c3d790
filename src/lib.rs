//! # compose-gen
//!
//! An interactive command-line generator that scaffolds a
//! `docker-compose.yml` by asking a short, fixed sequence of questions:
//! project name, application framework, and an optional database with its
//! version and port.
//!
//! ## Features
//!
//! - **Guided setup**: a linear prompt flow with sensible defaults for every
//!   database engine
//! - **Deterministic derivation**: the same answers always produce the same
//!   compose document
//! - **Overwrite guard**: an existing file is never replaced without
//!   confirmation (or an explicit `--force`)
//! - **Template rendering**: the document is rendered from a single embedded
//!   template
//!
//! ## Example
//!
//! ```rust
//! use compose_gen::{ComposeConfig, Database, DatabaseType, Framework, ProjectConfig};
//!
//! let database = Database::new(DatabaseType::PostgreSql, "", "");
//! let config = ProjectConfig::new("shop", Some(Framework::NextJs), database);
//! config.validate()?;
//!
//! let compose = ComposeConfig::from_project(&config);
//! assert!(compose.services.contains_key("db"));
//! # Ok::<(), compose_gen::ComposeGenError>(())
//! ```

pub mod cli;
pub mod common;
pub mod compose;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod wizard;

// Re-export commonly used types and functions
pub use compose::{ComposeConfig, ComposeService};
pub use config::types::{Database, DatabaseType, Framework, ProjectConfig};
pub use error::{ComposeGenError, Result};
pub use generator::generate_compose;
pub use wizard::{CancelFlag, GenerateRequest, GenerateWizard};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
