//! # Compose Model
//!
//! The docker-compose document model and its derivation from a
//! `ProjectConfig`. Derivation is a pure function: the same project
//! configuration always yields the same document.

use crate::config::types::ProjectConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Build section of a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory the image is built from
    pub context: String,
}

/// One service entry in the rendered document.
///
/// Absent options and empty collections are skipped during serialization so
/// the template only sees the keys a service actually carries. The app
/// service builds from source; the db service runs a stock image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfig>,
    /// "host:container" port mappings
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub environment: BTreeMap<String, String>,
    /// Bind mounts and named volume mounts
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub volumes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub depends_on: Vec<String>,
}

/// Placeholder body of a named volume; renders as an empty definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSpec;

/// The whole docker-compose document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeConfig {
    pub services: BTreeMap<String, ComposeService>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub volumes: BTreeMap<String, VolumeSpec>,
}

impl ComposeConfig {
    /// Derives the full document from a project configuration.
    ///
    /// Callers run `ProjectConfig::validate` first; derivation never
    /// re-validates.
    pub fn from_project(config: &ProjectConfig) -> Self {
        let mut compose = ComposeConfig::default();

        compose
            .services
            .insert("app".to_string(), app_service(config));

        if let Some(db) = database_service(config) {
            compose.services.insert("db".to_string(), db);
            compose.volumes.insert("db-data".to_string(), VolumeSpec);
        }

        compose
    }
}

/// The application container: built from the working directory, published on
/// the framework's default port, with the source tree mounted at /app
fn app_service(config: &ProjectConfig) -> ComposeService {
    let port = config.framework_spec().default_port;
    let mut service = ComposeService {
        build: Some(BuildConfig {
            context: ".".to_string(),
        }),
        ports: vec![format!("{}:{}", port, port)],
        volumes: vec![".:/app".to_string()],
        ..ComposeService::default()
    };

    if config.database.is_enabled() {
        service.depends_on = vec!["db".to_string()];
        service.environment.insert(
            "DATABASE_URL".to_string(),
            config.database.connection_string(&config.project_name),
        );
    }

    service
}

/// The database container, present only when an engine was selected
fn database_service(config: &ProjectConfig) -> Option<ComposeService> {
    if !config.database.is_enabled() {
        return None;
    }

    Some(ComposeService {
        image: Some(config.database.image_name()),
        ports: vec![format!(
            "{}:{}",
            config.database.port,
            config.database.db_type.internal_port()
        )],
        environment: config.database.environment_vars(&config.project_name),
        volumes: vec![format!("db-data:{}", config.database.data_path())],
        ..ComposeService::default()
    })
}
