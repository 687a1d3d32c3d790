use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Application frameworks the generator can scaffold a service for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    NextJs,
    Golang,
}

/// Derived, per-framework attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkSpec {
    /// Human-readable name shown in prompts and reports
    pub display_name: &'static str,
    /// Host and container port the app service is published on
    pub default_port: &'static str,
}

/// Attributes used when a framework has no table entry
pub const FALLBACK_FRAMEWORK_SPEC: FrameworkSpec = FrameworkSpec {
    display_name: "",
    default_port: "8080",
};

const FRAMEWORK_SPECS: &[(Framework, FrameworkSpec)] = &[
    (
        Framework::NextJs,
        FrameworkSpec {
            display_name: "Next.js",
            default_port: "3000",
        },
    ),
    (
        Framework::Golang,
        FrameworkSpec {
            display_name: "Golang",
            default_port: "8080",
        },
    ),
];

impl Framework {
    /// All selectable frameworks, in prompt order
    pub const ALL: [Framework; 2] = [Framework::NextJs, Framework::Golang];

    pub fn spec(self) -> &'static FrameworkSpec {
        FRAMEWORK_SPECS
            .iter()
            .find(|(framework, _)| *framework == self)
            .map(|(_, spec)| spec)
            .unwrap_or(&FALLBACK_FRAMEWORK_SPEC)
    }

    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }

    pub fn default_port(self) -> &'static str {
        self.spec().default_port
    }
}

/// Database engines the generator can add a service for; `None` disables
/// the database service entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    None,
    MySql,
    MariaDb,
    PostgreSql,
}

/// Derived, per-engine attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseSpec {
    /// Human-readable name shown in prompts and reports
    pub display_name: &'static str,
    /// Image tag used when no version is supplied
    pub default_version: &'static str,
    /// Host port used when no port is supplied; also the port the engine
    /// listens on inside the compose network
    pub default_port: &'static str,
    /// Registry repository the engine image comes from
    pub image_repo: &'static str,
    /// Container path the engine persists its data under
    pub data_path: &'static str,
    /// URL scheme of the engine's connection string
    pub scheme: &'static str,
    /// Stock superuser the connection string authenticates as
    pub user: &'static str,
    /// Environment variable carrying the superuser password
    pub password_env: &'static str,
    /// Environment variable naming the database to create at startup
    pub database_env: &'static str,
}

const DATABASE_SPECS: &[(DatabaseType, DatabaseSpec)] = &[
    (
        DatabaseType::MySql,
        DatabaseSpec {
            display_name: "MySQL",
            default_version: "8.0",
            default_port: "3306",
            image_repo: "mysql",
            data_path: "/var/lib/mysql",
            scheme: "mysql",
            user: "root",
            password_env: "MYSQL_ROOT_PASSWORD",
            database_env: "MYSQL_DATABASE",
        },
    ),
    (
        DatabaseType::MariaDb,
        DatabaseSpec {
            display_name: "MariaDB",
            default_version: "10.9",
            default_port: "3306",
            image_repo: "mariadb",
            data_path: "/var/lib/mysql",
            scheme: "mysql",
            user: "root",
            password_env: "MYSQL_ROOT_PASSWORD",
            database_env: "MYSQL_DATABASE",
        },
    ),
    (
        DatabaseType::PostgreSql,
        DatabaseSpec {
            display_name: "PostgreSQL",
            default_version: "15",
            default_port: "5432",
            image_repo: "postgres",
            data_path: "/var/lib/postgresql/data",
            scheme: "postgresql",
            user: "postgres",
            password_env: "POSTGRES_PASSWORD",
            database_env: "POSTGRES_DB",
        },
    ),
];

impl DatabaseType {
    /// All selectable database options, in prompt order
    pub const ALL: [DatabaseType; 4] = [
        DatabaseType::None,
        DatabaseType::MySql,
        DatabaseType::MariaDb,
        DatabaseType::PostgreSql,
    ];

    /// Table entry for a real engine; `None` has no entry and every derived
    /// accessor resolves to an empty value for it
    pub fn spec(self) -> Option<&'static DatabaseSpec> {
        DATABASE_SPECS
            .iter()
            .find(|(db_type, _)| *db_type == self)
            .map(|(_, spec)| spec)
    }

    pub fn display_name(self) -> &'static str {
        self.spec().map(|spec| spec.display_name).unwrap_or("None")
    }

    pub fn default_version(self) -> &'static str {
        self.spec().map(|spec| spec.default_version).unwrap_or("")
    }

    pub fn default_port(self) -> &'static str {
        self.spec().map(|spec| spec.default_port).unwrap_or("")
    }

    /// Port the engine listens on inside the compose network
    pub fn internal_port(self) -> &'static str {
        self.default_port()
    }
}

/// A database selection with its resolved version and host port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub db_type: DatabaseType,
    pub version: String,
    pub port: String,
}

impl Database {
    /// Builds a selection, filling an empty version or port from the engine
    /// defaults. Defaults are resolved here, once, and nowhere else.
    pub fn new(db_type: DatabaseType, version: impl Into<String>, port: impl Into<String>) -> Self {
        let mut version = version.into();
        let mut port = port.into();

        if version.is_empty() {
            version = db_type.default_version().to_string();
        }
        if port.is_empty() {
            port = db_type.default_port().to_string();
        }

        Database {
            db_type,
            version,
            port,
        }
    }

    /// The "no database" selection
    pub fn none() -> Self {
        Database::new(DatabaseType::None, "", "")
    }

    pub fn is_enabled(&self) -> bool {
        self.db_type != DatabaseType::None
    }

    /// Docker image reference, e.g. "postgres:15"
    pub fn image_name(&self) -> String {
        self.db_type
            .spec()
            .map(|spec| format!("{}:{}", spec.image_repo, self.version))
            .unwrap_or_default()
    }

    /// Connection URL the app service reaches the engine with. Credentials
    /// are the engine's stock superuser with the password "password"; the
    /// chosen host port is irrelevant here because the app connects over the
    /// compose network to the internal port.
    pub fn connection_string(&self, project_name: &str) -> String {
        self.db_type
            .spec()
            .map(|spec| {
                format!(
                    "{}://{}:password@db:{}/{}",
                    spec.scheme,
                    spec.user,
                    self.db_type.internal_port(),
                    project_name
                )
            })
            .unwrap_or_default()
    }

    /// Environment variables the engine container needs at startup
    pub fn environment_vars(&self, project_name: &str) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();

        if let Some(spec) = self.db_type.spec() {
            env.insert(spec.password_env.to_string(), "password".to_string());
            env.insert(spec.database_env.to_string(), project_name.to_string());
        }

        env
    }

    /// Container path the engine persists its data under
    pub fn data_path(&self) -> &'static str {
        self.db_type.spec().map(|spec| spec.data_path).unwrap_or("")
    }
}

/// Everything the wizard collects about a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub framework: Option<Framework>,
    pub database: Database,
}

impl ProjectConfig {
    pub fn new(
        project_name: impl Into<String>,
        framework: Option<Framework>,
        database: Database,
    ) -> Self {
        ProjectConfig {
            project_name: project_name.into(),
            framework,
            database,
        }
    }

    /// Checks the collected answers before any derivation or file IO. The
    /// database is never validated here; it is well-formed by construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.is_empty() {
            return Err(ValidationError::ProjectNameRequired);
        }
        if self.framework.is_none() {
            return Err(ValidationError::FrameworkRequired);
        }
        Ok(())
    }

    /// Attributes of the selected framework; an unset framework resolves to
    /// the fallback table entry
    pub fn framework_spec(&self) -> &'static FrameworkSpec {
        self.framework
            .map(Framework::spec)
            .unwrap_or(&FALLBACK_FRAMEWORK_SPEC)
    }
}
