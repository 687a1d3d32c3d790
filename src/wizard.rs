//! # Wizard Module
//!
//! The interactive generation flow: ask the fixed question sequence, build
//! and validate the project configuration, guard against overwriting an
//! existing file, then derive, render, and write the compose document.
//!
//! Nothing touches the filesystem before the final write, so an aborted run
//! leaves no partial state behind. The existence check and the write are not
//! atomic; a file appearing in between is an accepted limitation.

use crate::common::file_utils::FileStore;
use crate::compose::ComposeConfig;
use crate::config::types::{Database, DatabaseType, ProjectConfig};
use crate::error::{ComposeGenError, Result};
use crate::generator::ComposeRenderer;
use crate::prompt::UserPrompt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Output file when neither the CLI nor the config file names one
pub const DEFAULT_OUTPUT_PATH: &str = "docker-compose.yml";

/// Shared flag that aborts the flow at the next stage boundary
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        CancelFlag::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Caller-supplied knobs for one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Output path; `DEFAULT_OUTPUT_PATH` when absent
    pub output_path: Option<PathBuf>,
    /// Overwrite an existing file without asking
    pub force: bool,
    /// Render without touching the filesystem
    pub dry_run: bool,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub path: PathBuf,
    pub config: ProjectConfig,
    pub content: String,
    pub written: bool,
}

/// Sequences the prompts and collaborators for one generation run
pub struct GenerateWizard<'a, P, F, R> {
    prompt: &'a P,
    files: &'a F,
    renderer: &'a R,
    cancel: CancelFlag,
}

impl<'a, P, F, R> GenerateWizard<'a, P, F, R>
where
    P: UserPrompt,
    F: FileStore,
    R: ComposeRenderer,
{
    pub fn new(prompt: &'a P, files: &'a F, renderer: &'a R) -> Self {
        GenerateWizard {
            prompt,
            files,
            renderer,
            cancel: CancelFlag::new(),
        }
    }

    /// Installs a cancellation flag checked between stages
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Runs the whole flow. Every stage failure aborts the run as-is; no
    /// stage is retried.
    pub fn run(&self, request: &GenerateRequest) -> Result<GenerateOutcome> {
        self.checkpoint()?;
        let project_name = self.prompt.ask_project_name()?;

        self.checkpoint()?;
        let framework = self.prompt.ask_framework()?;

        self.checkpoint()?;
        let db_type = self.prompt.ask_database()?;

        // Version and port are only worth asking for a real engine.
        let database = if db_type == DatabaseType::None {
            Database::none()
        } else {
            self.checkpoint()?;
            let version = self.prompt.ask_database_version(db_type)?;
            let port = self.prompt.ask_database_port(db_type)?;
            Database::new(db_type, version, port)
        };

        let config = ProjectConfig::new(project_name, Some(framework), database);
        config.validate()?;
        log::debug!("collected project configuration: {:?}", config);

        let path = request
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        self.checkpoint()?;
        if !request.dry_run && !request.force && self.files.exists(&path)? {
            if !self.prompt.ask_overwrite(&path)? {
                return Err(ComposeGenError::FileAlreadyExists(path));
            }
        }

        self.checkpoint()?;
        let compose = ComposeConfig::from_project(&config);
        let content = self.renderer.generate(&compose)?;

        let written = if request.dry_run {
            false
        } else {
            self.files.write(&path, &content)?;
            true
        };

        Ok(GenerateOutcome {
            path,
            config,
            content,
            written,
        })
    }

    fn checkpoint(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(ComposeGenError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Framework;
    use crate::error::{GeneratorError, PromptError, ValidationError};
    use std::cell::RefCell;
    use std::io;
    use std::path::Path;
    // Shadows the crate-level Result alias; the mock impls below name their
    // error types explicitly.
    use std::result::Result;

    struct ScriptedPrompt {
        name: &'static str,
        framework: Framework,
        db_type: DatabaseType,
        version: &'static str,
        port: &'static str,
        overwrite: bool,
        asked: RefCell<Vec<&'static str>>,
    }

    impl ScriptedPrompt {
        fn new(name: &'static str, framework: Framework, db_type: DatabaseType) -> Self {
            ScriptedPrompt {
                name,
                framework,
                db_type,
                version: "",
                port: "",
                overwrite: false,
                asked: RefCell::new(Vec::new()),
            }
        }

        fn questions(&self) -> Vec<&'static str> {
            self.asked.borrow().clone()
        }
    }

    impl UserPrompt for ScriptedPrompt {
        fn ask_project_name(&self) -> Result<String, PromptError> {
            self.asked.borrow_mut().push("name");
            Ok(self.name.to_string())
        }

        fn ask_framework(&self) -> Result<Framework, PromptError> {
            self.asked.borrow_mut().push("framework");
            Ok(self.framework)
        }

        fn ask_database(&self) -> Result<DatabaseType, PromptError> {
            self.asked.borrow_mut().push("database");
            Ok(self.db_type)
        }

        fn ask_database_version(&self, _db_type: DatabaseType) -> Result<String, PromptError> {
            self.asked.borrow_mut().push("version");
            Ok(self.version.to_string())
        }

        fn ask_database_port(&self, _db_type: DatabaseType) -> Result<String, PromptError> {
            self.asked.borrow_mut().push("port");
            Ok(self.port.to_string())
        }

        fn ask_overwrite(&self, _path: &Path) -> Result<bool, PromptError> {
            self.asked.borrow_mut().push("overwrite");
            Ok(self.overwrite)
        }
    }

    struct MemoryFileStore {
        existing: bool,
        written: RefCell<Option<(PathBuf, String)>>,
    }

    impl MemoryFileStore {
        fn empty() -> Self {
            MemoryFileStore {
                existing: false,
                written: RefCell::new(None),
            }
        }

        fn occupied() -> Self {
            MemoryFileStore {
                existing: true,
                written: RefCell::new(None),
            }
        }
    }

    impl FileStore for MemoryFileStore {
        fn exists(&self, _path: &Path) -> io::Result<bool> {
            Ok(self.existing)
        }

        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            *self.written.borrow_mut() = Some((path.to_path_buf(), contents.to_string()));
            Ok(())
        }
    }

    struct StaticRenderer;

    impl ComposeRenderer for StaticRenderer {
        fn generate(&self, _compose: &ComposeConfig) -> Result<String, GeneratorError> {
            Ok("services: {}\n".to_string())
        }
    }

    #[test]
    fn test_happy_path_writes_default_output() {
        let prompt = ScriptedPrompt::new("myapp", Framework::Golang, DatabaseType::None);
        let files = MemoryFileStore::empty();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let outcome = wizard.run(&GenerateRequest::default()).unwrap();

        assert_eq!(outcome.path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(outcome.written);
        assert_eq!(outcome.config.project_name, "myapp");
        assert_eq!(outcome.config.framework, Some(Framework::Golang));

        let written = files.written.borrow();
        let (path, contents) = written.as_ref().unwrap();
        assert_eq!(path, &PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(contents, "services: {}\n");
    }

    #[test]
    fn test_none_database_skips_version_and_port() {
        let prompt = ScriptedPrompt::new("myapp", Framework::NextJs, DatabaseType::None);
        let files = MemoryFileStore::empty();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        wizard.run(&GenerateRequest::default()).unwrap();

        assert_eq!(prompt.questions(), vec!["name", "framework", "database"]);
    }

    #[test]
    fn test_real_database_asks_version_then_port() {
        let prompt = ScriptedPrompt::new("shop", Framework::NextJs, DatabaseType::PostgreSql);
        let files = MemoryFileStore::empty();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let outcome = wizard.run(&GenerateRequest::default()).unwrap();

        assert_eq!(
            prompt.questions(),
            vec!["name", "framework", "database", "version", "port"]
        );
        // Empty answers resolve to the engine defaults at construction.
        assert_eq!(outcome.config.database.version, "15");
        assert_eq!(outcome.config.database.port, "5432");
    }

    #[test]
    fn test_declined_overwrite_aborts_without_writing() {
        let prompt = ScriptedPrompt::new("myapp", Framework::Golang, DatabaseType::None);
        let files = MemoryFileStore::occupied();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let err = wizard.run(&GenerateRequest::default()).unwrap_err();

        assert!(matches!(err, ComposeGenError::FileAlreadyExists(_)));
        assert!(files.written.borrow().is_none());
        assert!(prompt.questions().contains(&"overwrite"));
    }

    #[test]
    fn test_accepted_overwrite_writes() {
        let mut prompt = ScriptedPrompt::new("myapp", Framework::Golang, DatabaseType::None);
        prompt.overwrite = true;
        let files = MemoryFileStore::occupied();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let outcome = wizard.run(&GenerateRequest::default()).unwrap();

        assert!(outcome.written);
        assert!(files.written.borrow().is_some());
    }

    #[test]
    fn test_force_skips_overwrite_question() {
        let prompt = ScriptedPrompt::new("myapp", Framework::Golang, DatabaseType::None);
        let files = MemoryFileStore::occupied();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let request = GenerateRequest {
            force: true,
            ..GenerateRequest::default()
        };
        let outcome = wizard.run(&request).unwrap();

        assert!(outcome.written);
        assert!(!prompt.questions().contains(&"overwrite"));
    }

    #[test]
    fn test_empty_project_name_fails_validation() {
        let prompt = ScriptedPrompt::new("", Framework::Golang, DatabaseType::None);
        let files = MemoryFileStore::empty();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let err = wizard.run(&GenerateRequest::default()).unwrap_err();

        assert!(matches!(
            err,
            ComposeGenError::Validation(ValidationError::ProjectNameRequired)
        ));
        assert!(files.written.borrow().is_none());
    }

    #[test]
    fn test_dry_run_never_writes() {
        let prompt = ScriptedPrompt::new("myapp", Framework::Golang, DatabaseType::None);
        let files = MemoryFileStore::occupied();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let request = GenerateRequest {
            dry_run: true,
            ..GenerateRequest::default()
        };
        let outcome = wizard.run(&request).unwrap();

        assert!(!outcome.written);
        assert_eq!(outcome.content, "services: {}\n");
        assert!(files.written.borrow().is_none());
        assert!(!prompt.questions().contains(&"overwrite"));
    }

    #[test]
    fn test_custom_output_path_is_used() {
        let prompt = ScriptedPrompt::new("myapp", Framework::Golang, DatabaseType::None);
        let files = MemoryFileStore::empty();
        let wizard = GenerateWizard::new(&prompt, &files, &StaticRenderer);

        let request = GenerateRequest {
            output_path: Some(PathBuf::from("deploy/docker-compose.yml")),
            ..GenerateRequest::default()
        };
        let outcome = wizard.run(&request).unwrap();

        assert_eq!(outcome.path, PathBuf::from("deploy/docker-compose.yml"));
        let written = files.written.borrow();
        assert_eq!(
            written.as_ref().unwrap().0,
            PathBuf::from("deploy/docker-compose.yml")
        );
    }

    #[test]
    fn test_cancelled_flag_aborts_before_first_question() {
        let prompt = ScriptedPrompt::new("myapp", Framework::Golang, DatabaseType::None);
        let files = MemoryFileStore::empty();
        let cancel = CancelFlag::new();
        cancel.cancel();
        let wizard =
            GenerateWizard::new(&prompt, &files, &StaticRenderer).with_cancel_flag(cancel);

        let err = wizard.run(&GenerateRequest::default()).unwrap_err();

        assert!(matches!(err, ComposeGenError::Cancelled));
        assert!(prompt.questions().is_empty());
        assert!(files.written.borrow().is_none());
    }
}
