//! # Prompt Module
//!
//! The fixed question sequence the wizard drives, behind a trait so the flow
//! can run against a terminal in production and scripted answers in tests.

use crate::config::types::{DatabaseType, Framework};
use crate::error::PromptError;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::Path;

/// The questions a generation run can ask
pub trait UserPrompt {
    fn ask_project_name(&self) -> Result<String, PromptError>;
    fn ask_framework(&self) -> Result<Framework, PromptError>;
    fn ask_database(&self) -> Result<DatabaseType, PromptError>;
    fn ask_database_version(&self, db_type: DatabaseType) -> Result<String, PromptError>;
    fn ask_database_port(&self, db_type: DatabaseType) -> Result<String, PromptError>;
    fn ask_overwrite(&self, path: &Path) -> Result<bool, PromptError>;
}

/// Dialoguer-backed prompt provider
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        TerminalPrompt::new()
    }
}

impl UserPrompt for TerminalPrompt {
    fn ask_project_name(&self) -> Result<String, PromptError> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Project name")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("project name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok(name)
    }

    fn ask_framework(&self) -> Result<Framework, PromptError> {
        let items: Vec<&str> = Framework::ALL.iter().map(|f| f.display_name()).collect();

        let index = Select::with_theme(&self.theme)
            .with_prompt("Application framework")
            .items(&items)
            .default(0)
            .interact()?;

        Framework::ALL
            .get(index)
            .copied()
            .ok_or_else(|| PromptError::InvalidSelection(index.to_string()))
    }

    fn ask_database(&self) -> Result<DatabaseType, PromptError> {
        let items: Vec<&str> = DatabaseType::ALL.iter().map(|d| d.display_name()).collect();

        let index = Select::with_theme(&self.theme)
            .with_prompt("Database")
            .items(&items)
            .default(0)
            .interact()?;

        DatabaseType::ALL
            .get(index)
            .copied()
            .ok_or_else(|| PromptError::InvalidSelection(index.to_string()))
    }

    fn ask_database_version(&self, db_type: DatabaseType) -> Result<String, PromptError> {
        let version: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{} version", db_type.display_name()))
            .default(db_type.default_version().to_string())
            .allow_empty(true)
            .interact_text()?;

        Ok(version)
    }

    fn ask_database_port(&self, db_type: DatabaseType) -> Result<String, PromptError> {
        let port: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{} port", db_type.display_name()))
            .default(db_type.default_port().to_string())
            .allow_empty(true)
            .interact_text()?;

        Ok(port)
    }

    fn ask_overwrite(&self, path: &Path) -> Result<bool, PromptError> {
        let overwrite = Confirm::with_theme(&self.theme)
            .with_prompt(format!(
                "File '{}' already exists. Overwrite?",
                path.display()
            ))
            .default(false)
            .interact()?;

        Ok(overwrite)
    }
}
