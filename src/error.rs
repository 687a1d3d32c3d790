use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeGenError {
    #[error("Invalid project configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error("Compose generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    #[error("Generation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("project name is required")]
    ProjectNameRequired,

    #[error("framework selection is required")]
    FrameworkRequired,
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("answer '{0}' does not match any known option")]
    InvalidSelection(String),

    #[error("interaction failed: {0}")]
    Interaction(#[from] dialoguer::Error),
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Template rendering failed: {0}")]
    TemplateRendering(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Configuration parsing failed: {0}")]
    ParsingFailed(String),
}

pub type Result<T> = std::result::Result<T, ComposeGenError>;
