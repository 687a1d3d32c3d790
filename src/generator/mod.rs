use crate::compose::ComposeConfig;
use crate::error::{GeneratorError, Result};

pub mod compose_gen;
pub mod templates;

pub use compose_gen::TeraRenderer;

/// Renders a derived compose document to YAML text
pub trait ComposeRenderer {
    fn generate(&self, compose: &ComposeConfig) -> std::result::Result<String, GeneratorError>;
}

/// Generate a Docker Compose file from a derived compose document
pub fn generate_compose(compose: &ComposeConfig) -> Result<String> {
    let renderer = TeraRenderer::new()?;
    Ok(renderer.generate(compose)?)
}
