use crate::compose::ComposeConfig;
use crate::error::GeneratorError;
use crate::generator::{templates, ComposeRenderer};
use tera::Tera;

/// Registered name of the compose template
const TEMPLATE_NAME: &str = "docker-compose.yml";

/// Template-based renderer over the embedded compose template
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    pub fn new() -> Result<Self, GeneratorError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, templates::DOCKER_COMPOSE)
            .map_err(|e| GeneratorError::TemplateRendering(e.to_string()))?;
        Ok(TeraRenderer { tera })
    }
}

impl ComposeRenderer for TeraRenderer {
    fn generate(&self, compose: &ComposeConfig) -> Result<String, GeneratorError> {
        let context = tera::Context::from_serialize(compose)
            .map_err(|e| GeneratorError::TemplateRendering(e.to_string()))?;

        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| match e.kind {
                tera::ErrorKind::TemplateNotFound(name) => GeneratorError::TemplateNotFound(name),
                _ => GeneratorError::TemplateRendering(e.to_string()),
            })
    }
}
