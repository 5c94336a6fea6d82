//! Static page builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chalkboard_menu::Menu;

use crate::stylesheet;
use crate::templates::PageTemplates;

/// Configuration for building the menu page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output file path
    pub output_path: PathBuf,

    /// Minify the inline stylesheet
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("dist/index.html"),
            minify: true,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of sections rendered
    pub sections: usize,

    /// Number of items rendered
    pub items: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output file path
    pub output_path: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to render page: {0}")]
    Template(String),

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Builds the static menu page.
pub struct PageBuilder {
    config: BuildConfig,
    templates: PageTemplates,
}

impl PageBuilder {
    /// Create a new page builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: PageTemplates::new(),
        }
    }

    /// Render the menu and write the page to the configured output path.
    ///
    /// Parent directories are created as needed; an existing file at the
    /// output path is overwritten. Rendering completes before any write, so
    /// a failed build leaves no partial output.
    pub fn build(&self, menu: &Menu) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let css = stylesheet::page_css();
        let css = if self.config.minify {
            match stylesheet::minify(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Failed to minify stylesheet: {}", e);
                    css
                }
            }
        } else {
            css
        };

        let html = self
            .templates
            .render(menu, &css)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        if let Some(parent) = self.config.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write {
                path: self.config.output_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        fs::write(&self.config.output_path, html).map_err(|e| BuildError::Write {
            path: self.config.output_path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(BuildResult {
            sections: menu.sections.len(),
            items: menu.sections.iter().map(|s| s.items.len()).sum(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_path: self.config.output_path.clone(),
        })
    }
}
