//! Views Module
//!
//! HTML pages are rendered with `minijinja` from templates loaded out of the
//! configured template directory (`templates/` by default). Every page
//! receives a `title` and the optional `current_user` of the request; handlers
//! add their own values on top.
//!
//! Templates are looked up on each render, so a missing template surfaces as a
//! `BackendError::Template` for that request only.
//!
//! # Example
//!
//! ```rust,no_run
//! use techtalk::backend::views::Templates;
//! use minijinja::context;
//!
//! # fn example() -> Result<(), techtalk::backend::error::BackendError> {
//! let templates = Templates::from_dir("templates");
//! let page = templates.render("about.html", context! { title => "About", current_user => () })?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use axum::response::Html;
use minijinja::{path_loader, Environment, Value};

use crate::backend::error::BackendError;

/// Shared template environment
#[derive(Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    /// Load templates lazily from a directory
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        tracing::info!("Loading templates from {}", dir.display());

        let mut env = Environment::new();
        env.set_loader(path_loader(dir));

        Self { env: Arc::new(env) }
    }

    /// Render a template into an HTML response body
    pub fn render(&self, name: &str, ctx: Value) -> Result<Html<String>, BackendError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(ctx)?))
    }
}
