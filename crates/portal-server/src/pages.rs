//! Page template loading and rendering via `minijinja`.
//!
//! Templates are loaded from the filesystem (default: `templates/`
//! directory) so pages can be restyled without recompiling. Template
//! names keep their `.html` suffix, which switches on `minijinja`'s
//! default HTML auto-escaping for every interpolated upstream string.

use minijinja::Environment;

use crate::error::PortalError;

/// Every template the engine loads at startup. A missing or unreadable
/// file fails construction rather than the first request that needs it.
const TEMPLATE_NAMES: [&str; 6] = [
    "base.html",
    "characters.html",
    "episodes.html",
    "episode.html",
    "locations.html",
    "location.html",
];

/// Manages page template loading and rendering.
///
/// Wraps a `minijinja` [`Environment`] with all page templates
/// pre-loaded. Templates can be edited on disk and are picked up on the
/// next call to [`PageEngine::new`].
pub struct PageEngine {
    env: Environment<'static>,
}

impl PageEngine {
    /// Create a new page engine loading templates from the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Render`] if any template file cannot be read
    /// or fails to compile.
    pub fn new(templates_dir: &str) -> Result<Self, PortalError> {
        let mut env = Environment::new();

        for name in TEMPLATE_NAMES {
            let source = load_template(templates_dir, name)?;
            env.add_template_owned(name, source)
                .map_err(|e| PortalError::Render(format!("failed to add template {name}: {e}")))?;
        }

        Ok(Self { env })
    }

    /// Render the named template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Render`] if the template is missing or
    /// rendering fails.
    pub fn render(&self, name: &str, context: serde_json::Value) -> Result<String, PortalError> {
        self.env
            .get_template(name)
            .map_err(|e| PortalError::Render(format!("missing template {name}: {e}")))?
            .render(context)
            .map_err(|e| PortalError::Render(format!("{name} render failed: {e}")))
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, filename: &str) -> Result<String, PortalError> {
    let path = format!("{dir}/{filename}");
    std::fs::read_to_string(&path)
        .map_err(|e| PortalError::Render(format!("failed to read {path}: {e}")))
}
