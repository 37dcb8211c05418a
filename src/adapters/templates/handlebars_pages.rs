//! Handlebars page renderer.
//!
//! Page templates are compiled into the binary and registered once at
//! startup. Each page template wraps itself in the shared `layout` partial.

use std::fmt;

use handlebars::{handlebars_helper, Handlebars};
use tracing::debug;

use crate::ports::{Page, PageRenderer, TemplateError};

/// Embedded page templates, by registered name.
const PAGE_TEMPLATES: [(&str, &str); 5] = [
    ("index", include_str!("../../../templates/index.hbs")),
    ("travel_plan", include_str!("../../../templates/travel_plan.hbs")),
    ("update_result", include_str!("../../../templates/update_result.hbs")),
    ("destination_info", include_str!("../../../templates/destination_info.hbs")),
    ("quick_ideas", include_str!("../../../templates/quick_ideas.hbs")),
];

const LAYOUT: &str = include_str!("../../../templates/layout.hbs");

handlebars_helper!(url_encode: |value: str| urlencoding::encode(value).into_owned());

/// Renders planner pages with Handlebars.
///
/// Strict mode is on, so a template referencing a field its page does not
/// provide fails to render instead of printing nothing.
pub struct HandlebarsPageRenderer {
    hbs: Handlebars<'static>,
}

impl HandlebarsPageRenderer {
    /// Create a renderer with the embedded templates.
    pub fn new() -> Result<Self, TemplateError> {
        Self::from_sources(PAGE_TEMPLATES)
    }

    /// Create a renderer from explicit `(name, source)` pairs.
    ///
    /// The `layout` partial and the `url_encode` helper are always registered.
    pub fn from_sources<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateError> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_helper("url_encode", Box::new(url_encode));
        hbs.register_partial("layout", LAYOUT)
            .map_err(|e| TemplateError::Invalid {
                template: "layout".to_string(),
                message: e.to_string(),
            })?;

        for (name, source) in templates {
            hbs.register_template_string(name, source)
                .map_err(|e| TemplateError::Invalid {
                    template: name.to_string(),
                    message: e.to_string(),
                })?;
            debug!(template = name, "Registered page template");
        }

        Ok(Self { hbs })
    }
}

impl fmt::Debug for HandlebarsPageRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut templates: Vec<_> = self.hbs.get_templates().keys().collect();
        templates.sort_unstable();
        f.debug_struct("HandlebarsPageRenderer")
            .field("templates", &templates)
            .finish_non_exhaustive()
    }
}

impl PageRenderer for HandlebarsPageRenderer {
    fn render(&self, page: &Page) -> Result<String, TemplateError> {
        let name = page.template_name();
        if !self.hbs.has_template(name) {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        self.hbs
            .render(name, page)
            .map_err(|e| TemplateError::Render {
                template: name.to_string(),
                message: e.to_string(),
            })
    }
}
