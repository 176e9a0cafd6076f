use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use crate::types::PageContext;
use crate::utils::escape_attr;

const STYLE_LINK: &str = "<link rel=\"stylesheet\" href=\"/static/css/marquee.css\">";

/// Component composing full HTML documents from the shell template
///
/// The shell arranges a fixed header, a flexible main region, and a fixed
/// footer into a column filling the viewport. Composition always yields a
/// complete document: when the template file is unreadable the component
/// falls back to an inline shell carrying the same structure.
pub struct LayoutComponent {
    shell_template: PathBuf,
}

impl LayoutComponent {
    /// Create a layout component reading its shell from the given template path
    pub fn new(shell_template: PathBuf) -> Self {
        debug!("Creating new LayoutComponent with shell {:?}", shell_template);
        Self { shell_template }
    }

    /// Render the full document shell around a page context
    pub fn render_shell(&self, context: &PageContext) -> String {
        match fs::read_to_string(&self.shell_template) {
            Ok(base) => {
                let mut html = base;
                html = html.replace("{{TITLE}}", &escape_attr(&context.title));
                html = html.replace("{{STYLE}}", STYLE_LINK);
                html = html.replace("{{HEADER}}", &context.header);
                html = html.replace("{{CONTENT}}", &context.content);
                html = html.replace("{{FOOTER}}", &context.footer);
                html
            }
            Err(e) => {
                warn!(
                    "Failed to read shell template {:?}: {}, using inline shell",
                    self.shell_template, e
                );
                self.inline_shell(context)
            }
        }
    }

    /// Compose a complete page from a title and its three regions
    pub fn render_page(&self, title: &str, header: &str, content: &str, footer: &str) -> String {
        let context = PageContext {
            title: title.to_string(),
            header: header.to_string(),
            content: content.to_string(),
            footer: footer.to_string(),
        };
        self.render_shell(&context)
    }

    fn inline_shell(&self, context: &PageContext) -> String {
        format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title><style>.page{{display:flex;flex-direction:column;min-height:100vh}}.page-main{{flex:1}}</style></head><body><div class=\"page\">{}<main class=\"page-main\">{}</main>{}</div></body></html>",
            escape_attr(&context.title),
            context.header,
            context.content,
            context.footer
        )
    }
}
