use log::debug;

use crate::utils::{escape_attr, escape_html};

/// A single navigation entry in the site header
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Component rendering the fixed site header
pub struct HeaderComponent {
    brand: String,
    links: Vec<NavLink>,
}

impl HeaderComponent {
    /// Create a header with the default brand and navigation entries
    pub fn new() -> Self {
        debug!("Creating new HeaderComponent");
        Self {
            brand: "Marquee".to_string(),
            links: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Preview", "/preview"),
            ],
        }
    }

    /// Render the header region as an HTML fragment
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<header class=\"page-header\">");
        html.push_str(&format!(
            "<a class=\"brand\" href=\"/\">{}</a>",
            escape_html(&self.brand)
        ));
        html.push_str("<nav class=\"site-nav\"><ul>");
        for link in &self.links {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape_attr(&link.href),
                escape_html(&link.label)
            ));
        }
        html.push_str("</ul></nav>");
        html.push_str("</header>");
        html
    }
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}
