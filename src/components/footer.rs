use log::debug;
use time::OffsetDateTime;

use crate::utils::escape_html;

/// Component rendering the fixed site footer
pub struct FooterComponent {
    brand: String,
}

impl FooterComponent {
    /// Create a footer with the default brand
    pub fn new() -> Self {
        debug!("Creating new FooterComponent");
        Self {
            brand: "Marquee".to_string(),
        }
    }

    /// Render the footer region as an HTML fragment
    pub fn render(&self) -> String {
        let year = OffsetDateTime::now_utc().year();
        format!(
            "<footer class=\"page-footer\"><p>&copy; {} {}. All rights reserved.</p></footer>",
            year,
            escape_html(&self.brand)
        )
    }
}

impl Default for FooterComponent {
    fn default() -> Self {
        Self::new()
    }
}
