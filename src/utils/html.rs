/// Escape HTML special characters in element text
pub fn escape_html(text: &str) -> String {
    text.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
}

/// Escape HTML attribute values (quotes included)
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
        .replace("\"", "&quot;")
        .replace("'", "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_element_text() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn attribute_escape_also_covers_quotes() {
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
