//! Popup and tooltip content for rendered features.

use crate::feature::Feature;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Click popup for a point feature: name, category, description.
pub fn popup_html(feature: &Feature) -> String {
    let name = feature.name().unwrap_or("Unknown");
    let category = feature.category().unwrap_or("Uncategorized");
    let desc = feature.description().unwrap_or("");
    format!(
        r#"<div style="min-width:220px"><div style="font-weight:800;margin-bottom:6px">{}</div><div style="color:#60708f;margin-bottom:8px">{}</div><div>{}</div></div>"#,
        escape_html(name),
        escape_html(category),
        escape_html(desc),
    )
}

/// Click popup for a boundary feature.
pub fn boundary_popup_html(feature: &Feature) -> String {
    let name = feature.name().unwrap_or("Area");
    let desc = feature.description().unwrap_or("");
    format!(
        r#"<div style="min-width:220px"><div style="font-weight:800;margin-bottom:6px">{}</div><div>{}</div></div>"#,
        escape_html(name),
        escape_html(desc),
    )
}

/// Hover label for a point feature. Plain text, not escaped.
pub fn tooltip(feature: &Feature) -> &str {
    feature.name().unwrap_or("Location")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::point;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn popup_uses_defaults_for_missing_properties() {
        let html = popup_html(&point(None, None, 0.0, 0.0));
        assert!(html.contains(">Unknown<"));
        assert!(html.contains(">Uncategorized<"));
        assert!(html.ends_with("<div></div></div>"));
    }

    #[test]
    fn popup_escapes_values() {
        let html = popup_html(&point(Some("<script>"), Some("Study"), 0.0, 0.0));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(">Study<"));
    }

    #[test]
    fn boundary_and_tooltip_defaults() {
        let f = point(None, None, 0.0, 0.0);
        assert!(boundary_popup_html(&f).contains(">Area<"));
        assert_eq!(tooltip(&f), "Location");
        assert_eq!(tooltip(&point(Some("Gym"), None, 0.0, 0.0)), "Gym");
    }
}
