//! HTML rendering of a trail
//!
//! Every crumb but the last is a link followed by the separator; the last
//! crumb is the current page and is written as plain text.

use breadcrumb_trail::Trail;

use crate::config::RenderConfig;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_html(trail: &Trail, config: &RenderConfig) -> String {
    let tag = &config.wrapper_tag;
    let last = trail.count().saturating_sub(1);

    let mut out = format!("<{tag}>");

    for (index, item) in trail.iter().enumerate() {
        let title = escape_html(config.title_of(item));

        if index == last {
            out.push_str(&title);
        } else {
            out.push_str("<a href=\"");
            out.push_str(&escape_html(item.url()));
            out.push_str("\">");
            out.push_str(&title);
            out.push_str("</a>");
            out.push_str(&config.separator);
            out.push_str("\n  ");
        }
    }

    out.push_str(&format!("</{tag}>\n"));

    tracing::debug!(items = trail.count(), bytes = out.len(), "Rendered breadcrumb trail");

    out
}
