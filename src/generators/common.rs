//! Common utilities for document generation.
//!
//! Shared helpers for HTML escaping, template rendering, date formatting,
//! and download filenames.

use chrono::Local;
use std::path::Path;

/// Escape the five HTML-special characters to their entity equivalents.
///
/// Applied to every free-text value before it is interpolated into the
/// rendered layout, so client-supplied markup never reaches the converter.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
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

/// Format current local date as dd/mm/yyyy.
pub fn format_data_emissao() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Substitute `{{name}}` markers in a single pass over the template.
///
/// Substituted values are emitted verbatim and never rescanned, so markers
/// smuggled in through user input stay inert. Unknown markers are left
/// untouched.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match values.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(&after[..end]);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated marker, keep the rest as-is.
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Sanitize a client name for use in the download filename, preserving
/// case. Falls back when nothing survives sanitization.
pub fn sanitize_client_name(name: &str) -> String {
    let safe = sanitize_filename::sanitize(name.trim());
    if safe.is_empty() {
        "cliente".to_string()
    } else {
        safe
    }
}

/// Get the static assets directory path.
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}
