//! Human-readable preview of a payload
//!
//! The same table backs the terminal dialog and the HTML copy. Values are
//! escaped for whichever surface they end up on.

use super::payload::SubmissionPayload;

/// Shown for values that were left empty
pub const PLACEHOLDER: &str = "(not provided)";

/// One label/value line of the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub label: &'static str,
    /// `None` renders as [`PLACEHOLDER`]
    pub value: Option<String>,
}

impl PreviewRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label,
            value: if value.is_empty() { None } else { Some(value) },
        }
    }

    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// Ordered rows describing a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTable {
    pub rows: Vec<PreviewRow>,
}

impl PreviewTable {
    pub fn from_payload(payload: &SubmissionPayload) -> Self {
        let changes = if payload.changes.is_empty() {
            "No changes."
        } else {
            payload.changes.as_str()
        };
        let files = if payload.files.is_empty() {
            "(no files)".to_string()
        } else {
            payload
                .files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let confirmed = if payload.agree {
            "I agree"
        } else {
            "Not confirmed"
        };

        Self {
            rows: vec![
                PreviewRow::new("Organization Name", payload.org_name.as_str()),
                PreviewRow::new("Reviewed the Summary?", payload.reviewed.label()),
                PreviewRow::new("Changes (if any)", changes),
                PreviewRow::new("Type of change (optional)", payload.change_type.as_str()),
                PreviewRow::new("Uploaded files", files),
                PreviewRow::new("Confirmed accuracy", confirmed),
                PreviewRow::new("Signature (Full name)", payload.full_name.as_str()),
                PreviewRow::new("Submitted at", payload.submitted_at.as_str()),
            ],
        }
    }

    /// Render as an HTML table with every label and value escaped
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"preview\">\n");
        for row in &self.rows {
            let value = match &row.value {
                Some(v) => escape_html(v),
                None => format!("<span class=\"placeholder\">{PLACEHOLDER}</span>"),
            };
            html.push_str(&format!(
                "  <tr><th class=\"preview-label\">{}</th>\
                 <td class=\"preview-value\">{}</td></tr>\n",
                escape_html(row.label),
                value
            ));
        }
        html.push_str("</table>\n");
        html
    }
}

/// Escape the characters that can open markup or break out of an attribute
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drop control characters (escape sequences included) before drawing user text.
/// Newlines and tabs survive.
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::attachment::Attachment;
    use crate::state::forms::Reviewed;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            org_name: "Acme".to_string(),
            reviewed: Reviewed::Yes,
            changes: String::new(),
            change_type: String::new(),
            agree: true,
            full_name: "J. Smith".to_string(),
            files: Vec::new(),
            submitted_at: "2026-10-16T09:30:05.000Z".to_string(),
        }
    }

    #[test]
    fn test_rows_and_defaults() {
        let table = PreviewTable::from_payload(&payload());
        let values: Vec<(&str, &str)> = table
            .rows
            .iter()
            .map(|r| (r.label, r.display_value()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Organization Name", "Acme"),
                ("Reviewed the Summary?", "Yes"),
                ("Changes (if any)", "No changes."),
                ("Type of change (optional)", PLACEHOLDER),
                ("Uploaded files", "(no files)"),
                ("Confirmed accuracy", "I agree"),
                ("Signature (Full name)", "J. Smith"),
                ("Submitted at", "2026-10-16T09:30:05.000Z"),
            ]
        );
    }

    #[test]
    fn test_empty_values_use_placeholder() {
        let mut p = payload();
        p.org_name.clear();
        p.reviewed = Reviewed::Unset;
        let table = PreviewTable::from_payload(&p);
        assert_eq!(table.rows[0].value, None);
        assert_eq!(table.rows[1].display_value(), PLACEHOLDER);
    }

    #[test]
    fn test_file_names_joined() {
        let mut p = payload();
        p.files = vec![
            Attachment::new(Path::new("a.pdf"), 1),
            Attachment::new(Path::new("b.png"), 2),
        ];
        let table = PreviewTable::from_payload(&p);
        assert_eq!(table.rows[4].display_value(), "a.pdf, b.png");
    }

    #[test]
    fn test_html_escapes_every_value() {
        let mut p = payload();
        p.org_name = "<script>alert(\"x\")</script> & co".to_string();
        let html = PreviewTable::from_payload(&p).to_html();
        assert!(html.contains(
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co"
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<span class=\"placeholder\">(not provided)</span>"));
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text's fine"), "plain text's fine");
    }

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        assert_eq!(
            sanitize_for_terminal("ok\x1b[31mred\x07\nnext\tcol"),
            "ok[31mred\nnext\tcol"
        );
    }
}
