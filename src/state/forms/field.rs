//! Form field value objects

use serde::{Deserialize, Serialize};

/// Tri-state answer to "Have you reviewed the Summary?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reviewed {
    #[default]
    #[serde(rename = "")]
    Unset,
    Yes,
    No,
}

impl Reviewed {
    /// Wire value used in the submission payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Human-readable label (empty when unset)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Identifies each input on the review form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    OrgName,
    Reviewed,
    Changes,
    ChangeType,
    Files,
    Agree,
    FullName,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::OrgName,
        FieldId::Reviewed,
        FieldId::Changes,
        FieldId::ChangeType,
        FieldId::Files,
        FieldId::Agree,
        FieldId::FullName,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OrgName => "Organization Name",
            Self::Reviewed => "Have you reviewed the Summary?",
            Self::Changes => "Changes (if any)",
            Self::ChangeType => "Type of change (optional)",
            Self::Files => "Files (one path per line, up to 5, 8MB each)",
            Self::Agree => "I agree that the information above is accurate",
            Self::FullName => "Signature (Full name)",
        }
    }

    /// Whether the field lives in the section hidden when the Summary was not reviewed
    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::Changes | Self::ChangeType | Self::Files)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Choice(Reviewed),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId, is_multiline: bool) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new yes/no radio field, initially unset
    pub fn choice(id: FieldId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Choice(Reviewed::Unset),
            is_multiline: false,
        }
    }

    /// Create a new checkbox field, initially unchecked
    pub fn flag(id: FieldId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Flag(false),
            is_multiline: false,
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) | FieldValue::Flag(_) => "",
        }
    }

    /// Text value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.as_text().trim()
    }

    /// Get the radio selection (Unset for non-choice fields)
    pub fn as_choice(&self) -> Reviewed {
        match &self.value {
            FieldValue::Choice(r) => *r,
            _ => Reviewed::Unset,
        }
    }

    /// Get the checkbox state (false for non-flag fields)
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            _ => false,
        }
    }

    /// Set the text value
    #[cfg(test)]
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the radio selection; ignored for other field kinds
    pub fn select(&mut self, choice: Reviewed) {
        if let FieldValue::Choice(r) = &mut self.value {
            *r = choice;
        }
    }

    /// Flip the checkbox; ignored for other field kinds
    pub fn toggle(&mut self) {
        if let FieldValue::Flag(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(r) => *r = Reviewed::Unset,
            FieldValue::Flag(b) => *b = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(r) => {
                let mark = |on: bool| if on { "(•)" } else { "( )" };
                format!(
                    "{} Yes   {} No",
                    mark(*r == Reviewed::Yes),
                    mark(*r == Reviewed::No)
                )
            }
            FieldValue::Flag(b) => {
                if *b {
                    "[x] I agree".to_string()
                } else {
                    "[ ] I agree".to_string()
                }
            }
        }
    }
}
