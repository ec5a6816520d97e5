//! Branching between the re-review warning and the conditional section

use super::forms::Reviewed;

/// Text shown when the Summary has not been reviewed yet
pub const REVIEW_FIRST_MESSAGE: &str =
    "Please review the Summary first, then re-open the form and submit.";

/// What the form shows for a given "reviewed" selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub warning_visible: bool,
    pub section_visible: bool,
}

impl Visibility {
    /// Only an explicit "no" hides the conditional section and raises the warning
    pub fn for_selection(reviewed: Reviewed) -> Self {
        match reviewed {
            Reviewed::No => Self {
                warning_visible: true,
                section_visible: false,
            },
            Reviewed::Unset | Reviewed::Yes => Self {
                warning_visible: false,
                section_visible: true,
            },
        }
    }
}
