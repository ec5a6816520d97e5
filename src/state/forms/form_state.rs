//! The review form and focus traversal

use super::field::{FieldId, FormField, Reviewed};
use crate::state::attachment::Attachment;
use crate::state::visibility::Visibility;

/// Where keyboard input currently goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    /// The action panel (Preview / Submit / Quit)
    Actions,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::OrgName)
    }
}

/// Live values of every input on the form
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    pub org_name: FormField,
    pub reviewed: FormField,
    pub changes: FormField,
    pub change_type: FormField,
    pub files: FormField,
    pub agree: FormField,
    pub full_name: FormField,
    /// Selection accepted by the gatekeeper for the current Files text
    pub attachments: Vec<Attachment>,
    /// Files text edited since the last gatekeeper run
    files_dirty: bool,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self {
            org_name: FormField::text(FieldId::OrgName, false),
            reviewed: FormField::choice(FieldId::Reviewed),
            changes: FormField::text(FieldId::Changes, true),
            change_type: FormField::text(FieldId::ChangeType, false),
            files: FormField::text(FieldId::Files, true),
            agree: FormField::flag(FieldId::Agree),
            full_name: FormField::text(FieldId::FullName, false),
            attachments: Vec::new(),
            files_dirty: false,
        }
    }

    /// Return every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::OrgName => &self.org_name,
            FieldId::Reviewed => &self.reviewed,
            FieldId::Changes => &self.changes,
            FieldId::ChangeType => &self.change_type,
            FieldId::Files => &self.files,
            FieldId::Agree => &self.agree,
            FieldId::FullName => &self.full_name,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        if id == FieldId::Files {
            self.files_dirty = true;
        }
        match id {
            FieldId::OrgName => &mut self.org_name,
            FieldId::Reviewed => &mut self.reviewed,
            FieldId::Changes => &mut self.changes,
            FieldId::ChangeType => &mut self.change_type,
            FieldId::Files => &mut self.files,
            FieldId::Agree => &mut self.agree,
            FieldId::FullName => &mut self.full_name,
        }
    }

    pub fn reviewed(&self) -> Reviewed {
        self.reviewed.as_choice()
    }

    pub fn set_reviewed(&mut self, choice: Reviewed) {
        self.reviewed.select(choice);
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::for_selection(self.reviewed())
    }

    /// Whether the Files text changed since the selection was last evaluated
    pub fn has_pending_selection(&self) -> bool {
        self.files_dirty
    }

    /// Store an accepted selection
    pub fn accept_selection(&mut self, attachments: Vec<Attachment>) {
        self.attachments = attachments;
        self.files_dirty = false;
    }

    /// Drop the whole selection, text included
    pub fn clear_selection(&mut self) {
        self.files.clear();
        self.attachments.clear();
        self.files_dirty = false;
    }

    /// Fields that can currently receive focus, in display order
    pub fn visible_fields(&self) -> Vec<FieldId> {
        let section_visible = self.visibility().section_visible;
        FieldId::ALL
            .into_iter()
            .filter(|id| section_visible || !id.is_conditional())
            .collect()
    }

    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring: Vec<Focus> = self.visible_fields().into_iter().map(Focus::Field).collect();
        ring.push(Focus::Actions);
        ring
    }

    /// Next focus stop after `from`, wrapping around
    pub fn next_focus(&self, from: Focus) -> Focus {
        let ring = self.focus_ring();
        match ring.iter().position(|f| *f == from) {
            Some(i) => ring[(i + 1) % ring.len()],
            None => self.nearest_visible(from),
        }
    }

    /// Previous focus stop before `from`, wrapping around
    pub fn prev_focus(&self, from: Focus) -> Focus {
        let ring = self.focus_ring();
        match ring.iter().position(|f| *f == from) {
            Some(0) => ring[ring.len() - 1],
            Some(i) => ring[i - 1],
            None => self.nearest_visible(from),
        }
    }

    /// Focus stop to use when `from` has just been hidden
    pub fn nearest_visible(&self, from: Focus) -> Focus {
        match from {
            Focus::Field(id) if id.is_conditional() && !self.visibility().section_visible => {
                Focus::Field(FieldId::Agree)
            }
            other => other,
        }
    }
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self::new()
    }
}
