//! Per-cell Display/Editing toggle for the primary node table.
//!
//! At most one [`EditSession`] exists at a time. Only cells in the editable
//! column whose row key is gated in (by default just [`EDITABLE_KEY`]) can
//! enter editing.

use crate::domain::entities::edit::{CellKey, CellMode, EditSession};
use crate::domain::entities::record::{Record, EDITABLE_KEY, VALUE_FIELD};
use crate::domain::validate::{FieldRule, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The cell entered editing, or was already editing.
    Started,
    /// The cell is not editable, or has no backing record.
    Ignored,
    /// Another cell holds the session.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMachine {
    editable_column: String,
    editable_keys: Vec<String>,
    rule: FieldRule,
    session: Option<EditSession>,
    error: Option<ValidationError>,
}

impl Default for EditMachine {
    fn default() -> Self {
        Self::new(VALUE_FIELD, [EDITABLE_KEY], FieldRule::required("Value"))
    }
}

impl EditMachine {
    pub fn new<K>(
        editable_column: impl Into<String>,
        editable_keys: impl IntoIterator<Item = K>,
        rule: FieldRule,
    ) -> Self
    where
        K: Into<String>,
    {
        Self {
            editable_column: editable_column.into(),
            editable_keys: editable_keys.into_iter().map(Into::into).collect(),
            rule,
            session: None,
            error: None,
        }
    }

    pub fn can_edit(&self, cell: &CellKey) -> bool {
        cell.column == self.editable_column && self.editable_keys.contains(&cell.row_key)
    }

    pub fn mode(&self, cell: &CellKey) -> CellMode {
        match &self.session {
            Some(session) if &session.target == cell => CellMode::Editing,
            _ => CellMode::Display,
        }
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Display -> Editing. `current` is the cached value of the target record.
    pub fn activate(&mut self, cell: CellKey, current: Option<&str>) -> Activation {
        if !self.can_edit(&cell) {
            return Activation::Ignored;
        }
        if let Some(session) = &self.session {
            return if session.target == cell {
                Activation::Started
            } else {
                Activation::Busy
            };
        }
        let Some(current) = current else {
            return Activation::Ignored;
        };

        self.error = None;
        self.session = Some(EditSession {
            target: cell,
            pending_value: current.to_string(),
        });
        Activation::Started
    }

    /// Editing -> Editing. Returns false when no cell is editing.
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        match &mut self.session {
            Some(session) => {
                session.pending_value = text.into();
                true
            }
            None => false,
        }
    }

    /// Validates the draft without leaving Editing. `None` when idle.
    ///
    /// A failed validation is kept so the view can show it next to the input.
    pub fn validate_pending(&mut self) -> Option<Result<Record, ValidationError>> {
        let session = self.session.as_ref()?;
        let result = self
            .rule
            .validate(&session.pending_value)
            .map(|value| session.record_with(value));
        self.error = result.as_ref().err().cloned();
        Some(result)
    }

    /// Editing -> Display.
    pub fn finish(&mut self) -> Option<EditSession> {
        self.error = None;
        self.session.take()
    }
}
