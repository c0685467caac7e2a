use thiserror::Error;
use tracing::debug;

use crate::domain::edit_machine::{Activation, EditMachine};
use crate::domain::entities::edit::{CellKey, CellMode};
use crate::domain::entities::record::Record;
use crate::domain::validate::ValidationError;
use crate::usecase::record_cache::{CacheError, RecordCache};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing was being edited.
    Idle,
    /// The cache now holds this record; it still has to be submitted.
    Committed(Record),
}

impl CommitOutcome {
    pub fn into_record(self) -> Option<Record> {
        match self {
            CommitOutcome::Idle => None,
            CommitOutcome::Committed(record) => Some(record),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivateOutcome {
    pub editing: bool,
    /// Set when activation closed another open session first.
    pub committed: Option<Record>,
}

/// The editable "Primary Node Info" table: the record cache plus the edit
/// session of its single editable cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryTable {
    cache: RecordCache,
    editor: EditMachine,
}

impl PrimaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        self.cache.snapshot()
    }

    pub fn editor(&self) -> &EditMachine {
        &self.editor
    }

    pub fn mode(&self, cell: &CellKey) -> CellMode {
        self.editor.mode(cell)
    }

    pub fn can_edit(&self, cell: &CellKey) -> bool {
        self.editor.can_edit(cell)
    }

    pub fn load(&mut self, records: Vec<Record>) {
        self.cache.load(records);
        let orphaned = self
            .editor
            .session()
            .is_some_and(|session| self.cache.get(&session.target.row_key).is_none());
        if orphaned {
            debug!("closing edit session whose record disappeared on reload");
            self.editor.finish();
        }
    }

    /// Puts `cell` into editing. An open session on another cell is committed
    /// first, as if its input had lost focus; if that commit fails the new
    /// activation is rejected and the open session stays.
    pub fn activate(&mut self, cell: CellKey) -> Result<ActivateOutcome, CommitError> {
        let mut committed = None;
        loop {
            let current = self.cache.get(&cell.row_key).map(|record| record.value.clone());
            match self.editor.activate(cell.clone(), current.as_deref()) {
                Activation::Started => {
                    return Ok(ActivateOutcome {
                        editing: true,
                        committed,
                    })
                }
                Activation::Ignored => {
                    return Ok(ActivateOutcome {
                        editing: false,
                        committed,
                    })
                }
                Activation::Busy => committed = self.commit()?.into_record(),
            }
        }
    }

    pub fn input(&mut self, text: impl Into<String>) -> bool {
        self.editor.input(text)
    }

    /// Editing -> Display: validate, then update the cache optimistically.
    pub fn commit(&mut self) -> Result<CommitOutcome, CommitError> {
        let Some(validated) = self.editor.validate_pending() else {
            return Ok(CommitOutcome::Idle);
        };
        let record = validated?;
        let replaced = self.cache.replace(record.clone());
        self.editor.finish();
        replaced?;
        Ok(CommitOutcome::Committed(record))
    }
}
