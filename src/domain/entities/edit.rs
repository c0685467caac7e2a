use crate::domain::entities::record::Record;

/// A table cell addressed by the record key of its row and its column field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_key: String,
    pub column: String,
}

impl CellKey {
    pub fn new(row_key: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            row_key: row_key.into(),
            column: column.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMode {
    Display,
    Editing,
}

/// Draft state of the single cell currently being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: CellKey,
    pub pending_value: String,
}

impl EditSession {
    pub fn record_with(&self, value: String) -> Record {
        Record::new(self.target.row_key.clone(), value)
    }
}
