use chrono::{DateTime, Local};

use crate::usecase::ports::backend::BackendError;

/// One independently loaded table on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSlice<T> {
    Pending,
    Ready {
        rows: Vec<T>,
        loaded_at: DateTime<Local>,
    },
    /// The last load failed. Rows from an earlier load stay visible.
    Failed {
        stale: Vec<T>,
        loaded_at: Option<DateTime<Local>>,
    },
}

impl<T> Default for TableSlice<T> {
    fn default() -> Self {
        TableSlice::Pending
    }
}

impl<T> TableSlice<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            TableSlice::Pending => &[],
            TableSlice::Ready { rows, .. } => rows,
            TableSlice::Failed { stale, .. } => stale,
        }
    }

    pub fn complete(&mut self, result: Result<Vec<T>, BackendError>) {
        self.complete_at(result, Local::now());
    }

    pub fn complete_at(&mut self, result: Result<Vec<T>, BackendError>, now: DateTime<Local>) {
        let previous = std::mem::take(self);
        *self = match (result, previous) {
            (Ok(rows), _) => TableSlice::Ready {
                rows,
                loaded_at: now,
            },
            (Err(_), TableSlice::Ready { rows, loaded_at }) => TableSlice::Failed {
                stale: rows,
                loaded_at: Some(loaded_at),
            },
            (Err(_), failed @ TableSlice::Failed { .. }) => failed,
            (Err(_), TableSlice::Pending) => TableSlice::Failed {
                stale: Vec::new(),
                loaded_at: None,
            },
        };
    }

    /// Load failures are not surfaced: a failed slice reads like an empty or
    /// older table.
    pub fn caption(&self) -> Option<String> {
        match self {
            TableSlice::Pending => Some("loading…".to_string()),
            TableSlice::Ready { loaded_at, .. } => {
                Some(format!("updated {}", loaded_at.format("%H:%M:%S")))
            }
            TableSlice::Failed { loaded_at, .. } => loaded_at
                .as_ref()
                .map(|at| format!("updated {}", at.format("%H:%M:%S"))),
        }
    }
}
