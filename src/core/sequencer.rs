//! In-memory ordered list of the locations visited in one day.
//! Each location appears at most once; persistence assigns the dense
//! 1-based sequence positions when the entry is saved.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct LocationSequencer {
    ids: Vec<i64>,
}

impl LocationSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing entry's ids, dropping any duplicates while
    /// keeping first-occurrence order.
    pub fn from_ids(ids: &[i64]) -> Self {
        let mut seq = Self::new();
        for &id in ids {
            let _ = seq.append(id);
        }
        seq
    }

    /// Append a location at the end of the route.
    /// Rejects a duplicate without touching the current state.
    pub fn append(&mut self, location_id: i64) -> AppResult<()> {
        if self.ids.contains(&location_id) {
            return Err(AppError::AlreadyInSequence(location_id));
        }
        self.ids.push(location_id);
        Ok(())
    }

    /// Remove a location if present; removing an absent id is a no-op.
    pub fn remove(&mut self, location_id: i64) {
        self.ids.retain(|&id| id != location_id);
    }

    /// A saved entry must cite at least one location.
    pub fn validate_non_empty(&self) -> AppResult<()> {
        if self.ids.is_empty() {
            return Err(AppError::EmptySequence);
        }
        Ok(())
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
