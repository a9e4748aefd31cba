use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::MultitabError;

/// Ordered collection of saved bounds, one per live tab.
///
/// Indices mirror tab positions 0..count-1 with no gaps; every tab removal
/// must be followed by exactly one `shift_after_removal` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedValues {
    entries: Vec<Bounds>,
}

impl SavedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry at `index`, extending the store by one when
    /// `index == len`.
    pub fn save(&mut self, index: usize, bounds: Bounds) -> Result<(), MultitabError> {
        if index < self.entries.len() {
            self.entries[index] = bounds;
            Ok(())
        } else if index == self.entries.len() {
            self.entries.push(bounds);
            Ok(())
        } else {
            Err(MultitabError::StoreIndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
        }
    }

    pub fn load(&self, index: usize) -> Result<Bounds, MultitabError> {
        self.entries
            .get(index)
            .copied()
            .ok_or(MultitabError::StoreIndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
    }

    /// Remove the entry at `index`, shifting every later entry one position
    /// earlier.
    pub fn shift_after_removal(&mut self, index: usize) -> Result<(), MultitabError> {
        if index >= self.entries.len() {
            return Err(MultitabError::StoreIndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
