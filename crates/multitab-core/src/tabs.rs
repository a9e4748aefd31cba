use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::MultitabError;
use crate::store::SavedValues;
use crate::table::Table;

/// Whether any tab (and therefore any table) currently exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    NoTabs,
    HasTabs,
}

/// A saved table configuration shown as one closable tab.
///
/// Identity is purely positional: `id` is position + 1 and the label follows
/// it, refreshed by `reindex` after every removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: usize,
    pub label: String,
    pub bounds: Bounds,
    pub table: Table,
}

/// Bulk-close selection entry, positionally paired with its tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    pub id: usize,
    pub label: String,
    pub checked: bool,
}

fn label_for(position: usize) -> String {
    format!("Table {}", position + 1)
}

/// Owns the ordered tab and checkbox collections, the saved-values store,
/// and the active index. All three collections stay index-synchronized at
/// all times; any index with no backing entry is an internal bug, never
/// user-induced state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabManager {
    tabs: Vec<Tab>,
    checkboxes: Vec<Checkbox>,
    store: SavedValues,
    active: usize,
    lifecycle: Lifecycle,
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            checkboxes: Vec::new(),
            store: SavedValues::new(),
            active: 0,
            lifecycle: Lifecycle::NoTabs,
        }
    }

    /// Append a new tab with a freshly built table, plus its checkbox and
    /// store entry. The first tab becomes active.
    pub fn create_tab(&mut self, bounds: Bounds) -> Result<usize, MultitabError> {
        let index = self.tabs.len();
        let id = index + 1;

        self.store.save(index, bounds)?;
        self.tabs.push(Tab {
            id,
            label: label_for(index),
            bounds,
            table: Table::build(bounds),
        });
        self.checkboxes.push(Checkbox {
            id,
            label: label_for(index),
            checked: false,
        });

        if index == 0 {
            self.active = 0;
        }
        self.lifecycle = Lifecycle::HasTabs;
        Ok(index)
    }

    /// Remove the tab at `index` along with its checkbox and store entry,
    /// renumbering everything that remains.
    ///
    /// Returns the bounds the input fields must be loaded with, which is
    /// `Some` only when the active tab was removed and tabs remain (tab 0
    /// becomes active). Closing a tab before the active one shifts the
    /// active index down so the same tab stays displayed.
    pub fn close_tab(&mut self, index: usize) -> Result<Option<Bounds>, MultitabError> {
        if index >= self.tabs.len() {
            return Err(MultitabError::TabNotFound(index));
        }
        let was_active = self.active == index;

        self.tabs.remove(index);
        self.checkboxes.remove(index);
        self.store.shift_after_removal(index)?;
        self.reindex();

        if self.tabs.is_empty() {
            self.lifecycle = Lifecycle::NoTabs;
            self.active = 0;
            return Ok(None);
        }

        if was_active {
            self.active = 0;
            Ok(Some(self.store.load(0)?))
        } else {
            if self.active > index {
                self.active -= 1;
            }
            Ok(None)
        }
    }

    /// Close every checked tab, scanning front to back.
    ///
    /// The cursor deliberately re-examines the same index after each removal:
    /// later entries have shifted down one position, so advancing would skip
    /// the entry that just moved into the removed slot. Only an unchecked
    /// entry advances the cursor.
    pub fn close_selected(&mut self) -> Result<Option<Bounds>, MultitabError> {
        let mut loaded = None;
        let mut i = 0;
        while i < self.checkboxes.len() {
            if self.checkboxes[i].checked {
                if let Some(bounds) = self.close_tab(i)? {
                    loaded = Some(bounds);
                }
            } else {
                i += 1;
            }
        }
        Ok(loaded)
    }

    /// Make the tab at `index` active. Returns the stored bounds to load
    /// into the input fields, except when only one tab exists: a lone tab's
    /// bounds are already in the fields and reloading would clobber
    /// in-progress edits.
    pub fn activate_tab(&mut self, index: usize) -> Result<Option<Bounds>, MultitabError> {
        if index >= self.tabs.len() {
            return Err(MultitabError::TabNotFound(index));
        }
        self.active = index;
        if self.tabs.len() > 1 {
            Ok(Some(self.store.load(index)?))
        } else {
            Ok(None)
        }
    }

    /// Replace the active tab's table with one built from `bounds` and
    /// persist the bounds to the store at the active index.
    pub fn rebuild_active(&mut self, bounds: Bounds) -> Result<(), MultitabError> {
        if self.tabs.is_empty() {
            return Err(MultitabError::TabNotFound(self.active));
        }
        self.store.save(self.active, bounds)?;
        let tab = &mut self.tabs[self.active];
        tab.bounds = bounds;
        tab.table = Table::build(bounds);
        Ok(())
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<(), MultitabError> {
        let checkbox = self
            .checkboxes
            .get_mut(index)
            .ok_or(MultitabError::CheckboxNotFound(index))?;
        checkbox.checked = checked;
        Ok(())
    }

    /// Restore positional ids and labels after a structural change. One
    /// atomic pass over both collections, so a partial renumbering can never
    /// be observed.
    fn reindex(&mut self) {
        for (position, tab) in self.tabs.iter_mut().enumerate() {
            tab.id = position + 1;
            tab.label = label_for(position);
        }
        for (position, checkbox) in self.checkboxes.iter_mut().enumerate() {
            checkbox.id = position + 1;
            checkbox.label = label_for(position);
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// True iff a table exists to rebuild on bounds edits.
    pub fn has_table(&self) -> bool {
        self.lifecycle == Lifecycle::HasTabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn checkbox(&self, index: usize) -> Option<&Checkbox> {
        self.checkboxes.get(index)
    }

    pub fn store(&self) -> &SavedValues {
        &self.store
    }
}
