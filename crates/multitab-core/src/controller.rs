use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, MAX_VALUE};
use crate::error::MultitabError;
use crate::field::{Field, FieldInputs};
use crate::tabs::TabManager;
use crate::validate::{parse_integer, validate_form, ValidationReport};

/// Numeric positions of the four slider widgets, clamped to the slider
/// range [-MAX_VALUE, MAX_VALUE].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderValues {
    min_col: i32,
    max_col: i32,
    min_row: i32,
    max_row: i32,
}

impl SliderValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> i32 {
        match field {
            Field::MinCol => self.min_col,
            Field::MaxCol => self.max_col,
            Field::MinRow => self.min_row,
            Field::MaxRow => self.max_row,
        }
    }

    pub fn set(&mut self, field: Field, value: i32) {
        let clamped = value.clamp(-MAX_VALUE, MAX_VALUE);
        let slot = match field {
            Field::MinCol => &mut self.min_col,
            Field::MaxCol => &mut self.max_col,
            Field::MinRow => &mut self.min_row,
            Field::MaxRow => &mut self.max_row,
        };
        *slot = clamped;
    }

    /// Snap all four sliders to stored bounds.
    pub fn load(&mut self, bounds: Bounds) {
        self.set(Field::MinCol, bounds.min_col);
        self.set(Field::MaxCol, bounds.max_col);
        self.set(Field::MinRow, bounds.min_row);
        self.set(Field::MaxRow, bounds.max_row);
    }
}

/// A host interaction, delivered one at a time in arrival order. Every
/// handler runs to completion before the next event is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The user edited a text field.
    TextEdited { field: Field, text: String },
    /// The user dragged a slider.
    SliderMoved { field: Field, value: i32 },
    /// The save button was pressed.
    SaveRequested,
    /// The tabs widget switched to another tab.
    TabActivated(usize),
    /// A tab's close button was pressed.
    TabClosed(usize),
    /// A bulk-close checkbox was toggled.
    CheckboxToggled { index: usize, checked: bool },
    /// The close-selected button was pressed.
    CloseSelected,
}

/// What an event changed, so hosts and tests can refresh selectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to refresh.
    Noop,
    /// Inputs were revalidated without a rebuild; the report carries any
    /// per-field errors to surface.
    Validated(ValidationReport),
    /// The active tab's table was rebuilt from the current field values.
    TableRebuilt,
    /// A new tab was created at this index.
    TabCreated(usize),
    /// One or more tabs were closed.
    TabsClosed { remaining: usize },
    /// A tab switch loaded stored bounds into the fields and sliders.
    FieldsLoaded,
}

/// The input-sync controller: owns the form text fields, the slider values,
/// and the tab manager, and keeps all three consistent as events arrive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    fields: FieldInputs,
    sliders: SliderValues,
    manager: TabManager,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_text(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn slider_value(&self, field: Field) -> i32 {
        self.sliders.get(field)
    }

    pub fn manager(&self) -> &TabManager {
        &self.manager
    }

    /// Re-run all validation rules against the current field texts.
    pub fn validate(&self) -> ValidationReport {
        validate_form(&self.fields)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<Outcome, MultitabError> {
        match event {
            InputEvent::TextEdited { field, text } => {
                self.fields.set(field, text);
                // Mirror into the slider when the text is numeric; garbage
                // input leaves the slider where it was.
                if let Some(value) = parse_integer(self.fields.get(field)) {
                    let value = value.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                    self.sliders.set(field, value);
                }
                self.sync_after_edit()
            }
            InputEvent::SliderMoved { field, value } => {
                self.sliders.set(field, value);
                self.fields.set(field, self.sliders.get(field).to_string());
                self.sync_after_edit()
            }
            InputEvent::SaveRequested => {
                let report = self.validate();
                if !report.is_valid() {
                    return Ok(Outcome::Validated(report));
                }
                let Some(bounds) = self.fields.to_bounds() else {
                    return Ok(Outcome::Validated(report));
                };
                let index = self.manager.create_tab(bounds)?;
                Ok(Outcome::TabCreated(index))
            }
            InputEvent::TabActivated(index) => match self.manager.activate_tab(index)? {
                Some(bounds) => {
                    self.load_bounds(bounds);
                    Ok(Outcome::FieldsLoaded)
                }
                None => Ok(Outcome::Noop),
            },
            InputEvent::TabClosed(index) => {
                if let Some(bounds) = self.manager.close_tab(index)? {
                    self.load_bounds(bounds);
                }
                Ok(Outcome::TabsClosed {
                    remaining: self.manager.tab_count(),
                })
            }
            InputEvent::CheckboxToggled { index, checked } => {
                self.manager.set_checked(index, checked)?;
                Ok(Outcome::Noop)
            }
            InputEvent::CloseSelected => {
                if let Some(bounds) = self.manager.close_selected()? {
                    self.load_bounds(bounds);
                }
                Ok(Outcome::TabsClosed {
                    remaining: self.manager.tab_count(),
                })
            }
        }
    }

    /// Revalidate after any text or slider change; when the form is fully
    /// valid and a table exists, rebuild the active tab's table and persist
    /// the bounds.
    fn sync_after_edit(&mut self) -> Result<Outcome, MultitabError> {
        let report = self.validate();
        if self.manager.has_table() && report.is_valid() {
            if let Some(bounds) = self.fields.to_bounds() {
                self.manager.rebuild_active(bounds)?;
                return Ok(Outcome::TableRebuilt);
            }
        }
        Ok(Outcome::Validated(report))
    }

    /// Load stored bounds into both the text fields and the sliders, without
    /// rebuilding: the table shown is the tab's own already-built table.
    fn load_bounds(&mut self, bounds: Bounds) {
        self.fields.load(bounds);
        self.sliders.load(bounds);
    }
}
