//! Live inputs of the active tab.
//!
//! Only the active tab has mounted inputs. Leaving a tab saves its values
//! into the [`FieldStore`](crate::forms::FieldStore) and entering a tab
//! rebuilds its inputs from the store, so a field that is never remembered
//! comes back empty.

use crossterm::event::KeyEvent;
use zayavki_client::FormData;

use crate::app::input::components::{MultiLineInput, SelectInput, SingleLineInput};
use crate::forms::registry::{FieldKind, FieldSpec};
use crate::forms::{FieldStore, TabId, tab_config};

/// Widget behind one field.
pub enum FieldInput {
    Line(SingleLineInput),
    Lines(MultiLineInput<'static>),
    Select(SelectInput),
}

impl FieldInput {
    pub fn for_spec(spec: &FieldSpec) -> Self {
        match spec.kind {
            FieldKind::Text | FieldKind::Email => Self::Line(match spec.placeholder {
                Some(p) => SingleLineInput::with_placeholder(p),
                None => SingleLineInput::new(),
            }),
            FieldKind::TextArea => Self::Lines(match spec.placeholder {
                Some(p) => MultiLineInput::with_placeholder(p),
                None => MultiLineInput::new(),
            }),
            FieldKind::Select(options) => Self::Select(SelectInput::new(options)),
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Line(input) => input.value().to_string(),
            Self::Lines(input) => input.value(),
            Self::Select(input) => input.value().to_string(),
        }
    }

    pub fn set_value(&mut self, value: &str) {
        match self {
            Self::Line(input) => input.set_value(value),
            Self::Lines(input) => input.set_value(value),
            Self::Select(input) => input.set_value(value),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self {
            Self::Line(input) => input.handle_key(key),
            Self::Lines(input) => input.handle_key(key),
            Self::Select(input) => input.handle_key(key),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Lines(_))
    }
}

/// Inputs of one tab, in registry order.
pub struct TabForm {
    tab: TabId,
    fields: Vec<(&'static FieldSpec, FieldInput)>,
}

impl TabForm {
    /// Empty inputs for `tab`.
    pub fn new(tab: TabId) -> Self {
        let fields = tab_config(tab)
            .fields
            .iter()
            .map(|spec| (spec, FieldInput::for_spec(spec)))
            .collect();
        Self { tab, fields }
    }

    /// Inputs for `tab` filled from the store.
    pub fn restored(tab: TabId, store: &FieldStore) -> Self {
        let mut form = Self::new(tab);
        for (id, value) in store.restore(tab) {
            form.set_value(id, &value);
        }
        form
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(spec, _)| spec.id == id)
            .map(|(_, input)| input.value())
    }

    /// Set a field by id. Returns `false` when the tab has no such field.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|(spec, _)| spec.id == id) {
            Some((_, input)) => {
                input.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for (_, input) in &mut self.fields {
            input.set_value("");
        }
    }

    /// Current values keyed by field id.
    pub fn data(&self) -> FormData {
        self.fields
            .iter()
            .map(|(spec, input)| (spec.id, input.value()))
            .collect()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldInput)> {
        self.fields.iter().map(|(spec, input)| (*spec, input))
    }

    pub fn spec(&self, index: usize) -> Option<&'static FieldSpec> {
        self.fields.get(index).map(|(spec, _)| *spec)
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut FieldInput> {
        self.fields.get_mut(index).map(|(_, input)| input)
    }
}
