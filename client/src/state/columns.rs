//! Column registry driving both the editor UI and the render projection.
//!
//! DESIGN
//! ======
//! Descriptors are an ordered list; insertion order is display order. Keys
//! are not checked for uniqueness, so two columns sharing a key render
//! identical data. Mutations happen in place and are never persisted; a
//! reload starts over from the default list.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

/// One column's label/key/type triple.
///
/// `kind` is an advisory tag serialized as `"type"`. Values outside the
/// known set ("string", "number", "date") are accepted and carry no special
/// rendering behavior.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnDescriptor {
    pub label: String,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(label: &str, key: &str, kind: &str) -> Self {
        Self {
            label: label.to_owned(),
            key: key.to_owned(),
            kind: kind.to_owned(),
        }
    }

    /// The descriptor appended by [`ColumnsState::add`]. Projects no data
    /// until the user edits its key.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("Label", "Key", "string")
    }
}

/// Which descriptor field an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnField {
    Label,
    Key,
    Kind,
}

/// Ordered, runtime-editable column descriptors.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnsState {
    descriptors: Vec<ColumnDescriptor>,
}

impl ColumnsState {
    /// Build a registry from a caller-supplied starting list.
    #[must_use]
    pub fn new(descriptors: Vec<ColumnDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Append the placeholder descriptor.
    pub fn add(&mut self) {
        self.descriptors.push(ColumnDescriptor::placeholder());
    }

    /// Remove and return the descriptor at `index`. Out-of-range leaves the
    /// list untouched and returns `None`; callers log the violation instead
    /// of corrupting the list.
    pub fn remove(&mut self, index: usize) -> Option<ColumnDescriptor> {
        if index < self.descriptors.len() {
            Some(self.descriptors.remove(index))
        } else {
            None
        }
    }

    /// Overwrite one field of the descriptor at `index`. The value is taken
    /// as-is with no coercion. Returns `false` when the index is out of
    /// range.
    pub fn edit(&mut self, index: usize, field: ColumnField, value: &str) -> bool {
        let Some(descriptor) = self.descriptors.get_mut(index) else {
            return false;
        };
        match field {
            ColumnField::Label => descriptor.label = value.to_owned(),
            ColumnField::Key => descriptor.key = value.to_owned(),
            ColumnField::Kind => descriptor.kind = value.to_owned(),
        }
        true
    }

    /// The current ordered descriptor list. Borrowing keeps callers from
    /// mutating display order behind the registry's back.
    #[must_use]
    pub fn snapshot(&self) -> &[ColumnDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for ColumnsState {
    /// The starting configuration: a name column and a date column.
    fn default() -> Self {
        Self::new(vec![
            ColumnDescriptor::new("Name", "name", "string"),
            ColumnDescriptor::new("Date", "date", "date"),
        ])
    }
}
