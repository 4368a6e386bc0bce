//! Form State port: element-level access to the admin page's modal fields.

use std::{
    collections::HashMap,
    fmt,
    sync::{Mutex, MutexGuard},
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing form element #{0}")]
    MissingElement(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Edit,
    Delete,
    Add,
}

impl Modal {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Add => "add",
        }
    }

    /// Input fields owned by this modal, in page order.
    pub fn inputs(self) -> &'static [Field] {
        match self {
            Self::Edit => &[
                Field::Id,
                Field::Sku,
                Field::Name,
                Field::Price,
                Field::Stock,
                Field::Category,
                Field::Description,
            ],
            Self::Delete => &[Field::Id],
            Self::Add => &[
                Field::Sku,
                Field::Name,
                Field::Price,
                Field::Stock,
                Field::Category,
                Field::Description,
            ],
        }
    }

    /// Display-only regions owned by this modal.
    pub fn texts(self) -> &'static [Field] {
        match self {
            Self::Delete => &[Field::Name],
            Self::Edit | Self::Add => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Sku,
    Name,
    Price,
    Stock,
    Category,
    Description,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Sku => "sku",
            Self::Name => "name",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Category => "category",
            Self::Description => "description",
        }
    }
}

/// Page element id, e.g. `edit-price` or `delete-name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub modal: Modal,
    pub field: Field,
}

impl ElementId {
    pub const fn new(modal: Modal, field: Field) -> Self {
        Self { modal, field }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.modal.prefix(), self.field.as_str())
    }
}

/// Typed access to form elements. Implemented once per UI surface.
pub trait FormState: Send + Sync {
    fn input_value(&self, id: ElementId) -> Result<String, FormError>;
    fn set_input_value(&self, id: ElementId, value: &str) -> Result<(), FormError>;
    fn text(&self, id: ElementId) -> Result<String, FormError>;
    fn set_text(&self, id: ElementId, text: &str) -> Result<(), FormError>;
}

#[derive(Debug, Default)]
struct Elements {
    inputs: HashMap<ElementId, String>,
    texts: HashMap<ElementId, String>,
}

/// In-process form state used by the console front end and tests.
#[derive(Debug, Default)]
pub struct InMemoryForm {
    elements: Mutex<Elements>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every element the admin product page provides, all empty.
    pub fn admin_page() -> Self {
        let form = Self::new();
        for modal in [Modal::Edit, Modal::Delete, Modal::Add] {
            for field in modal.inputs() {
                form.add_input(ElementId::new(modal, *field));
            }
            for field in modal.texts() {
                form.add_text(ElementId::new(modal, *field));
            }
        }
        form
    }

    pub fn add_input(&self, id: ElementId) {
        self.lock().inputs.entry(id).or_default();
    }

    pub fn add_text(&self, id: ElementId) {
        self.lock().texts.entry(id).or_default();
    }

    fn lock(&self) -> MutexGuard<'_, Elements> {
        self.elements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FormState for InMemoryForm {
    fn input_value(&self, id: ElementId) -> Result<String, FormError> {
        self.lock()
            .inputs
            .get(&id)
            .cloned()
            .ok_or_else(|| FormError::MissingElement(id.to_string()))
    }

    fn set_input_value(&self, id: ElementId, value: &str) -> Result<(), FormError> {
        let mut elements = self.lock();
        let slot = elements
            .inputs
            .get_mut(&id)
            .ok_or_else(|| FormError::MissingElement(id.to_string()))?;
        *slot = value.to_string();
        Ok(())
    }

    fn text(&self, id: ElementId) -> Result<String, FormError> {
        self.lock()
            .texts
            .get(&id)
            .cloned()
            .ok_or_else(|| FormError::MissingElement(id.to_string()))
    }

    fn set_text(&self, id: ElementId, text: &str) -> Result<(), FormError> {
        let mut elements = self.lock();
        let slot = elements
            .texts
            .get_mut(&id)
            .ok_or_else(|| FormError::MissingElement(id.to_string()))?;
        *slot = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
