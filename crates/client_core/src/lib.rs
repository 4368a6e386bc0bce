//! Admin product console core: admin API client, form and notification ports,
//! and the controller that ties row actions and modal submissions together.

pub mod api;
pub mod controller;
pub mod form;
pub mod notifier;
pub mod parse;
pub mod settings;

pub use api::{ApiError, ApiResponse, HttpProductApi, ProductApi};
pub use controller::{
    ControllerError, ModalState, ProductFormController, SubmitEvent, SubmitOutcome,
};
pub use form::{ElementId, Field, FormError, FormState, InMemoryForm, Modal};
pub use notifier::{Alert, Notifier, ToastState, ToastWidget};
pub use parse::{InvalidNumber, NumberMode};
pub use settings::{load_settings, Settings, SettingsError};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
