//! Product form controller: moves row data into the edit/delete modals and
//! turns modal submissions into admin API calls.
//!
//! Edit and delete report failures through a blocking [`Alert`] without reading
//! the response; add reports every outcome, including an unreachable server,
//! through the [`Notifier`] and prefers the server's `message`.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use shared::{
    domain::ProductRow,
    error::ErrorBody,
    protocol::{ProductPayload, Severity},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    api::{ApiError, ProductApi},
    form::{ElementId, Field, FormError, FormState, Modal},
    notifier::{Alert, Notifier},
    parse::{InvalidNumber, NumberMode},
};

pub const SUCCESS_TITLE: &str = "Thành công";
pub const ERROR_TITLE: &str = "Lỗi";
pub const UPDATE_SUCCEEDED: &str = "Cập nhật sản phẩm thành công";
pub const UPDATE_FAILED: &str = "Cập nhật thất bại";
pub const DELETE_SUCCEEDED: &str = "Xóa sản phẩm thành công";
pub const DELETE_FAILED: &str = "Xóa thất bại";
pub const CREATE_SUCCEEDED: &str = "Thêm sản phẩm mới thành công";
pub const CREATE_FAILED: &str = "Thêm sản phẩm thất bại";
pub const SERVER_UNREACHABLE: &str = "Không thể kết nối tới server";
pub const INVALID_NUMBER: &str = "Giá trị không hợp lệ";

/// Form submission as delivered by the UI surface.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Rejected { status: u16 },
    Unreachable,
    Invalid { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Populated { id: String },
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("request for product {id} failed: {source}")]
    Request {
        id: String,
        #[source]
        source: ApiError,
    },
    #[error(transparent)]
    InvalidNumber(#[from] InvalidNumber),
}

pub struct ProductFormController {
    form: Arc<dyn FormState>,
    api: Arc<dyn ProductApi>,
    notifier: Arc<dyn Notifier>,
    alert: Arc<dyn Alert>,
    numbers: NumberMode,
    modals: Mutex<HashMap<Modal, ModalState>>,
}

impl ProductFormController {
    pub fn new(
        form: Arc<dyn FormState>,
        api: Arc<dyn ProductApi>,
        notifier: Arc<dyn Notifier>,
        alert: Arc<dyn Alert>,
    ) -> Self {
        Self {
            form,
            api,
            notifier,
            alert,
            numbers: NumberMode::default(),
            modals: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_number_mode(mut self, numbers: NumberMode) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn modal_state(&self, modal: Modal) -> ModalState {
        self.modals()
            .get(&modal)
            .cloned()
            .unwrap_or(ModalState::Closed)
    }

    /// Copies the row's attributes verbatim into the edit modal.
    pub fn open_edit(&self, row: &ProductRow) -> Result<(), ControllerError> {
        let values = [
            (Field::Id, &row.id),
            (Field::Sku, &row.sku),
            (Field::Name, &row.name),
            (Field::Price, &row.price),
            (Field::Stock, &row.stock),
            (Field::Category, &row.category),
            (Field::Description, &row.description),
        ];
        for (field, value) in values {
            self.form
                .set_input_value(ElementId::new(Modal::Edit, field), value)?;
        }
        self.set_modal_state(Modal::Edit, ModalState::Populated { id: row.id.clone() });
        Ok(())
    }

    pub fn open_delete(&self, row: &ProductRow) -> Result<(), ControllerError> {
        self.form
            .set_input_value(ElementId::new(Modal::Delete, Field::Id), &row.id)?;
        self.form
            .set_text(ElementId::new(Modal::Delete, Field::Name), &row.name)?;
        self.set_modal_state(Modal::Delete, ModalState::Populated { id: row.id.clone() });
        Ok(())
    }

    /// Clears the modal's fields and forgets the identifier it held.
    pub fn close_modal(&self, modal: Modal) -> Result<(), ControllerError> {
        for field in modal.inputs() {
            self.form.set_input_value(ElementId::new(modal, *field), "")?;
        }
        for field in modal.texts() {
            self.form.set_text(ElementId::new(modal, *field), "")?;
        }
        self.set_modal_state(modal, ModalState::Closed);
        Ok(())
    }

    pub async fn submit_edit(
        &self,
        event: &mut SubmitEvent,
    ) -> Result<SubmitOutcome, ControllerError> {
        event.prevent_default();
        let id = self.input(Modal::Edit, Field::Id)?;
        let payload = match self.read_payload(Modal::Edit) {
            Ok(payload) => payload,
            Err(ControllerError::InvalidNumber(invalid)) => {
                return Ok(self.reject_invalid(invalid));
            }
            Err(err) => return Err(err),
        };

        let response = self
            .api
            .update(&id, &payload)
            .await
            .map_err(|source| ControllerError::Request {
                id: id.clone(),
                source,
            })?;

        if response.is_success() {
            info!(product_id = %id, "product updated");
            self.notifier
                .notify(SUCCESS_TITLE, UPDATE_SUCCEEDED, Severity::Success);
            Ok(SubmitOutcome::Succeeded)
        } else {
            warn!(product_id = %id, status = response.status, "product update rejected");
            self.alert.alert(UPDATE_FAILED);
            Ok(SubmitOutcome::Rejected {
                status: response.status,
            })
        }
    }

    pub async fn submit_delete(
        &self,
        event: &mut SubmitEvent,
    ) -> Result<SubmitOutcome, ControllerError> {
        event.prevent_default();
        let id = self.input(Modal::Delete, Field::Id)?;

        let response = self
            .api
            .delete(&id)
            .await
            .map_err(|source| ControllerError::Request {
                id: id.clone(),
                source,
            })?;

        if response.is_success() {
            info!(product_id = %id, "product deleted");
            self.notifier
                .notify(SUCCESS_TITLE, DELETE_SUCCEEDED, Severity::Success);
            Ok(SubmitOutcome::Succeeded)
        } else {
            warn!(product_id = %id, status = response.status, "product delete rejected");
            self.alert.alert(DELETE_FAILED);
            Ok(SubmitOutcome::Rejected {
                status: response.status,
            })
        }
    }

    /// Never returns a request error: an unreachable server is reported to the
    /// operator like any other failure.
    pub async fn submit_add(
        &self,
        event: &mut SubmitEvent,
    ) -> Result<SubmitOutcome, ControllerError> {
        event.prevent_default();
        let payload = match self.read_payload(Modal::Add) {
            Ok(payload) => payload,
            Err(ControllerError::InvalidNumber(invalid)) => {
                return Ok(self.reject_invalid(invalid));
            }
            Err(err) => return Err(err),
        };

        let response = match self.api.create(&payload).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, sku = %payload.sku, "product create did not reach server");
                self.notifier
                    .notify(ERROR_TITLE, SERVER_UNREACHABLE, Severity::Error);
                return Ok(SubmitOutcome::Unreachable);
            }
        };

        if response.is_success() {
            info!(sku = %payload.sku, "product created");
            self.notifier
                .notify(SUCCESS_TITLE, CREATE_SUCCEEDED, Severity::Success);
            return Ok(SubmitOutcome::Succeeded);
        }

        let message = ErrorBody::message_from_bytes(&response.body)
            .unwrap_or_else(|| CREATE_FAILED.to_string());
        warn!(sku = %payload.sku, status = response.status, %message, "product create rejected");
        self.notifier.notify(ERROR_TITLE, &message, Severity::Error);
        Ok(SubmitOutcome::Rejected {
            status: response.status,
        })
    }

    fn read_payload(&self, modal: Modal) -> Result<ProductPayload, ControllerError> {
        let price = self.input(modal, Field::Price)?;
        let stock = self.input(modal, Field::Stock)?;
        let category = self.input(modal, Field::Category)?;

        Ok(ProductPayload {
            sku: self.input(modal, Field::Sku)?,
            name: self.input(modal, Field::Name)?,
            price: self.numbers.float(field_label(Field::Price), &price)?,
            stock: self.numbers.integer(field_label(Field::Stock), &stock)?,
            category_id: self
                .numbers
                .integer(field_label(Field::Category), &category)?,
            description: self.input(modal, Field::Description)?,
        })
    }

    fn reject_invalid(&self, invalid: InvalidNumber) -> SubmitOutcome {
        warn!(field = invalid.field, raw = %invalid.raw, "rejecting malformed number");
        let message = format!("{INVALID_NUMBER}: {}", invalid.field);
        self.notifier.notify(ERROR_TITLE, &message, Severity::Error);
        SubmitOutcome::Invalid {
            field: invalid.field,
        }
    }

    fn input(&self, modal: Modal, field: Field) -> Result<String, FormError> {
        self.form.input_value(ElementId::new(modal, field))
    }

    fn set_modal_state(&self, modal: Modal, state: ModalState) {
        self.modals().insert(modal, state);
    }

    fn modals(&self) -> MutexGuard<'_, HashMap<Modal, ModalState>> {
        self.modals
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Price => "price",
        Field::Stock => "stock",
        Field::Category => "category_id",
        other => other.as_str(),
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
