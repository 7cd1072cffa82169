//! Outcome handling shared by the admin views.
//!
//! Every failed action is reported inline through the [`Notifier`] and
//! returned as a [`ViewError`]. Transport and server failures have already
//! been broadcast by the HTTP adapter; this is the second, local report.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::domain::ports::Notifier;
use crate::domain::{ApiError, Envelope};

/// Local validation failure. Raised before any network call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    MissingField {
        /// Name of the field as shown to the operator.
        field: &'static str,
    },
    /// Price is negative or not a number.
    #[error("price must be a non-negative amount, got {price}")]
    InvalidPrice {
        /// Rejected value.
        price: f64,
    },
    /// Rating outside 1 to 5.
    #[error("rating must be between 1 and 5, got {rating}")]
    RatingOutOfRange {
        /// Rejected value.
        rating: u8,
    },
    /// No catalog carries the chosen name.
    #[error("no catalog named \"{name}\"")]
    UnknownCatalog {
        /// Name the operator picked.
        name: String,
    },
    /// The catalog already holds its maximum number of sarees.
    #[error("Catalog already has maximum number of sarees ({capacity})")]
    CatalogFull {
        /// Capacity of the catalog.
        capacity: usize,
    },
    /// Nothing was selected to add to the catalog.
    #[error("Please select a saree to add to the catalog")]
    NoSareeSelected,
    /// The update would not change anything.
    #[error("nothing to update")]
    NothingToUpdate,
    /// The submission needs an edit target that was not chosen.
    #[error("no record is being edited")]
    NotEditing,
}

/// Error returned when a filter keyword is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter \"{value}\"; expected one of {expected}")]
pub struct FilterParseError {
    value: String,
    expected: &'static str,
}

impl FilterParseError {
    pub(crate) fn new(value: &str, expected: &'static str) -> Self {
        Self {
            value: value.to_owned(),
            expected,
        }
    }
}

/// Failure of a view action.
#[derive(Debug, Clone, Error)]
pub enum ViewError {
    /// Blocked by local validation.
    #[error(transparent)]
    Form(#[from] FormError),
    /// The call failed in transport or with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The server answered with `success: false`.
    #[error("{message}")]
    Rejected {
        /// Server message, or the action's failure text.
        message: String,
    },
    /// A successful response carried no payload where one was required.
    #[error("{action}: response carried no data")]
    EmptyResponse {
        /// Failure text of the action.
        action: &'static str,
    },
    /// The addressed record is not in the local list.
    #[error("no record with id {id}")]
    UnknownRecord {
        /// Identifier that was looked up.
        id: String,
    },
}

impl ViewError {
    /// The API failure underneath, if any.
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Inline reporting for one view.
#[derive(Clone)]
pub(crate) struct Feedback {
    notifier: Arc<dyn Notifier>,
}

impl Feedback {
    pub(crate) fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Resolve a service call: the payload of a successful envelope, or a
    /// reported error.
    pub(crate) fn settle<T>(
        &self,
        outcome: Result<Envelope<T>, ApiError>,
        failure: &'static str,
    ) -> Result<Option<T>, ViewError> {
        match outcome {
            Err(err) => {
                warn!(code = ?err.code(), status = ?err.status(), error = %err, "{failure}");
                self.notifier.error(failure);
                Err(ViewError::Api(err))
            }
            Ok(envelope) if !envelope.success => {
                let message = envelope.message().unwrap_or(failure).to_owned();
                self.notifier.error(&message);
                Err(ViewError::Rejected { message })
            }
            Ok(envelope) => Ok(envelope.data),
        }
    }

    /// Like [`Self::settle`] but a missing payload is an error.
    pub(crate) fn settle_data<T>(
        &self,
        outcome: Result<Envelope<T>, ApiError>,
        failure: &'static str,
    ) -> Result<T, ViewError> {
        self.settle(outcome, failure)?.ok_or_else(|| {
            self.notifier.error(failure);
            ViewError::EmptyResponse { action: failure }
        })
    }

    /// Report a validation failure and convert it.
    pub(crate) fn invalid(&self, err: FormError) -> ViewError {
        self.notifier.error(&err.to_string());
        ViewError::Form(err)
    }

    /// Report a lookup miss and convert it.
    pub(crate) fn unknown(&self, id: &str) -> ViewError {
        let err = ViewError::UnknownRecord { id: id.to_owned() };
        self.notifier.error(&err.to_string());
        err
    }
}

/// Trimmed, non-blank value of a required text field.
pub(crate) fn required(value: Option<&str>, field: &'static str) -> Result<String, FormError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or(FormError::MissingField { field })
}
