//! Catalog Errors

use std::error::Error;

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::catalog::{CatalogError, ErrorKind};

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error.kind() {
        ErrorKind::InvalidArgument => StatusError::bad_request().brief(error.to_string()),
        ErrorKind::NotFound => StatusError::not_found().brief("Category not found"),
        ErrorKind::DeadlineExceeded => {
            StatusError::gateway_timeout().brief("Catalog query timed out")
        }
        ErrorKind::Cancelled => {
            StatusError::service_unavailable().brief("Catalog query was cancelled")
        }
        ErrorKind::Internal => {
            error!("catalog query failed: {}", chain(&error));

            StatusError::internal_server_error()
        }
    }
}

/// `error: cause: cause ...`
fn chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
