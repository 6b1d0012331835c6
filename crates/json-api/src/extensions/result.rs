//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map any error to an HTTP error response.
pub(crate) trait ResultExt<T> {
    /// Logged internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Bad request carrying `context` and the error as its detail.
    fn or_400(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            StatusError::bad_request()
                .brief(context.to_string())
                .detail(error.to_string())
        })
    }
}
