//! Product Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{errors::into_status_error, extensions::*, products::models::ProductPageResponse};

/// Product Index Handler
///
/// Returns one page of all products, sorted by name.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    start: QueryParam<String, false>,
    qty: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let window = (start, qty).into_window()?;

    let page = state
        .app
        .catalog
        .products(window)
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}
