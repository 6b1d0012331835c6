//! Category Breadcrumb Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    categories::{handlers::parse_category_id, models::CategoryBreadcrumbResponse},
    errors::into_status_error,
    extensions::*,
};

/// Category Breadcrumb Handler
///
/// Returns the category with its ancestors, parent first.
#[endpoint(tags("categories"), summary = "Category Breadcrumb")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryBreadcrumbResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let category = parse_category_id(&id.into_inner())?;

    let chain = state
        .app
        .catalog
        .category_breadcrumb(category)
        .await
        .map_err(into_status_error)?;

    Ok(Json(chain.into()))
}
