//! Categories Side Menu Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    categories::{handlers::parse_category_id, models::CategoryMenuResponse},
    errors::into_status_error,
    extensions::*,
};

/// Categories Side Menu Handler
///
/// Returns the category with its direct children.
#[endpoint(tags("categories"), summary = "Categories Side Menu")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryMenuResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let category = parse_category_id(&id.into_inner())?;

    let menu = state
        .app
        .catalog
        .categories_side_menu(category)
        .await
        .map_err(into_status_error)?;

    Ok(Json(menu.into()))
}
