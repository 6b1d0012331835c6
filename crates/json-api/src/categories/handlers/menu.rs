//! Categories Menu Handler

use salvo::prelude::*;

use crate::{
    categories::models::CategoryMenuResponse, errors::into_status_error, extensions::*,
};

/// Categories Menu Handler
///
/// Returns the root categories, each with its direct children.
#[endpoint(tags("categories"), summary = "Categories Menu")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoryMenuResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let categories = state
        .app
        .catalog
        .categories_menu()
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::catalog::{CatalogError, MockCatalogService};

    use crate::test_helpers::{catalog_service, category_with_children, snippet};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("categories").get(handler))
    }

    #[tokio::test]
    async fn test_menu_returns_roots_with_children() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_categories_menu().once().return_once(|| {
            Ok(vec![category_with_children(
                1,
                "Home",
                vec![snippet(2, "Kitchen")],
            )])
        });

        let response: CategoryMenuResponse = TestClient::get("http://example.com/categories")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        let home = response.categories.first().ok_or("missing category")?;

        assert_eq!(home.name, "Home");
        assert_eq!(home.last_updated, "1970-01-01T00:00:00Z");
        assert_eq!(
            home.children.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Kitchen"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_menu_uses_camel_case_fields() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_categories_menu()
            .once()
            .return_once(|| Ok(vec![category_with_children(1, "Home", vec![])]));

        let body: serde_json::Value = TestClient::get("http://example.com/categories")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert!(body["categories"][0].get("lastUpdated").is_some());
        assert!(body["categories"][0].get("last_updated").is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_menu_deadline_returns_504() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_categories_menu()
            .once()
            .return_once(|| Err(CatalogError::DeadlineExceeded));

        let res = TestClient::get("http://example.com/categories")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::GATEWAY_TIMEOUT));

        Ok(())
    }
}
