//! Product Search Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{errors::into_status_error, extensions::*, products::models::ProductPageResponse};

/// Product Search Handler
///
/// Returns one page of the products whose name matches the regular expression
/// `name`, ignoring case. An absent `name` matches every product and a pattern
/// that does not compile is a 400.
#[endpoint(tags("products"), summary = "Search Products")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    start: QueryParam<String, false>,
    qty: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let window = (start, qty).into_window()?;

    let page = state
        .app
        .catalog
        .search_products(name.into_inner().unwrap_or_default(), window)
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use catalog_app::{
        context::AppContext,
        domain::{
            catalog::{CatalogQueryService, MockCatalogService, models::ProductPage},
            products::data::Window,
        },
        memory::MemoryCatalog,
    };

    use crate::state::State;

    use crate::test_helpers::{catalog_service, make_product};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("products/search").get(handler))
    }

    #[tokio::test]
    async fn test_search_forwards_name_and_window() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_search_products()
            .once()
            .withf(|name, window| name == "drag" && *window == Window::new(0, 2))
            .return_once(|_, _| {
                Ok(ProductPage {
                    total: 3,
                    data: vec![
                        make_product(1, "DRAGON", 2.0),
                        make_product(2, "Dragonfly", 3.0),
                    ],
                })
            });

        let response: ProductPageResponse =
            TestClient::get("http://example.com/products/search?name=drag&qty=2")
                .send(&make_service(catalog))
                .await
                .take_json()
                .await?;

        assert_eq!(response.total, 3);
        assert_eq!(response.data.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_without_name_matches_everything() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_search_products()
            .once()
            .withf(|name, _| name.is_empty())
            .return_once(|_, _| Ok(ProductPage::default()));

        let res = TestClient::get("http://example.com/products/search")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_forwards_regex_pattern_unchanged() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_search_products()
            .once()
            .withf(|name, _| name == "^drag|hose$")
            .return_once(|_, _| Ok(ProductPage::default()));

        let res = TestClient::get("http://example.com/products/search?name=%5Edrag%7Chose%24")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_with_invalid_pattern_is_bad_request() {
        let catalog = CatalogQueryService::from_memory(MemoryCatalog::default());
        let state = State::from_app_context(AppContext::from_service(Arc::new(catalog), "memory"));

        let service = Service::new(
            Router::new()
                .hoop(inject(state))
                .push(Router::with_path("products/search").get(handler)),
        );

        let res = TestClient::get("http://example.com/products/search?name=lamp%28")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
