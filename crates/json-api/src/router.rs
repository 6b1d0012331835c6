//! App Router

use salvo::Router;

use crate::{categories, healthcheck, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("categories")
                .get(categories::menu::handler)
                .push(
                    Router::with_path("{id}")
                        .push(Router::with_path("breadcrumb").get(categories::breadcrumb::handler))
                        .push(Router::with_path("side-menu").get(categories::side_menu::handler))
                        .push(Router::with_path("products").get(categories::products::handler)),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("search").get(products::search::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{affix_state::inject, prelude::*, test::TestClient};
    use testresult::TestResult;

    use catalog_app::domain::{
        catalog::{MockCatalogService, models::ProductPage},
        products::data::Window,
    };

    use crate::test_helpers::{CATEGORY_HEX, state_with_catalog};

    use super::*;

    fn service(catalog: MockCatalogService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with_catalog(catalog)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn search_is_not_routed_as_a_listing() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_products().never();
        catalog
            .expect_search_products()
            .once()
            .withf(|name, window| name == "lamp" && *window == Window::default())
            .return_once(|_, _| Ok(ProductPage::default()));

        let res = TestClient::get("http://example.com/products/search?name=lamp")
            .send(&service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn category_products_route_reaches_its_handler() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_products_from_category()
            .once()
            .return_once(|_, _| Ok(ProductPage::default()));

        let res = TestClient::get(format!("http://example.com/categories/{CATEGORY_HEX}/products"))
            .send(&service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_paths_return_404() -> TestResult {
        let res = TestClient::get("http://example.com/orders")
            .send(&service(MockCatalogService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
