//! Category Products Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    categories::handlers::parse_category_id, errors::into_status_error, extensions::*,
    products::models::ProductPageResponse,
};

/// Category Products Handler
///
/// Returns one page of the products in a category. An unknown category yields
/// an empty page.
#[endpoint(tags("categories", "products"), summary = "List Category Products")]
pub(crate) async fn handler(
    id: PathParam<String>,
    start: QueryParam<String, false>,
    qty: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let category = parse_category_id(&id.into_inner())?;
    let window = (start, qty).into_window()?;

    let page = state
        .app
        .catalog
        .products_from_category(category, window)
        .await
        .map_err(into_status_error)?;

    Ok(Json(page.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::{
        catalog::{MockCatalogService, models::ProductPage},
        products::data::Window,
    };

    use crate::test_helpers::{CATEGORY_HEX, catalog_service, category_id, make_product};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(
            catalog,
            Router::with_path("categories/{id}/products").get(handler),
        )
    }

    #[tokio::test]
    async fn test_category_products_forwards_id_and_window() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_products_from_category()
            .once()
            .withf(|category, window| {
                *category == category_id(1) && *window == Window::new(10, 5)
            })
            .return_once(|_, _| {
                Ok(ProductPage {
                    total: 11,
                    data: vec![make_product(1, "Lamp", 20.0)],
                })
            });

        let response: ProductPageResponse = TestClient::get(format!(
            "http://example.com/categories/{CATEGORY_HEX}/products?start=10&qty=5"
        ))
        .send(&make_service(catalog))
        .await
        .take_json()
        .await?;

        assert_eq!(response.total, 11);
        assert_eq!(response.data.first().map(|p| p.value), Some(20.0));

        Ok(())
    }

    #[tokio::test]
    async fn test_category_products_malformed_id_returns_400() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_products_from_category().never();

        let res = TestClient::get("http://example.com/categories/zzzzzzzzzzzzzzzzzzzzzzzz/products")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
