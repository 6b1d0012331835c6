//! Route templates for span fields.

use catalog_app::domain::categories::records::CategoryId;

/// Replace identifier segments so requests for different categories share a
/// route, for example `/categories/{id}/breadcrumb`.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if segment.parse::<CategoryId>().is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_object_ids() {
        assert_eq!(
            route_template("/categories/64b7f0c2a1b2c3d4e5f60001/side-menu"),
            "/categories/{id}/side-menu"
        );
    }

    #[test]
    fn keeps_static_paths() {
        assert_eq!(route_template("/products/search"), "/products/search");
        assert_eq!(route_template("/"), "/");
    }
}
