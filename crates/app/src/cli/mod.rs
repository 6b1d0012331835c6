use std::{path::PathBuf, time::Duration};

use catalog_app::{
    context::{AppContext, Backend},
    domain::{
        categories::records::CategoryId,
        products::data::{DEFAULT_PAGE_SIZE, Window},
    },
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog query CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    backend: BackendArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct BackendArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    /// YAML catalog fixture, used when no database is configured
    #[arg(long, env = "CATALOG_FIXTURE", global = true)]
    fixture: Option<PathBuf>,

    /// Upper bound on each store call in milliseconds
    #[arg(long, env = "QUERY_TIMEOUT_MS", default_value_t = 5000, global = true)]
    query_timeout_ms: u64,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Root categories with their direct children
    Menu,
    /// A category with its ancestors
    Breadcrumb(CategoryArgs),
    /// A category with its direct children
    SideMenu(CategoryArgs),
    /// All products, sorted by name
    Products(WindowArgs),
    /// Products in one category
    CategoryProducts(CategoryProductsArgs),
    /// Products whose name matches a pattern
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct CategoryArgs {
    /// Category id (24 hex characters)
    #[arg(long)]
    id: CategoryId,
}

#[derive(Debug, Args)]
struct WindowArgs {
    /// Number of matches to skip
    #[arg(long, default_value_t = 0)]
    start: u32,

    /// Maximum number of products to return
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    qty: u32,
}

impl From<&WindowArgs> for Window {
    fn from(args: &WindowArgs) -> Self {
        Window::new(args.start, args.qty)
    }
}

#[derive(Debug, Args)]
struct CategoryProductsArgs {
    /// Category id (24 hex characters)
    #[arg(long)]
    category_id: CategoryId,

    #[command(flatten)]
    window: WindowArgs,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Case-insensitive regular expression over the product name
    #[arg(long, default_value = "")]
    name: String,

    #[command(flatten)]
    window: WindowArgs,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let backend = Backend::select(self.backend.database_url, self.backend.fixture)
            .map_err(|error| error.to_string())?;

        let ctx = AppContext::connect_with_timeout(
            &backend,
            Duration::from_millis(self.backend.query_timeout_ms),
        )
        .await
        .map_err(|error| describe(&error))?;

        let catalog = ctx.catalog;

        match self.command {
            Commands::Menu => print(catalog.categories_menu().await),
            Commands::Breadcrumb(args) => print(catalog.category_breadcrumb(args.id).await),
            Commands::SideMenu(args) => print(catalog.categories_side_menu(args.id).await),
            Commands::Products(args) => print(catalog.products(Window::from(&args)).await),
            Commands::CategoryProducts(args) => print(
                catalog
                    .products_from_category(args.category_id, Window::from(&args.window))
                    .await,
            ),
            Commands::Search(args) => print(
                catalog
                    .search_products(args.name, Window::from(&args.window))
                    .await,
            ),
        }
    }
}

/// Error message followed by its immediate cause, if any.
fn describe(error: &dyn std::error::Error) -> String {
    match error.source() {
        Some(source) => format!("{error}: {source}"),
        None => error.to_string(),
    }
}

fn print<T, E>(result: Result<T, E>) -> Result<(), String>
where
    T: Serialize,
    E: std::fmt::Display,
{
    let value = result.map_err(|error| error.to_string())?;

    let json = serde_json::to_string_pretty(&value)
        .map_err(|error| format!("failed to encode output: {error}"))?;

    println!("{json}");

    Ok(())
}
