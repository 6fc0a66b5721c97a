pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod render;
pub mod router;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;
use std::io::{self, Write};

use crate::api::CatalogClient;
use crate::cli::{Command, ServiceArgs};
use crate::config::settings::{AppConfig, ServiceSettings};
use crate::pagination::PaginationConfig;
use crate::render::render_static;
use crate::router::Route;
use crate::services::{open_products, run_browse, ProductsPage};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Turn parsed flags into the application config.
///
/// Service settings stay unset when neither endpoint nor key is given, so the
/// static views work without credentials.
pub fn build_config(args: &ServiceArgs) -> Result<AppConfig> {
    let pagination = PaginationConfig::new().with_page_size(args.page_size)?;
    let config = AppConfig::new().with_pagination(pagination);

    if args.endpoint.is_none() && args.api_key.is_none() {
        return Ok(config);
    }

    let service = ServiceSettings::from_parts(args.endpoint.clone(), args.api_key.clone())?
        .with_collection(args.collection.clone())
        .with_timeout_secs(args.timeout_secs);
    Ok(config.with_service(service))
}

pub fn handle_open(config: &AppConfig, path: &str, page: usize, all: bool) -> Result<()> {
    let route = Route::resolve(path).with_context(|| format!("No view mounted at {:?}", path))?;
    info!("Opening {}", route.path());

    if !route.needs_catalog() {
        print!("{}", render_static(route));
        return Ok(());
    }

    let mut products = build_products_page(config)?;
    let runtime = build_runtime()?;
    print!("{}", runtime.block_on(open_products(&mut products, page, all)));
    Ok(())
}

pub fn handle_browse(config: &AppConfig) -> Result<()> {
    let mut products = build_products_page(config)?;
    let runtime = build_runtime()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    runtime.block_on(run_browse(&mut products, stdin.lock(), &mut stdout))?;
    writeln!(stdout).context("Failed to write output")?;
    Ok(())
}

pub fn execute(cli: &Cli) -> Result<()> {
    let config = build_config(&cli.service)?;
    match &cli.command {
        Command::Open { path, page, all } => handle_open(&config, path, *page, *all),
        Command::Browse => handle_browse(&config),
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")
}

fn build_products_page(config: &AppConfig) -> Result<ProductsPage<CatalogClient>> {
    let service = config.require_service()?;
    let client = CatalogClient::new(service)?;
    Ok(ProductsPage::new(client, config.pagination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    fn args(endpoint: Option<&str>, api_key: Option<&str>) -> ServiceArgs {
        ServiceArgs {
            endpoint: endpoint.map(str::to_string),
            api_key: api_key.map(str::to_string),
            collection: "menu_item".to_string(),
            page_size: 8,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_config_without_credentials_has_no_service() {
        let config = build_config(&args(None, None)).unwrap();
        assert!(config.service.is_none());
    }

    #[test]
    fn test_config_with_partial_credentials_fails() {
        let err = build_config(&args(Some("http://localhost"), None)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::Missing("api key"))
        );
    }

    #[test]
    fn test_config_carries_service_options() {
        let mut flags = args(Some("http://localhost:8000/"), Some("key"));
        flags.collection = "specials".to_string();
        flags.page_size = 4;

        let config = build_config(&flags).unwrap();
        let service = config.require_service().unwrap();

        assert_eq!(service.endpoint, "http://localhost:8000");
        assert_eq!(service.collection, "specials");
        assert_eq!(service.timeout_secs, 5);
        assert_eq!(config.pagination.page_size(), 4);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut flags = args(None, None);
        flags.page_size = 0;
        assert!(build_config(&flags).is_err());
    }

    #[test]
    fn test_products_without_service_fails() {
        let err = handle_open(&AppConfig::new(), "/products", 1, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::Missing("endpoint"))
        );
    }

    #[test]
    fn test_runtime_is_single_threaded() {
        let runtime = build_runtime().unwrap();
        assert_eq!(
            runtime.handle().runtime_flavor(),
            tokio::runtime::RuntimeFlavor::CurrentThread
        );
    }

    #[test]
    fn test_unknown_route_fails() {
        let err = handle_open(&AppConfig::new(), "/cart", 1, false).unwrap_err();
        assert_eq!(err.to_string(), "No view mounted at \"/cart\"");
    }
}
