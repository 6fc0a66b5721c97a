use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_COLLECTION;
use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Parser, Debug)]
#[command(author, version, about = "menu catalog viewer")]
pub struct Cli {
    #[command(flatten)]
    pub service: ServiceArgs,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

/// Data service and paging options shared by every command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServiceArgs {
    /// Base URL of the hosted catalog service
    #[arg(long, env = "CATALOG_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Service API key, sent as both `apikey` and bearer token
    #[arg(long = "api-key", env = "CATALOG_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Table holding the catalog items
    #[arg(long, default_value = DEFAULT_COLLECTION, global = true)]
    pub collection: String,

    /// Items shown per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    pub page_size: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the view mounted at a path (`/`, `/products`, `/about`)
    Open {
        path: String,
        /// Page to show for `/products`
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Print every page of `/products` instead of one
        #[arg(long)]
        all: bool,
    },
    /// Load the catalog once and page through it interactively
    Browse,
}
