//! Content delivery CLI
//!
//! Runs broker queries and builds navigation against local content dumps,
//! using the same adapters and serializers as a delivery deployment.
//!
//! ```sh
//! # Validate the configuration
//! content-cli check
//!
//! # Second page of schema 12 components, via the SDL Web 8 adapter
//! content-cli --cms-version web8 query --seed components.json --schema 12 --start 10 --page-size 10
//!
//! # Breadcrumb for a page
//! content-cli breadcrumb --sitemap sitemap.json /products/widgets.html
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use content_delivery::config::AppConfig;
use content_delivery::domain::{
    BrokerQuery, CmsVersion, ComponentMeta, ContentBroker, KeywordFilter, ModelSerializer, Query,
    SitemapItem, SortColumn, SortDirection,
};
use content_delivery::runtime::{init_tracing, DeliveryRuntime, RuntimeOptions};
use content_delivery::{AppResult, InMemoryBroker, NavigationBuilder};

/// Content delivery client for broker queries and navigation.
#[derive(Parser, Debug)]
#[command(name = "content-cli", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CONTENT_DELIVERY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the CMS version (2013sp1, web8, web8.5).
    #[arg(long)]
    cms_version: Option<CmsVersion>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration and exit.
    Check,

    /// Run a component query against a JSON dump of published components.
    Query {
        /// JSON array of component metadata.
        #[arg(long)]
        seed: PathBuf,
        #[arg(long)]
        publication: Option<u32>,
        #[arg(long)]
        schema: Option<u32>,
        /// Keyword filter as `category:key` (repeatable).
        #[arg(long = "keyword", value_parser = parse_keyword)]
        keywords: Vec<KeywordFilter>,
        #[arg(long, default_value_t = 0)]
        start: u32,
        /// Defaults to the configured page size.
        #[arg(long, default_value_t = 0)]
        page_size: u32,
        #[arg(long, default_value_t = 0)]
        max_results: u32,
        /// Sort column (title, last_published_date, item_id, date_created).
        #[arg(long, value_parser = parse_sort_column)]
        sort: Option<SortColumn>,
        #[arg(long)]
        descending: bool,
        /// Print the vendor query instead of executing it.
        #[arg(long)]
        explain: bool,
    },

    /// Print the breadcrumb trail for a page.
    Breadcrumb {
        /// JSON sitemap tree.
        #[arg(long)]
        sitemap: PathBuf,
        url: String,
    },

    /// Print top-level navigation, or the context navigation of a page.
    Navigation {
        #[arg(long)]
        sitemap: PathBuf,
        /// Page whose siblings to list; top navigation when omitted.
        url: Option<String>,
    },
}

fn parse_keyword(raw: &str) -> Result<KeywordFilter, String> {
    raw.split_once(':')
        .filter(|(category, key)| !category.is_empty() && !key.is_empty())
        .map(|(category, key)| KeywordFilter::new(category, key))
        .ok_or_else(|| format!("expected category:key, got '{}'", raw))
}

fn parse_sort_column(raw: &str) -> Result<SortColumn, String> {
    match raw {
        "title" => Ok(SortColumn::Title),
        "last_published_date" => Ok(SortColumn::LastPublishedDate),
        "item_id" => Ok(SortColumn::ItemId),
        "date_created" => Ok(SortColumn::DateCreated),
        other => Err(format!("unknown sort column '{}'", other)),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(content_delivery::default_config_path);

    let (mut config, load_error) = if config_path.exists() {
        match AppConfig::load(&config_path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (AppConfig::default(), Some(e)),
        }
    } else {
        (AppConfig::default(), None)
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    if let Some(e) = load_error {
        error!("Failed to load config from {}: {}", config_path.display(), e);
        return Err(e.into());
    }
    info!("Configuration: {}", config_path.display());

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(version) = cli.cms_version {
        info!("CLI override: cms_version = {}", version.identifier());
        config.delivery.cms_version = version;
    }

    match cli.command {
        Command::Check => {
            println!("Configuration is valid");
            println!("   Config file  : {}", config_path.display());
            println!("   CMS version  : {}", config.delivery.cms_version);
            println!("   Page size    : {}", config.delivery.default_page_size);
            println!("   Serializer   : {:?}", config.serializer.format);
            println!("   Log level    : {}", config.logging.level);
            Ok(())
        }
        Command::Query {
            seed,
            publication,
            schema,
            keywords,
            start,
            page_size,
            max_results,
            sort,
            descending,
            explain,
        } => {
            let components: Vec<ComponentMeta> = read_json(&seed)?;
            info!("Loaded {} components from {}", components.len(), seed.display());

            let broker: Arc<dyn ContentBroker> =
                Arc::new(InMemoryBroker::with_components(components));
            let runtime = DeliveryRuntime::new(RuntimeOptions {
                config,
                broker: Some(broker),
            });

            let mut query =
                BrokerQuery::new(Query::new(start, page_size).with_max_results(max_results));
            query.publication_id = publication;
            query.schema_id = schema;
            query.keyword_filters = keywords;
            if let Some(column) = sort {
                let direction = if descending {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                query = query.sorted_by(column, direction);
            }

            let output = run_query(&runtime, query, explain).await?;
            println!("{}", output);
            Ok(())
        }
        Command::Breadcrumb { sitemap, url } => {
            let root: SitemapItem = read_json(&sitemap)?;
            let runtime = DeliveryRuntime::new(RuntimeOptions {
                config,
                broker: None,
            });
            let crumb = NavigationBuilder::new(&root).breadcrumb(&url)?;
            println!("{}", runtime.serializer().serialize(&crumb)?);
            Ok(())
        }
        Command::Navigation { sitemap, url } => {
            let root: SitemapItem = read_json(&sitemap)?;
            let runtime = DeliveryRuntime::new(RuntimeOptions {
                config,
                broker: None,
            });
            let builder = NavigationBuilder::new(&root);
            let links = match url {
                Some(url) => builder.context_navigation(&url)?,
                None => builder.top_navigation(),
            };
            println!("{}", runtime.serializer().serialize(&links)?);
            Ok(())
        }
    }
}

async fn run_query(runtime: &DeliveryRuntime, query: BrokerQuery, explain: bool) -> AppResult<String> {
    if explain {
        let vendor = runtime.queries().prepare(query)?;
        return Ok(format!("{:#?}", vendor));
    }
    let page = runtime.queries().execute(query).await?;
    Ok(runtime.serializer().serialize(&page)?)
}
