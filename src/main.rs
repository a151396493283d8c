use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use storefront_search::{
    HttpSource, InteractiveSearch, QueryExecutor, SearchConfig, format_item,
    logging::{self, LogTarget},
    suggest::ui::app_state::is_searchable,
};

#[derive(Parser)]
#[command(
    name = "storefront-search",
    version,
    about = "Search-as-you-type over a storefront's product and service catalogs",
    long_about = None
)]
struct Cli {
    /// Search query
    #[arg(required_unless_present = "interactive")]
    query: Option<String>,

    /// Interactive search box
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Base URL of the storefront API
    #[arg(long, env = "STOREFRONT_API_URL", default_value = storefront_search::config::DEFAULT_BASE_URL)]
    api_url: String,

    /// Candidate product endpoint, highest priority first (repeatable, `{q}` is the query)
    #[arg(long = "product-endpoint", env = "STOREFRONT_PRODUCT_ENDPOINTS", value_delimiter = ',')]
    product_endpoints: Vec<String>,

    /// Candidate service endpoint, highest priority first (repeatable, `{q}` is the query)
    #[arg(long = "service-endpoint", env = "STOREFRONT_SERVICE_ENDPOINTS", value_delimiter = ',')]
    service_endpoints: Vec<String>,

    /// Quiet interval before a search is dispatched
    #[arg(long, env = "STOREFRONT_DEBOUNCE_MS", default_value_t = storefront_search::suggest::constants::DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Delay between losing focus and closing the list
    #[arg(long, env = "STOREFRONT_BLUR_GRACE_MS", default_value_t = storefront_search::suggest::constants::BLUR_GRACE_MS)]
    blur_grace_ms: u64,

    /// Per-request timeout (no timeout when unset)
    #[arg(long, env = "STOREFRONT_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, requires = "log_file")]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = SearchConfig {
            base_url: self.api_url.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
            blur_grace: Duration::from_millis(self.blur_grace_ms),
            request_timeout: self.timeout_ms.map(Duration::from_millis),
            ..SearchConfig::default()
        };
        if !self.product_endpoints.is_empty() {
            config.product_endpoints = self.product_endpoints.clone();
        }
        if !self.service_endpoints.is_empty() {
            config.service_endpoints = self.service_endpoints.clone();
        }
        Ok(config.validated()?)
    }

    fn log_target(&self) -> LogTarget<'_> {
        match (&self.log_file, self.interactive) {
            (Some(path), _) => LogTarget::File {
                path,
                json: self.log_json,
            },
            (None, true) => LogTarget::Off,
            (None, false) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.log_target(), cli.verbose)?;

    let config = cli.search_config()?;
    let source = HttpSource::new(&config).context("failed to build HTTP client")?;
    if cli.verbose {
        eprintln!("Searching: {}", source.base_url());
    }
    let executor = QueryExecutor::new(Arc::new(source), &config);
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    let stdout = io::stdout();

    // Interactive mode
    if cli.interactive {
        let mut interactive = InteractiveSearch::new(&config, executor, runtime.handle().clone());
        let intents = interactive.run()?;

        let mut handle = stdout.lock();
        for intent in &intents {
            serde_json::to_writer(&mut handle, intent)?;
            writeln!(&mut handle)?;
        }
        return Ok(());
    }

    let query = cli.query.as_deref().unwrap_or_default().trim();
    let start = Instant::now();
    let items = if is_searchable(query) {
        runtime.block_on(executor.execute(query))
    } else {
        Vec::new()
    };
    let duration = start.elapsed();

    let mut handle = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            if items.is_empty() {
                writeln!(&mut handle, "No results found.")?;
            } else {
                writeln!(&mut handle, "Found {} results:\n", items.len())?;
                for item in &items {
                    writeln!(&mut handle, "{}", format_item(item, !cli.no_color))?;
                }
                eprintln!("\nSearch completed in {}ms", duration.as_millis());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": query,
                "results": items,
                "duration_ms": duration.as_millis(),
                "returned_count": items.len()
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(&mut handle)?;
        }
        OutputFormat::JsonL => {
            for item in &items {
                serde_json::to_writer(&mut handle, item)?;
                writeln!(&mut handle)?;
            }
            let metadata = serde_json::json!({
                "_metadata": {
                    "query": query,
                    "duration_ms": duration.as_millis(),
                    "returned_count": items.len()
                }
            });
            serde_json::to_writer(&mut handle, &metadata)?;
            writeln!(&mut handle)?;
        }
    }

    Ok(())
}
