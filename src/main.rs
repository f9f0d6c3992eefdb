use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::runtime::{Builder, Handle, Runtime};

use country_typeahead::app::{self, App};
use country_typeahead::autocomplete::{AutoComplete, ListViewport, TextInput};
use country_typeahead::config::{self, Config};
use country_typeahead::logging;
use country_typeahead::lookup::{BundledLookup, CountryLookup, RestCountriesClient};
use country_typeahead::suggestions::LifecycleStatus;

/// Interactive country lookup with typeahead suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Use the built-in country table instead of restcountries.com
    #[arg(long)]
    offline: bool,

    /// Print the suggestions for QUERY and exit instead of starting the UI
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Config file (default: ~/.config/country-typeahead/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Quiet period before a lookup is sent, in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init()?;

    let args = Args::parse();
    let config = load_config(&args)?;

    // One worker drives lookups while the UI thread blocks on terminal input
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let lookup: Arc<dyn CountryLookup> = if config.lookup.offline {
        Arc::new(BundledLookup::new())
    } else {
        Arc::new(RestCountriesClient::from_config(&config.lookup)?)
    };

    match args.query {
        Some(query) => print_suggestions(&runtime, lookup, &query),
        None => run_ui(&runtime, lookup, &config),
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    if args.offline {
        config.lookup.offline = true;
    }
    if let Some(ms) = args.debounce_ms {
        config.suggestions.debounce_ms = ms;
    }
    Ok(config)
}

fn run_ui(runtime: &Runtime, lookup: Arc<dyn CountryLookup>, config: &Config) -> Result<()> {
    let mut app = App::new(lookup, config, runtime.handle().clone());

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = app::run(&mut terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    Ok(result?)
}

/// One lookup through the controller, without the UI
fn print_suggestions(
    runtime: &Runtime,
    lookup: Arc<dyn CountryLookup>,
    query: &str,
) -> Result<()> {
    let state = runtime.block_on(async {
        let mut input = TextInput::default();
        let mut autocomplete =
            AutoComplete::new(lookup, ListViewport::default(), Duration::ZERO, Handle::current());

        autocomplete.handle_input(query, &mut input);
        // First sync schedules the lookup, second fires it
        autocomplete.sync(input.as_str());
        autocomplete.sync(input.as_str());
        if autocomplete.state().is_loading() {
            autocomplete.settle_next().await;
        }
        autocomplete.state().clone()
    });

    if state.status == LifecycleStatus::Rejected {
        let error = state
            .error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(eyre!("Lookup failed: {}", error));
    }

    let mut stdout = std::io::stdout().lock();
    if state.suggestions.is_empty() {
        writeln!(stdout, "No results")?;
    }
    for suggestion in &state.suggestions {
        writeln!(
            stdout,
            "{}\t{}\t{}",
            suggestion.id, suggestion.primary_name, suggestion.secondary_name
        )?;
    }
    Ok(())
}
