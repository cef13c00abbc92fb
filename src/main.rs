use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use kwsuggest::app::{App, Submission};
use kwsuggest::cache::KeywordCache;
use kwsuggest::config::{self, Config, LookupConfig};
use kwsuggest::error::SuggestError;
use kwsuggest::lookup::{self, HttpLookup};
use kwsuggest::navigator::{ResultsNavigator, StdoutNavigator};
use kwsuggest::storage::{
    KeyValueStorage, MemoryStorage, SessionFileStorage, session_id_from_env, session_path,
};

/// Interactive search prompt
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive search prompt with debounced suggestions and a session keyword cache"
)]
struct Args {
    /// Session whose keyword cache to use (defaults to the parent shell's process id)
    #[arg(long, env = "KWSUGGEST_SESSION")]
    session: Option<String>,

    /// Suggestion endpoint, overriding lookup.endpoint from the config file
    #[arg(long)]
    endpoint: Option<String>,

    /// Keep the keyword cache in memory for this run only
    #[arg(long)]
    no_persist: bool,

    /// Delete the session's keyword cache and exit
    #[arg(long)]
    clear_cache: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/kwsuggest-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        // Logging is best effort; the prompt still runs if the file can't be opened
        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/kwsuggest-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== KWSUGGEST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();
    let mut config = config_result.config;

    let args = Args::parse();
    if let Some(endpoint) = args.endpoint {
        config.lookup.endpoint = endpoint;
    }
    let session_id = args.session.unwrap_or_else(session_id_from_env);

    if args.clear_cache {
        let path = clear_session_cache(&session_id)?;
        eprintln!("Cleared keyword cache {}", path.display());
        return Ok(());
    }

    let storage = open_storage(&session_id, args.no_persist)?;
    let cache = KeywordCache::new(storage, &config.cache);

    let terminal = init_terminal()?;

    let app = App::new(cache, &config);
    let result = run(terminal, app, &config, config_result.warning);

    restore_terminal()?;
    let mut app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(submission) = app.submission.take() {
        handle_submission(&mut app, submission, &config)?;
    }

    #[cfg(debug_assertions)]
    log::debug!("=== KWSUGGEST DEBUG SESSION ENDED ===");

    Ok(())
}

fn open_storage(
    session_id: &str,
    no_persist: bool,
) -> Result<Box<dyn KeyValueStorage>, SuggestError> {
    if no_persist {
        return Ok(Box::new(MemoryStorage::new()));
    }

    let path = session_path(session_id).ok_or(SuggestError::CacheDirUnavailable)?;
    log::info!("Using session store {:?}", path);
    Ok(Box::new(SessionFileStorage::open(path)))
}

fn clear_session_cache(session_id: &str) -> Result<PathBuf, SuggestError> {
    let path = session_path(session_id).ok_or(SuggestError::CacheDirUnavailable)?;
    SessionFileStorage::open(path.clone()).clear()?;
    Ok(path)
}

/// Initialize terminal with raw mode, alternate screen, bracketed paste and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config: &Config,
    config_warning: Option<String>,
) -> Result<App> {
    if let Some(warning) = config_warning {
        app.notification.show_warning(&warning);
    }

    setup_lookup_worker(&mut app, &config.lookup);

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.shutdown();
    Ok(app)
}

/// Set up the lookup worker thread and channels
fn setup_lookup_worker(app: &mut App, config: &LookupConfig) {
    let lookup = match HttpLookup::from_config(config) {
        Ok(lookup) => lookup,
        Err(e) => {
            log::error!("Failed to create lookup client: {}", e);
            app.notification
                .show_warning(&format!("Suggestions unavailable: {}", e));
            return;
        }
    };

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.search.set_channels(request_tx, response_rx);

    lookup::worker::spawn_worker(lookup, request_rx, response_tx);
}

/// Navigate to the results, then record the keyword in the session cache
fn handle_submission(app: &mut App, submission: Submission, config: &Config) -> Result<()> {
    let mut navigator = StdoutNavigator::from_config(&config.navigation);
    navigator.navigate_to_results(&submission.keyword)?;

    if !submission.persist {
        return Ok(());
    }

    if let Err(e) = remember_keyword(&mut app.cache, &submission.keyword, &config.lookup) {
        log::warn!("Failed to cache {:?}: {}", submission.keyword, e);
        eprintln!(
            "Warning: could not save {:?} to recent searches: {}",
            submission.keyword, e
        );
    }

    Ok(())
}

fn remember_keyword(
    cache: &mut KeywordCache,
    keyword: &str,
    config: &LookupConfig,
) -> Result<(), SuggestError> {
    let lookup = HttpLookup::from_config(config)?;
    cache.set(keyword, &lookup)?;
    Ok(())
}
