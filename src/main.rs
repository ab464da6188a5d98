use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, path::PathBuf, time::Duration};

use arbor::config::Config;
use arbor::seed::Seed;
use arbor::{Explorer, HierarchyStore};

mod app;
mod handlers;
mod state;
mod ui;
mod utils;

use state::UiState;

/// Terminal explorer for an in-memory folder tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/arbor-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Seed tree to load instead of the built-in sample (YAML or JSON)
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Print the listing of this container as JSON and exit
    #[arg(long, value_name = "PATH")]
    list: Option<String>,
}

pub struct App {
    pub explorer: Explorer,
    pub ui: UiState,
}

impl App {
    fn new(config: &Config, store: HierarchyStore) -> Self {
        let explorer = Explorer::new(store, config.history_limit).with_sort(config.sort_spec());
        let mut app = Self {
            explorer,
            ui: UiState::new(config.vim_mode, config.display_mode),
        };
        app.clamp_cursor();
        app
    }
}

/// Route `log` output to the debug file; without --debug nothing is logged
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }
    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_store(config: &Config, seed_override: Option<PathBuf>) -> Result<HierarchyStore> {
    let seed = match seed_override.or_else(|| config.seed.clone()) {
        Some(path) => {
            info!("Loading seed from {}", path.display());
            Seed::from_file(&path)?
        }
        None => Seed::sample()?,
    };

    let mut store = HierarchyStore::new().with_copy_prefix(&config.copy_prefix);
    seed.apply(&mut store)?;
    Ok(store)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;
    debug!("Debug mode enabled");

    let (mut config, config_path) = Config::discover(args.config.as_deref())?;
    match &config_path {
        Some(path) => debug!("Loaded config from: {:?}", path),
        None => debug!("No config file found, using defaults"),
    }

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let store = load_store(&config, args.seed)?;

    if let Some(path) = args.list {
        let listing = store.list_children(&path, config.sort_spec())?;
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let mut app = App::new(&config, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast
        if let Some((_, timestamp)) = app.ui.toast_message {
            if arbor::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis()) {
                app.ui.toast_message = None;
            }
        }

        if app.ui.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
