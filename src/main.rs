use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use leaddash::app::{pump_background, App};
use leaddash::config::{self, Config};
use leaddash::domain::dashboard::{Locale, Messages};
use leaddash::headless;
use leaddash::infrastructure::api::{DashboardApi, HttpDashboardApi};
use leaddash::infrastructure::runtime::{RuntimeBridge, RuntimeCommand};
use leaddash::ui::terminal as screen;
use leaddash::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "leaddash",
    version,
    about = "Leaddash: a terminal dashboard for the lead CRM"
)]
struct Args {
    /// Config file (defaults to ~/.config/leaddash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CRM base URL (e.g. http://localhost:5000)
    #[arg(long)]
    base_url: Option<String>,

    /// Message language: pt-BR or en
    #[arg(long)]
    locale: Option<Locale>,

    /// Refresh stats every SECS seconds (off unless set)
    #[arg(long, value_name = "SECS")]
    refresh_interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Fetch the dashboard counters once and print them
    Stats,
    /// Submit one quick action and print the outcome
    QuickAction {
        /// Action identifier
        #[arg(long, default_value = "")]
        action: String,
        /// Target lead id
        #[arg(long, default_value = "")]
        lead: String,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_path = config::log_path();
    if let Err(err) = logging::init(&args.log_level, &log_path) {
        eprintln!("logging disabled: {err:#}");
    }
    debug!("leaddash v{} starting", env!("CARGO_PKG_VERSION"));

    let config = apply_overrides(config::load(args.config.as_deref()), &args);
    let api: Arc<dyn DashboardApi> = Arc::new(
        HttpDashboardApi::new(&config.api_settings()).context("Failed to create API client")?,
    );
    info!(base_url = %config.api_settings().base_url, locale = %config.locale, "configured");

    match args.command {
        Some(cmd) => run_headless(cmd, &config, api),
        None => run_tui(&config, api).map(|()| ExitCode::SUCCESS),
    }
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(base_url) = args.base_url.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        config.base_url = base_url.to_string();
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(secs) = args.refresh_interval {
        config.stats_refresh_secs = Some(secs);
    }
    config
}

fn run_headless(cmd: Cmd, config: &Config, api: Arc<dyn DashboardApi>) -> Result<ExitCode> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;
    let messages = Messages::new(config.locale);

    match cmd {
        Cmd::Stats => {
            let page = rt
                .block_on(headless::fetch_stats_page(api.as_ref(), &messages))
                .context("Error fetching dashboard stats")?;
            for line in headless::stats_lines(&page) {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Cmd::QuickAction { action, lead } => {
            let notification =
                rt.block_on(headless::run_quick_action(api.as_ref(), &messages, &action, &lead));
            println!("{}", notification.text);
            Ok(if notification.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn run_tui(config: &Config, api: Arc<dyn DashboardApi>) -> Result<()> {
    let runtime = RuntimeBridge::new(api, config.stats_refresh_interval())?;
    let app = App::new(config);

    let mut stdout = io::stdout();
    screen::enter(&mut stdout, enable_raw_mode, disable_raw_mode)?;

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = screen::leave(&mut io::stdout(), disable_raw_mode);
            return Err(err.into());
        }
    };

    let res = run_app(&mut terminal, app, runtime);

    screen::leave(terminal.backend_mut(), disable_raw_mode)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
