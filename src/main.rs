use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use serde::Serialize;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use urbanpulse::app::{App, Screen};
use urbanpulse::cli::{Cli, Commands};
use urbanpulse::config::Config;
use urbanpulse::logic::{CityComparison, CitySnapshot, DataSyncService};
use urbanpulse::ui::components::StatusBar;
use urbanpulse::ui::screens::{
    AirQualityScreen, ComparisonScreen, DashboardScreen, RecommendationsScreen, TrendsScreen,
};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Serialize)]
struct SnapshotReport<'a> {
    city: &'a CitySnapshot,
    compare: Option<&'a CitySnapshot>,
    comparison: Option<&'a CityComparison>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Some(Commands::Init) => {
            let (config, path) = Config::setup_interactive()?;
            println!(
                "Wrote {} with {} cities (default: {})",
                path.display(),
                config.cities.len(),
                config.primary_city()
            );
            Ok(())
        }
        Some(Commands::Check) => run_check(&cli).await,
        Some(Commands::Snapshot { json }) => run_snapshot(&cli, json).await,
        None => run_tui(&cli).await,
    }
}

/// `-v` wins over `RUST_LOG`; the TUI only logs when asked to.
fn init_logging(cli: &Cli) {
    let env_filter = std::env::var("RUST_LOG").ok();
    if cli.command.is_none() && cli.verbose == 0 && env_filter.is_none() {
        return;
    }

    let filter = if cli.verbose > 0 {
        EnvFilter::new(cli.log_level())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match Config::load(cli.config.clone()) {
        Ok(c) => Ok(c),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `urbanpulse init` or copy config/config.yaml.example to config/config.yaml");
            std::process::exit(1);
        }
    }
}

async fn run_check(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    println!("Config OK: {} cities, default {}", config.cities.len(), config.primary_city());
    if let Some(ref compare) = config.compare_city {
        println!("Comparing against {}", compare);
    }

    let city = cli.city.as_deref().unwrap_or_else(|| config.primary_city());
    let data_sync = DataSyncService::new(&config)?;
    let status = data_sync.check_connections(city).await;
    println!("{}", status.describe());

    if !status.all_connected() {
        anyhow::bail!("OpenWeatherMap check failed for {}", city);
    }
    Ok(())
}

async fn run_snapshot(cli: &Cli, json: bool) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let primary = cli
        .city
        .clone()
        .unwrap_or_else(|| config.primary_city().to_string());
    let compare = cli.compare.clone().or_else(|| config.compare_city.clone());

    let data_sync = DataSyncService::new(&config)?;
    let (snapshot, compare_snapshot) = data_sync
        .refresh(&primary, compare.as_deref())
        .await
        .with_context(|| format!("Failed to fetch data for {}", primary))?;
    let comparison = compare_snapshot
        .as_ref()
        .map(|other| CityComparison::new(&snapshot, other));

    if json {
        let report = SnapshotReport {
            city: &snapshot,
            compare: compare_snapshot.as_ref(),
            comparison: comparison.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_snapshot(&snapshot);
    if let (Some(other), Some(comparison)) = (compare_snapshot.as_ref(), comparison.as_ref()) {
        println!();
        print_snapshot(other);
        println!();
        println!("More comfortable: {}", comparison.winner);
    }
    Ok(())
}

fn print_snapshot(s: &CitySnapshot) {
    let c = &s.conditions;
    let name = match c.country {
        Some(ref country) => format!("{}, {}", c.city, country),
        None => c.city.clone(),
    };
    println!("{} ({})", name, c.condition);
    println!(
        "  Temperature  {:.1}°C, feels like {:.1}°C ({})",
        c.reading.temperature_c,
        s.feels_like_c,
        s.feels_like_regime.as_str()
    );
    println!("  Humidity     {:.0}%", c.reading.humidity_percent);
    println!(
        "  Wind         {:.1} m/s ({:.1} km/h)",
        c.reading.wind_speed_ms,
        c.reading.wind_speed_kmh()
    );
    println!("  Visibility   {:.1} km", c.visibility_km);
    println!(
        "  AQI          {} ({}) {}  PM2.5 {:.1} µg/m³",
        s.aqi_value(),
        s.category.label(),
        s.category.emoji(),
        s.pollution.pm25
    );
    println!("  Comfort      {:.1}/100 {}", s.comfort_score, s.comfort_emoji());
    println!("  Advisories");
    for rec in &s.recommendations {
        println!("    {} - {}", rec.display_title(), rec.description);
    }
}

async fn run_tui(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let data_sync = DataSyncService::new(&config)?;
    let mut app = App::new(config, cli.city.as_deref(), cli.compare.as_deref())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &data_sync).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    data_sync: &DataSyncService,
) -> anyhow::Result<()> {
    loop {
        draw(terminal, app)?;

        // Refresh after drawing so the "Refreshing" status is visible
        if app.needs_refresh {
            app.needs_refresh = false;
            app.refreshing = true;
            draw(terminal, app)?;

            let primary = app.current_city().to_string();
            let compare = app.compare_city().map(str::to_string);
            match data_sync.refresh(&primary, compare.as_deref()).await {
                Ok((snapshot, compare_snapshot)) => {
                    app.apply_refresh(snapshot, compare_snapshot);
                    app.set_status("Data refreshed");
                }
                Err(e) => {
                    tracing::warn!(city = %primary, "Refresh failed: {}", e);
                    match data_sync.last_good(&primary, compare.as_deref()).await {
                        Some((snapshot, compare_snapshot)) => {
                            app.apply_refresh(snapshot, compare_snapshot);
                            app.set_status(&format!("Refresh failed: {} (showing cached data)", e));
                        }
                        None => {
                            app.discard_stale();
                            app.set_status(&format!("Refresh failed: {}", e));
                        }
                    }
                }
            }
            app.refreshing = false;
            continue;
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => app.switch_screen(Screen::Dashboard),
                    KeyCode::Char('c') => app.next_city(),
                    KeyCode::Char('C') => app.prev_city(),
                    KeyCode::Char('v') => app.cycle_compare(),
                    KeyCode::Char('r') => app.request_refresh(),
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        }
                    }
                    code => handle_screen_input(app, code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(terminal: &mut Tui, app: &App) -> anyhow::Result<()> {
    let comparison = app.comparison();

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(2)])
            .split(f.area());
        let area = chunks[0];
        let snapshot = app.snapshot.as_ref();
        let trends = app.trends.as_ref();

        match app.screen {
            Screen::Dashboard => {
                let screen = DashboardScreen::new(app.current_city(), snapshot)
                    .refreshing(app.refreshing);
                f.render_widget(screen, area);
            }
            Screen::Trends => f.render_widget(TrendsScreen::new(snapshot, trends), area),
            Screen::AirQuality => f.render_widget(AirQualityScreen::new(snapshot, trends), area),
            Screen::Comparison => {
                let screen = ComparisonScreen::new(comparison.as_ref())
                    .with_compare_city(app.compare_city());
                f.render_widget(screen, area);
            }
            Screen::Recommendations => {
                let screen = RecommendationsScreen::new(app.recommendations())
                    .with_selection(app.recommendations_state.selected_index)
                    .with_best_time(trends.and_then(|t| t.best_time));
                f.render_widget(screen, area);
            }
        }

        let status = StatusBar::new(app.screen, app.current_city())
            .with_compare(app.compare_city())
            .with_message(app.status_message.as_deref());
        f.render_widget(status, chunks[1]);
    })?;

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    if app.screen != Screen::Recommendations {
        return;
    }
    let count = app.recommendations().len();
    match code {
        KeyCode::Up => app.recommendations_state.prev(),
        KeyCode::Down => app.recommendations_state.next(count),
        _ => {}
    }
}
