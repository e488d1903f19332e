use std::{io, path::PathBuf, sync::Arc};

use agenda_core::{
    load_program, load_settings, load_settings_from, resolve_locale, AddressBar, AgendaEngine,
    AgendaFormatter, AgendaSettings, Clock, ClockTicker, EngineDeps, EventBus, ManualClock,
    SystemClock,
};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "agenda", about = "Print an event agenda with live session status")]
struct Args {
    /// Program document (JSON). Falls back to `program_path` from settings.
    #[arg(long)]
    program: Option<PathBuf>,
    /// Settings file; defaults to ./agenda.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Shared link or bare fragment, e.g. `#day=2025-12-29`.
    #[arg(long)]
    link: Option<String>,
    /// Open one day (YYYY-MM-DD).
    #[arg(long)]
    day: Option<String>,
    /// Evaluate statuses at a fixed local time instead of now.
    #[arg(long, value_parser = parse_local_time)]
    at: Option<NaiveDateTime>,
    #[arg(long)]
    locale: Option<String>,
    /// Re-print on every clock tick.
    #[arg(long)]
    watch: bool,
    /// Emit the view model as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_local_time(raw: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM, got '{raw}'"))
}

fn settings_for(args: &Args) -> Result<AgendaSettings> {
    let settings = match &args.config {
        Some(path) => load_settings_from(path, true, agenda_core::settings::ENV_PREFIX),
        None => load_settings(),
    };
    settings.context("failed to load agenda settings")
}

fn emit_view(engine: &AgendaEngine, args: &Args, footer: Option<&str>) -> Result<()> {
    let view = engine.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    let stdout = io::stdout();
    render::render_agenda(&mut stdout.lock(), &view, footer)?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    let settings = settings_for(&args)?;

    let program_path = args
        .program
        .clone()
        .or_else(|| settings.program_path.clone())
        .ok_or_else(|| anyhow!("no program document given; pass --program or set program_path"))?;
    let program = load_program(&program_path)
        .with_context(|| format!("failed to load program from {}", program_path.display()))?;

    let clock: Arc<dyn Clock> = match args.at {
        Some(at) => Arc::new(ManualClock::new(at)),
        None => Arc::new(SystemClock),
    };
    let fragment = args
        .link
        .as_deref()
        .and_then(|link| shared::protocol::fragment_of(link).or(Some(link)));
    let address = AddressBar::with_fragment(settings.base_path.clone(), fragment);
    let locale = resolve_locale(args.locale.as_deref().or(settings.locale.as_deref()));

    let bus = EventBus::new();
    let mut engine = AgendaEngine::mount(
        program,
        EngineDeps {
            clock,
            history: Box::new(address.clone()),
            formatter: AgendaFormatter::new(locale),
            tick_interval: None,
        },
        &bus,
    );

    if let Some(day) = &args.day {
        engine
            .open_day(day)
            .with_context(|| format!("cannot open day {day}"))?;
        eprintln!("Share: {}", address.link());
    }

    emit_view(&engine, &args, settings.footer.as_deref())?;
    if args.watch {
        let ticker = ClockTicker::start(settings.tick_interval());
        while ticker.wait() {
            engine.refresh_clock();
            tracing::debug!(now = %engine.now(), "watch tick");
            println!();
            emit_view(&engine, &args, settings.footer.as_deref())?;
        }
    }

    engine.unmount();
    Ok(())
}
