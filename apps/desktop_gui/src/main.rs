use std::path::PathBuf;

mod controller;
mod ui;

use agenda_core::{load_settings, load_settings_from, settings::ENV_PREFIX};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::{AgendaApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "agenda-desktop", about = "Live event agenda viewer")]
struct Args {
    /// Program document (JSON); the bundled sample is shown when omitted.
    #[arg(long)]
    program: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Shared link or fragment to open, e.g. `#day=2025-12-29`.
    #[arg(long)]
    link: Option<String>,
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => load_settings_from(path, true, ENV_PREFIX)?,
        None => load_settings()?,
    };
    let startup = StartupConfig {
        program_path: args.program,
        link: args.link,
        locale: args.locale,
        settings,
    };
    let program = startup.load_program()?;
    let title = program.program_name.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(AgendaApp::bootstrap(program, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell failed: {err}"))
}
