use std::{path::PathBuf, sync::Arc, time::Duration};

use agenda_core::{
    load_program, parse_program, resolve_locale, AddressBar, AgendaEngine, AgendaFormatter,
    AgendaSettings, EngineDeps, EventBus, SystemClock,
};
use arboard::Clipboard;
use eframe::egui;
use shared::{domain::Program, protocol::fragment_of};

use crate::controller::{
    actions::{dispatch_action, UiAction},
    events::global_key_events,
};
use crate::ui::{
    panels::{self, AddressBarRequest, AddressBarState},
    theme,
};

const BUNDLED_PROGRAM: &str = include_str!("../../assets/program.json");
const REPAINT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub program_path: Option<PathBuf>,
    pub link: Option<String>,
    pub locale: Option<String>,
    pub settings: AgendaSettings,
}

impl StartupConfig {
    /// Configured document, or the bundled sample program.
    pub fn load_program(&self) -> anyhow::Result<Arc<Program>> {
        let path = self
            .program_path
            .as_ref()
            .or(self.settings.program_path.as_ref());
        match path {
            Some(path) => Ok(load_program(path)?),
            None => {
                tracing::info!("no program path configured; using bundled program");
                Ok(Arc::new(parse_program(BUNDLED_PROGRAM)?))
            }
        }
    }
}

pub struct AgendaApp {
    engine: AgendaEngine,
    bus: EventBus,
    address: AddressBar,
    address_input: String,
    footer: Option<String>,
    status: String,
    scroll_to_agenda: bool,
    visuals_applied: bool,
}

impl AgendaApp {
    pub fn bootstrap(program: Arc<Program>, startup: StartupConfig) -> Self {
        let fragment = startup
            .link
            .as_deref()
            .and_then(|link| fragment_of(link).or(Some(link)));
        let address = AddressBar::with_fragment(startup.settings.base_path.clone(), fragment);
        let locale = resolve_locale(
            startup
                .locale
                .as_deref()
                .or(startup.settings.locale.as_deref()),
        );
        let bus = EventBus::new();
        let engine = AgendaEngine::mount(
            program,
            EngineDeps {
                clock: Arc::new(SystemClock),
                history: Box::new(address.clone()),
                formatter: AgendaFormatter::new(locale),
                tick_interval: Some(startup.settings.tick_interval()),
            },
            &bus,
        );

        Self {
            address_input: address.link(),
            engine,
            bus,
            address,
            footer: startup.settings.footer.clone(),
            status: String::new(),
            scroll_to_agenda: false,
            visuals_applied: false,
        }
    }

    fn apply(&mut self, action: UiAction) {
        self.status.clear();
        dispatch_action(
            &mut self.engine,
            &self.bus,
            &self.address,
            action,
            &mut self.status,
        );
    }

    fn copy_link(&mut self) {
        let link = self.address.link();
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(link.clone())) {
            Ok(()) => self.status = format!("Copied {link}"),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.status = format!("Clipboard unavailable; share {link}");
            }
        }
    }

    fn show_address_bar(&mut self, ctx: &egui::Context) {
        let requests = egui::TopBottomPanel::top("address_bar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let requests = panels::address_bar(
                    ui,
                    AddressBarState {
                        input: &mut self.address_input,
                        can_go_back: self.address.can_go_back(),
                        can_go_forward: self.address.can_go_forward(),
                    },
                );
                if !self.status.is_empty() {
                    ui.label(egui::RichText::new(&self.status).small().color(theme::GRAY_600));
                }
                ui.add_space(4.0);
                requests
            })
            .inner;

        for request in requests {
            match request {
                AddressBarRequest::Action(action) => self.apply(action),
                AddressBarRequest::CopyLink => self.copy_link(),
            }
        }
    }

    fn show_agenda(&mut self, ctx: &egui::Context) {
        let view = self.engine.view();
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if let Some(day) = view.selected_day() {
                        panels::day_detail(ui, day, &mut actions);
                        return;
                    }

                    if panels::program_header(ui, &view.header) {
                        self.scroll_to_agenda = true;
                    }
                    ui.add_space(20.0);
                    let anchor = panels::day_list(ui, &view, &mut actions);
                    if std::mem::take(&mut self.scroll_to_agenda) {
                        anchor.scroll_to_me(Some(egui::Align::TOP));
                    }
                    if let Some(footer) = &self.footer {
                        panels::footer(ui, footer);
                    }
                });
        });

        for action in actions {
            self.apply(action);
        }
    }
}

impl eframe::App for AgendaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(theme::light_visuals());
            self.visuals_applied = true;
        }

        for event in ctx.input(global_key_events) {
            self.bus.emit(event);
        }
        let outcome = self.engine.pump();
        if outcome.events > 0 {
            self.address_input = self.address.link();
        }

        let before = self.address.link();
        self.show_address_bar(ctx);
        self.show_agenda(ctx);
        let after = self.address.link();
        if before != after {
            self.address_input = after;
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
