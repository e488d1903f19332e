//! Agenda engine for event programs: live session status, locale-aware formatting and
//! shareable day links.

pub mod clock;
pub mod engine;
pub mod error;
pub mod events;
pub mod format;
pub mod loader;
pub mod navigation;
pub mod settings;
pub mod status;
pub mod view;

pub use clock::{Clock, ClockTicker, ManualClock, SystemClock, DEFAULT_TICK_INTERVAL};
pub use engine::{AgendaEngine, DaySelection, EngineDeps, PumpOutcome};
pub use error::LoadError;
pub use events::{EventBus, EventKind, EventSource, HostEvent, Key, KeyPress, Subscription};
pub use format::{resolve_locale, AgendaFormatter};
pub use loader::{load_program, parse_program};
pub use navigation::{AddressBar, NavigationHistory};
pub use settings::{load_settings, load_settings_from, AgendaSettings};
pub use status::session_status;
pub use view::{AgendaView, DayView, HeaderView, SessionView};
