//! Folio engine - view state for the portfolio, independent of rendering.
//!
//! The engine owns everything the screen shows except pixels:
//!
//! - [`Portfolio`]: the embedded profile and project catalog
//! - [`PortfolioView`]: hover selection, the displayed clock, viewport, motion state
//! - [`MountedView`]: a view plus the one-second [`ClockTicker`] it owns while mounted
//! - [`conversation`]: the preview panel's message sequence for a project
//!
//! The TUI crate reads this state to draw and feeds it input events.

mod assets;
mod backdrop;
mod clock;
mod config;
mod conversation;
mod mount;
mod view;

pub use assets::{AssetError, Portfolio, embedded_portfolio, parse_portfolio};
pub use backdrop::{Backdrop, GRADIENT_PERIOD};
pub use clock::{Clock, ClockTicker, SystemClock, TICK_PERIOD, format_clock};
pub use config::{AppConfig, ConfigError, FolioConfig, config_path, ui_options};
pub use conversation::{COMPLETION_QUESTION, ChatMessage, MessageBody, Sender, conversation};
pub use mount::MountedView;
pub use view::{PREVIEW_ENTRY_DURATION, PortfolioView, ViewError};

pub use folio_types::ui::{AnimPhase, LayoutMode, PreviewEffect, UiOptions, Viewport};
pub use folio_types::{CatalogError, Profile, ProjectCatalog, ProjectId, ProjectRecord, SocialLink};
