pub mod error;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod browser;
    pub use browser::{Browser, DispatchResult};

    pub mod handlers;
}

pub mod model {
    pub mod filter;
    pub use filter::{FilterConfig, FilterPipeline};

    pub mod nav_state;
    pub use nav_state::NavState;

    pub mod ui_state;
    pub use ui_state::UIState;
}

pub mod view {
    pub mod theme;

    pub mod viewport;
    pub use viewport::{PlacedLine, Viewport, ViewportLayout};

    pub mod ui;

    pub mod components;
}

pub mod fs {
    pub mod entry;
    pub use entry::Entry;

    pub mod media;
    pub use media::{ExtensionGroups, MediaKind};

    pub mod dir_lister;
    pub use dir_lister::DirLister;

    pub mod ordering;

    pub mod path;
}

pub mod operators {
    pub mod player;
}

pub mod logging;
pub use logging::LoggerBuilder;

pub mod util;

pub use config::Config;
pub use error::AppError;
