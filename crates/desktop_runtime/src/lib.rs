//! Window-management runtime for the portfolio desktop.
//!
//! The crate owns the window store (open flags, z-order, payloads), the Finder location store,
//! the launcher surfaces that translate clicks into store actions, and the presentation wrapper
//! that binds a window's state to its on-screen element.

pub mod components;
pub mod host;
pub mod launcher;
pub mod location;
pub mod model;
pub mod presentation;
pub mod registry;
mod runtime_context;
pub mod window_store;

pub use components::{
    bind_window, use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell,
    WindowWrapper,
};
pub use launcher::LauncherCommand;
pub use location::{reduce_location, LocationAction, LocationError, LocationStore, LocationTree};
pub use model::*;
pub use registry::{
    load_builtin_desktop, load_desktop, ConfigError, DesktopCatalog, DesktopSeed, WindowRegistry,
};
pub use window_store::{
    reduce_windows, ReducerError, WindowAction, WindowStore, WindowTransition,
};
