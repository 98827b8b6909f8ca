//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the single window store and location store for the session and exposes
//! them read-only through [`DesktopRuntimeContext`]; every write goes through the dispatch
//! callbacks and therefore through the reducers.
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use leptos::*;
use serde_json::Value;

use crate::{
    host,
    launcher::LauncherCommand,
    location::{reduce_location, LocationAction, LocationStore},
    model::{LocationId, PortfolioContent, WindowKey},
    presentation::{animation_provider_for_environment, AnimationProvider},
    registry::{DesktopSeed, Launchers, WindowRegistry},
    window_store::{reduce_windows, WindowAction, WindowStore},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching store actions.
pub struct DesktopRuntimeContext {
    /// Immutable window registry (titles and defaults).
    pub registry: StoredValue<Rc<WindowRegistry>>,
    /// Dock and navbar entries.
    pub launchers: StoredValue<Rc<Launchers>>,
    /// Static lists rendered by window bodies.
    pub content: StoredValue<Rc<PortfolioContent>>,
    /// Entrance animation backend shared by every window wrapper.
    pub animation: StoredValue<Rc<dyn AnimationProvider>>,
    /// Reactive window store.
    pub windows: RwSignal<WindowStore>,
    /// Reactive Finder location store.
    pub location: RwSignal<LocationStore>,
    /// Window reducer dispatch callback.
    pub dispatch: Callback<WindowAction>,
    /// Location reducer dispatch callback.
    pub dispatch_location: Callback<LocationAction>,
}

impl DesktopRuntimeContext {
    pub fn dispatch_action(&self, action: WindowAction) {
        self.dispatch.call(action);
    }

    pub fn open_window(&self, key: WindowKey, payload: Option<Value>) {
        self.dispatch_action(WindowAction::OpenWindow { key, payload });
    }

    pub fn close_window(&self, key: WindowKey) {
        self.dispatch_action(WindowAction::CloseWindow { key });
    }

    pub fn focus_window(&self, key: WindowKey) {
        self.dispatch_action(WindowAction::FocusWindow { key });
    }

    pub fn set_active_location(&self, id: Option<LocationId>) {
        self.dispatch_location
            .call(LocationAction::SetActiveLocation(id));
    }

    pub fn reset_active_location(&self) {
        self.dispatch_location.call(LocationAction::ResetActiveLocation);
    }

    /// Executes launcher commands in order.
    pub fn run_launcher(&self, commands: Vec<LauncherCommand>) {
        for command in commands {
            match command {
                LauncherCommand::Window(action) => self.dispatch_action(action),
                LauncherCommand::Location(action) => self.dispatch_location.call(action),
                LauncherCommand::OpenExternal(url) => host::open_external_url(&url),
            }
        }
    }

    pub fn window_title(&self, key: WindowKey) -> String {
        self.registry.with_value(|registry| {
            registry
                .title(key)
                .map(str::to_string)
                .unwrap_or_else(|| key.to_string())
        })
    }
}

/// Reduces `action` against a copy of the window store and writes it back only when the
/// state changed. Returns whether the signal was written.
fn dispatch_window(windows: RwSignal<WindowStore>, action: WindowAction) -> bool {
    let mut store = windows.get_untracked();
    let previous = store.clone();
    match reduce_windows(&mut store, action) {
        Ok(_) if store != previous => {
            windows.set(store);
            true
        }
        Ok(_) => false,
        Err(err) => {
            logging::debug_warn!("window action ignored: {err}");
            false
        }
    }
}

fn dispatch_location_action(location: RwSignal<LocationStore>, action: LocationAction) -> bool {
    let mut store = location.get_untracked();
    match reduce_location(&mut store, action) {
        Ok(true) => {
            location.set(store);
            true
        }
        Ok(false) => false,
        Err(err) => {
            logging::debug_warn!("location action ignored: {err}");
            false
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Validated catalog data produced at boot.
    seed: DesktopSeed,
    children: Children,
) -> impl IntoView {
    let DesktopSeed {
        registry,
        windows: initial_windows,
        locations: initial_locations,
        launchers,
        content,
    } = seed;

    let windows = create_rw_signal(initial_windows);
    let location = create_rw_signal(initial_locations);
    let animation: Rc<dyn AnimationProvider> = Rc::from(animation_provider_for_environment());

    let dispatch = Callback::new(move |action: WindowAction| {
        dispatch_window(windows, action);
    });
    let dispatch_location = Callback::new(move |action: LocationAction| {
        dispatch_location_action(location, action);
    });

    let runtime = DesktopRuntimeContext {
        registry: store_value(registry),
        launchers: store_value(launchers),
        content: store_value(content),
        animation: store_value(animation),
        windows,
        location,
        dispatch,
        dispatch_location,
    };

    provide_context(runtime.clone());

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
