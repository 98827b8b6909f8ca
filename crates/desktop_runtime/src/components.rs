//! Desktop shell UI composition and launcher surfaces.

mod apps;
mod window;

use std::time::Duration;

use leptos::*;
use system_ui::{
    DesktopFolderGrid, DesktopFolderIcon, DesktopRoot, DesktopWindowLayer, Dock, DockButton,
    MenuBar, MenuBarSection,
};

pub use self::window::{bind_window, WindowWrapper};
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

use crate::{
    host::ClockSnapshot,
    launcher::{dock_action, nav_action, open_project},
    model::{DockEntry, DragOffset, LocationId, NavLink, PointerPosition, WindowKey},
};

const MENU_CLOCK_REFRESH: Duration = Duration::from_secs(15);

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn activate_dock_entry(runtime: DesktopRuntimeContext, entry: &DockEntry) {
    match runtime.windows.with_untracked(|store| dock_action(store, entry)) {
        Some(action) => runtime.dispatch_action(action),
        None => logging::debug_warn!("dock entry `{}` has no window to toggle", entry.id),
    }
}

fn activate_nav_link(runtime: DesktopRuntimeContext, link: &NavLink) {
    match nav_action(link) {
        Some(action) => runtime.dispatch_action(action),
        None => logging::debug_warn!(
            "nav link `{}` targets unknown window `{}`",
            link.name,
            link.target
        ),
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let links = runtime.launchers.with_value(|launchers| launchers.nav_links.clone());
    let clock = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(ClockSnapshot::now()), MENU_CLOCK_REFRESH)
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <MenuBar aria_label="Main">
            <MenuBarSection>
                <img src="/images/logo.svg" alt="logo" />
                <p class="menubar-brand">"Portfolio"</p>
                <ul>
                    {links
                        .into_iter()
                        .map(|link| {
                            let label = link.name.clone();
                            view! {
                                <li on:click=move |_| activate_nav_link(runtime, &link)>
                                    <p>{label}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </MenuBarSection>
            <MenuBarSection>
                <time>{move || clock.get().menu_label()}</time>
            </MenuBarSection>
        </MenuBar>
    }
}

#[component]
fn AppDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = runtime.launchers.with_value(|launchers| launchers.dock.clone());

    view! {
        <Dock>
            {entries
                .into_iter()
                .map(|entry| {
                    let target = WindowKey::parse(&entry.id);
                    let active = Signal::derive(move || {
                        target
                            .map(|key| runtime.windows.with(|store| store.is_open(key)))
                            .unwrap_or(false)
                    });
                    let label = entry.name.clone();
                    let icon_src = format!("/images/{}", entry.icon);
                    let disabled = !entry.can_open;
                    view! {
                        <DockButton
                            label=label
                            icon_src=icon_src
                            disabled=disabled
                            active=active
                            on_click=Callback::new(move |_| activate_dock_entry(runtime, &entry))
                        />
                    }
                })
                .collect_view()}
        </Dock>
    }
}

#[component]
fn DesktopProjects() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let projects: Vec<(LocationId, String)> = runtime.location.with_untracked(|store| {
        store
            .tree()
            .children(store.default_id())
            .map(|node| (node.id.clone(), node.name.clone()))
            .collect()
    });

    view! {
        <DesktopFolderGrid>
            {projects
                .into_iter()
                .map(|(id, name)| {
                    view! {
                        <DesktopFolderIcon
                            label=name
                            icon_src="/images/folder.png"
                            on_click=Callback::new(move |_| runtime.run_launcher(open_project(id.clone())))
                        />
                    }
                })
                .collect_view()}
        </DesktopFolderGrid>
    }
}

#[component]
/// Renders the desktop: menu bar, project folders, dock, and one bound view per registered
/// window.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let keys: Vec<WindowKey> = runtime
        .registry
        .with_value(|registry| registry.keys().collect());

    view! {
        <DesktopRoot id="desktop-shell-root">
            <Navbar />
            <DesktopProjects />
            <AppDock />
            <DesktopWindowLayer>
                {keys
                    .into_iter()
                    .map(|key| bind_window(key, move || apps::window_contents(key))())
                    .collect_view()}
            </DesktopWindowLayer>
        </DesktopRoot>
    }
}
