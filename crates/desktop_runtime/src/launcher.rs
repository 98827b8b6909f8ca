//! Mapping from launcher surfaces (dock, navbar, desktop folders, Finder items) to store actions.

use serde_json::{json, Value};

use crate::location::{LocationAction, LocationTree};
use crate::model::{DockEntry, LocationId, LocationKind, NavLink, WindowKey};
use crate::window_store::{WindowAction, WindowStore};

/// Payload key naming the folder-tree node a file viewer window should display.
pub const PAYLOAD_LOCATION_KEY: &str = "location";

#[derive(Debug, Clone, PartialEq)]
/// Work a launcher asks the runtime to perform, in order.
pub enum LauncherCommand {
    Window(WindowAction),
    Location(LocationAction),
    /// Leave the desktop and open a URL in a new browser tab.
    OpenExternal(String),
}

/// Dock click: toggles a registered window. Disabled entries and unknown targets do nothing.
pub fn dock_action(store: &WindowStore, entry: &DockEntry) -> Option<WindowAction> {
    if !entry.can_open {
        return None;
    }
    let key = WindowKey::parse(&entry.id)?;
    let window = store.window(key)?;
    Some(if window.is_open {
        WindowAction::CloseWindow { key }
    } else {
        WindowAction::open(key)
    })
}

/// Navbar link click: opens (or re-raises) the target window.
pub fn nav_action(link: &NavLink) -> Option<WindowAction> {
    WindowKey::parse(&link.target).map(WindowAction::open)
}

/// Desktop project folder click: point Finder at the project, then open Finder.
pub fn open_project(project: LocationId) -> Vec<LauncherCommand> {
    vec![
        LauncherCommand::Location(LocationAction::SetActiveLocation(Some(project))),
        LauncherCommand::Window(WindowAction::open(WindowKey::Finder)),
    ]
}

/// Finder item activation. Unknown ids produce no commands.
pub fn finder_activation(tree: &LocationTree, id: &LocationId) -> Vec<LauncherCommand> {
    let Some(node) = tree.node(id) else {
        return Vec::new();
    };
    let command = match &node.kind {
        LocationKind::Folder => {
            LauncherCommand::Location(LocationAction::SetActiveLocation(Some(node.id.clone())))
        }
        LocationKind::Text { .. } => LauncherCommand::Window(WindowAction::open_with(
            WindowKey::TextFile,
            location_payload(&node.id),
        )),
        LocationKind::Image { .. } => LauncherCommand::Window(WindowAction::open_with(
            WindowKey::ImageFile,
            location_payload(&node.id),
        )),
        LocationKind::Pdf { .. } => LauncherCommand::Window(WindowAction::open(WindowKey::Resume)),
        LocationKind::Url { href } => LauncherCommand::OpenExternal(href.clone()),
    };
    vec![command]
}

pub fn location_payload(id: &LocationId) -> Value {
    json!({ PAYLOAD_LOCATION_KEY: id.as_str() })
}

/// Reads the node id a file viewer payload points at.
pub fn payload_location(payload: Option<&Value>) -> Option<LocationId> {
    payload?
        .get(PAYLOAD_LOCATION_KEY)?
        .as_str()
        .map(LocationId::new)
}
