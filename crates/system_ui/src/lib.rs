//! Shared UI primitive library for the portfolio desktop shell.
//!
//! The crate owns the stateless Leptos primitives (menu bar, dock, desktop folders, window
//! header) and the stable `data-ui-*` DOM contract consumed by the shell stylesheet. Every
//! interaction is surfaced through `Callback` props; the primitives never touch runtime state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod shell;
mod window;

pub use shell::{
    DesktopFolderGrid, DesktopFolderIcon, DesktopRoot, DesktopWindowLayer, Dock, DockButton,
    MenuBar, MenuBarSection,
};
pub use window::{WindowBody, WindowControls, WindowHeader, WindowTitle};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
