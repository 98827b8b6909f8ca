use leptos::ev::MouseEvent;
use leptos::*;

use crate::{bool_token, merge_layout_class};

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
        >
            {children()}
        </main>
    }
}

#[component]
/// Top menu bar.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-menubar", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menubar"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Left or right group inside the [`MenuBar`].
pub fn MenuBarSection(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menubar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menubar-section"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom application dock.
pub fn Dock(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id="dock" data-ui-primitive="true" data-ui-kind="dock">
            <div class=merge_layout_class("ui-dock", layout_class)>{children()}</div>
        </section>
    }
}

#[component]
/// Dock launcher button. Disabled entries render dimmed and ignore clicks.
pub fn DockButton(
    #[prop(into)] label: String,
    #[prop(into)] icon_src: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-dock-icon"
            aria-label=label.clone()
            title=label.clone()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="dock-icon"
            data-ui-active=move || bool_token(active.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <img src=icon_src alt=label loading="lazy" />
        </button>
    }
}

#[component]
/// Desktop surface holding project folder shortcuts.
pub fn DesktopFolderGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id="home" data-ui-primitive="true" data-ui-kind="desktop-folder-grid">
            <ul class=merge_layout_class("ui-desktop-folders", layout_class)>{children()}</ul>
        </section>
    }
}

#[component]
/// Desktop folder shortcut.
pub fn DesktopFolderIcon(
    #[prop(into)] label: String,
    #[prop(into)] icon_src: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <li
            class="ui-desktop-folder"
            data-ui-primitive="true"
            data-ui-kind="desktop-folder"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <img src=icon_src alt=label.clone() />
            <p>{label}</p>
        </li>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}
