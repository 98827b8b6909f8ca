use leptos::ev::MouseEvent;
use leptos::*;

use crate::merge_layout_class;

#[component]
/// Window header row: traffic-light controls followed by the title and optional actions.
pub fn WindowHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-header"
        >
            {children()}
        </header>
    }
}

#[component]
/// Close, minimize and maximize controls.
///
/// Only close is wired; minimize and maximize are rendered as disabled affordances.
pub fn WindowControls(#[prop(optional)] on_close: Option<Callback<MouseEvent>>) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            <button
                type="button"
                class="close"
                aria-label="Close window"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(ev);
                    }
                }
            />
            <button type="button" class="minimize" aria-label="Minimize window" disabled=true />
            <button type="button" class="maximize" aria-label="Maximize window" disabled=true />
        </div>
    }
}

#[component]
/// Window title text.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! { <h2 class="ui-window-title">{children()}</h2> }
}

#[component]
/// Scrollable window content area.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}
