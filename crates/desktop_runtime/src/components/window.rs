use super::*;
use crate::presentation::{
    display_value, translate_value, visibility_change, AnimationHandle, DragTracker,
    EntranceTransition, VisibilityChange,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
const DRAG_EXEMPT_SELECTOR: &str = "button, a, input, textarea, select, [data-no-drag]";

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Presses on clickable content raise the window but never start a drag.
#[cfg(target_arch = "wasm32")]
fn pressed_drag_exempt_element(ev: &web_sys::PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(DRAG_EXEMPT_SELECTOR).ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn pressed_drag_exempt_element(_: &web_sys::PointerEvent) -> bool {
    false
}

fn cancel_entrance(entrance: StoredValue<Option<AnimationHandle>>) {
    if let Some(Some(handle)) = entrance.try_update_value(Option::take) {
        handle.cancel();
    }
}

/// Binds arbitrary window content to the window store entry for `window_key`.
///
/// Visibility and stacking mirror the store, an entrance transition plays whenever the window
/// becomes visible, and pointer presses raise the window before dragging it. Listeners and
/// in-flight animations are released when the wrapper is torn down.
#[component]
pub fn WindowWrapper(window_key: WindowKey, children: Children) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let section_ref = create_node_ref::<html::Section>();
    let stacking = create_memo(move |_| {
        runtime.windows.with(|store| {
            store
                .window(window_key)
                .map(|w| (w.is_open, w.z_index))
                .unwrap_or((false, store.baseline_z_index()))
        })
    });
    let is_open = Signal::derive(move || stacking.get().0);
    let z_index = Signal::derive(move || stacking.get().1);
    let offset = create_rw_signal(DragOffset::default());
    let drag = store_value(DragTracker::default());
    let entrance = store_value(None::<AnimationHandle>);

    create_effect(move |previous: Option<Option<bool>>| {
        let open = is_open.get();
        let section = section_ref.get()?;
        match visibility_change(previous.flatten(), open) {
            VisibilityChange::Reveal => {
                cancel_entrance(entrance);
                let element: &web_sys::Element = &section;
                let handle = runtime.animation.with_value(|animation| {
                    animation.play_entrance(element, &EntranceTransition::default())
                });
                entrance.set_value(Some(handle));
            }
            VisibilityChange::Hide => cancel_entrance(entrance),
            VisibilityChange::Unchanged => {}
        }
        Some(open)
    });
    on_cleanup(move || cancel_entrance(entrance));

    let on_press = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        runtime.focus_window(window_key);
        if pressed_drag_exempt_element(&ev) {
            return;
        }
        ev.prevent_default();
        try_set_pointer_capture(&ev);
        let pointer = pointer_from_pointer_event(&ev);
        let current = offset.get_untracked();
        drag.update_value(|tracker| tracker.begin(pointer, current));
    };

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        if let Some(next) = drag.try_with_value(|tracker| tracker.update(pointer)).flatten() {
            offset.set(next);
        }
    });
    on_cleanup(move || move_listener.remove());

    let end_listener = window_event_listener(ev::pointerup, move |_| {
        let _ = drag.try_update_value(|tracker| tracker.end());
    });
    on_cleanup(move || end_listener.remove());

    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        let _ = drag.try_update_value(|tracker| tracker.end());
    });
    on_cleanup(move || cancel_listener.remove());

    view! {
        <section
            id=window_key.as_str()
            node_ref=section_ref
            class="desktop-window"
            role="dialog"
            aria-label=runtime.window_title(window_key)
            data-window=window_key.as_str()
            style:display=move || display_value(is_open.get())
            style:z-index=move || z_index.get().to_string()
            style:translate=move || translate_value(offset.get())
            on:pointerdown=on_press
        >
            {children()}
        </section>
    }
}

/// Higher-order form of [`WindowWrapper`]: returns a view factory that renders `content`
/// inside a wrapper bound to `window_key`.
pub fn bind_window<F, V>(window_key: WindowKey, content: F) -> impl Fn() -> View
where
    F: Fn() -> V + Clone + 'static,
    V: IntoView,
{
    move || {
        let content = content.clone();
        view! { <WindowWrapper window_key=window_key>{content()}</WindowWrapper> }.into_view()
    }
}
