//! Presentation-wrapper contract: visibility transitions, entrance animation, and drag tracking.
//!
//! The pure pieces here are host independent; the Leptos binding in
//! `components::window` feeds them DOM events and hands animation commands to an
//! [`AnimationProvider`].

#[cfg(target_arch = "wasm32")]
use leptos::logging;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

use crate::model::{DragOffset, PointerPosition};

/// Visual properties interpolated by the entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub scale: f64,
    pub opacity: f64,
    pub translate_y_px: f64,
}

impl VisualState {
    pub const RESTING: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        translate_y_px: 0.0,
    };

    /// CSS `transform` value for this state.
    pub fn transform(&self) -> String {
        format!(
            "translateY({}px) scale({})",
            self.translate_y_px, self.scale
        )
    }
}

/// One-shot transition played when a window becomes visible.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceTransition {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: f64,
    pub easing: &'static str,
}

impl Default for EntranceTransition {
    fn default() -> Self {
        Self {
            from: VisualState {
                scale: 0.8,
                opacity: 0.0,
                translate_y_px: 40.0,
            },
            to: VisualState::RESTING,
            duration_ms: 400.0,
            // ease-out cubic
            easing: "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Reveal,
    Hide,
    Unchanged,
}

/// Classifies a change of the open flag. `previous` is `None` on the first observation, in
/// which case an open window counts as a reveal.
pub fn visibility_change(previous: Option<bool>, now: bool) -> VisibilityChange {
    match (previous.unwrap_or(false), now) {
        (false, true) => VisibilityChange::Reveal,
        (true, false) => VisibilityChange::Hide,
        _ => VisibilityChange::Unchanged,
    }
}

/// CSS `display` value mirroring the open flag.
pub fn display_value(is_open: bool) -> &'static str {
    if is_open {
        "block"
    } else {
        "none"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    pointer_start: PointerPosition,
    offset_start: DragOffset,
}

/// Pointer-drag state for one window. Never touches store state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn begin(&mut self, pointer: PointerPosition, current: DragOffset) {
        self.session = Some(DragSession {
            pointer_start: pointer,
            offset_start: current,
        });
    }

    /// New offset for the pointer position, or `None` when no drag is active.
    pub fn update(&self, pointer: PointerPosition) -> Option<DragOffset> {
        self.session.map(|session| {
            session.offset_start.offset(
                pointer.x - session.pointer_start.x,
                pointer.y - session.pointer_start.y,
            )
        })
    }

    /// Ends the drag; returns whether one was active.
    pub fn end(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

/// CSS `translate` value for a drag offset.
pub fn translate_value(offset: DragOffset) -> String {
    format!("{}px {}px", offset.x, offset.y)
}

/// Cancellable reference to an in-flight animation. Dropping it does not cancel.
#[derive(Debug, Default)]
pub struct AnimationHandle {
    animation: Option<web_sys::Animation>,
}

impl AnimationHandle {
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn cancel(self) {
        if let Some(animation) = self.animation {
            animation.cancel();
        }
    }
}

/// Capability that interpolates an element's visual state. Fire-and-forget: callers never wait
/// on completion.
pub trait AnimationProvider {
    fn play_entrance(
        &self,
        element: &web_sys::Element,
        transition: &EntranceTransition,
    ) -> AnimationHandle;
}

/// Web Animations API backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebAnimations;

impl AnimationProvider for WebAnimations {
    #[cfg(target_arch = "wasm32")]
    fn play_entrance(
        &self,
        element: &web_sys::Element,
        transition: &EntranceTransition,
    ) -> AnimationHandle {
        let keyframes = js_sys::Array::new();
        keyframes.push(&keyframe(&transition.from));
        keyframes.push(&keyframe(&transition.to));

        let options = web_sys::KeyframeAnimationOptions::new();
        options.set_duration(&JsValue::from_f64(transition.duration_ms));
        options.set_easing(transition.easing);

        let animation = element.animate_with_keyframe_animation_options(Some(&*keyframes), &options);
        AnimationHandle {
            animation: Some(animation),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn play_entrance(
        &self,
        _element: &web_sys::Element,
        _transition: &EntranceTransition,
    ) -> AnimationHandle {
        AnimationHandle::detached()
    }
}

#[cfg(target_arch = "wasm32")]
fn keyframe(state: &VisualState) -> js_sys::Object {
    let frame = js_sys::Object::new();
    for (property, value) in [
        ("transform", JsValue::from_str(&state.transform())),
        ("opacity", JsValue::from_f64(state.opacity)),
    ] {
        if let Err(err) = js_sys::Reflect::set(&frame, &JsValue::from_str(property), &value) {
            logging::warn!("keyframe property `{property}` rejected: {err:?}");
        }
    }
    frame
}

/// Backend that skips animation entirely; the element is shown at rest immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnimation;

impl AnimationProvider for NoAnimation {
    fn play_entrance(
        &self,
        _element: &web_sys::Element,
        _transition: &EntranceTransition,
    ) -> AnimationHandle {
        AnimationHandle::detached()
    }
}

/// Picks [`NoAnimation`] when the browser reports a reduced-motion preference.
pub fn animation_provider_for_environment() -> Box<dyn AnimationProvider> {
    if prefers_reduced_motion() {
        Box::new(NoAnimation)
    } else {
        Box::new(WebAnimations)
    }
}

fn prefers_reduced_motion() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media("(prefers-reduced-motion: reduce)") {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                logging::warn!("reduced-motion media query failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    false
}
