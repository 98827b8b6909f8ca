//! Window store: open/closed flags, stacking order, and open-time payloads per window.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::model::{WindowKey, WindowState};

/// Window state container. Fields are private; all writes go through [`reduce_windows`].
#[derive(Debug, Clone, PartialEq)]
pub struct WindowStore {
    windows: BTreeMap<WindowKey, WindowState>,
    next_z_index: u32,
    baseline_z_index: u32,
}

impl WindowStore {
    /// Builds a store from already-validated registry entries.
    ///
    /// The z-order counter starts one above the highest value present, so it never reissues a
    /// value held by an initially open window.
    pub(crate) fn from_entries(
        baseline_z_index: u32,
        entries: impl IntoIterator<Item = (WindowKey, WindowState)>,
    ) -> Self {
        let windows: BTreeMap<_, _> = entries.into_iter().collect();
        let highest = windows
            .values()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(baseline_z_index)
            .max(baseline_z_index);
        Self {
            windows,
            next_z_index: highest.saturating_add(1),
            baseline_z_index,
        }
    }

    pub fn window(&self, key: WindowKey) -> Option<&WindowState> {
        self.windows.get(&key)
    }

    pub fn windows(&self) -> impl Iterator<Item = (WindowKey, &WindowState)> {
        self.windows.iter().map(|(key, state)| (*key, state))
    }

    pub fn is_registered(&self, key: WindowKey) -> bool {
        self.windows.contains_key(&key)
    }

    pub fn is_open(&self, key: WindowKey) -> bool {
        self.window(key).map(|w| w.is_open).unwrap_or(false)
    }

    /// Open window with the greatest z-index.
    pub fn front_most(&self) -> Option<WindowKey> {
        self.windows
            .iter()
            .filter(|(_, w)| w.is_open)
            .max_by_key(|(_, w)| w.z_index)
            .map(|(key, _)| *key)
    }

    /// Value the next open or focus will receive.
    pub fn next_z_index(&self) -> u32 {
        self.next_z_index
    }

    pub fn baseline_z_index(&self) -> u32 {
        self.baseline_z_index
    }

    fn issue_z_index(&mut self) -> u32 {
        let issued = self.next_z_index;
        self.next_z_index = issued.saturating_add(1);
        issued
    }

    fn entry_mut(&mut self, key: WindowKey) -> Result<&mut WindowState, ReducerError> {
        self.windows
            .get_mut(&key)
            .ok_or(ReducerError::WindowNotRegistered(key))
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`].
pub enum WindowAction {
    /// Show a window on top of the stack, optionally replacing its payload.
    OpenWindow {
        key: WindowKey,
        payload: Option<Value>,
    },
    /// Hide a window and reset its stacking value and payload.
    CloseWindow { key: WindowKey },
    /// Raise a window without touching its open flag or payload.
    FocusWindow { key: WindowKey },
}

impl WindowAction {
    pub fn open(key: WindowKey) -> Self {
        Self::OpenWindow { key, payload: None }
    }

    pub fn open_with(key: WindowKey, payload: Value) -> Self {
        Self::OpenWindow {
            key,
            payload: Some(payload),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Observable outcome of a successful [`reduce_windows`] call.
pub enum WindowTransition {
    /// Closed -> Open.
    Opened { key: WindowKey, z_index: u32 },
    /// Open -> Open through `OpenWindow`; the window was re-raised.
    Reopened { key: WindowKey, z_index: u32 },
    /// Any -> Closed.
    Closed { key: WindowKey },
    /// Stacking value bumped through `FocusWindow`.
    Focused { key: WindowKey, z_index: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. Callers treat them as no-ops; the store is never modified on error.
pub enum ReducerError {
    /// The window key is not part of the loaded registry.
    #[error("window `{0}` is not registered")]
    WindowNotRegistered(WindowKey),
}

/// Applies a [`WindowAction`] to the store.
///
/// Every `OpenWindow` and `FocusWindow` draws exactly one fresh value from the shared counter,
/// so the latest opened-or-focused window is always front-most. `CloseWindow` never touches the
/// counter.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotRegistered`] for keys absent from the registry; the store is
/// left unchanged.
pub fn reduce_windows(
    store: &mut WindowStore,
    action: WindowAction,
) -> Result<WindowTransition, ReducerError> {
    match action {
        WindowAction::OpenWindow { key, payload } => {
            let was_open = store.entry_mut(key)?.is_open;
            let z_index = store.issue_z_index();
            let window = store.entry_mut(key)?;
            window.is_open = true;
            window.z_index = z_index;
            if let Some(payload) = payload {
                window.data = Some(payload);
            }
            Ok(if was_open {
                WindowTransition::Reopened { key, z_index }
            } else {
                WindowTransition::Opened { key, z_index }
            })
        }
        WindowAction::CloseWindow { key } => {
            let baseline = store.baseline_z_index;
            let window = store.entry_mut(key)?;
            window.is_open = false;
            window.z_index = baseline;
            window.data = None;
            Ok(WindowTransition::Closed { key })
        }
        WindowAction::FocusWindow { key } => {
            store.entry_mut(key)?;
            let z_index = store.issue_z_index();
            store.entry_mut(key)?.z_index = z_index;
            Ok(WindowTransition::Focused { key, z_index })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const BASELINE: u32 = 1000;

    fn closed() -> WindowState {
        WindowState {
            is_open: false,
            z_index: BASELINE,
            data: None,
        }
    }

    fn store_with(keys: &[WindowKey]) -> WindowStore {
        WindowStore::from_entries(BASELINE, keys.iter().map(|key| (*key, closed())))
    }

    fn full_store() -> WindowStore {
        store_with(&WindowKey::ALL)
    }

    fn reduce(store: &mut WindowStore, action: WindowAction) -> WindowTransition {
        reduce_windows(store, action).expect("registered window")
    }

    #[test]
    fn counter_starts_above_baseline() {
        let store = full_store();
        assert_eq!(store.next_z_index(), BASELINE + 1);
        assert_eq!(store.front_most(), None);
    }

    #[test]
    fn open_window_takes_counter_value_and_advances_it() {
        let mut store = full_store();
        for key in WindowKey::ALL {
            let expected = store.next_z_index();
            let transition = reduce(&mut store, WindowAction::open(key));
            let window = store.window(key).unwrap();
            assert!(window.is_open);
            assert_eq!(window.z_index, expected);
            assert_eq!(store.next_z_index(), expected + 1);
            assert_eq!(
                transition,
                WindowTransition::Opened {
                    key,
                    z_index: expected
                }
            );
        }
    }

    #[test]
    fn opening_twice_issues_two_increasing_values() {
        let mut store = full_store();
        let first = reduce(&mut store, WindowAction::open(WindowKey::Finder));
        let second = reduce(&mut store, WindowAction::open(WindowKey::Finder));

        assert_eq!(
            first,
            WindowTransition::Opened {
                key: WindowKey::Finder,
                z_index: BASELINE + 1
            }
        );
        assert_eq!(
            second,
            WindowTransition::Reopened {
                key: WindowKey::Finder,
                z_index: BASELINE + 2
            }
        );
        assert!(store.is_open(WindowKey::Finder));
    }

    #[test]
    fn open_without_payload_keeps_existing_data() {
        let mut store = full_store();
        reduce(
            &mut store,
            WindowAction::open_with(WindowKey::Finder, json!({ "project": "A" })),
        );
        reduce(&mut store, WindowAction::open(WindowKey::Finder));
        assert_eq!(
            store.window(WindowKey::Finder).unwrap().data,
            Some(json!({ "project": "A" }))
        );

        reduce(
            &mut store,
            WindowAction::open_with(WindowKey::Finder, json!({ "project": "B" })),
        );
        assert_eq!(
            store.window(WindowKey::Finder).unwrap().data,
            Some(json!({ "project": "B" }))
        );
    }

    #[test]
    fn close_resets_window_regardless_of_prior_state() {
        let mut store = full_store();
        reduce(
            &mut store,
            WindowAction::open_with(WindowKey::Photos, json!({ "image": 3 })),
        );
        reduce(&mut store, WindowAction::FocusWindow { key: WindowKey::Photos });

        for _ in 0..2 {
            reduce(&mut store, WindowAction::CloseWindow { key: WindowKey::Photos });
            assert_eq!(store.window(WindowKey::Photos), Some(&closed()));
        }
    }

    #[test]
    fn closing_a_closed_window_changes_nothing() {
        let mut store = full_store();
        reduce(&mut store, WindowAction::open(WindowKey::Terminal));
        let before = store.clone();

        reduce(&mut store, WindowAction::CloseWindow { key: WindowKey::Finder });

        assert_eq!(store, before);
    }

    #[test]
    fn focus_only_changes_z_index() {
        let mut store = full_store();
        reduce(
            &mut store,
            WindowAction::open_with(WindowKey::Contact, json!("hello")),
        );
        reduce(&mut store, WindowAction::open(WindowKey::Safari));
        let highest_issued = store.next_z_index() - 1;

        let transition = reduce(&mut store, WindowAction::FocusWindow { key: WindowKey::Contact });

        let contact = store.window(WindowKey::Contact).unwrap();
        assert!(contact.is_open);
        assert_eq!(contact.data, Some(json!("hello")));
        assert!(contact.z_index > highest_issued);
        assert_eq!(
            transition,
            WindowTransition::Focused {
                key: WindowKey::Contact,
                z_index: contact.z_index
            }
        );
        assert_eq!(store.front_most(), Some(WindowKey::Contact));
    }

    #[test]
    fn focusing_a_closed_window_raises_it_without_opening() {
        let mut store = full_store();
        reduce(&mut store, WindowAction::FocusWindow { key: WindowKey::Resume });

        let resume = store.window(WindowKey::Resume).unwrap();
        assert!(!resume.is_open);
        assert_eq!(resume.z_index, BASELINE + 1);
        assert_eq!(resume.data, None);
        assert_eq!(store.front_most(), None);
    }

    #[test]
    fn unregistered_keys_leave_the_store_unchanged() {
        let mut store = store_with(&[WindowKey::Finder, WindowKey::Terminal]);
        reduce(&mut store, WindowAction::open(WindowKey::Terminal));
        let before = store.clone();

        for action in [
            WindowAction::open_with(WindowKey::Photos, json!(1)),
            WindowAction::CloseWindow { key: WindowKey::Photos },
            WindowAction::FocusWindow { key: WindowKey::Photos },
        ] {
            assert_eq!(
                reduce_windows(&mut store, action),
                Err(ReducerError::WindowNotRegistered(WindowKey::Photos))
            );
            assert_eq!(store, before);
        }
    }

    #[test]
    fn open_then_focus_scenario() {
        let mut store = WindowStore::from_entries(
            0,
            [
                (WindowKey::Finder, WindowState {
                    is_open: false,
                    z_index: 0,
                    data: None,
                }),
                (WindowKey::Terminal, WindowState {
                    is_open: true,
                    z_index: 1,
                    data: None,
                }),
            ],
        );
        assert_eq!(store.next_z_index(), 2);

        reduce(
            &mut store,
            WindowAction::open_with(WindowKey::Finder, json!({ "project": "A" })),
        );
        let finder = store.window(WindowKey::Finder).unwrap();
        assert!(finder.is_open);
        assert_eq!(finder.z_index, 2);
        assert_eq!(finder.data, Some(json!({ "project": "A" })));
        assert_eq!(store.next_z_index(), 3);
        assert_eq!(store.front_most(), Some(WindowKey::Finder));

        reduce(&mut store, WindowAction::FocusWindow { key: WindowKey::Terminal });
        assert_eq!(store.window(WindowKey::Terminal).unwrap().z_index, 3);
        assert_eq!(store.next_z_index(), 4);
        assert_eq!(store.front_most(), Some(WindowKey::Terminal));
    }

    #[test]
    fn open_windows_never_share_a_z_index() {
        let mut store = full_store();
        let sequence = [
            WindowAction::open(WindowKey::Finder),
            WindowAction::open(WindowKey::Safari),
            WindowAction::FocusWindow { key: WindowKey::Finder },
            WindowAction::CloseWindow { key: WindowKey::Safari },
            WindowAction::open(WindowKey::Photos),
            WindowAction::open(WindowKey::Safari),
            WindowAction::FocusWindow { key: WindowKey::Photos },
        ];
        for action in sequence {
            reduce(&mut store, action);
            let mut open: Vec<u32> = store
                .windows()
                .filter(|(_, w)| w.is_open)
                .map(|(_, w)| w.z_index)
                .collect();
            let total = open.len();
            open.sort_unstable();
            open.dedup();
            assert_eq!(open.len(), total);
            assert!(open.iter().all(|z| *z > store.baseline_z_index()));
        }
    }
}
