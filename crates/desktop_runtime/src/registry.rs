//! Desktop catalog loading: window registry, folder tree, launchers, and static content.
//!
//! The catalog is authored as TOML under `config/`, checked and embedded as JSON by the build
//! script, and validated here into a [`DesktopSeed`] that the runtime provider owns.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::{LocationStore, LocationTree};
use crate::model::{
    DockEntry, LocationConfig, LocationId, NavLink, PortfolioContent, WindowConfig, WindowKey,
    WindowState, DEFAULT_BASELINE_Z_INDEX,
};
use crate::window_store::WindowStore;

include!(concat!(env!("OUT_DIR"), "/desktop_catalog_generated.rs"));

/// Catalog schema understood by this runtime.
pub const DESKTOP_CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Catalog validation failures.
pub enum ConfigError {
    #[error("desktop catalog could not be parsed: {0}")]
    Parse(String),
    #[error("desktop catalog schema mismatch: expected {expected} found {found}")]
    SchemaMismatch { expected: u32, found: u32 },
    #[error("window `{0}` is declared more than once")]
    DuplicateWindow(WindowKey),
    #[error("closed window `{key}` declares z-index {z_index} instead of the baseline {baseline}")]
    ClosedWindowZIndex {
        key: WindowKey,
        z_index: u32,
        baseline: u32,
    },
    #[error("open window `{key}` needs a z-index above the baseline {baseline}")]
    OpenWindowZIndex { key: WindowKey, baseline: u32 },
    #[error("z-index {z_index} is shared by open windows `{first}` and `{second}`")]
    DuplicateZIndex {
        z_index: u32,
        first: WindowKey,
        second: WindowKey,
    },
    #[error("location `{0}` is declared more than once")]
    DuplicateLocation(LocationId),
    #[error("location `{id}` names unknown parent `{parent}`")]
    UnknownParent { id: LocationId, parent: LocationId },
    #[error("location `{id}` names parent `{parent}` which is not a folder")]
    ParentNotFolder { id: LocationId, parent: LocationId },
    #[error("default location `{0}` is not a folder in the tree")]
    UnknownDefaultLocation(LocationId),
}

fn default_baseline() -> u32 {
    DEFAULT_BASELINE_Z_INDEX
}

/// Raw catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopCatalog {
    pub schema_version: u32,
    #[serde(default = "default_baseline")]
    pub baseline_z_index: u32,
    pub default_location: LocationId,
    #[serde(default)]
    pub windows: Vec<WindowConfig>,
    #[serde(default)]
    pub locations: Vec<LocationConfig>,
    #[serde(default)]
    pub dock: Vec<DockEntry>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub content: PortfolioContent,
}

impl DesktopCatalog {
    /// Parses the catalog embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the embedded JSON does not match the catalog shape.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(DESKTOP_CATALOG_JSON)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

/// Validated registry data: one immutable entry per window plus its initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRegistry {
    baseline_z_index: u32,
    titles: BTreeMap<WindowKey, String>,
    initial: Vec<(WindowKey, WindowState)>,
}

impl WindowRegistry {
    /// Validates window entries against the stacking invariants.
    ///
    /// # Errors
    ///
    /// See the window-related [`ConfigError`] variants.
    pub fn new(baseline_z_index: u32, configs: &[WindowConfig]) -> Result<Self, ConfigError> {
        let mut titles = BTreeMap::new();
        let mut initial = Vec::with_capacity(configs.len());
        let mut open_z = HashMap::<u32, WindowKey>::new();

        for config in configs {
            if titles.insert(config.key, config.title.clone()).is_some() {
                return Err(ConfigError::DuplicateWindow(config.key));
            }
            let z_index = if config.initially_open {
                let z_index = config
                    .initial_z
                    .filter(|z| *z > baseline_z_index)
                    .ok_or(ConfigError::OpenWindowZIndex {
                        key: config.key,
                        baseline: baseline_z_index,
                    })?;
                if let Some(first) = open_z.insert(z_index, config.key) {
                    return Err(ConfigError::DuplicateZIndex {
                        z_index,
                        first,
                        second: config.key,
                    });
                }
                z_index
            } else {
                match config.initial_z {
                    Some(z_index) if z_index != baseline_z_index => {
                        return Err(ConfigError::ClosedWindowZIndex {
                            key: config.key,
                            z_index,
                            baseline: baseline_z_index,
                        });
                    }
                    _ => baseline_z_index,
                }
            };
            initial.push((
                config.key,
                WindowState {
                    is_open: config.initially_open,
                    z_index,
                    data: config.data.clone(),
                },
            ));
        }

        Ok(Self {
            baseline_z_index,
            titles,
            initial,
        })
    }

    pub fn title(&self, key: WindowKey) -> Option<&str> {
        self.titles.get(&key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = WindowKey> + '_ {
        self.titles.keys().copied()
    }

    /// Fresh store seeded from the registry defaults.
    pub fn initial_store(&self) -> WindowStore {
        WindowStore::from_entries(self.baseline_z_index, self.initial.iter().cloned())
    }
}

/// Launcher surfaces declared by the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Launchers {
    pub dock: Vec<DockEntry>,
    pub nav_links: Vec<NavLink>,
}

/// Everything the runtime provider needs at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopSeed {
    pub registry: Rc<WindowRegistry>,
    pub windows: WindowStore,
    pub locations: LocationStore,
    pub launchers: Rc<Launchers>,
    pub content: Rc<PortfolioContent>,
}

/// Validates a catalog into a [`DesktopSeed`].
///
/// # Errors
///
/// Returns the first [`ConfigError`] found; windows are checked before locations.
pub fn load_desktop(catalog: DesktopCatalog) -> Result<DesktopSeed, ConfigError> {
    if catalog.schema_version != DESKTOP_CATALOG_SCHEMA_VERSION {
        return Err(ConfigError::SchemaMismatch {
            expected: DESKTOP_CATALOG_SCHEMA_VERSION,
            found: catalog.schema_version,
        });
    }

    let registry = WindowRegistry::new(catalog.baseline_z_index, &catalog.windows)?;
    let tree = LocationTree::from_configs(&catalog.locations)?;
    let locations = LocationStore::new(Rc::new(tree), catalog.default_location)?;

    Ok(DesktopSeed {
        windows: registry.initial_store(),
        registry: Rc::new(registry),
        locations,
        launchers: Rc::new(Launchers {
            dock: catalog.dock,
            nav_links: catalog.nav_links,
        }),
        content: Rc::new(catalog.content),
    })
}

/// Loads and validates the catalog embedded at build time.
///
/// # Errors
///
/// Propagates parse and validation failures.
pub fn load_builtin_desktop() -> Result<DesktopSeed, ConfigError> {
    load_desktop(DesktopCatalog::builtin()?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::LocationKind;

    fn catalog(windows: Vec<WindowConfig>) -> DesktopCatalog {
        DesktopCatalog {
            schema_version: DESKTOP_CATALOG_SCHEMA_VERSION,
            baseline_z_index: 10,
            default_location: LocationId::new("work"),
            windows,
            locations: vec![LocationConfig {
                id: LocationId::new("work"),
                name: "Work".to_string(),
                parent: None,
                icon: None,
                kind: LocationKind::Folder,
            }],
            dock: Vec::new(),
            nav_links: Vec::new(),
            content: PortfolioContent::default(),
        }
    }

    #[test]
    fn builtin_catalog_loads() {
        let seed = load_builtin_desktop().expect("builtin catalog is valid");

        for key in WindowKey::ALL {
            assert!(seed.windows.is_registered(key), "{key} missing from catalog");
            assert!(!seed.windows.is_open(key));
        }
        assert_eq!(seed.registry.title(WindowKey::Resume), Some("Resume.pdf"));
        assert_eq!(
            seed.windows.next_z_index(),
            seed.windows.baseline_z_index() + 1
        );
        assert_eq!(seed.locations.active_id(), &LocationId::new("work"));
        assert!(seed.launchers.dock.iter().any(|entry| !entry.can_open));
        assert!(!seed.content.tech_stack.is_empty());
    }

    #[test]
    fn counter_starts_above_initially_open_windows() {
        let seed = load_desktop(catalog(vec![
            WindowConfig::closed(WindowKey::Finder),
            WindowConfig::open_at(WindowKey::Terminal, 14),
            WindowConfig::open_at(WindowKey::Safari, 12),
        ]))
        .unwrap();

        assert_eq!(seed.windows.next_z_index(), 15);
        assert_eq!(seed.windows.front_most(), Some(WindowKey::Terminal));
        assert_eq!(seed.windows.window(WindowKey::Finder).unwrap().z_index, 10);
    }

    #[test]
    fn initial_payload_is_kept() {
        let mut finder = WindowConfig::closed(WindowKey::Finder);
        finder.data = Some(json!({ "project": "A" }));
        let seed = load_desktop(catalog(vec![finder])).unwrap();
        assert_eq!(
            seed.windows.window(WindowKey::Finder).unwrap().data,
            Some(json!({ "project": "A" }))
        );
    }

    #[test]
    fn stacking_invariants_are_enforced() {
        let mut closed_above = WindowConfig::closed(WindowKey::Finder);
        closed_above.initial_z = Some(11);
        assert_eq!(
            load_desktop(catalog(vec![closed_above])),
            Err(ConfigError::ClosedWindowZIndex {
                key: WindowKey::Finder,
                z_index: 11,
                baseline: 10,
            })
        );

        assert_eq!(
            load_desktop(catalog(vec![WindowConfig::open_at(WindowKey::Finder, 10)])),
            Err(ConfigError::OpenWindowZIndex {
                key: WindowKey::Finder,
                baseline: 10,
            })
        );

        assert_eq!(
            load_desktop(catalog(vec![
                WindowConfig::open_at(WindowKey::Finder, 12),
                WindowConfig::open_at(WindowKey::Photos, 12),
            ])),
            Err(ConfigError::DuplicateZIndex {
                z_index: 12,
                first: WindowKey::Finder,
                second: WindowKey::Photos,
            })
        );

        assert_eq!(
            load_desktop(catalog(vec![
                WindowConfig::closed(WindowKey::Finder),
                WindowConfig::closed(WindowKey::Finder),
            ])),
            Err(ConfigError::DuplicateWindow(WindowKey::Finder))
        );
    }

    #[test]
    fn schema_and_default_location_are_checked() {
        let mut wrong_schema = catalog(Vec::new());
        wrong_schema.schema_version = 2;
        assert_eq!(
            load_desktop(wrong_schema),
            Err(ConfigError::SchemaMismatch {
                expected: 1,
                found: 2
            })
        );

        let mut missing_default = catalog(Vec::new());
        missing_default.default_location = LocationId::new("home");
        assert_eq!(
            load_desktop(missing_default),
            Err(ConfigError::UnknownDefaultLocation(LocationId::new("home")))
        );
    }

    #[test]
    fn unknown_window_keys_fail_to_parse() {
        let raw = r#"{
            "schema_version": 1,
            "default_location": "work",
            "windows": [{ "key": "calculator", "title": "Calc" }]
        }"#;
        assert!(matches!(
            DesktopCatalog::from_json(raw),
            Err(ConfigError::Parse(_))
        ));
    }
}
