//! Static folder tree and the "current folder" store used by the Finder window.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::model::{LocationConfig, LocationId, LocationNode};
use crate::registry::ConfigError;

/// Read-only folder tree, stored as an arena keyed by [`LocationId`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationTree {
    nodes: Vec<LocationNode>,
    index: HashMap<LocationId, usize>,
    roots: Vec<LocationId>,
}

impl LocationTree {
    /// Builds the tree from catalog entries. A parent must be a folder declared earlier, which
    /// rules out cycles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for duplicate ids and unknown or non-folder parents.
    pub fn from_configs(configs: &[LocationConfig]) -> Result<Self, ConfigError> {
        let mut tree = Self::default();
        for config in configs {
            if tree.index.contains_key(&config.id) {
                return Err(ConfigError::DuplicateLocation(config.id.clone()));
            }
            if let Some(parent_id) = config.parent.as_ref() {
                let parent_idx =
                    *tree
                        .index
                        .get(parent_id)
                        .ok_or_else(|| ConfigError::UnknownParent {
                            id: config.id.clone(),
                            parent: parent_id.clone(),
                        })?;
                let parent = &mut tree.nodes[parent_idx];
                if !parent.kind.is_folder() {
                    return Err(ConfigError::ParentNotFolder {
                        id: config.id.clone(),
                        parent: parent_id.clone(),
                    });
                }
                parent.children.push(config.id.clone());
            } else {
                tree.roots.push(config.id.clone());
            }
            tree.index.insert(config.id.clone(), tree.nodes.len());
            tree.nodes.push(LocationNode {
                id: config.id.clone(),
                name: config.name.clone(),
                icon: config.icon.clone(),
                parent: config.parent.clone(),
                children: Vec::new(),
                kind: config.kind.clone(),
            });
        }
        Ok(tree)
    }

    pub fn node(&self, id: &LocationId) -> Option<&LocationNode> {
        self.index.get(id).map(|idx| &self.nodes[*idx])
    }

    pub fn contains(&self, id: &LocationId) -> bool {
        self.index.contains_key(id)
    }

    /// Top-level nodes in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &LocationNode> {
        self.roots.iter().filter_map(|id| self.node(id))
    }

    /// Direct children of `id` in declaration order; empty for leaves and unknown ids.
    pub fn children<'a>(&'a self, id: &LocationId) -> impl Iterator<Item = &'a LocationNode> + 'a {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |child| self.node(child))
    }

    /// Breadcrumb from the root down to `id` (inclusive). Empty for unknown ids.
    pub fn path_to(&self, id: &LocationId) -> Vec<&LocationNode> {
        let mut path = Vec::new();
        let mut cursor = self.node(id);
        while let Some(node) = cursor {
            path.push(node);
            cursor = node.parent.as_ref().and_then(|parent| self.node(parent));
        }
        path.reverse();
        path
    }
}

/// Current-folder pointer. Always references a node of the shared tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationStore {
    tree: Rc<LocationTree>,
    default: LocationId,
    active: LocationId,
}

impl LocationStore {
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownDefaultLocation`] when `default` is not a folder in `tree`.
    pub fn new(tree: Rc<LocationTree>, default: LocationId) -> Result<Self, ConfigError> {
        let is_folder = tree
            .node(&default)
            .map(|node| node.kind.is_folder())
            .unwrap_or(false);
        if !is_folder {
            return Err(ConfigError::UnknownDefaultLocation(default));
        }
        Ok(Self {
            tree,
            active: default.clone(),
            default,
        })
    }

    pub fn tree(&self) -> &LocationTree {
        &self.tree
    }

    pub fn active_id(&self) -> &LocationId {
        &self.active
    }

    pub fn default_id(&self) -> &LocationId {
        &self.default
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_location`].
pub enum LocationAction {
    /// Point the store at a node; `None` leaves it unchanged.
    SetActiveLocation(Option<LocationId>),
    /// Restore the configured default.
    ResetActiveLocation,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location `{0}` is not part of the folder tree")]
    UnknownLocation(LocationId),
}

/// Applies a [`LocationAction`] and returns whether the active pointer moved.
///
/// # Errors
///
/// Returns [`LocationError::UnknownLocation`] for ids outside the tree; the store is unchanged.
pub fn reduce_location(
    store: &mut LocationStore,
    action: LocationAction,
) -> Result<bool, LocationError> {
    let next = match action {
        LocationAction::SetActiveLocation(None) => return Ok(false),
        LocationAction::SetActiveLocation(Some(id)) => {
            if !store.tree.contains(&id) {
                return Err(LocationError::UnknownLocation(id));
            }
            id
        }
        LocationAction::ResetActiveLocation => store.default.clone(),
    };
    let changed = store.active != next;
    store.active = next;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::LocationKind;

    fn folder(id: &str, parent: Option<&str>) -> LocationConfig {
        LocationConfig {
            id: LocationId::new(id),
            name: id.to_uppercase(),
            parent: parent.map(LocationId::new),
            icon: None,
            kind: LocationKind::Folder,
        }
    }

    fn file(id: &str, parent: &str) -> LocationConfig {
        LocationConfig {
            kind: LocationKind::Image {
                src: format!("/images/{id}.png"),
            },
            ..folder(id, Some(parent))
        }
    }

    fn tree() -> Rc<LocationTree> {
        Rc::new(
            LocationTree::from_configs(&[
                folder("work", None),
                folder("about", None),
                folder("project-a", Some("work")),
                file("shot", "project-a"),
                folder("project-b", Some("work")),
            ])
            .expect("valid tree"),
        )
    }

    fn ids<'a>(nodes: impl IntoIterator<Item = &'a LocationNode>) -> Vec<&'a str> {
        nodes.into_iter().map(|node| node.id.as_str()).collect()
    }

    fn store() -> LocationStore {
        LocationStore::new(tree(), LocationId::new("work")).expect("default exists")
    }

    #[test]
    fn tree_keeps_declaration_order() {
        let tree = tree();
        assert_eq!(ids(tree.roots()), vec!["work", "about"]);
        assert_eq!(
            ids(tree.children(&LocationId::new("work"))),
            vec!["project-a", "project-b"]
        );
        assert!(tree.children(&LocationId::new("shot")).next().is_none());
        assert!(tree.children(&LocationId::new("missing")).next().is_none());
    }

    #[test]
    fn path_runs_from_root_to_node() {
        let tree = tree();
        assert_eq!(
            ids(tree.path_to(&LocationId::new("shot"))),
            vec!["work", "project-a", "shot"]
        );
        assert!(tree.path_to(&LocationId::new("missing")).is_empty());
    }

    #[test]
    fn tree_rejects_bad_parents_and_duplicates() {
        assert_eq!(
            LocationTree::from_configs(&[folder("a", Some("b")), folder("b", None)]),
            Err(ConfigError::UnknownParent {
                id: LocationId::new("a"),
                parent: LocationId::new("b"),
            })
        );
        assert_eq!(
            LocationTree::from_configs(&[folder("a", None), folder("a", None)]),
            Err(ConfigError::DuplicateLocation(LocationId::new("a")))
        );
        assert_eq!(
            LocationTree::from_configs(&[
                folder("a", None),
                file("f", "a"),
                folder("child", Some("f"))
            ]),
            Err(ConfigError::ParentNotFolder {
                id: LocationId::new("child"),
                parent: LocationId::new("f"),
            })
        );
    }

    #[test]
    fn default_must_be_a_folder_in_the_tree() {
        assert_eq!(
            LocationStore::new(tree(), LocationId::new("missing")),
            Err(ConfigError::UnknownDefaultLocation(LocationId::new(
                "missing"
            )))
        );
        assert_eq!(
            LocationStore::new(tree(), LocationId::new("shot")),
            Err(ConfigError::UnknownDefaultLocation(LocationId::new("shot")))
        );
    }

    #[test]
    fn set_active_location_moves_pointer() {
        let mut store = store();
        let changed = reduce_location(
            &mut store,
            LocationAction::SetActiveLocation(Some(LocationId::new("project-b"))),
        )
        .unwrap();
        assert!(changed);
        assert_eq!(store.active_id(), &LocationId::new("project-b"));
        assert_eq!(
            store.tree().node(store.active_id()).map(|node| node.name.as_str()),
            Some("PROJECT-B")
        );
    }

    #[test]
    fn set_active_location_none_is_a_noop() {
        let mut store = store();
        reduce_location(
            &mut store,
            LocationAction::SetActiveLocation(Some(LocationId::new("about"))),
        )
        .unwrap();
        let before = store.clone();

        let changed =
            reduce_location(&mut store, LocationAction::SetActiveLocation(None)).unwrap();

        assert!(!changed);
        assert_eq!(store, before);
    }

    #[test]
    fn unknown_location_is_rejected_without_change() {
        let mut store = store();
        let before = store.clone();
        assert_eq!(
            reduce_location(
                &mut store,
                LocationAction::SetActiveLocation(Some(LocationId::new("nowhere")))
            ),
            Err(LocationError::UnknownLocation(LocationId::new("nowhere")))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn reset_restores_default_from_any_state() {
        let mut store = store();
        assert!(!reduce_location(&mut store, LocationAction::ResetActiveLocation).unwrap());

        reduce_location(
            &mut store,
            LocationAction::SetActiveLocation(Some(LocationId::new("shot"))),
        )
        .unwrap();
        assert!(reduce_location(&mut store, LocationAction::ResetActiveLocation).unwrap());
        assert_eq!(store.active_id(), store.default_id());
        assert_eq!(store.active_id(), &LocationId::new("work"));
    }
}
