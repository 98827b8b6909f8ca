use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stacking value assigned to closed windows when the catalog does not override it.
pub const DEFAULT_BASELINE_Z_INDEX: u32 = 1000;

/// One simulated application window. The set is closed and known at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKey {
    Finder,
    Safari,
    Photos,
    Contact,
    Terminal,
    Resume,
    TextFile,
    ImageFile,
}

impl WindowKey {
    pub const ALL: [WindowKey; 8] = [
        Self::Finder,
        Self::Safari,
        Self::Photos,
        Self::Contact,
        Self::Terminal,
        Self::Resume,
        Self::TextFile,
        Self::ImageFile,
    ];

    /// Stable lowercase identifier used by launcher configuration and DOM ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Safari => "safari",
            Self::Photos => "photos",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::Resume => "resume",
            Self::TextFile => "textfile",
            Self::ImageFile => "imagefile",
        }
    }

    /// Parses a launcher target. Unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-window state tracked by the window store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub is_open: bool,
    pub z_index: u32,
    /// Context passed at open time, cleared on close.
    pub data: Option<Value>,
}

/// Registry entry for one window as declared in the desktop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub key: WindowKey,
    pub title: String,
    #[serde(default)]
    pub initially_open: bool,
    #[serde(default)]
    pub initial_z: Option<u32>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl WindowConfig {
    pub fn closed(key: WindowKey) -> Self {
        Self {
            key,
            title: key.as_str().to_string(),
            initially_open: false,
            initial_z: None,
            data: None,
        }
    }

    pub fn open_at(key: WindowKey, z_index: u32) -> Self {
        Self {
            initially_open: true,
            initial_z: Some(z_index),
            ..Self::closed(key)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a folder-tree node holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LocationKind {
    Folder,
    Text {
        #[serde(default)]
        lines: Vec<String>,
        #[serde(default)]
        image: Option<String>,
    },
    Image {
        src: String,
    },
    Pdf {
        href: String,
    },
    Url {
        href: String,
    },
}

impl LocationKind {
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }
}

/// Folder-tree entry as declared in the desktop catalog. Parents must appear before children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub parent: Option<LocationId>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub kind: LocationKind,
}

/// Node of the static folder tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationNode {
    pub id: LocationId,
    pub name: String,
    pub icon: Option<String>,
    pub parent: Option<LocationId>,
    pub children: Vec<LocationId>,
    pub kind: LocationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockEntry {
    /// Launcher target; may name something that is not a registered window.
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub can_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
}

/// Static lists rendered by window bodies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub resume_href: String,
    #[serde(default)]
    pub tech_stack: Vec<TechCategory>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Accumulated on-screen displacement of a dragged window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragOffset {
    pub x: i32,
    pub y: i32,
}

impl DragOffset {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_keys_parse_from_their_launcher_names() {
        for key in WindowKey::ALL {
            assert_eq!(WindowKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(WindowKey::parse("trash"), None);
        assert_eq!(WindowKey::parse("Finder"), None);
    }

    #[test]
    fn window_key_serde_matches_launcher_names() {
        let json = serde_json::to_string(&WindowKey::TextFile).unwrap();
        assert_eq!(json, "\"textfile\"");
        let key: WindowKey = serde_json::from_str("\"imagefile\"").unwrap();
        assert_eq!(key, WindowKey::ImageFile);
    }

    #[test]
    fn location_config_reads_flattened_kind() {
        let raw = r#"{
            "id": "notes",
            "name": "notes.txt",
            "parent": "work",
            "kind": "text",
            "lines": ["one", "two"]
        }"#;
        let config: LocationConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.parent, Some(LocationId::new("work")));
        assert_eq!(
            config.kind,
            LocationKind::Text {
                lines: vec!["one".to_string(), "two".to_string()],
                image: None,
            }
        );
    }
}
