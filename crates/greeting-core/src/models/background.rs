use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::AssetRef;

/// Built-in background images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundPreset {
    #[default]
    FlowerField,
    CherryBlossom,
    Rose,
    Balloons,
    Sparkles,
}

impl BackgroundPreset {
    pub const ALL: [BackgroundPreset; 5] = [
        BackgroundPreset::FlowerField,
        BackgroundPreset::CherryBlossom,
        BackgroundPreset::Rose,
        BackgroundPreset::Balloons,
        BackgroundPreset::Sparkles,
    ];

    /// Remote image shown for this preset
    pub fn url(&self) -> &'static str {
        match self {
            BackgroundPreset::FlowerField => {
                "https://images.unsplash.com/photo-1490750967868-88aa4486c946"
            }
            BackgroundPreset::CherryBlossom => {
                "https://images.unsplash.com/photo-1522383225653-ed111181a951"
            }
            BackgroundPreset::Rose => {
                "https://images.unsplash.com/photo-1494972308805-463bc619d34e"
            }
            BackgroundPreset::Balloons => {
                "https://images.unsplash.com/photo-1530103862676-de8c9debad1d"
            }
            BackgroundPreset::Sparkles => {
                "https://images.unsplash.com/photo-1527524816188-6c7c27d61adb"
            }
        }
    }

    /// Preset for a selection label written by earlier hosts, either a preset key or
    /// one of the display labels (`꽃밭`, `벚꽃`, `장미`, `풍선`, `반짝이`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "꽃밭" => Some(BackgroundPreset::FlowerField),
            "벚꽃" => Some(BackgroundPreset::CherryBlossom),
            "장미" => Some(BackgroundPreset::Rose),
            "풍선" => Some(BackgroundPreset::Balloons),
            "반짝이" => Some(BackgroundPreset::Sparkles),
            other => other.parse().ok(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            BackgroundPreset::FlowerField => "flower_field",
            BackgroundPreset::CherryBlossom => "cherry_blossom",
            BackgroundPreset::Rose => "rose",
            BackgroundPreset::Balloons => "balloons",
            BackgroundPreset::Sparkles => "sparkles",
        }
    }
}

impl FromStr for BackgroundPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        BackgroundPreset::ALL
            .into_iter()
            .find(|preset| preset.key() == normalized)
            .ok_or_else(|| anyhow::anyhow!("Invalid background preset: {}", s))
    }
}

impl Display for BackgroundPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

/// Background selection: a preset or an uploaded image.
///
/// Written as `{"mode": ...}`. Records from earlier hosts stored a bare label
/// instead; those load as the matching preset, or the default preset when the
/// label names an unsaved upload or is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase", from = "StoredBackground")]
pub enum Background {
    Preset { key: BackgroundPreset },
    Custom { reference: AssetRef },
}

#[derive(Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
enum TaggedBackground {
    Preset { key: BackgroundPreset },
    Custom { reference: AssetRef },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBackground {
    Tagged(TaggedBackground),
    Label(String),
}

impl From<StoredBackground> for Background {
    fn from(stored: StoredBackground) -> Self {
        match stored {
            StoredBackground::Tagged(TaggedBackground::Preset { key }) => {
                Background::Preset { key }
            }
            StoredBackground::Tagged(TaggedBackground::Custom { reference }) => {
                Background::Custom { reference }
            }
            StoredBackground::Label(label) => Background::Preset {
                key: BackgroundPreset::from_label(&label).unwrap_or_default(),
            },
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Preset {
            key: BackgroundPreset::default(),
        }
    }
}

impl Background {
    pub fn is_custom(&self) -> bool {
        matches!(self, Background::Custom { .. })
    }
}
