//! Lighting and LED panel bundles.

use serde::{Deserialize, Serialize};

/// Linear RGB triple, each channel 0.0–1.0.
pub type Rgb = [f64; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureType {
    Metal,
    Crystal,
    Neon,
    Mystical,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingState {
    pub glow_color: Rgb,
    pub glow_intensity: f64,
    pub edge_color: Rgb,
    pub texture_type: TextureType,
    /// Breaths per second.
    pub breathing_speed: f64,
    pub breathing_amplitude: f64,
    pub mood_color: Rgb,
}

impl Default for LightingState {
    fn default() -> Self {
        Self {
            glow_color: [0.2, 0.6, 1.0],
            glow_intensity: 0.3,
            edge_color: [1.0, 0.8, 0.4],
            texture_type: TextureType::Metal,
            breathing_speed: 1.0,
            breathing_amplitude: 0.1,
            mood_color: [0.3, 0.5, 0.8],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    None,
    Shader,
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    Tile,
    Face,
    Global,
}

/// Content of one LED panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelContent {
    #[serde(rename = "type")]
    pub kind: PanelKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shader_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_mode: Option<SyncMode>,
}

impl PanelContent {
    pub fn none() -> Self {
        Self {
            kind: PanelKind::None,
            shader_name: None,
            sync_mode: None,
        }
    }

    pub fn shader(name: &str, sync_mode: SyncMode) -> Self {
        Self {
            kind: PanelKind::Shader,
            shader_name: Some(name.to_string()),
            sync_mode: Some(sync_mode),
        }
    }
}

pub const FACE_COUNT: usize = 6;
pub const PANELS_PER_FACE: usize = 9;

/// Six faces of nine panels each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedState {
    pub faces: [[PanelContent; PANELS_PER_FACE]; FACE_COUNT],
}

impl LedState {
    /// Every panel set to the same content.
    pub fn uniform(content: PanelContent) -> Self {
        let face: [PanelContent; PANELS_PER_FACE] = std::array::from_fn(|_| content.clone());
        Self {
            faces: std::array::from_fn(|_| face.clone()),
        }
    }

    pub fn panels(&self) -> impl Iterator<Item = &PanelContent> {
        self.faces.iter().flat_map(|f| f.iter())
    }
}

impl Default for LedState {
    fn default() -> Self {
        Self::uniform(PanelContent::none())
    }
}
