use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// User preferences. Theme lives outside the core; only the persisted
/// settings are modeled here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub notifications: bool,
    #[serde(rename = "fontSize")]
    pub font_size: FontSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            font_size: FontSize::Medium,
        }
    }
}
