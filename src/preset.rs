//! Declarative palette setup.
//!
//! A [`PickerConfig`] names the palettes to show by preset, e.g.
//!
//! ```json
//! { "title": "Label color",
//!   "palettes": [ { "name": "Warm", "presets": ["red", "orange"], "count": 16 } ] }
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    factory::{self, ColorFactory, CombinedFactory, FactoryError},
    palette::Palette,
};

pub const DEFAULT_COLOR_COUNT: usize = 16;
pub const DEFAULT_TITLE: &str = "Pick a color";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("palette {name:?} has {count} colors, fewer than its {presets} presets")]
    TooFewColors { name: String, count: usize, presets: usize },
    #[error("palette {name:?} names {names} colors but has {count}")]
    NameCountMismatch { name: String, names: usize, count: usize },
    #[error("palette {name:?}: {source}")]
    Factory { name: String, source: FactoryError },
    #[error("invalid picker config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FactoryPreset {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    Rainbow,
    Pastel,
}

impl FactoryPreset {
    pub fn factory(self) -> Box<dyn ColorFactory> {
        match self {
            FactoryPreset::Red => Box::new(factory::RED),
            FactoryPreset::Orange => Box::new(factory::ORANGE),
            FactoryPreset::Yellow => Box::new(factory::YELLOW),
            FactoryPreset::Green => Box::new(factory::GREEN),
            FactoryPreset::Cyan => Box::new(factory::CYAN),
            FactoryPreset::Blue => Box::new(factory::BLUE),
            FactoryPreset::Purple => Box::new(factory::PURPLE),
            FactoryPreset::Pink => Box::new(factory::PINK),
            FactoryPreset::Rainbow => Box::new(factory::RAINBOW),
            FactoryPreset::Pastel => Box::new(factory::PASTEL),
        }
    }

    pub fn is_wheel(self) -> bool {
        matches!(self, FactoryPreset::Rainbow | FactoryPreset::Pastel)
    }

    /// Capitalized name, used for the default palettes.
    pub fn label(self) -> String {
        let name: &str = self.as_ref();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub name: String,
    pub presets: Vec<FactoryPreset>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_names: Vec<String>,
}

fn default_count() -> usize {
    DEFAULT_COLOR_COUNT
}

impl PaletteConfig {
    pub fn new(name: impl Into<String>, presets: impl IntoIterator<Item = FactoryPreset>, count: usize) -> Self {
        Self {
            name: name.into(),
            presets: presets.into_iter().collect(),
            count,
            color_names: Vec::new(),
        }
    }

    pub fn with_color_names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.color_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the palette, combining the presets when there are several.
    pub fn build(&self) -> Result<Palette, ConfigError> {
        if self.count < self.presets.len() {
            return Err(ConfigError::TooFewColors {
                name: self.name.clone(),
                count: self.count,
                presets: self.presets.len(),
            });
        }
        if !self.color_names.is_empty() && self.color_names.len() != self.count {
            return Err(ConfigError::NameCountMismatch {
                name: self.name.clone(),
                names: self.color_names.len(),
                count: self.count,
            });
        }

        let factory: Box<dyn ColorFactory> = match self.presets.as_slice() {
            [single] => single.factory(),
            presets => {
                let combined = CombinedFactory::new(presets.iter().map(|p| p.factory()).collect_vec())
                    .map_err(|source| ConfigError::Factory { name: self.name.clone(), source })?;
                Box::new(combined)
            }
        };

        let names = &self.color_names;
        Ok(Palette::with_names(&self.name, &factory, self.count, |i| names.get(i).cloned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub title: Option<String>,
    pub palettes: Vec<PaletteConfig>,
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_palettes(&self) -> Result<Vec<Palette>, ConfigError> {
        self.palettes.iter().map(PaletteConfig::build).collect()
    }
}

impl Default for PickerConfig {
    /// The two color wheels followed by every shade preset.
    fn default() -> Self {
        let (wheels, shades): (Vec<_>, Vec<_>) = FactoryPreset::iter().partition(|p| p.is_wheel());
        let palettes = wheels
            .into_iter()
            .chain(shades)
            .map(|preset| PaletteConfig::new(preset.label(), [preset], DEFAULT_COLOR_COUNT))
            .collect();

        Self {
            title: Some(DEFAULT_TITLE.to_string()),
            palettes,
        }
    }
}
