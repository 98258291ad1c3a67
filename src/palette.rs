use serde::{Deserialize, Serialize};

use crate::{color::Color, factory::ColorFactory};

/// A single entry of a palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swatch {
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// What a listener receives when a swatch is picked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorSelection {
    pub color: Color,
    pub color_name: Option<String>,
    pub palette_name: String,
}

/// A named, fixed list of swatches.
///
/// Palettes are plain values: once built they never change, and they can be
/// cloned or serialized freely by whatever layer keeps UI state around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    name: String,
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Builds `count` unnamed swatches from `factory`.
    pub fn new<F>(name: impl Into<String>, factory: &F, count: usize) -> Self
    where
        F: ColorFactory + ?Sized,
    {
        Self::with_names(name, factory, count, |_| None)
    }

    /// Builds `count` swatches from `factory`, naming each one with `namer`.
    ///
    /// Both are called once per index, in ascending order.
    pub fn with_names<F, N>(name: impl Into<String>, factory: &F, count: usize, mut namer: N) -> Self
    where
        F: ColorFactory + ?Sized,
        N: FnMut(usize) -> Option<String>,
    {
        let name = name.into();
        let swatches = (0..count)
            .map(|index| Swatch {
                color: factory.color(index, count),
                name: namer(index),
            })
            .collect();
        tracing::debug!(palette = %name, count, "built palette");
        Self { name, swatches }
    }

    pub fn from_swatches(name: impl Into<String>, swatches: impl IntoIterator<Item = Swatch>) -> Self {
        Self {
            name: name.into(),
            swatches: swatches.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Panics if `index` is out of range.
    pub fn color_at(&self, index: usize) -> Color {
        self.swatches[index].color
    }

    /// Panics if `index` is out of range.
    pub fn color_name_at(&self, index: usize) -> Option<&str> {
        self.swatches[index].name.as_deref()
    }

    pub fn get(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Index of the first swatch with this color.
    pub fn position(&self, color: Color) -> Option<usize> {
        self.swatches.iter().position(|s| s.color == color)
    }

    pub fn select(&self, index: usize) -> Option<ColorSelection> {
        let swatch = self.get(index)?;
        Some(ColorSelection {
            color: swatch.color,
            color_name: swatch.name.clone(),
            palette_name: self.name.clone(),
        })
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}
