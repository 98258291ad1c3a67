//! The color picker dialog.
//!
//! The dialog owns a [`PalettePager`] and the listener its owner handed in.
//! Picking a swatch forwards the selection to that listener exactly once and
//! dismisses the dialog.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    grid::{self, GridMetrics},
    pager::PalettePager,
    palette::{ColorSelection, Palette},
    preset::{ConfigError, PickerConfig},
};

#[derive(Error, Debug)]
pub enum StateError {
    #[error("failed to encode dialog state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode dialog state: {0}")]
    Decode(#[source] serde_json::Error),
}

pub trait OnColorSelected {
    fn on_color_selected(&mut self, selection: &ColorSelection);
}

impl<F: FnMut(&ColorSelection)> OnColorSelected for F {
    fn on_color_selected(&mut self, selection: &ColorSelection) {
        self(selection)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTitle<'a> {
    /// Id of a string resource the host resolves.
    Resource(u32),
    Text(&'a str),
    None,
}

/// Everything needed to bring a dialog back after its host tears it down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogState {
    pub palettes: Vec<Palette>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_id: u32,
}

impl DialogState {
    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(StateError::Encode)
    }

    pub fn from_json(json: &str) -> Result<Self, StateError> {
        serde_json::from_str(json).map_err(StateError::Decode)
    }
}

pub struct ColorPickerDialog<L> {
    pager: PalettePager,
    title: Option<String>,
    title_id: u32,
    listener: L,
    dismissed: bool,
}

impl<L: OnColorSelected> ColorPickerDialog<L> {
    pub fn new(palettes: Vec<Palette>, listener: L) -> Self {
        Self {
            pager: PalettePager::new(palettes),
            title: None,
            title_id: 0,
            listener,
            dismissed: false,
        }
    }

    pub fn from_config(config: &PickerConfig, listener: L) -> Result<Self, ConfigError> {
        let mut dialog = Self::new(config.build_palettes()?, listener);
        dialog.title = config.title.clone();
        Ok(dialog)
    }

    /// Rebuilds a dialog from saved state. The pager starts over on its middle page.
    pub fn restore(state: DialogState, listener: L) -> Self {
        let mut dialog = Self::new(state.palettes, listener);
        dialog.title = state.title;
        dialog.title_id = state.title_id;
        dialog
    }

    pub fn save_state(&self) -> DialogState {
        DialogState {
            palettes: self.pager.pages().to_vec(),
            title: self.title.clone(),
            title_id: self.title_id,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Uses a string resource as the title. 0 clears it.
    pub fn set_title_res(&mut self, id: u32) {
        self.title_id = id;
    }

    /// A resource title wins over a text title.
    pub fn title(&self) -> DialogTitle<'_> {
        match (self.title_id, self.title.as_deref()) {
            (0, Some(text)) => DialogTitle::Text(text),
            (0, None) => DialogTitle::None,
            (id, _) => DialogTitle::Resource(id),
        }
    }

    pub fn pager(&self) -> &PalettePager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut PalettePager {
        &mut self.pager
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Picks swatch `index` on `page`.
    ///
    /// Does nothing once the dialog is dismissed or when there is no such swatch.
    pub fn select(&mut self, page: usize, index: usize) -> Option<ColorSelection> {
        if self.dismissed {
            tracing::debug!(page, index, "ignored selection on dismissed dialog");
            return None;
        }
        let selection = self.pager.tap(page, index)?;
        tracing::debug!(
            color = %selection.color,
            palette = %selection.palette_name,
            "color selected"
        );
        self.listener.on_color_selected(&selection);
        self.dismissed = true;
        Some(selection)
    }

    /// Picks whatever swatch of the current page lies under `(x, y)`.
    pub fn tap_at(&mut self, x: u32, y: u32, metrics: &GridMetrics) -> Option<ColorSelection> {
        let page = self.pager.current();
        let count = self.pager.current_palette()?.len();
        let index = metrics.hit_test(x, y, count)?;
        self.select(page, index)
    }

    /// Measures the current page's grid inside a parent of the given size.
    pub fn measure_current(&self, width: u32, height: u32, spacing: u32) -> Option<Result<GridMetrics, grid::GridError>> {
        let palette = self.pager.current_palette()?;
        let columns = grid::column_count(palette.len()) as u32;
        Some(GridMetrics::measure(width, height, spacing, columns))
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}

impl<L> fmt::Debug for ColorPickerDialog<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPickerDialog")
            .field("pager", &self.pager)
            .field("title", &self.title)
            .field("title_id", &self.title_id)
            .field("dismissed", &self.dismissed)
            .finish_non_exhaustive()
    }
}
