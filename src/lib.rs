//! Procedural color palettes and a headless model of a palette picker.
//!
//! Palettes are generated by [`ColorFactory`] implementations, shown page by
//! page in a [`PalettePager`] and picked through a [`ColorPickerDialog`] that
//! reports the chosen swatch to its listener.

pub mod color;
pub mod dialog;
pub mod factory;
pub mod grid;
pub mod make_image;
pub mod pager;
pub mod palette;
pub mod preset;

pub use color::Color;
pub use dialog::{ColorPickerDialog, DialogState, DialogTitle, OnColorSelected};
pub use factory::{ColorFactory, CombinedFactory, RainbowFactory, ShadeFactory};
pub use grid::GridMetrics;
pub use pager::PalettePager;
pub use palette::{ColorSelection, Palette, Swatch};
pub use preset::{FactoryPreset, PaletteConfig, PickerConfig};
