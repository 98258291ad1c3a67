//! Procedural color generation.
//!
//! A [`ColorFactory`] maps a position in a palette of `count` colors to a
//! color. Factories hold only their construction parameters, so asking twice
//! for the same `(index, count)` always yields the same color.

use std::fmt::Debug;

use thiserror::Error;

use crate::color::Color;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryError {
    #[error("a combined factory needs at least one factory")]
    NoFactories,
}

pub trait ColorFactory: Debug {
    /// Color for `index` in a palette of `count` colors.
    ///
    /// Callers keep `index < count`; other inputs are not checked.
    fn color(&self, index: usize, count: usize) -> Color;
}

impl<F: ColorFactory + ?Sized> ColorFactory for &F {
    fn color(&self, index: usize, count: usize) -> Color {
        (**self).color(index, count)
    }
}

impl<F: ColorFactory + ?Sized> ColorFactory for Box<F> {
    fn color(&self, index: usize, count: usize) -> Color {
        (**self).color(index, count)
    }
}

/// Shades of a single hue.
///
/// The first half of the palette raises the value at full saturation up to
/// the pure hue, the second half drains the saturation towards white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeFactory {
    hue: f32,
}

impl ShadeFactory {
    pub const fn new(hue: f32) -> Self {
        Self { hue }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }
}

impl ColorFactory for ShadeFactory {
    fn color(&self, index: usize, count: usize) -> Color {
        let index = index + 1;
        let count = count + 1;
        let step = index as f32 * 2.0 / count as f32;

        let (saturation, value) = if index <= count / 2 {
            (1.0, step)
        } else {
            (2.0 - step, 1.0)
        };
        Color::from_hsv(self.hue, saturation, value)
    }
}

/// Hues spread around the wheel at a fixed saturation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainbowFactory {
    saturation: f32,
    value: f32,
}

impl RainbowFactory {
    pub const fn new(saturation: f32, value: f32) -> Self {
        Self { saturation, value }
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

impl ColorFactory for RainbowFactory {
    fn color(&self, index: usize, count: usize) -> Color {
        // (count + 1) keeps the last hue short of wrapping back onto the first one
        let hue = index as f32 * 360.0 / (count + 1) as f32;
        Color::from_hsv(hue, self.saturation, self.value)
    }
}

/// Concatenates the palettes of several factories.
///
/// A palette of `count` colors is split into equal runs of `count / n`
/// colors, one run per factory. `count` must be at least the number of
/// factories: a smaller count leaves every run empty and the lookup divides
/// by zero.
#[derive(Debug)]
pub struct CombinedFactory {
    factories: Vec<Box<dyn ColorFactory>>,
}

impl CombinedFactory {
    pub fn new(factories: Vec<Box<dyn ColorFactory>>) -> Result<Self, FactoryError> {
        if factories.is_empty() {
            return Err(FactoryError::NoFactories);
        }
        Ok(Self { factories })
    }

    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }
}

impl ColorFactory for CombinedFactory {
    fn color(&self, index: usize, count: usize) -> Color {
        let factory_count = self.factories.len();
        let run = count / factory_count;
        self.factories[(index * factory_count) / count].color(index % run, run)
    }
}

/// Shades of red (0°).
pub const RED: ShadeFactory = ShadeFactory::new(0.0);
/// Shades of orange (37°).
pub const ORANGE: ShadeFactory = ShadeFactory::new(37.0);
/// Shades of yellow (60°).
pub const YELLOW: ShadeFactory = ShadeFactory::new(60.0);
/// Shades of green (120°).
pub const GREEN: ShadeFactory = ShadeFactory::new(120.0);
/// Shades of cyan (180°).
pub const CYAN: ShadeFactory = ShadeFactory::new(180.0);
/// Shades of blue (240°).
pub const BLUE: ShadeFactory = ShadeFactory::new(240.0);
/// Shades of purple (280°).
pub const PURPLE: ShadeFactory = ShadeFactory::new(280.0);
/// Shades of pink (320°).
pub const PINK: ShadeFactory = ShadeFactory::new(320.0);

pub const RAINBOW: RainbowFactory = RainbowFactory::new(1.0, 1.0);
/// Same as [`RAINBOW`] at half the saturation.
pub const PASTEL: RainbowFactory = RainbowFactory::new(0.5, 1.0);
