use crate::palette::{ColorSelection, Palette};

/// Pages of palettes, one palette per page.
///
/// The pager opens on the middle page so both neighbours are one swipe away.
#[derive(Debug, Clone)]
pub struct PalettePager {
    pages: Vec<Palette>,
    by_name: ahash::AHashMap<String, usize>,
    current: usize,
}

impl PalettePager {
    pub fn new(pages: Vec<Palette>) -> Self {
        let mut by_name = ahash::AHashMap::default();
        for (index, page) in pages.iter().enumerate() {
            by_name.entry(page.name().to_string()).or_insert(index);
        }
        let current = pages.len() / 2;
        tracing::debug!(pages = pages.len(), current, "opened palette pager");

        Self { pages, by_name, current }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_palette(&self) -> Option<&Palette> {
        self.pages.get(self.current)
    }

    pub fn page(&self, index: usize) -> Option<&Palette> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[Palette] {
        &self.pages
    }

    /// First page showing the palette called `name`.
    pub fn page_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Moves to `page`, clamped to the last page.
    pub fn set_current(&mut self, page: usize) {
        self.current = page.min(self.pages.len().saturating_sub(1));
    }

    /// Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.pages.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn tap(&self, page: usize, index: usize) -> Option<ColorSelection> {
        self.pages.get(page)?.select(index)
    }

    pub fn into_pages(self) -> Vec<Palette> {
        self.pages
    }
}
