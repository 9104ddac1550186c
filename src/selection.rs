//! Paginated, filterable list of presets.
//!
//! The list has no size until the first [`SelectionSurface::resize`]; before
//! that nothing is highlighted. The usable area is the terminal size minus
//! the configured margin.

use ratatui::layout::Margin;

use crate::catalog::Preset;
use crate::config::frame_size;
use crate::constants::list::{FOOTER_ROWS, HEADER_ROWS, ITEM_HEIGHT};
use crate::event::Action;

/// Filter prompt state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    /// No filter applied
    #[default]
    Unfiltered,
    /// The prompt is open and being edited
    Filtering,
    /// A filter has been accepted
    Applied,
}

/// The list of presets the user picks from.
#[derive(Debug, Clone)]
pub struct SelectionSurface {
    presets: Vec<Preset>,
    margin: Margin,
    /// Usable (width, height) once sized
    size: Option<(u16, u16)>,
    filter: String,
    filter_state: FilterState,
    /// Index into the visible (filtered) presets
    cursor: usize,
}

impl SelectionSurface {
    pub fn new(presets: &[Preset], margin: Margin) -> Self {
        Self {
            presets: presets.to_vec(),
            margin,
            size: None,
            filter: String::new(),
            filter_state: FilterState::Unfiltered,
            cursor: 0,
        }
    }

    /// Sizes the list for a terminal of `width` x `height`.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (h, v) = frame_size(self.margin);
        let usable = (width.saturating_sub(h).max(1), height.saturating_sub(v).max(1));
        self.size = Some(usable);
        self.clamp_cursor();
        tracing::debug!("List resized to {}x{}", usable.0, usable.1);
    }

    /// Usable (width, height), if the list has been sized.
    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Returns the highlighted preset.
    pub fn current_selection(&self) -> Option<&Preset> {
        self.size?;
        let visible = self.visible_indices();
        visible.get(self.cursor).map(|&idx| &self.presets[idx])
    }

    /// Applies a navigation or filter action.
    pub fn handle_action(&mut self, action: &Action) {
        if self.filter_state == FilterState::Filtering {
            self.handle_filter_input(action);
            return;
        }

        match action {
            Action::Up => self.select_previous(),
            Action::Down => self.select_next(),
            Action::Top => self.cursor = 0,
            Action::Bottom => self.cursor = self.visible_len().saturating_sub(1),
            Action::PrevPage => self.prev_page(),
            Action::NextPage => self.next_page(),
            Action::Filter => {
                self.filter.clear();
                self.filter_state = FilterState::Filtering;
                self.cursor = 0;
            }
            Action::Back => self.reset_filter(),
            _ => {}
        }
    }

    fn handle_filter_input(&mut self, action: &Action) {
        match action {
            Action::Char(c) => {
                self.filter.push(*c);
                self.cursor = 0;
            }
            Action::Backspace => {
                self.filter.pop();
                self.cursor = 0;
            }
            Action::Submit => {
                self.filter_state = if self.filter.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::Applied
                };
                tracing::debug!("Filter accepted: {:?}", self.filter);
            }
            Action::Back => self.reset_filter(),
            Action::Up => self.select_previous(),
            Action::Down => self.select_next(),
            _ => {}
        }
    }

    fn reset_filter(&mut self) {
        self.filter.clear();
        self.filter_state = FilterState::Unfiltered;
        self.cursor = 0;
    }

    /// Whether the filter prompt is taking text input.
    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Indices of presets matching the current filter, in catalog order.
    fn visible_indices(&self) -> Vec<usize> {
        self.presets
            .iter()
            .enumerate()
            .filter(|(_, p)| fuzzy_match(&self.filter, p.filter_value()))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Presets matching the current filter.
    pub fn visible(&self) -> Vec<&Preset> {
        self.visible_indices()
            .into_iter()
            .map(|idx| &self.presets[idx])
            .collect()
    }

    fn visible_len(&self) -> usize {
        self.visible_indices().len()
    }

    /// Highlighted index within the visible presets.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // --- Pagination ---

    /// Items shown per page for the current height.
    pub fn per_page(&self) -> usize {
        let height = self.size.map_or(0, |(_, h)| h);
        let rows = height.saturating_sub(HEADER_ROWS + FOOTER_ROWS);
        usize::from((rows / ITEM_HEIGHT).max(1))
    }

    pub fn total_pages(&self) -> usize {
        self.visible_len().div_ceil(self.per_page()).max(1)
    }

    pub fn page(&self) -> usize {
        self.cursor / self.per_page()
    }

    /// Range of visible indices on the current page.
    pub fn page_bounds(&self) -> (usize, usize) {
        let per_page = self.per_page();
        let start = self.page() * per_page;
        let end = (start + per_page).min(self.visible_len());
        (start, end)
    }

    // --- Navigation helpers ---

    fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor >= len - 1 { 0 } else { self.cursor + 1 };
    }

    fn prev_page(&mut self) {
        let per_page = self.per_page();
        if self.page() > 0 {
            self.cursor = (self.page() - 1) * per_page;
        }
    }

    fn next_page(&mut self) {
        let per_page = self.per_page();
        if self.page() + 1 < self.total_pages() {
            self.cursor = (self.page() + 1) * per_page;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

/// Case-insensitive subsequence match; an empty pattern matches everything.
pub fn fuzzy_match(pattern: &str, text: &str) -> bool {
    let mut haystack = text.chars().flat_map(char::to_lowercase);
    pattern
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .all(|p| haystack.any(|c| c == p))
}
