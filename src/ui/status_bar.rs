use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Trait for status bar segments that can be rendered
pub trait StatusSegment {
    /// Get the content to display in this segment
    fn content(&self) -> String;

    /// Get the minimum width required for this segment
    fn min_width(&self) -> u16;

    /// Get the priority of this segment (higher = more important)
    fn priority(&self) -> u8;

    /// Whether this segment should be visible
    fn is_visible(&self) -> bool {
        true
    }

    /// Get custom styling for this segment (optional)
    fn custom_style(&self, _theme: &Theme) -> Option<Style> {
        None
    }
}

/// Current fetch activity shown in the catalog segment.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Exhausted,
}

/// Catalog segment showing loaded count, next page, and fetch activity.
#[derive(Debug, Clone)]
pub struct CatalogStatusSegment {
    pub loaded_count: usize,
    pub next_page: u32,
    pub fetch_status: FetchStatus,
}

impl StatusSegment for CatalogStatusSegment {
    fn content(&self) -> String {
        match self.fetch_status {
            FetchStatus::Loading => {
                format!("Catalog: {} items ⟳ page {}", self.loaded_count, self.next_page)
            }
            FetchStatus::Exhausted => format!("Catalog: {} items ● end", self.loaded_count),
            FetchStatus::Idle => {
                format!("Catalog: {} items ○ page {}", self.loaded_count, self.next_page)
            }
        }
    }

    fn min_width(&self) -> u16 {
        20
    }

    fn priority(&self) -> u8 {
        90
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        match self.fetch_status {
            FetchStatus::Loading => Some(theme.loading),
            _ => None,
        }
    }
}

/// Navigation hints segment
#[derive(Debug, Clone)]
pub struct NavigationHintsSegment {
    pub hints: Vec<String>,
}

impl NavigationHintsSegment {
    pub fn browse_hints() -> Self {
        Self {
            hints: vec![
                "↑↓ navigate".to_string(),
                "Enter open".to_string(),
                "q quit".to_string(),
            ],
        }
    }
}

impl StatusSegment for NavigationHintsSegment {
    fn content(&self) -> String {
        self.hints.join(" │ ")
    }

    fn min_width(&self) -> u16 {
        15
    }

    fn priority(&self) -> u8 {
        30
    }

    fn is_visible(&self) -> bool {
        !self.hints.is_empty()
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        Some(theme.status_hint)
    }
}

/// Single-line status bar composed of prioritized segments.
pub struct StatusBar {
    segments: Vec<Box<dyn StatusSegment>>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn add_segment(&mut self, segment: Box<dyn StatusSegment>) {
        self.segments.push(segment);
        self.segments.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut spans: Vec<Span> = Vec::new();
        let mut used: u16 = 0;

        for segment in self.segments.iter().filter(|s| s.is_visible()) {
            let content = segment.content();
            let width = content.chars().count() as u16;
            // Drop lower-priority segments that no longer fit.
            let separator_width = if spans.is_empty() { 0 } else { 3 };
            if used + width + separator_width > area.width {
                break;
            }
            if !spans.is_empty() {
                spans.push(Span::styled(" │ ", theme.status_hint));
            }
            let style = segment.custom_style(theme).unwrap_or(theme.status_bar);
            spans.push(Span::styled(content, style));
            used += width + separator_width;
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(theme.status_bar);
        frame.render_widget(paragraph, area);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
