use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::catalog::CatalogState;
use crate::theme::Theme;

/// How close to the end of the loaded list the selection must be before
/// the next page is requested. A threshold avoids the fragile "exactly at
/// the bottom" comparison.
const NEAR_BOTTOM_THRESHOLD: usize = 2;

/// Scrollable list over the accumulated products.
///
/// The widget owns only cursor state; the products themselves live in
/// [`CatalogState`] and are borrowed at render time.
pub struct ProductList {
    state: ListState,
    item_count: usize,
    viewport_rows: usize,
}

impl ProductList {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            item_count: 0,
            // Refined from the actual list area on first render.
            viewport_rows: 10,
        }
    }

    /// Rows visible in the list body as of the last render; this is what a
    /// PageUp/PageDown jump covers.
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows.max(1)
    }

    /// Currently selected index into the loaded products, if any.
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Sync the cursor with the current product count. Selects the first
    /// item once products exist.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        match self.state.selected() {
            None if count > 0 => self.state.select(Some(0)),
            Some(sel) if sel >= count && count > 0 => self.state.select(Some(count - 1)),
            Some(_) if count == 0 => self.state.select(None),
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(sel) => (sel + 1).min(self.item_count - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let prev = self.state.selected().map_or(0, |sel| sel.saturating_sub(1));
        self.state.select(Some(prev));
    }

    pub fn select_page_down(&mut self, page: usize) {
        if self.item_count == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(sel) => (sel + page.max(1)).min(self.item_count - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_page_up(&mut self, page: usize) {
        if self.item_count == 0 {
            return;
        }
        let prev = self
            .state
            .selected()
            .map_or(0, |sel| sel.saturating_sub(page.max(1)));
        self.state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if self.item_count > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if self.item_count > 0 {
            self.state.select(Some(self.item_count - 1));
        }
    }

    /// True when the selection sits within the trigger threshold of the
    /// last loaded item. An empty list counts as near the bottom so the
    /// very first page can load without any interaction.
    pub fn is_near_bottom(&self) -> bool {
        if self.item_count == 0 {
            return true;
        }
        match self.state.selected() {
            Some(sel) => sel + NEAR_BOTTOM_THRESHOLD >= self.item_count - 1,
            None => false,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, catalog: &CatalogState, theme: &Theme) {
        // List body height inside the block borders.
        self.viewport_rows = area.height.saturating_sub(2) as usize;

        let mut items: Vec<ListItem> = catalog
            .products()
            .iter()
            .map(|product| {
                let mut spans = vec![Span::styled(product.title.clone(), theme.product_title)];
                if product.primary_image().is_some() {
                    spans.push(Span::styled("  🖼", theme.product_handle));
                }
                spans.push(Span::styled(
                    format!("  /{}", product.handle),
                    theme.product_handle,
                ));
                ListItem::new(Line::from(spans))
            })
            .collect();

        if catalog.is_in_flight() {
            items.push(ListItem::new(Line::from(Span::styled(
                "Loading more products...",
                theme.loading,
            ))));
        } else if catalog.is_exhausted() {
            items.push(ListItem::new(Line::from(Span::styled(
                "No more products to display",
                theme.exhausted,
            ))));
        }

        let title = format!(" Products ({}) ", catalog.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_focused)
                    .title(Span::styled(title, theme.title)),
            )
            .highlight_style(theme.selection)
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new()
    }
}
