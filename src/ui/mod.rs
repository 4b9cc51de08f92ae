pub mod product_list;
pub mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::catalog::CatalogState;
use crate::theme::Theme;

use self::{
    product_list::ProductList,
    status_bar::{CatalogStatusSegment, FetchStatus, NavigationHintsSegment, StatusBar},
};

/// Projects catalog state into the terminal: the product list plus a
/// one-line status bar.
pub struct UI {
    product_list: ProductList,
    status_bar: StatusBar,
    theme: Theme,
}

impl UI {
    pub fn new(theme: Theme) -> Self {
        Self {
            product_list: ProductList::new(),
            status_bar: StatusBar::new(),
            theme,
        }
    }

    pub fn product_list(&self) -> &ProductList {
        &self.product_list
    }

    pub fn product_list_mut(&mut self) -> &mut ProductList {
        &mut self.product_list
    }

    /// Rows a PageUp/PageDown jump covers, tracking the list area from the
    /// last render.
    pub fn page_jump(&self) -> usize {
        self.product_list.viewport_rows()
    }

    pub fn render(&mut self, frame: &mut Frame, catalog: &CatalogState) {
        self.product_list.set_item_count(catalog.len());
        self.refresh_status_bar(catalog);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.size());

        self.product_list
            .render(frame, chunks[0], catalog, &self.theme);
        self.status_bar.render(frame, chunks[1], &self.theme);
    }

    fn refresh_status_bar(&mut self, catalog: &CatalogState) {
        let fetch_status = if catalog.is_in_flight() {
            FetchStatus::Loading
        } else if catalog.is_exhausted() {
            FetchStatus::Exhausted
        } else {
            FetchStatus::Idle
        };

        self.status_bar.clear();
        self.status_bar.add_segment(Box::new(CatalogStatusSegment {
            loaded_count: catalog.len(),
            next_page: catalog.page(),
            fetch_status,
        }));
        self.status_bar
            .add_segment(Box::new(NavigationHintsSegment::browse_hints()));
    }
}
