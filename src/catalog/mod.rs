pub mod client;

use serde::Deserialize;

pub use client::{CatalogClient, CatalogError, ProductSource};

/// Number of products requested per page.
pub const PAGE_SIZE: u32 = 10;

/// A single product image reference from the catalog feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductImage {
    pub src: String,
}

/// One product as returned by the catalog endpoint.
///
/// Products are immutable once appended to the catalog state and live for
/// the duration of the session.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// URL of the first image, if the product has one.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|img| img.src.as_str())
    }

    /// Build the detail page URL for this product.
    pub fn detail_url(&self, site_base: &str) -> String {
        format!("{}/products/{}", site_base.trim_end_matches('/'), self.handle)
    }
}

/// Outcome of a dispatched page fetch, reported back to the run loop.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(Vec<Product>),
    Failure(CatalogError),
}

/// Accumulated catalog view state and the pagination state machine.
///
/// The state machine enforces two invariants:
/// - at most one fetch is in flight at any time (`begin_fetch` returns
///   `None` while one is outstanding)
/// - once a fetch returns zero items the catalog is exhausted and no
///   further fetch is ever started
#[derive(Debug)]
pub struct CatalogState {
    products: Vec<Product>,
    page: u32,
    in_flight: bool,
    exhausted: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            page: 1,
            in_flight: false,
            exhausted: false,
        }
    }

    /// All products accumulated so far, in fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Page number the next fetch will request (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Start a fetch if the state permits one.
    ///
    /// Returns the page number to request, or `None` when a fetch is
    /// already outstanding or the catalog is exhausted. The caller must
    /// later resolve the fetch with [`apply_success`](Self::apply_success)
    /// or [`apply_failure`](Self::apply_failure).
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.in_flight || self.exhausted {
            return None;
        }
        self.in_flight = true;
        Some(self.page)
    }

    /// Record a successful fetch: append the batch, mark the catalog
    /// exhausted on an empty batch, and advance the cursor.
    pub fn apply_success(&mut self, items: Vec<Product>) {
        if items.is_empty() {
            self.exhausted = true;
        }
        self.products.extend(items);
        // The cursor advances even for an empty page; the exhausted flag
        // already prevents it from ever being requested.
        self.page += 1;
        self.in_flight = false;
    }

    /// Record a failed fetch. The cursor is left untouched so the next
    /// trigger re-requests the same page.
    pub fn apply_failure(&mut self) {
        self.in_flight = false;
    }

    /// Route a fetch outcome into the state, logging failures.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Success(items) => {
                tracing::debug!(
                    count = items.len(),
                    page = self.page,
                    "catalog page fetched"
                );
                self.apply_success(items);
            }
            FetchOutcome::Failure(err) => {
                tracing::error!(page = self.page, error = %err, "failed to fetch catalog page");
                self.apply_failure();
            }
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            handle: format!("product-{id}"),
            images: vec![ProductImage {
                src: format!("https://cdn.example.com/{id}.jpg"),
            }],
        }
    }

    fn batch(start: u64, count: u64) -> Vec<Product> {
        (start..start + count).map(product).collect()
    }

    #[test]
    fn begin_fetch_returns_current_page_and_sets_in_flight() {
        let mut state = CatalogState::new();
        assert_eq!(state.begin_fetch(), Some(1));
        assert!(state.is_in_flight());
    }

    #[test]
    fn begin_fetch_is_noop_while_in_flight() {
        let mut state = CatalogState::new();
        assert_eq!(state.begin_fetch(), Some(1));
        assert_eq!(state.begin_fetch(), None);
        assert_eq!(state.begin_fetch(), None);
    }

    #[test]
    fn success_appends_advances_and_clears_in_flight() {
        let mut state = CatalogState::new();
        state.begin_fetch();
        state.apply_success(batch(1, 10));

        assert_eq!(state.len(), 10);
        assert_eq!(state.page(), 2);
        assert!(!state.is_in_flight());
        assert!(!state.is_exhausted());
    }

    #[test]
    fn empty_batch_exhausts_permanently() {
        let mut state = CatalogState::new();
        state.begin_fetch();
        state.apply_success(Vec::new());

        assert!(state.is_exhausted());
        assert_eq!(state.begin_fetch(), None);
        // Exhaustion is never reset, no matter how often a fetch is asked for.
        assert_eq!(state.begin_fetch(), None);
    }

    #[test]
    fn failure_keeps_cursor_for_retry_on_next_trigger() {
        let mut state = CatalogState::new();
        assert_eq!(state.begin_fetch(), Some(1));
        state.apply_failure();

        assert!(!state.is_in_flight());
        assert!(!state.is_exhausted());
        assert!(state.is_empty());
        // Next trigger re-requests the same page.
        assert_eq!(state.begin_fetch(), Some(1));
    }

    #[test]
    fn products_accumulate_in_fetch_order() {
        let mut state = CatalogState::new();
        state.begin_fetch();
        state.apply_success(batch(1, 3));
        state.begin_fetch();
        state.apply_success(batch(4, 3));

        let ids: Vec<u64> = state.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn duplicate_products_are_kept_as_returned() {
        let mut state = CatalogState::new();
        state.begin_fetch();
        state.apply_success(batch(1, 2));
        state.begin_fetch();
        state.apply_success(batch(1, 2));

        // Overlapping pages are not deduplicated.
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn detail_url_joins_base_and_handle() {
        let p = product(7);
        assert_eq!(
            p.detail_url("https://summersalt.com"),
            "https://summersalt.com/products/product-7"
        );
        assert_eq!(
            p.detail_url("https://summersalt.com/"),
            "https://summersalt.com/products/product-7"
        );
    }

    #[test]
    fn primary_image_is_first_or_none() {
        let p = product(1);
        assert_eq!(p.primary_image(), Some("https://cdn.example.com/1.jpg"));

        let bare = Product {
            id: 2,
            title: "Bare".to_string(),
            handle: "bare".to_string(),
            images: Vec::new(),
        };
        assert_eq!(bare.primary_image(), None);
    }
}
