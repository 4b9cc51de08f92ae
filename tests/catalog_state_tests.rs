use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use shopscroll::catalog::{CatalogError, CatalogState, Product, ProductImage, ProductSource};

/// Scripted product source: hands out pre-programmed responses in order and
/// records every requested page number.
struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Vec<Product>, CatalogError>>>,
    requested_pages: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<Vec<Product>, CatalogError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requested_pages: Mutex::new(Vec::new()),
        }
    }

    fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductSource for ScriptedSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Product>, CatalogError> {
        self.requested_pages.lock().unwrap().push(page);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn batch(start: u64, count: u64) -> Vec<Product> {
    (start..start + count)
        .map(|id| Product {
            id,
            title: format!("Product {id}"),
            handle: format!("product-{id}"),
            images: vec![ProductImage {
                src: format!("https://cdn.example.com/{id}.jpg"),
            }],
        })
        .collect()
}

fn server_error() -> CatalogError {
    CatalogError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
}

/// One trigger cycle: start a fetch if the state permits, resolve it
/// against the source, and apply the outcome. Returns whether a request
/// was actually issued.
async fn trigger(state: &mut CatalogState, source: &ScriptedSource) -> bool {
    let Some(page) = state.begin_fetch() else {
        return false;
    };
    assert!(state.is_in_flight());
    match source.fetch_page(page).await {
        Ok(items) => state.apply_success(items),
        Err(_) => state.apply_failure(),
    }
    assert!(!state.is_in_flight());
    true
}

#[tokio::test]
async fn displayed_count_matches_sum_of_batches() {
    let source = ScriptedSource::new(vec![Ok(batch(1, 10)), Ok(batch(11, 7)), Ok(batch(18, 3))]);
    let mut state = CatalogState::new();

    for _ in 0..3 {
        assert!(trigger(&mut state, &source).await);
    }

    assert_eq!(state.len(), 20);
}

#[tokio::test]
async fn two_full_pages_then_empty_page_exhausts_catalog() {
    // Scenario: 10 items for page 1, 10 for page 2, 0 for page 3.
    let source = ScriptedSource::new(vec![Ok(batch(1, 10)), Ok(batch(11, 10)), Ok(Vec::new())]);
    let mut state = CatalogState::new();

    assert!(trigger(&mut state, &source).await);
    assert!(trigger(&mut state, &source).await);
    assert!(trigger(&mut state, &source).await);

    assert_eq!(state.len(), 20);
    assert!(state.is_exhausted());
    assert_eq!(source.requested_pages(), vec![1, 2, 3]);

    // Further scroll triggers issue no requests.
    assert!(!trigger(&mut state, &source).await);
    assert!(!trigger(&mut state, &source).await);
    assert_eq!(source.requested_pages(), vec![1, 2, 3]);
}

#[tokio::test]
async fn error_on_first_page_leaves_state_retryable() {
    // Scenario: the endpoint errors on page 1, then recovers.
    let source = ScriptedSource::new(vec![Err(server_error()), Ok(batch(1, 10))]);
    let mut state = CatalogState::new();

    assert!(trigger(&mut state, &source).await);
    assert!(state.is_empty());
    assert!(!state.is_exhausted());
    assert!(!state.is_in_flight());

    // A later trigger re-requests the same page.
    assert!(trigger(&mut state, &source).await);
    assert_eq!(source.requested_pages(), vec![1, 1]);
    assert_eq!(state.len(), 10);
}

#[tokio::test]
async fn initial_load_is_a_single_fetch() {
    // Scenario: one automatic fetch at startup, no interaction.
    let source = ScriptedSource::new(vec![Ok(batch(1, 10))]);
    let mut state = CatalogState::new();

    assert!(trigger(&mut state, &source).await);
    assert_eq!(source.requested_pages(), vec![1]);
}

#[tokio::test]
async fn triggers_while_a_fetch_is_outstanding_are_noops() {
    // Scenario: rapid repeated scroll-to-bottom while a fetch is in flight.
    let source = ScriptedSource::new(vec![Ok(batch(1, 10))]);
    let mut state = CatalogState::new();

    let page = state.begin_fetch().expect("first trigger starts a fetch");
    for _ in 0..5 {
        assert_eq!(state.begin_fetch(), None);
    }

    let items = source.fetch_page(page).await.unwrap();
    state.apply_success(items);

    assert_eq!(source.requested_pages(), vec![1]);
    assert_eq!(state.len(), 10);
}

#[tokio::test]
async fn pages_advance_only_on_success() {
    let source = ScriptedSource::new(vec![
        Ok(batch(1, 10)),
        Err(server_error()),
        Err(server_error()),
        Ok(batch(11, 10)),
    ]);
    let mut state = CatalogState::new();

    for _ in 0..4 {
        trigger(&mut state, &source).await;
    }

    // Page 2 is retried until it succeeds; the cursor never skips.
    assert_eq!(source.requested_pages(), vec![1, 2, 2, 2]);
    assert_eq!(state.page(), 3);
    assert_eq!(state.len(), 20);
}

#[tokio::test]
async fn short_page_does_not_exhaust_catalog() {
    // A page smaller than the requested limit is still a non-empty batch;
    // only a zero-item response ends the catalog.
    let source = ScriptedSource::new(vec![Ok(batch(1, 4)), Ok(Vec::new())]);
    let mut state = CatalogState::new();

    trigger(&mut state, &source).await;
    assert!(!state.is_exhausted());

    trigger(&mut state, &source).await;
    assert!(state.is_exhausted());
    assert_eq!(state.len(), 4);
}
