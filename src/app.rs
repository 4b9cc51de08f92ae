use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::catalog::{CatalogClient, CatalogState, FetchOutcome, ProductSource};
use crate::cli::Cli;
use crate::events::{EventHandler, EventResult};
use crate::theme::Theme;
use crate::ui::UI;

pub struct App {
    should_quit: bool,
    ui: UI,
    event_handler: EventHandler,
    catalog: CatalogState,
    source: Arc<dyn ProductSource>,
    site_base: String,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        let theme = if cli.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::professional_dark()
        };
        let client = CatalogClient::new(cli.base_url.clone(), cli.collection.clone());
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            ui: UI::new(theme),
            event_handler: EventHandler::new(),
            catalog: CatalogState::new(),
            source: Arc::new(client),
            site_base: cli.base_url.clone(),
            outcome_tx,
            outcome_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "shopscroll requires a proper terminal (TTY) to run. Please run this application in a terminal emulator."
            ));
        }

        // Setup terminal
        enable_raw_mode()
            .map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)
            .map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        // Run the main loop
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal on every exit path
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(50);

        // One automatic fetch at startup, before any interaction.
        self.dispatch_fetch();

        loop {
            // Apply any resolved fetches before drawing.
            while let Ok(outcome) = self.outcome_rx.try_recv() {
                self.catalog.apply_outcome(outcome);
            }

            // Draw UI
            terminal.draw(|f| self.ui.render(f, &self.catalog))?;

            // Handle events
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    let event_result = self.event_handler.handle_key_event(key, &mut self.ui);

                    match event_result {
                        EventResult::Continue => {}
                        EventResult::OpenProduct(index) => self.open_product(index),
                    }

                    // A key event is the scroll signal: fetch the next page
                    // once the selection nears the end of the loaded list.
                    if self.ui.product_list().is_near_bottom() {
                        self.dispatch_fetch();
                    }

                    if self.event_handler.should_quit() {
                        self.should_quit = true;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }

            if self.should_quit {
                break;
            }
        }

        // Close the outcome channel so a still-outstanding fetch cannot
        // queue a result after shutdown.
        self.outcome_rx.close();

        Ok(())
    }

    /// Start a background fetch for the next page, unless one is already
    /// outstanding or the catalog is exhausted.
    fn dispatch_fetch(&mut self) {
        let Some(page) = self.catalog.begin_fetch() else {
            return;
        };

        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = match source.fetch_page(page).await {
                Ok(items) => FetchOutcome::Success(items),
                Err(err) => FetchOutcome::Failure(err),
            };
            // The channel is closed when the run loop exits; a late
            // response's send fails and the outcome is dropped, so state
            // is never touched after shutdown.
            let _ = tx.send(outcome);
        });
    }

    /// Open the selected product's detail page in the system browser.
    fn open_product(&self, index: usize) {
        let Some(product) = self.catalog.product(index) else {
            return;
        };
        let url = product.detail_url(&self.site_base);
        tracing::info!(%url, "opening product page");
        if let Err(e) = webbrowser::open(&url) {
            tracing::error!(%url, error = %e, "failed to open browser");
        }
    }
}
