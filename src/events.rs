use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::UI;

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    Continue,
    OpenProduct(usize), // Index of the product to open in the browser
}

pub struct EventHandler {
    should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a key event against the current UI state.
    pub fn handle_key_event(&mut self, key: KeyEvent, ui: &mut UI) -> EventResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                EventResult::Continue
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                EventResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                ui.product_list_mut().select_next();
                EventResult::Continue
            }
            KeyCode::Up | KeyCode::Char('k') => {
                ui.product_list_mut().select_previous();
                EventResult::Continue
            }
            KeyCode::PageDown => {
                let jump = ui.page_jump();
                ui.product_list_mut().select_page_down(jump);
                EventResult::Continue
            }
            KeyCode::PageUp => {
                let jump = ui.page_jump();
                ui.product_list_mut().select_page_up(jump);
                EventResult::Continue
            }
            KeyCode::Home | KeyCode::Char('g') => {
                ui.product_list_mut().select_first();
                EventResult::Continue
            }
            KeyCode::End | KeyCode::Char('G') => {
                ui.product_list_mut().select_last();
                EventResult::Continue
            }
            KeyCode::Enter => match ui.product_list().selected() {
                Some(index) => EventResult::OpenProduct(index),
                None => EventResult::Continue,
            },
            _ => EventResult::Continue,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
