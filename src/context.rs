//! Application Context
//!
//! Shared tracker and view store provided via Leptos Context API.

use calorie_core::{KeyValueStore, Selectors, Tracker, TrackerError, TrackerResult};
use leptos::prelude::*;

use crate::store::{store_set_status, ViewStore};
use crate::view::LeptosView;

pub type PageTracker = Tracker<Box<dyn KeyValueStore>, LeptosView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The page's tracker, owned by the reactive arena
    tracker: StoredValue<PageTracker, LocalStorage>,
    /// Rendered state
    pub store: ViewStore,
}

impl AppContext {
    pub fn new(tracker: PageTracker, store: ViewStore) -> Self {
        Self {
            tracker: StoredValue::new_local(tracker),
            store,
        }
    }

    /// Rehydrate the list from durable storage
    pub fn load(&self) {
        if let Some(result) = self.tracker.try_update_value(|tracker| tracker.on_page_load()) {
            self.report(result);
        }
    }

    /// Add an item from the current form values
    pub fn submit(&self) {
        if let Some(result) = self.tracker.try_update_value(|tracker| tracker.on_add_submit()) {
            self.report(result);
        }
    }

    /// DOM lookup keys for the page markup
    pub fn selectors(&self) -> Selectors {
        self.tracker
            .try_with_value(|tracker| tracker.selectors())
            .unwrap_or_default()
    }

    fn report<T>(&self, result: TrackerResult<T>) {
        match &result {
            Ok(_) => {}
            Err(TrackerError::EmptyField(field)) => {
                log::debug!("ignored submit with empty {}", field);
            }
            Err(err) => log::error!("{}", err),
        }
        store_set_status(&self.store, status_line(&result));
    }
}

/// Message for the status line; empty-field submits clear it like successes
fn status_line<T>(result: &TrackerResult<T>) -> Option<String> {
    match result {
        Ok(_) | Err(TrackerError::EmptyField(_)) => None,
        Err(err) => Some(err.to_string()),
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::Field;

    #[test]
    fn test_status_line_shows_errors() {
        let result: TrackerResult<()> = Err(TrackerError::InvalidNumber("abc".to_string()));
        assert_eq!(status_line(&result), Some("Invalid number: \"abc\"".to_string()));
    }

    #[test]
    fn test_empty_submit_clears_stale_error() {
        let result: TrackerResult<()> = Err(TrackerError::EmptyField(Field::Calories));
        assert_eq!(status_line(&result), None);
        assert_eq!(status_line(&Ok::<(), TrackerError>(())), None);
    }
}
