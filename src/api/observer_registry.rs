use tracing::debug;

use crate::error::{NavError, NavResult};
use crate::extensions::{NavEvent, NavObserver};

use super::ChartNavigator;

impl ChartNavigator {
    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn NavObserver>) -> NavResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(NavError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(NavError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        debug!(id = %observer_id, "observer registered");
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    pub(super) fn emit(&mut self, event: NavEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
