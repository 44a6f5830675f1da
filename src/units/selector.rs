use crate::units::error::UnitError;
use crate::units::registry;
use crate::units::types::{UnitCategory, UnitEntry};
use std::fmt;
use tracing::trace;

/// Notification sent to selector observers after the active unit changes
#[derive(Debug, Clone, PartialEq)]
pub struct UnitChange {
    pub category: UnitCategory,
    pub previous: usize,
    pub current: usize,
    pub symbol: &'static str,
}

type Observer = Box<dyn FnMut(&UnitChange)>;

/// Tracks which unit of one category a value is expressed in
pub struct UnitSelector {
    category: UnitCategory,
    index: usize,
    observers: Vec<Observer>,
}

impl UnitSelector {
    /// Bind a selector to `category`, starting at the SI unit
    pub fn new(category: UnitCategory) -> Self {
        Self {
            category,
            index: 0,
            observers: Vec::new(),
        }
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn entries(&self) -> &'static [UnitEntry] {
        registry::entries(self.category)
    }

    pub fn entry(&self) -> &'static UnitEntry {
        &self.entries()[self.index]
    }

    /// Symbol of the active unit, as a unit picker would display it
    pub fn symbol(&self) -> &'static str {
        self.entry().symbol
    }

    /// Check that `index` could be selected, without selecting it
    pub fn validate_index(&self, index: usize) -> Result<(), UnitError> {
        registry::entry(self.category, index).map(|_| ())
    }

    pub fn set_index(&mut self, index: usize) -> Result<(), UnitError> {
        self.validate_index(index)?;
        if index == self.index {
            return Ok(());
        }

        let previous = self.index;
        self.index = index;
        trace!(
            category = %self.category,
            previous,
            current = index,
            "unit selection changed"
        );

        let change = UnitChange {
            category: self.category,
            previous,
            current: index,
            symbol: self.symbol(),
        };
        for observer in self.observers.iter_mut() {
            observer(&change);
        }
        Ok(())
    }

    /// Select the unit named `symbol` (display symbol, alias or long name)
    pub fn select_symbol(&mut self, symbol: &str) -> Result<(), UnitError> {
        let index =
            registry::find_unit(self.category, symbol).ok_or_else(|| UnitError::UnknownUnit {
                category: self.category,
                symbol: symbol.to_string(),
            })?;
        self.set_index(index)
    }

    /// Return to the SI unit
    pub fn reset(&mut self) {
        // index 0 exists in every category
        let _ = self.set_index(0);
    }

    /// Register a callback invoked after every index change
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&UnitChange) + 'static,
    {
        self.observers.push(Box::new(callback));
    }

    /// Convert a value expressed in the active unit into SI
    pub fn to_si(&self, value: f64) -> f64 {
        self.entry().to_si(value)
    }

    /// Convert an SI value into the active unit
    pub fn from_si(&self, value: f64) -> f64 {
        self.entry().from_si(value)
    }
}

impl fmt::Debug for UnitSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitSelector")
            .field("category", &self.category)
            .field("index", &self.index)
            .field("symbol", &self.symbol())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_selector_starts_at_si() {
        let selector = UnitSelector::new(UnitCategory::Pressure);
        assert_eq!(selector.current_index(), 0);
        assert_eq!(selector.symbol(), "Pa");
        assert_eq!(selector.to_si(12.5), 12.5);
    }

    #[test]
    fn test_set_index_bounds_for_every_category() {
        for category in UnitCategory::ALL {
            let mut selector = UnitSelector::new(category);
            let len = selector.len();
            for i in 0..len {
                selector.set_index(i).unwrap();
                assert_eq!(selector.current_index(), i);
            }
            let err = selector.set_index(len).unwrap_err();
            assert_eq!(
                err,
                UnitError::InvalidUnitIndex {
                    category,
                    index: len,
                    len
                }
            );
            // failed selection keeps the previous index
            assert_eq!(selector.current_index(), len - 1);
        }
    }

    #[test]
    fn test_to_si_uses_active_unit() {
        let mut selector = UnitSelector::new(UnitCategory::Temperature);
        selector.select_symbol("°C").unwrap();
        assert_relative_eq!(selector.to_si(0.0), 273.15);
        assert_relative_eq!(selector.from_si(273.15), 0.0);
    }

    #[test]
    fn test_select_unknown_symbol() {
        let mut selector = UnitSelector::new(UnitCategory::Length);
        let err = selector.select_symbol("kg").unwrap_err();
        assert!(matches!(err, UnitError::UnknownUnit { .. }));
        assert_eq!(selector.current_index(), 0);
    }

    #[test]
    fn test_observers_see_changes_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut selector = UnitSelector::new(UnitCategory::Length);

        let first = Rc::clone(&seen);
        selector.on_change(move |change| first.borrow_mut().push(("first", change.symbol)));
        let second = Rc::clone(&seen);
        selector.on_change(move |change| second.borrow_mut().push(("second", change.symbol)));

        selector.set_index(5).unwrap();
        // same index is not a change
        selector.set_index(5).unwrap();
        // rejected index is not a change
        assert!(selector.set_index(42).is_err());
        selector.reset();

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", "ft"),
                ("second", "ft"),
                ("first", "m"),
                ("second", "m"),
            ]
        );
    }
}
