//! Versioned input cells and memoized derived values.
//!
//! Pull model: every [`Signal`] carries a version bumped on each real change. A [`Memo`] caches
//! its value together with the input versions it was computed from and recomputes on read when
//! any of them moved. All of this is single-threaded; memos use `Cell`/`RefCell` so reads only
//! need `&self`.

use crate::reset::Resettable;
use std::cell::RefCell;

/// Monotonic change counter for a [`Signal`].
pub type Version = u64;

#[derive(Debug, Clone)]
pub struct Signal<T: Clone + PartialEq> {
    value: T,
    initial: T,
    version: Version,
}

impl<T: Clone + PartialEq> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            initial: value.clone(),
            value,
            version: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Stores `value`. Returns false (and keeps the version) when it equals the current value.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version = self.version.wrapping_add(1);
        true
    }
}

impl<T: Clone + PartialEq> Resettable for Signal<T> {
    fn reset(&mut self) {
        let initial = self.initial.clone();
        self.set(initial);
    }
}

/// A derived value cached against the versions of its inputs.
///
/// `N` is the number of inputs. Callers pass the current versions on every read; the compute
/// closure only runs when they differ from the cached ones.
#[derive(Debug)]
pub struct Memo<T: Clone, const N: usize> {
    cache: RefCell<Option<([Version; N], T)>>,
}

impl<T: Clone, const N: usize> Default for Memo<T, N> {
    fn default() -> Self {
        Self {
            cache: RefCell::new(None),
        }
    }
}

impl<T: Clone, const N: usize> Clone for Memo<T, N> {
    fn clone(&self) -> Self {
        Self {
            cache: RefCell::new(self.cache.borrow().clone()),
        }
    }
}

impl<T: Clone, const N: usize> Memo<T, N> {
    pub fn get(&self, versions: [Version; N], compute: impl FnOnce() -> T) -> T {
        if let Some((cached, value)) = self.cache.borrow().as_ref() {
            if *cached == versions {
                return value.clone();
            }
        }
        let value = compute();
        *self.cache.borrow_mut() = Some((versions, value.clone()));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_bumps_version_only_on_change() {
        let mut signal = Signal::new(1.0);
        assert_eq!(signal.version(), 0);

        assert!(!signal.set(1.0));
        assert_eq!(signal.version(), 0);

        assert!(signal.set(2.0));
        assert_eq!(*signal.get(), 2.0);
        assert_eq!(signal.version(), 1);
    }

    #[test]
    fn reset_restores_initial_value_and_bumps_version() {
        let mut signal = Signal::new(0u32);
        signal.set(5);
        signal.reset();
        assert_eq!(*signal.get(), 0);
        assert_eq!(signal.version(), 2);
    }

    #[test]
    fn memo_recomputes_only_when_inputs_move() {
        let runs = Cell::new(0);
        let memo: Memo<u32, 2> = Memo::default();
        let mut a = Signal::new(2u32);
        let b = Signal::new(3u32);

        let read = |a: &Signal<u32>, b: &Signal<u32>| {
            memo.get([a.version(), b.version()], || {
                runs.set(runs.get() + 1);
                a.get() * b.get()
            })
        };

        assert_eq!(read(&a, &b), 6);
        assert_eq!(read(&a, &b), 6);
        assert_eq!(runs.get(), 1);

        a.set(4);
        assert_eq!(read(&a, &b), 12);
        assert_eq!(runs.get(), 2);

        // Setting an equal value keeps the cache.
        a.set(4);
        assert_eq!(read(&a, &b), 12);
        assert_eq!(runs.get(), 2);
    }
}
