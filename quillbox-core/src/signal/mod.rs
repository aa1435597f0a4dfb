//! Reactive value primitives.
//!
//! A [Signal] holds a current value, notifies listeners when it changes and
//! can be stored behind [BoxedSignal]. Propagation is synchronous and
//! depth-first: a write completes its entire downstream notification before
//! control returns to the writer. All signals are single-threaded.

pub use crate::reference::Ref;

/// Contains the [state::StateSignal].
pub mod state;

/// Contains the [fixed::FixedSignal].
pub mod fixed;

/// Contains the [derived::DerivedSignal].
pub mod derived;

use fixed::FixedSignal;
use state::StateSignal;

/// A listener invoked with the signal's current value after each change.
pub type Listener<T> = Box<dyn Fn(Ref<T>)>;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// The base trait for reactive values.
pub trait Signal<T: 'static> {
    /// Get the current value.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the current value and notify listeners.
    fn set_value(&self, value: T);

    /// Register a listener invoked on every change.
    fn listen(&self, listener: Listener<T>);

    /// Notify all listeners with the current value.
    fn notify(&self);

    /// Clone this signal into a box, sharing the underlying value.
    fn dyn_clone(&self) -> BoxedSignal<T>;

    /// Replace the current value and notify listeners.
    ///
    /// Alias for [Signal::set_value].
    fn set(&self, value: T) {
        self.set_value(value);
    }
}

/// Write `value` into `signal` only if it differs from the current value.
///
/// Returns `true` if a write happened. Two-way bindings use this as their
/// cycle breaker: an update that resolves to the value already held on the
/// other side becomes a no-op instead of bouncing back.
pub fn set_if_changed<T>(signal: &dyn Signal<T>, value: T) -> bool
where
    T: PartialEq + 'static,
{
    let unchanged = *signal.get() == value;
    if unchanged {
        return false;
    }
    signal.set(value);
    true
}

/// A value that is either fixed or backed by a live signal.
///
/// Constructors accept `impl Into<MaybeSignal<T>>` so callers can pass plain
/// values or signals interchangeably.
pub enum MaybeSignal<T: 'static> {
    /// A fixed value.
    Fixed(FixedSignal<T>),
    /// A live signal.
    Signal(BoxedSignal<T>),
}

impl<T: 'static> MaybeSignal<T> {
    /// Create from a plain value.
    pub fn value(value: T) -> Self {
        Self::Fixed(FixedSignal::new(value))
    }

    /// Create from a signal, sharing its underlying cell.
    pub fn signal(signal: impl Signal<T> + 'static) -> Self {
        Self::Signal(Box::new(signal))
    }

    /// Get the current value.
    pub fn get(&self) -> Ref<'_, T> {
        match self {
            Self::Fixed(fixed) => fixed.get(),
            Self::Signal(signal) => signal.get(),
        }
    }

    /// Whether this wraps a live signal that may change after construction.
    pub fn is_reactive(&self) -> bool {
        matches!(self, Self::Signal(_))
    }

    /// Register a listener. Listeners on fixed values never fire.
    pub fn listen(&self, listener: Listener<T>) {
        match self {
            Self::Fixed(_) => {}
            Self::Signal(signal) => signal.listen(listener),
        }
    }

    /// Turn into a mutable cell.
    ///
    /// A fixed value becomes a fresh [StateSignal] seeded with it; a live
    /// signal is reused directly so external mutation stays observable.
    pub fn into_cell(self) -> BoxedSignal<T>
    where
        T: Clone,
    {
        match self {
            Self::Fixed(fixed) => Box::new(StateSignal::new(fixed.get().into_owned())),
            Self::Signal(signal) => signal,
        }
    }
}

impl<T: 'static> Clone for MaybeSignal<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(fixed) => Self::Fixed(fixed.clone()),
            Self::Signal(signal) => Self::Signal(signal.dyn_clone()),
        }
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        Self::value(value)
    }
}

impl<T: 'static> From<BoxedSignal<T>> for MaybeSignal<T> {
    fn from(signal: BoxedSignal<T>) -> Self {
        Self::Signal(signal)
    }
}

impl<T: Clone + 'static> From<StateSignal<T>> for MaybeSignal<T> {
    fn from(signal: StateSignal<T>) -> Self {
        Self::Signal(Box::new(signal))
    }
}

impl From<&str> for MaybeSignal<String> {
    fn from(value: &str) -> Self {
        Self::value(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_if_changed_short_circuits() {
        let signal = StateSignal::new(3usize);
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));

        let counter = hits.clone();
        signal.listen(Box::new(move |_| counter.set(counter.get() + 1)));

        assert!(!set_if_changed(&signal, 3));
        assert_eq!(hits.get(), 0);

        assert!(set_if_changed(&signal, 4));
        assert_eq!(hits.get(), 1);
        assert_eq!(*signal.get(), 4);
    }

    #[test]
    fn test_maybe_signal_into_cell_reuses_signals() {
        let shared = StateSignal::new(7);
        let maybe: MaybeSignal<i32> = shared.clone().into();
        let cell = maybe.into_cell();

        shared.set(8);
        assert_eq!(*cell.get(), 8);

        let plain: MaybeSignal<i32> = 7.into();
        assert!(!plain.is_reactive());
        let cell = plain.into_cell();
        cell.set(9);
        assert_eq!(*cell.get(), 9);
    }
}
