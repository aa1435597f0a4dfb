use crate::reference::Ref;
use crate::signal::{BoxedSignal, Listener, Signal};
use std::rc::Rc;

/// A signal that derives its value from another signal using a computation
/// function.
///
/// The computation runs on every access, so the derived value always reflects
/// the current source. Writes and listeners are no-ops; mutate or listen to
/// the source instead.
pub struct DerivedSignal<T: 'static, U: 'static> {
    source: BoxedSignal<T>,
    compute: Rc<dyn Fn(Ref<T>) -> U>,
}

impl<T: 'static, U: 'static> DerivedSignal<T, U> {
    /// Create a new derived signal using the given source signal and
    /// computation function.
    pub fn new(source: BoxedSignal<T>, compute: impl Fn(Ref<T>) -> U + 'static) -> Self {
        Self {
            source,
            compute: Rc::new(compute),
        }
    }

    /// Get the source signal.
    ///
    /// Can be used to mutate the source value.
    pub fn source(&self) -> BoxedSignal<T> {
        self.source.dyn_clone()
    }

    /// Get the source signal's value, without applying the computation.
    pub fn get_source(&self) -> Ref<'_, T> {
        self.source.get()
    }
}

impl<T: 'static, U: 'static> Signal<U> for DerivedSignal<T, U> {
    fn get(&self) -> Ref<'_, U> {
        Ref::Owned((self.compute)(self.source.get()))
    }

    fn set_value(&self, _: U) {
        // Derived signals are read-only.
    }

    fn listen(&self, _: Listener<U>) {
        // Listeners belong on the source signal.
    }

    fn notify(&self) {
        self.source.notify();
    }

    fn dyn_clone(&self) -> BoxedSignal<U> {
        Box::new(self.clone())
    }
}

impl<T: 'static, U: 'static> Clone for DerivedSignal<T, U> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.dyn_clone(),
            compute: self.compute.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::state::StateSignal;

    #[test]
    fn test_derived_tracks_source() {
        let counter = StateSignal::new(5);
        let doubled = DerivedSignal::new(counter.dyn_clone(), |value| *value * 2);

        assert_eq!(*doubled.get(), 10);
        counter.set(6);
        assert_eq!(*doubled.get(), 12);
    }
}
