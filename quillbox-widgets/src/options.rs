//! Ordered label/value collections backing selectable widgets.

use indexmap::IndexMap;
use quillbox_core::signal::{Listener, MaybeSignal, Signal};
use quillbox_core::view::Node;
use std::fmt::Display;
use std::rc::Rc;

/// Per-option view override: maps a 1-based position and its entry to a
/// custom node, replacing the default label rendering.
pub type OptionRenderer<T> = Rc<dyn Fn(usize, &SelectOption<T>) -> Node>;

/// One selectable entry: a display label and the value it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<T> {
    label: String,
    value: T,
}

impl<T> SelectOption<T> {
    /// Create an entry.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The value this entry stands for.
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// An ordered collection of label/value entries.
///
/// Entry order is stable and defines the position protocol: positions are
/// 1-based, position 1 is the first entry. Labels are not deduplicated; when
/// labels collide, positional lookups stay authoritative.
///
/// The backing sequence is either a snapshot or a live signal. A live
/// sequence may be mutated externally after construction, and anything
/// holding positional state must re-derive it on change (see
/// [SelectOptions::listen]).
pub struct SelectOptions<T: 'static> {
    entries: MaybeSignal<Vec<SelectOption<T>>>,
}

impl<T: Clone + 'static> SelectOptions<T> {
    /// Build from an ordered label→value mapping, used as-is.
    pub fn keyed<L: Into<String>>(pairs: impl IntoIterator<Item = (L, T)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(label, value)| SelectOption::new(label, value))
            .collect();
        Self {
            entries: MaybeSignal::value(entries),
        }
    }

    /// Build from a sequence of values, deriving labels with `to_string`.
    pub fn positional(values: impl IntoIterator<Item = T>) -> Self
    where
        T: Display,
    {
        Self::positional_with(values, |value| value.to_string())
    }

    /// Build from a sequence of values, deriving labels with `label_of`.
    pub fn positional_with(
        values: impl IntoIterator<Item = T>,
        label_of: impl Fn(&T) -> String,
    ) -> Self {
        let entries = values
            .into_iter()
            .map(|value| {
                let label = label_of(&value);
                SelectOption::new(label, value)
            })
            .collect();
        Self {
            entries: MaybeSignal::value(entries),
        }
    }

    /// Build over a live entry sequence.
    ///
    /// Widgets built over it re-derive their position mapping whenever the
    /// signal changes.
    pub fn reactive(entries: impl Signal<Vec<SelectOption<T>>> + 'static) -> Self {
        Self {
            entries: MaybeSignal::signal(entries),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.get().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the backing sequence may change after construction.
    pub fn is_reactive(&self) -> bool {
        self.entries.is_reactive()
    }

    /// The entry at `position` (1-based).
    pub fn get(&self, position: usize) -> Option<SelectOption<T>> {
        if position == 0 {
            return None;
        }
        self.entries.get().get(position - 1).cloned()
    }

    /// The value at `position` (1-based).
    pub fn value_at(&self, position: usize) -> Option<T> {
        self.get(position).map(|entry| entry.value)
    }

    /// The first position (1-based) whose entry holds `value`.
    pub fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.entries
            .get()
            .iter()
            .position(|entry| entry.value() == value)
            .map(|index| index + 1)
    }

    /// The labels in order.
    pub fn labels(&self) -> Vec<String> {
        self.entries
            .get()
            .iter()
            .map(|entry| entry.label().to_string())
            .collect()
    }

    /// A snapshot of the current entries.
    pub fn snapshot(&self) -> Vec<SelectOption<T>> {
        self.entries.get().clone()
    }

    /// Observe changes to a live backing sequence. Never fires for snapshots.
    pub fn listen(&self, listener: Listener<Vec<SelectOption<T>>>) {
        self.entries.listen(listener);
    }
}

impl<T: 'static> Clone for SelectOptions<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: 'static> std::fmt::Debug for SelectOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectOptions")
            .field("len", &self.entries.get().len())
            .field("reactive", &self.entries.is_reactive())
            .finish()
    }
}

impl<T: Clone + 'static> From<IndexMap<String, T>> for SelectOptions<T> {
    fn from(pairs: IndexMap<String, T>) -> Self {
        Self::keyed(pairs)
    }
}

impl<T: Clone + 'static> From<Vec<(String, T)>> for SelectOptions<T> {
    fn from(pairs: Vec<(String, T)>) -> Self {
        Self::keyed(pairs)
    }
}

impl<T: Clone + Display + 'static> From<Vec<T>> for SelectOptions<T> {
    fn from(values: Vec<T>) -> Self {
        Self::positional(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillbox_core::signal::state::StateSignal;

    #[test]
    fn test_positional_labels_match_stringification() {
        let values = vec![10, 20, 9001];
        let options = SelectOptions::positional(values.clone());

        assert_eq!(options.len(), values.len());
        for (index, value) in values.iter().enumerate() {
            assert_eq!(options.labels()[index], value.to_string());
            assert_eq!(options.value_at(index + 1), Some(*value));
        }
    }

    #[test]
    fn test_keyed_preserves_order_and_positions() {
        let options = SelectOptions::keyed([("good", 1), ("better", 2), ("amazing", 9001)]);

        assert_eq!(options.labels(), vec!["good", "better", "amazing"]);
        assert_eq!(options.position_of(&9001), Some(3));
        assert_eq!(options.value_at(1), Some(1));
        assert_eq!(options.value_at(0), None);
        assert_eq!(options.value_at(4), None);
    }

    #[test]
    fn test_colliding_labels_keep_positions() {
        let options = SelectOptions::keyed([("same", 1), ("same", 2)]);
        assert_eq!(options.len(), 2);
        assert_eq!(options.position_of(&2), Some(2));
    }

    #[test]
    fn test_empty_collection_is_accepted() {
        let options: SelectOptions<i32> = SelectOptions::keyed(Vec::<(String, i32)>::new());
        assert!(options.is_empty());
        assert_eq!(options.position_of(&1), None);
    }

    #[test]
    fn test_reactive_collection_reports_changes() {
        let cell = StateSignal::new(vec![SelectOption::new("a", 1)]);
        let options = SelectOptions::reactive(cell.clone());
        assert!(options.is_reactive());
        assert_eq!(options.len(), 1);

        cell.set(vec![SelectOption::new("a", 1), SelectOption::new("b", 2)]);
        assert_eq!(options.len(), 2);
        assert_eq!(options.position_of(&2), Some(2));
    }
}
