//! Pairs an external value cell with the internal position cell that view
//! templates bind to.
//!
//! Both directions run through an equality short-circuit: an update that
//! resolves to the state already held on the other side is a no-op, which
//! breaks the feedback loop between the paired cells. Propagation is
//! synchronous; a write returns only after the other side and every bound
//! attribute derived from it are consistent.

use crate::error::{WidgetError, WidgetResult};
use crate::options::SelectOptions;
use quillbox_core::signal::state::StateSignal;
use quillbox_core::signal::{set_if_changed, BoxedSignal, MaybeSignal, Signal};

/// Which position a single-selection widget falls back to when no initial
/// value is supplied, or when a live option change drops the selected value.
///
/// Dropdown and radio buttons fall back to the first entry; toggle buttons
/// and tabs fall back to the median entry. The divergence is long-standing
/// widget behavior, kept per kind on purpose and centralized here so it stays
/// auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSelect {
    /// Position 1.
    First,
    /// The median position, biased toward the lower position for even counts.
    Median,
}

impl DefaultSelect {
    /// The fallback position (1-based) for a collection of `len` entries.
    pub fn position(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match self {
            DefaultSelect::First => 1,
            DefaultSelect::Median => len.div_ceil(2),
        })
    }
}

/// A single-selection pairing: the external cell holds exactly one value, the
/// internal cell holds its 1-based position.
///
/// Clones share both cells; the bridge is a handle, not a copy.
pub struct SingleSelect<T: Clone + PartialEq + 'static> {
    options: SelectOptions<T>,
    value: BoxedSignal<T>,
    index: StateSignal<usize>,
    fallback: DefaultSelect,
}

impl<T: Clone + PartialEq + 'static> SingleSelect<T> {
    /// Construct the pairing and wire both directions.
    ///
    /// With no initial value the `fallback` policy picks the position. An
    /// initial value that is not among the options fails with
    /// [WidgetError::InvalidDefault]; an empty collection fails with
    /// [WidgetError::EmptyOptions]. A plain initial value is wrapped in a
    /// fresh cell; a signal is reused directly so external mutation stays
    /// observable.
    pub fn new(
        options: SelectOptions<T>,
        initial: Option<MaybeSignal<T>>,
        fallback: DefaultSelect,
    ) -> WidgetResult<Self> {
        let position = match &initial {
            Some(value) => options.position_of(&value.get()).ok_or_else(|| {
                WidgetError::invalid_default("initial value is not among the options")
            })?,
            None => fallback.position(options.len()).ok_or(WidgetError::EmptyOptions)?,
        };

        let value: BoxedSignal<T> = match initial {
            Some(initial) => initial.into_cell(),
            None => {
                let seed = options.value_at(position).ok_or(WidgetError::EmptyOptions)?;
                Box::new(StateSignal::new(seed))
            }
        };

        let bridge = Self {
            options,
            value,
            index: StateSignal::new(position),
            fallback,
        };
        bridge.wire();
        Ok(bridge)
    }

    fn wire(&self) {
        // position -> value
        {
            let options = self.options.clone();
            let value = self.value.dyn_clone();
            self.index.listen(Box::new(move |position| {
                if let Some(resolved) = options.value_at(*position) {
                    set_if_changed(&*value, resolved);
                }
            }));
        }

        // value -> position
        {
            let options = self.options.clone();
            let index = self.index.clone();
            self.value.listen(Box::new(move |incoming| {
                // Already consistent: the held position resolves to this
                // value, so the logical position did not move.
                if options.value_at(*index.get()).as_ref() == Some(&*incoming) {
                    return;
                }
                match options.position_of(&incoming) {
                    Some(position) => {
                        if *index.get() != position {
                            index.set(position);
                        }
                    }
                    None => log::trace!("value not among options, keeping current position"),
                }
            }));
        }

        // A live option collection re-derives the mapping on every change.
        if self.options.is_reactive() {
            let options = self.options.clone();
            let index = self.index.clone();
            let value = self.value.dyn_clone();
            let fallback = self.fallback;
            self.options.listen(Box::new(move |_| {
                let held = value.get().into_owned();
                match options.position_of(&held) {
                    Some(position) => {
                        if *index.get() != position {
                            index.set(position);
                        }
                    }
                    None => {
                        // The selected value vanished: reset to the fallback
                        // policy instead of failing.
                        if let Some(position) = fallback.position(options.len()) {
                            log::debug!(
                                "selection no longer among options, resetting to position {position}"
                            );
                            index.set(position);
                        }
                    }
                }
            }));
        }
    }

    /// The option collection the mapping is derived from.
    pub fn options(&self) -> &SelectOptions<T> {
        &self.options
    }

    /// The external value cell, the widget's primary output.
    pub fn value(&self) -> BoxedSignal<T> {
        self.value.dyn_clone()
    }

    /// The current value.
    pub fn current(&self) -> T {
        self.value.get().into_owned()
    }

    /// The internal position cell (1-based) view templates bind to.
    pub fn index(&self) -> &StateSignal<usize> {
        &self.index
    }

    /// The current position (1-based).
    pub fn position(&self) -> usize {
        *self.index.get()
    }

    /// The position holding `value`.
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.options.position_of(value)
    }

    /// The value at `position` (1-based).
    pub fn value_at(&self, position: usize) -> Option<T> {
        self.options.value_at(position)
    }

    /// Select `position` (1-based), as the engine does when an entry is
    /// activated. Re-selecting the current position and positions outside the
    /// collection are no-ops.
    pub fn select(&self, position: usize) {
        if position == self.position() || self.options.value_at(position).is_none() {
            return;
        }
        log::trace!("select position {position}");
        self.index.set(position);
    }
}

impl<T: Clone + PartialEq + 'static> Clone for SingleSelect<T> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            value: self.value.dyn_clone(),
            index: self.index.clone(),
            fallback: self.fallback,
        }
    }
}

impl<T: Clone + PartialEq + 'static> std::fmt::Debug for SingleSelect<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleSelect")
            .field("options", &self.options)
            .field("position", &self.position())
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// A multi-selection pairing: the external cell holds a sequence of values,
/// the internal cell mirrors it as ascending 1-based positions (collection
/// order, not the order entries were clicked in).
pub struct MultiSelect<T: Clone + PartialEq + 'static> {
    options: SelectOptions<T>,
    values: BoxedSignal<Vec<T>>,
    indices: StateSignal<Vec<usize>>,
}

impl<T: Clone + PartialEq + 'static> MultiSelect<T> {
    /// Construct the pairing and wire both directions.
    ///
    /// An empty collection and an empty initial selection are both fine.
    /// Initial values that are not among the options are dropped by the
    /// lookup (with a debug log), not treated as errors.
    pub fn new(options: SelectOptions<T>, initial: Option<MaybeSignal<Vec<T>>>) -> Self {
        let mut positions = Vec::new();
        if let Some(initial) = &initial {
            for value in initial.get().iter() {
                match options.position_of(value) {
                    Some(position) => positions.push(position),
                    None => log::debug!("initial value not among options, dropped"),
                }
            }
        }
        positions.sort_unstable();
        positions.dedup();

        let values: BoxedSignal<Vec<T>> = match initial {
            Some(initial) => initial.into_cell(),
            None => Box::new(StateSignal::new(Vec::new())),
        };

        let bridge = Self {
            options,
            values,
            indices: StateSignal::new(positions),
        };
        bridge.wire();
        // Normalize the external side into collection order.
        set_if_changed(&*bridge.values, bridge.current());
        bridge
    }

    fn wire(&self) {
        // positions -> values
        {
            let options = self.options.clone();
            let values = self.values.dyn_clone();
            self.indices.listen(Box::new(move |positions| {
                let resolved: Vec<T> = positions
                    .iter()
                    .filter_map(|&position| options.value_at(position))
                    .collect();
                set_if_changed(&*values, resolved);
            }));
        }

        // values -> positions
        {
            let options = self.options.clone();
            let indices = self.indices.clone();
            self.values.listen(Box::new(move |incoming| {
                // Already consistent: the held positions resolve to exactly
                // this sequence.
                let current: Vec<T> = indices
                    .get()
                    .iter()
                    .filter_map(|&position| options.value_at(position))
                    .collect();
                if current == *incoming {
                    return;
                }
                let mut positions: Vec<usize> = incoming
                    .iter()
                    .filter_map(|value| options.position_of(value))
                    .collect();
                positions.sort_unstable();
                positions.dedup();
                if *indices.get() != positions {
                    indices.set(positions);
                }
            }));
        }

        // A live option collection drops vanished selections and remaps the
        // rest, keeping collection order.
        if self.options.is_reactive() {
            let options = self.options.clone();
            let indices = self.indices.clone();
            let values = self.values.dyn_clone();
            self.options.listen(Box::new(move |_| {
                let held = values.get().into_owned();
                let mut positions: Vec<usize> = held
                    .iter()
                    .filter_map(|value| options.position_of(value))
                    .collect();
                positions.sort_unstable();
                positions.dedup();
                if *indices.get() != positions {
                    log::debug!("options changed, remapping selection");
                    indices.set(positions);
                }
            }));
        }
    }

    /// Toggle membership of `position` (1-based): inserted in ascending
    /// position order when absent, removed when present. Remaining positions
    /// keep their relative order. Positions outside the collection are
    /// ignored.
    pub fn toggle(&self, position: usize) {
        if self.options.value_at(position).is_none() {
            return;
        }
        log::trace!("toggle position {position}");
        self.indices.mutate(|positions| {
            match positions.binary_search(&position) {
                Ok(found) => {
                    positions.remove(found);
                }
                Err(slot) => positions.insert(slot, position),
            }
        });
    }

    /// Replace the whole selection, as a multi-select control reports it.
    /// Unknown positions are dropped; order is normalized to collection
    /// order.
    pub fn select(&self, positions: &[usize]) {
        let mut normalized: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&position| self.options.value_at(position).is_some())
            .collect();
        normalized.sort_unstable();
        normalized.dedup();
        let unchanged = *self.indices.get() == normalized;
        if !unchanged {
            self.indices.set(normalized);
        }
    }

    /// Whether `position` is currently selected.
    pub fn is_selected(&self, position: usize) -> bool {
        self.indices.get().contains(&position)
    }

    /// The option collection the mapping is derived from.
    pub fn options(&self) -> &SelectOptions<T> {
        &self.options
    }

    /// The external value cell, the widget's primary output.
    pub fn values(&self) -> BoxedSignal<Vec<T>> {
        self.values.dyn_clone()
    }

    /// The currently selected values, in collection order.
    pub fn current(&self) -> Vec<T> {
        self.indices
            .get()
            .iter()
            .filter_map(|&position| self.options.value_at(position))
            .collect()
    }

    /// The internal position cell (ascending, 1-based) view templates bind
    /// to.
    pub fn indices(&self) -> &StateSignal<Vec<usize>> {
        &self.indices
    }
}

impl<T: Clone + PartialEq + 'static> Clone for MultiSelect<T> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            values: self.values.dyn_clone(),
            indices: self.indices.clone(),
        }
    }
}
