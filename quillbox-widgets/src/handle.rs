//! The handle returned by widget builders.

use quillbox_core::signal::{BoxedSignal, Signal};
use quillbox_core::view::{Node, RenderBackend};

/// Owns a widget's rendered view and its external value cell.
///
/// The value cell is the widget's primary output: it reflects user
/// interaction delivered by the engine, and programmatic writes to it
/// propagate back into the view's bound attributes. The view lives for the
/// lifetime of the hosting document cell and is torn down with it.
pub struct WidgetHandle<V: 'static> {
    view: Node,
    value: BoxedSignal<V>,
}

impl<V: 'static> WidgetHandle<V> {
    pub(crate) fn new(view: Node, value: BoxedSignal<V>) -> Self {
        Self { view, value }
    }

    /// The rendered view, for embedding in larger layouts.
    pub fn view(&self) -> &Node {
        &self.view
    }

    /// The external value cell.
    pub fn value(&self) -> BoxedSignal<V> {
        self.value.dyn_clone()
    }

    /// The current value.
    pub fn get(&self) -> V
    where
        V: Clone,
    {
        self.value.get().into_owned()
    }

    /// Mount the view on a host templating engine.
    pub fn attach<B: RenderBackend>(&self, backend: &mut B) -> Result<(), B::Error> {
        backend.mount(&self.view)
    }
}

impl<V: 'static> std::fmt::Debug for WidgetHandle<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetHandle")
            .field("view", &self.view)
            .finish()
    }
}
