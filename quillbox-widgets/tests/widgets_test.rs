use quillbox_core::signal::state::StateSignal;
use quillbox_core::signal::Signal;
use quillbox_core::view::{Node, RenderBackend};
use quillbox_theme::theme::document::DocumentTheme;
use quillbox_widgets::checkboxes::{checkboxes, toggles};
use quillbox_widgets::dropdown::Dropdown;
use quillbox_widgets::error::WidgetError;
use quillbox_widgets::options::{SelectOption, SelectOptions};
use quillbox_widgets::radio_buttons::RadioButtons;
use quillbox_widgets::tabulator::Tabulator;
use quillbox_widgets::toggle_buttons::{tabs, ToggleButtons};
use std::cell::Cell;
use std::rc::Rc;

fn theme() -> DocumentTheme {
    DocumentTheme::new()
}

fn level_options() -> SelectOptions<i32> {
    SelectOptions::keyed([("good", 1), ("better", 2), ("amazing", 9001)])
}

/// Engine stand-in that walks the mounted tree.
struct CountingBackend {
    mounted_nodes: usize,
}

impl CountingBackend {
    fn new() -> Self {
        Self { mounted_nodes: 0 }
    }
}

impl RenderBackend for CountingBackend {
    type Error = ();

    fn mount(&mut self, root: &Node) -> Result<(), ()> {
        fn walk(node: &Node) -> usize {
            1 + node.children().iter().map(walk).sum::<usize>()
        }
        self.mounted_nodes += walk(root);
        Ok(())
    }
}

#[test]
fn test_dropdown_defaults_to_first_option() {
    let handle = Dropdown::new(level_options()).build(&theme()).unwrap();

    assert_eq!(handle.get(), 1);

    let control = &handle.view().children()[0];
    assert_eq!(control.tag(), "select");
    assert_eq!(control.attr("value").as_deref(), Some("1"));

    let entries = control.children();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].text(), Some("good"));
    assert_eq!(entries[0].attr("selected").as_deref(), Some("true"));
    assert_eq!(entries[1].attr("selected").as_deref(), Some("false"));
    assert_eq!(entries[2].attr("selected").as_deref(), Some("false"));
}

#[test]
fn test_dropdown_selection_flows_both_ways() {
    let handle = Dropdown::new(level_options()).build(&theme()).unwrap();
    let control = &handle.view().children()[0];

    // Engine-side selection updates the exposed value.
    control.select(&[3]);
    assert_eq!(handle.get(), 9001);
    assert_eq!(control.attr("value").as_deref(), Some("3"));

    // Programmatic writes update the bound view state.
    handle.value().set(2);
    assert_eq!(control.attr("value").as_deref(), Some("2"));
    assert_eq!(control.children()[1].attr("selected").as_deref(), Some("true"));
}

#[test]
fn test_dropdown_label_class_and_passthrough_attrs() {
    let handle = Dropdown::new(level_options())
        .with_label("Level")
        .with_class("wide")
        .with_attr("data-cell", "c1")
        .build(&theme())
        .unwrap();

    let root = handle.view();
    assert!(root.has_class("qb-dropdown"));
    assert!(root.has_class("wide"));
    assert_eq!(root.attr("data-cell").as_deref(), Some("c1"));

    let label = &root.children()[0];
    assert_eq!(label.tag(), "span");
    assert_eq!(label.text(), Some("Level"));
    assert!(label.has_class("qb-dropdown-label"));
    assert_eq!(root.children()[1].tag(), "select");
}

#[test]
fn test_dropdown_invalid_default_fails_construction() {
    let err = Dropdown::new(level_options())
        .with_value(42)
        .build(&theme())
        .unwrap_err();
    assert!(matches!(err, WidgetError::InvalidDefault { .. }));

    let empty: SelectOptions<i32> = SelectOptions::keyed(Vec::<(String, i32)>::new());
    let err = Dropdown::new(empty).build(&theme()).unwrap_err();
    assert!(matches!(err, WidgetError::EmptyOptions));
}

#[test]
fn test_dropdown_reselect_does_not_rewrite_value() {
    let handle = Dropdown::new(level_options()).build(&theme()).unwrap();
    let control = &handle.view().children()[0];

    let writes = Rc::new(Cell::new(0));
    let counter = writes.clone();
    handle
        .value()
        .listen(Box::new(move |_| counter.set(counter.get() + 1)));

    control.select(&[1]);
    assert_eq!(writes.get(), 0);

    control.select(&[2]);
    assert_eq!(writes.get(), 1);
}

#[test]
fn test_multi_dropdown_orders_values_by_collection() {
    let handle = Dropdown::new(level_options()).multiple().build(&theme());
    assert_eq!(handle.get(), Vec::<i32>::new());

    let control = &handle.view().children()[0];
    assert_eq!(control.attr("multiple").as_deref(), Some("multiple"));

    // Selection order does not matter; collection order wins.
    control.select(&[3, 1]);
    assert_eq!(handle.get(), vec![1, 9001]);

    let entries = control.children();
    assert_eq!(entries[0].attr("selected").as_deref(), Some("true"));
    assert_eq!(entries[1].attr("selected").as_deref(), Some("false"));
    assert_eq!(entries[2].attr("selected").as_deref(), Some("true"));
}

#[test]
fn test_radio_buttons_exclusive_selection() {
    let handle = RadioButtons::new(level_options())
        .with_group("levels")
        .build(&theme())
        .unwrap();
    assert_eq!(handle.get(), 1);

    let container = &handle.view().children()[0];
    let checked = |container: &Node| {
        container
            .children()
            .iter()
            .filter(|entry| entry.children()[0].attr("checked").as_deref() == Some("true"))
            .count()
    };
    assert_eq!(checked(container), 1);

    let third_control = &container.children()[2].children()[0];
    assert_eq!(third_control.attr("name").as_deref(), Some("levels"));
    third_control.click();

    assert_eq!(handle.get(), 9001);
    assert_eq!(checked(container), 1);
    assert_eq!(third_control.attr("checked").as_deref(), Some("true"));
}

#[test]
fn test_toggle_buttons_default_to_median() {
    let handle = ToggleButtons::new(SelectOptions::positional(vec![10, 20, 30, 40, 50]))
        .build(&theme())
        .unwrap();

    // Median of five entries is position 3.
    assert_eq!(handle.get(), 30);

    let container = &handle.view().children()[0];
    let labels: Vec<_> = container
        .children()
        .iter()
        .map(|entry| entry.text().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["10", "20", "30", "40", "50"]);
    assert!(container.children()[2].has_class("qb-togglebuttons-active"));
}

#[test]
fn test_toggle_buttons_keep_exactly_one_active() {
    let handle = ToggleButtons::new(SelectOptions::positional(vec![10, 20, 30, 40]))
        .build(&theme())
        .unwrap();
    let container = &handle.view().children()[0];

    let active = |container: &Node| {
        container
            .children()
            .iter()
            .filter(|entry| entry.has_class("qb-togglebuttons-active"))
            .count()
    };

    // Median of four entries is position 2 (lower position on ties).
    assert_eq!(handle.get(), 20);
    assert_eq!(active(container), 1);

    for position in 0..4 {
        container.children()[position].click();
        assert_eq!(active(container), 1);
        assert_eq!(handle.get(), (position as i32 + 1) * 10);
    }
}

#[test]
fn test_tabs_render_as_list_items() {
    let handle = tabs(SelectOptions::positional(vec![1, 2, 3]))
        .build(&theme())
        .unwrap();

    let container = &handle.view().children()[0];
    assert_eq!(container.tag(), "ul");
    assert!(container.has_class("qb-tabs-container"));
    for entry in container.children() {
        assert_eq!(entry.tag(), "li");
    }
}

#[test]
fn test_checkboxes_value_ignores_click_order() {
    let handle = checkboxes(SelectOptions::keyed([("a", 1), ("b", 2), ("c", 3)]))
        .build(&theme());
    let container = &handle.view().children()[0];
    let control = |position: usize| &container.children()[position - 1].children()[0];

    // Click "c" before "a"; the exposed sequence still follows the
    // collection order.
    control(3).toggle(true);
    control(1).toggle(true);
    assert_eq!(handle.get(), vec![1, 3]);
    assert_eq!(control(1).attr("checked").as_deref(), Some("true"));
    assert_eq!(control(2).attr("checked").as_deref(), Some("false"));

    // Toggling the same entry twice restores the original selection.
    control(2).toggle(true);
    control(2).toggle(false);
    assert_eq!(handle.get(), vec![1, 3]);
}

#[test]
fn test_toggles_are_checkbox_semantics_with_own_styling() {
    let handle = toggles(SelectOptions::keyed([("x", 1), ("y", 2)])).build(&theme());
    assert!(handle.view().has_class("qb-toggles"));

    let container = &handle.view().children()[0];
    container.children()[1].children()[0].toggle(true);
    assert_eq!(handle.get(), vec![2]);
}

#[test]
fn test_tabulator_masks_all_but_selected_panel() {
    let handle = Tabulator::new(
        ["one", "two"],
        [
            Node::new("p").with_text("content a"),
            Node::new("p").with_text("content b"),
        ],
    )
    .build(&theme())
    .unwrap();

    let visible = |handle: &quillbox_widgets::tabulator::TabulatorHandle| {
        handle
            .mask()
            .children()
            .iter()
            .filter(|panel| panel.attr("style").as_deref() == Some(""))
            .count()
    };

    // Two keys: the selector's median policy lands on the first.
    assert_eq!(handle.selected(), 1);
    assert_eq!(visible(&handle), 1);
    assert_eq!(handle.mask().children()[0].attr("style").as_deref(), Some(""));
    assert_eq!(
        handle.mask().children()[1].attr("style").as_deref(),
        Some("display:none")
    );

    handle.select(2);
    assert_eq!(visible(&handle), 1);
    assert_eq!(
        handle.mask().children()[0].attr("style").as_deref(),
        Some("display:none")
    );
    assert_eq!(handle.mask().children()[1].attr("style").as_deref(), Some(""));
}

#[test]
fn test_tabulator_selector_scope_drives_the_mask() {
    let handle = Tabulator::new(
        ["one", "two", "three"],
        [
            Node::new("p").with_text("a"),
            Node::new("p").with_text("b"),
            Node::new("p").with_text("c"),
        ],
    )
    .build(&theme())
    .unwrap();

    // Clicking a tab in the exposed selector scope flips the mask.
    let strip = &handle.selector().children()[0];
    strip.children()[2].click();
    assert_eq!(handle.selected(), 3);
    assert_eq!(*handle.index().get(), 3);
    assert_eq!(handle.mask().children()[2].attr("style").as_deref(), Some(""));

    // Writing the raw position cell works too.
    handle.index().set(1);
    assert_eq!(handle.mask().children()[0].attr("style").as_deref(), Some(""));
    assert_eq!(
        handle.mask().children()[2].attr("style").as_deref(),
        Some("display:none")
    );
}

#[test]
fn test_tabulator_rejects_mismatched_panels() {
    let err = Tabulator::new(["one", "two"], [Node::new("p")])
        .build(&theme())
        .unwrap_err();
    assert!(matches!(
        err,
        WidgetError::PanelCountMismatch { keys: 2, panels: 1 }
    ));
}

#[test]
fn test_reactive_options_reset_vanished_selection() {
    let cell = StateSignal::new(vec![
        SelectOption::new("a", 1),
        SelectOption::new("b", 2),
        SelectOption::new("c", 3),
    ]);
    let handle = Dropdown::new(SelectOptions::reactive(cell.clone()))
        .with_value(3)
        .build(&theme())
        .unwrap();
    assert_eq!(handle.get(), 3);

    // The selected entry disappears; the dropdown falls back to its first
    // entry instead of failing.
    cell.set(vec![SelectOption::new("a", 1), SelectOption::new("b", 2)]);
    assert_eq!(handle.get(), 1);
}

#[test]
fn test_widgets_mount_on_a_backend() {
    let mut backend = CountingBackend::new();

    let dropdown = Dropdown::new(level_options()).build(&theme()).unwrap();
    dropdown.attach(&mut backend).unwrap();
    // root + select + three options
    assert_eq!(backend.mounted_nodes, 5);

    let tabulator = Tabulator::new(["one"], [Node::new("p")]).build(&theme()).unwrap();
    tabulator.attach(&mut backend).unwrap();
    assert!(backend.mounted_nodes > 5);
}
