//! Integration tests for cellbox.
//!
//! These tests exercise the public API from outside the crate, verifying that
//! layout, drawing, event routing, and the headless app work together.

use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use cellbox::event::keys;
use cellbox::geometry::{Offset, Region, Size, Spacing};
use cellbox::layout::SizePolicy;
use cellbox::render::{Painter, Screen};
use cellbox::testing::snapshot::render_tree_to_string;
use cellbox::testing::{render_to_string, Pilot};
use cellbox::theme::BorderSymbols;
use cellbox::widgets::{Container, EchoMode, Input, Label};
use cellbox::{AppConfig, Theme, Tree, WidgetExt};

// ---------------------------------------------------------------------------
// Layout and drawing
// ---------------------------------------------------------------------------

#[test]
fn test_expanding_children_split_evenly() {
    let mut tree = Tree::new(Container::horizontal());
    let root = tree.root();
    tree.append(root, Label::new("left"));
    tree.append(root, Label::new("right"));

    insta::assert_snapshot!(render_tree_to_string(tree, 20, 3), @r"
    ┌──────────────────┐
    │left     right    │
    └──────────────────┘
    ");
}

#[test]
fn test_preferred_child_keeps_its_hint() {
    let mut tree = Tree::new(Container::horizontal());
    let root = tree.root();
    let a = tree
        .append(root, Label::new("ab").with_policy(SizePolicy::Preferred, SizePolicy::Preferred))
        .unwrap();
    let b = tree.append(root, Label::new("cd")).unwrap();
    tree.resize(root, Offset::ZERO, Size::new(20, 3));

    assert_eq!(tree.outer_real(a), Region::new(1, 1, 2, 1));
    assert_eq!(tree.outer_real(b), Region::new(3, 1, 16, 1));
}

#[test]
fn test_fixed_width_sidebar() {
    let mut tree = Tree::new(Container::horizontal());
    let root = tree.root();
    tree.append(root, Container::vertical().with_title("nav").with_width(6));
    tree.append(root, Label::new("main"));

    insta::assert_snapshot!(render_tree_to_string(tree, 20, 5), @r"
    ┌──────────────────┐
    │┌nav─┐main        │
    ││    │            │
    │└────┘            │
    └──────────────────┘
    ");
}

#[test]
fn test_padding_and_margin_shift_content() {
    let root = Container::vertical()
        .configure()
        .with_padding(Spacing::new(0, 0, 0, 1))
        .with_margin(Spacing::new(0, 0, 0, 1));
    let mut tree = Tree::new(root);
    let id = tree.root();
    tree.append(id, Label::new("x"));

    assert_eq!(render_tree_to_string(tree, 6, 3), " ┌───┐\n │ x │\n └───┘");
}

#[test]
fn test_too_small_screen_does_not_panic() {
    let mut tree = Tree::new(Container::vertical());
    let root = tree.root();
    let row = tree.append(root, Container::horizontal()).unwrap();
    tree.append(row, Label::new("deeply nested text"));

    let output = render_tree_to_string(tree, 1, 1);
    assert_eq!(output, "┘");
    assert_eq!(render_to_string(Container::vertical(), 0, 5), "");
}

#[test]
fn test_removed_subtree_is_not_drawn() {
    let mut tree = Tree::new(Container::vertical());
    let root = tree.root();
    tree.append(root, Label::new("keep"));
    let gone = tree.append(root, Container::vertical()).unwrap();
    tree.append(gone, Label::new("inner"));
    let before = tree.node_count();

    assert!(tree.remove(root, 1));
    assert_eq!(tree.node_count(), before - 2);
    assert!(!tree.contains(gone));

    insta::assert_snapshot!(render_tree_to_string(tree, 8, 3), @r"
    ┌──────┐
    │keep  │
    └──────┘
    ");
}

#[test]
fn test_theme_symbols() {
    let mut tree = Tree::with_theme(
        Container::vertical().with_title("t"),
        Theme::default().with_symbols(BorderSymbols::ASCII),
    );
    let root = tree.root();
    tree.append(root, Label::new("ok"));

    insta::assert_snapshot!(render_tree_to_string(tree, 5, 3), @r"
    +t--+
    |ok |
    +---+
    ");
}

// ---------------------------------------------------------------------------
// Pilot: input and bindings
// ---------------------------------------------------------------------------

fn chat_pilot() -> (Pilot, Label, Input) {
    let log = Label::new("");
    let input = Input::new();
    let mut pilot = Pilot::new(Container::vertical(), 20, 6);
    let root = pilot.app().tree().root();
    pilot.app_mut().tree_mut().append(root, log.clone());
    pilot.app_mut().tree_mut().append(root, input.clone());

    let sink = log.clone();
    input.on_submit(move |input| {
        sink.set_text(format!("> {}", input.text()));
        input.set_text("");
    });
    pilot.repaint().unwrap();
    (pilot, log, input)
}

#[test]
fn test_submit_moves_text_to_log() {
    let (mut pilot, log, input) = chat_pilot();
    pilot.type_text("hi").unwrap();
    assert_eq!(pilot.cursor(), Some(Offset::new(3, 4)));

    pilot.press_key(keys::ENTER).unwrap();
    assert_eq!(log.text(), "> hi");
    assert_eq!(input.text(), "");
    assert_eq!(pilot.cursor(), Some(Offset::new(1, 4)));

    insta::assert_snapshot!(pilot.screen(), @r"
    ┌──────────────────┐
    │> hi              │
    │                  │
    │                  │
    │                  │
    └──────────────────┘
    ");
}

#[test]
fn test_keybinding_shadows_widgets() {
    let (mut pilot, _log, input) = chat_pilot();
    let hits = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&hits);
    pilot.app_mut().set_keybinding(keys::TAB, move |tree: &mut Tree| {
        *counter.lock() += 1;
        let root = tree.root();
        tree.set_title(root, "tabbed");
    });

    pilot.press_key("<tab>").unwrap();
    pilot.type_text("a").unwrap();
    assert_eq!(*hits.lock(), 1);
    assert_eq!(input.text(), "a");
    assert!(pilot.screen().starts_with("┌tabbed───"));
}

#[test]
fn test_password_input_masks_screen() {
    let input = Input::new().with_echo_mode(EchoMode::Password);
    let mut pilot = Pilot::new(Container::vertical(), 10, 3);
    let root = pilot.app().tree().root();
    pilot.app_mut().tree_mut().append(root, input.clone());
    pilot.type_text("secret").unwrap();

    assert_eq!(input.text(), "secret");
    insta::assert_snapshot!(pilot.screen(), @r"
    ┌────────┐
    │******  │
    └────────┘
    ");
}

#[test]
fn test_long_input_scrolls() {
    let input = Input::new();
    let mut pilot = Pilot::new(Container::vertical(), 7, 3);
    let root = pilot.app().tree().root();
    pilot.app_mut().tree_mut().append(root, input.clone());
    pilot.type_text("abcdefg").unwrap();

    assert_eq!(input.scroll_offset(), 3);
    assert_eq!(pilot.screen(), "┌─────┐\n│defg │\n└─────┘");
    assert_eq!(pilot.cursor(), Some(Offset::new(5, 1)));
}

#[test]
fn test_quit_keys_are_configurable() {
    let config = AppConfig::new().with_quit_keys([keys::ESCAPE]);
    let mut pilot = Pilot::with_config(Container::vertical(), 10, 3, config);
    assert!(!pilot.press_key(keys::CTRL_C).unwrap());
    assert!(pilot.is_running());
    assert!(pilot.press_key(keys::ESCAPE).unwrap());
    assert!(!pilot.is_running());
}

// ---------------------------------------------------------------------------
// Repaint requests from other threads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_thread_updates_collapse_into_one_repaint() {
    let mut tree = Tree::new(Container::vertical());
    let root = tree.root();
    let status = Label::new("idle");
    tree.append(root, status.clone());

    let mut painter = Painter::new(Box::new(Screen::new(Size::new(10, 3))));
    tree.attach(painter.notifier());
    tree.resize(root, Offset::ZERO, painter.size());

    let handle = status.clone();
    std::thread::spawn(move || {
        for step in 0..5 {
            handle.set_text(format!("step {step}"));
        }
    })
    .join()
    .unwrap();

    assert_eq!(painter.next_requests().await, 5);
    assert_eq!(painter.drain_requests(), 0);

    tree.relayout(root);
    painter.repaint(&tree).unwrap();
    assert_eq!(painter.repaints(), 1);
    assert_eq!(painter.row_text(1).unwrap(), "│step 4  │");
}
