//! Routing events through the tree.

use tracing::{debug, trace};

use super::input::Event;
use crate::dom::{Tree, WidgetId};
use crate::geometry::{Offset, Size};
use crate::widget::EventContext;

impl Tree {
    /// Deliver `event` to the tree. Returns whether a widget handled it.
    ///
    /// A resize places the root at the screen origin with the new size and
    /// counts as handled when the geometry changed. Key and mouse events
    /// travel depth-first: a node offers the event to its children in order
    /// and stops at the first that handles it; its own widget only sees the
    /// event when none of them did.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        match event {
            Event::Resize { width, height } => {
                debug!(width, height, "resize");
                let root = self.root();
                self.resize(root, Offset::ZERO, Size::new(i32::from(*width), i32::from(*height)))
            }
            Event::Key(_) | Event::Mouse(_) => {
                let handled = self.dispatch_to(self.root(), event);
                trace!(?event, handled, "dispatched");
                handled
            }
        }
    }

    fn dispatch_to(&mut self, id: WidgetId, event: &Event) -> bool {
        let children = self.children(id).to_vec();
        if children.into_iter().any(|child| self.dispatch_to(child, event)) {
            return true;
        }
        let ctx = EventContext { area: self.inner_real(id), focused: self.is_focused(id) };
        match self.node_mut(id) {
            Some(node) => node.widget.handle_event(event, &ctx),
            None => false,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::any::Any;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::Region;
    use crate::widget::{Widget, WidgetExt};
    use crate::widgets::Container;

    /// Records what it saw; handles events whose id is in `accepts`.
    #[derive(Default)]
    struct Recorder {
        accepts: Vec<&'static str>,
        seen: Vec<String>,
        last_ctx: Option<EventContext>,
    }

    impl Recorder {
        fn accepting(ids: &[&'static str]) -> Self {
            Self { accepts: ids.to_vec(), ..Self::default() }
        }
    }

    impl Widget for Recorder {
        fn widget_type(&self) -> &str {
            "Recorder"
        }

        fn handle_event(&mut self, event: &Event, ctx: &EventContext) -> bool {
            let id = event.id().unwrap_or_default().to_owned();
            let handled = self.accepts.iter().any(|a| *a == id);
            self.seen.push(id);
            self.last_ctx = Some(*ctx);
            handled
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn seen(tree: &Tree, id: WidgetId) -> Vec<String> {
        tree.widget::<Recorder>(id).unwrap().seen.clone()
    }

    // ── Bubbling ─────────────────────────────────────────────────────

    #[test]
    fn first_child_that_handles_stops_the_event() {
        let mut tree = Tree::new(Recorder::accepting(&[]));
        let root = tree.root();
        let a = tree.append(root, Recorder::accepting(&["x"])).unwrap();
        let b = tree.append(root, Recorder::accepting(&["x"])).unwrap();

        assert!(tree.dispatch(&Event::key("x")));
        assert_eq!(seen(&tree, a), vec!["x"]);
        assert!(seen(&tree, b).is_empty());
        assert!(seen(&tree, root).is_empty());
    }

    #[test]
    fn unhandled_event_reaches_every_node_children_first() {
        let mut tree = Tree::new(Recorder::accepting(&["y"]));
        let root = tree.root();
        let a = tree.append(root, Recorder::accepting(&[])).unwrap();
        let nested = tree.append(a, Recorder::accepting(&[])).unwrap();
        let b = tree.append(root, Recorder::accepting(&[])).unwrap();

        assert!(tree.dispatch(&Event::key("y")));
        for id in [nested, a, b, root] {
            assert_eq!(seen(&tree, id), vec!["y"]);
        }
        assert!(!tree.dispatch(&Event::key("z")));
    }

    #[test]
    fn grandchild_handling_stops_at_parent_level() {
        let mut tree = Tree::new(Recorder::accepting(&[]));
        let root = tree.root();
        let a = tree.append(root, Recorder::accepting(&[])).unwrap();
        tree.append(a, Recorder::accepting(&["k"]));
        let b = tree.append(root, Recorder::accepting(&[])).unwrap();

        assert!(tree.dispatch(&Event::key("k")));
        assert!(seen(&tree, a).is_empty());
        assert!(seen(&tree, b).is_empty());
    }

    // ── Context ──────────────────────────────────────────────────────

    #[test]
    fn context_carries_absolute_area_and_focus() {
        let mut tree = Tree::new(Container::vertical());
        let root = tree.root();
        let child = tree.append(root, Recorder::accepting(&[]).configure().with_focus(true)).unwrap();
        tree.dispatch(&Event::resize(6, 4));
        tree.dispatch(&Event::mouse("<MouseLeft>", 2, 2));

        let ctx = tree.widget::<Recorder>(child).unwrap().last_ctx.unwrap();
        assert_eq!(ctx.area, Region::new(1, 1, 4, 2));
        assert!(ctx.focused);
        assert!(ctx.hit(2, 2));
    }

    // ── Resize ───────────────────────────────────────────────────────

    #[test]
    fn resize_sizes_the_root() {
        let mut tree = Tree::new(Container::vertical());
        assert!(tree.dispatch(&Event::resize(20, 5)));
        assert!(!tree.dispatch(&Event::resize(20, 5)));
        let root = tree.root();
        assert_eq!(tree.outer_real(root), Region::new(0, 0, 20, 5));
    }
}
