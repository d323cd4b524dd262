//! The interaction contract handed to presentation code.

use std::rc::Rc;

use crate::input::{ClickEvent, ClickKind, Event, EventResult, Key, KeyCombo};

/// Toggle bindings for one node.
///
/// Store it on whatever element presents the node and route that element's
/// pointer and key events into it. A primary click and each activation key
/// (Enter and Space by default) call the node's toggle once per delivered
/// event. Leaves get inert props that ignore everything.
#[derive(Clone)]
pub struct ToggleProps<'a> {
    toggle: Option<Rc<dyn Fn() + 'a>>,
    keys: Rc<[Key]>,
    click: ClickKind,
}

impl<'a> ToggleProps<'a> {
    pub(crate) fn new(toggle: Rc<dyn Fn() + 'a>, keys: Rc<[Key]>, click: ClickKind) -> Self {
        Self {
            toggle: Some(toggle),
            keys,
            click,
        }
    }

    pub(crate) fn inert(keys: Rc<[Key]>, click: ClickKind) -> Self {
        Self {
            toggle: None,
            keys,
            click,
        }
    }

    /// Whether these props toggle anything (false for leaves).
    pub fn is_active(&self) -> bool {
        self.toggle.is_some()
    }

    /// Pointer binding.
    pub fn on_click(&self, event: &ClickEvent) -> EventResult {
        if event.kind == self.click {
            self.fire()
        } else {
            EventResult::Ignored
        }
    }

    /// Keyboard binding.
    pub fn on_key_down(&self, key: &KeyCombo) -> EventResult {
        if self.keys.contains(&key.key) {
            self.fire()
        } else {
            EventResult::Ignored
        }
    }

    /// Dispatch any input event to the matching binding.
    pub fn handle(&self, event: &Event) -> EventResult {
        match event {
            Event::Click(click) => self.on_click(click),
            Event::Key(key) => self.on_key_down(key),
        }
    }

    fn fire(&self) -> EventResult {
        match &self.toggle {
            Some(toggle) => {
                toggle();
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}

impl std::fmt::Debug for ToggleProps<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleProps")
            .field("active", &self.is_active())
            .field("keys", &self.keys)
            .field("click", &self.click)
            .finish()
    }
}
