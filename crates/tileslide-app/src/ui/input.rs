use eframe::egui::{InputState, Key};
use tileslide_core::Direction;

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool) -> Self {
        Self { key, command }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true), action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, false), action)
    }
}

// Arrow keys name the direction the tile travels, not where the empty cell goes.
const SHORTCUTS: [Shortcut; 6] = [
    Shortcut::command(Key::N, Action::NewGame),
    Shortcut::plain(Key::H, Action::RequestHint),
    Shortcut::plain(Key::ArrowUp, Action::Slide(Direction::Up)),
    Shortcut::plain(Key::ArrowDown, Action::Slide(Direction::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::Slide(Direction::Left)),
    Shortcut::plain(Key::ArrowRight, Action::Slide(Direction::Right)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered =
            i.key_pressed(shortcut.trigger.key) && i.modifiers.command == shortcut.trigger.command;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
