//! Keyboard shortcuts for the drawing surface.

use egui::{Context, Key, KeyboardShortcut, Modifiers};

/// Actions reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
}

impl ShortcutAction {
    /// `COMMAND` is Cmd on macOS and Ctrl everywhere else.
    pub const fn shortcut(self) -> KeyboardShortcut {
        match self {
            Self::Undo => KeyboardShortcut::new(Modifiers::COMMAND, Key::Z),
            Self::Redo => KeyboardShortcut::new(Modifiers::COMMAND, Key::Y),
        }
    }

    /// Every binding, most specific first: Cmd+Shift+Z must be matched before
    /// Cmd+Z, since modifiers match logically and Shift would otherwise be ignored.
    pub const BINDINGS: [(KeyboardShortcut, ShortcutAction); 3] = [
        (
            KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z),
            Self::Redo,
        ),
        (KeyboardShortcut::new(Modifiers::COMMAND, Key::Z), Self::Undo),
        (KeyboardShortcut::new(Modifiers::COMMAND, Key::Y), Self::Redo),
    ];

    pub fn description(self) -> &'static str {
        match self {
            Self::Undo => "Undo",
            Self::Redo => "Redo",
        }
    }

    /// Match a key press against the bindings.
    pub fn from_key(modifiers: Modifiers, key: Key) -> Option<Self> {
        Self::BINDINGS
            .into_iter()
            .find(|(shortcut, _)| {
                shortcut.logical_key == key && modifiers.matches_logically(shortcut.modifiers)
            })
            .map(|(_, action)| action)
    }

    /// Button hint text for this platform, e.g. "Undo (Ctrl+Z)".
    pub fn label(self, ctx: &Context) -> String {
        format!(
            "{} ({})",
            self.description(),
            ctx.format_shortcut(&self.shortcut())
        )
    }
}

/// Consume this frame's shortcut presses.
///
/// Only called while the surface is on screen, so the bindings live exactly as
/// long as the surface is shown.
pub fn consume_shortcuts(ctx: &Context) -> Vec<ShortcutAction> {
    ctx.input_mut(|input| {
        let mut actions = Vec::new();
        for (shortcut, action) in ShortcutAction::BINDINGS {
            while input.consume_shortcut(&shortcut) {
                actions.push(action);
            }
        }
        actions
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(
            ShortcutAction::from_key(Modifiers::COMMAND, Key::Z),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            ShortcutAction::from_key(Modifiers::COMMAND, Key::Y),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            ShortcutAction::from_key(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(ShortcutAction::from_key(Modifiers::NONE, Key::Z), None);
        assert_eq!(ShortcutAction::from_key(Modifiers::COMMAND, Key::X), None);
    }

    #[test]
    fn test_consume_shortcuts() {
        let ctx = Context::default();
        let raw = egui::RawInput {
            modifiers: Modifiers::COMMAND,
            events: vec![egui::Event::Key {
                key: Key::Z,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::COMMAND,
            }],
            ..Default::default()
        };
        let mut actions = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            actions = consume_shortcuts(ctx);
        });
        assert_eq!(actions, vec![ShortcutAction::Undo]);
    }

    #[test]
    fn test_shift_z_redoes_without_undo() {
        let ctx = Context::default();
        let modifiers = Modifiers::COMMAND.plus(Modifiers::SHIFT);
        let raw = egui::RawInput {
            modifiers,
            events: vec![egui::Event::Key {
                key: Key::Z,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        };
        let mut actions = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            actions = consume_shortcuts(ctx);
        });
        assert_eq!(actions, vec![ShortcutAction::Redo]);
    }
}
