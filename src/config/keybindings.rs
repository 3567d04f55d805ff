//! Keyboard bindings configuration.

use crate::model::pager_action::PagerAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to pagination actions.
///
/// Defaults cover vim-style and arrow/Home/End navigation plus direct
/// page selection on the digit keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, PagerAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<PagerAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Vim-style page movement
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            PagerAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            PagerAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            PagerAction::FirstPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            PagerAction::LastPage,
        );

        // Arrow and Home/End navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            PagerAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            PagerAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            PagerAction::FirstPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            PagerAction::LastPage,
        );

        // Group jumps
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            PagerAction::PrevGroup,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            PagerAction::NextGroup,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            PagerAction::PrevGroup,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            PagerAction::NextGroup,
        );

        // Direct page selection (1-based)
        bindings.insert(
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE),
            PagerAction::SelectPage(1),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE),
            PagerAction::SelectPage(2),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE),
            PagerAction::SelectPage(3),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE),
            PagerAction::SelectPage(4),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE),
            PagerAction::SelectPage(5),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE),
            PagerAction::SelectPage(6),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE),
            PagerAction::SelectPage(7),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('8'), KeyModifiers::NONE),
            PagerAction::SelectPage(8),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE),
            PagerAction::SelectPage(9),
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            PagerAction::Quit,
        );

        Self { bindings }
    }
}
