//! Key mapping from terminal events to controls.
//!
//! | Control | Red | Yellow |
//! |---------|-----|--------|
//! | move | `W` `A` `S` `D` | arrow keys |
//! | fire | Left Alt, Space | Right Alt, Enter |
//!
//! Esc and Ctrl-C quit. Bare Alt presses are only reported by terminals
//! that speak the kitty keyboard protocol, hence the fallbacks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

use crate::types::{Direction, Side};

/// What a key does in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Move(Side, Direction),
    Fire(Side),
    Quit,
}

/// Map a key to its control, if it has one.
pub fn map_key(key: KeyEvent) -> Option<Control> {
    if should_quit(key) {
        return Some(Control::Quit);
    }
    let control = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Control::Move(Side::Red, Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') => Control::Move(Side::Red, Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') => Control::Move(Side::Red, Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') => Control::Move(Side::Red, Direction::Right),

        KeyCode::Up => Control::Move(Side::Yellow, Direction::Up),
        KeyCode::Down => Control::Move(Side::Yellow, Direction::Down),
        KeyCode::Left => Control::Move(Side::Yellow, Direction::Left),
        KeyCode::Right => Control::Move(Side::Yellow, Direction::Right),

        KeyCode::Modifier(ModifierKeyCode::LeftAlt) | KeyCode::Char(' ') => Control::Fire(Side::Red),
        KeyCode::Modifier(ModifierKeyCode::RightAlt) | KeyCode::Enter => {
            Control::Fire(Side::Yellow)
        }

        _ => return None,
    };
    Some(control)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_red_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Control::Move(Side::Red, Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('S'))),
            Some(Control::Move(Side::Red, Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Control::Move(Side::Red, Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            Some(Control::Move(Side::Red, Direction::Right))
        );
    }

    #[test]
    fn test_yellow_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(Control::Move(Side::Yellow, Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(Control::Move(Side::Yellow, Direction::Left))
        );
    }

    #[test]
    fn test_fire_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Modifier(ModifierKeyCode::LeftAlt))),
            Some(Control::Fire(Side::Red))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Control::Fire(Side::Red))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Modifier(ModifierKeyCode::RightAlt))),
            Some(Control::Fire(Side::Yellow))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(Control::Fire(Side::Yellow))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Control::Quit));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }
}
