//! Key mapping from terminal events to game commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameCommand;

/// Map keyboard input to a game command.
pub fn map_key(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(GameCommand::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(GameCommand::MoveDown),
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('k') => {
            Some(GameCommand::Rotate)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should restart the game.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(GameCommand::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameCommand::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(GameCommand::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(GameCommand::MoveDown)
        );
    }

    #[test]
    fn test_rotate_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(GameCommand::Rotate)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameCommand::Rotate)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_restart_key() {
        assert!(should_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!should_restart(KeyEvent::from(KeyCode::Char('t'))));
    }
}
