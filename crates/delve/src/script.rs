//! Intent scripts
//!
//! A script is a string of single-key commands, whitespace ignored:
//! `w a s d` move, `.` waits, `i` lists the inventory, `q` quits,
//! `e<n>` eats food slot n and `u<n>` equips weapon slot n (1-based).

use dv_core::{Direction, Intent, InventorySlot};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command '{key}' at position {pos}")]
    UnknownKey { key: char, pos: usize },

    #[error("'{key}' at position {pos} needs a slot number starting at 1")]
    MissingSlot { key: char, pos: usize },
}

pub fn parse_script(script: &str) -> Result<Vec<Intent>, ScriptError> {
    let mut intents = Vec::new();
    let mut chars = script.char_indices().peekable();

    while let Some((pos, key)) = chars.next() {
        let intent = match key {
            c if c.is_whitespace() => continue,
            'w' => Intent::Move(Direction::Up),
            'a' => Intent::Move(Direction::Left),
            's' => Intent::Move(Direction::Down),
            'd' => Intent::Move(Direction::Right),
            '.' => Intent::Wait,
            'i' => Intent::OpenInventory,
            'q' => Intent::Quit,
            'e' | 'u' => {
                let mut digits = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    digits.push(c);
                    chars.next();
                }
                let slot = digits
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .ok_or(ScriptError::MissingSlot { key, pos })?;
                if key == 'e' {
                    Intent::UseItem(InventorySlot::Food(slot))
                } else {
                    Intent::UseItem(InventorySlot::Weapon(slot))
                }
            }
            _ => return Err(ScriptError::UnknownKey { key, pos }),
        };
        intents.push(intent);
    }

    Ok(intents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let intents = parse_script("wasd .").unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::Move(Direction::Up),
                Intent::Move(Direction::Left),
                Intent::Move(Direction::Down),
                Intent::Move(Direction::Right),
                Intent::Wait,
            ]
        );
    }

    #[test]
    fn test_parse_slots() {
        let intents = parse_script("e1u12iq").unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::UseItem(InventorySlot::Food(0)),
                Intent::UseItem(InventorySlot::Weapon(11)),
                Intent::OpenInventory,
                Intent::Quit,
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_script("wx"),
            Err(ScriptError::UnknownKey { key: 'x', pos: 1 })
        );
        assert_eq!(
            parse_script("e"),
            Err(ScriptError::MissingSlot { key: 'e', pos: 0 })
        );
        assert_eq!(
            parse_script("u0"),
            Err(ScriptError::MissingSlot { key: 'u', pos: 0 })
        );
    }
}
