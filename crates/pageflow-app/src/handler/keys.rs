//! Keyboard-to-message mapping

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key event into a navigation message.
///
/// Arrow keys step; digits 1-9 jump to that section like a menu entry;
/// everything else is ignored.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down => Some(Message::StepVertical { direction: 1 }),
        InputKey::Up => Some(Message::StepVertical { direction: -1 }),
        InputKey::Right => Some(Message::StepHorizontal { direction: 1 }),
        InputKey::Left => Some(Message::StepHorizontal { direction: -1 }),

        InputKey::Char(c @ '1'..='9') => {
            let target = (c as u8 - b'1') as usize;
            (target < state.section_count()).then_some(Message::JumpTo { target })
        }

        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use pageflow_core::Deck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> AppState {
        let deck: Deck = toml::from_str(
            r#"
            [[sections]]
            id = "a"
            title = "A"
            [[sections]]
            id = "b"
            title = "B"
            "#,
        )
        .unwrap();
        AppState::with_rng(deck, Settings::default(), 0, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_arrow_keys_step() {
        let s = state();
        assert_eq!(
            handle_key(&s, InputKey::Down),
            Some(Message::StepVertical { direction: 1 })
        );
        assert_eq!(
            handle_key(&s, InputKey::Up),
            Some(Message::StepVertical { direction: -1 })
        );
        assert_eq!(
            handle_key(&s, InputKey::Right),
            Some(Message::StepHorizontal { direction: 1 })
        );
        assert_eq!(
            handle_key(&s, InputKey::Left),
            Some(Message::StepHorizontal { direction: -1 })
        );
    }

    #[test]
    fn test_digit_jump_bounds() {
        let s = state();
        assert_eq!(
            handle_key(&s, InputKey::Char('2')),
            Some(Message::JumpTo { target: 1 })
        );
        // Only two sections; '3' has no target
        assert_eq!(handle_key(&s, InputKey::Char('3')), None);
    }

    #[test]
    fn test_quit_keys() {
        let s = state();
        assert_eq!(handle_key(&s, InputKey::Char('q')), Some(Message::Quit));
        assert_eq!(handle_key(&s, InputKey::Esc), Some(Message::Quit));
        assert_eq!(handle_key(&s, InputKey::CharCtrl('c')), Some(Message::Quit));
    }

    #[test]
    fn test_other_keys_ignored() {
        let s = state();
        assert_eq!(handle_key(&s, InputKey::Char('x')), None);
        assert_eq!(handle_key(&s, InputKey::Enter), None);
    }
}
