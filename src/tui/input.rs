// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (e.g. focus cycling,
// scrolling, numeric field adjustment).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::protocol::UserCommand;

use super::{ConfirmAction, ViewState};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the app orchestrator (e.g. Draw, Export, Quit). Returns `None` when the
/// key press was handled locally by mutating `ViewState` (e.g. focus
/// switching, scrolling, field adjustment).
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    // Confirmation mode: y confirms, n/Esc cancels, everything else blocked
    if view_state.confirm.is_some() {
        return handle_confirm(key_event, view_state);
    }

    // Insert mode: edit the name-list buffer; every edit is forwarded so
    // the model reparses on each keystroke.
    if view_state.insert_mode {
        return handle_insert(key_event, view_state);
    }

    handle_normal(key_event, view_state)
}

fn handle_confirm(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let action = view_state.confirm?;
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            view_state.confirm = None;
            Some(action.command())
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm = None;
            None
        }
        _ => None,
    }
}

fn handle_insert(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.insert_mode = false;
            None
        }
        KeyCode::Enter => {
            view_state.input_text.push('\n');
            Some(UserCommand::SetInput(view_state.input_text.clone()))
        }
        KeyCode::Backspace => {
            view_state.input_text.pop();
            Some(UserCommand::SetInput(view_state.input_text.clone()))
        }
        KeyCode::Char(c) => {
            view_state.input_text.push(c);
            Some(UserCommand::SetInput(view_state.input_text.clone()))
        }
        _ => None,
    }
}

fn handle_normal(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),

        KeyCode::Char('i') => {
            view_state.insert_mode = true;
            None
        }

        KeyCode::Char('r') => Some(UserCommand::ToggleRepeat),

        KeyCode::Char('d') => Some(UserCommand::Draw {
            count: view_state.draw_count,
        }),

        KeyCode::Char('g') => Some(UserCommand::Group {
            size: view_state.group_size,
        }),

        KeyCode::Char('u') => Some(UserCommand::RemoveDuplicates),

        KeyCode::Char('m') => Some(UserCommand::LoadSample),

        KeyCode::Char('x') => Some(UserCommand::Export),

        // Destructive actions go through the confirm dialog, and only when
        // there is something to clear.
        KeyCode::Char('R') => {
            if !view_state.draw_results.is_empty() {
                view_state.confirm = Some(ConfirmAction::ResetDrawResults);
            }
            None
        }
        KeyCode::Char('G') => {
            if !view_state.groups.is_empty() {
                view_state.confirm = Some(ConfirmAction::ResetGroups);
            }
            None
        }
        KeyCode::Char('C') => {
            if !view_state.input_text.is_empty()
                || !view_state.draw_results.is_empty()
                || !view_state.groups.is_empty()
            {
                view_state.confirm = Some(ConfirmAction::ClearAll);
            }
            None
        }

        // Numeric fields, clamped to a floor of 1.
        KeyCode::Char('+') | KeyCode::Char('=') => {
            view_state.draw_count += 1;
            None
        }
        KeyCode::Char('-') => {
            view_state.draw_count = view_state.draw_count.saturating_sub(1).max(1);
            None
        }
        KeyCode::Char('>') | KeyCode::Char('.') => {
            view_state.group_size += 1;
            None
        }
        KeyCode::Char('<') | KeyCode::Char(',') => {
            view_state.group_size = view_state.group_size.saturating_sub(1).max(1);
            None
        }

        KeyCode::Tab => {
            view_state.focus = view_state.focus.next();
            None
        }

        KeyCode::Up => {
            scroll_focused(view_state, -1);
            None
        }
        KeyCode::Down => {
            scroll_focused(view_state, 1);
            None
        }

        _ => None,
    }
}

/// Adjust the focused panel's scroll offset. Clamping against content
/// length happens at render time.
fn scroll_focused(view_state: &mut ViewState, delta: i64) {
    let key = view_state.focus.scroll_key().to_string();
    let current = view_state.scroll(&key) as i64;
    let next = (current + delta).max(0) as usize;
    view_state.scroll_offset.insert(key, next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::PanelFocus;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn q_quits_in_normal_mode() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(press(KeyCode::Char('q')), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let mut state = ViewState::default();
        state.insert_mode = true;
        assert_eq!(handle_key(ctrl('c'), &mut state), Some(UserCommand::Quit));

        let mut state = ViewState::default();
        state.confirm = Some(ConfirmAction::ClearAll);
        assert_eq!(handle_key(ctrl('c'), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ViewState::default();
        let mut event = press(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_key(event, &mut state), None);
    }

    #[test]
    fn d_draws_with_current_count() {
        let mut state = ViewState::default();
        state.draw_count = 3;
        assert_eq!(
            handle_key(press(KeyCode::Char('d')), &mut state),
            Some(UserCommand::Draw { count: 3 })
        );
    }

    #[test]
    fn g_groups_with_current_size() {
        let mut state = ViewState::default();
        state.group_size = 4;
        assert_eq!(
            handle_key(press(KeyCode::Char('g')), &mut state),
            Some(UserCommand::Group { size: 4 })
        );
    }

    #[test]
    fn insert_mode_edits_and_forwards_the_buffer() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(press(KeyCode::Char('i')), &mut state), None);
        assert!(state.insert_mode);

        assert_eq!(
            handle_key(press(KeyCode::Char('A')), &mut state),
            Some(UserCommand::SetInput("A".to_string()))
        );
        assert_eq!(
            handle_key(press(KeyCode::Enter), &mut state),
            Some(UserCommand::SetInput("A\n".to_string()))
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('B')), &mut state),
            Some(UserCommand::SetInput("A\nB".to_string()))
        );
        assert_eq!(
            handle_key(press(KeyCode::Backspace), &mut state),
            Some(UserCommand::SetInput("A\n".to_string()))
        );

        assert_eq!(handle_key(press(KeyCode::Esc), &mut state), None);
        assert!(!state.insert_mode);
    }

    #[test]
    fn q_types_a_letter_in_insert_mode() {
        let mut state = ViewState::default();
        state.insert_mode = true;
        assert_eq!(
            handle_key(press(KeyCode::Char('q')), &mut state),
            Some(UserCommand::SetInput("q".to_string()))
        );
    }

    #[test]
    fn numeric_fields_adjust_and_clamp_to_one() {
        let mut state = ViewState::default();
        handle_key(press(KeyCode::Char('+')), &mut state);
        assert_eq!(state.draw_count, 2);
        handle_key(press(KeyCode::Char('-')), &mut state);
        handle_key(press(KeyCode::Char('-')), &mut state);
        assert_eq!(state.draw_count, 1);

        handle_key(press(KeyCode::Char('>')), &mut state);
        assert_eq!(state.group_size, 3);
        handle_key(press(KeyCode::Char('<')), &mut state);
        handle_key(press(KeyCode::Char('<')), &mut state);
        handle_key(press(KeyCode::Char('<')), &mut state);
        assert_eq!(state.group_size, 1);
    }

    #[test]
    fn reset_keys_require_nonempty_collections() {
        let mut state = ViewState::default();
        handle_key(press(KeyCode::Char('R')), &mut state);
        assert!(state.confirm.is_none());

        state.draw_results = vec!["A".to_string()];
        handle_key(press(KeyCode::Char('R')), &mut state);
        assert_eq!(state.confirm, Some(ConfirmAction::ResetDrawResults));
    }

    #[test]
    fn confirm_y_sends_the_command() {
        let mut state = ViewState::default();
        state.confirm = Some(ConfirmAction::ResetGroups);
        assert_eq!(
            handle_key(press(KeyCode::Char('y')), &mut state),
            Some(UserCommand::ResetGroups)
        );
        assert!(state.confirm.is_none());
    }

    #[test]
    fn confirm_n_and_esc_cancel() {
        let mut state = ViewState::default();
        state.confirm = Some(ConfirmAction::ClearAll);
        assert_eq!(handle_key(press(KeyCode::Char('n')), &mut state), None);
        assert!(state.confirm.is_none());

        state.confirm = Some(ConfirmAction::ClearAll);
        assert_eq!(handle_key(press(KeyCode::Esc), &mut state), None);
        assert!(state.confirm.is_none());
    }

    #[test]
    fn confirm_mode_blocks_other_keys() {
        let mut state = ViewState::default();
        state.confirm = Some(ConfirmAction::ClearAll);
        assert_eq!(handle_key(press(KeyCode::Char('d')), &mut state), None);
        assert_eq!(state.confirm, Some(ConfirmAction::ClearAll));
    }

    #[test]
    fn tab_cycles_focus_and_arrows_scroll() {
        let mut state = ViewState::default();
        handle_key(press(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, PanelFocus::Results);

        handle_key(press(KeyCode::Down), &mut state);
        handle_key(press(KeyCode::Down), &mut state);
        assert_eq!(state.scroll("results"), 2);

        handle_key(press(KeyCode::Up), &mut state);
        assert_eq!(state.scroll("results"), 1);

        // Scrolling above the top clamps at zero.
        handle_key(press(KeyCode::Up), &mut state);
        handle_key(press(KeyCode::Up), &mut state);
        assert_eq!(state.scroll("results"), 0);
    }
}
