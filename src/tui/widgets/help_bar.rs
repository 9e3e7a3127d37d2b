// Help bar widget: keyboard shortcut hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the help bar into the given area. The hints follow the active
/// mode so the visible keys always apply.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let text = if state.confirm.is_some() {
        " y:Confirm | n/Esc:Cancel"
    } else if state.insert_mode {
        " Type names, one per line | Enter:New line | Esc:Done"
    } else {
        " i:Edit | d:Draw | g:Group | r:Repeat | u:Dedupe | m:Sample | x:Export | +/-:Count | </>:Size | R/G/C:Reset | q:Quit"
    };

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
