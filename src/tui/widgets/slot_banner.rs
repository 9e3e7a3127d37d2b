// Slot banner widget: the draw display.
//
// Shows the idle prompt, the names flashing past during a roll, or the
// revealed winners.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the slot banner into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let style = if state.is_rolling {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(state.slot_text.clone())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Draw"));
    frame.render_widget(paragraph, area);
}
