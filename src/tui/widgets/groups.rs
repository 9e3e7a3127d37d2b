// Groups widget: one card per group with its members.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the group cards into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let focus_border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let title = format!("Groups ({})", state.groups.len());

    if state.groups.is_empty() {
        let paragraph = Paragraph::new("  No groups yet. Press g to group.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_border)
                    .title(title),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = group_lines(&state.groups);
    let total = lines.len();

    let visible_rows = (area.height as usize).saturating_sub(2);
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = state.scroll("groups").min(max_offset);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .collect();

    let paragraph = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border)
            .title(title),
    );
    frame.render_widget(paragraph, area);

    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Build the flattened card lines: a header per group, then its members.
fn group_lines(groups: &[Vec<String>]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, members) in groups.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("Group {} ({})", index + 1, members.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for name in members {
            lines.push(Line::from(Span::raw(format!("  {name}"))));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(members: &[&[&str]]) -> Vec<Vec<String>> {
        members
            .iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn group_lines_have_header_then_members() {
        let lines = group_lines(&groups(&[&["A", "B"], &["C"]]));
        let texts: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            texts,
            vec!["Group 1 (2)", "  A", "  B", "Group 2 (1)", "  C"]
        );
    }

    #[test]
    fn render_does_not_panic_empty_and_full() {
        let backend = ratatui::backend::TestBackend::new(40, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();

        let mut state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();

        state.groups = groups(&[&["A", "B"], &["C", "D"], &["E"]]);
        state.scroll_offset.insert("groups".to_string(), 50);
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
    }
}
