// Status bar widget: list stats, draw mode, field values, notices.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::NoticeLevel;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [name count] [pool remaining] [repeat mode] [field values] [notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            format!(" {} names", state.names.len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("pool {}", state.pool_remaining),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(
            repeat_label(state.allow_repeat),
            Style::default().fg(if state.allow_repeat {
                Color::Yellow
            } else {
                Color::White
            }),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("draw {} | groups of {}", state.draw_count, state.group_size),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(notice) = &state.notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Warn => Color::Yellow,
        };
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            notice.text.clone(),
            Style::default().fg(color),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Label for the allow-repeat toggle.
pub fn repeat_label(allow_repeat: bool) -> &'static str {
    if allow_repeat {
        "repeat on"
    } else {
        "repeat off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Notice;

    #[test]
    fn repeat_label_values() {
        assert_eq!(repeat_label(true), "repeat on");
        assert_eq!(repeat_label(false), "repeat off");
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_notice() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.notice = Some(Notice::warn("create groups first"));
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
