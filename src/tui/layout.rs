// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Slot Banner (4 rows)                              |
// +----------------+----------------+----------------+
// | Names (35%)    | Drawn (30%)    | Groups (35%)   |
// +----------------+----------------+----------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: counts, mode, field values, notices.
    pub status_bar: Rect,
    /// Second row: the slot-machine display.
    pub slot_banner: Rect,
    /// Left column: name list preview with duplicate badges.
    pub list_panel: Rect,
    /// Middle column: accumulated draw results.
    pub results_panel: Rect,
    /// Right column: group cards.
    pub groups_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | slot(4) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let slot_banner = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    // Horizontal: names (35%) | drawn (30%) | groups (35%)
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(middle);

    AppLayout {
        status_bar,
        slot_banner,
        list_panel: columns[0],
        results_panel: columns[1],
        groups_panel: columns[2],
        help_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_fill_the_full_height() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = build_layout(area);

        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.slot_banner.height, 4);
        assert_eq!(layout.help_bar.height, 1);

        let middle_height = layout.list_panel.height;
        assert_eq!(
            layout.status_bar.height
                + layout.slot_banner.height
                + middle_height
                + layout.help_bar.height,
            area.height
        );
    }

    #[test]
    fn columns_share_the_middle_row() {
        let layout = build_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.list_panel.y, layout.results_panel.y);
        assert_eq!(layout.results_panel.y, layout.groups_panel.y);
        assert_eq!(
            layout.list_panel.width + layout.results_panel.width + layout.groups_panel.width,
            100
        );
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let layout = build_layout(Rect::new(0, 0, 10, 4));
        // Zones degrade gracefully; nothing overflows the area.
        assert!(layout.help_bar.bottom() <= 4);
    }
}
