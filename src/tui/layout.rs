use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Page chrome around the active screen
pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
    pub footer_area: Rect,
}

impl AppLayout {
    /// Stack, top to bottom:
    /// - Header: 1 row (brand + navigation)
    /// - Body: everything left (at least 3 rows)
    /// - Status bar: 1 row
    /// - Footer: 1 row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            body_area: chunks[1],
            status_area: chunks[2],
            footer_area: chunks[3],
        }
    }
}

/// Form column centred in the body, at most `max_width` wide
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
