//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the marketing strip below the step view
const MARKETING_HEIGHT: u16 = 10;

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub ticker: Rect,
    pub step: Rect,
    pub marketing: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Box of `width` x `height` anchored to the bottom-right corner of `area`
pub fn bottom_right_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    )
}

/// Drop-down area directly below `anchor`, kept inside `bounds`
pub fn dropdown_below(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let x = anchor.x.min((bounds.x + bounds.width).saturating_sub(width));
    let y = anchor.y + anchor.height;
    let max_height = (bounds.y + bounds.height).saturating_sub(y);
    Rect::new(x, y, width, height.min(max_height))
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, show_marketing: bool) -> MainLayout {
    // header + ticker + content + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let content = main_chunks[2];
    let (step, marketing) = if show_marketing && content.height > MARKETING_HEIGHT * 2 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(MARKETING_HEIGHT)])
            .split(content);
        (chunks[0], Some(chunks[1]))
    } else {
        (content, None)
    };

    MainLayout {
        header: main_chunks[0],
        ticker: main_chunks[1],
        step,
        marketing,
        help: main_chunks[3],
    }
}
