//! Notification rendering
//!
//! Provides functions for rendering notification overlays in the UI.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::Notification;
use super::notification_types::NotificationPosition;
use crate::theme;
use crate::widgets::popup::{self, Corner};

/// Distance between a corner toast and the frame edges
const TOAST_MARGIN: u16 = 2;
/// 1 line content + 2 borders
const NOTIFICATION_HEIGHT: u16 = 3;
const CLOSE_HINT: &str = "[x] ";

/// Build the single content line: message followed by the close hint
fn content_line(notif: &Notification) -> Line<'static> {
    let style = notif.style();
    let text_style = Style::default().fg(style.fg).bg(style.bg);
    Line::from(vec![
        Span::styled(format!(" {} ", notif.message), text_style),
        Span::styled(
            CLOSE_HINT,
            text_style.add_modifier(theme::notification::CLOSE_HINT),
        ),
    ])
}

/// Area the notification occupies for its position
fn notification_area(frame_area: Rect, position: NotificationPosition, content_width: u16) -> Rect {
    // 2 borders around the content
    let width = content_width.saturating_add(2);

    match position {
        NotificationPosition::Top => popup::top_banner(frame_area, NOTIFICATION_HEIGHT),
        NotificationPosition::TopRight => popup::corner_popup(
            frame_area,
            width,
            NOTIFICATION_HEIGHT,
            TOAST_MARGIN,
            Corner::TopRight,
        ),
        NotificationPosition::BottomRight => popup::corner_popup(
            frame_area,
            width,
            NOTIFICATION_HEIGHT,
            TOAST_MARGIN,
            Corner::BottomRight,
        ),
    }
}

/// Render the notification overlay at its requested position
///
/// This function should be called after rendering the main UI so the
/// notification appears on top of other content. Returns the area drawn,
/// or None when nothing is visible or the frame is too small.
pub fn render_notification(frame: &mut Frame, notification: Option<&Notification>) -> Option<Rect> {
    let notif = notification?;

    let line = content_line(notif);
    let content_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    let area = notification_area(frame.area(), notif.position, content_width);

    // Don't render if area is too small
    if area.width < 5 || area.height < 3 {
        return None;
    }

    // Clear background for floating effect
    popup::clear_area(frame, area);

    let style = notif.style();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let alignment = match notif.position {
        NotificationPosition::Top => Alignment::Center,
        NotificationPosition::TopRight | NotificationPosition::BottomRight => Alignment::Left,
    };

    let paragraph = Paragraph::new(line).alignment(alignment).block(block);
    frame.render_widget(paragraph, area);

    Some(area)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
