use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Screen corner a popup is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopRight,
    BottomRight,
}

/// Full-width strip across the top of the frame
pub fn top_banner(frame_area: Rect, height: u16) -> Rect {
    Rect {
        x: frame_area.x,
        y: frame_area.y,
        width: frame_area.width,
        height: height.min(frame_area.height),
    }
}

/// Popup anchored to a corner, `margin` cells away from both edges
pub fn corner_popup(
    frame_area: Rect,
    width: u16,
    height: u16,
    margin: u16,
    corner: Corner,
) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    let height = height.min(frame_area.height.saturating_sub(margin * 2));

    let x = frame_area.x + frame_area.width.saturating_sub(width + margin);
    let y = match corner {
        Corner::TopRight => frame_area.y + margin,
        Corner::BottomRight => frame_area.y + frame_area.height.saturating_sub(height + margin),
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn test_top_banner_spans_width() {
        let banner = top_banner(frame(80, 24), 3);
        assert_eq!(banner, Rect::new(0, 0, 80, 3));
    }

    #[test]
    fn test_top_banner_clamped_to_short_frame() {
        let banner = top_banner(frame(80, 2), 3);
        assert_eq!(banner.height, 2);
    }

    #[test]
    fn test_corner_popup_top_right() {
        let popup = corner_popup(frame(100, 30), 20, 3, 2, Corner::TopRight);
        assert_eq!(popup, Rect::new(78, 2, 20, 3));
    }

    #[test]
    fn test_corner_popup_bottom_right() {
        let popup = corner_popup(frame(100, 30), 20, 3, 2, Corner::BottomRight);
        assert_eq!(popup, Rect::new(78, 25, 20, 3));
    }

    #[test]
    fn test_corner_popup_too_wide_is_clamped() {
        let popup = corner_popup(frame(30, 10), 50, 3, 2, Corner::TopRight);
        assert_eq!(popup.width, 26);
        assert_eq!(popup.x, 2);
    }

    #[test]
    fn test_corner_popup_respects_frame_offset() {
        let area = Rect::new(10, 5, 40, 20);
        let popup = corner_popup(area, 10, 3, 1, Corner::BottomRight);
        assert_eq!(popup, Rect::new(39, 21, 10, 3));
    }

    #[test]
    fn test_inset_rect_basic() {
        let inset = inset_rect(frame(100, 50), 2, 1);
        assert_eq!(inset, Rect::new(2, 1, 96, 48));
    }

    #[test]
    fn test_inset_rect_saturates() {
        let inset = inset_rect(frame(3, 1), 2, 1);
        assert_eq!(inset.width, 0);
        assert_eq!(inset.height, 0);
    }
}
