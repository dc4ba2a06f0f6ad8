use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::gallery_state::GalleryApp;
use super::stories::STORIES;
use crate::notification::{Notification, render_notification};
use crate::theme;
use crate::widgets::popup;

/// Width of the story list sidebar
const SIDEBAR_WIDTH: u16 = 28;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn build_hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

fn render_story_list(app: &GalleryApp, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = STORIES
        .iter()
        .enumerate()
        .map(|(i, story)| {
            if i == app.selected {
                Line::from(Span::styled(
                    format!("> {}", story.title),
                    theme::gallery::STORY_SELECTED,
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", story.title),
                    theme::gallery::STORY,
                ))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::gallery::BORDER))
        .title(Span::styled(" Stories ", theme::gallery::TITLE))
        .style(Style::default().bg(theme::gallery::BACKGROUND));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), theme::gallery::LABEL),
        Span::styled(value, theme::gallery::VALUE),
    ])
}

fn render_status_panel(
    app: &GalleryApp,
    current: Option<&Notification>,
    frame: &mut Frame,
    area: Rect,
) {
    let story = app.selected_story();
    let mut lines = vec![
        field("Story", story.name.to_string()),
        field("Type", story.message_type.to_string()),
        field(
            "Position",
            story.resolved_position(app.default_position).to_string(),
        ),
        field(
            "Auto-hide",
            if app.auto_hide { "on" } else { "off" }.to_string(),
        ),
        Line::default(),
    ];
    lines.push(match current {
        Some(notif) => field("Visible", format!("\"{}\"", notif.message)),
        None => field("Visible", "-".to_string()),
    });

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::gallery::BORDER))
        .title(Span::styled(
            format!(" {} ", story.title),
            theme::gallery::TITLE,
        ))
        .style(Style::default().bg(theme::gallery::PANEL_BACKGROUND));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), popup::inset_rect(inner, 1, 1));
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let hints = hints!["\u{2190}/\u{2192}" => "Story", "Enter" => "Replay", "x" => "Dismiss", "a" => "Auto-hide", "q" => "Quit"];
    frame.render_widget(Paragraph::new(Line::from(build_hint_spans(&hints))), area);
}

impl GalleryApp {
    pub fn render(&self, frame: &mut Frame) {
        let current = self.current_notification();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());
        let [list_area, panel_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                .areas(main_area);

        render_story_list(self, frame, list_area);
        render_status_panel(self, current.as_ref(), frame, panel_area);
        render_help_line(frame, help_area);

        // Overlay last so it sits on top of the gallery
        render_notification(frame, current.as_ref());
    }
}

#[cfg(test)]
#[path = "gallery_render_tests.rs"]
mod gallery_render_tests;
