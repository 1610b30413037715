//! Shared layout and overlay widgets.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Narrowest playfield worth keeping the info panel beside.
const MIN_PLAYFIELD_COLS: u16 = 20;

/// Screen areas for one frame of the flight view.
pub struct GameLayout {
    pub content: Rect,
    /// One line of score readout, plus a controls hint when there is room.
    pub status_bar: Rect,
    /// Zero-sized when the terminal is too narrow for it.
    pub info_panel: Rect,
}

/// Split the bordered screen into playfield, status bar and info panel.
///
/// ```text
/// ┌─ Skyglider ─────────────────────┬─ Info ──────┐
/// │   [playfield]                   │  [info]     │
/// │ Score 3 │ Best 7                │             │
/// │ [Space] Jump  [Q] Quit          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (left, info_panel) = if inner.width >= info_panel_width + MIN_PLAYFIELD_COLS {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(MIN_PLAYFIELD_COLS), Constraint::Length(info_panel_width)])
            .split(inner);
        (cols[0], cols[1])
    } else {
        (inner, Rect { width: 0, ..inner })
    };

    // Short terminals give up the controls hint before the playfield.
    let status_lines = if left.height >= 8 { 2 } else { 1 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(status_lines)])
        .split(left);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel,
    }
}

/// Score readout: `label value` pairs separated by a thin divider, followed by
/// a free-form message.
pub fn score_line(pairs: &[(&str, u32, Color)], message: &str, message_color: Color) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, value, color)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
    }
    if !message.is_empty() {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(message.to_string(), Style::default().fg(message_color)));
    }
    Line::from(spans)
}

/// Status bar: the score line, then `[key] action` hints on the second row.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: Line<'_>, controls: &[(&str, &str)]) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 || controls.is_empty() {
        return;
    }
    let spans: Vec<Span> = controls
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}  ", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Centered banner drawn over the playfield without clearing the rest of it,
/// so the crash site stays visible around the edges.
pub fn render_banner(frame: &mut Frame, area: Rect, color: Color, title: &str, lines: &[String]) {
    let width = area.width.min(36);
    let height = (lines.len() as u16 + 4).min(area.height);
    if width < 4 || height < 3 {
        return;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let banner_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(
        lines
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::White)))),
    );

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Info panel frame with the standard " Info " title. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    if area.width < 2 || area.height < 2 {
        return Rect { width: 0, height: 0, ..area };
    }
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn layout_for(width: u16, height: u16) -> (Rect, Rect, Rect) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut areas = (Rect::default(), Rect::default(), Rect::default());
        terminal
            .draw(|f| {
                let area = f.size();
                let layout = create_game_layout(f, area, " T ", Color::Cyan, 24);
                areas = (layout.content, layout.status_bar, layout.info_panel);
            })
            .unwrap();
        areas
    }

    #[test]
    fn test_wide_terminal_keeps_info_panel() {
        let (content, status, info) = layout_for(80, 30);
        assert_eq!(info.width, 24);
        assert_eq!(content.width, 78 - 24);
        assert_eq!(status.height, 2);
    }

    #[test]
    fn test_narrow_terminal_drops_info_panel() {
        let (content, _, info) = layout_for(40, 30);
        assert_eq!(info.width, 0);
        assert_eq!(content.width, 38);
    }

    #[test]
    fn test_short_terminal_keeps_one_status_line() {
        let (content, status, _) = layout_for(80, 8);
        assert_eq!(status.height, 1);
        assert_eq!(content.height, 5);
    }

    #[test]
    fn test_score_line_text() {
        let line = score_line(
            &[("Score", 3, Color::Green), ("Best", 7, Color::Yellow)],
            "New best!",
            Color::Magenta,
        );
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Score 3 │ Best 7  New best!");
    }
}
