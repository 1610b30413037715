//! Renders the playfield, status bar and info panel.

use crate::core::config::GameConfig;
use crate::core::game_state::{GamePhase, GameState};
use crate::ui::game_common::{
    create_game_layout, render_banner, render_info_panel_frame, render_status_bar, score_line,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: [(&str, &str); 2] = [("[Space/Click]", "Jump"), ("[Q]", "Quit")];

/// What occupies one terminal cell of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    /// Rim of a pipe next to the gap.
    PipeLip,
    Ground,
    Plane,
}

/// Plane glyph by pitch.
pub fn plane_glyph(tilt: f64) -> &'static str {
    if tilt < -10.0 {
        "▲"
    } else if tilt > 30.0 {
        "▼"
    } else {
        "►"
    }
}

/// Maps world units onto a grid of `cols` x `rows` cells.
pub struct Viewport {
    cell_w: f64,
    cell_h: f64,
}

impl Viewport {
    pub fn new(config: &GameConfig, cols: u16, rows: u16) -> Self {
        Self {
            cell_w: config.canvas_width / cols.max(1) as f64,
            cell_h: config.canvas_height / rows.max(1) as f64,
        }
    }

    /// World-space center of a cell.
    fn center(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.cell_w,
            (row as f64 + 0.5) * self.cell_h,
        )
    }

    /// Cells covered by a world rectangle; always at least one cell.
    fn span(&self, x: f64, y: f64, w: f64, h: f64) -> (u16, u16, u16, u16) {
        let col0 = (x / self.cell_w).floor().max(0.0) as u16;
        let row0 = (y / self.cell_h).floor().max(0.0) as u16;
        let col1 = (((x + w) / self.cell_w).ceil() as u16)
            .saturating_sub(1)
            .max(col0);
        let row1 = (((y + h) / self.cell_h).ceil() as u16)
            .saturating_sub(1)
            .max(row0);
        (col0, row0, col1, row1)
    }
}

/// Classify a playfield cell. The plane wins over everything else.
pub fn cell_at(state: &GameState, config: &GameConfig, view: &Viewport, col: u16, row: u16) -> Cell {
    let plane = &state.plane;
    let (c0, r0, c1, r1) = view.span(plane.x, plane.y, plane.width, plane.height);
    if (c0..=c1).contains(&col) && (r0..=r1).contains(&row) {
        return Cell::Plane;
    }

    let (wx, wy) = view.center(col, row);
    if wy >= config.floor_y() {
        return Cell::Ground;
    }

    for obstacle in &state.obstacles {
        if wx < obstacle.x || wx >= obstacle.right() {
            continue;
        }
        if wy < obstacle.top_height || wy >= obstacle.bottom_y {
            let near_gap = (wy - obstacle.top_height).abs() < view.cell_h
                || (wy - obstacle.bottom_y).abs() < view.cell_h;
            return if near_gap { Cell::PipeLip } else { Cell::Pipe };
        }
    }

    Cell::Sky
}

pub fn render_flight(frame: &mut Frame, area: Rect, state: &GameState, config: &GameConfig) {
    let layout = create_game_layout(frame, area, " Skyglider ", Color::Cyan, 24);

    render_play_area(frame, layout.content, state, config);
    render_status(frame, layout.status_bar, state);
    render_info_panel(frame, layout.info_panel, state);

    match state.phase {
        GamePhase::Idle => render_banner(
            frame,
            layout.content,
            Color::Yellow,
            "SKYGLIDER",
            &[
                format!("Welcome, {}", state.player_name),
                "Press Space to take off".to_string(),
            ],
        ),
        GamePhase::GameOver => {
            let mut lines = vec![format!("You passed {} pipes.", state.score)];
            if state.new_best {
                lines.push("New best!".to_string());
            }
            lines.push("Press Space to fly again".to_string());
            render_banner(frame, layout.content, Color::Red, "CRASH!", &lines);
        }
        GamePhase::Running => {}
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, state: &GameState, config: &GameConfig) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let view = Viewport::new(config, area.width, area.height);
    let mut lines = Vec::with_capacity(area.height as usize);

    for row in 0..area.height {
        let spans: Vec<Span> = (0..area.width)
            .map(|col| match cell_at(state, config, &view, col, row) {
                Cell::Plane => Span::styled(
                    plane_glyph(state.plane.tilt),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::PipeLip => Span::styled("▓", Style::default().fg(Color::LightGreen)),
                Cell::Ground => Span::styled("▒", Style::default().fg(Color::Rgb(139, 90, 43))),
                Cell::Sky => Span::raw(" "),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &GameState) {
    let best = state.best.player.max(state.score);
    let line = match state.phase {
        GamePhase::Idle => score_line(
            &[("Best", state.best.player, Color::Yellow)],
            "Press Space to start!",
            Color::Yellow,
        ),
        GamePhase::Running => score_line(
            &[("Score", state.score, Color::Green), ("Best", best, Color::Yellow)],
            "",
            Color::Reset,
        ),
        GamePhase::GameOver if state.new_best => score_line(
            &[("Score", state.score, Color::Red), ("Best", best, Color::Yellow)],
            "New best!",
            Color::Magenta,
        ),
        GamePhase::GameOver => score_line(
            &[("Score", state.score, Color::Red), ("Best", best, Color::Yellow)],
            "Space to restart",
            Color::Red,
        ),
    };
    render_status_bar(frame, area, line, &CONTROLS);
}

fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state.player_name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(state.score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Your best: ", label),
            Span::styled(
                state.best.player.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" All-time: ", label),
            Span::styled(
                state.best.global.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Run: ", label),
            Span::raw(state.runs.to_string()),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::raw(state.obstacles.len().to_string()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
