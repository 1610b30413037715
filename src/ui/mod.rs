pub mod flight_scene;
pub mod game_common;

use crate::core::config::GameConfig;
use crate::core::game_state::GameState;
use ratatui::Frame;

/// Draw one frame. Reads state only.
pub fn draw_ui(frame: &mut Frame, state: &GameState, config: &GameConfig) {
    let area = frame.size();
    flight_scene::render_flight(frame, area, state, config);
}
