use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-row status line above the playfield.
pub fn render(frame: &mut Frame, area: Rect, state: &GameState, theme: &Theme) {
    frame.render_widget(Paragraph::new(status_line(state, theme)), area);
}

/// Score, session best, and the live movement rate with one decimal.
fn status_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_label);
    let value = Style::new().fg(theme.hud_value);

    Line::from(vec![
        Span::styled(" Score ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(state.high_score.to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(format!("{:.1}", state.current_speed()), value),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::GameState;

    use super::status_line;

    fn text_of(line: &ratatui::text::Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn status_line_shows_score_record_and_speed() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };
        let mut state = GameState::new_with_seed(bounds, 1);
        state.score = 12;
        state.high_score = 30;

        let line = status_line(&state, &THEME_CLASSIC);

        assert_eq!(text_of(&line), " Score 12  Hi 30  Speed 9.7");
    }

    #[test]
    fn speed_renders_with_one_decimal_at_start() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };
        let state = GameState::new_with_seed(bounds, 1);

        let line = status_line(&state, &THEME_CLASSIC);

        assert!(text_of(&line).ends_with("Speed 8.0"));
    }
}
