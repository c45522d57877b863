use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameState;
use crate::snake::DeathReason;

/// Centered popup shown while the session is paused.
pub fn render_pause(frame: &mut Frame, field: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "PAUSED",
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Space resumes", Style::new().fg(theme.menu_footer)),
    ];
    render_popup(frame, field, " Paused ", lines, theme);
}

/// Centered popup shown when the round has ended, with the cause of
/// death and the final tally.
pub fn render_game_over(frame: &mut Frame, field: Rect, state: &GameState, theme: &Theme) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "GAME OVER",
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(death_line(state.death_reason)),
        Line::from(format!("Score {}   Best {}", state.score, state.high_score)),
    ];
    if state.new_record {
        lines.push(Line::styled(
            "New high score!",
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "R restarts, Q quits",
        Style::new().fg(theme.menu_footer),
    ));
    render_popup(frame, field, " Game over ", lines, theme);
}

fn death_line(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "You hit the wall",
        Some(DeathReason::SelfCollision) => "You ran into yourself",
        None => "The round is over",
    }
}

fn render_popup(frame: &mut Frame, field: Rect, title: &str, lines: Vec<Line<'_>>, theme: &Theme) {
    let text_width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .max(title.width());
    let width = u16::try_from(text_width).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(field, width, height);

    let block = Block::bordered()
        .title(title.to_owned())
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.border_bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}

fn centered_popup(container: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(container.width);
    let height = height.min(container.height);
    let x = container.x + (container.width - width) / 2;
    let y = container.y + (container.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::snake::DeathReason;

    use super::{centered_popup, death_line};

    #[test]
    fn death_line_names_the_cause() {
        assert_eq!(
            death_line(Some(DeathReason::WallCollision)),
            "You hit the wall"
        );
        assert_eq!(
            death_line(Some(DeathReason::SelfCollision)),
            "You ran into yourself"
        );
        assert_eq!(death_line(None), "The round is over");
    }

    #[test]
    fn popup_is_centered_in_the_field() {
        let field = Rect::new(10, 5, 82, 32);

        assert_eq!(centered_popup(field, 30, 8), Rect::new(36, 17, 30, 8));
    }

    #[test]
    fn popup_never_outgrows_the_field() {
        let field = Rect::new(0, 0, 20, 6);

        assert_eq!(centered_popup(field, 40, 10), Rect::new(0, 0, 20, 6));
    }
}
