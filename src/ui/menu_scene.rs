//! Difficulty menu with the high-score panel.

use crate::game::Difficulty;
use crate::highscores::HighScoreTable;
use crate::input::MenuUi;
use crate::settings::Theme;
use crate::ui::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the menu screen.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &MenuUi,
    scores: &HighScoreTable,
    theme: Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(2),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "HOT & COLD",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  guess the secret number", Style::default().fg(theme.dim())),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(28)])
        .split(chunks[1]);

    render_difficulty_list(frame, body[0], menu, theme);
    render_score_panel(frame, body[1], scores, theme);
    render_footer(frame, chunks[2], menu, theme);

    if menu.confirm_reset {
        render_reset_confirm(frame, area, theme);
    }
}

fn render_difficulty_list(frame: &mut Frame, area: Rect, menu: &MenuUi, theme: Theme) {
    let block = Block::default()
        .title(" Difficulty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, diff) in Difficulty::ALL.iter().enumerate() {
        let selected = i == menu.selected;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<8}", diff.name()), style),
            Span::styled(
                format!("1-{:<5} {} guesses", diff.range_max(), diff.attempt_budget()),
                Style::default().fg(theme.dim()),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_score_panel(frame: &mut Frame, area: Rect, scores: &HighScoreTable, theme: Theme) {
    let block = Block::default()
        .title(" Best Wins ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for diff in Difficulty::ALL {
        let best = match scores.get(diff) {
            Some(attempts) if attempts == 1 => "1 attempt".to_string(),
            Some(attempts) => format!("{attempts} attempts"),
            None => "--".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", diff.name()), Style::default().fg(Color::White)),
            Span::styled(best, Style::default().fg(theme.accent())),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, area: Rect, menu: &MenuUi, theme: Theme) {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Up/Down select   Enter play   t theme ({})   r reset scores   q quit",
            theme.name()
        ),
        Style::default().fg(theme.dim()),
    ))];
    if let Some(warning) = &menu.warning {
        lines.push(Line::from(Span::styled(
            warning.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_reset_confirm(frame: &mut Frame, area: Rect, theme: Theme) {
    let popup = centered_rect(44, 5, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Reset High Scores ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let text = vec![
        Line::from("Clear all recorded best wins?"),
        Line::from(Span::styled(
            "y/Enter confirm   any other key cancel",
            Style::default().fg(theme.dim()),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        inner,
    );
}
