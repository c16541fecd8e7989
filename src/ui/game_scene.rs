//! Game screen: guess history, entry box, feedback line, end-of-game
//! overlays.

use crate::game::{Comparison, GuessOutcome, Proximity, SessionStatus};
use crate::input::GameUi;
use crate::settings::Theme;
use crate::ui::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Render the game screen.
pub fn render_game(frame: &mut Frame, area: Rect, ui: &GameUi, theme: Theme, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(area);

    render_header(frame, chunks[0], ui, theme);
    render_history(frame, chunks[1], ui, theme);
    render_entry(frame, chunks[2], ui, theme, now);
    render_message(frame, chunks[3], ui, theme);

    if ui.revealed.is_some() {
        render_reveal_overlay(frame, area, ui, theme);
    } else if ui.session.status.is_over() {
        render_game_over_overlay(frame, area, ui, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, ui: &GameUi, theme: Theme) {
    let session = &ui.session;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", session.difficulty.name()),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("1-{}   ", session.range_max),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "attempts {}/{}",
                session.attempts_used, session.attempt_budget
            ),
            Style::default().fg(theme.dim()),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_history(frame: &mut Frame, area: Rect, ui: &GameUi, theme: Theme) {
    let block = Block::default()
        .title(" Guesses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Show the most recent guesses that fit.
    let visible = inner.height as usize;
    let skip = ui.history.len().saturating_sub(visible);

    let mut lines = Vec::new();
    for (i, record) in ui.history.iter().enumerate().skip(skip) {
        let (hint, color) = hint_label(&record.outcome, theme);
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}: ", i + 1), Style::default().fg(theme.dim())),
            Span::styled(format!("{:<6}", record.text), Style::default().fg(Color::White)),
            Span::styled(hint, Style::default().fg(color)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_entry(frame: &mut Frame, area: Rect, ui: &GameUi, theme: Theme, now: Instant) {
    // Flash red on rejected input, reverting after the deadline. The flash
    // is gated on the session generation, so one left over from an old
    // session draws nothing.
    let border = if ui.flash.is_lit(ui.generation, now) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(theme.accent())
    };
    let block = Block::default()
        .title(" Your guess ")
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entry = Paragraph::new(Line::from(vec![
        Span::styled(ui.entry.as_str(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(theme.dim())),
    ]));
    frame.render_widget(entry, inner);
}

fn render_message(frame: &mut Frame, area: Rect, ui: &GameUi, theme: Theme) {
    let mut lines = Vec::new();
    if ui.quit_pending {
        lines.push(Line::from(Span::styled(
            "Press Esc again to give up (reveals the number)",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(outcome) = &ui.last_outcome {
        let color = if outcome.valid { Color::White } else { Color::Red };
        lines.push(Line::from(Span::styled(
            outcome_message(outcome, ui.session.range_max),
            Style::default().fg(color),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Type a number and press Enter. Esc to give up.",
            Style::default().fg(theme.dim()),
        )));
    }
    if let Some(warning) = &ui.warning {
        lines.push(Line::from(Span::styled(
            warning.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, ui: &GameUi, theme: Theme) {
    let popup = centered_rect(46, 7, area);
    frame.render_widget(Clear, popup);

    let won = ui.session.status == SessionStatus::Won;
    let (title, color) = if won {
        (" You got it! ", theme.accent())
    } else {
        (" Out of guesses ", Color::Red)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut text = Vec::new();
    if won {
        let attempts = ui.session.attempts_used;
        let noun = if attempts == 1 { "attempt" } else { "attempts" };
        text.push(Line::from(format!(
            "The number was {} - found in {} {}.",
            ui.session.secret, attempts, noun
        )));
        if ui.new_best {
            text.push(Line::from(Span::styled(
                format!("New best for {}!", ui.session.difficulty.name()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    } else {
        text.push(Line::from(format!(
            "The number was {}.",
            ui.session.secret
        )));
    }
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Enter play again   Esc menu",
        Style::default().fg(theme.dim()),
    )));
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        inner,
    );
}

fn render_reveal_overlay(frame: &mut Frame, area: Rect, ui: &GameUi, theme: Theme) {
    let popup = centered_rect(40, 6, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Gave up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim()));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let secret = ui.revealed.unwrap_or(ui.session.secret);
    let text = vec![
        Line::from(format!("The number was {secret}.")),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key for the menu",
            Style::default().fg(theme.dim()),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        inner,
    );
}

/// Short hint shown next to a guess in the history list.
fn hint_label(outcome: &GuessOutcome, theme: Theme) -> (&'static str, Color) {
    match outcome.comparison {
        Comparison::Correct => ("correct!", theme.accent()),
        Comparison::TooLow => match outcome.proximity {
            Proximity::Hot => ("too low, hot", Color::Red),
            Proximity::Warm => ("too low, warm", Color::Yellow),
            _ => ("too low, cold", Color::Blue),
        },
        Comparison::TooHigh => match outcome.proximity {
            Proximity::Hot => ("too high, hot", Color::Red),
            Proximity::Warm => ("too high, warm", Color::Yellow),
            _ => ("too high, cold", Color::Blue),
        },
        Comparison::OutOfRange => ("out of range", Color::Red),
        Comparison::NotANumber => ("not a number", Color::Red),
    }
}

/// Feedback line for the most recent submission.
pub fn outcome_message(outcome: &GuessOutcome, range_max: u32) -> String {
    match outcome.comparison {
        Comparison::NotANumber => "That's not a number.".to_string(),
        Comparison::OutOfRange => format!("Out of range: pick 1 to {range_max}."),
        Comparison::Correct => "Correct!".to_string(),
        Comparison::TooLow | Comparison::TooHigh => {
            let direction = if outcome.comparison == Comparison::TooLow {
                "Too low"
            } else {
                "Too high"
            };
            let closeness = match outcome.proximity {
                Proximity::Hot => "you're hot!",
                Proximity::Warm => "getting warm.",
                _ => "ice cold.",
            };
            format!(
                "{direction}, {closeness} {} left.",
                outcome.attempts_remaining
            )
        }
    }
}
