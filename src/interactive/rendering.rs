//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, lives and progress for the gauntlet interface.

use super::app::App;
use crate::core::LetterStatus;
use crate::game::{MAX_ATTEMPTS, NoticeKind, Phase, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Lives threshold below which the pool is rendered as a warning
const LOW_LIVES: usize = 4;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(3),  // Progress
            Constraint::Length(3),  // Lives
            Constraint::Length(3),  // Message
            Constraint::Min(8),     // Board
            Constraint::Length(5),  // Keyboard
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_progress(f, &app.session, chunks[1]);
    render_lives(f, &app.session, chunks[2]);
    render_message(f, &app.session, chunks[3]);

    if app.session.is_game_over() {
        render_game_over(f, &app.session, chunks[4].union(chunks[5]));
    } else {
        render_board(f, &app.session, chunks[4]);
        render_keyboard(f, &app.session, chunks[5]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORD GAUNTLET")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_progress(f: &mut Frame, session: &Session, area: Rect) {
    let mut spans = vec![Span::raw(format!(
        "{}/{} words found  ",
        session.completed().len(),
        session.words_total()
    ))];

    for word in session.completed() {
        spans.push(Span::styled(
            format!(" {word} "),
            Style::default().fg(Color::Black).bg(Color::Green),
        ));
        spans.push(Span::raw(" "));
    }

    let progress = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Progress ").borders(Borders::ALL));
    f.render_widget(progress, area);
}

fn render_lives(f: &mut Frame, session: &Session, area: Rect) {
    let low = session.lives_left() <= LOW_LIVES;

    let hearts: Vec<Span> = session
        .lives()
        .iter()
        .map(|life| {
            if life.is_alive() {
                Span::styled("♥ ", Style::default().fg(Color::Red))
            } else {
                Span::styled("♡ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let (title, border_color) = if low {
        (" Lives (running out!) ", Color::Red)
    } else {
        (" Lives ", Color::White)
    };

    let lives = Paragraph::new(Line::from(hearts))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(border_color)),
        );
    f.render_widget(lives, area);
}

fn render_message(f: &mut Frame, session: &Session, area: Rect) {
    let (text, style) = match session.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => Color::White,
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            (
                notice.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            "Type letters | Enter: submit | Backspace: delete | Esc: quit".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_board(f: &mut Frame, session: &Session, area: Rect) {
    let Some(secret_len) = session.secret_len() else {
        return;
    };

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for guess in session.guesses() {
        let Some(feedback) = session.feedback_for(guess) else {
            continue;
        };
        let spans: Vec<Span> = guess
            .text()
            .chars()
            .zip(feedback.statuses())
            .flat_map(|(c, &status)| {
                [
                    Span::styled(format!(" {c} "), cell_style(status)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // Active input row
    if session.guesses().len() < MAX_ATTEMPTS && !session.is_transitioning() {
        let typed: Vec<char> = session.input().chars().collect();
        let spans: Vec<Span> = (0..secret_len)
            .flat_map(|i| {
                let cell = match typed.get(i) {
                    Some(c) => Span::styled(
                        format!(" {c} "),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    ),
                    None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                };
                [cell, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // Pad to the full board height with empty rows
    while lines.len() < MAX_ATTEMPTS {
        let spans: Vec<Span> = (0..secret_len)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, session: &Session, area: Rect) {
    let status = session.keyboard_status();

    let mut lines = Vec::with_capacity(3);
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = Vec::new();
        if i == 2 {
            spans.push(Span::styled(" ⏎ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
        for key in row.chars() {
            let style = status
                .get(&(key as u8))
                .map_or(Style::default().fg(Color::White), |&s| cell_style(s));
            spans.push(Span::styled(format!(" {key} "), style));
            spans.push(Span::raw(" "));
        }
        if i == 2 {
            spans.push(Span::styled(" ⌫ ", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_game_over(f: &mut Frame, session: &Session, area: Rect) {
    let (headline, color) = match session.phase() {
        Phase::Won => ("🎉  A L L   W O R D S   F O U N D !  🎉", Color::Green),
        _ => ("💀  O U T   O F   L I V E S  💀", Color::Red),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Words resolved: {}/{}",
            session.completed().len(),
            session.words_total()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' to play again, 'q' to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(panel, area);
}

const fn cell_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}
