//! TUI rendering with ratatui
//!
//! Draws the login form or the game board from the app's latest snapshot.

use super::app::{App, Screen};
use crate::core::{KeyboardState, LetterStatus, Outcome};
use crate::output::formatters::create_progress_bar;
use crate::session::{NoticeKind, Snapshot};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::Login => render_login(f, app, chunks[1]),
        Screen::Game => render_game(f, &app.snapshot, chunks[1]),
    }

    render_message(f, &app.snapshot, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn render_login<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let area = centered(area, 44, 7);

    let content = vec![
        Line::from("Enter your name to start"),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(
                app.name_input.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: log in   Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Login ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Stats and result
        ])
        .split(area);

    let board = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(13), // Grid
            Constraint::Length(5),  // Keyboard
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let grid = Paragraph::new(grid_lines(snapshot))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, board[0]);

    let keyboard = Paragraph::new(keyboard_lines(&snapshot.keyboard))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, board[1]);

    render_side_panel(f, snapshot, columns[1]);
}

fn render_side_panel(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Player stats
            Constraint::Min(6),    // Result or help
        ])
        .split(area);

    let stats = match &snapshot.player {
        Some(player) => vec![
            Line::from(vec![
                Span::raw("Player:  "),
                Span::styled(
                    player.name.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Played:  {}", player.games_played)),
            Line::from(format!("Streak:  {}", player.win_streak)),
            Line::from(Span::styled(
                create_progress_bar(player.win_streak, player.games_played, 18),
                Style::default().fg(Color::Green),
            )),
        ],
        None => vec![Line::from("Not logged in")],
    };

    let stats = Paragraph::new(stats).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(stats, chunks[0]);

    let (title, content) = match &snapshot.share {
        Some(share) => {
            let heading = match &snapshot.outcome {
                Outcome::Lost(target) => format!("The word was {target}"),
                _ => "Solved!".to_string(),
            };
            let mut lines = vec![Line::from(heading), Line::from("")];
            lines.extend(share.lines().map(|l| Line::from(l.to_string())));
            lines.push(Line::from(""));
            lines.push(Line::from("Enter: next game"));
            (" Result ", lines)
        }
        None => (
            " Keys ",
            vec![
                Line::from("A-Z        type a letter"),
                Line::from("Backspace  delete"),
                Line::from("Enter      submit guess"),
                Line::from("Ctrl+S     save stats"),
                Line::from("Ctrl+N     new game"),
                Line::from("Esc        quit"),
            ],
        ),
    };

    let panel = Paragraph::new(content)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, chunks[1]);
}

fn render_message(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (text, color) = match &snapshot.notice {
        Some(notice) => (
            notice.text.as_str(),
            match notice.kind {
                NoticeKind::Info => Color::Cyan,
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            },
        ),
        None => ("", Color::Reset),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

/// Background color for a tile
#[must_use]
pub fn status_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

/// Six board rows separated by blank lines
#[must_use]
pub fn grid_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(snapshot.grid.len() * 2);

    for (r, row) in snapshot.grid.iter().enumerate() {
        let active = r == snapshot.current_row && !snapshot.is_over();
        let mut spans = Vec::with_capacity(row.len() * 2);

        for cell in row {
            let text = match cell.letter {
                Some(letter) => format!(" {letter} "),
                None if active => " _ ".to_string(),
                None => " · ".to_string(),
            };
            spans.push(Span::styled(text, status_style(cell.status)));
            spans.push(Span::raw(" "));
        }
        spans.pop();

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    lines
}

/// On-screen keyboard colored by best-known status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .chars()
                .map(|letter| Span::styled(format!(" {letter} "), status_style(keyboard.status(letter))))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
