use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use numerology_engine::{meaning_for, Reading};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    BirthDate,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::BirthDate,
            Field::BirthDate => Field::Name,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Field::Name => "Full Name",
            Field::BirthDate => "Birth Date (YYYY-MM-DD)",
        }
    }
}

pub struct App {
    pub name_input: String,
    pub date_input: String,
    pub focus: Field,
    pub reading: Option<Reading>,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            date_input: String::new(),
            focus: Field::Name,
            reading: None,
            status: None,
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name_input,
            Field::BirthDate => &mut self.date_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_input().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_input().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Validate both inputs and compute the reading, or report why not.
    pub fn submit(&mut self) {
        match Reading::from_raw(&self.name_input, &self.date_input) {
            Ok(reading) => {
                self.status = Some(format!("✓ Reading for {}", reading.full_name));
                self.reading = Some(reading);
            }
            Err(e) => {
                debug!("form rejected: {}", e);
                self.status = Some(format!("✗ {}", e));
                self.reading = None;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = App::new();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal UI failed")
}

/// Draw and handle keys until Esc / Ctrl+C. Any draw or read error ends the loop.
fn run_app<B, E>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: E) -> io::Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = next_event()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => app.clear(),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => app.next_field(),
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Length(3), // Birth date input
            Constraint::Min(0),    // Reading
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_input(f, chunks[0], app, Field::Name, &app.name_input);
    render_input(f, chunks[1], app, Field::BirthDate, &app.date_input);
    render_reading(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn render_input(f: &mut Frame, area: Rect, app: &App, field: Field, value: &str) {
    let border_style = if app.focus == field {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(value.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(field.title())
            .border_style(border_style),
    );

    f.render_widget(input, area);
}

fn render_reading(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Reading")
        .border_style(Style::default().fg(Color::Cyan));

    let Some(reading) = &app.reading else {
        let hint = Paragraph::new("Fill in both fields and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} · {}", reading.full_name, reading.birth_date),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (label, number) in reading.profile.entries() {
        let number_style = if numerology_engine::is_master_number(number) {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::White)),
            Span::styled(format!("{:>2}  ", number), number_style),
        ];
        if let Ok(meaning) = meaning_for(number) {
            spans.push(Span::styled(meaning.title, Style::default().fg(Color::Green)));
            spans.push(Span::raw(format!(" - {}", meaning.description)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12}", "Sun Sign"), Style::default().fg(Color::White)),
        Span::styled(
            format!("{} {}", reading.sun_sign.symbol(), reading.sun_sign),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {} · {}",
            reading.element.as_str(),
            reading.sun_sign.date_range()
        )),
    ]));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Tab: switch field  Enter: calculate  Ctrl+L: clear  Esc: quit",
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(status) = &app.status {
        let color = if app.reading.is_some() { Color::Green } else { Color::Red };
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(status.clone(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 30)).unwrap()
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = App::new();
        type_str(&mut app, "Ada");
        app.next_field();
        type_str(&mut app, "1815-12-10");

        assert_eq!(app.name_input, "Ada");
        assert_eq!(app.date_input, "1815-12-10");

        app.backspace();
        assert_eq!(app.date_input, "1815-12-1");
    }

    #[test]
    fn test_submit_valid_form() {
        let mut app = App::new();
        type_str(&mut app, "John Doe");
        app.next_field();
        type_str(&mut app, "1990-01-01");
        app.submit();

        let reading = app.reading.as_ref().unwrap();
        assert_eq!(reading.profile.life_path, 3);
        assert!(app.status.as_deref().unwrap().starts_with('✓'));
    }

    #[test]
    fn test_submit_invalid_form_clears_reading() {
        let mut app = App::new();
        type_str(&mut app, "John Doe");
        app.next_field();
        type_str(&mut app, "1990-01-01");
        app.submit();
        assert!(app.reading.is_some());

        type_str(&mut app, "x");
        app.submit();
        assert!(app.reading.is_none());
        assert!(app.status.as_deref().unwrap().contains("invalid birth date"));
    }

    #[test]
    fn test_clear_resets_form() {
        let mut app = App::new();
        type_str(&mut app, "Ada");
        app.next_field();
        app.clear();

        assert_eq!(app.focus, Field::Name);
        assert!(app.name_input.is_empty());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_keys_drive_form_until_escape() {
        let mut terminal = test_terminal();
        let mut app = App::new();

        let mut events = "John Doe"
            .chars()
            .map(KeyCode::Char)
            .chain([KeyCode::Tab])
            .chain("1990-01-01".chars().map(KeyCode::Char))
            .chain([KeyCode::Enter, KeyCode::Esc])
            .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));

        let res = run_app(&mut terminal, &mut app, || {
            events
                .next()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
        });

        assert!(res.is_ok());
        assert_eq!(app.reading.as_ref().unwrap().profile.life_path, 3);
    }

    #[test]
    fn test_event_read_failure_is_returned() {
        let mut terminal = test_terminal();
        let mut app = App::new();

        let res = run_app(&mut terminal, &mut app, || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty closed"))
        });

        assert_eq!(res.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
