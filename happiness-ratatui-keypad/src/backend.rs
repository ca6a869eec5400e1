//! Ratatui front-end implementation for the Frontend trait.
//!
//! Provides a calculator-style terminal UI: a screen showing the active
//! question and the typed digits, an on-screen keypad, and a result screen.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use happiness::{EntryMode, Frontend, HappinessIndex, Phase, Session, SessionError};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;

/// Error type for the Ratatui front-end.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the calculation (e.g., pressed Esc).
    #[error("Calculation cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Drawing to the terminal failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The session does not use keypad entry.
    #[error("The keypad front-end needs keypad entry, but the session uses {0} entry")]
    UnsupportedEntry(EntryMode),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    /// Color of the digits on the calculator screen.
    pub display: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            display: Color::LightGreen,
        }
    }
}

/// A key on the on-screen keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKey {
    Digit(u8),
    Delete,
    Clear,
    Enter,
}

impl PadKey {
    fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Clear => "C".to_string(),
            Self::Enter => "ENTER".to_string(),
        }
    }

    fn press(self, session: &mut Session) -> Result<(), SessionError> {
        match self {
            Self::Digit(d) => session.append_digit(d).map(|_| ()),
            Self::Delete => session.delete_last_digit(),
            Self::Clear => session.clear_input(),
            Self::Enter => session.submit_answer(),
        }
    }
}

/// Digit rows of the keypad; a full-width ENTER row sits below them.
const KEYPAD: [[PadKey; 3]; 4] = [
    [PadKey::Digit(7), PadKey::Digit(8), PadKey::Digit(9)],
    [PadKey::Digit(4), PadKey::Digit(5), PadKey::Digit(6)],
    [PadKey::Digit(1), PadKey::Digit(2), PadKey::Digit(3)],
    [PadKey::Digit(0), PadKey::Delete, PadKey::Clear],
];

const ENTER_ROW: usize = KEYPAD.len();

fn key_at(row: usize, col: usize) -> PadKey {
    KEYPAD
        .get(row)
        .and_then(|keys| keys.get(col))
        .copied()
        .unwrap_or(PadKey::Enter)
}

/// Ratatui-based keypad front-end.
///
/// This front-end presents one question at a time on a calculator-style
/// screen. Digits are typed on the keyboard or on the on-screen keypad.
#[derive(Debug, Clone)]
pub struct RatatuiKeypad {
    /// Title shown at the top of the calculator.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiKeypad {
    /// Create a new keypad front-end with default settings.
    pub fn new() -> Self {
        Self {
            title: "Happiness Index Calculator".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the calculator.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Continue,
    /// Leave normally, keeping the last score.
    Quit,
    /// Leave and report cancellation.
    Cancel,
}

/// Presentation state that is not part of the session.
#[derive(Debug, Clone)]
pub(crate) struct KeypadState {
    /// Highlighted keypad cell (row, column).
    pub(crate) highlight: (usize, usize),
    /// Highlighted entry in the group list.
    pub(crate) group_cursor: usize,
    /// Message from the last rejected transition.
    pub(crate) error_message: Option<String>,
    /// Last computed score.
    pub(crate) last_score: Option<HappinessIndex>,
    pub(crate) theme: Theme,
    pub(crate) title: String,
}

impl KeypadState {
    pub(crate) fn new(theme: Theme, title: String) -> Self {
        Self {
            highlight: (0, 0),
            group_cursor: 0,
            error_message: None,
            last_score: None,
            theme,
            title,
        }
    }

    fn highlighted_key(&self) -> PadKey {
        key_at(self.highlight.0, self.highlight.1)
    }

    fn apply(&mut self, session: &mut Session, result: Result<(), SessionError>) {
        match result {
            Ok(()) => {
                self.error_message = None;
                if let Some(score) = session.score() {
                    self.last_score = Some(score);
                }
            }
            Err(err) if err.is_user_facing() => {
                tracing::debug!(%err, "transition rejected");
                self.error_message = Some(err.to_string());
            }
            Err(err) => tracing::warn!(%err, "front-end issued an invalid transition"),
        }
    }

    fn move_highlight(&mut self, key: KeyCode) {
        let (row, col) = self.highlight;
        self.highlight = match key {
            KeyCode::Up => (row.saturating_sub(1), col),
            KeyCode::Down => ((row + 1).min(ENTER_ROW), col),
            KeyCode::Left => (row, col.saturating_sub(1)),
            KeyCode::Right => (row, (col + 1).min(2)),
            _ => (row, col),
        };
    }

    /// Translate one key press into a session transition.
    pub(crate) fn handle_key(&mut self, session: &mut Session, key: KeyCode) -> Control {
        match session.phase() {
            Phase::SelectingGroup => {
                let groups = session.catalog().groups();
                match key {
                    KeyCode::Esc => return Control::Cancel,
                    KeyCode::Up => self.group_cursor = self.group_cursor.saturating_sub(1),
                    KeyCode::Down => {
                        if self.group_cursor + 1 < groups.len() {
                            self.group_cursor += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let group = groups.get(self.group_cursor).copied();
                        let result = session.select_group(group);
                        self.apply(session, result);
                        if session.phase() == Phase::Answering {
                            self.highlight = (0, 0);
                        }
                    }
                    _ => {}
                }
            }
            Phase::Answering => match key {
                KeyCode::Esc => return Control::Cancel,
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let result = PadKey::Digit(c as u8 - b'0').press(session);
                    self.apply(session, result);
                }
                KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => {
                    let result = PadKey::Clear.press(session);
                    self.apply(session, result);
                }
                KeyCode::Backspace => {
                    let result = PadKey::Delete.press(session);
                    self.apply(session, result);
                }
                KeyCode::Enter => {
                    let result = PadKey::Enter.press(session);
                    self.apply(session, result);
                }
                KeyCode::Char(' ') => {
                    let result = self.highlighted_key().press(session);
                    self.apply(session, result);
                }
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    self.move_highlight(key)
                }
                _ => {}
            },
            Phase::Complete => match key {
                KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
                KeyCode::Enter | KeyCode::Char('r') => {
                    session.restart();
                    self.error_message = None;
                    self.group_cursor = 0;
                    self.highlight = (0, 0);
                }
                _ => {}
            },
        }
        Control::Continue
    }
}

fn block<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(title)
        .title_style(Style::default().fg(theme.secondary))
}

pub(crate) fn draw_ui(frame: &mut Frame, state: &KeypadState, session: &Session) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(2), // Help
        ])
        .split(area);

    let title = Paragraph::new(state.title.clone())
        .style(Style::default().fg(state.theme.primary).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(state.theme.border)),
        );
    frame.render_widget(title, chunks[0]);

    match session.phase() {
        Phase::SelectingGroup => draw_group_selection(frame, chunks[1], state, session),
        Phase::Answering => draw_question(frame, chunks[1], state, session),
        Phase::Complete => draw_result(frame, chunks[1], state, session),
    }

    let help_text = match session.phase() {
        Phase::SelectingGroup => "↑/↓: Select  Enter: Start  Esc: Cancel",
        Phase::Answering => {
            "0-9: Type  Backspace: ⌫  c: Clear  Enter: Submit  Arrows+Space: Keypad  Esc: Cancel"
        }
        Phase::Complete => "Enter/r: New calculation  q/Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(state.theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(state.theme.border)),
        );
    frame.render_widget(help, chunks[2]);
}

fn draw_group_selection(frame: &mut Frame, area: Rect, state: &KeypadState, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Min(5),    // Options
            Constraint::Length(2), // Error
        ])
        .split(area);

    let prompt = Paragraph::new("Who are you?")
        .style(Style::default().fg(state.theme.text).bold())
        .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[0]);

    let items: Vec<ListItem> = session
        .catalog()
        .groups()
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let style = if i == state.group_cursor {
                Style::default().fg(state.theme.highlight).bold()
            } else {
                Style::default().fg(state.theme.text)
            };
            ListItem::new(format!("  {group}")).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block(" Select your group ", &state.theme))
        .highlight_symbol("► ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.group_cursor));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    draw_error(frame, chunks[2], state);
}

fn draw_question(frame: &mut Frame, area: Rect, state: &KeypadState, session: &Session) {
    let Some(question) = session.current_question() else {
        return;
    };
    let (number, total) = session.progress().unwrap_or((0, 0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Screen
            Constraint::Length(1),  // Error
            Constraint::Length(15), // Keypad
            Constraint::Min(0),
        ])
        .split(area);

    let screen_block = block(format!(" Question {number} of {total} "), &state.theme);
    let inner = screen_block.inner(chunks[0]);
    frame.render_widget(screen_block, chunks[0]);

    let screen_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(2),    // Prompt
            Constraint::Length(1), // Range
            Constraint::Length(1), // Display
        ])
        .split(inner);

    let prompt = Paragraph::new(question.prompt().to_string())
        .style(Style::default().fg(state.theme.display))
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, screen_rows[0]);

    let range = Paragraph::new(format!("Range: {}", question.range_text()))
        .style(Style::default().fg(state.theme.highlight));
    frame.render_widget(range, screen_rows[1]);

    let display = Paragraph::new(session.keypad().display().to_string())
        .style(Style::default().fg(state.theme.text).bold())
        .alignment(Alignment::Right);
    frame.render_widget(display, screen_rows[2]);

    draw_error(frame, chunks[1], state);
    draw_keypad(frame, chunks[2], state);
}

fn draw_keypad(frame: &mut Frame, area: Rect, state: &KeypadState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); ENTER_ROW + 1])
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        if row == ENTER_ROW {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(25),
                    Constraint::Percentage(50),
                    Constraint::Percentage(25),
                ])
                .split(*row_area);
            let selected = state.highlight.0 == ENTER_ROW;
            draw_pad_key(frame, cells[1], PadKey::Enter, selected, state);
            continue;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let selected = state.highlight == (row, col);
            draw_pad_key(frame, *cell, key_at(row, col), selected, state);
        }
    }
}

fn draw_pad_key(frame: &mut Frame, area: Rect, key: PadKey, selected: bool, state: &KeypadState) {
    let color = match key {
        PadKey::Digit(_) => state.theme.text,
        PadKey::Delete => state.theme.secondary,
        PadKey::Clear => state.theme.error,
        PadKey::Enter => state.theme.success,
    };
    let style = if selected {
        Style::default().fg(state.theme.highlight).bold()
    } else {
        Style::default().fg(color)
    };
    let border = if selected {
        state.theme.highlight
    } else {
        state.theme.border
    };

    let widget = Paragraph::new(key.label()).style(style).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}

fn draw_error(frame: &mut Frame, area: Rect, state: &KeypadState) {
    if let Some(error) = &state.error_message {
        let error_widget = Paragraph::new(error.clone())
            .style(Style::default().fg(state.theme.error).bold())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, area);
    }
}

fn draw_result(frame: &mut Frame, area: Rect, state: &KeypadState, session: &Session) {
    let Some(score) = session.score() else {
        return;
    };
    let class = score.classification();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.success))
        .title(" Complete ")
        .title_style(Style::default().fg(state.theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(class.emoji),
        Line::from("Happiness Index"),
        Line::from(score.to_string()).bold(),
        Line::from(""),
        Line::from(class.message),
    ];

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(state.theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(5),
            Constraint::Percentage(30),
        ])
        .split(inner);

    frame.render_widget(paragraph, centered[1]);
}

/// Draw and dispatch key presses until the user leaves.
pub(crate) fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut KeypadState,
    session: &mut Session,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<Control, RatatuiError> {
    loop {
        terminal
            .draw(|frame| draw_ui(frame, state, session))
            .map_err(|err| RatatuiError::Terminal(err.to_string()))?;

        if let Event::Key(key) = next_event()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match state.handle_key(session, key.code) {
                Control::Continue => {}
                control => return Ok(control),
            }
        }
    }
}

impl Frontend for RatatuiKeypad {
    type Error = RatatuiError;

    fn run(&self, session: &mut Session) -> Result<Option<HappinessIndex>, Self::Error> {
        if session.entry() != EntryMode::Keypad {
            return Err(RatatuiError::UnsupportedEntry(session.entry()));
        }

        let mut terminal = self.setup_terminal()?;
        let mut state = KeypadState::new(self.theme.clone(), self.title.clone());
        state.last_score = session.score();

        // Restore before propagating so a failed draw or read never leaves
        // the terminal in raw mode.
        let outcome = event_loop(&mut terminal, &mut state, session, event::read);
        self.restore_terminal(&mut terminal)?;

        if outcome? == Control::Cancel {
            return Err(RatatuiError::Cancelled);
        }

        Ok(state.last_score)
    }

    fn is_cancelled(err: &Self::Error) -> bool {
        matches!(err, RatatuiError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happiness::{AgeGroup, Catalog};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn state() -> KeypadState {
        KeypadState::new(Theme::default(), "Test".to_string())
    }

    fn press_all(state: &mut KeypadState, session: &mut Session, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(state.handle_key(session, *key), Control::Continue);
        }
    }

    fn render(state: &KeypadState, session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| draw_ui(frame, state, session))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn backend_creation() {
        let _backend = RatatuiKeypad::new();
        let _with_title = RatatuiKeypad::new().with_title("Test");
        let _with_theme = RatatuiKeypad::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Cancelled;
        assert_eq!(err.to_string(), "Calculation cancelled by user");
        assert!(<RatatuiKeypad as Frontend>::is_cancelled(&err));

        let err = RatatuiError::Terminal("test error".to_string());
        assert_eq!(err.to_string(), "Terminal error: test error");
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn keypad_layout() {
        assert_eq!(key_at(0, 0), PadKey::Digit(7));
        assert_eq!(key_at(2, 2), PadKey::Digit(3));
        assert_eq!(key_at(3, 1), PadKey::Delete);
        assert_eq!(key_at(3, 2), PadKey::Clear);
        assert_eq!(key_at(ENTER_ROW, 1), PadKey::Enter);
    }

    #[test]
    fn rejects_bounded_sessions() {
        let mut session = Session::new(Catalog::standard(), EntryMode::Bounded);
        let err = RatatuiKeypad::new().run(&mut session).unwrap_err();
        assert!(matches!(err, RatatuiError::UnsupportedEntry(EntryMode::Bounded)));
    }

    #[test]
    fn typing_and_submitting() {
        let mut session = Session::new(Catalog::standard(), EntryMode::Keypad);
        let mut state = state();

        press_all(
            &mut state,
            &mut session,
            &[KeyCode::Char('5'), KeyCode::Char('0'), KeyCode::Enter],
        );
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please enter a number between 1000 and 25000")
        );
        assert_eq!(session.pending_input(), "50");

        press_all(
            &mut state,
            &mut session,
            &[
                KeyCode::Backspace,
                KeyCode::Char('c'),
                KeyCode::Char('1'),
                KeyCode::Char('3'),
                KeyCode::Char('0'),
                KeyCode::Char('0'),
                KeyCode::Char('0'),
                KeyCode::Enter,
            ],
        );
        assert_eq!(state.error_message, None);
        assert_eq!(session.answers(), &[13000]);
        assert_eq!(session.progress(), Some((2, 5)));
    }

    #[test]
    fn on_screen_keypad_navigation() {
        let catalog = Catalog::single(
            happiness::QuestionSet::new(vec![happiness::QuestionDef::new("q", 0, 10, 1.0)])
                .unwrap(),
        );
        let mut session = Session::new(catalog, EntryMode::Keypad);
        let mut state = state();

        // (0,0) is 7; down twice and right once is 2.
        press_all(
            &mut state,
            &mut session,
            &[KeyCode::Down, KeyCode::Down, KeyCode::Right, KeyCode::Char(' ')],
        );
        assert_eq!(session.pending_input(), "2");

        // Down to the bottom row's clear key, then press it.
        press_all(
            &mut state,
            &mut session,
            &[KeyCode::Down, KeyCode::Right, KeyCode::Char(' ')],
        );
        assert_eq!(session.pending_input(), "");

        // Type 8 and press the ENTER row.
        press_all(
            &mut state,
            &mut session,
            &[
                KeyCode::Char('8'),
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Char(' '),
            ],
        );
        assert!(session.is_done());
        assert_eq!(state.last_score.map(|s| s.value()), Some(8.0));
    }

    #[test]
    fn group_selection_and_restart() {
        let mut session = Session::new(Catalog::age_groups(), EntryMode::Keypad);
        let mut state = state();

        press_all(&mut state, &mut session, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(session.group(), Some(AgeGroup::Student));

        for answer in ["10", "6", "10", "10"] {
            let mut keys: Vec<KeyCode> = answer.chars().map(KeyCode::Char).collect();
            keys.push(KeyCode::Enter);
            press_all(&mut state, &mut session, &keys);
        }
        assert_eq!(session.score().map(|s| s.value()), Some(10.0));

        press_all(&mut state, &mut session, &[KeyCode::Char('r')]);
        assert_eq!(session.phase(), Phase::SelectingGroup);
        assert_eq!(state.group_cursor, 0);
        assert_eq!(state.last_score.map(|s| s.value()), Some(10.0));

        assert_eq!(
            state.handle_key(&mut session, KeyCode::Esc),
            Control::Cancel
        );
    }

    #[test]
    fn quit_from_result_screen() {
        let catalog = Catalog::single(
            happiness::QuestionSet::new(vec![happiness::QuestionDef::new("q", 0, 10, 1.0)])
                .unwrap(),
        );
        let mut session = Session::new(catalog, EntryMode::Keypad);
        let mut state = state();
        press_all(&mut state, &mut session, &[KeyCode::Char('3'), KeyCode::Enter]);
        assert_eq!(state.handle_key(&mut session, KeyCode::Char('q')), Control::Quit);
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn event_loop_returns_read_errors() {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let mut session = Session::new(Catalog::standard(), EntryMode::Keypad);
        let mut state = state();
        let mut events = vec![key(KeyCode::Char('4')), Err(io::Error::other("input closed"))]
            .into_iter();

        let err = event_loop(&mut terminal, &mut state, &mut session, || {
            events
                .next()
                .unwrap_or_else(|| Err(io::Error::other("no more events")))
        })
        .unwrap_err();

        assert!(matches!(err, RatatuiError::Io(_)));
        assert_eq!(session.pending_input(), "4");
    }

    #[test]
    fn event_loop_ignores_releases_and_quits() {
        let catalog = Catalog::single(
            happiness::QuestionSet::new(vec![happiness::QuestionDef::new("q", 0, 10, 1.0)])
                .unwrap(),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let mut session = Session::new(catalog, EntryMode::Keypad);
        let mut state = state();
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('9'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        let mut events = vec![
            Ok(release),
            key(KeyCode::Char('6')),
            key(KeyCode::Enter),
            key(KeyCode::Char('q')),
        ]
        .into_iter();

        let control = event_loop(&mut terminal, &mut state, &mut session, || {
            events
                .next()
                .unwrap_or_else(|| Err(io::Error::other("no more events")))
        })
        .unwrap();

        assert_eq!(control, Control::Quit);
        assert_eq!(session.answers(), &[6]);
        assert_eq!(state.last_score.map(|s| s.value()), Some(6.0));
    }

    #[test]
    fn contract_violations_stay_off_screen() {
        let mut session = Session::new(Catalog::standard(), EntryMode::Keypad);
        let mut state = state();

        let result = session.select_group(None);
        assert!(result.is_err());
        state.apply(&mut session, result);
        assert_eq!(state.error_message, None);

        state.apply(&mut session, Err(SessionError::InvalidGroupSelection));
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please select a group to start")
        );
    }

    #[test]
    fn renders_question_screen() {
        let mut session = Session::new(Catalog::standard(), EntryMode::Keypad);
        let mut state = state();
        press_all(&mut state, &mut session, &[KeyCode::Char('4'), KeyCode::Char('2')]);

        let screen = render(&state, &session);
        assert!(screen.contains("Question 1 of 5"));
        assert!(screen.contains("What's your monthly income?"));
        assert!(screen.contains("Range: (1000-25000)"));
        assert!(screen.contains("42"));
        assert!(screen.contains("ENTER"));
    }

    #[test]
    fn renders_result_screen() {
        let catalog = Catalog::single(
            happiness::QuestionSet::new(vec![happiness::QuestionDef::new("q", 0, 10, 1.0)])
                .unwrap(),
        );
        let mut session = Session::new(catalog, EntryMode::Keypad);
        let mut state = state();
        press_all(&mut state, &mut session, &[KeyCode::Char('2'), KeyCode::Enter]);

        let screen = render(&state, &session);
        assert!(screen.contains("Happiness Index"));
        assert!(screen.contains("2.00 / 10"));
        assert!(screen.contains("Take care of yourself!"));
    }
}
