//! # One-Time Code Example
//!
//! A six-digit verification screen built on `CodeInput`:
//! - Terminal keys, pastes and mouse clicks routed into the widget
//! - `CodeChanged` / `CodeCompleted` handled by the parent
//! - `reset` after a wrong code, masking toggled at runtime with `apply`
//!
//! The accepted code is `424242`.
//!
//! Run with: `cargo run --example otp`
//!
//! Set `CODEBOX_LOG=otp.log` to write the runtime log and the widget's
//! `log` records (filtered by `RUST_LOG`, default `debug`) to that file.

use codebox::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use codebox::ratatui::layout::{Alignment, Rect};
use codebox::ratatui::style::{Color, Modifier, Style};
use codebox::ratatui::text::Line;
use codebox::ratatui::widgets::Paragraph;
use codebox::ratatui::Frame;
use codebox::widgets::code_input::{self, CodeInput};
use codebox::widgets::CodeInputOptions;
use codebox::{Command, Component, Model, ProgramOptions, TerminalEvent};

use std::path::{Path, PathBuf};

const EXPECTED: &str = "424242";

struct OtpApp {
    input: CodeInput,
    size: Rect,
    status: Status,
}

enum Status {
    Waiting,
    Typing(String),
    Verified,
    Rejected,
    Failed(String),
}

#[derive(Debug)]
enum Msg {
    Code(code_input::Message),
    Click { column: u16, row: u16 },
    Resize(u16, u16),
    ToggleHidden,
    Reset,
    Quit,
}

impl Model for OtpApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut input = CodeInput::new()
            .with_code_length(6)
            .with_initial_focus_field(0)
            .with_focusing_on_last_by_click_if_filled(true);
        let cmd = input.mount().map(Msg::Code);
        let (width, height) = codebox::crossterm::terminal::size().unwrap_or((80, 24));
        (
            OtpApp {
                input,
                size: Rect::new(0, 0, width, height),
                status: Status::Waiting,
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Code(m) => {
                match &m {
                    code_input::Message::CodeChanged(code) => {
                        self.status = Status::Typing(code.clone());
                    }
                    code_input::Message::CodeCompleted(code) => {
                        self.status = if code == EXPECTED {
                            Status::Verified
                        } else {
                            Status::Rejected
                        };
                    }
                    _ => {}
                }
                self.input.update(m).map(Msg::Code)
            }
            Msg::Click { column, row } => {
                match self.input.box_at(input_area(self.size), column, row) {
                    Some(index) => self
                        .input
                        .update(code_input::Message::Click { index })
                        .map(Msg::Code),
                    None => Command::none(),
                }
            }
            Msg::Resize(width, height) => {
                self.size = Rect::new(0, 0, width, height);
                Command::none()
            }
            Msg::ToggleHidden => {
                let hidden = !self.input.config().is_code_hidden;
                self.input.apply(&CodeInputOptions::new().code_hidden(hidden));
                Command::none()
            }
            Msg::Reset => {
                self.status = Status::Waiting;
                match self.input.reset(false) {
                    Ok(cmd) => cmd.map(Msg::Code),
                    Err(err) => {
                        log::warn!("reset failed: {err}");
                        self.status = Status::Failed(err.to_string());
                        Command::none()
                    }
                }
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let title = Paragraph::new("Enter the 6-digit code we sent you")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, Rect::new(area.x, area.y + 1, area.width, 1));

        self.input.view(frame, input_area(area));

        let (text, color) = match &self.status {
            Status::Waiting => ("Waiting for input".to_string(), Color::DarkGray),
            Status::Typing(code) => (format!("{} of 6 digits", code.chars().count()), Color::Yellow),
            Status::Verified => ("Verified!".to_string(), Color::Green),
            Status::Rejected => ("Wrong code, press Ctrl+R to retry".to_string(), Color::Red),
            Status::Failed(err) => (format!("Reset failed: {err}"), Color::Red),
        };
        let status = Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        frame.render_widget(status, Rect::new(area.x, area.y + 7, area.width, 1));

        let help = Paragraph::new("type/paste digits | click a box | ctrl+h mask | ctrl+r reset | esc quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            help,
            Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1),
        );
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Char('h'), KeyModifiers::CONTROL) => Some(Msg::ToggleHidden),
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(Msg::Reset),
                _ => Some(Msg::Code(code_input::Message::Key(key))),
            },
            TerminalEvent::Paste(text) => Some(Msg::Code(code_input::Message::Paste(text))),
            TerminalEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Msg::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            TerminalEvent::Resize(width, height) => Some(Msg::Resize(width, height)),
            _ => None,
        }
    }
}

/// Where the code boxes sit inside the full terminal area.
fn input_area(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 3,
        area.width.saturating_sub(4),
        area.height.saturating_sub(3).min(3),
    )
}

/// Send `log` records to the same file as the runtime's debug log.
fn init_logging(path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = codebox::log_to_file(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file: Option<PathBuf> = std::env::var_os("CODEBOX_LOG").map(Into::into);
    init_logging(log_file.as_deref())?;
    let options = ProgramOptions {
        log_file,
        ..ProgramOptions::default()
    };
    codebox::run_with::<OtpApp>((), options).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebox::testing::TestProgram;

    #[test]
    fn failed_reset_is_reported_in_status() {
        let mut prog = TestProgram::<OtpApp>::new(());
        prog.model_mut().input.apply(&CodeInputOptions::new().initial_focus_field(9));
        prog.send(Msg::Reset);
        assert!(matches!(prog.model().status, Status::Failed(_)));
        assert!(prog.render_string(80, 10).contains("Reset failed"));
    }

    #[test]
    fn widget_records_reach_the_log_file() {
        let path = std::env::temp_dir().join(format!("codebox-otp-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        init_logging(Some(&path)).unwrap();
        log::warn!("widget record");
        log::logger().flush();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("widget record"));
        let _ = std::fs::remove_file(&path);
    }
}
