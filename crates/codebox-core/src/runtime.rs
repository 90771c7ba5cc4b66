use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// Use struct update syntax to override only the options you need:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     mouse_capture: true,
///     log_file: Some("codebox.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Target frames per second (default: 60, max: 120).
    pub fps: u32,
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Capture mouse clicks (default: true).
    pub mouse_capture: bool,
    /// Deliver pastes as one event (default: true).
    pub bracketed_paste: bool,
    /// Whether to restore the terminal from a panic hook (default: true).
    pub catch_panics: bool,
    /// Log file path for debugging.
    pub log_file: Option<std::path::PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: true,
            bracketed_paste: true,
            catch_panics: true,
            log_file: None,
        }
    }
}

/// The program runtime. Owns the terminal and drives the [`Model`]
/// lifecycle until the model returns [`Command::quit`].
///
/// Every message, whether it came from the terminal, an immediate command or
/// an elapsed [`Command::after`] delay, is applied by the same loop one at a
/// time, so model state is never touched concurrently.
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<PinForm>::new(flags)?.run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    pending: Pending<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
    log_file: Option<std::fs::File>,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// Returns an error if the log file cannot be opened or terminal
    /// initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let log_file = match options.log_file {
            Some(ref path) => Some(log_to_file(path)?),
            None => None,
        };

        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            pending: Pending::default(),
            options,
            needs_redraw: true,
            should_quit: false,
            log_file,
        };

        program.debug_log("program initialized");
        program.execute_command(init_cmd);
        Ok(program)
    }

    /// Run the program until quit and return the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;
        self.debug_log("shutting down");
        restore_terminal(self.options.alt_screen)?;
        result?;
        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.drain_pending();
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval =
            tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut events = EventStream::new();

        loop {
            if self.should_quit {
                return Ok(());
            }

            tokio::select! {
                biased;

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                }

                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(msg) = self.model.on_event(TerminalEvent::from(event)) {
                                self.process_message(msg);
                            }
                        }
                        Some(Err(err)) => {
                            self.debug_log(&format!("event stream error: {err}"));
                        }
                        None => return Ok(()),
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) {
        self.dispatch(msg);
        self.drain_pending();
    }

    fn dispatch(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);
        self.needs_redraw = true;
    }

    // Immediate messages first, including the ones they produce; zero-delay
    // messages only once none are left.
    fn drain_pending(&mut self) {
        while !self.should_quit {
            match self.pending.pop() {
                Some(msg) => self.dispatch(msg),
                None => break,
            }
        }
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending.push_immediate(msg),
            CommandInner::Quit => {
                self.should_quit = true;
            }
            CommandInner::Delay { after, msg } if after.is_zero() => {
                self.pending.push_deferred(msg);
            }
            CommandInner::Delay { after, msg } => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(msg);
                });
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    /// Write a debug message to the log file, if configured.
    fn debug_log(&mut self, msg: &str) {
        if let Some(ref mut f) = self.log_file {
            let _ = writeln!(f, "{msg}");
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

/// Messages produced by updates that have not been dispatched yet.
///
/// Immediate messages always come out before deferred ones, so a
/// [`Command::defer`] continuation runs only after every immediate message
/// (and every message those produce) has been handled.
struct Pending<Msg> {
    immediate: VecDeque<Msg>,
    deferred: VecDeque<Msg>,
}

impl<Msg> Default for Pending<Msg> {
    fn default() -> Self {
        Self {
            immediate: VecDeque::new(),
            deferred: VecDeque::new(),
        }
    }
}

impl<Msg> Pending<Msg> {
    fn push_immediate(&mut self, msg: Msg) {
        self.immediate.push_back(msg);
    }

    fn push_deferred(&mut self, msg: Msg) {
        self.deferred.push_back(msg);
    }

    fn pop(&mut self) -> Option<Msg> {
        self.immediate
            .pop_front()
            .or_else(|| self.deferred.pop_front())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install panic hook that restores terminal (only once to avoid stacking)
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    if options.mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(alt_screen: bool) -> Result<(), io::Error> {
    // Best-effort: keep restoring even if a step fails.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableBracketedPaste).ok();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}

/// Open a log file in append mode for debugging terminal applications.
///
/// ```no_run
/// use codebox_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("debug.log").unwrap();
/// writeln!(f, "debug message").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_waits_for_follow_up_messages() {
        let mut pending = Pending::default();
        pending.push_deferred("deferred");
        pending.push_immediate("first");

        assert_eq!(pending.pop(), Some("first"));
        // "first" produced another immediate message while being handled.
        pending.push_immediate("follow-up");
        assert_eq!(pending.pop(), Some("follow-up"));
        assert_eq!(pending.pop(), Some("deferred"));
        assert_eq!(pending.pop(), None);
    }

    #[test]
    fn deferred_messages_keep_their_order() {
        let mut pending = Pending::default();
        pending.push_deferred(1);
        pending.push_deferred(2);
        assert_eq!(pending.pop(), Some(1));
        assert_eq!(pending.pop(), Some(2));
    }

    #[test]
    fn log_to_file_appends() {
        let path = std::env::temp_dir().join(format!("codebox-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        writeln!(log_to_file(&path).unwrap(), "one").unwrap();
        writeln!(log_to_file(&path).unwrap(), "two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        let _ = std::fs::remove_file(&path);
    }
}
