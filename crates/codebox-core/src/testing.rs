use crate::command::{Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::time::Duration;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the init/update/view cycle in a plain `#[test]`
/// function, no tokio runtime or TTY required. Immediate messages
/// ([`Command::message`]) are queued and flushed by
/// [`drain_messages`](TestProgram::drain_messages). Delayed messages
/// ([`Command::after`], [`Command::defer`]) are held on a virtual clock and
/// only fire when the test calls [`advance`](TestProgram::advance).
///
/// # Example
///
/// ```rust,ignore
/// use codebox_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Form>::new(flags);
/// prog.send(FormMsg::Pin(code_input::Message::Paste("1234".into())));
/// prog.advance(Duration::from_millis(50));    // coalescing delay elapses
/// assert_eq!(prog.model().completed, vec!["1234"]);
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: VecDeque<M::Message>,
    timers: Vec<Timer<M::Message>>,
    now: Duration,
    next_seq: u64,
    quit: bool,
}

struct Timer<Msg> {
    due: Duration,
    seq: u64,
    msg: Msg,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Immediate messages from `init` are queued; delayed ones are scheduled
    /// on the virtual clock.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: VecDeque::new(),
            timers: Vec::new(),
            now: Duration::ZERO,
            next_seq: 0,
            quit: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Commands returned by `update` are collected but not run; call
    /// [`drain_messages`](TestProgram::drain_messages) or
    /// [`advance`](TestProgram::advance) to process them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process all pending immediate messages, including the ones they
    /// produce in turn. Delayed messages stay on the clock.
    pub fn drain_messages(&mut self) {
        while let Some(msg) = self.pending_messages.pop_front() {
            let cmd = self.model.update(msg);
            self.collect(cmd);
        }
    }

    /// Move the virtual clock forward by `by`.
    ///
    /// Pending immediate messages are drained first. Timers that fall due
    /// within the window then fire in due-time order (ties in scheduling
    /// order), each followed by a drain. Timers scheduled while advancing
    /// also fire if they fall due inside the window.
    pub fn advance(&mut self, by: Duration) {
        self.drain_messages();
        let target = self.now + by;
        while let Some(position) = self.next_due(target) {
            let timer = self.timers.remove(position);
            self.now = timer.due;
            let cmd = self.model.update(timer.msg);
            self.collect(cmd);
            self.drain_messages();
        }
        self.now = target;
    }

    /// Fire only the timers already due at the current instant, such as
    /// [`Command::defer`] continuations.
    pub fn settle(&mut self) {
        self.advance(Duration::ZERO);
    }

    /// Current reading of the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of delayed messages that have not fired yet.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    ///
    /// This bypasses the message-driven cycle; pair it with
    /// [`run`](TestProgram::run) when the direct call returns a command.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Schedule a command produced outside of `update`, such as the return
    /// value of a lifecycle call made through [`model_mut`](TestProgram::model_mut).
    pub fn run(&mut self, cmd: Command<M::Message>) {
        self.collect(cmd);
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(position, _)| position)
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push_back(msg),
            CommandInner::Quit => self.quit = true,
            CommandInner::Delay { after, msg } => {
                self.timers.push(Timer {
                    due: self.now + after,
                    seq: self.next_seq,
                    msg,
                });
                self.next_seq += 1;
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    struct Recorder {
        seen: Vec<&'static str>,
    }

    #[derive(Debug)]
    enum RecMsg {
        Start,
        Step(&'static str),
        Later(&'static str),
        Stop,
    }

    impl Model for Recorder {
        type Message = RecMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<RecMsg>) {
            (
                Recorder { seen: vec![] },
                Command::after(Duration::from_millis(10), RecMsg::Later("init")),
            )
        }

        fn update(&mut self, msg: RecMsg) -> Command<RecMsg> {
            match msg {
                RecMsg::Start => {
                    self.seen.push("start");
                    Command::batch([
                        Command::message(RecMsg::Step("now")),
                        Command::defer(RecMsg::Later("deferred")),
                        Command::after(Duration::from_millis(50), RecMsg::Later("late")),
                    ])
                }
                RecMsg::Step(s) => {
                    self.seen.push(s);
                    Command::none()
                }
                RecMsg::Later(s) => {
                    self.seen.push(s);
                    if s == "deferred" {
                        Command::after(Duration::from_millis(5), RecMsg::Later("chained"))
                    } else {
                        Command::none()
                    }
                }
                RecMsg::Stop => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(self.seen.join(",")), frame.area());
        }
    }

    #[test]
    fn immediate_messages_wait_for_drain() {
        let mut prog = TestProgram::<Recorder>::new(());
        prog.send(RecMsg::Start);
        assert_eq!(prog.model().seen, vec!["start"]);
        prog.drain_messages();
        assert_eq!(prog.model().seen, vec!["start", "now"]);
    }

    #[test]
    fn delayed_messages_fire_only_when_clock_advances() {
        let mut prog = TestProgram::<Recorder>::new(());
        assert_eq!(prog.pending_timers(), 1);
        prog.advance(Duration::from_millis(9));
        assert!(prog.model().seen.is_empty());
        prog.advance(Duration::from_millis(1));
        assert_eq!(prog.model().seen, vec!["init"]);
        assert_eq!(prog.now(), Duration::from_millis(10));
    }

    #[test]
    fn timers_fire_in_due_order_including_chained_ones() {
        let mut prog = TestProgram::<Recorder>::new(());
        prog.send(RecMsg::Start);
        prog.advance(Duration::from_millis(100));
        assert_eq!(
            prog.model().seen,
            vec!["start", "now", "deferred", "chained", "init", "late"]
        );
        assert_eq!(prog.pending_timers(), 0);
    }

    #[test]
    fn settle_runs_only_deferred_work() {
        let mut prog = TestProgram::<Recorder>::new(());
        prog.send(RecMsg::Start);
        prog.settle();
        assert_eq!(prog.model().seen, vec!["start", "now", "deferred"]);
        assert_eq!(prog.pending_timers(), 3);
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Recorder>::new(());
        assert!(!prog.quit_requested());
        prog.send(RecMsg::Stop);
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_shows_model() {
        let mut prog = TestProgram::<Recorder>::new(());
        prog.send(RecMsg::Start);
        prog.drain_messages();
        assert!(prog.render_string(20, 1).starts_with("start,now"));
    }
}
