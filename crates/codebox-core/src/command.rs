use std::sync::Arc;
use std::time::Duration;

/// A side effect returned from [`Component::update`](crate::Component::update)
/// or [`Model::update`](crate::Model::update).
///
/// Commands describe work for the runtime instead of doing it in place:
/// immediate follow-up messages, delayed messages and quitting.
/// Because every suspension point is a value, a test harness can hold delayed
/// messages on a virtual clock instead of waiting on real timers.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Deliver a message after the current update settles:
/// let cmd = Command::defer(Msg::Recheck);
///
/// // Deliver a message 50ms from now:
/// let cmd = Command::after(Duration::from_millis(50), Msg::Flush);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Quit,
    Delay { after: Duration, msg: Msg },
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Quit,
        }
    }

    /// Deliver `msg` once `after` has elapsed.
    ///
    /// The message re-enters the update loop like any other, so the handler
    /// observes live state at fire time.
    pub fn after(after: Duration, msg: Msg) -> Self {
        Command {
            inner: CommandInner::Delay { after, msg },
        }
    }

    /// Deliver `msg` after the current update and its immediate messages
    /// have been processed.
    pub fn defer(msg: Msg) -> Self {
        Self::after(Duration::ZERO, msg)
    }

    /// Run multiple commands. `None` entries are dropped.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|cmd| !cmd.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_else(Command::none),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Quit => Command::quit(),
            CommandInner::Delay { after, msg } => Command::after(after, f(msg)),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a delayed message, return the delay and the message.
    pub fn into_delay(self) -> Option<(Duration, Msg)> {
        match self.inner {
            CommandInner::Delay { after, msg } => Some((after, msg)),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
    }

    #[test]
    fn command_message_round_trips() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn command_quit_creates_quit() {
        let cmd: Command<()> = Command::quit();
        assert!(matches!(cmd.inner, CommandInner::Quit));
    }

    #[test]
    fn defer_is_zero_delay() {
        let cmd: Command<&str> = Command::defer("later");
        assert_eq!(cmd.into_delay(), Some((Duration::ZERO, "later")));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_batch_drops_none_entries() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn command_batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        assert_eq!(cmd.into_batch().map(|cmds| cmds.len()), Some(2));
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message().as_deref(), Some("42"));
    }

    #[test]
    fn command_map_keeps_delay() {
        let cmd: Command<i32> = Command::after(Duration::from_millis(50), 7);
        let mapped: Command<String> = cmd.map(|n| format!("n{n}"));
        assert_eq!(
            mapped.into_delay(),
            Some((Duration::from_millis(50), "n7".to_string()))
        );
    }

    #[test]
    fn command_map_quit_stays_quit() {
        let cmd: Command<i32> = Command::quit();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(mapped.inner, CommandInner::Quit));
    }

    #[test]
    fn command_map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::defer(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        let cmds = mapped.into_batch().unwrap();
        assert_eq!(cmds.len(), 2);
    }
}
