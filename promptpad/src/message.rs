use crossbeam_channel::Sender;
use ophelp_types::{Error, OperationKind};

/// work for the clipboard thread.
#[derive(Debug)]
pub(crate) enum Request {
    Copy { id: &'static str, text: &'static str },
    // graceful exit,
    Shutdown,
}

impl Request {
    pub(crate) fn send(self, s: &Sender<Request>) -> anyhow::Result<()> {
        s.send(self)?;
        Ok(())
    }

    /// Returns `true` if the request is [`Shutdown`].
    pub(crate) fn is_shutdown(&self) -> bool {
        matches!(self, Self::Shutdown)
    }
}

/// everything the ui thread reacts to, from keys, the clipboard thread
/// and its reset timers.
#[derive(Debug)]
pub(crate) enum Update {
    Quit,
    Next,
    Prev,
    ToggleHelp,
    Kind(OperationKind),
    /// copy the selected example block.
    Copy,
    /// the clipboard write went through.
    Copied(&'static str),
    /// a reset timer fired. only clears the mark if the id still matches.
    ResetCopied(&'static str),
    Edit(bool),
    Input(char),
    Backspace,
    Err(Error),
}
