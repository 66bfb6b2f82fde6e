use crate::message::Update;
use crossbeam_channel::Sender;
use ophelp_types::OperationKind;
use std::{
    io::stdin,
    sync::atomic::{AtomicBool, Ordering},
};
use termion::{
    event::{Event, Key},
    input::TermRead,
};

static INPUT_MODE: AtomicBool = AtomicBool::new(false);

pub(crate) fn handle(s: Sender<Update>) -> anyhow::Result<()> {
    let stdin = stdin();
    for c in stdin.events() {
        let c = c?;
        if INPUT_MODE.load(Ordering::SeqCst) {
            match c {
                Event::Key(Key::Esc) => {
                    INPUT_MODE.store(false, Ordering::SeqCst);
                    s.send(Update::Edit(false))?;
                }
                Event::Key(Key::Backspace) => s.send(Update::Backspace)?,
                Event::Key(Key::Char(ch)) => s.send(Update::Input(ch))?,
                _ => {}
            }
            continue;
        }
        match c {
            Event::Key(Key::Char('q')) => {
                s.send(Update::Quit)?;
                return Ok(());
            }
            Event::Key(Key::Char('?')) => s.send(Update::ToggleHelp)?,
            Event::Key(Key::Char('j')) => s.send(Update::Next)?,
            Event::Key(Key::Char('k')) => s.send(Update::Prev)?,
            Event::Key(Key::Char('y')) => s.send(Update::Copy)?,
            Event::Key(Key::Char('m')) => s.send(Update::Kind(OperationKind::Map))?,
            Event::Key(Key::Char('f')) => s.send(Update::Kind(OperationKind::Filter))?,
            Event::Key(Key::Char('r')) => s.send(Update::Kind(OperationKind::Reduce))?,
            Event::Key(Key::Char('i')) => {
                INPUT_MODE.store(true, Ordering::SeqCst);
                s.send(Update::Edit(true))?;
            }
            _ => {
                log::trace!("{:?} received.", c);
            }
        }
    }
    Ok(())
}
