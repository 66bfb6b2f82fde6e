use crate::message::{Request, Update};
use crossbeam_channel::{Receiver, Sender};
use ophelp_types::{Error, Result};
use std::{thread, time::Duration};

/// how long a block stays marked as copied.
const COPIED_RESET: Duration = Duration::from_millis(2000);

fn write(text: &str) -> Result<()> {
    let mut board = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    board.set_text(text).map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}

/// worker loop. each successful copy gets its own one-shot reset timer;
/// earlier timers are never cancelled, the ui ignores the stale ones.
pub(crate) fn handle(s: Sender<Update>, r: Receiver<Request>) -> anyhow::Result<()> {
    while let Ok(req) = r.recv() {
        if req.is_shutdown() {
            break;
        }
        if let Request::Copy { id, text } = req {
            match write(text) {
                Ok(()) => {
                    log::info!("{} copied to clipboard.", id);
                    // the ui may already be gone, sends past it are dropped.
                    s.send(Update::Copied(id)).ok();
                    let s_reset = s.clone();
                    thread::spawn(move || {
                        thread::sleep(COPIED_RESET);
                        s_reset.send(Update::ResetCopied(id)).ok();
                    });
                }
                Err(e) => {
                    log::error!("clipboard write failed: {}", e);
                    s.send(Update::Err(e)).ok();
                }
            }
        }
    }
    Ok(())
}
