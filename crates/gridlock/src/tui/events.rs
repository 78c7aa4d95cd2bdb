//! Terminal event reader.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Forwards key presses from the terminal into a channel.
///
/// Reading happens on a plain thread so the async side only ever awaits the
/// receiver. The thread exits once the receiver is dropped or the terminal
/// reports an error, which closes the channel.
pub fn spawn_key_reader() -> mpsc::UnboundedReceiver<KeyEvent> {
    let (key_tx, key_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        while !key_tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if key_tx.send(key).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "Failed to read terminal event");
                    break;
                }
            }
        }
        debug!("Key reader stopped");
    });

    key_rx
}
