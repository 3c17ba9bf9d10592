//! Event handling for the TUI
//!
//! Terminal events (key presses, resize, ticks) are read on a dedicated
//! thread using crossterm's event system. API completions are posted into
//! the same channel by the dispatcher, so the UI loop observes everything,
//! input and network alike, one event at a time.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::controllers::{AccountsSnapshot, BalanceLookup};
use crate::error::ClientResult;
use crate::models::{Account, Balance, TransactionReceipt, TransactionRequest};

/// Completion of an API call started by a screen
#[derive(Debug, Clone)]
pub enum ApiEvent {
    /// Accounts screen: accounts plus every balance
    AccountsListed(ClientResult<AccountsSnapshot>),
    /// Create screen: the new account
    AccountCreated(ClientResult<Account>),
    /// Transaction screen: accounts for the selectors
    TransferAccountsLoaded(ClientResult<Vec<Account>>),
    /// Transaction screen: a sender balance lookup
    SenderBalance {
        lookup: BalanceLookup,
        result: ClientResult<Balance>,
    },
    /// Transaction screen: the submission outcome
    TransactionSent {
        request: TransactionRequest,
        result: ClientResult<TransactionReceipt>,
    },
}

/// Events consumed by the UI loop
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// An API call finished; `mount` identifies the screen instance that
    /// started it
    Api { mount: u64, event: ApiEvent },
}

/// Event handler for terminal events
pub struct EventHandler {
    /// Event sender, cloned into the dispatcher
    sender: mpsc::Sender<Event>,
    /// Event receiver
    receiver: mpsc::Receiver<Event>,
    /// Event thread handle
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = {
            let sender = sender.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                // Windows reports releases too
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    sender.send(Event::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(width, height)) => {
                                    sender.send(Event::Resize(width, height))
                                }
                                Ok(_) => Ok(()),
                                Err(e) => {
                                    tracing::error!(error = %e, "failed to read terminal event");
                                    return;
                                }
                            };
                            if forwarded.is_err() {
                                return;
                            }
                        }
                        Ok(false) => {}
                        Err(e) => {
                            tracing::error!(error = %e, "failed to poll terminal events");
                            return;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(Event::Tick).is_err() {
                            return;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
        };

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// A sender for posting events from other threads
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
