//! Input handling for the Folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::{
    sync::mpsc,
    task::{JoinHandle, spawn_blocking},
    time::timeout,
};
use tracing::{debug, warn};

use folio_engine::{PortfolioView, Viewport};

use crate::layout::hit_test;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and queues them for the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl InputPump {
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = timeout(SHUTDOWN_GRACE, join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Backpressure rather than dropping: pointer order matters.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input into the view. Returns `true` when the user asked to quit.
pub fn handle_events(view: &mut PortfolioView, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(view, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(false)
}

/// Apply one terminal event. Returns `true` when the user asked to quit.
pub fn apply_event(view: &mut PortfolioView, event: Event) -> bool {
    match event {
        Event::Key(key) => handle_key(view, key),
        Event::Mouse(mouse) => {
            handle_mouse(view, mouse);
            false
        }
        // Pointer left the window as far as we can tell.
        Event::FocusLost => {
            view.set_pointer(None);
            view.on_hover_leave();
            false
        }
        Event::Resize(width, height) => {
            view.on_resize(Viewport::new(width, height));
            retarget_pointer(view);
            false
        }
        _ => false,
    }
}

fn handle_key(view: &mut PortfolioView, key: KeyEvent) -> bool {
    if matches!(key.kind, KeyEventKind::Release) {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => {
            view.set_pointer(None);
            view.on_hover_leave();
        }
        KeyCode::Up | KeyCode::Char('k') => view.hover_previous(),
        KeyCode::Down | KeyCode::Char('j') => view.hover_next(),
        _ => {}
    }
    false
}

fn handle_mouse(view: &mut PortfolioView, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
        return;
    }

    view.set_pointer(Some((mouse.column, mouse.row)));
    let hit = hit_test(view.viewport(), view.catalog(), mouse.column, mouse.row);
    if let Err(e) = view.on_pointer_moved(hit) {
        warn!("Ignoring pointer event: {e}");
    } else {
        debug!(column = mouse.column, row = mouse.row, ?hit, "Pointer moved");
    }
}

/// Rows move when the layout changes; re-test the pointer against the new ones.
fn retarget_pointer(view: &mut PortfolioView) {
    let Some((column, row)) = view.pointer() else {
        return;
    };
    let hit = hit_test(view.viewport(), view.catalog(), column, row);
    if let Err(e) = view.on_pointer_moved(hit) {
        warn!("Ignoring pointer after resize: {e}");
    } else {
        debug!(column, row, ?hit, "Pointer re-tested after resize");
    }
}
