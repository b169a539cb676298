//! Terminal input plumbing: raw event polling, frame ticks, event conversion

use crate::event::EventKind;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    /// Frame tick produced by [`spawn_ticker`]
    Tick,
}

/// Keep the crossterm events pickers act on.
///
/// Key releases, bare pointer motion, focus changes and pastes are dropped;
/// with mouse capture on, motion alone would flood the channel.
pub fn to_raw_event(event: Event) -> Option<RawEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(RawEvent::Key(key)),
        Event::Mouse(mouse) if mouse.kind != MouseEventKind::Moved => Some(RawEvent::Mouse(mouse)),
        Event::Resize(w, h) => Some(RawEvent::Resize(w, h)),
        _ => None,
    }
}

/// Spawn the blocking terminal reader
///
/// Each `poll_timeout` the reader checks `cancel_token`, so cancelling stops
/// it within one timeout. It also stops once the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        info!("Event poller started");
        while !cancel_token.is_cancelled() {
            match event::poll(poll_timeout) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(error) => {
                    warn!(%error, "Terminal poll failed, stopping poller");
                    break;
                }
            }
            let Some(raw) = event::read().ok().and_then(to_raw_event) else {
                continue;
            };
            if tx.send(raw).is_err() {
                debug!("Event channel closed, stopping poller");
                break;
            }
        }
        debug!("Event poller stopped");
    })
}

/// Spawn a task that sends [`RawEvent::Tick`] at a fixed frame interval
///
/// Ticks advance corrective picker animations. Missed ticks are skipped rather
/// than replayed in a burst.
pub fn spawn_ticker(
    tx: mpsc::UnboundedSender<RawEvent>,
    frame: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(frame);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    debug!("Ticker cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if tx.send(RawEvent::Tick).is_err() {
                        debug!("Event channel closed, stopping ticker");
                        break;
                    }
                }
            }
        }
    })
}

/// Process a raw event into an EventKind
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            },
            MouseEventKind::ScrollUp => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            },
            _ => EventKind::Mouse(mouse),
        },
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
        RawEvent::Tick => EventKind::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent};

    #[test]
    fn test_process_raw_event_key() {
        use crossterm::event::{KeyCode, KeyEvent, KeyEventState};

        let key_event = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };

        let kind = process_raw_event(RawEvent::Key(key_event));
        assert!(matches!(kind, EventKind::Key(_)));
    }

    #[test]
    fn test_process_raw_event_scroll() {
        let scroll_up = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 10,
            row: 20,
            modifiers: KeyModifiers::NONE,
        };

        match process_raw_event(RawEvent::Mouse(scroll_up)) {
            EventKind::Scroll { column, row, delta } => {
                assert_eq!(column, 10);
                assert_eq!(row, 20);
                assert_eq!(delta, -1);
            }
            other => panic!("Expected Scroll event, got {:?}", other),
        }
    }

    #[test]
    fn test_process_raw_event_drag_stays_mouse() {
        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            process_raw_event(RawEvent::Mouse(drag)),
            EventKind::Mouse(_)
        ));
    }

    #[test]
    fn test_to_raw_event_filters_noise() {
        use crossterm::event::{KeyCode, KeyEvent, KeyEventState};

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert!(to_raw_event(Event::Mouse(moved)).is_none());
        assert!(to_raw_event(Event::FocusGained).is_none());

        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert!(to_raw_event(Event::Key(release)).is_none());

        let press = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(to_raw_event(Event::Key(press)), Some(RawEvent::Key(_))));

        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..moved
        };
        assert!(matches!(to_raw_event(Event::Mouse(down)), Some(RawEvent::Mouse(_))));
        assert!(matches!(
            to_raw_event(Event::Resize(80, 24)),
            Some(RawEvent::Resize(80, 24))
        ));
    }

    #[test]
    fn test_process_raw_event_tick_and_resize() {
        assert!(matches!(process_raw_event(RawEvent::Tick), EventKind::Tick));
        assert!(matches!(
            process_raw_event(RawEvent::Resize(80, 24)),
            EventKind::Resize(80, 24)
        ));
    }

    #[tokio::test]
    async fn test_ticker_sends_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let handle = spawn_ticker(tx, Duration::from_millis(1), token.clone());

        let first = rx.recv().await;
        assert!(matches!(first, Some(RawEvent::Tick)));

        token.cancel();
        handle.await.expect("ticker task panicked");
    }
}
