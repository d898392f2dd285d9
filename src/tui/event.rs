use std::time::Duration;

use crossterm::event::{Event as TermEvent, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone)]
pub enum Event {
    /// A key press for the scorer
    Key(KeyEvent),
    /// Periodic wakeup so flash messages can expire without input
    Tick,
}

/// Keeps key presses only. Releases and repeats are dropped so a field never
/// gets a character twice (Windows reports both).
fn scorer_event(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        _ => None,
    }
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut ticks = tokio::time::interval(tick_rate);
            // A stalled redraw should not be followed by a burst of ticks
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(term_event)) => scorer_event(term_event),
                            _ => None,
                        }
                    }
                    _ = ticks.tick() => Some(Event::Tick),
                };

                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        EventHandler { rx }
    }

    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> TermEvent {
        TermEvent::Key(KeyEvent {
            code: KeyCode::Char('4'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_only_key_presses_reach_the_scorer() {
        assert!(matches!(scorer_event(key(KeyEventKind::Press)), Some(Event::Key(_))));
        assert!(scorer_event(key(KeyEventKind::Release)).is_none());
        assert!(scorer_event(key(KeyEventKind::Repeat)).is_none());
    }

    #[test]
    fn test_non_key_events_are_dropped() {
        assert!(scorer_event(TermEvent::Resize(80, 24)).is_none());
        assert!(scorer_event(TermEvent::FocusGained).is_none());
    }
}
