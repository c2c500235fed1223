use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tokio::time::Duration;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => return Some(Event::KeyboardCTRLC()),
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Char('u'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => return Some(Event::UIScrollPageUp()),
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Char('d'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => return Some(Event::UIScrollPageDown()),
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Char('n'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => return Some(Event::SidebarPageNext()),
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Char('p'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => return Some(Event::SidebarPagePrev()),
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Up, ..
            }) => return Some(Event::UIScrollUp()),
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Down,
                ..
            }) => return Some(Event::UIScrollDown()),
            CrosstermEvent::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }) => return Some(Event::KeyboardEnter()),
            CrosstermEvent::Paste(text) => return Some(Event::KeyboardPaste(text)),
            CrosstermEvent::Key(key_event) => {
                return Some(Event::KeyboardCharInput(key_event.into()))
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(event)) => self.handle_crossterm(event),
                    Some(Err(_)) => None,
                    None => None
                },
                event = self.events.recv() => event,
                // Renders the thinking indicator while a reply is pending.
                _ = time::sleep(Duration::from_millis(500)) => Some(Event::UITick()),
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
