//! crossterm-backed [`InputSource`].

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::debug;

use space_wars_engine::InputSource;

use crate::map::{map_key, Control};
use crate::tracker::KeyTracker;
use crate::types::{FrameInput, GameEvent};

/// Drains the terminal event queue once per frame without blocking.
#[derive(Debug, Clone, Default)]
pub struct TerminalInput {
    tracker: KeyTracker,
}

impl TerminalInput {
    pub fn new(tracker: KeyTracker) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &KeyTracker {
        &self.tracker
    }

    /// Feed one key event into `out`.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant, out: &mut FrameInput) {
        let Some(control) = map_key(key) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press => {
                if let Some(event) = self.tracker.press(control, now) {
                    out.push_event(event);
                }
            }
            KeyEventKind::Repeat if control == Control::Quit => out.push_event(GameEvent::Quit),
            KeyEventKind::Repeat => self.tracker.repeat(control, now),
            KeyEventKind::Release => self.tracker.release(control),
        }
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant, out: &mut FrameInput) {
        match event {
            Event::Key(key) => self.handle_key(key, now, out),
            Event::FocusLost => {
                debug!("focus lost, releasing held keys");
                self.tracker.reset();
            }
            _ => {}
        }
    }

    /// Sample held controls into `out` after events were applied.
    pub fn finish_frame(&mut self, now: Instant, out: &mut FrameInput) {
        out.controls = self.tracker.controls(now);
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<FrameInput> {
        let mut out = FrameInput::new();
        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            let ev = event::read().context("failed to read terminal event")?;
            self.handle_event(ev, Instant::now(), &mut out);
        }
        self.finish_frame(Instant::now(), &mut out);
        Ok(out)
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}
