//! Non-blocking event source for the game loop.

use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::handle_event;
use crate::timer::RepeatingTimer;
use crate::types::GameEvent;

/// Maximum events delivered per frame; the rest stay queued for the next one.
pub const EVENT_BATCH_CAPACITY: usize = 32;

/// Events collected during one frame, in arrival order
pub type EventBatch = ArrayVec<GameEvent, EVENT_BATCH_CAPACITY>;

/// Drains terminal key presses and injects drop-ticks from a repeating timer.
#[derive(Debug)]
pub struct EventPoller {
    drop_timer: RepeatingTimer,
    last_poll: Instant,
    /// Ticks that fell due but did not fit in the last batch
    pending_ticks: u32,
    resized: bool,
}

impl EventPoller {
    /// `drop_interval_ms` is fixed for the poller's lifetime.
    pub fn new(drop_interval_ms: u32) -> Self {
        Self {
            drop_timer: RepeatingTimer::new(drop_interval_ms),
            last_poll: Instant::now(),
            pending_ticks: 0,
            resized: false,
        }
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_timer.interval_ms()
    }

    /// Restart drop timing from now, forgetting time and ticks owed so far.
    ///
    /// Called when play resumes so time spent paused does not turn into drops.
    pub fn resume(&mut self) {
        self.drop_timer.reset();
        self.pending_ticks = 0;
        self.last_poll = Instant::now();
    }

    /// Whether the terminal was resized since the last call
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    /// Everything pending since the last call, without blocking.
    ///
    /// Key presses keep their arrival order. Drop-ticks carry no timestamp
    /// relative to them, so the ticks that fell due during the frame follow the
    /// keys. Ticks that do not fit are delivered with the next batch.
    pub fn poll_events(&mut self) -> io::Result<EventBatch> {
        let mut batch = EventBatch::new();

        while !batch.is_full() && event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            if matches!(raw, Event::Resize(..)) {
                self.resized = true;
            }
            if let Some(ev) = handle_event(&raw) {
                batch.push(ev);
            }
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.last_poll).as_millis();
        self.last_poll = now;
        self.push_ticks(&mut batch, u32::try_from(elapsed_ms).unwrap_or(u32::MAX));

        Ok(batch)
    }

    /// Append due ticks up to the batch capacity; the rest stay pending.
    fn push_ticks(&mut self, batch: &mut EventBatch, elapsed_ms: u32) {
        let due = self
            .pending_ticks
            .saturating_add(self.drop_timer.update(elapsed_ms));
        let room = batch.remaining_capacity() as u32;
        let pushed = due.min(room);
        for _ in 0..pushed {
            batch.push(GameEvent::DropTick);
        }
        self.pending_ticks = due - pushed;
    }
}
