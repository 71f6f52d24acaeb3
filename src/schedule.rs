//! Frame-paced scheduling and per-frame coalescing.
//!
//! The engine never talks to an animation-frame primitive directly. It asks a
//! [`FrameScheduler`] for a frame and the host calls back into the engine with
//! the token once that frame fires. [`CoalescedTask`] holds at most one
//! outstanding request, so any number of move/scroll events between two frames
//! collapse into a single recompute.

use crate::constants::FALLBACK_FRAME_INTERVAL_US;
use std::time::{Duration, Instant};

/// Identifies one frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// Host-side frame scheduler (animation frame, vsync callback, timer...).
pub trait FrameScheduler {
    /// Request a callback on the next frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a previously requested frame. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// One pending flag plus one scheduler request.
#[derive(Debug, Default)]
pub struct CoalescedTask {
    pending: Option<FrameToken>,
}

impl CoalescedTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame unless one is already pending.
    /// Returns true if a new request was made.
    pub fn schedule(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Called when a frame fires. Returns true if `token` is the pending
    /// request, which is then cleared; stale tokens return false.
    pub fn fire(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancel the pending request, if any. Returns true if one was cancelled.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        match self.pending.take() {
            Some(token) => {
                scheduler.cancel_frame(token);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }
}

/// Scheduler driven by hand: frames fire when the host (or a test) says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queued: Vec<FrameToken>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every queued request, oldest first.
    pub fn take_queued(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.queued)
    }

    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Total frames ever requested
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total frames ever cancelled while still queued
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.queued.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let before = self.queued.len();
        self.queued.retain(|t| *t != token);
        if self.queued.len() != before {
            self.cancelled += 1;
        }
    }
}

/// Timer fallback for hosts without a frame callback.
///
/// A request becomes due one interval after it was made; the host polls
/// [`IntervalScheduler::poll`] from its own loop.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Duration,
    next_id: u64,
    queued: Vec<(FrameToken, Instant)>,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(Duration::from_micros(FALLBACK_FRAME_INTERVAL_US))
    }
}

impl IntervalScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            queued: Vec::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Remove and return the requests that are due at `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<FrameToken> {
        let interval = self.interval;
        let mut due = Vec::new();
        self.queued.retain(|(token, requested_at)| {
            if now.saturating_duration_since(*requested_at) >= interval {
                due.push(*token);
                false
            } else {
                true
            }
        });
        due
    }

    /// Time until the earliest queued request becomes due
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.queued
            .iter()
            .map(|(_, at)| (*at + self.interval).saturating_duration_since(now))
            .min()
    }
}

impl FrameScheduler for IntervalScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.queued.push((token, Instant::now()));
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.queued.retain(|(t, _)| *t != token);
    }
}
