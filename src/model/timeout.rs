// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2026 netbridge-rs contributors

use std::time::{Duration, Instant};

/// Default lifetime used by [`Timeout::default`].
const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// A monotonic deadline: `start + duration`.
///
/// `start` is always taken from [`Instant::now`] — never wall-clock time —
/// so deadlines are immune to clock adjustments.
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    start: Instant,
    duration: Duration,
}

impl Timeout {
    pub fn new(duration: Duration) -> Self {
        Self {
            start: Instant::now(),
            duration,
        }
    }

    /// `true` once `start + duration` has passed.
    pub fn expired(&self) -> bool {
        self.start + self.duration < Instant::now()
    }

    /// Restart the deadline from now, keeping the same duration.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Milliseconds remaining; negative once expired.
    pub fn time_left_millis(&self) -> i64 {
        let deadline = self.start + self.duration;
        let now = Instant::now();
        if deadline >= now {
            deadline.duration_since(now).as_millis() as i64
        } else {
            -(now.duration_since(deadline).as_millis() as i64)
        }
    }

    /// [`Self::time_left_millis`] clamped to zero, the form consumers should
    /// use when displaying a countdown.
    pub fn time_left_millis_clamped(&self) -> u64 {
        self.time_left_millis().max(0) as u64
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
