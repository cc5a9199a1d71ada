// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Frame pacing
//!
//! Schedules presents at a fixed rate. The schedule advances by whole frame
//! intervals, so small wake-up delays do not accumulate into drift. When the
//! loop falls a full frame behind, the schedule restarts from the present
//! instead of firing a burst of catch-up frames.

use std::time::{Duration, Instant};

/// Fixed-rate present scheduler
///
/// All methods take the current time as an argument, which keeps the pacer
/// deterministic under test.
///
/// # Example
///
/// ```
/// use std::time::Instant;
/// use trirast::frontend::FramePacer;
///
/// let start = Instant::now();
/// let mut pacer = FramePacer::starting_at(60, start);
///
/// assert!(pacer.is_due(start));
/// pacer.mark_presented(start);
/// assert!(!pacer.is_due(start));
/// assert_eq!(pacer.next_due(), start + pacer.interval());
/// ```
#[derive(Debug, Clone)]
pub struct FramePacer {
    /// Time between presents
    interval: Duration,
    /// When the next present should happen
    next_due: Instant,
    /// Total presents so far
    presented: u64,
    /// Start of the current FPS measurement window
    window_start: Instant,
    /// Presents inside the current window
    window_frames: u32,
    /// Rate measured over the last complete window
    fps: f32,
}

impl FramePacer {
    /// Create a pacer whose first frame is due now
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a pacer whose first frame is due at `start`
    ///
    /// A `target_fps` of zero is treated as one.
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        let interval = Duration::from_nanos(1_000_000_000 / target_fps.max(1) as u64);

        Self {
            interval,
            next_due: start,
            presented: 0,
            window_start: start,
            window_frames: 0,
            fps: 0.0,
        }
    }

    #[inline(always)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the event loop should wake up next
    #[inline(always)]
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    #[inline(always)]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Record a present at `now` and schedule the next one
    pub fn mark_presented(&mut self, now: Instant) {
        self.presented += 1;
        self.window_frames += 1;

        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.window_frames as f32 / elapsed.as_secs_f32();
            self.window_frames = 0;
            self.window_start = now;
        }
    }

    /// Total presents recorded
    #[inline(always)]
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Measured present rate, updated about once per second
    #[inline(always)]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60)
    }
}
