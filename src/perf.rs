//! Performance monitoring for the recompute path.
//!
//! ## Features
//!
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Recompute statistics**: per-frame resolver timing and candidate counts
//! - **Conditional compilation**: zero-cost when profiling disabled
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! marquee = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn recompute() {
//!     profile_scope!("recompute");
//!     // ... work ...
//! }
//! ```

use crate::constants::TARGET_FRAME_MS;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Number of samples to keep for rolling statistics
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Recompute Statistics
// ============================================================================

/// Rolling statistics over resolver passes.
#[derive(Debug, Clone)]
pub struct RecomputeStats {
    /// Recent resolver timings in milliseconds
    samples: VecDeque<f64>,
    /// Running sum of `samples`
    sum_ms: f64,
    /// Total resolver passes
    count: u64,
    /// Candidates tested in the last pass
    last_candidates: usize,
    max_ms: f64,
}

impl Default for RecomputeStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            sum_ms: 0.0,
            count: 0,
            last_candidates: 0,
            max_ms: 0.0,
        }
    }
}

impl RecomputeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolver pass.
    pub fn record(&mut self, candidates_tested: usize, elapsed_ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(elapsed_ms);
        self.sum_ms += elapsed_ms;
        self.count += 1;
        self.last_candidates = candidates_tested;
        self.max_ms = self.max_ms.max(elapsed_ms);

        if elapsed_ms > TARGET_FRAME_MS {
            warn!(
                candidates = candidates_tested,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Resolver pass exceeded frame budget"
            );
        }
    }

    /// Total resolver passes since creation or the last reset
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn last_candidates(&self) -> usize {
        self.last_candidates
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Average time over recent samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over recent samples.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs duration on drop if it ran past its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (lower threshold, 1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Run a closure and return its result with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
