/// Instrumentation for the frame pipeline
/// Counts calls and triangles per stage; compiled in with the `profiling` feature
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe performance counters for function call tracking
pub struct FunctionCounters {
    // Clip/cull counters
    pub populate_calls: AtomicU64,
    pub triangles_culled: AtomicU64,
    pub triangles_queued: AtomicU64,
    pub triangles_rejected: AtomicU64,

    // Rasterization counters
    pub triangles_filled: AtomicU64,
    pub spans_emitted: AtomicU64,

    // Framebuffer counters
    pub framebuffer_clear_calls: AtomicU64,

    pub frames_rendered: AtomicU64,
}

impl FunctionCounters {
    pub const fn new() -> Self {
        Self {
            populate_calls: AtomicU64::new(0),
            triangles_culled: AtomicU64::new(0),
            triangles_queued: AtomicU64::new(0),
            triangles_rejected: AtomicU64::new(0),
            triangles_filled: AtomicU64::new(0),
            spans_emitted: AtomicU64::new(0),
            framebuffer_clear_calls: AtomicU64::new(0),
            frames_rendered: AtomicU64::new(0),
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        for counter in self.all() {
            counter.store(0, Ordering::Relaxed);
        }
    }

    fn all(&self) -> [&AtomicU64; 8] {
        [
            &self.populate_calls,
            &self.triangles_culled,
            &self.triangles_queued,
            &self.triangles_rejected,
            &self.triangles_filled,
            &self.spans_emitted,
            &self.framebuffer_clear_calls,
            &self.frames_rendered,
        ]
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            populate_calls: self.populate_calls.load(Ordering::Relaxed),
            triangles_culled: self.triangles_culled.load(Ordering::Relaxed),
            triangles_queued: self.triangles_queued.load(Ordering::Relaxed),
            triangles_rejected: self.triangles_rejected.load(Ordering::Relaxed),
            triangles_filled: self.triangles_filled.load(Ordering::Relaxed),
            spans_emitted: self.spans_emitted.load(Ordering::Relaxed),
            framebuffer_clear_calls: self.framebuffer_clear_calls.load(Ordering::Relaxed),
            frames_rendered: self.frames_rendered.load(Ordering::Relaxed),
        }
    }
}

impl Default for FunctionCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of counter values at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub populate_calls: u64,
    pub triangles_culled: u64,
    pub triangles_queued: u64,
    pub triangles_rejected: u64,
    pub triangles_filled: u64,
    pub spans_emitted: u64,
    pub framebuffer_clear_calls: u64,
    pub frames_rendered: u64,
}

impl CounterSnapshot {
    /// Average spans per filled triangle, or 0 before anything was filled.
    pub fn spans_per_triangle(&self) -> f64 {
        if self.triangles_filled == 0 {
            return 0.0;
        }
        self.spans_emitted as f64 / self.triangles_filled as f64
    }

    /// Log a formatted report at info level
    pub fn log_report(&self) {
        log::info!("=== Pipeline Counters Report ===");
        log::info!("  frames rendered:            {:12}", self.frames_rendered);
        log::info!("  populate calls:             {:12}", self.populate_calls);
        log::info!("  triangles culled:           {:12}", self.triangles_culled);
        log::info!("  triangles queued:           {:12}", self.triangles_queued);
        log::info!("  triangles rejected:         {:12}", self.triangles_rejected);
        log::info!("  triangles filled:           {:12}", self.triangles_filled);
        log::info!("  spans emitted:              {:12}", self.spans_emitted);
        log::info!("  spans per triangle:         {:12.2}", self.spans_per_triangle());
        log::info!("  framebuffer clear calls:    {:12}", self.framebuffer_clear_calls);
    }
}

/// Global function counters instance
pub static FUNCTION_COUNTERS: FunctionCounters = FunctionCounters::new();

/// Macro for incrementing a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_call {
    ($counter:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    };
}

/// Macro for adding to a counter (only when profiling feature is enabled)
#[macro_export]
macro_rules! count_add {
    ($counter:expr, $value:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add($value, std::sync::atomic::Ordering::Relaxed);
        }
    };
}
