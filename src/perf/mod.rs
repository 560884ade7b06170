/// Performance measurement utilities
/// Each pipeline stage can be timed and logged for optimization analysis
pub mod profiling;

pub use profiling::{CounterSnapshot, FunctionCounters, FUNCTION_COUNTERS};

use std::time::{Duration, Instant};

pub struct PerfTimer {
    name: &'static str,
    start: Instant,
}

impl PerfTimer {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        log::debug!("[PERF] {}: {}μs", self.name, self.elapsed().as_micros());
    }
}

/// Per-frame stage timings, in microseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfStats {
    pub clear_us: f64,
    pub clip_us: f64,
    pub raster_us: f64,
    pub wireframe_us: f64,
    pub total_us: f64,
}

impl PerfStats {
    fn share(&self, part: f64) -> f64 {
        if self.total_us > 0.0 {
            part / self.total_us * 100.0
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        log::debug!("========== FRAME SUMMARY ==========");
        log::debug!("Clear:       {:8.2}μs ({:5.1}%)", self.clear_us, self.share(self.clear_us));
        log::debug!("Clip/Cull:   {:8.2}μs ({:5.1}%)", self.clip_us, self.share(self.clip_us));
        log::debug!("Rasterize:   {:8.2}μs ({:5.1}%)", self.raster_us, self.share(self.raster_us));
        log::debug!("Wireframes:  {:8.2}μs ({:5.1}%)", self.wireframe_us, self.share(self.wireframe_us));
        log::debug!("Total:       {:8.2}μs", self.total_us);
    }
}

/// Macro for easy performance measurement
#[macro_export]
macro_rules! perf_scope {
    ($name:expr) => {
        let _timer = $crate::perf::PerfTimer::new($name);
    };
}
