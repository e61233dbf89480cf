//! Layout statistics tracking for debugging and performance analysis.
//!
//! Enable layout stats by compiling with the `layout-stats` feature:
//! ```bash
//! cargo run --example scroll_demo --features layout-stats
//! ```
//!
//! Tracks, per thread:
//! - Scroll area resolutions
//! - Content measurements (each resolution measures the content one to three times)
//! - Resolutions where the horizontal scrollbar was only needed after the
//!   vertical one narrowed the viewport

/// Counters collected since the last reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStats {
    pub resolves: u64,
    pub measurements: u64,
    pub rechecks: u64,
}

impl LayoutStats {
    /// Average number of content measurements per resolution
    pub fn measurements_per_resolve(&self) -> f64 {
        if self.resolves == 0 {
            return 0.0;
        }
        self.measurements as f64 / self.resolves as f64
    }
}

#[cfg(feature = "layout-stats")]
mod inner {
    use super::LayoutStats;
    use std::cell::RefCell;

    thread_local! {
        static STATS: RefCell<LayoutStats> = RefCell::new(LayoutStats::default());
    }

    /// Record one scroll area resolution.
    #[inline]
    pub fn record_resolve(measurements: u32, rechecked: bool) {
        STATS.with(|s| {
            let mut stats = s.borrow_mut();
            stats.resolves += 1;
            stats.measurements += measurements as u64;
            if rechecked {
                stats.rechecks += 1;
            }
        });
    }

    /// Current counters.
    pub fn snapshot() -> LayoutStats {
        STATS.with(|s| *s.borrow())
    }

    /// Return the counters and start over.
    pub fn take() -> LayoutStats {
        STATS.with(|s| std::mem::take(&mut *s.borrow_mut()))
    }

    /// Log the counters and start over.
    pub fn log_summary() {
        let stats = take();
        log::info!(
            "[Layout Stats] resolves={} measurements={} ({:.2}/resolve) rechecks={}",
            stats.resolves,
            stats.measurements,
            stats.measurements_per_resolve(),
            stats.rechecks
        );
    }
}

#[cfg(feature = "layout-stats")]
pub use inner::*;

// No-op implementations when feature is disabled - these get completely inlined away
#[cfg(not(feature = "layout-stats"))]
#[inline(always)]
pub fn record_resolve(_measurements: u32, _rechecked: bool) {}

#[cfg(not(feature = "layout-stats"))]
#[inline(always)]
pub fn snapshot() -> LayoutStats {
    LayoutStats::default()
}

#[cfg(not(feature = "layout-stats"))]
#[inline(always)]
pub fn take() -> LayoutStats {
    LayoutStats::default()
}

#[cfg(not(feature = "layout-stats"))]
#[inline(always)]
pub fn log_summary() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurements_per_resolve() {
        assert_eq!(LayoutStats::default().measurements_per_resolve(), 0.0);
        let stats = LayoutStats {
            resolves: 4,
            measurements: 6,
            rechecks: 1,
        };
        assert_eq!(stats.measurements_per_resolve(), 1.5);
    }

    #[cfg(feature = "layout-stats")]
    #[test]
    fn test_record_and_take() {
        take();
        record_resolve(1, false);
        record_resolve(3, true);
        assert_eq!(
            snapshot(),
            LayoutStats {
                resolves: 2,
                measurements: 4,
                rechecks: 1,
            }
        );
        assert_eq!(take().resolves, 2);
        assert_eq!(snapshot(), LayoutStats::default());
    }

    #[cfg(not(feature = "layout-stats"))]
    #[test]
    fn test_disabled_records_nothing() {
        record_resolve(3, true);
        assert_eq!(snapshot(), LayoutStats::default());
    }
}
