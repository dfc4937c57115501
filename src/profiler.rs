use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Scoped profiler accumulating wall time and call counts per section.
pub struct Profiler {
    sections: HashMap<&'static str, Section>,
}

#[derive(Clone, Copy, Default)]
pub struct Section {
    pub calls: u64,
    pub total: Duration,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            sections: HashMap::new(),
        }
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        let section = self.sections.entry(guard.name).or_default();
        section.calls += 1;
        section.total += guard.start.elapsed();
    }

    /// Sections sorted by cumulative time, longest first.
    pub fn report_sorted(&self) -> Vec<(&'static str, Section)> {
        let mut rows: Vec<_> = self.sections.iter().map(|(n, s)| (*n, *s)).collect();
        rows.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        rows
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn print_and_clear(&mut self) {
        for (name, section) in self.report_sorted() {
            println!(
                "{:<18} {:>8} calls  {:?}",
                name, section.calls, section.total
            );
        }
        self.clear();
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. The guard reports into the global profiler
/// when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard {
        name,
        start: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Profile a scope only when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
