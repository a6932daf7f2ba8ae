use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static TIMING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize timing based on SALUTA_TIMING environment variable
pub fn init() {
    if std::env::var_os("SALUTA_TIMING").is_some() {
        enable();
    }
}

/// Turn timing on for the rest of the process
pub fn enable() {
    TIMING_ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled
pub fn is_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::Relaxed)
}

/// Log a timing message to stderr if timing is enabled
pub fn log(label: &str, duration: std::time::Duration) {
    if is_enabled() {
        eprintln!("{}", format_line(label, duration));
    }
}

/// Log a timing message with count information
pub fn log_with_count(label: &str, duration: std::time::Duration, count: usize) {
    if is_enabled() {
        eprintln!("{}", format_line_with_count(label, duration, count));
    }
}

fn format_line(label: &str, duration: std::time::Duration) -> String {
    format!("[TIMING] {}: {:.3}ms", label, duration.as_secs_f64() * 1000.0)
}

fn format_line_with_count(label: &str, duration: std::time::Duration, count: usize) -> String {
    let per_item = if count > 0 {
        duration.as_secs_f64() * 1_000_000.0 / count as f64
    } else {
        0.0
    };
    format!(
        "{} ({} items, {:.3}µs/item)",
        format_line(label, duration),
        count,
        per_item
    )
}

/// A guard that logs timing when dropped
pub struct TimingGuard {
    label: &'static str,
    start: Instant,
}

impl TimingGuard {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        log(self.label, self.start.elapsed());
    }
}

/// Macro to time a block of code
#[macro_export]
macro_rules! time_block {
    ($label:expr, $block:expr) => {{
        let start = std::time::Instant::now();
        let result = $block;
        $crate::timing::log($label, start.elapsed());
        result
    }};
}

/// Macro to time a block with count
#[macro_export]
macro_rules! time_block_with_count {
    ($label:expr, $count:expr, $block:expr) => {{
        let start = std::time::Instant::now();
        let result = $block;
        $crate::timing::log_with_count($label, start.elapsed(), $count);
        result
    }};
}
