use core::sync::atomic::{AtomicBool, Ordering};

static TRACE_ENABLED: AtomicBool = AtomicBool::new(false);

// When set, every arithmetic entry point emits a `log::trace!` record.
pub fn is_trace_enabled() -> bool {
    TRACE_ENABLED.load(Ordering::Relaxed)
}

pub fn set_trace_enabled(val: bool) {
    TRACE_ENABLED.store(val, Ordering::Relaxed)
}
