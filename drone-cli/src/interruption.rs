//! Interruption handler.

#[cfg(test)]
#[path = "../tests/unit/interruption_test.rs"]
mod interruption_test;

use drone_tours::core::utils::{Quota, TimeQuota};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static SHOULD_INTERRUPT: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Creates a quota which is reached when time is over or the process receives Ctrl-C.
/// Time is counted from the moment of creation.
pub fn create_interruption_quota(max_time: Option<usize>) -> Arc<dyn Quota + Send + Sync> {
    let inner = max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as f64)));

    Arc::new(InterruptionQuota { inner, should_interrupt: get_interruption_flag() })
}

/// Returns a flag set by the signal handler. The handler is installed once per process.
fn get_interruption_flag() -> Arc<AtomicBool> {
    SHOULD_INTERRUPT
        .get_or_init(|| {
            let should_interrupt = Arc::new(AtomicBool::new(false));

            if let Err(err) = ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || should_interrupt.store(true, Ordering::Relaxed)
            }) {
                eprintln!("cannot set interruption handler, Ctrl-C is ignored by solver: '{err}'");
            }

            should_interrupt
        })
        .clone()
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.should_interrupt.load(Ordering::Relaxed)
    }
}
