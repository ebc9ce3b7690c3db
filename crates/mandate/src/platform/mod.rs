//! Platform-specific timing and entropy.
//!
//! - **Desktop**: timers come from tokio, which Dioxus desktop already runs on
//! - **Web**: timers come from `gloo-timers` (`setTimeout` under the hood)

use std::sync::atomic::{AtomicU64, Ordering};

/// Waits `ms` milliseconds on the UI executor.
///
/// There is no cancellation handle: dropping the future (for example when the
/// owning component unmounts) is the only way to stop it.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Waits `ms` milliseconds on the UI executor.
///
/// Web version: delays past `u32::MAX` ms are clamped.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh seed for mock-data generation.
///
/// Combines wall-clock nanoseconds with a process-wide counter, so two calls
/// in the same clock tick still differ. The result only seeds
/// `SmallRng::seed_from_u64`, which does its own bit mixing.
pub fn entropy_seed() -> u64 {
    let nanos = instant::SystemTime::now()
        .duration_since(instant::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    combine_seed(nanos, SEED_COUNTER.fetch_add(1, Ordering::Relaxed))
}

fn combine_seed(nanos: u64, count: u64) -> u64 {
    // Counter lands in the bits that change slowest
    nanos.rotate_left(32) ^ count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_seeds_differ() {
        let seeds: std::collections::HashSet<u64> = (0..100).map(|_| entropy_seed()).collect();
        assert_eq!(seeds.len(), 100);
    }

    #[test]
    fn test_same_tick_seeds_differ() {
        let nanos = 1_700_000_000_123_456_789;
        let seeds: std::collections::HashSet<u64> =
            (0..1000).map(|count| combine_seed(nanos, count)).collect();
        assert_eq!(seeds.len(), 1000);
        // Neighbouring ticks with neighbouring counts must not cancel out
        assert_ne!(combine_seed(nanos, 0), combine_seed(nanos + 1, 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_waits_full_delay() {
        let start = tokio::time::Instant::now();
        sleep_ms(1000).await;
        assert!(start.elapsed() >= std::time::Duration::from_millis(1000));
    }
}
