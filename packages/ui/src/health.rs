//! Periodic backend liveness polling.

use std::time::Duration;

use api::HealthProbe;

/// Fixed delay between two health checks.
pub const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Check immediately, then every `interval`, handing each result to `report`.
///
/// Never returns. Cancel it by dropping the future (Dioxus does so when the
/// owning scope unmounts).
pub async fn poll_health<P, F>(probe: &P, interval: Duration, mut report: F)
where
    P: HealthProbe,
    F: FnMut(bool),
{
    loop {
        let online = probe.is_online().await;
        tracing::trace!("Backend online: {}", online);
        report(online);
        sleep(interval).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryBackend;

    #[tokio::test(start_paused = true)]
    async fn test_checks_immediately_then_every_interval() {
        let backend = MemoryBackend::new();
        backend.set_online(true);
        let mut reports = Vec::new();

        // Flip the backend after every check; t = 0s, 30s, 60s fit in 65s.
        let poll = poll_health(&backend, HEALTH_CHECK_INTERVAL, |online| {
            reports.push(online);
            backend.set_online(!online);
        });
        let stopped = tokio::time::timeout(Duration::from_secs(65), poll).await;

        assert!(stopped.is_err());
        assert_eq!(reports, vec![true, false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_report_offline_and_keep_polling() {
        let backend = MemoryBackend::new();
        backend.set_online(true);
        backend.set_unreachable(true);
        let mut reports = Vec::new();

        let poll = poll_health(&backend, HEALTH_CHECK_INTERVAL, |online| {
            reports.push(online);
            backend.set_unreachable(false);
        });
        let _ = tokio::time::timeout(Duration::from_secs(31), poll).await;

        assert_eq!(reports, vec![false, true]);
    }
}
