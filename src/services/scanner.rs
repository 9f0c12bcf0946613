use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::database::{models::SubscriptionRecord, store::SubscriptionStore};
use crate::services::notifier::Notifier;
use crate::utils::logging::{log_delivery_error, log_timeout};

/// Probability used by the placeholder availability check.
pub const DEFAULT_NOTIFY_PROBABILITY: f64 = 0.3;

/// Decides whether seats are available for one subscription.
#[async_trait]
pub trait AvailabilityCheck: Send + Sync {
    async fn is_available(&self, record: &SubscriptionRecord) -> bool;
}

/// Coin flip standing in for a real seat lookup.
#[derive(Debug, Clone, Copy)]
pub struct RandomAvailability {
    probability: f64,
}

impl RandomAvailability {
    /// `probability` is clamped to `0.0..=1.0`; NaN counts as zero.
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomAvailability {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFY_PROBABILITY)
    }
}

#[async_trait]
impl AvailabilityCheck for RandomAvailability {
    async fn is_available(&self, _record: &SubscriptionRecord) -> bool {
        rand::rng().random_bool(self.probability)
    }
}

/// Counters for one scan tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub checked: usize,
    pub found: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Text sent when seats turn up for `record`.
pub fn availability_message(record: &SubscriptionRecord) -> String {
    format!(
        "⚠️ Seats available: {} on the train {} → {} ({})",
        record.place_type, record.origin, record.destination, record.date
    )
}

/// Runs one scan tick over every subscription.
///
/// Each positive check triggers one notification bounded by `notify_timeout`.
/// A failed or timed-out delivery is logged and counted; the scan moves on.
pub async fn scan_subscriptions(
    store: &SubscriptionStore,
    checker: &dyn AvailabilityCheck,
    notifier: &dyn Notifier,
    notify_timeout: Duration,
) -> ScanReport {
    let mut report = ScanReport::default();

    for record in store.list_all().await {
        report.checked += 1;

        if !checker.is_available(&record).await {
            continue;
        }
        report.found += 1;

        let text = availability_message(&record);
        match tokio::time::timeout(notify_timeout, notifier.notify(record.user_id, &text)).await {
            Ok(Ok(())) => report.delivered += 1,
            Ok(Err(e)) => {
                log_delivery_error(record.user_id, &e.to_string());
                report.failed += 1;
            }
            Err(_) => {
                log_timeout(
                    "notify",
                    notify_timeout.as_secs(),
                    Some(&format!("chat {}", record.user_id)),
                );
                report.failed += 1;
            }
        }
    }

    report
}

/// Periodic availability scan driven by a cron schedule.
pub struct ScannerService {
    store: Arc<SubscriptionStore>,
    checker: Arc<dyn AvailabilityCheck>,
    notifier: Arc<dyn Notifier>,
    notify_timeout: Duration,
    scheduler: JobScheduler,
}

impl ScannerService {
    pub async fn new(
        store: Arc<SubscriptionStore>,
        checker: Arc<dyn AvailabilityCheck>,
        notifier: Arc<dyn Notifier>,
        notify_timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            store,
            checker,
            notifier,
            notify_timeout,
            scheduler,
        })
    }

    /// Registers the scan on `schedule` (six-field cron, seconds first) and
    /// starts the scheduler.
    pub async fn start(&mut self, schedule: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = self.store.clone();
        let checker = self.checker.clone();
        let notifier = self.notifier.clone();
        let notify_timeout = self.notify_timeout;

        let scan_job = Job::new_async(schedule, move |_uuid, _l| {
            let store = store.clone();
            let checker = checker.clone();
            let notifier = notifier.clone();
            Box::pin(async move {
                let report =
                    scan_subscriptions(&store, checker.as_ref(), notifier.as_ref(), notify_timeout).await;
                tracing::info!(
                    "Availability scan finished: {} checked, {} found, {} delivered, {} failed",
                    report.checked,
                    report.found,
                    report.delivered,
                    report.failed
                );
            })
        })?;

        self.scheduler.add(scan_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Availability scanner started with schedule '{}'", schedule);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    /// Runs one tick immediately, outside the schedule.
    pub async fn scan_now(&self) -> ScanReport {
        scan_subscriptions(
            &self.store,
            self.checker.as_ref(),
            self.notifier.as_ref(),
            self.notify_timeout,
        )
        .await
    }
}
