use crate::calendar::CalendarMonthSnapshot;
use crate::sync::availability_api::{ApiError, AvailabilityApi, MonthKey};

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotStatus {
    Pending,
    Loaded,
    Unavailable(String),
}

/// Tracks which month is on screen and the snapshot that belongs to it.
///
/// Every request is tagged with its [`MonthKey`]; a response whose key no
/// longer matches the displayed month is dropped, so a slow fetch for a month
/// the user already left can never overwrite the current one.
#[derive(Debug)]
pub struct MonthSync {
    current: MonthKey,
    snapshot: Option<CalendarMonthSnapshot>,
    status: SnapshotStatus,
}

impl MonthSync {
    pub fn new(key: MonthKey) -> Self {
        Self {
            current: key,
            snapshot: None,
            status: SnapshotStatus::Pending,
        }
    }

    pub fn current(&self) -> &MonthKey {
        &self.current
    }

    pub fn snapshot(&self) -> Option<&CalendarMonthSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn status(&self) -> &SnapshotStatus {
        &self.status
    }

    /// Makes `key` the displayed month and returns the request tag to fetch with.
    pub fn navigate(&mut self, key: MonthKey) -> MonthKey {
        if key != self.current {
            tracing::debug!("Navigating to {}-{:02}", key.year, key.month);
            self.current = key;
            self.snapshot = None;
            self.status = SnapshotStatus::Pending;
        }
        self.current.clone()
    }

    /// Applies a fetch result. Returns `false` when the response was stale.
    pub fn accept(
        &mut self,
        key: &MonthKey,
        result: Result<CalendarMonthSnapshot, ApiError>,
    ) -> bool {
        if *key != self.current {
            tracing::debug!(
                "Discarding stale availability for {}-{:02}; showing {}-{:02}",
                key.year,
                key.month,
                self.current.year,
                self.current.month
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.status = SnapshotStatus::Loaded;
            }
            Err(e) => {
                tracing::warn!(
                    "Availability for {}-{:02} unavailable, assuming open days: {}",
                    key.year,
                    key.month,
                    e
                );
                self.snapshot = None;
                self.status = SnapshotStatus::Unavailable(e.to_string());
            }
        }
        true
    }
}

/// Fetches a month and folds any failure into "no snapshot".
pub async fn fetch_snapshot<A>(api: &A, key: MonthKey) -> Option<CalendarMonthSnapshot>
where
    A: AvailabilityApi + ?Sized,
{
    let label = format!("{}-{:02}", key.year, key.month);
    match api.fetch_calendar_month(key).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("Availability for {} unavailable, assuming open days: {}", label, e);
            None
        }
    }
}
