use std::future::Future;
use std::time::Duration;

/// Upper bound for calls that touch one record.
pub const SINGLE_RECORD: Duration = Duration::from_secs(5);

/// Upper bound for listings and aggregates.
pub const COLLECTION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("storage call exceeded {0:?}")]
pub struct DeadlineExceeded(pub Duration);

/// Runs a persistence call under a deadline. An expired call is dropped,
/// so a single-statement write either committed before expiry or never ran.
pub async fn bounded<T, E, F>(limit: Duration, call: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<DeadlineExceeded>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::warn!(limit_ms = limit.as_millis() as u64, "Storage call timed out");
            Err(DeadlineExceeded(limit).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum ProbeError {
        Slow,
        Broken,
    }

    impl From<DeadlineExceeded> for ProbeError {
        fn from(_: DeadlineExceeded) -> Self {
            ProbeError::Slow
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_surfaces_as_deadline_error() {
        let result: Result<(), ProbeError> = bounded(SINGLE_RECORD, async {
            tokio::time::sleep(Duration::from_secs(6)).await;
            Ok(())
        })
        .await;

        assert_eq!(result, Err(ProbeError::Slow));
    }

    #[tokio::test(start_paused = true)]
    async fn collection_budget_is_longer_than_single_record() {
        let result: Result<u8, ProbeError> = bounded(COLLECTION, async {
            tokio::time::sleep(Duration::from_secs(7)).await;
            Ok(7)
        })
        .await;

        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn inner_error_passes_through() {
        let result: Result<(), ProbeError> =
            bounded(SINGLE_RECORD, async { Err(ProbeError::Broken) }).await;
        assert_eq!(result, Err(ProbeError::Broken));
    }
}
