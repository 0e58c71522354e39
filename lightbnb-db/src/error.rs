//! Error types for lightbnb-db

use crate::models::ValidationError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Fail-soft read: log the failure and continue with `None`.
///
/// Missing rows are expected and only logged at debug. Anything else
/// is an execution failure the caller will not see, so it is logged at
/// error with the operation name.
pub(crate) fn fail_soft<T>(operation: &'static str, result: Result<T, DbError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err @ DbError::NotFound { .. }) => {
            tracing::debug!(operation, %err, "no matching row");
            None
        }
        Err(err) => {
            tracing::error!(operation, error = %err, "query failed, returning empty result");
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;

    /// Counts error events from this crate while installed on the
    /// current thread.
    pub(crate) struct ErrorCounter {
        count: Arc<AtomicUsize>,
        _guard: DefaultGuard,
    }

    impl ErrorCounter {
        pub(crate) fn install() -> Self {
            let count = Arc::new(AtomicUsize::new(0));
            let subscriber = tracing_subscriber::registry().with(CountErrors(count.clone()));
            let guard = tracing::subscriber::set_default(subscriber);
            Self {
                count,
                _guard: guard,
            }
        }

        pub(crate) fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    struct CountErrors(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountErrors {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            if *meta.level() == Level::ERROR && meta.target().starts_with("lightbnb_db") {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn error_display() {
        let err = DbError::not_found("user", 42);
        assert_eq!(err.to_string(), "not found: user '42'");

        let err = DbError::from(ValidationError::Empty { field: "title" });
        assert_eq!(err.to_string(), "invalid input: title cannot be empty");
    }

    #[test]
    fn fail_soft_logs_only_real_failures() {
        let errors = ErrorCounter::install();

        fail_soft::<i32>("missing", Err(DbError::not_found("user", 1)));
        assert_eq!(errors.count(), 0);

        fail_soft::<i32>("pool", Err(sqlx::Error::PoolTimedOut.into()));
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn fail_soft_swallows_errors() {
        assert_eq!(fail_soft("ok", Ok::<_, DbError>(3)), Some(3));
        assert_eq!(
            fail_soft::<i32>("missing", Err(DbError::not_found("user", 1))),
            None
        );
        assert_eq!(
            fail_soft::<Vec<i32>>("pool", Err(sqlx::Error::PoolTimedOut.into())),
            None
        );
    }
}
