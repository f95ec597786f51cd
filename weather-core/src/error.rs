/// Outcome of a failed lookup, as shown to the user.
///
/// Only two messages are ever displayed; the underlying cause of
/// [`FetchError::Failed`] is kept for logging.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Location not found")]
    LocationNotFound,
    #[error("Failed to fetch weather")]
    Failed(#[source] anyhow::Error),
}

impl FetchError {
    pub fn is_location_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound)
    }
}

impl From<anyhow::Error> for FetchError {
    fn from(err: anyhow::Error) -> Self {
        Self::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(FetchError::LocationNotFound.to_string(), "Location not found");

        let err = FetchError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "Failed to fetch weather");
    }

    #[test]
    fn failure_keeps_its_cause() {
        let err = FetchError::from(anyhow::anyhow!("status 401"));
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "status 401");
        assert!(!err.is_location_not_found());
    }
}
