use crate::api::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("failed to load dashboard data: {0}")]
    FetchFailed(#[from] ApiError),
    #[error("client action `{0}` is already registered")]
    ActionAlreadyRegistered(String),
}

impl DashboardError {
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_underlying_cause() {
        let err = DashboardError::from(ApiError::request_failed("connection reset"));
        assert!(err.is_fetch_failure());
        assert_eq!(
            err.to_string(),
            "failed to load dashboard data: connection reset"
        );

        let err = DashboardError::ActionAlreadyRegistered("shopping_dashboard".into());
        assert!(!err.is_fetch_failure());
        assert_eq!(
            err.to_string(),
            "client action `shopping_dashboard` is already registered"
        );
    }
}
