//! Allowance fetch outcome

use launchpad_core::{InvestorAllowance, Result};

/// Result of the allowance view call as the page consumes it.
///
/// A failed call is not an error for the page: it degrades to the last
/// known allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowanceOutcome {
    Resolved(InvestorAllowance),
    Degraded { reason: String },
}

impl AllowanceOutcome {
    pub fn from_result(result: Result<InvestorAllowance>) -> Self {
        match result {
            Ok(allowance) => AllowanceOutcome::Resolved(allowance),
            Err(e) => AllowanceOutcome::Degraded {
                reason: e.to_string(),
            },
        }
    }

    /// The allowance to show given the previous value
    pub fn resolve(self, previous: &InvestorAllowance) -> InvestorAllowance {
        match self {
            AllowanceOutcome::Resolved(allowance) => allowance,
            AllowanceOutcome::Degraded { .. } => previous.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_core::Error;

    #[test]
    fn test_ok_resolves() {
        let outcome = AllowanceOutcome::from_result(Ok(InvestorAllowance::new("500")));
        assert_eq!(
            outcome.resolve(&InvestorAllowance::default()),
            InvestorAllowance::new("500")
        );
    }

    #[test]
    fn test_error_degrades_to_previous() {
        let outcome = AllowanceOutcome::from_result(Err(Error::rpc("timeout")));
        assert!(matches!(
            outcome,
            AllowanceOutcome::Degraded { ref reason } if reason.contains("timeout")
        ));
        assert_eq!(
            outcome.resolve(&InvestorAllowance::new("120")),
            InvestorAllowance::new("120")
        );
    }

    #[test]
    fn test_error_without_prior_value_is_zero() {
        let outcome = AllowanceOutcome::from_result(Err(Error::http("refused")));
        assert_eq!(outcome.resolve(&InvestorAllowance::default()).as_str(), "0");
    }
}
