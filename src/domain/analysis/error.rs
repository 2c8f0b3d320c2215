//! Analysis-specific errors

use thiserror::Error;

use super::{OperationId, QueryState};
use crate::domain::DomainError;

/// Why a query produced no result set
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No operation ID came back within the retry budget
    #[error("Submission failed: no operation ID after {attempts} attempt(s)")]
    SubmissionFailed { attempts: u32 },

    /// The operation never reached the processed state
    #[error("Operation '{operation_id}' not processed after {attempts} status check(s)")]
    ProcessingTimedOut {
        operation_id: OperationId,
        attempts: u32,
    },

    /// A phase was invoked out of order
    #[error("Cannot {action} while query is {state}")]
    InvalidState {
        action: &'static str,
        state: QueryState,
    },

    /// Connection, HTTP or decoding fault
    #[error(transparent)]
    Transport(#[from] DomainError),
}

impl AnalysisError {
    pub fn submission_failed(attempts: u32) -> Self {
        Self::SubmissionFailed { attempts }
    }

    pub fn processing_timed_out(operation_id: OperationId, attempts: u32) -> Self {
        Self::ProcessingTimedOut {
            operation_id,
            attempts,
        }
    }

    pub fn invalid_state(action: &'static str, state: QueryState) -> Self {
        Self::InvalidState { action, state }
    }

    /// Expected failures that are absorbed as "no result" by callers that
    /// do not care about the reason
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            Self::SubmissionFailed { .. } | Self::ProcessingTimedOut { .. }
        )
    }
}
