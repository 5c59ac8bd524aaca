use crate::models::RefundStatus;
use serde::Serialize;

/// The linear refund track, in order. `Rejected` is deliberately absent: it
/// is an escape hatch reachable from any non-terminal state, not a step.
pub const REFUND_STEPS: [RefundStatus; 5] = [
    RefundStatus::Requested,
    RefundStatus::Verified,
    RefundStatus::ProcessingBank,
    RefundStatus::Sent,
    RefundStatus::Completed,
];

/// Progress of a refund along the five-step track, for display.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RefundProgress {
    /// 0..=100; a rejected refund renders as a fully filled bar
    pub percent: u8,
    /// Set only for rejected refunds, which sit off the linear track
    pub rejected: bool,
}

impl RefundProgress {
    pub fn for_status(status: RefundStatus) -> Self {
        if status == RefundStatus::Rejected {
            return Self {
                percent: 100,
                rejected: true,
            };
        }

        let index = REFUND_STEPS
            .iter()
            .position(|step| *step == status)
            .unwrap_or(0);
        Self {
            percent: (index * 100 / (REFUND_STEPS.len() - 1)) as u8,
            rejected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_follows_step_position() {
        assert_eq!(
            RefundProgress::for_status(RefundStatus::Requested),
            RefundProgress {
                percent: 0,
                rejected: false
            }
        );
        assert_eq!(
            RefundProgress::for_status(RefundStatus::Verified).percent,
            25
        );
        assert_eq!(
            RefundProgress::for_status(RefundStatus::ProcessingBank).percent,
            50
        );
        assert_eq!(RefundProgress::for_status(RefundStatus::Sent).percent, 75);
        assert_eq!(
            RefundProgress::for_status(RefundStatus::Completed).percent,
            100
        );
    }

    #[test]
    fn rejected_fills_the_bar_and_sets_the_flag() {
        let progress = RefundProgress::for_status(RefundStatus::Rejected);
        assert_eq!(progress.percent, 100);
        assert!(progress.rejected);
    }

    #[test]
    fn terminal_states_are_completed_and_rejected() {
        assert!(RefundStatus::Completed.is_terminal());
        assert!(RefundStatus::Rejected.is_terminal());
        assert!(!RefundStatus::Sent.is_terminal());
        assert!(!RefundStatus::Requested.is_terminal());
    }
}
