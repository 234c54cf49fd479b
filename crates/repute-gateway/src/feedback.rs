//! Feedback submissions.
//!
//! A submission is validated here, before anything touches the ledger:
//! the target must be a well-formed account, the rating `1..=5`, and the
//! comment between 3 and 200 characters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use repute_core::constants::{MAX_RATING, MIN_RATING};
use repute_core::FeedbackCategory;

use crate::address::validate_address;
use crate::error::GatewayError;
use crate::traits::FeedbackLedger;

/// Shortest accepted comment, in characters.
pub const MIN_COMMENT_CHARS: usize = 3;

/// Longest accepted comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 200;

/// Feedback about `address`, as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub address: String,
    pub category: FeedbackCategory,
    pub rating: u8,
    pub comment: String,
}

impl FeedbackSubmission {
    pub fn validate(&self) -> Result<(), GatewayError> {
        validate_address(&self.address)?;
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(GatewayError::InvalidRating(self.rating));
        }
        let len = self.comment.chars().count();
        if len < MIN_COMMENT_CHARS {
            return Err(GatewayError::InvalidComment(format!(
                "must be at least {MIN_COMMENT_CHARS} characters"
            )));
        }
        if len > MAX_COMMENT_CHARS {
            return Err(GatewayError::InvalidComment(format!(
                "cannot exceed {MAX_COMMENT_CHARS} characters"
            )));
        }
        Ok(())
    }

    /// Canonical bytes of this submission from `from`, used for hashing.
    pub fn envelope_bytes(&self, from: &str) -> Vec<u8> {
        format!(
            "{from}\n{}\n{}\n{}\n{}",
            self.address, self.rating, self.category, self.comment
        )
        .into_bytes()
    }
}

/// A submission accepted by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub from: String,
    pub submission: FeedbackSubmission,
    pub tx_hash: String,
    pub recorded_at: DateTime<Utc>,
}

/// Validate `submission` and record it on `ledger` on behalf of `from`.
///
/// Nothing is sent to the ledger if validation fails.
pub async fn record_feedback<L: FeedbackLedger + ?Sized>(
    ledger: &L,
    from: &str,
    submission: FeedbackSubmission,
) -> Result<FeedbackRecord, GatewayError> {
    validate_address(from)?;
    submission.validate()?;

    let tx_hash = ledger.record(from, &submission).await?;
    info!(
        from,
        to = %submission.address,
        rating = submission.rating,
        category = %submission.category,
        %tx_hash,
        "feedback recorded"
    );

    Ok(FeedbackRecord {
        from: from.to_string(),
        submission,
        tx_hash,
        recorded_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockFeedbackLedger;

    const FROM: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
    const TO: &str = "GCEZWKCA5VLDNRLN3RPRJMRZOX3Z6G5CHCGSNFHEYVXM3XOJMDS674JZ";

    fn submission(rating: u8, comment: &str) -> FeedbackSubmission {
        FeedbackSubmission {
            address: TO.into(),
            category: FeedbackCategory::Return,
            rating,
            comment: comment.into(),
        }
    }

    #[test]
    fn validation_rules() {
        assert!(submission(5, "Returned on time").validate().is_ok());
        assert_eq!(submission(0, "fine").validate(), Err(GatewayError::InvalidRating(0)));
        assert_eq!(submission(6, "fine").validate(), Err(GatewayError::InvalidRating(6)));
        assert!(matches!(
            submission(3, "ok").validate(),
            Err(GatewayError::InvalidComment(_))
        ));
        assert!(submission(3, &"x".repeat(200)).validate().is_ok());
        assert!(submission(3, &"x".repeat(201)).validate().is_err());
    }

    #[test]
    fn comment_length_counts_chars() {
        // Three characters, six bytes.
        assert!(submission(4, "\u{e9}\u{e9}\u{e9}").validate().is_ok());
    }

    #[test]
    fn invalid_target_address() {
        let mut s = submission(4, "great");
        s.address = "GSHORT".into();
        assert!(matches!(s.validate(), Err(GatewayError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn records_through_ledger() {
        let mut ledger = MockFeedbackLedger::new();
        ledger
            .expect_record()
            .withf(|from, s| from.to_string() == FROM && s.rating == 4)
            .times(1)
            .returning(|_, _| Ok("ab".repeat(32)));

        let record = record_feedback(&ledger, FROM, submission(4, "Smooth lease"))
            .await
            .unwrap();
        assert_eq!(record.tx_hash, "ab".repeat(32));
        assert_eq!(record.from, FROM);
        assert_eq!(record.submission.category, FeedbackCategory::Return);
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_ledger() {
        let mut ledger = MockFeedbackLedger::new();
        ledger.expect_record().times(0);

        let err = record_feedback(&ledger, FROM, submission(9, "nope"))
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::InvalidRating(9));
    }

    #[tokio::test]
    async fn ledger_errors_propagate() {
        let mut ledger = MockFeedbackLedger::new();
        ledger
            .expect_record()
            .returning(|_, _| Err(GatewayError::Submission("ledger closed".into())));

        let err = record_feedback(&ledger, FROM, submission(2, "Late return"))
            .await
            .unwrap_err();
        assert_eq!(err, GatewayError::Submission("ledger closed".into()));
    }
}
