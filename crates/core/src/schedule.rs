//! Start-date scheduling rule for construction projects.
//!
//! Projects that have not reached the Construction stage must start in the
//! future. Once a project is at the Construction stage the start date is
//! unconstrained (it has, after all, already started).

use chrono::{DateTime, Utc};

use crate::error::CoreError;
use crate::stage;

/// Rejection message for a non-future start date on a pre-Construction
/// stage project. The exact wording is part of the API contract.
pub const START_DATE_RULE_MESSAGE: &str =
    "StartDate must be a future date for non Construction stage project.";

/// Validate a proposed start date against the project's stage.
///
/// The effective start date is `start_date` when supplied, otherwise `now`.
/// For any stage before Construction the effective date must be strictly
/// later than `now`; a date exactly equal to `now` is rejected.
///
/// Returns the effective UTC start date for the caller to persist. This
/// function is pure and performs no persistence; it runs identically on
/// create and update, always against the newly proposed values.
pub fn validate_start_date(
    stage: i32,
    start_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, CoreError> {
    let effective = start_date.unwrap_or(now);

    if stage < stage::CONSTRUCTION && effective <= now {
        return Err(CoreError::BusinessRule(START_DATE_RULE_MESSAGE.into()));
    }

    Ok(effective)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn past_start_fails_for_pre_construction_stages() {
        let now = Utc::now();
        let yesterday = now - Duration::days(1);

        for stage in [stage::CONCEPT, stage::DESIGN_DOCUMENTATION, stage::PRE_CONSTRUCTION] {
            let err = validate_start_date(stage, Some(yesterday), now).unwrap_err();
            assert!(
                matches!(err, CoreError::BusinessRule(ref msg) if msg == START_DATE_RULE_MESSAGE),
                "stage {stage} must reject a past start date"
            );
        }
    }

    #[test]
    fn start_exactly_now_fails_for_pre_construction_stages() {
        // The comparison is strict: equal-to-now is not "future".
        let now = Utc::now();
        assert!(validate_start_date(stage::CONCEPT, Some(now), now).is_err());
    }

    #[test]
    fn future_start_passes_for_pre_construction_stages() {
        let now = Utc::now();
        let tomorrow = now + Duration::days(1);

        for stage in [stage::CONCEPT, stage::DESIGN_DOCUMENTATION, stage::PRE_CONSTRUCTION] {
            let effective = validate_start_date(stage, Some(tomorrow), now)
                .unwrap_or_else(|_| panic!("stage {stage} must accept a future start date"));
            assert_eq!(effective, tomorrow);
        }
    }

    #[test]
    fn construction_stage_accepts_any_start() {
        let now = Utc::now();
        let past = now - Duration::days(365);
        let future = now + Duration::days(365);

        assert!(validate_start_date(stage::CONSTRUCTION, Some(past), now).is_ok());
        assert!(validate_start_date(stage::CONSTRUCTION, Some(now), now).is_ok());
        assert!(validate_start_date(stage::CONSTRUCTION, Some(future), now).is_ok());
    }

    #[test]
    fn absent_start_is_treated_as_now() {
        let now = Utc::now();

        // "Now" is not strictly in the future, so pre-Construction fails...
        assert!(validate_start_date(stage::CONCEPT, None, now).is_err());

        // ...while Construction passes and the effective date is now.
        let effective = validate_start_date(stage::CONSTRUCTION, None, now).unwrap();
        assert_eq!(effective, now);
    }

    #[test]
    fn out_of_range_stages_are_accepted_structurally() {
        // Only the `< 4` comparison matters; 5 behaves like Construction,
        // 0 behaves like a pre-Construction stage.
        let now = Utc::now();
        let yesterday = now - Duration::days(1);

        assert!(validate_start_date(5, Some(yesterday), now).is_ok());
        assert!(validate_start_date(0, Some(yesterday), now).is_err());
    }
}
