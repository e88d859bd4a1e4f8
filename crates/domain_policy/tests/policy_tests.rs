//! Unit tests for policy setup: threshold configuration, access control,
//! and one-time submission.

use core_kernel::{GeoPoint, PartyId, Timestamp};
use domain_policy::{MeasureType, Policy, PolicyError, PolicyFact, PolicyState, Role};

const LAT: i64 = 504_637_582;
const LON: i64 = 305_071_673;
const PERIOD_START: Timestamp = Timestamp::from_millis(1_700_000_000_000);
const PERIOD_END: Timestamp = Timestamp::from_millis(1_700_086_400_000);

fn fresh_policy() -> Policy {
    Policy::new(PartyId::new(), PartyId::new())
}

mod threshold_configuration {
    use super::*;

    #[test]
    fn all_measures_start_unset() {
        let policy = fresh_policy();
        for measure in MeasureType::ALL {
            let slot = policy.measured_value(measure.index()).unwrap();
            assert!(!slot.is_set);
            assert_eq!((slot.min, slot.max), (0, 0));
        }
    }

    #[test]
    fn insurant_can_configure_a_measure() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();

        policy
            .set_measured_value(insurant, MeasureType::Temperature.index(), 10, 30)
            .unwrap();

        let slot = policy.measured_value(MeasureType::Temperature.index()).unwrap();
        assert_eq!((slot.min, slot.max, slot.is_set), (10, 30, true));
    }

    #[test]
    fn last_write_wins() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();
        let index = MeasureType::WindSpeed.index();

        policy.set_measured_value(insurant, index, 0, 40).unwrap();
        policy.set_measured_value(insurant, index, 5, 25).unwrap();

        let slot = policy.measured_value(index).unwrap();
        assert_eq!((slot.min, slot.max, slot.is_set), (5, 25, true));
    }

    #[test]
    fn oracle_cannot_configure_thresholds() {
        let mut policy = fresh_policy();
        let oracle = policy.oracle();

        let result = policy.set_measured_value(oracle, MeasureType::Temperature.index(), 15, 30);
        assert_eq!(result, Err(PolicyError::Unauthorized { required: Role::Insurant }));

        let slot = policy.measured_value(MeasureType::Temperature.index()).unwrap();
        assert!(!slot.is_set);
    }

    #[test]
    fn invalid_measure_index_is_rejected() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();

        assert_eq!(
            policy.set_measured_value(insurant, 6, 0, 10),
            Err(PolicyError::InvalidMeasure { index: 6 })
        );
        assert_eq!(
            policy.measured_value(200),
            Err(PolicyError::InvalidMeasure { index: 200 })
        );
    }

    #[test]
    fn configuration_is_rejected_after_submission() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();

        policy
            .submit(insurant, LAT, LON, PERIOD_START, PERIOD_END)
            .unwrap();

        let result = policy.set_measured_value(insurant, MeasureType::Humidity.index(), 0, 90);
        assert_eq!(result, Err(PolicyError::InvalidState { state: PolicyState::Submitted }));
    }
}

mod submission {
    use super::*;

    #[test]
    fn insurant_can_submit_once() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();

        policy
            .submit(insurant, LAT, LON, PERIOD_START, PERIOD_END)
            .unwrap();

        assert_eq!(policy.state(), PolicyState::Submitted);
        assert_eq!(policy.state().code(), 1);
        assert_eq!(
            policy.take_facts(),
            vec![PolicyFact::PolicySubmitted {
                lat: LAT,
                lon: LON,
                period_start: PERIOD_START,
                period_end: PERIOD_END,
                insurant,
            }]
        );
    }

    #[test]
    fn oracle_cannot_submit() {
        let mut policy = fresh_policy();
        let oracle = policy.oracle();

        let result = policy.submit(oracle, LAT, LON, PERIOD_START, PERIOD_END);
        assert_eq!(result, Err(PolicyError::Unauthorized { required: Role::Insurant }));
        assert_eq!(policy.state(), PolicyState::Created);
        assert!(policy.take_facts().is_empty());
    }

    #[test]
    fn second_submission_fails_with_identical_arguments() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();

        policy
            .submit(insurant, LAT, LON, PERIOD_START, PERIOD_END)
            .unwrap();

        let result = policy.submit(insurant, LAT, LON, PERIOD_START, PERIOD_END);
        assert_eq!(result, Err(PolicyError::AlreadySubmitted));
    }

    #[test]
    fn second_submission_fails_and_changes_nothing() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();

        policy
            .submit(insurant, LAT, LON, PERIOD_START, PERIOD_END)
            .unwrap();
        policy.take_facts();

        let result = policy.submit(insurant, 0, 0, PERIOD_START.offset(10), PERIOD_END.offset(10));
        assert_eq!(result, Err(PolicyError::AlreadySubmitted));

        // The first submission's values stand.
        assert_eq!(policy.location(), Some(GeoPoint::new(LAT, LON)));
        let period = policy.period().unwrap();
        assert_eq!((period.start, period.end), (PERIOD_START, PERIOD_END));
        assert!(policy.take_facts().is_empty());
    }

    #[test]
    fn reversed_period_is_rejected() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();

        let result = policy.submit(insurant, LAT, LON, PERIOD_END, PERIOD_START);
        assert!(matches!(result, Err(PolicyError::InvalidPeriod(_))));
        assert_eq!(policy.state(), PolicyState::Created);
        assert!(policy.location().is_none());
    }
}

mod access_control {
    use super::*;

    #[test]
    fn insurant_cannot_report_conditions() {
        let mut policy = fresh_policy();
        let insurant = policy.insurant();
        policy
            .submit(insurant, LAT, LON, PERIOD_START, PERIOD_END)
            .unwrap();

        let result = policy.update_measured_conditions(
            insurant,
            MeasureType::Temperature.index(),
            20,
            PERIOD_START.offset(1_000),
        );
        assert_eq!(result, Err(PolicyError::Unauthorized { required: Role::Oracle }));
        assert_eq!(policy.state(), PolicyState::Submitted);
    }

    #[test]
    fn strangers_are_rejected_everywhere() {
        let mut policy = fresh_policy();
        let stranger = PartyId::new();

        assert!(policy
            .set_measured_value(stranger, MeasureType::Temperature.index(), 0, 1)
            .is_err());
        assert!(policy.submit(stranger, LAT, LON, PERIOD_START, PERIOD_END).is_err());
        assert!(policy
            .update_measured_conditions(stranger, 0, 0, PERIOD_START)
            .is_err());
        assert_eq!(policy.state(), PolicyState::Created);
    }

    #[test]
    fn identities_are_fixed_at_creation() {
        let insurant = PartyId::new();
        let oracle = PartyId::new();
        let policy = Policy::new(insurant, oracle);

        assert_eq!(policy.insurant(), insurant);
        assert_eq!(policy.oracle(), oracle);
        assert_eq!(policy.parties().holder_of(Role::Insurant), insurant);
        assert_eq!(policy.parties().holder_of(Role::Oracle), oracle);
    }
}
