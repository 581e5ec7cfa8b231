use valentine_core::identity::{IdentityForm, SubmitOutcome, REJECTION_MESSAGE};
use valentine_core::{is_expected_identity, verify_identity, FormData, FormField, IdentityError};

fn form(first: &str, last: &str, day: &str, month: &str, year: &str) -> FormData {
    FormData {
        first_name: first.to_string(),
        last_name: last.to_string(),
        dob_day: day.to_string(),
        dob_month: month.to_string(),
        dob_year: year.to_string(),
        address: "3 place du Capitole, Toulouse".to_string(),
    }
}

#[test]
fn accepts_both_spellings_with_case_and_whitespace() {
    for first in ["maeva", "Maëva", "  MAEVA ", "MAËVA", "maëva\t"] {
        for last in ["bagur", "BAGUR", " Bagur  "] {
            assert!(
                is_expected_identity(&form(first, last, "27", "01", "2001")),
                "{first:?} {last:?} should match"
            );
        }
    }
}

#[test]
fn rejects_wrong_spellings() {
    for first in ["mave", "maevaa", "ma eva", "", "Maéva"] {
        assert_eq!(
            verify_identity(&form(first, "bagur", "27", "01", "2001")),
            Err(IdentityError::FirstName)
        );
    }
    for last in ["bagurr", "bag", "", "b agur"] {
        assert_eq!(
            verify_identity(&form("maeva", last, "27", "01", "2001")),
            Err(IdentityError::LastName)
        );
    }
}

#[test]
fn rejects_any_other_date() {
    let wrong_dates = [
        ("26", "01", "2001"),
        ("27", "02", "2001"),
        ("27", "01", "2000"),
        ("01", "01", "2001"),
        ("27", "1", "2001"),
    ];
    for (day, month, year) in wrong_dates {
        assert_eq!(
            verify_identity(&form("maeva", "bagur", day, month, year)),
            Err(IdentityError::DateOfBirth)
        );
    }
}

#[test]
fn all_groups_must_hold() {
    assert!(!is_expected_identity(&form("maeva", "dupont", "26", "01", "2001")));
    assert!(!is_expected_identity(&FormData::default()));
}

#[test]
fn scenario_correct_identity_enters_submitting() {
    let mut state = IdentityForm::default();
    state.edit(FormField::FirstName, "maeva".to_string());
    state.edit(FormField::LastName, "BAGUR".to_string());
    state.edit(FormField::DobDay, "27".to_string());
    state.edit(FormField::DobMonth, "01".to_string());
    state.edit(FormField::DobYear, "2001".to_string());
    state.edit(FormField::Address, "ici".to_string());

    let outcome = state.submit();
    let SubmitOutcome::Accepted(data) = outcome else {
        panic!("expected acceptance, got {outcome:?}");
    };
    assert_eq!(data.address, "ici");
    assert!(state.is_submitting());
    assert_eq!(state.error, None);
    assert_eq!(state.submit(), SubmitOutcome::Ignored);
}

#[test]
fn scenario_wrong_day_keeps_values_for_correction() {
    let mut state = IdentityForm::default();
    state.edit(FormField::FirstName, "maeva".to_string());
    state.edit(FormField::LastName, "BAGUR".to_string());
    state.edit(FormField::DobDay, "26".to_string());
    state.edit(FormField::DobMonth, "01".to_string());
    state.edit(FormField::DobYear, "2001".to_string());
    let before = state.data.clone();

    assert_eq!(
        state.submit(),
        SubmitOutcome::Rejected(IdentityError::DateOfBirth)
    );
    assert_eq!(state.error, Some(REJECTION_MESSAGE));
    assert!(!state.is_submitting());
    assert_eq!(state.data, before);

    state.edit(FormField::DobDay, "27".to_string());
    assert!(matches!(state.submit(), SubmitOutcome::Accepted(_)));
    assert_eq!(state.error, None);
}
