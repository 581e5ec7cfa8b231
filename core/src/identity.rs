pub const REFERENCE_YEAR: u32 = 2024;
pub const YEAR_WINDOW: u32 = 100;

pub const ACCEPTED_FIRST_NAMES: &[&str] = &["maëva", "maeva"];
pub const ACCEPTED_LAST_NAME: &str = "bagur";
pub const EXPECTED_DAY: &str = "27";
pub const EXPECTED_MONTH: &str = "01";
pub const EXPECTED_YEAR: &str = "2001";

pub const REJECTION_MESSAGE: &str = "Désolé, l'identité ne correspond pas à ma Valentine.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub dob_day: String,
    pub dob_month: String,
    pub dob_year: String,
    pub address: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            dob_day: "01".to_string(),
            dob_month: "01".to_string(),
            dob_year: "2001".to_string(),
            address: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    DobDay,
    DobMonth,
    DobYear,
    Address,
}

impl FormData {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::DobDay => self.dob_day = value,
            FormField::DobMonth => self.dob_month = value,
            FormField::DobYear => self.dob_year = value,
            FormField::Address => self.address = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("first name does not match")]
    FirstName,
    #[error("last name does not match")]
    LastName,
    #[error("date of birth does not match")]
    DateOfBirth,
}

impl IdentityError {
    /// The only text ever shown to the user, whichever group failed.
    pub fn user_message(&self) -> &'static str {
        REJECTION_MESSAGE
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn verify_identity(data: &FormData) -> Result<(), IdentityError> {
    let first = normalize(&data.first_name);
    if !ACCEPTED_FIRST_NAMES.iter().any(|name| *name == first) {
        return Err(IdentityError::FirstName);
    }
    if normalize(&data.last_name) != ACCEPTED_LAST_NAME {
        return Err(IdentityError::LastName);
    }
    let date_matches = data.dob_day == EXPECTED_DAY
        && data.dob_month == EXPECTED_MONTH
        && data.dob_year == EXPECTED_YEAR;
    if !date_matches {
        return Err(IdentityError::DateOfBirth);
    }
    Ok(())
}

pub fn is_expected_identity(data: &FormData) -> bool {
    verify_identity(data).is_ok()
}

pub fn day_choices() -> Vec<String> {
    (1..=31).map(|day| format!("{day:02}")).collect()
}

pub fn month_choices() -> Vec<String> {
    (1..=12).map(|month| format!("{month:02}")).collect()
}

/// Newest first, ending at `REFERENCE_YEAR`.
pub fn year_choices() -> Vec<String> {
    (0..YEAR_WINDOW)
        .map(|offset| (REFERENCE_YEAR - offset).to_string())
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Hand the data to the coordinator.
    Accepted(FormData),
    Rejected(IdentityError),
    Ignored,
}

/// Form state owned by the identity modal while it is mounted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityForm {
    pub data: FormData,
    pub error: Option<&'static str>,
    pub phase: FormPhase,
}

impl IdentityForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn edit(&mut self, field: FormField, value: String) {
        if self.is_submitting() {
            return;
        }
        self.data.set(field, value);
    }

    /// Submitting is terminal: the modal is replaced before it could revert.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        match verify_identity(&self.data) {
            Ok(()) => {
                self.error = None;
                self.phase = FormPhase::Submitting;
                SubmitOutcome::Accepted(self.data.clone())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                SubmitOutcome::Rejected(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_ranges_match_selects() {
        let days = day_choices();
        assert_eq!(days.len(), 31);
        assert_eq!(days.first().map(String::as_str), Some("01"));
        assert_eq!(days.last().map(String::as_str), Some("31"));
        let months = month_choices();
        assert_eq!(months.len(), 12);
        assert_eq!(months[11], "12");
        let years = year_choices();
        assert_eq!(years.len(), 100);
        assert_eq!(years[0], "2024");
        assert_eq!(years[99], "1925");
        assert!(years.iter().any(|year| year == EXPECTED_YEAR));
    }

    #[test]
    fn edits_are_frozen_while_submitting() {
        let mut form = IdentityForm::default();
        form.phase = FormPhase::Submitting;
        form.edit(FormField::Address, "ailleurs".to_string());
        assert!(form.data.address.is_empty());
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
    }
}
