//! Lead form state: field values, validation, and the submission phase.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::input::{digits_only, is_plate_number};

/// Administrative regions offered by the region selector, in display order.
pub const REGIONS: [&str; 16] = [
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "경기", "강원", "충북", "충남", "전북",
    "전남", "경북", "경남", "제주",
];

/// Validation message: plate number missing.
pub const MSG_PLATE_REQUIRED: &str = "차량번호를 입력해 주세요.";
/// Validation message: plate number does not match the plate pattern.
pub const MSG_PLATE_FORMAT: &str = "차량번호 형식이 올바르지 않습니다. 예) 12가3456";
/// Validation message: phone missing or shorter than ten digits.
pub const MSG_PHONE_INVALID: &str = "연락처(숫자만)를 정확히 입력해 주세요.";
/// Validation message: no region selected.
pub const MSG_REGION_REQUIRED: &str = "지역을 선택해 주세요.";
/// Validation message: mileage missing.
pub const MSG_MILEAGE_REQUIRED: &str = "운행거리를 입력해 주세요.";

/// Form field identifiers used for typed change dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    PlateNumber,
    Phone,
    Region,
    Mileage,
}

/// The four lead-form fields, all stored as entered strings.
///
/// `phone` and `mileage` only ever contain decimal digits because
/// [`FormFields::set`] filters them on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub plate_number: String,
    pub phone: String,
    pub region: String,
    pub mileage: String,
}

impl FormFields {
    /// Store a raw input value under `field`.
    ///
    /// Phone and mileage keep digits only; other fields are verbatim.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::PlateNumber => self.plate_number = raw.to_owned(),
            Field::Phone => self.phone = digits_only(raw),
            Field::Region => self.region = raw.to_owned(),
            Field::Mileage => self.mileage = digits_only(raw),
        }
    }

    /// Validate in fixed order, returning the first failing message.
    ///
    /// Checks short-circuit: only one message is ever reported per
    /// attempt, matching the single error banner in the UI.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for the first check that fails.
    pub fn validate(&self) -> Result<(), &'static str> {
        let plate = self.plate_number.trim();
        if plate.is_empty() {
            return Err(MSG_PLATE_REQUIRED);
        }
        if !is_plate_number(plate) {
            return Err(MSG_PLATE_FORMAT);
        }
        if self.phone.len() < 10 {
            return Err(MSG_PHONE_INVALID);
        }
        if self.region.is_empty() {
            return Err(MSG_REGION_REQUIRED);
        }
        if self.mileage.is_empty() {
            return Err(MSG_MILEAGE_REQUIRED);
        }
        Ok(())
    }

    /// Reset every field to empty. Called only after a confirmed send.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Submission lifecycle as a tagged state.
///
/// A single enum rules out the invalid flag combinations a trio of
/// booleans would allow (e.g. an error banner and a success banner at
/// the same time).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Nothing in flight and no outcome to show.
    #[default]
    Idle,
    /// Exactly one request is in flight; the submit button is disabled.
    Submitting,
    /// The server acknowledged the lead; fields have been cleared.
    Succeeded,
    /// Validation or the exchange failed; fields are retained.
    Failed(String),
}

impl SubmitPhase {
    /// True strictly during the in-flight request window.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// True only after a confirmed successful round trip.
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// The user-facing failure message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
