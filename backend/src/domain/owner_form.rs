//! Owner form binding and field validation.
//!
//! Submitted forms are validated explicitly: [`OwnerForm::validate`] checks
//! every field and returns either validated [`OwnerDetails`] or the complete
//! ordered list of field errors, so a form view can annotate each offending
//! input at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Owner, OwnerDetails};

/// Longest telephone number accepted, in digits.
pub const TELEPHONE_MAX_DIGITS: usize = 10;

const REQUIRED_MESSAGE: &str = "must not be empty";
const TELEPHONE_DIGITS_MESSAGE: &str = "numeric value out of bounds (<10 digits>.<0 digits> expected)";
const NOT_FOUND_MESSAGE: &str = "not found";

/// Owner fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnerField {
    /// `firstName`
    FirstName,
    /// `lastName`
    LastName,
    /// `address`
    Address,
    /// `city`
    City,
    /// `telephone`
    Telephone,
}

impl OwnerField {
    /// Form parameter name for the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::Telephone => "telephone",
        }
    }
}

impl fmt::Display for OwnerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable reason attached to a [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldErrorCode {
    /// The value was missing or blank.
    Required,
    /// The value was not a bounded run of digits.
    Digits,
    /// A search found nothing for the value.
    NotFound,
}

/// One `(field, error)` annotation for a form view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    field: OwnerField,
    code: FieldErrorCode,
    message: String,
}

impl FieldError {
    /// Build an annotation with an explicit message.
    pub fn new(field: OwnerField, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    /// Annotation for a missing mandatory value.
    #[must_use]
    pub fn required(field: OwnerField) -> Self {
        Self::new(field, FieldErrorCode::Required, REQUIRED_MESSAGE)
    }

    /// Annotation for a search that matched no owners.
    #[must_use]
    pub fn not_found(field: OwnerField) -> Self {
        Self::new(field, FieldErrorCode::NotFound, NOT_FOUND_MESSAGE)
    }

    /// Field the error refers to.
    pub fn field(&self) -> OwnerField {
        self.field
    }

    /// Reason code.
    pub fn code(&self) -> FieldErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Ordered collection of field errors.
///
/// # Examples
/// ```
/// use petclinic::domain::{FieldError, FieldErrors, OwnerField};
///
/// let mut errors = FieldErrors::default();
/// errors.push(FieldError::required(OwnerField::City));
/// assert!(errors.has_field_error(OwnerField::City));
/// assert!(!errors.has_field_error(OwnerField::Telephone));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Collection holding a single error.
    #[must_use]
    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    /// Append an error.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// `true` when no field carries an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of errors collected.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the errors in validation order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Distinct fields carrying errors, in validation order.
    pub fn fields(&self) -> Vec<OwnerField> {
        let mut fields: Vec<OwnerField> = Vec::with_capacity(self.0.len());
        for error in &self.0 {
            if !fields.contains(&error.field) {
                fields.push(error.field);
            }
        }
        fields
    }

    /// `true` when `field` carries at least one error.
    pub fn has_field_error(&self, field: OwnerField) -> bool {
        self.0.iter().any(|error| error.field == field)
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Transient owner as bound from form input.
///
/// Absent parameters bind to empty strings. Unknown parameters, including a
/// client-supplied `id`, are ignored: the edit target always comes from the
/// request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Contact number.
    pub telephone: String,
}

impl OwnerForm {
    /// Validate every field and return the trimmed values.
    ///
    /// # Errors
    /// Returns all field errors, in declaration order, when any field fails.
    pub fn validate(&self) -> Result<OwnerDetails, FieldErrors> {
        validate_owner_form(self)
    }
}

impl From<&Owner> for OwnerForm {
    fn from(owner: &Owner) -> Self {
        let details = owner.details();
        Self {
            first_name: details.first_name().to_owned(),
            last_name: details.last_name().to_owned(),
            address: details.address().to_owned(),
            city: details.city().to_owned(),
            telephone: details.telephone().to_owned(),
        }
    }
}

/// Validate a submitted owner form.
///
/// Every field is mandatory once trimmed; the telephone must be at most
/// [`TELEPHONE_MAX_DIGITS`] ASCII digits.
///
/// # Examples
/// ```
/// use petclinic::domain::{validate_owner_form, OwnerField, OwnerForm};
///
/// let form = OwnerForm {
///     first_name: "Jacques".into(),
///     last_name: "vdMerwe".into(),
///     address: "Somewhere".into(),
///     ..OwnerForm::default()
/// };
/// let errors = validate_owner_form(&form).expect_err("city and telephone missing");
/// assert_eq!(errors.fields(), vec![OwnerField::City, OwnerField::Telephone]);
/// ```
pub fn validate_owner_form(form: &OwnerForm) -> Result<OwnerDetails, FieldErrors> {
    let mut errors = FieldErrors::default();

    let first_name = required(&mut errors, OwnerField::FirstName, &form.first_name);
    let last_name = required(&mut errors, OwnerField::LastName, &form.last_name);
    let address = required(&mut errors, OwnerField::Address, &form.address);
    let city = required(&mut errors, OwnerField::City, &form.city);
    let telephone = required(&mut errors, OwnerField::Telephone, &form.telephone);
    if !telephone.is_empty() && !is_bounded_digits(telephone) {
        errors.push(FieldError::new(
            OwnerField::Telephone,
            FieldErrorCode::Digits,
            TELEPHONE_DIGITS_MESSAGE,
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(OwnerDetails {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        address: address.to_owned(),
        city: city.to_owned(),
        telephone: telephone.to_owned(),
    })
}

fn required<'a>(errors: &mut FieldErrors, field: OwnerField, raw: &'a str) -> &'a str {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(FieldError::required(field));
    }
    value
}

fn is_bounded_digits(value: &str) -> bool {
    value.len() <= TELEPHONE_MAX_DIGITS && value.bytes().all(|byte| byte.is_ascii_digit())
}
