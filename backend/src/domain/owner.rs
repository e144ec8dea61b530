//! Owner data model.
//!
//! An owner moves through three shapes: the raw [`OwnerForm`] submitted by a
//! client, the validated [`OwnerDetails`], and the persisted [`Owner`] that
//! carries an identifier assigned by the owner directory.
//!
//! [`OwnerForm`]: crate::domain::OwnerForm

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::domain::owner_form::{FieldErrors, OwnerForm};

/// Validation errors returned by [`OwnerId`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OwnerIdValidationError {
    /// Owner identifiers start at one.
    #[error("owner id must be a positive integer")]
    Zero,
    /// The raw value is not an unsigned integer.
    #[error("owner id must be numeric")]
    NotANumber,
}

/// Directory-assigned owner identifier.
///
/// ## Invariants
/// - Always greater than zero; a transient owner has no id at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct OwnerId(NonZeroU32);

impl OwnerId {
    /// Validate and construct an [`OwnerId`].
    ///
    /// # Examples
    /// ```
    /// use petclinic::domain::OwnerId;
    ///
    /// assert_eq!(OwnerId::new(7).map(OwnerId::get), Ok(7));
    /// assert!(OwnerId::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, OwnerIdValidationError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(OwnerIdValidationError::Zero)
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OwnerId {
    type Err = OwnerIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u32>()
            .map_err(|_| OwnerIdValidationError::NotANumber)?;
        Self::new(value)
    }
}

impl TryFrom<u32> for OwnerId {
    type Error = OwnerIdValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OwnerId> for u32 {
    fn from(value: OwnerId) -> Self {
        value.get()
    }
}

/// Validated owner fields, ready to be handed to the directory.
///
/// ## Invariants
/// - Every field is non-empty and trimmed.
/// - `telephone` holds at most ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerDetails {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) address: String,
    pub(crate) city: String,
    pub(crate) telephone: String,
}

impl OwnerDetails {
    /// Validate raw values through the same rules applied to submitted forms.
    ///
    /// # Examples
    /// ```
    /// use petclinic::domain::OwnerDetails;
    ///
    /// let details = OwnerDetails::try_from_parts(
    ///     "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023",
    /// )
    /// .expect("valid owner");
    /// assert_eq!(details.last_name(), "Franklin");
    /// ```
    pub fn try_from_parts(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Result<Self, FieldErrors> {
        OwnerForm {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
        }
        .validate()
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name; the search key.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Street address.
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// City of residence.
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// Contact number, digits only.
    pub fn telephone(&self) -> &str {
        self.telephone.as_str()
    }
}

/// Validated owner as handed to [`OwnerDirectory::save`].
///
/// An absent `id` asks the directory to create the owner and assign one; a
/// present `id` replaces the stored owner with that id.
///
/// [`OwnerDirectory::save`]: crate::domain::ports::OwnerDirectory::save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    id: Option<OwnerId>,
    details: OwnerDetails,
}

impl OwnerRecord {
    /// Record for an owner that has never been persisted.
    #[must_use]
    pub fn new(details: OwnerDetails) -> Self {
        Self { id: None, details }
    }

    /// Record replacing the owner stored under `id`.
    #[must_use]
    pub fn existing(id: OwnerId, details: OwnerDetails) -> Self {
        Self {
            id: Some(id),
            details,
        }
    }

    /// Identifier, absent for new owners.
    pub fn id(&self) -> Option<OwnerId> {
        self.id
    }

    /// Validated fields.
    pub fn details(&self) -> &OwnerDetails {
        &self.details
    }

    /// Split into identifier and fields.
    pub fn into_parts(self) -> (Option<OwnerId>, OwnerDetails) {
        (self.id, self.details)
    }
}

/// Persisted clinic customer.
///
/// Serialises to camelCase JSON:
/// `{"id":1,"firstName":"George","lastName":"Franklin",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "OwnerDto")]
pub struct Owner {
    id: OwnerId,
    details: OwnerDetails,
}

impl Owner {
    /// Combine a directory-assigned id with validated fields.
    #[must_use]
    pub fn new(id: OwnerId, details: OwnerDetails) -> Self {
        Self { id, details }
    }

    /// Stable identifier.
    pub fn id(&self) -> OwnerId {
        self.id
    }

    /// Validated fields.
    pub fn details(&self) -> &OwnerDetails {
        &self.details
    }

    /// Family name, used for search matching.
    pub fn last_name(&self) -> &str {
        self.details.last_name()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct OwnerDto {
    id: u32,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

impl From<Owner> for OwnerDto {
    fn from(value: Owner) -> Self {
        let Owner { id, details } = value;
        let OwnerDetails {
            first_name,
            last_name,
            address,
            city,
            telephone,
        } = details;
        Self {
            id: id.get(),
            first_name,
            last_name,
            address,
            city,
            telephone,
        }
    }
}
