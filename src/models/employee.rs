//! Employee model and related types.
//!
//! This module defines the Employee struct and the validating Pin newtype
//! used by kiosk authentication.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A 4-digit numeric kiosk PIN.
///
/// Construction validates the invariant: exactly four ASCII digits.
/// An invalid candidate is rejected at creation/edit time, never stored.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::Pin;
///
/// let pin = Pin::new("1234").unwrap();
/// assert_eq!(pin.as_str(), "1234");
/// assert!(Pin::new("123").is_err());
/// assert!(Pin::new("12a4").is_err());
/// assert!(Pin::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pin(String);

impl Pin {
    /// Validates and wraps a PIN candidate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] unless the candidate is
    /// exactly four ASCII digits.
    pub fn new(candidate: &str) -> EngineResult<Self> {
        if candidate.len() == 4 && candidate.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(EngineError::InvalidEmployee {
                field: "pin".to_string(),
                message: "must be exactly 4 digits".to_string(),
            })
        }
    }

    /// Returns the PIN digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks a candidate entered at the kiosk against this PIN.
    ///
    /// A plain equality test; anything stronger is the application
    /// shell's concern.
    pub fn verify(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl TryFrom<String> for Pin {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        Pin::new(&value)
    }
}

impl From<Pin> for String {
    fn from(pin: Pin) -> Self {
        pin.0
    }
}

/// Represents an employee of the store chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name shown on the kiosk.
    pub name: String,
    /// The employee's 4-digit kiosk PIN.
    pub pin: Pin,
}

impl Employee {
    /// Creates an employee, validating the PIN.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the PIN is not exactly
    /// four digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    ///
    /// let employee = Employee::new("emp_001", "Mai Pham", "1234").unwrap();
    /// assert!(employee.pin.verify("1234"));
    /// assert!(!employee.pin.verify("4321"));
    /// ```
    pub fn new(id: &str, name: &str, pin: &str) -> EngineResult<Self> {
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            pin: Pin::new(pin)?,
        })
    }
}
