//! Currency type with code-based identity

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{FxError, Result};

/// A currency identified by a 3-character code plus a display name.
///
/// Identity is the code alone: two currencies with the same code but
/// different names compare equal and hash identically. Codes are stored
/// uppercase regardless of input case.
#[derive(Debug, Clone)]
pub struct Currency {
    code: String,
    name: String,
}

impl Currency {
    /// Create a currency from a code and a display name.
    ///
    /// The code must be exactly 3 characters and not blank; it is
    /// uppercased on the way in. Digits are fine (configured tables use
    /// codes like `TS1`). The name may be empty.
    pub fn new(code: &str, name: &str) -> Result<Self> {
        if code.trim().is_empty() || code.chars().count() != 3 {
            return Err(FxError::Validation(
                "Currency code must be 3 characters".to_string(),
            ));
        }
        Ok(Self {
            code: code.to_uppercase(),
            name: name.to_string(),
        })
    }

    /// Constructor for literals that are already valid 3-character
    /// uppercase codes, such as the built-in rate table.
    pub(crate) fn from_static(code: &'static str, name: &'static str) -> Self {
        debug_assert!(code.len() == 3 && code == code.to_uppercase());
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// The uppercase 3-character code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable name (may be empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive code comparison.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}
