//! PDO type codes
//!
//! A Power Data Object carries its type in the top two bits of the 32-bit
//! word. Codes 0 through 3 are defined; anything else is rejected.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit position of the type field in a raw PDO word
pub const PDO_TYPE_SHIFT: u32 = 30;

/// PDO type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PdoType {
    /// Fixed supply
    Fixed = 0,
    /// Battery supply
    Battery = 1,
    /// Variable supply
    Variable = 2,
    /// Augmented PDO (programmable power supply)
    Augmented = 3,
}

/// All PDO types, indexed by their code
pub const PDO_TYPES: [PdoType; 4] = [
    PdoType::Fixed,
    PdoType::Battery,
    PdoType::Variable,
    PdoType::Augmented,
];

impl PdoType {
    /// Numeric type code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Label written into the VIF document
    pub fn label(self) -> &'static str {
        match self {
            PdoType::Fixed => "Fixed",
            PdoType::Battery => "Battery",
            PdoType::Variable => "Variable",
            PdoType::Augmented => "Augmented",
        }
    }

    /// Decode a type code
    pub fn from_code(code: u32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| PDO_TYPES.get(idx).copied())
            .ok_or_else(|| {
                debug!("rejecting PDO type code {}", code);
                Error::InvalidPdoType(code)
            })
    }
}

impl TryFrom<u8> for PdoType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(u32::from(code))
    }
}

impl TryFrom<u32> for PdoType {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code)
    }
}

impl fmt::Display for PdoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode a PDO type code to its label
pub fn decode(code: u32) -> Result<&'static str> {
    PdoType::from_code(code).map(PdoType::label)
}

/// Type of a raw 32-bit PDO word
pub fn pdo_type_of_raw(raw: u32) -> PdoType {
    PDO_TYPES[(raw >> PDO_TYPE_SHIFT) as usize]
}
