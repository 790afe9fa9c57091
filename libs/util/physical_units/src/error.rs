// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use std::fmt;

/// Everything that can go wrong while declaring units or operating on
/// quantities. None of these are transient: they all indicate a bad catalog,
/// a missing registration, or mixing units that cannot be mixed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("invalid physical quantity: {detail}")]
    InvalidPhysicalQuantity { detail: String },

    #[error("unit {unit}: minimum value {min} is greater than maximum value {max}")]
    RangeInverted { unit: String, min: f64, max: f64 },

    #[error("unit {unit}: epsilon ratio {ratio} is not inside (0, 0.3]")]
    InvalidTolerance { unit: String, ratio: f64 },

    #[error(
        "value ({value} {unit}) is not inside [{min}, {max}] epsilon = {epsilon} defined for the unit"
    )]
    OutOfRange {
        unit: String,
        value: f64,
        min: f64,
        max: f64,
        epsilon: f64,
    },

    #[error(
        "units {left_unit} and {right_unit} do not refer to the same physical quantity ({left_quantity}, {right_quantity})"
    )]
    WrongSiblingUnit {
        left_unit: String,
        left_quantity: String,
        right_unit: String,
        right_quantity: String,
    },

    #[error("different units: {left} != {right}")]
    DifferentUnits { left: String, right: String },

    #[error("nonexistent unit {identifier}")]
    UnitNotFound { identifier: String },

    #[error("there is no compound unit for [{}]", .operands.join(", "))]
    CompoundUnitNotFound { operands: Vec<String> },

    #[error("conversion from {from} to {to} has not been registered")]
    ConversionNotFound { from: String, to: String },

    #[error("conversion from {from} to {to} has already been registered")]
    DuplicateConversion { from: String, to: String },

    #[error("{catalog} name {name} already exists")]
    DuplicateName { catalog: &'static str, name: String },

    #[error("{catalog} symbol {symbol} already exists")]
    DuplicateSymbol {
        catalog: &'static str,
        symbol: String,
    },

    #[error("no room for another {catalog}: {name}")]
    CatalogFull { catalog: &'static str, name: String },
}

/// The bare category of a `UnitError`, for reporting.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    InvalidPhysicalQuantity,
    RangeInverted,
    InvalidTolerance,
    OutOfRange,
    WrongSiblingUnit,
    DifferentUnits,
    UnitNotFound,
    CompoundUnitNotFound,
    ConversionNotFound,
    DuplicateConversion,
    DuplicateName,
    DuplicateSymbol,
    CatalogFull,
}

impl UnitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPhysicalQuantity { .. } => ErrorKind::InvalidPhysicalQuantity,
            Self::RangeInverted { .. } => ErrorKind::RangeInverted,
            Self::InvalidTolerance { .. } => ErrorKind::InvalidTolerance,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::WrongSiblingUnit { .. } => ErrorKind::WrongSiblingUnit,
            Self::DifferentUnits { .. } => ErrorKind::DifferentUnits,
            Self::UnitNotFound { .. } => ErrorKind::UnitNotFound,
            Self::CompoundUnitNotFound { .. } => ErrorKind::CompoundUnitNotFound,
            Self::ConversionNotFound { .. } => ErrorKind::ConversionNotFound,
            Self::DuplicateConversion { .. } => ErrorKind::DuplicateConversion,
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
            Self::DuplicateSymbol { .. } => ErrorKind::DuplicateSymbol,
            Self::CatalogFull { .. } => ErrorKind::CatalogFull,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kind_and_message() {
        let err = UnitError::ConversionNotFound {
            from: "psia".to_owned(),
            to: "degF".to_owned(),
        };
        assert_eq!(err.kind(), ErrorKind::ConversionNotFound);
        assert_eq!(
            err.to_string(),
            "conversion from psia to degF has not been registered"
        );
        assert_eq!(err.kind().to_string(), "ConversionNotFound");
    }

    #[test]
    fn test_compound_message_lists_operands() {
        let err = UnitError::CompoundUnitNotFound {
            operands: vec!["psia".to_owned(), "ft".to_owned()],
        };
        assert_eq!(err.to_string(), "there is no compound unit for [psia, ft]");
    }
}
