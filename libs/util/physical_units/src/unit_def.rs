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
use crate::{
    item::Cataloged,
    tolerance::{
        check_epsilon_ratio, check_range, epsilon_for, within_tolerance, DEFAULT_EPSILON_RATIO,
    },
    QuantityId, UnitError, UnitItem,
};
use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct UnitId(pub(crate) u16);

impl UnitId {
    pub(crate) const NULL: UnitId = UnitId(u16::MAX);

    pub(crate) fn offset(self) -> usize {
        self.0 as usize
    }
}

/// A concrete scale for a physical quantity: a valid range and the slack
/// allowed at either end of it.
#[derive(Clone, Debug)]
pub struct Unit {
    id: UnitId,
    item: UnitItem,
    quantity: QuantityId,
    min: f64,
    max: f64,
    epsilon_ratio: f64,
    epsilon: f64,
}

impl Unit {
    /// Raw value reported by a quantity that is not bound to any unit.
    pub const INVALID_VALUE: f64 = f64::MAX;

    pub(crate) fn new(
        id: UnitId,
        item: UnitItem,
        quantity: QuantityId,
        min: f64,
        max: f64,
        epsilon_ratio: f64,
    ) -> Result<Self, UnitError> {
        check_range(item.name(), min, max)?;
        check_epsilon_ratio(item.name(), epsilon_ratio)?;
        Ok(Self {
            id,
            item,
            quantity,
            min,
            max,
            epsilon_ratio,
            epsilon: epsilon_for(epsilon_ratio, min, max),
        })
    }

    pub(crate) fn null() -> Self {
        Self {
            id: UnitId::NULL,
            item: UnitItem::new("NullUnit", "Null Unit", "Null", "Null unit"),
            quantity: QuantityId::NULL,
            min: f64::MIN,
            max: f64::MAX,
            epsilon_ratio: DEFAULT_EPSILON_RATIO,
            epsilon: 0.,
        }
    }

    pub(crate) fn set_epsilon_ratio(&mut self, ratio: f64) -> Result<(), UnitError> {
        check_epsilon_ratio(self.item.name(), ratio)?;
        self.epsilon_ratio = ratio;
        self.epsilon = epsilon_for(ratio, self.min, self.max);
        Ok(())
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn is_null(&self) -> bool {
        self.id == UnitId::NULL
    }

    pub fn item(&self) -> &UnitItem {
        &self.item
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn symbol(&self) -> &str {
        self.item.symbol()
    }

    pub fn latex_symbol(&self) -> &str {
        self.item.latex_symbol()
    }

    pub fn description(&self) -> &str {
        self.item.description()
    }

    pub fn quantity_id(&self) -> QuantityId {
        self.quantity
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn epsilon_ratio(&self) -> f64 {
        self.epsilon_ratio
    }

    /// Midpoint of the range; always valid.
    pub fn default_value(&self) -> f64 {
        (self.min + self.max) / 2.
    }

    /// Units measuring the same physical quantity. Identity of the quantity
    /// decides, not equality of its description.
    pub fn is_sibling(&self, other: &Unit) -> bool {
        self.quantity == other.quantity
    }

    pub fn is_valid(&self, value: f64) -> bool {
        self.is_null() || within_tolerance(value, self.min, self.max, self.epsilon)
    }

    /// Pass `value` through if it is valid in this unit.
    pub fn validate(&self, value: f64) -> Result<f64, UnitError> {
        if self.is_valid(value) {
            return Ok(value);
        }
        Err(UnitError::OutOfRange {
            unit: self.name().to_owned(),
            value,
            min: self.min,
            max: self.max,
            epsilon: self.epsilon,
        })
    }

    /// Multi-line description, one field per line, each prefixed by `margin`.
    pub fn describe(&self, quantity_name: &str, margin: usize) -> String {
        let margin = " ".repeat(margin);
        format!(
            "{m}Unit name         = {}\n\
             {m}symbol            = {}\n\
             {m}latex symbol      = {}\n\
             {m}description       = {}\n\
             {m}physical quantity = {}\n\
             {m}min               = {}\n\
             {m}max               = {}\n\
             {m}epsilon           = {} ({} %)",
            self.name(),
            self.symbol(),
            self.latex_symbol(),
            self.description(),
            quantity_name,
            self.min,
            self.max,
            self.epsilon,
            100. * self.epsilon_ratio,
            m = margin,
        )
    }
}

impl Cataloged for Unit {
    fn item(&self) -> &UnitItem {
        &self.item
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    fn meter(min: f64, max: f64, ratio: f64) -> Result<Unit, UnitError> {
        Unit::new(
            UnitId(0),
            UnitItem::new("Meter", "m", "m", "length"),
            QuantityId(0),
            min,
            max,
            ratio,
        )
    }

    #[test]
    fn test_epsilon_is_derived_from_span() -> Result<(), UnitError> {
        let m = meter(0., 1000., 0.05)?;
        assert_eq!(m.epsilon(), 50.);
        assert_eq!(m.default_value(), 500.);
        Ok(())
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            meter(10., 0., 0.05).unwrap_err().kind(),
            ErrorKind::RangeInverted
        );
        assert_eq!(
            meter(0., 10., 0.5).unwrap_err().kind(),
            ErrorKind::InvalidTolerance
        );
        assert_eq!(
            meter(0., 10., 0.).unwrap_err().kind(),
            ErrorKind::InvalidTolerance
        );
    }

    #[test]
    fn test_set_epsilon_ratio() -> Result<(), UnitError> {
        let mut m = meter(0., 1000., 0.05)?;
        m.set_epsilon_ratio(0.1)?;
        assert_eq!(m.epsilon(), 100.);
        assert!(m.is_valid(-100.));
        assert!(m.set_epsilon_ratio(0.31).is_err());
        assert_eq!(m.epsilon(), 100.);
        Ok(())
    }

    #[test]
    fn test_validate_boundaries() -> Result<(), UnitError> {
        let m = meter(0., 1000., 0.05)?;
        let eps = m.epsilon();
        assert_eq!(m.validate(0.)?, 0.);
        assert_eq!(m.validate(1000.)?, 1000.);
        assert_eq!(m.validate(-eps)?, -eps);
        assert_eq!(m.validate(1000. + eps)?, 1000. + eps);
        assert_eq!(
            m.validate(-eps - 0.001).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            m.validate(1000. + eps + 0.001).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        Ok(())
    }

    #[test]
    fn test_null_unit_accepts_everything() {
        let null = Unit::null();
        assert!(null.is_null());
        assert!(null.is_valid(Unit::INVALID_VALUE));
        assert!(null.is_valid(f64::MIN));
    }

    #[test]
    fn test_describe() -> Result<(), UnitError> {
        let m = meter(0., 1000., 0.05)?;
        let text = m.describe("Length", 2);
        assert!(text.starts_with("  Unit name         = Meter\n"));
        assert!(text.contains("  physical quantity = Length\n"));
        assert!(text.ends_with("epsilon           = 50 (5 %)"));
        Ok(())
    }
}
