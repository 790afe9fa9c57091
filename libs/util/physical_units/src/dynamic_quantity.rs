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
use crate::{tolerance::next_toward, Registry, Unit, UnitError};
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Sub},
    ptr,
};

/// A value whose unit is picked at run time from a `Registry`.
///
/// A quantity is either null (bound to nothing; it reports
/// `Unit::INVALID_VALUE`) or bound to one of the registry's units with a
/// value that is valid in that unit. Every operation that produces a value
/// validates it before committing anything.
#[derive(Clone, Copy)]
pub struct DynamicQuantity<'r> {
    registry: &'r Registry,
    bound: Option<(&'r Unit, OrderedFloat<f64>)>,
}

impl<'r> DynamicQuantity<'r> {
    pub fn null(registry: &'r Registry) -> Self {
        Self {
            registry,
            bound: None,
        }
    }

    /// Bind `value` to the unit with the given name.
    pub fn new(registry: &'r Registry, unit_name: &str, value: f64) -> Result<Self, UnitError> {
        Self::with_unit(registry, registry.require_unit_by_name(unit_name)?, value)
    }

    /// Bind `value` to the unit with the given symbol.
    pub fn from_symbol(
        registry: &'r Registry,
        value: f64,
        unit_symbol: &str,
    ) -> Result<Self, UnitError> {
        Self::with_unit(registry, registry.require_unit_by_symbol(unit_symbol)?, value)
    }

    /// Bind `value` to `unit`, which must belong to `registry`. Binding to
    /// the null unit yields the null quantity.
    pub fn with_unit(registry: &'r Registry, unit: &'r Unit, value: f64) -> Result<Self, UnitError> {
        if !registry.owns(unit) {
            return Err(UnitError::InvalidPhysicalQuantity {
                detail: format!("unit {} does not belong to this registry", unit.name()),
            });
        }
        if unit.is_null() {
            return Ok(Self::null(registry));
        }
        Ok(Self {
            registry,
            bound: Some((unit, OrderedFloat(unit.validate(value)?))),
        })
    }

    /// `unit` at the midpoint of its range.
    pub fn at_default(registry: &'r Registry, unit: &'r Unit) -> Result<Self, UnitError> {
        Self::with_unit(registry, unit, unit.default_value())
    }

    pub fn at_min(registry: &'r Registry, unit: &'r Unit) -> Result<Self, UnitError> {
        Self::with_unit(registry, unit, unit.min())
    }

    pub fn at_max(registry: &'r Registry, unit: &'r Unit) -> Result<Self, UnitError> {
        Self::with_unit(registry, unit, unit.max())
    }

    /// The same physical value, re-bound to the sibling unit with the given
    /// name.
    pub fn convert_to(&self, unit_name: &str) -> Result<Self, UnitError> {
        self.convert_to_unit(self.registry.require_unit_by_name(unit_name)?)
    }

    pub fn convert_to_unit(&self, unit: &'r Unit) -> Result<Self, UnitError> {
        let (src, v) = self.bound()?;
        let converted = self.registry.convert(src, v, unit)?;
        Self::with_unit(self.registry, unit, converted)
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn is_null(&self) -> bool {
        self.bound.is_none()
    }

    /// The bound unit, or the registry's null unit.
    pub fn unit(&self) -> &'r Unit {
        match self.bound {
            Some((unit, _)) => unit,
            None => self.registry.null_unit(),
        }
    }

    pub fn raw(&self) -> f64 {
        match self.bound {
            Some((_, v)) => v.0,
            None => Unit::INVALID_VALUE,
        }
    }

    pub(crate) fn bound(&self) -> Result<(&'r Unit, f64), UnitError> {
        self.bound
            .map(|(unit, v)| (unit, v.0))
            .ok_or_else(|| UnitError::InvalidPhysicalQuantity {
                detail: "operation on a null quantity".to_owned(),
            })
    }

    /// Replace the value, keeping the unit.
    pub fn set_raw(&mut self, value: f64) -> Result<(), UnitError> {
        let (unit, _) = self.bound()?;
        let value = unit.validate(value)?;
        self.bound = Some((unit, OrderedFloat(value)));
        Ok(())
    }

    // `other`'s value expressed in our unit.
    fn rhs_value(&self, other: &DynamicQuantity<'r>) -> Result<f64, UnitError> {
        let (unit, _) = self.bound()?;
        let (other_unit, other_v) = other.bound()?;
        if !ptr::eq(self.registry, other.registry) {
            return Err(UnitError::WrongSiblingUnit {
                left_unit: unit.name().to_owned(),
                left_quantity: self.registry.quantity_of(unit).name().to_owned(),
                right_unit: other_unit.name().to_owned(),
                right_quantity: other.registry.quantity_of(other_unit).name().to_owned(),
            });
        }
        if unit.id() == other_unit.id() {
            return Ok(other_v);
        }
        self.registry.convert(other_unit, other_v, unit)
    }

    /// Take on `other`'s value. A null receiver adopts `other`'s unit as is;
    /// otherwise the value is converted into the receiver's unit.
    pub fn assign(&mut self, other: &DynamicQuantity<'r>) -> Result<(), UnitError> {
        if self.is_null() {
            other.bound()?;
            *self = *other;
            return Ok(());
        }
        let v = self.rhs_value(other)?;
        self.set_raw(v)
    }

    pub fn try_add_assign(&mut self, other: &DynamicQuantity<'r>) -> Result<(), UnitError> {
        let v = self.rhs_value(other)?;
        self.set_raw(self.raw() + v)
    }

    pub fn try_sub_assign(&mut self, other: &DynamicQuantity<'r>) -> Result<(), UnitError> {
        let v = self.rhs_value(other)?;
        self.set_raw(self.raw() - v)
    }

    pub fn try_add_assign_raw(&mut self, v: f64) -> Result<(), UnitError> {
        self.bound()?;
        self.set_raw(self.raw() + v)
    }

    pub fn try_sub_assign_raw(&mut self, v: f64) -> Result<(), UnitError> {
        self.bound()?;
        self.set_raw(self.raw() - v)
    }

    /// Order against a sibling, converting `other` into our unit first.
    pub fn compare(&self, other: &DynamicQuantity<'r>) -> Result<Ordering, UnitError> {
        let v = self.rhs_value(other)?;
        Ok(OrderedFloat(self.raw()).cmp(&OrderedFloat(v)))
    }

    pub fn try_eq(&self, other: &DynamicQuantity<'r>) -> Result<bool, UnitError> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// The next representable value toward the unit's maximum.
    pub fn next(&self) -> Result<Self, UnitError> {
        let (unit, v) = self.bound()?;
        Self::with_unit(self.registry, unit, next_toward(v, unit.max()))
    }

    /// The previous representable value toward the unit's minimum.
    pub fn prev(&self) -> Result<Self, UnitError> {
        let (unit, v) = self.bound()?;
        Self::with_unit(self.registry, unit, next_toward(v, unit.min()))
    }

    fn with_value(&self, value: f64) -> Result<Self, UnitError> {
        let (unit, _) = self.bound()?;
        Self::with_unit(self.registry, unit, value)
    }

    fn compound(
        &self,
        other: &DynamicQuantity<'r>,
        f: fn(f64, f64) -> f64,
    ) -> Result<Self, UnitError> {
        let (a, av) = self.bound()?;
        let (b, bv) = other.bound()?;
        if !ptr::eq(self.registry, other.registry) {
            return Err(UnitError::InvalidPhysicalQuantity {
                detail: format!(
                    "{} and {} belong to different registries",
                    a.name(),
                    b.name()
                ),
            });
        }
        let result = self.registry.require_compound(&[a, b])?;
        Self::with_unit(self.registry, result, f(av, bv))
    }
}

impl<'r> Add for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn add(self, other: DynamicQuantity<'r>) -> Self::Output {
        let v = self.rhs_value(&other)?;
        self.with_value(self.raw() + v)
    }
}

impl<'r> Sub for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn sub(self, other: DynamicQuantity<'r>) -> Self::Output {
        let v = self.rhs_value(&other)?;
        self.with_value(self.raw() - v)
    }
}

impl<'r> Add<f64> for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn add(self, other: f64) -> Self::Output {
        self.with_value(self.raw() + other)
    }
}

impl<'r> Sub<f64> for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn sub(self, other: f64) -> Self::Output {
        self.with_value(self.raw() - other)
    }
}

impl<'r> Mul<f64> for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn mul(self, other: f64) -> Self::Output {
        self.with_value(self.raw() * other)
    }
}

impl<'r> Div<f64> for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn div(self, other: f64) -> Self::Output {
        self.with_value(self.raw() / other)
    }
}

// Multiplication and division both resolve through the compound table.
impl<'r> Mul for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn mul(self, other: DynamicQuantity<'r>) -> Self::Output {
        self.compound(&other, |a, b| a * b)
    }
}

impl<'r> Div for DynamicQuantity<'r> {
    type Output = Result<DynamicQuantity<'r>, UnitError>;

    fn div(self, other: DynamicQuantity<'r>) -> Self::Output {
        self.compound(&other, |a, b| a / b)
    }
}

impl PartialEq<f64> for DynamicQuantity<'_> {
    fn eq(&self, other: &f64) -> bool {
        !self.is_null() && self.raw() == *other
    }
}

impl PartialOrd<f64> for DynamicQuantity<'_> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if self.is_null() {
            return None;
        }
        self.raw().partial_cmp(other)
    }
}

impl fmt::Display for DynamicQuantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.bound {
            Some((unit, v)) => write!(f, "{} {}", v.0, unit.symbol()),
            None => write!(f, "null"),
        }
    }
}

impl fmt::Debug for DynamicQuantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DynamicQuantity")
            .field("unit", &self.unit().name())
            .field("value", &self.raw())
            .finish()
    }
}
