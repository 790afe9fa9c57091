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
    tolerance::{next_toward, within_tolerance, MAX_EPSILON_RATIO},
    Combine, ConvertFrom, DivideBy, DynamicQuantity, Registry, UnitError, UnitType,
};
use approx::AbsDiffEq;
use num_traits::AsPrimitive;
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{Add, Div, Mul, Sub},
};

/// A value whose unit is fixed at compile time. Every constructor and
/// operator validates the result against the unit's range, so a live
/// `StaticQuantity<U>` is always valid in `U`.
///
/// Multiplying needs a declared combination:
///
/// ```compile_fail
/// use physical_units::{Celsius, Psia, StaticQuantity};
/// let p = StaticQuantity::<Psia>::new(14.7).unwrap();
/// let t = StaticQuantity::<Celsius>::new(20.).unwrap();
/// let _ = p * t;
/// ```
///
/// A unit type with an inverted range, or an epsilon ratio outside
/// (0, 0.3], cannot be instantiated:
///
/// ```compile_fail
/// use physical_units::{Psia, StaticQuantity, UnitType};
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Backwards;
/// impl UnitType for Backwards {
///     type Quantity = <Psia as UnitType>::Quantity;
///     const NAME: &'static str = "Backwards";
///     const SYMBOL: &'static str = "bk";
///     const LATEX_SYMBOL: &'static str = "bk";
///     const DESCRIPTION: &'static str = "Maximum below minimum";
///     const MIN: f64 = 10.;
///     const MAX: f64 = 0.;
/// }
/// let _ = StaticQuantity::<Backwards>::new(5);
/// ```
///
/// ```compile_fail
/// use physical_units::{Psia, StaticQuantity, UnitType};
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Loose;
/// impl UnitType for Loose {
///     type Quantity = <Psia as UnitType>::Quantity;
///     const NAME: &'static str = "Loose";
///     const SYMBOL: &'static str = "ls";
///     const LATEX_SYMBOL: &'static str = "ls";
///     const DESCRIPTION: &'static str = "Too much slack";
///     const MIN: f64 = 0.;
///     const MAX: f64 = 10.;
///     const EPSILON_RATIO: f64 = 0.5;
/// }
/// let _ = StaticQuantity::<Loose>::new(5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StaticQuantity<U: UnitType> {
    v: OrderedFloat<f64>,
    phantom_1: PhantomData<U>,
}

// A unit type's own constants are checked once per type, at build time.
struct UnitConstants<U>(PhantomData<U>);

impl<U: UnitType> UnitConstants<U> {
    const VALID: () = {
        assert!(U::MIN <= U::MAX, "unit minimum is greater than its maximum");
        assert!(
            U::EPSILON_RATIO > 0. && U::EPSILON_RATIO <= MAX_EPSILON_RATIO,
            "unit epsilon ratio is not inside (0, 0.3]"
        );
    };
}

fn check<U: UnitType>(v: f64) -> Result<f64, UnitError> {
    let () = UnitConstants::<U>::VALID;
    if within_tolerance(v, U::MIN, U::MAX, U::epsilon()) {
        return Ok(v);
    }
    Err(UnitError::OutOfRange {
        unit: U::NAME.to_owned(),
        value: v,
        min: U::MIN,
        max: U::MAX,
        epsilon: U::epsilon(),
    })
}

impl<U: UnitType> StaticQuantity<U> {
    pub fn new<T: AsPrimitive<f64>>(v: T) -> Result<Self, UnitError> {
        Ok(Self::from_valid(check::<U>(v.as_())?))
    }

    fn from_valid(v: f64) -> Self {
        let () = UnitConstants::<U>::VALID;
        Self {
            v: OrderedFloat(v),
            phantom_1: PhantomData,
        }
    }

    pub fn is_valid(v: f64) -> bool {
        check::<U>(v).is_ok()
    }

    pub fn min() -> Self {
        Self::from_valid(U::MIN)
    }

    pub fn max() -> Self {
        Self::from_valid(U::MAX)
    }

    pub fn f64(self) -> f64 {
        self.v.0
    }

    pub fn f32(self) -> f32 {
        self.v.0 as f32
    }

    pub fn unit_name() -> &'static str {
        U::NAME
    }

    pub fn unit_symbol() -> &'static str {
        U::SYMBOL
    }

    /// Convert from a sibling unit with the statically declared conversion.
    pub fn from_quantity<V: UnitType>(other: &StaticQuantity<V>) -> Result<Self, UnitError>
    where
        U: ConvertFrom<V>,
    {
        Self::new(<U as ConvertFrom<V>>::convert(other.f64()))
    }

    pub fn convert<V>(self) -> Result<StaticQuantity<V>, UnitError>
    where
        V: ConvertFrom<U>,
    {
        StaticQuantity::<V>::from_quantity(&self)
    }

    /// The next representable value toward the unit's maximum.
    pub fn next(self) -> Result<Self, UnitError> {
        Self::new(next_toward(self.f64(), U::MAX))
    }

    /// The previous representable value toward the unit's minimum.
    pub fn prev(self) -> Result<Self, UnitError> {
        Self::new(next_toward(self.f64(), U::MIN))
    }

    /// Re-bind this value to the registry's unit of the same name.
    pub fn to_dynamic<'r>(&self, registry: &'r Registry) -> Result<DynamicQuantity<'r>, UnitError> {
        let unit = registry.require_unit_by_name(U::NAME)?;
        DynamicQuantity::with_unit(registry, unit, self.f64())
    }

    /// Convert a dynamic quantity of any sibling unit into `U`, through the
    /// dynamic quantity's registry.
    pub fn from_dynamic(q: &DynamicQuantity) -> Result<Self, UnitError> {
        let (unit, v) = q.bound()?;
        let target = q.registry().require_unit_by_name(U::NAME)?;
        Self::new(q.registry().convert(unit, v, target)?)
    }

    fn same_unit(q: &DynamicQuantity) -> Result<f64, UnitError> {
        let (unit, v) = q.bound()?;
        if unit.name() != U::NAME {
            return Err(UnitError::DifferentUnits {
                left: U::NAME.to_owned(),
                right: unit.name().to_owned(),
            });
        }
        Ok(v)
    }

    /// Add a dynamic quantity bound to the identical unit.
    pub fn try_add_dynamic(self, q: &DynamicQuantity) -> Result<Self, UnitError> {
        Self::new(self.f64() + Self::same_unit(q)?)
    }

    pub fn try_sub_dynamic(self, q: &DynamicQuantity) -> Result<Self, UnitError> {
        Self::new(self.f64() - Self::same_unit(q)?)
    }
}

impl<U: UnitType> Default for StaticQuantity<U> {
    fn default() -> Self {
        Self::from_valid(U::default_value())
    }
}

impl<U: UnitType> fmt::Display for StaticQuantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.v.0, U::SYMBOL)
    }
}

// Comparison converts the right hand side into the left hand unit first.
impl<U, V> PartialEq<StaticQuantity<V>> for StaticQuantity<U>
where
    U: ConvertFrom<V>,
    V: UnitType,
{
    fn eq(&self, other: &StaticQuantity<V>) -> bool {
        self.v == OrderedFloat(<U as ConvertFrom<V>>::convert(other.f64()))
    }
}

impl<U: UnitType> Eq for StaticQuantity<U> {}

impl<U, V> PartialOrd<StaticQuantity<V>> for StaticQuantity<U>
where
    U: ConvertFrom<V>,
    V: UnitType,
{
    fn partial_cmp(&self, other: &StaticQuantity<V>) -> Option<Ordering> {
        Some(
            self.v
                .cmp(&OrderedFloat(<U as ConvertFrom<V>>::convert(other.f64()))),
        )
    }
}

impl<U: UnitType> Ord for StaticQuantity<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.v.cmp(&other.v)
    }
}

impl<U: UnitType> AbsDiffEq for StaticQuantity<U> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (self.f64() - other.f64()).abs() <= epsilon
    }
}

impl<U, V> Add<StaticQuantity<V>> for StaticQuantity<U>
where
    U: ConvertFrom<V>,
    V: UnitType,
{
    type Output = Result<StaticQuantity<U>, UnitError>;

    fn add(self, other: StaticQuantity<V>) -> Self::Output {
        Self::new(self.f64() + <U as ConvertFrom<V>>::convert(other.f64()))
    }
}

impl<U, V> Sub<StaticQuantity<V>> for StaticQuantity<U>
where
    U: ConvertFrom<V>,
    V: UnitType,
{
    type Output = Result<StaticQuantity<U>, UnitError>;

    fn sub(self, other: StaticQuantity<V>) -> Self::Output {
        Self::new(self.f64() - <U as ConvertFrom<V>>::convert(other.f64()))
    }
}

impl<U: UnitType> Add<f64> for StaticQuantity<U> {
    type Output = Result<StaticQuantity<U>, UnitError>;

    fn add(self, other: f64) -> Self::Output {
        Self::new(self.f64() + other)
    }
}

impl<U: UnitType> Sub<f64> for StaticQuantity<U> {
    type Output = Result<StaticQuantity<U>, UnitError>;

    fn sub(self, other: f64) -> Self::Output {
        Self::new(self.f64() - other)
    }
}

impl<U: UnitType> Mul<f64> for StaticQuantity<U> {
    type Output = Result<StaticQuantity<U>, UnitError>;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.f64() * other)
    }
}

impl<U: UnitType> Mul<StaticQuantity<U>> for f64 {
    type Output = Result<StaticQuantity<U>, UnitError>;

    fn mul(self, other: StaticQuantity<U>) -> Self::Output {
        StaticQuantity::new(self * other.f64())
    }
}

impl<U: UnitType> Div<f64> for StaticQuantity<U> {
    type Output = Result<StaticQuantity<U>, UnitError>;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.f64() / other)
    }
}

impl<A, B> Mul<StaticQuantity<B>> for StaticQuantity<A>
where
    A: Combine<B>,
    B: UnitType,
{
    type Output = Result<StaticQuantity<A::Output>, UnitError>;

    fn mul(self, other: StaticQuantity<B>) -> Self::Output {
        StaticQuantity::new(self.f64() * other.f64())
    }
}

impl<A, B> Div<StaticQuantity<B>> for StaticQuantity<A>
where
    A: DivideBy<B>,
    B: UnitType,
{
    type Output = A::Output;

    fn div(self, other: StaticQuantity<B>) -> Self::Output {
        A::divide(self.f64(), other.f64())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        Celsius, CubicFoot, ErrorKind, Fahrenheit, Foot, FootPerSecond, Kelvin, Meter, Psia,
        Psig, RegistryBuilder, Second, SquareFoot,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_range_round_trip() -> Result<(), UnitError> {
        for v in [Psia::MIN, Psia::MAX, 14.695949, 1234.5] {
            assert_eq!(StaticQuantity::<Psia>::new(v)?.f64(), v);
        }
        Ok(())
    }

    #[test]
    fn test_epsilon_boundary() {
        let eps = Kelvin::epsilon();
        assert!(StaticQuantity::<Kelvin>::new(Kelvin::MIN - eps).is_ok());
        assert!(StaticQuantity::<Kelvin>::new(Kelvin::MAX + eps).is_ok());
        assert_eq!(
            StaticQuantity::<Kelvin>::new(Kelvin::MIN - eps - 0.01)
                .unwrap_err()
                .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            StaticQuantity::<Kelvin>::new(Kelvin::MAX + eps + 0.01)
                .unwrap_err()
                .kind(),
            ErrorKind::OutOfRange
        );
    }

    #[derive(Clone, Copy, Debug, Default)]
    struct Slack;
    impl UnitType for Slack {
        type Quantity = <Psia as UnitType>::Quantity;
        const NAME: &'static str = "Slack";
        const SYMBOL: &'static str = "sl";
        const LATEX_SYMBOL: &'static str = "sl";
        const DESCRIPTION: &'static str = "Widest accepted tolerance";
        const MIN: f64 = 5.;
        const MAX: f64 = 5.;
        const EPSILON_RATIO: f64 = MAX_EPSILON_RATIO;
    }

    #[test]
    fn test_unit_constants_at_their_limits() -> Result<(), UnitError> {
        assert_eq!(StaticQuantity::<Slack>::new(5)?.f64(), 5.);
        assert_eq!(StaticQuantity::<Slack>::default().f64(), 5.);
        assert_eq!(
            StaticQuantity::<Slack>::new(5.5).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        Ok(())
    }

    #[test]
    fn test_static_conversion() -> Result<(), UnitError> {
        let c = StaticQuantity::<Celsius>::new(100)?;
        let f = StaticQuantity::<Fahrenheit>::from_quantity(&c)?;
        assert_abs_diff_eq!(f.f64(), 212., epsilon = 1e-9);
        let k = c.convert::<Kelvin>()?;
        assert_abs_diff_eq!(k.f64(), 373.15, epsilon = 1e-9);
        let back = f.convert::<Celsius>()?;
        assert_abs_diff_eq!(back, c, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_cross_unit_comparison() -> Result<(), UnitError> {
        let c = StaticQuantity::<Celsius>::new(0)?;
        let k = StaticQuantity::<Kelvin>::new(274.15)?;
        assert!(c < k);
        assert!(k > c);
        let gauge = StaticQuantity::<Psig>::new(0)?;
        let absolute = StaticQuantity::<Psia>::new(14.695949)?;
        assert!(absolute == gauge);
        Ok(())
    }

    #[test]
    fn test_sibling_addition_converts_rhs() -> Result<(), UnitError> {
        let a = StaticQuantity::<Psia>::new(20)?;
        let g = StaticQuantity::<Psig>::new(10)?;
        let sum = (a + g)?;
        assert_abs_diff_eq!(sum.f64(), 20. + 10. + 14.695949, epsilon = 1e-9);
        let diff = (a - a)?;
        assert_eq!(diff.f64(), 0.);
        Ok(())
    }

    #[test]
    fn test_arithmetic_revalidates() -> Result<(), UnitError> {
        let max = StaticQuantity::<Kelvin>::max();
        assert_eq!((max * 2.).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!((max + max).unwrap_err().kind(), ErrorKind::OutOfRange);
        let k = StaticQuantity::<Kelvin>::new(300)?;
        assert_eq!((k / 2.)?.f64(), 150.);
        assert_eq!((2. * k)?.f64(), 600.);
        assert_eq!((k - 100.)?.f64(), 200.);
        Ok(())
    }

    #[test]
    fn test_combination() -> Result<(), UnitError> {
        let a = StaticQuantity::<Foot>::new(3)?;
        let b = StaticQuantity::<Foot>::new(4)?;
        let area: StaticQuantity<SquareFoot> = (a * b)?;
        assert_eq!(area.f64(), 12.);
        let volume: StaticQuantity<CubicFoot> = (area * a)?;
        assert_eq!(volume.f64(), 36.);
        let t = StaticQuantity::<Second>::new(2)?;
        let speed: StaticQuantity<FootPerSecond> = (b / t)?;
        assert_eq!(speed.f64(), 2.);
        Ok(())
    }

    #[test]
    fn test_same_unit_division_is_dimensionless() -> Result<(), UnitError> {
        let a = StaticQuantity::<Meter>::new(30)?;
        let b = StaticQuantity::<Meter>::new(12)?;
        let ratio: f64 = a / b;
        assert_eq!(ratio, 2.5);
        Ok(())
    }

    #[test]
    fn test_next_prev() -> Result<(), UnitError> {
        let k = StaticQuantity::<Kelvin>::new(300)?;
        assert!(k.next()? > k);
        assert!(k.prev()? < k);
        assert_eq!(k.next()?.prev()?, k);
        Ok(())
    }

    #[test]
    fn test_default_and_display() -> Result<(), UnitError> {
        let d = StaticQuantity::<Psia>::default();
        assert_eq!(d.f64(), Psia::default_value());
        assert_eq!(StaticQuantity::<Psia>::new(14.5)?.to_string(), "14.5 psia");
        Ok(())
    }

    #[test]
    fn test_dynamic_interop() -> Result<(), UnitError> {
        let mut builder = RegistryBuilder::new();
        crate::unit::register_all(&mut builder)?;
        let registry = builder.build();

        let c = StaticQuantity::<Celsius>::new(25)?;
        let dynamic = c.to_dynamic(&registry)?;
        assert_eq!(dynamic.unit().name(), "Celsius");
        assert_eq!(dynamic.raw(), 25.);

        let f = StaticQuantity::<Fahrenheit>::from_dynamic(&dynamic)?;
        assert_abs_diff_eq!(f.f64(), 77., epsilon = 1e-9);

        let sum = c.try_add_dynamic(&dynamic)?;
        assert_eq!(sum.f64(), 50.);
        assert_eq!(c.try_sub_dynamic(&dynamic)?.f64(), 0.);

        let as_f = dynamic.convert_to("Fahrenheit")?;
        assert_eq!(
            c.try_add_dynamic(&as_f).unwrap_err().kind(),
            ErrorKind::DifferentUnits
        );
        let psia = DynamicQuantity::from_symbol(&registry, 10., "psia")?;
        assert_eq!(
            StaticQuantity::<Celsius>::from_dynamic(&psia)
                .unwrap_err()
                .kind(),
            ErrorKind::WrongSiblingUnit
        );
        let null = DynamicQuantity::null(&registry);
        assert_eq!(
            StaticQuantity::<Celsius>::from_dynamic(&null)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidPhysicalQuantity
        );
        Ok(())
    }
}
