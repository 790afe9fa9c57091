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
use crate::{tolerance::DEFAULT_EPSILON_RATIO, StaticQuantity, UnitError};
use std::fmt::Debug;

/// A physical quantity known at compile time.
pub trait QuantityType: Copy + Debug + Default + 'static {
    const NAME: &'static str;
    const SYMBOL: &'static str;
    const LATEX_SYMBOL: &'static str;
    const DESCRIPTION: &'static str;
}

/// A unit known at compile time. The run-time registry is populated from
/// these same constants, see `RegistryBuilder::unit`.
pub trait UnitType: Copy + Debug + Default + 'static {
    type Quantity: QuantityType;

    const NAME: &'static str;
    const SYMBOL: &'static str;
    const LATEX_SYMBOL: &'static str;
    const DESCRIPTION: &'static str;
    const MIN: f64;
    const MAX: f64;
    const EPSILON_RATIO: f64 = DEFAULT_EPSILON_RATIO;

    fn epsilon() -> f64 {
        Self::EPSILON_RATIO * (Self::MAX - Self::MIN)
    }

    fn default_value() -> f64 {
        (Self::MIN + Self::MAX) / 2.
    }
}

/// Holds when both units measure the same physical quantity.
pub trait SiblingOf<Other: UnitType>: UnitType {}
impl<A, B> SiblingOf<B> for A
where
    A: UnitType,
    B: UnitType<Quantity = A::Quantity>,
{
}

/// Conversion from `Src` into `Self`. Only siblings may convert; asking for
/// any other pair is a build failure.
///
/// ```compile_fail
/// use physical_units::{Celsius, Psia, StaticQuantity};
/// let p = StaticQuantity::<Psia>::new(14.7).unwrap();
/// let _ = StaticQuantity::<Celsius>::from_quantity(&p);
/// ```
pub trait ConvertFrom<Src: UnitType>: UnitType + SiblingOf<Src> {
    fn convert(v: f64) -> f64;
}

impl<U: UnitType> ConvertFrom<U> for U {
    fn convert(v: f64) -> f64 {
        v
    }
}

/// `Self * Rhs` is measured in `Output`.
pub trait Combine<Rhs: UnitType>: UnitType {
    type Output: UnitType;
}

/// `Self / Rhs`. Dividing a unit by itself leaves a bare number; other
/// quotients must be declared with `compound!`.
pub trait DivideBy<Rhs: UnitType>: UnitType {
    type Output;

    fn divide(lhs: f64, rhs: f64) -> Self::Output;
}

impl<U: UnitType> DivideBy<U> for U {
    type Output = f64;

    fn divide(lhs: f64, rhs: f64) -> f64 {
        lhs / rhs
    }
}

pub type Quotient<C> = Result<StaticQuantity<C>, UnitError>;

/// Declare the conversion between two sibling unit types.
///
/// ```ignore
/// conversion!(Celsius => Kelvin, |c| c + 273.15);
/// ```
///
/// Siblings without a declared conversion do not convert:
///
/// ```compile_fail
/// use physical_units::{physical_quantity, StaticQuantity, UnitType};
/// physical_quantity!(Span, "Span", "sp", "sp", "A span");
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Hand;
/// impl UnitType for Hand {
///     type Quantity = Span;
///     const NAME: &'static str = "Hand";
///     const SYMBOL: &'static str = "hh";
///     const LATEX_SYMBOL: &'static str = "hh";
///     const DESCRIPTION: &'static str = "Width of a palm";
///     const MIN: f64 = 0.;
///     const MAX: f64 = 100.;
/// }
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Cubit;
/// impl UnitType for Cubit {
///     type Quantity = Span;
///     const NAME: &'static str = "Cubit";
///     const SYMBOL: &'static str = "cu";
///     const LATEX_SYMBOL: &'static str = "cu";
///     const DESCRIPTION: &'static str = "Elbow to fingertip";
///     const MIN: f64 = 0.;
///     const MAX: f64 = 100.;
/// }
/// let h = StaticQuantity::<Hand>::new(6).unwrap();
/// let _ = StaticQuantity::<Cubit>::from_quantity(&h);
/// ```
#[macro_export]
macro_rules! conversion {
    ($Src:ty => $Tgt:ty, |$v:ident| $body:expr) => {
        impl $crate::ConvertFrom<$Src> for $Tgt {
            fn convert($v: f64) -> f64 {
                $body
            }
        }
    };
}

/// Declare the result unit of multiplying or dividing two unit types.
///
/// ```ignore
/// compound!(SquareFoot = Foot * Foot);
/// compound!(FootPerSecond = Foot / Second);
/// ```
#[macro_export]
macro_rules! compound {
    ($Result:ident = $A:ident * $B:ident) => {
        impl $crate::Combine<$B> for $A {
            type Output = $Result;
        }
    };

    ($Result:ident = $A:ident / $B:ident) => {
        impl $crate::DivideBy<$B> for $A {
            type Output = $crate::Quotient<$Result>;

            fn divide(lhs: f64, rhs: f64) -> Self::Output {
                $crate::StaticQuantity::<$Result>::new(lhs / rhs)
            }
        }
    };
}

/// Declare a physical quantity marker type.
#[macro_export]
macro_rules! physical_quantity {
    ($(#[$meta:meta])* $Name:ident, $name:expr, $symbol:expr, $latex:expr, $desc:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
        pub struct $Name;
        impl $crate::QuantityType for $Name {
            const NAME: &'static str = $name;
            const SYMBOL: &'static str = $symbol;
            const LATEX_SYMBOL: &'static str = $latex;
            const DESCRIPTION: &'static str = $desc;
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Celsius, Fahrenheit, Foot, Kelvin, SquareFoot};

    fn convert<Src: UnitType, Tgt: ConvertFrom<Src>>(v: f64) -> f64 {
        Tgt::convert(v)
    }

    #[test]
    fn test_identity_is_builtin() {
        assert_eq!(convert::<Kelvin, Kelvin>(301.5), 301.5);
    }

    #[test]
    fn test_declared_conversion() {
        assert_eq!(convert::<Celsius, Fahrenheit>(100.), 212.);
    }

    #[test]
    fn test_unit_constants() {
        assert_eq!(Foot::default_value(), (Foot::MIN + Foot::MAX) / 2.);
        assert_eq!(Kelvin::epsilon(), Kelvin::EPSILON_RATIO * (Kelvin::MAX - Kelvin::MIN));
        assert_eq!(<<Foot as Combine<Foot>>::Output as UnitType>::NAME, SquareFoot::NAME);
    }
}
