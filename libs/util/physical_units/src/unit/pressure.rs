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
use crate::{conversion, physical_quantity, RegistryBuilder, UnitError, UnitType};

physical_quantity!(
    Pressure,
    "Pressure",
    "P",
    "P",
    "Force applied perpendicular to a surface per unit of area"
);

/// One standard atmosphere, in psi.
pub const ATMOSPHERE_PSI: f64 = 14.695949;
const PASCALS_PER_PSI: f64 = 6894.757293168;
const PASCALS_PER_BAR: f64 = 100_000.;
const MAX_PSIA: f64 = 15_000.;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Psia;
impl UnitType for Psia {
    type Quantity = Pressure;
    const NAME: &'static str = "Psia";
    const SYMBOL: &'static str = "psia";
    const LATEX_SYMBOL: &'static str = "psia";
    const DESCRIPTION: &'static str = "Absolute pounds per square inch";
    const MIN: f64 = 0.;
    const MAX: f64 = MAX_PSIA;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Psig;
impl UnitType for Psig {
    type Quantity = Pressure;
    const NAME: &'static str = "Psig";
    const SYMBOL: &'static str = "psig";
    const LATEX_SYMBOL: &'static str = "psig";
    const DESCRIPTION: &'static str = "Pounds per square inch above atmospheric pressure";
    const MIN: f64 = -ATMOSPHERE_PSI;
    const MAX: f64 = MAX_PSIA - ATMOSPHERE_PSI;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Pascal;
impl UnitType for Pascal {
    type Quantity = Pressure;
    const NAME: &'static str = "Pascal";
    const SYMBOL: &'static str = "Pa";
    const LATEX_SYMBOL: &'static str = "Pa";
    const DESCRIPTION: &'static str = "One newton per square meter";
    const MIN: f64 = 0.;
    const MAX: f64 = MAX_PSIA * PASCALS_PER_PSI;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Bar;
impl UnitType for Bar {
    type Quantity = Pressure;
    const NAME: &'static str = "Bar";
    const SYMBOL: &'static str = "bar";
    const LATEX_SYMBOL: &'static str = "bar";
    const DESCRIPTION: &'static str = "One hundred kilopascals";
    const MIN: f64 = 0.;
    const MAX: f64 = MAX_PSIA * PASCALS_PER_PSI / PASCALS_PER_BAR;
}

conversion!(Psia => Psig, |p| p - ATMOSPHERE_PSI);
conversion!(Psia => Pascal, |p| p * PASCALS_PER_PSI);
conversion!(Psia => Bar, |p| p * PASCALS_PER_PSI / PASCALS_PER_BAR);
conversion!(Psig => Psia, |p| p + ATMOSPHERE_PSI);
conversion!(Psig => Pascal, |p| (p + ATMOSPHERE_PSI) * PASCALS_PER_PSI);
conversion!(Psig => Bar, |p| (p + ATMOSPHERE_PSI) * PASCALS_PER_PSI / PASCALS_PER_BAR);
conversion!(Pascal => Psia, |p| p / PASCALS_PER_PSI);
conversion!(Pascal => Psig, |p| p / PASCALS_PER_PSI - ATMOSPHERE_PSI);
conversion!(Pascal => Bar, |p| p / PASCALS_PER_BAR);
conversion!(Bar => Psia, |b| b * PASCALS_PER_BAR / PASCALS_PER_PSI);
conversion!(Bar => Psig, |b| b * PASCALS_PER_BAR / PASCALS_PER_PSI - ATMOSPHERE_PSI);
conversion!(Bar => Pascal, |b| b * PASCALS_PER_BAR);

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Pressure>()?;
    builder.unit::<Psia>()?;
    builder.unit::<Psig>()?;
    builder.unit::<Pascal>()?;
    builder.unit::<Bar>()?;

    builder.conversion::<Psia, Psig>()?;
    builder.conversion::<Psia, Pascal>()?;
    builder.conversion::<Psia, Bar>()?;
    builder.conversion::<Psig, Psia>()?;
    builder.conversion::<Psig, Pascal>()?;
    builder.conversion::<Psig, Bar>()?;
    builder.conversion::<Pascal, Psia>()?;
    builder.conversion::<Pascal, Psig>()?;
    builder.conversion::<Pascal, Bar>()?;
    builder.conversion::<Bar, Psia>()?;
    builder.conversion::<Bar, Psig>()?;
    builder.conversion::<Bar, Pascal>()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::StaticQuantity;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_gauge_is_offset_by_one_atmosphere() -> Result<(), UnitError> {
        let atm = StaticQuantity::<Psia>::new(ATMOSPHERE_PSI)?;
        assert_eq!(atm.convert::<Psig>()?.f64(), 0.);
        assert_relative_eq!(atm.convert::<Pascal>()?.f64(), 101_325., max_relative = 1e-6);
        assert_relative_eq!(atm.convert::<Bar>()?.f64(), 1.01325, max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn test_round_trips() -> Result<(), UnitError> {
        let p = StaticQuantity::<Psig>::new(1200)?;
        let via_bar = p.convert::<Bar>()?.convert::<Psig>()?;
        assert_abs_diff_eq!(via_bar.f64(), 1200., epsilon = 1e-9);
        let via_pa = p.convert::<Pascal>()?.convert::<Psia>()?;
        assert_abs_diff_eq!(via_pa.f64(), 1200. + ATMOSPHERE_PSI, epsilon = 1e-9);
        Ok(())
    }
}
