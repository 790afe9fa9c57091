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
    compound, conversion, physical_quantity,
    unit::{
        length::{Foot, Meter, METERS_PER_FOOT},
        time::Second,
    },
    RegistryBuilder, UnitError, UnitType,
};

physical_quantity!(Velocity, "Velocity", "v", "v", "Rate of change of position");

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct FootPerSecond;
impl UnitType for FootPerSecond {
    type Quantity = Velocity;
    const NAME: &'static str = "FootPerSecond";
    const SYMBOL: &'static str = "ft/s";
    const LATEX_SYMBOL: &'static str = "\\frac{ft}{s}";
    const DESCRIPTION: &'static str = "Feet travelled per second";
    const MIN: f64 = 0.;
    const MAX: f64 = 1000.;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct MeterPerSecond;
impl UnitType for MeterPerSecond {
    type Quantity = Velocity;
    const NAME: &'static str = "MeterPerSecond";
    const SYMBOL: &'static str = "m/s";
    const LATEX_SYMBOL: &'static str = "\\frac{m}{s}";
    const DESCRIPTION: &'static str = "Meters travelled per second";
    const MIN: f64 = 0.;
    const MAX: f64 = 1000. * METERS_PER_FOOT;
}

conversion!(FootPerSecond => MeterPerSecond, |v| v * METERS_PER_FOOT);
conversion!(MeterPerSecond => FootPerSecond, |v| v / METERS_PER_FOOT);

compound!(FootPerSecond = Foot / Second);
compound!(MeterPerSecond = Meter / Second);
compound!(Foot = FootPerSecond * Second);
compound!(Meter = MeterPerSecond * Second);

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Velocity>()?;
    builder.unit::<FootPerSecond>()?;
    builder.unit::<MeterPerSecond>()?;
    builder.conversion::<FootPerSecond, MeterPerSecond>()?;
    builder.conversion::<MeterPerSecond, FootPerSecond>()?;
    Ok(())
}

pub(crate) fn register_compounds(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quotient::<Foot, Second, FootPerSecond>()?;
    builder.quotient::<Meter, Second, MeterPerSecond>()?;
    builder.product::<FootPerSecond, Second>()?;
    builder.product::<MeterPerSecond, Second>()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::StaticQuantity;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_distance_over_time() -> Result<(), UnitError> {
        let d = StaticQuantity::<Meter>::new(100)?;
        let t = StaticQuantity::<Second>::new(8)?;
        let v = (d / t)?;
        assert_eq!(v.f64(), 12.5);
        let back: StaticQuantity<Meter> = (v * t)?;
        assert_eq!(back, d);
        assert_abs_diff_eq!(
            v.convert::<FootPerSecond>()?.f64(),
            12.5 / METERS_PER_FOOT,
            epsilon = 1e-9
        );
        Ok(())
    }
}
