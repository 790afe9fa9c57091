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

physical_quantity!(Density, "Density", "rho", "\\rho", "Mass per unit of volume");

const KG_M3_PER_LB_FT3: f64 = 16.018463373960138;
const KG_M3_PER_G_CM3: f64 = 1000.;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct KilogramPerCubicMeter;
impl UnitType for KilogramPerCubicMeter {
    type Quantity = Density;
    const NAME: &'static str = "KilogramPerCubicMeter";
    const SYMBOL: &'static str = "kg/m3";
    const LATEX_SYMBOL: &'static str = "\\frac{kg}{m^{3}}";
    const DESCRIPTION: &'static str = "Kilograms per cubic meter";
    const MIN: f64 = 0.;
    const MAX: f64 = 5000.;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct PoundPerCubicFoot;
impl UnitType for PoundPerCubicFoot {
    type Quantity = Density;
    const NAME: &'static str = "PoundPerCubicFoot";
    const SYMBOL: &'static str = "lb/ft3";
    const LATEX_SYMBOL: &'static str = "\\frac{lb}{ft^{3}}";
    const DESCRIPTION: &'static str = "Pounds mass per cubic foot";
    const MIN: f64 = 0.;
    const MAX: f64 = 5000. / KG_M3_PER_LB_FT3;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct GramPerCubicCentimeter;
impl UnitType for GramPerCubicCentimeter {
    type Quantity = Density;
    const NAME: &'static str = "GramPerCubicCentimeter";
    const SYMBOL: &'static str = "g/cm3";
    const LATEX_SYMBOL: &'static str = "\\frac{g}{cm^{3}}";
    const DESCRIPTION: &'static str = "Grams per cubic centimeter";
    const MIN: f64 = 0.;
    const MAX: f64 = 5.;
}

conversion!(KilogramPerCubicMeter => PoundPerCubicFoot, |d| d / KG_M3_PER_LB_FT3);
conversion!(KilogramPerCubicMeter => GramPerCubicCentimeter, |d| d / KG_M3_PER_G_CM3);
conversion!(PoundPerCubicFoot => KilogramPerCubicMeter, |d| d * KG_M3_PER_LB_FT3);
conversion!(PoundPerCubicFoot => GramPerCubicCentimeter, |d| {
    d * KG_M3_PER_LB_FT3 / KG_M3_PER_G_CM3
});
conversion!(GramPerCubicCentimeter => KilogramPerCubicMeter, |d| d * KG_M3_PER_G_CM3);
conversion!(GramPerCubicCentimeter => PoundPerCubicFoot, |d| {
    d * KG_M3_PER_G_CM3 / KG_M3_PER_LB_FT3
});

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Density>()?;
    builder.unit::<KilogramPerCubicMeter>()?;
    builder.unit::<PoundPerCubicFoot>()?;
    builder.unit::<GramPerCubicCentimeter>()?;

    builder.conversion::<KilogramPerCubicMeter, PoundPerCubicFoot>()?;
    builder.conversion::<KilogramPerCubicMeter, GramPerCubicCentimeter>()?;
    builder.conversion::<PoundPerCubicFoot, KilogramPerCubicMeter>()?;
    builder.conversion::<PoundPerCubicFoot, GramPerCubicCentimeter>()?;
    builder.conversion::<GramPerCubicCentimeter, KilogramPerCubicMeter>()?;
    builder.conversion::<GramPerCubicCentimeter, PoundPerCubicFoot>()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::StaticQuantity;
    use approx::assert_relative_eq;

    #[test]
    fn test_water() -> Result<(), UnitError> {
        let water = StaticQuantity::<GramPerCubicCentimeter>::new(1)?;
        assert_relative_eq!(
            water.convert::<PoundPerCubicFoot>()?.f64(),
            62.42796,
            max_relative = 1e-6
        );
        assert_eq!(water.convert::<KilogramPerCubicMeter>()?.f64(), 1000.);
        Ok(())
    }
}
