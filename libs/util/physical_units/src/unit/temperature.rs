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
    Temperature,
    "Temperature",
    "T",
    "T",
    "Average thermal energy of the particles in a substance"
);

const ZERO_CELSIUS: f64 = 273.15;
const ZERO_FAHRENHEIT: f64 = 459.67;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Kelvin;
impl UnitType for Kelvin {
    type Quantity = Temperature;
    const NAME: &'static str = "Kelvin";
    const SYMBOL: &'static str = "K";
    const LATEX_SYMBOL: &'static str = "K";
    const DESCRIPTION: &'static str = "Absolute scale in degrees Celsius";
    const MIN: f64 = 0.;
    const MAX: f64 = 1500.;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Celsius;
impl UnitType for Celsius {
    type Quantity = Temperature;
    const NAME: &'static str = "Celsius";
    const SYMBOL: &'static str = "degC";
    const LATEX_SYMBOL: &'static str = "^{\\circ}C";
    const DESCRIPTION: &'static str = "Relative scale with water freezing at zero";
    const MIN: f64 = -ZERO_CELSIUS;
    const MAX: f64 = 1500. - ZERO_CELSIUS;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Fahrenheit;
impl UnitType for Fahrenheit {
    type Quantity = Temperature;
    const NAME: &'static str = "Fahrenheit";
    const SYMBOL: &'static str = "degF";
    const LATEX_SYMBOL: &'static str = "^{\\circ}F";
    const DESCRIPTION: &'static str = "Relative scale with water freezing at 32 degrees";
    const MIN: f64 = -ZERO_FAHRENHEIT;
    const MAX: f64 = 2700. - ZERO_FAHRENHEIT;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Rankine;
impl UnitType for Rankine {
    type Quantity = Temperature;
    const NAME: &'static str = "Rankine";
    const SYMBOL: &'static str = "degR";
    const LATEX_SYMBOL: &'static str = "^{\\circ}R";
    const DESCRIPTION: &'static str = "Absolute scale in degrees Fahrenheit";
    const MIN: f64 = 0.;
    const MAX: f64 = 2700.;
}

conversion!(Kelvin => Celsius, |k| k - ZERO_CELSIUS);
conversion!(Kelvin => Fahrenheit, |k| k * 9. / 5. - ZERO_FAHRENHEIT);
conversion!(Kelvin => Rankine, |k| k * 9. / 5.);
conversion!(Celsius => Kelvin, |c| c + ZERO_CELSIUS);
conversion!(Celsius => Fahrenheit, |c| c * 9. / 5. + 32.);
conversion!(Celsius => Rankine, |c| (c + ZERO_CELSIUS) * 9. / 5.);
conversion!(Fahrenheit => Kelvin, |f| (f + ZERO_FAHRENHEIT) * 5. / 9.);
conversion!(Fahrenheit => Celsius, |f| (f - 32.) * 5. / 9.);
conversion!(Fahrenheit => Rankine, |f| f + ZERO_FAHRENHEIT);
conversion!(Rankine => Kelvin, |r| r * 5. / 9.);
conversion!(Rankine => Celsius, |r| r * 5. / 9. - ZERO_CELSIUS);
conversion!(Rankine => Fahrenheit, |r| r - ZERO_FAHRENHEIT);

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Temperature>()?;
    builder.unit::<Kelvin>()?;
    builder.unit::<Celsius>()?;
    builder.unit::<Fahrenheit>()?;
    builder.unit::<Rankine>()?;

    builder.conversion::<Kelvin, Celsius>()?;
    builder.conversion::<Kelvin, Fahrenheit>()?;
    builder.conversion::<Kelvin, Rankine>()?;
    builder.conversion::<Celsius, Kelvin>()?;
    builder.conversion::<Celsius, Fahrenheit>()?;
    builder.conversion::<Celsius, Rankine>()?;
    builder.conversion::<Fahrenheit, Kelvin>()?;
    builder.conversion::<Fahrenheit, Celsius>()?;
    builder.conversion::<Fahrenheit, Rankine>()?;
    builder.conversion::<Rankine, Kelvin>()?;
    builder.conversion::<Rankine, Celsius>()?;
    builder.conversion::<Rankine, Fahrenheit>()?;
    Ok(())
}
