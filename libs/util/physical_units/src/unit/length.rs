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

physical_quantity!(Length, "Length", "L", "L", "Distance between two points");

pub(crate) const METERS_PER_FOOT: f64 = 0.3048;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Meter;
impl UnitType for Meter {
    type Quantity = Length;
    const NAME: &'static str = "Meter";
    const SYMBOL: &'static str = "m";
    const LATEX_SYMBOL: &'static str = "m";
    const DESCRIPTION: &'static str = "SI base unit of length";
    const MIN: f64 = 0.;
    const MAX: f64 = 10_000.;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Foot;
impl UnitType for Foot {
    type Quantity = Length;
    const NAME: &'static str = "Foot";
    const SYMBOL: &'static str = "ft";
    const LATEX_SYMBOL: &'static str = "ft";
    const DESCRIPTION: &'static str = "International foot; exactly 0.3048 meters";
    const MIN: f64 = 0.;
    const MAX: f64 = 10_000. / METERS_PER_FOOT;
}

conversion!(Meter => Foot, |m| m / METERS_PER_FOOT);
conversion!(Foot => Meter, |f| f * METERS_PER_FOOT);

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Length>()?;
    builder.unit::<Meter>()?;
    builder.unit::<Foot>()?;
    builder.conversion::<Meter, Foot>()?;
    builder.conversion::<Foot, Meter>()?;
    Ok(())
}
