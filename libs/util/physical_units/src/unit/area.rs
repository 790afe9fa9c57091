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
    unit::length::{Foot, Meter, METERS_PER_FOOT},
    RegistryBuilder, UnitError, UnitType,
};

physical_quantity!(Area, "Area", "A", "A", "Extent of a two dimensional surface");

const SQUARE_METERS_PER_SQUARE_FOOT: f64 = METERS_PER_FOOT * METERS_PER_FOOT;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct SquareFoot;
impl UnitType for SquareFoot {
    type Quantity = Area;
    const NAME: &'static str = "SquareFoot";
    const SYMBOL: &'static str = "ft2";
    const LATEX_SYMBOL: &'static str = "ft^{2}";
    const DESCRIPTION: &'static str = "Area of a square one foot on a side";
    const MIN: f64 = 0.;
    const MAX: f64 = 1e6;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct SquareMeter;
impl UnitType for SquareMeter {
    type Quantity = Area;
    const NAME: &'static str = "SquareMeter";
    const SYMBOL: &'static str = "m2";
    const LATEX_SYMBOL: &'static str = "m^{2}";
    const DESCRIPTION: &'static str = "Area of a square one meter on a side";
    const MIN: f64 = 0.;
    const MAX: f64 = 1e6 * SQUARE_METERS_PER_SQUARE_FOOT;
}

conversion!(SquareFoot => SquareMeter, |a| a * SQUARE_METERS_PER_SQUARE_FOOT);
conversion!(SquareMeter => SquareFoot, |a| a / SQUARE_METERS_PER_SQUARE_FOOT);

compound!(SquareFoot = Foot * Foot);
compound!(SquareMeter = Meter * Meter);

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Area>()?;
    builder.unit::<SquareFoot>()?;
    builder.unit::<SquareMeter>()?;
    builder.conversion::<SquareFoot, SquareMeter>()?;
    builder.conversion::<SquareMeter, SquareFoot>()?;
    Ok(())
}

pub(crate) fn register_compounds(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.product::<Foot, Foot>()?;
    builder.product::<Meter, Meter>()?;
    Ok(())
}
