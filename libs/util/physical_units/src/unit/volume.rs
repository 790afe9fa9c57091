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
        area::{SquareFoot, SquareMeter},
        length::{Foot, Meter, METERS_PER_FOOT},
    },
    RegistryBuilder, UnitError, UnitType,
};

physical_quantity!(
    Volume,
    "Volume",
    "V",
    "V",
    "Extent of a three dimensional region"
);

const CUBIC_METERS_PER_CUBIC_FOOT: f64 = METERS_PER_FOOT * METERS_PER_FOOT * METERS_PER_FOOT;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct CubicFoot;
impl UnitType for CubicFoot {
    type Quantity = Volume;
    const NAME: &'static str = "CubicFoot";
    const SYMBOL: &'static str = "ft3";
    const LATEX_SYMBOL: &'static str = "ft^{3}";
    const DESCRIPTION: &'static str = "Volume of a cube one foot on a side";
    const MIN: f64 = 0.;
    const MAX: f64 = 1e7;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct CubicMeter;
impl UnitType for CubicMeter {
    type Quantity = Volume;
    const NAME: &'static str = "CubicMeter";
    const SYMBOL: &'static str = "m3";
    const LATEX_SYMBOL: &'static str = "m^{3}";
    const DESCRIPTION: &'static str = "Volume of a cube one meter on a side";
    const MIN: f64 = 0.;
    const MAX: f64 = 1e7 * CUBIC_METERS_PER_CUBIC_FOOT;
}

conversion!(CubicFoot => CubicMeter, |v| v * CUBIC_METERS_PER_CUBIC_FOOT);
conversion!(CubicMeter => CubicFoot, |v| v / CUBIC_METERS_PER_CUBIC_FOOT);

compound!(CubicFoot = SquareFoot * Foot);
compound!(CubicMeter = SquareMeter * Meter);

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Volume>()?;
    builder.unit::<CubicFoot>()?;
    builder.unit::<CubicMeter>()?;
    builder.conversion::<CubicFoot, CubicMeter>()?;
    builder.conversion::<CubicMeter, CubicFoot>()?;
    Ok(())
}

pub(crate) fn register_compounds(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.product::<SquareFoot, Foot>()?;
    builder.product::<SquareMeter, Meter>()?;
    builder.declare_compound(&[Foot::NAME, Foot::NAME, Foot::NAME], CubicFoot::NAME)?;
    builder.declare_compound(&[Meter::NAME, Meter::NAME, Meter::NAME], CubicMeter::NAME)?;
    Ok(())
}
