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
use crate::{physical_quantity, RegistryBuilder, UnitError, UnitType};

physical_quantity!(
    LiquidGravity,
    "LiquidGravity",
    "G",
    "G",
    "Density of a liquid relative to water"
);

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct SpecificGravity;
impl UnitType for SpecificGravity {
    type Quantity = LiquidGravity;
    const NAME: &'static str = "SpecificGravity";
    const SYMBOL: &'static str = "sg";
    const LATEX_SYMBOL: &'static str = "sg";
    const DESCRIPTION: &'static str = "Liquid specific gravity";
    const MIN: f64 = 0.;
    const MAX: f64 = 1000.;
}

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<LiquidGravity>()?;
    builder.unit::<SpecificGravity>()?;
    Ok(())
}
