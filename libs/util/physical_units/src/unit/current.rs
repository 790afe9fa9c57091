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

physical_quantity!(Current, "Current", "I", "I", "Flow of electrical charge");

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Ampere;
impl UnitType for Ampere {
    type Quantity = Current;
    const NAME: &'static str = "Ampere";
    const SYMBOL: &'static str = "amp";
    const LATEX_SYMBOL: &'static str = "amp";
    const DESCRIPTION: &'static str = "One coulomb per second";
    const MIN: f64 = 0.;
    const MAX: f64 = 1000.;
}

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Current>()?;
    builder.unit::<Ampere>()?;
    Ok(())
}
