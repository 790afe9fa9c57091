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

physical_quantity!(Time, "Time", "t", "t", "Duration of an event");

const SECONDS_PER_HOUR: f64 = 3600.;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Second;
impl UnitType for Second {
    type Quantity = Time;
    const NAME: &'static str = "Second";
    const SYMBOL: &'static str = "s";
    const LATEX_SYMBOL: &'static str = "s";
    const DESCRIPTION: &'static str = "SI base unit of time";
    const MIN: f64 = 0.;
    const MAX: f64 = 24. * SECONDS_PER_HOUR;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Hour;
impl UnitType for Hour {
    type Quantity = Time;
    const NAME: &'static str = "Hour";
    const SYMBOL: &'static str = "h";
    const LATEX_SYMBOL: &'static str = "h";
    const DESCRIPTION: &'static str = "Sixty minutes";
    const MIN: f64 = 0.;
    const MAX: f64 = 24.;
}

conversion!(Second => Hour, |s| s / SECONDS_PER_HOUR);
conversion!(Hour => Second, |h| h * SECONDS_PER_HOUR);

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<Time>()?;
    builder.unit::<Second>()?;
    builder.unit::<Hour>()?;
    builder.conversion::<Second, Hour>()?;
    builder.conversion::<Hour, Second>()?;
    Ok(())
}
