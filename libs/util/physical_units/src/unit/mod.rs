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

// Electrical
pub(crate) mod current;

// Geometry
pub(crate) mod area;
pub(crate) mod length;
pub(crate) mod volume;

// Kinematics
pub(crate) mod time;
pub(crate) mod velocity;

// Fluids
pub(crate) mod density;
pub(crate) mod gravity;
pub(crate) mod pressure;
pub(crate) mod temperature;
pub(crate) mod viscosity;

use crate::{Registry, RegistryBuilder, UnitError};

/// Declare the whole built-in catalog into `builder`. Compound units go last
/// since they refer to units of several quantities.
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    current::register(builder)?;
    length::register(builder)?;
    time::register(builder)?;
    velocity::register(builder)?;
    area::register(builder)?;
    volume::register(builder)?;
    pressure::register(builder)?;
    temperature::register(builder)?;
    density::register(builder)?;
    viscosity::register(builder)?;
    gravity::register(builder)?;

    area::register_compounds(builder)?;
    volume::register_compounds(builder)?;
    velocity::register_compounds(builder)?;
    Ok(())
}

pub(crate) fn builtin() -> Result<Registry, UnitError> {
    let mut builder = RegistryBuilder::new();
    register_all(&mut builder)?;
    Ok(builder.build())
}
