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

//! Physical quantities and units with range validated values.
//!
//! Units are declared once, through a `RegistryBuilder`, then frozen into a
//! `Registry`. Values come in two flavours: `StaticQuantity<U>`, whose unit
//! is a type and whose conversions are checked by the compiler, and
//! `DynamicQuantity`, whose unit is picked at run time from a registry.

pub(crate) mod compound;
pub(crate) mod conversion;
pub(crate) mod dynamic_quantity;
pub(crate) mod error;
pub(crate) mod export;
pub(crate) mod generic;
pub(crate) mod item;
pub(crate) mod quantity;
pub(crate) mod registry;
pub(crate) mod static_quantity;
pub(crate) mod tolerance;
pub(crate) mod unit;
pub(crate) mod unit_def;

pub use crate::{
    conversion::{ConversionFn, IdentifierKind},
    dynamic_quantity::DynamicQuantity,
    error::{ErrorKind, UnitError},
    export::EXPORT_ROOT,
    generic::{Combine, ConvertFrom, DivideBy, QuantityType, Quotient, SiblingOf, UnitType},
    item::{Cataloged, ItemCatalog, UnitItem},
    quantity::{PhysicalQuantity, QuantityId},
    registry::{initialize, registry, ConversionAudit, Registry, RegistryBuilder},
    static_quantity::StaticQuantity,
    tolerance::{DEFAULT_EPSILON_RATIO, MAX_EPSILON_RATIO},
    unit::{
        area::{Area, SquareFoot, SquareMeter},
        current::{Ampere, Current},
        density::{Density, GramPerCubicCentimeter, KilogramPerCubicMeter, PoundPerCubicFoot},
        gravity::{LiquidGravity, SpecificGravity},
        length::{Foot, Length, Meter},
        pressure::{Bar, Pascal, Pressure, Psia, Psig, ATMOSPHERE_PSI},
        register_all,
        temperature::{Celsius, Fahrenheit, Kelvin, Rankine, Temperature},
        time::{Hour, Second, Time},
        velocity::{FootPerSecond, MeterPerSecond, Velocity},
        viscosity::{
            CentiPoise, CentiStoke, DynamicViscosity, KinematicViscosity, PascalSecond,
            SayboltUniversalViscosity,
        },
        volume::{CubicFoot, CubicMeter, Volume},
    },
    unit_def::{Unit, UnitId},
};

pub use ordered_float;
