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
    DynamicViscosity,
    "DynamicViscosity",
    "mu",
    "\\mu",
    "Resistance of a fluid to shear flow"
);

physical_quantity!(
    KinematicViscosity,
    "KinematicViscosity",
    "nu",
    "\\nu",
    "Dynamic viscosity divided by density"
);

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct CentiPoise;
impl UnitType for CentiPoise {
    type Quantity = DynamicViscosity;
    const NAME: &'static str = "CentiPoise";
    const SYMBOL: &'static str = "cP";
    const LATEX_SYMBOL: &'static str = "cP";
    const DESCRIPTION: &'static str = "One hundredth of a poise";
    const MIN: f64 = 0.;
    const MAX: f64 = 10_000.;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct PascalSecond;
impl UnitType for PascalSecond {
    type Quantity = DynamicViscosity;
    const NAME: &'static str = "PascalSecond";
    const SYMBOL: &'static str = "Pa.s";
    const LATEX_SYMBOL: &'static str = "Pa \\cdot s";
    const DESCRIPTION: &'static str = "SI unit of dynamic viscosity";
    const MIN: f64 = 0.;
    const MAX: f64 = 10.;
}

conversion!(CentiPoise => PascalSecond, |v| v / 1000.);
conversion!(PascalSecond => CentiPoise, |v| v * 1000.);

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct CentiStoke;
impl UnitType for CentiStoke {
    type Quantity = KinematicViscosity;
    const NAME: &'static str = "CentiStoke";
    const SYMBOL: &'static str = "cSt";
    const LATEX_SYMBOL: &'static str = "cSt";
    const DESCRIPTION: &'static str = "Kinematic viscosity measured in centistokes";
    const MIN: f64 = 0.;
    const MAX: f64 = 1319.98;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct SayboltUniversalViscosity;
impl UnitType for SayboltUniversalViscosity {
    type Quantity = KinematicViscosity;
    const NAME: &'static str = "SayboltUniversalViscosity";
    const SYMBOL: &'static str = "SSU";
    const LATEX_SYMBOL: &'static str = "SSU";
    const DESCRIPTION: &'static str = "Kinematic viscosity measured in Saybolt universal seconds";
    const MIN: f64 = 0.;
    const MAX: f64 = 6000.;
}

// Empirical fits; neither is the exact inverse of the other.
conversion!(CentiStoke => SayboltUniversalViscosity, |v| {
    2.273 * (v + (v * v + 158.4).sqrt())
});
conversion!(SayboltUniversalViscosity => CentiStoke, |s| {
    if s < 100. {
        0.266 * s - 195. / s
    } else {
        0.22 * s - 135. / s
    }
});

pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), UnitError> {
    builder.quantity::<DynamicViscosity>()?;
    builder.unit::<CentiPoise>()?;
    builder.unit::<PascalSecond>()?;
    builder.conversion::<CentiPoise, PascalSecond>()?;
    builder.conversion::<PascalSecond, CentiPoise>()?;

    builder.quantity::<KinematicViscosity>()?;
    builder.unit::<CentiStoke>()?;
    builder.unit::<SayboltUniversalViscosity>()?;
    builder.conversion::<CentiStoke, SayboltUniversalViscosity>()?;
    builder.conversion::<SayboltUniversalViscosity, CentiStoke>()?;
    Ok(())
}
