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
use approx::assert_abs_diff_eq;
use physical_units::{
    compound, conversion, physical_quantity, DynamicQuantity, ErrorKind, RegistryBuilder,
    StaticQuantity, UnitError, UnitType,
};

physical_quantity!(Distance, "Distance", "d", "d", "How far apart");
physical_quantity!(Field, "Field", "F", "F", "A piece of farmland");

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Furlong;
impl UnitType for Furlong {
    type Quantity = Distance;
    const NAME: &'static str = "Furlong";
    const SYMBOL: &'static str = "fur";
    const LATEX_SYMBOL: &'static str = "fur";
    const DESCRIPTION: &'static str = "Length of a furrow";
    const MIN: f64 = 0.;
    const MAX: f64 = 100.;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Chain;
impl UnitType for Chain {
    type Quantity = Distance;
    const NAME: &'static str = "Chain";
    const SYMBOL: &'static str = "ch";
    const LATEX_SYMBOL: &'static str = "ch";
    const DESCRIPTION: &'static str = "Surveyor's chain";
    const MIN: f64 = 0.;
    const MAX: f64 = 1000.;
    const EPSILON_RATIO: f64 = 0.01;
}

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Acre;
impl UnitType for Acre {
    type Quantity = Field;
    const NAME: &'static str = "Acre";
    const SYMBOL: &'static str = "ac";
    const LATEX_SYMBOL: &'static str = "ac";
    const DESCRIPTION: &'static str = "One furlong by one chain";
    const MIN: f64 = 0.;
    const MAX: f64 = 10_000.;
}

conversion!(Furlong => Chain, |f| f * 10.);
conversion!(Chain => Furlong, |c| c / 10.);
compound!(Acre = Furlong * Chain);

fn registry() -> Result<physical_units::Registry, UnitError> {
    let mut builder = RegistryBuilder::new();
    builder.quantity::<Distance>()?;
    builder.quantity::<Field>()?;
    builder.unit::<Furlong>()?;
    builder.unit::<Chain>()?;
    builder.unit::<Acre>()?;
    builder.conversion::<Furlong, Chain>()?;
    builder.conversion::<Chain, Furlong>()?;
    builder.product::<Furlong, Chain>()?;
    Ok(builder.build())
}

#[test]
fn test_user_declared_units() -> Result<(), UnitError> {
    let f = StaticQuantity::<Furlong>::new(2)?;
    let c = f.convert::<Chain>()?;
    assert_eq!(c.f64(), 20.);
    assert!(f == c);
    let field: StaticQuantity<Acre> = (f * c)?;
    assert_eq!(field.f64(), 40.);
    assert_eq!(Chain::epsilon(), 10.);
    Ok(())
}

#[test]
fn test_static_and_dynamic_agree() -> Result<(), UnitError> {
    let r = registry()?;
    let chain = r.unit_by_name("Chain").expect("chain");
    assert_eq!(chain.epsilon_ratio(), Chain::EPSILON_RATIO);
    assert_eq!(chain.epsilon(), Chain::epsilon());

    let f = StaticQuantity::<Furlong>::new(3)?;
    let via_static = f.convert::<Chain>()?.f64();
    let via_dynamic = r.convert_name_to_name("Furlong", 3., "Chain")?;
    assert_eq!(via_static, via_dynamic);

    let a = DynamicQuantity::new(&r, "Furlong", 3.)?;
    let b = DynamicQuantity::from_symbol(&r, 5., "ch")?;
    let field = (a * b)?;
    assert_eq!(field.unit().name(), "Acre");
    let back = StaticQuantity::<Acre>::from_dynamic(&field)?;
    assert_abs_diff_eq!(back.f64(), 15.);
    Ok(())
}

#[test]
fn test_unit_without_quantity_is_rejected() {
    let mut builder = RegistryBuilder::new();
    assert_eq!(
        builder.unit::<Furlong>().unwrap_err().kind(),
        ErrorKind::InvalidPhysicalQuantity
    );
    assert_eq!(builder.registry().unit_count(), 0);
}

#[test]
fn test_static_range_checks() {
    assert_eq!(
        StaticQuantity::<Furlong>::new(200).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
    let f = StaticQuantity::<Furlong>::new(100).expect("in range");
    assert_eq!(
        f.convert::<Chain>().map(|c| c.f64()),
        Ok(1000.)
    );
    // 1000 chains fits; 1011 does not, Chain's slack being only 10.
    assert!(StaticQuantity::<Chain>::new(1010).is_ok());
    assert!(StaticQuantity::<Chain>::new(1011).is_err());
}
