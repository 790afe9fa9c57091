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
use crate::{PhysicalQuantity, Registry, Unit};
use json::JsonValue;

/// Top level key of the export document; consumers look for this exact name.
pub const EXPORT_ROOT: &str = "Zen_physical_quantities";

fn unit_json(unit: &Unit) -> JsonValue {
    let mut obj = JsonValue::new_object();
    obj["name"] = unit.name().into();
    obj["description"] = unit.description().into();
    obj["symbol"] = unit.symbol().into();
    obj["latex_symbol"] = unit.latex_symbol().into();
    obj["minimum_value"] = unit.min().into();
    obj["maximum_value"] = unit.max().into();
    obj["epsilon"] = unit.epsilon().into();
    obj
}

impl Registry {
    pub fn quantity_as_json(&self, quantity: &PhysicalQuantity) -> JsonValue {
        let mut obj = JsonValue::new_object();
        obj["name"] = quantity.name().into();
        obj["description"] = quantity.description().into();
        obj["symbol"] = quantity.symbol().into();
        obj["latex_symbol"] = quantity.latex_symbol().into();
        obj["units"] = JsonValue::Array(self.family(quantity).into_iter().map(unit_json).collect());
        obj
    }

    /// Every physical quantity with its units. The null sentinels are not
    /// part of the catalog and are never exported.
    pub fn as_json(&self) -> JsonValue {
        let mut obj = JsonValue::new_object();
        obj[EXPORT_ROOT] = JsonValue::Array(
            self.quantities()
                .iter()
                .map(|q| self.quantity_as_json(q))
                .collect(),
        );
        obj
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{RegistryBuilder, UnitError, UnitItem};

    #[test]
    fn test_export_schema() -> Result<(), UnitError> {
        let mut builder = RegistryBuilder::new();
        let current = builder.declare_quantity(UnitItem::new(
            "Current",
            "I",
            "I",
            "Flow of electrical charge",
        ))?;
        builder.declare_unit(
            UnitItem::new("Ampere", "amp", "amp", "One coulomb per second"),
            current,
            0.,
            1000.,
        )?;
        let doc = builder.build().as_json();

        let quantities = &doc[EXPORT_ROOT];
        assert_eq!(quantities.len(), 1);
        let q = &quantities[0];
        assert_eq!(q["name"], "Current");
        assert_eq!(q["description"], "Flow of electrical charge");
        assert_eq!(q["symbol"], "I");
        assert_eq!(q["latex_symbol"], "I");
        let u = &q["units"][0];
        assert_eq!(u["name"], "Ampere");
        assert_eq!(u["symbol"], "amp");
        assert_eq!(u["minimum_value"].as_f64(), Some(0.));
        assert_eq!(u["maximum_value"].as_f64(), Some(1000.));
        assert_eq!(u["epsilon"].as_f64(), Some(50.));
        Ok(())
    }

    #[test]
    fn test_export_parses_back() -> Result<(), UnitError> {
        let mut builder = RegistryBuilder::new();
        crate::unit::register_all(&mut builder)?;
        let registry = builder.build();
        let text = registry.as_json().pretty(2);
        let parsed = json::parse(&text).expect("valid json");
        assert_eq!(parsed[EXPORT_ROOT].len(), registry.quantities().len());
        assert!(!text.contains("NullUnit"));
        Ok(())
    }
}
