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
    compound::CompoundTable,
    conversion::{identity, ConversionTable},
    item::ItemCatalog,
    tolerance::DEFAULT_EPSILON_RATIO,
    Combine, ConversionFn, ConvertFrom, DivideBy, IdentifierKind, PhysicalQuantity, QuantityId,
    QuantityType, Quotient, Unit, UnitError, UnitId, UnitItem, UnitType,
};
use itertools::Itertools;
use log::{debug, info, trace, warn};
use once_cell::sync::OnceCell;
use static_assertions::assert_impl_all;
use std::ptr;

/// Result of auditing one physical quantity for missing conversions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConversionAudit {
    pub complete: bool,
    pub missing: Vec<String>,
}

// The frozen set of physical quantities, units, conversions and compound
// units. There is no mutable access once built; build one with
// `RegistryBuilder` or use the process-wide one from `initialize`.
#[derive(Debug)]
pub struct Registry {
    quantities: ItemCatalog<PhysicalQuantity>,
    units: ItemCatalog<Unit>,
    conversions: ConversionTable,
    compounds: CompoundTable,
    null_quantity: PhysicalQuantity,
    null_unit: Unit,
}
assert_impl_all!(Registry: Send, Sync);

impl Registry {
    fn empty() -> Self {
        Self {
            quantities: ItemCatalog::new("physical quantity"),
            units: ItemCatalog::new("unit"),
            conversions: ConversionTable::default(),
            compounds: CompoundTable::default(),
            null_quantity: PhysicalQuantity::null(),
            null_unit: Unit::null(),
        }
    }

    pub fn null_quantity(&self) -> &PhysicalQuantity {
        &self.null_quantity
    }

    pub fn null_unit(&self) -> &Unit {
        &self.null_unit
    }

    /// True if `unit` is one of this registry's own units (or its null unit).
    pub fn owns(&self, unit: &Unit) -> bool {
        ptr::eq(self.unit(unit.id()), unit)
    }

    // Physical quantities

    pub fn quantities(&self) -> &[PhysicalQuantity] {
        self.quantities.items()
    }

    pub fn quantity_names(&self) -> Vec<&str> {
        self.quantities.names()
    }

    pub fn search_quantity(&self, name: &str) -> Option<&PhysicalQuantity> {
        self.quantities.search_by_name(name)
    }

    pub fn quantity(&self, id: QuantityId) -> &PhysicalQuantity {
        self.quantities
            .get(id.offset())
            .unwrap_or(&self.null_quantity)
    }

    pub fn quantity_of(&self, unit: &Unit) -> &PhysicalQuantity {
        self.quantity(unit.quantity_id())
    }

    // Units

    pub fn unit(&self, id: UnitId) -> &Unit {
        self.units.get(id.offset()).unwrap_or(&self.null_unit)
    }

    pub fn units(&self) -> &[Unit] {
        self.units.items()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn unit_names(&self) -> Vec<&str> {
        self.units.names()
    }

    pub fn unit_symbols(&self) -> Vec<&str> {
        self.units.symbols()
    }

    pub fn unit_by_name(&self, name: &str) -> Option<&Unit> {
        self.units.search_by_name(name)
    }

    pub fn unit_by_symbol(&self, symbol: &str) -> Option<&Unit> {
        self.units.search_by_symbol(symbol)
    }

    /// Find a unit by name, then by symbol. Failing both, a unique case
    /// insensitive match on name or symbol is accepted.
    pub fn lookup_unit(&self, identifier: &str) -> Option<&Unit> {
        self.units
            .search_by_name(identifier)
            .or_else(|| self.units.search_by_symbol(identifier))
            .or_else(|| self.units.search_folded(identifier))
    }

    /// Like `lookup_unit`, but without the case insensitive fallback.
    pub fn search_unit(&self, identifier: &str) -> Option<&Unit> {
        self.units
            .search_by_name(identifier)
            .or_else(|| self.units.search_by_symbol(identifier))
    }

    pub(crate) fn require_unit(&self, identifier: &str) -> Result<&Unit, UnitError> {
        self.search_unit(identifier)
            .ok_or_else(|| UnitError::UnitNotFound {
                identifier: identifier.to_owned(),
            })
    }

    pub(crate) fn require_unit_by_name(&self, name: &str) -> Result<&Unit, UnitError> {
        self.unit_by_name(name).ok_or_else(|| UnitError::UnitNotFound {
            identifier: name.to_owned(),
        })
    }

    pub(crate) fn require_unit_by_symbol(&self, symbol: &str) -> Result<&Unit, UnitError> {
        self.unit_by_symbol(symbol)
            .ok_or_else(|| UnitError::UnitNotFound {
                identifier: symbol.to_owned(),
            })
    }

    /// All units measuring `quantity`, in declaration order.
    pub fn family(&self, quantity: &PhysicalQuantity) -> Vec<&Unit> {
        quantity
            .unit_ids()
            .iter()
            .map(|&id| self.unit(id))
            .collect()
    }

    /// The family of `unit`, without `unit` itself.
    pub fn siblings(&self, unit: &Unit) -> Vec<&Unit> {
        self.family(self.quantity_of(unit))
            .into_iter()
            .filter(|u| u.id() != unit.id())
            .collect()
    }

    /// Units of another registry are never siblings of this one's.
    pub fn is_sibling(&self, a: &Unit, b: &Unit) -> bool {
        self.owns(a) && self.owns(b) && a.is_sibling(b)
    }

    fn check_owned(&self, unit: &Unit) -> Result<(), UnitError> {
        if self.owns(unit) {
            return Ok(());
        }
        Err(UnitError::InvalidPhysicalQuantity {
            detail: format!("unit {} belongs to a different registry", unit.name()),
        })
    }

    pub(crate) fn check_siblings(&self, src: &Unit, tgt: &Unit) -> Result<(), UnitError> {
        self.check_owned(src)?;
        self.check_owned(tgt)?;
        if src.is_sibling(tgt) && !src.is_null() {
            return Ok(());
        }
        Err(UnitError::WrongSiblingUnit {
            left_unit: src.name().to_owned(),
            left_quantity: self.quantity_of(src).name().to_owned(),
            right_unit: tgt.name().to_owned(),
            right_quantity: self.quantity_of(tgt).name().to_owned(),
        })
    }

    // Conversions

    /// The conversion between two units of this registry.
    pub fn conversion(&self, src: &Unit, tgt: &Unit) -> Result<ConversionFn, UnitError> {
        self.check_siblings(src, tgt)?;
        trace!("conversion lookup {} -> {}", src.name(), tgt.name());
        self.conversions
            .get(src.id(), tgt.id())
            .ok_or_else(|| UnitError::ConversionNotFound {
                from: src.name().to_owned(),
                to: tgt.name().to_owned(),
            })
    }

    /// Convert `value` from `src` to `tgt`. The result is not range checked.
    pub fn convert(&self, src: &Unit, value: f64, tgt: &Unit) -> Result<f64, UnitError> {
        Ok(self.conversion(src, tgt)?(value))
    }

    fn resolve(&self, kind: IdentifierKind, identifier: &str) -> Option<&Unit> {
        match kind {
            IdentifierKind::Name => self.unit_by_name(identifier),
            IdentifierKind::Symbol => self.unit_by_symbol(identifier),
        }
    }

    /// Find the conversion registered between two identifiers, each of the
    /// given kind.
    pub fn lookup_conversion(
        &self,
        src_kind: IdentifierKind,
        src: &str,
        tgt_kind: IdentifierKind,
        tgt: &str,
    ) -> Result<ConversionFn, UnitError> {
        trace!("conversion lookup {:?} {} -> {:?} {}", src_kind, src, tgt_kind, tgt);
        let not_found = || UnitError::ConversionNotFound {
            from: src.to_owned(),
            to: tgt.to_owned(),
        };
        let src_unit = self.resolve(src_kind, src).ok_or_else(not_found)?;
        let tgt_unit = self.resolve(tgt_kind, tgt).ok_or_else(not_found)?;
        self.conversions
            .get(src_unit.id(), tgt_unit.id())
            .ok_or_else(not_found)
    }

    pub fn conversion_name_to_name(
        &self,
        src_name: &str,
        tgt_name: &str,
    ) -> Result<ConversionFn, UnitError> {
        self.lookup_conversion(IdentifierKind::Name, src_name, IdentifierKind::Name, tgt_name)
    }

    pub fn conversion_name_to_symbol(
        &self,
        src_name: &str,
        tgt_symbol: &str,
    ) -> Result<ConversionFn, UnitError> {
        self.lookup_conversion(
            IdentifierKind::Name,
            src_name,
            IdentifierKind::Symbol,
            tgt_symbol,
        )
    }

    pub fn conversion_symbol_to_name(
        &self,
        src_symbol: &str,
        tgt_name: &str,
    ) -> Result<ConversionFn, UnitError> {
        self.lookup_conversion(
            IdentifierKind::Symbol,
            src_symbol,
            IdentifierKind::Name,
            tgt_name,
        )
    }

    pub fn conversion_symbol_to_symbol(
        &self,
        src_symbol: &str,
        tgt_symbol: &str,
    ) -> Result<ConversionFn, UnitError> {
        self.lookup_conversion(
            IdentifierKind::Symbol,
            src_symbol,
            IdentifierKind::Symbol,
            tgt_symbol,
        )
    }

    pub fn convert_name_to_name(
        &self,
        src_name: &str,
        value: f64,
        tgt_name: &str,
    ) -> Result<f64, UnitError> {
        Ok(self.conversion_name_to_name(src_name, tgt_name)?(value))
    }

    pub fn convert_name_to_symbol(
        &self,
        src_name: &str,
        value: f64,
        tgt_symbol: &str,
    ) -> Result<f64, UnitError> {
        Ok(self.conversion_name_to_symbol(src_name, tgt_symbol)?(value))
    }

    pub fn convert_symbol_to_name(
        &self,
        src_symbol: &str,
        value: f64,
        tgt_name: &str,
    ) -> Result<f64, UnitError> {
        Ok(self.conversion_symbol_to_name(src_symbol, tgt_name)?(value))
    }

    pub fn convert_symbol_to_symbol(
        &self,
        src_symbol: &str,
        value: f64,
        tgt_symbol: &str,
    ) -> Result<f64, UnitError> {
        Ok(self.conversion_symbol_to_symbol(src_symbol, tgt_symbol)?(value))
    }

    /// Symbol to symbol shortcut.
    pub fn unit_convert(
        &self,
        src_symbol: &str,
        tgt_symbol: &str,
        value: f64,
    ) -> Result<f64, UnitError> {
        self.convert_symbol_to_symbol(src_symbol, value, tgt_symbol)
    }

    /// True if a conversion is registered between the units with the
    /// given symbols. Unknown symbols simply yield false.
    pub fn conversion_exists(&self, src_symbol: &str, tgt_symbol: &str) -> bool {
        match (
            self.unit_by_symbol(src_symbol),
            self.unit_by_symbol(tgt_symbol),
        ) {
            (Some(src), Some(tgt)) => self.conversions.contains(src.id(), tgt.id()),
            _ => false,
        }
    }

    /// List every ordered pair of distinct units of `quantity` for which no
    /// conversion has been registered.
    pub fn audit_missing_conversions(&self, quantity: &PhysicalQuantity) -> ConversionAudit {
        let family = self.family(quantity);
        let missing = family
            .iter()
            .cartesian_product(family.iter())
            .filter(|(src, tgt)| src.id() != tgt.id())
            .filter(|(src, tgt)| !self.conversions.contains(src.id(), tgt.id()))
            .map(|(src, tgt)| {
                format!(
                    "Missing conversion from {}({}) to {}({})",
                    src.name(),
                    src.symbol(),
                    tgt.name(),
                    tgt.symbol()
                )
            })
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            warn!(
                "{} is missing {} conversions",
                quantity.name(),
                missing.len()
            );
        }
        ConversionAudit {
            complete: missing.is_empty(),
            missing,
        }
    }

    pub fn conversion_count(&self) -> usize {
        self.conversions.len()
    }

    // Compound units

    /// The unit that results from combining the named operand units. Operand
    /// order does not matter.
    pub fn compound_unit<S: AsRef<str>>(&self, operand_names: &[S]) -> Option<&Unit> {
        self.compounds
            .search(operand_names)
            .map(|id| self.unit(id))
    }

    pub(crate) fn require_compound(&self, operands: &[&Unit]) -> Result<&Unit, UnitError> {
        let names = operands.iter().map(|u| u.name()).collect::<Vec<_>>();
        self.compound_unit(&names)
            .ok_or_else(|| UnitError::CompoundUnitNotFound {
                operands: names.iter().map(|s| (*s).to_owned()).collect(),
            })
    }

    /// Every compound declaration as (declared operand names, result unit).
    pub fn compound_units(&self) -> Vec<(Vec<String>, &Unit)> {
        self.compounds
            .items()
            .map(|(operands, id)| (operands.to_vec(), self.unit(id)))
            .collect()
    }
}

/// The only way to put things into a `Registry`. Every declaration checks all
/// of its preconditions before it changes anything, so a failed declaration
/// leaves the builder exactly as it was.
#[derive(Debug)]
pub struct RegistryBuilder {
    registry: Registry,
}

// u16::MAX is reserved for the null sentinels.
fn next_id(catalog: &'static str, name: &str, offset: usize) -> Result<u16, UnitError> {
    u16::try_from(offset)
        .ok()
        .filter(|&id| id != u16::MAX)
        .ok_or_else(|| UnitError::CatalogFull {
            catalog,
            name: name.to_owned(),
        })
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            registry: Registry::empty(),
        }
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to everything declared so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Freeze.
    pub fn build(self) -> Registry {
        debug!(
            "registry built: {} quantities, {} units, {} conversions, {} compounds",
            self.registry.quantities.len(),
            self.registry.units.len(),
            self.registry.conversions.len(),
            self.registry.compounds.len()
        );
        self.registry
    }

    pub fn declare_quantity(&mut self, item: UnitItem) -> Result<QuantityId, UnitError> {
        let id = QuantityId(next_id(
            "physical quantity",
            item.name(),
            self.registry.quantities.next_offset(),
        )?);
        debug!("declare physical quantity {} ({})", item.name(), item.symbol());
        self.registry
            .quantities
            .register(PhysicalQuantity::new(id, item))?;
        Ok(id)
    }

    pub fn declare_unit(
        &mut self,
        item: UnitItem,
        quantity: QuantityId,
        min: f64,
        max: f64,
    ) -> Result<UnitId, UnitError> {
        self.declare_unit_with_ratio(item, quantity, min, max, DEFAULT_EPSILON_RATIO)
    }

    pub fn declare_unit_with_ratio(
        &mut self,
        item: UnitItem,
        quantity: QuantityId,
        min: f64,
        max: f64,
        epsilon_ratio: f64,
    ) -> Result<UnitId, UnitError> {
        if self.registry.quantities.get(quantity.offset()).is_none() {
            return Err(UnitError::InvalidPhysicalQuantity {
                detail: format!("unit {} refers to an undeclared physical quantity", item.name()),
            });
        }
        let id = UnitId(next_id("unit", item.name(), self.registry.units.next_offset())?);
        let unit = Unit::new(id, item, quantity, min, max, epsilon_ratio)?;
        self.registry.units.check(unit.item())?;

        debug!(
            "declare unit {} ({}) [{}, {}] for {}",
            unit.name(),
            unit.symbol(),
            min,
            max,
            self.registry.quantity(quantity).name()
        );
        self.registry.units.register(unit)?;
        if let Some(q) = self.registry.quantities.get_mut(quantity.offset()) {
            q.push_unit(id);
        }
        self.registry.conversions.insert(id, id, identity);
        Ok(id)
    }

    /// Override the tolerance of an already declared unit.
    pub fn set_epsilon_ratio(&mut self, identifier: &str, ratio: f64) -> Result<(), UnitError> {
        let id = self.registry.require_unit(identifier)?.id();
        match self.registry.units.get_mut(id.offset()) {
            Some(unit) => unit.set_epsilon_ratio(ratio),
            None => Err(UnitError::UnitNotFound {
                identifier: identifier.to_owned(),
            }),
        }
    }

    /// Register `f` as the conversion from `src` to `tgt`, each given by name
    /// or symbol.
    pub fn declare_conversion(
        &mut self,
        src: &str,
        tgt: &str,
        f: ConversionFn,
    ) -> Result<(), UnitError> {
        let src = self.registry.require_unit(src)?;
        let tgt = self.registry.require_unit(tgt)?;
        self.registry.check_siblings(src, tgt)?;
        if self.registry.conversions.contains(src.id(), tgt.id()) {
            return Err(UnitError::DuplicateConversion {
                from: src.name().to_owned(),
                to: tgt.name().to_owned(),
            });
        }

        debug!("declare conversion {} -> {}", src.name(), tgt.name());
        let (src_id, tgt_id) = (src.id(), tgt.id());
        self.registry.conversions.insert(src_id, tgt_id, f);
        self.debug_assert_conversion_indexed(src_id, tgt_id);
        Ok(())
    }

    #[allow(unused_variables)]
    fn debug_assert_conversion_indexed(&self, src: UnitId, tgt: UnitId) {
        #[cfg(debug_assertions)]
        {
            let (src, tgt) = (self.registry.unit(src), self.registry.unit(tgt));
            let r = &self.registry;
            debug_assert!(r.conversion(src, tgt).is_ok());
            debug_assert!(r.conversion_name_to_name(src.name(), tgt.name()).is_ok());
            debug_assert!(r.conversion_name_to_symbol(src.name(), tgt.symbol()).is_ok());
            debug_assert!(r.conversion_symbol_to_name(src.symbol(), tgt.name()).is_ok());
            debug_assert!(r
                .conversion_symbol_to_symbol(src.symbol(), tgt.symbol())
                .is_ok());
        }
    }

    /// Declare that combining `operands` (two or three units, by name or
    /// symbol) yields `result`.
    pub fn declare_compound(&mut self, operands: &[&str], result: &str) -> Result<(), UnitError> {
        let result = self.registry.require_unit(result)?.id();
        let names = operands
            .iter()
            .map(|op| self.registry.require_unit(op).map(|u| u.name().to_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        if self.registry.compounds.contains(&names) {
            return Err(UnitError::DuplicateName {
                catalog: "compound unit",
                name: names.join(" * "),
            });
        }
        debug!(
            "declare compound {} -> {}",
            names.join(" * "),
            self.registry.unit(result).name()
        );
        let inserted = self.registry.compounds.insert(&names, result);
        debug_assert!(inserted);
        Ok(())
    }

    /// Declare the physical quantity described by a quantity type.
    pub fn quantity<Q: QuantityType>(&mut self) -> Result<QuantityId, UnitError> {
        self.declare_quantity(UnitItem::new(
            Q::NAME,
            Q::SYMBOL,
            Q::LATEX_SYMBOL,
            Q::DESCRIPTION,
        ))
    }

    /// Declare the unit described by a unit type. Its quantity type must have
    /// been declared already.
    pub fn unit<U: UnitType>(&mut self) -> Result<UnitId, UnitError> {
        let quantity_name = <U::Quantity as QuantityType>::NAME;
        let quantity = self
            .registry
            .search_quantity(quantity_name)
            .map(|q| q.id())
            .ok_or_else(|| UnitError::InvalidPhysicalQuantity {
                detail: format!(
                    "unit {} refers to undeclared physical quantity {}",
                    U::NAME,
                    quantity_name
                ),
            })?;
        self.declare_unit_with_ratio(
            UnitItem::new(U::NAME, U::SYMBOL, U::LATEX_SYMBOL, U::DESCRIPTION),
            quantity,
            U::MIN,
            U::MAX,
            U::EPSILON_RATIO,
        )
    }

    /// Register the statically declared conversion from `Src` to `Tgt`, so
    /// run-time lookups use the very function static conversion uses.
    pub fn conversion<Src, Tgt>(&mut self) -> Result<(), UnitError>
    where
        Src: UnitType,
        Tgt: ConvertFrom<Src>,
    {
        self.declare_conversion(Src::NAME, Tgt::NAME, <Tgt as ConvertFrom<Src>>::convert)
    }

    /// Register the statically declared product `A * B`.
    pub fn product<A, B>(&mut self) -> Result<(), UnitError>
    where
        A: Combine<B>,
        B: UnitType,
    {
        self.declare_compound(&[A::NAME, B::NAME], <A::Output as UnitType>::NAME)
    }

    /// Register the statically declared quotient `A / B = C`.
    pub fn quotient<A, B, C>(&mut self) -> Result<(), UnitError>
    where
        A: DivideBy<B, Output = Quotient<C>>,
        B: UnitType,
        C: UnitType,
    {
        self.declare_compound(&[A::NAME, B::NAME], C::NAME)
    }
}

static GLOBAL_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Build the built-in catalog into the process-wide registry. Call once at
/// startup, before spawning any threads that read units; later calls return
/// the same frozen registry.
pub fn initialize() -> Result<&'static Registry, UnitError> {
    GLOBAL_REGISTRY.get_or_try_init(|| {
        let registry = crate::unit::builtin()?;
        info!(
            "unit registry frozen: {} quantities, {} units, {} conversions",
            registry.quantities().len(),
            registry.unit_count(),
            registry.conversion_count()
        );
        Ok(registry)
    })
}

/// The process-wide registry, if `initialize` has run.
pub fn registry() -> Option<&'static Registry> {
    GLOBAL_REGISTRY.get()
}
