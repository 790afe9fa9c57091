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
use crate::UnitError;
use std::{collections::HashMap, fmt};
use unicase::UniCase;

/// The descriptive part shared by physical quantities and units.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitItem {
    name: String,
    symbol: String,
    latex_symbol: String,
    description: String,
}

impl UnitItem {
    pub fn new<S: Into<String>>(name: S, symbol: S, latex_symbol: S, description: S) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            latex_symbol: latex_symbol.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn latex_symbol(&self) -> &str {
        &self.latex_symbol
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for UnitItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "name        = {}", self.name)?;
        writeln!(f, "symbol      = {}", self.symbol)?;
        write!(f, "description = {}", self.description)
    }
}

/// Anything that can be filed in an `ItemCatalog`.
pub trait Cataloged {
    fn item(&self) -> &UnitItem;
}

impl Cataloged for UnitItem {
    fn item(&self) -> &UnitItem {
        self
    }
}

// An append-only store indexed by both name and symbol. Names and symbols are
// each unique within the catalog; nothing is ever removed. Positions are
// stable and double as identifiers for the owning registry.
#[derive(Clone, Debug)]
pub struct ItemCatalog<T> {
    catalog: &'static str,
    items: Vec<T>,
    by_name: HashMap<String, usize>,
    by_symbol: HashMap<String, usize>,
}

impl<T: Cataloged> ItemCatalog<T> {
    /// Create an empty catalog. `catalog` names the catalog in errors.
    pub fn new(catalog: &'static str) -> Self {
        Self {
            catalog,
            items: Vec::new(),
            by_name: HashMap::new(),
            by_symbol: HashMap::new(),
        }
    }

    /// Fail if `item` could not be registered. Does not modify the catalog.
    pub fn check(&self, item: &UnitItem) -> Result<(), UnitError> {
        if self.by_name.contains_key(item.name()) {
            return Err(UnitError::DuplicateName {
                catalog: self.catalog,
                name: item.name().to_owned(),
            });
        }
        if self.by_symbol.contains_key(item.symbol()) {
            return Err(UnitError::DuplicateSymbol {
                catalog: self.catalog,
                symbol: item.symbol().to_owned(),
            });
        }
        Ok(())
    }

    /// Index `value` by name and symbol and return its position. On
    /// failure the catalog is left exactly as it was.
    pub fn register(&mut self, value: T) -> Result<usize, UnitError> {
        self.check(value.item())?;
        let offset = self.items.len();
        self.by_name.insert(value.item().name().to_owned(), offset);
        self.by_symbol.insert(value.item().symbol().to_owned(), offset);
        self.items.push(value);
        Ok(offset)
    }

    /// The position that the next registered item will receive.
    pub fn next_offset(&self) -> usize {
        self.items.len()
    }

    pub fn search_by_name(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&offset| &self.items[offset])
    }

    pub fn search_by_symbol(&self, symbol: &str) -> Option<&T> {
        self.by_symbol.get(symbol).map(|&offset| &self.items[offset])
    }

    /// Case insensitive search on names, then on symbols. An ambiguous
    /// match counts as no match.
    pub fn search_folded(&self, identifier: &str) -> Option<&T> {
        fn unique<X>(matches: Vec<X>) -> Option<X> {
            if matches.len() == 1 {
                matches.into_iter().next()
            } else {
                None
            }
        }
        let needle = UniCase::new(identifier);
        unique(
            self.items
                .iter()
                .filter(|v| UniCase::new(v.item().name()) == needle)
                .collect(),
        )
        .or_else(|| {
            unique(
                self.items
                    .iter()
                    .filter(|v| UniCase::new(v.item().symbol()) == needle)
                    .collect(),
            )
        })
    }

    pub fn exists_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn exists_symbol(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|v| v.item().name()).collect()
    }

    /// Symbols in registration order.
    pub fn symbols(&self) -> Vec<&str> {
        self.items.iter().map(|v| v.item().symbol()).collect()
    }

    /// Items in registration order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, offset: usize) -> Option<&T> {
        self.items.get(offset)
    }

    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.items.get_mut(offset)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    fn item(name: &str, symbol: &str) -> UnitItem {
        UnitItem::new(name, symbol, symbol, "test item")
    }

    #[test]
    fn test_register_and_search() -> Result<(), UnitError> {
        let mut catalog = ItemCatalog::new("unit");
        assert_eq!(catalog.register(item("Ampere", "amp"))?, 0);
        assert_eq!(catalog.register(item("Volt", "V"))?, 1);
        assert_eq!(catalog.search_by_name("Volt").map(|v| v.symbol()), Some("V"));
        assert_eq!(
            catalog.search_by_symbol("amp").map(|v| v.name()),
            Some("Ampere")
        );
        assert!(catalog.search_by_name("amp").is_none());
        assert!(catalog.search_by_symbol("Ampere").is_none());
        assert_eq!(catalog.names(), vec!["Ampere", "Volt"]);
        assert_eq!(catalog.symbols(), vec!["amp", "V"]);
        assert_eq!(catalog.len(), 2);
        Ok(())
    }

    #[test]
    fn test_duplicate_name_leaves_catalog_unchanged() -> Result<(), UnitError> {
        let mut catalog = ItemCatalog::new("unit");
        catalog.register(item("Ampere", "amp"))?;
        let err = catalog.register(item("Ampere", "A")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
        assert!(!catalog.exists_symbol("A"));
        assert_eq!(catalog.len(), 1);
        Ok(())
    }

    #[test]
    fn test_duplicate_symbol_leaves_catalog_unchanged() -> Result<(), UnitError> {
        let mut catalog = ItemCatalog::new("unit");
        catalog.register(item("Ampere", "amp"))?;
        let err = catalog.register(item("Milliampere", "amp")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateSymbol);
        assert!(!catalog.exists_name("Milliampere"));
        assert_eq!(catalog.names(), vec!["Ampere"]);
        Ok(())
    }

    #[test]
    fn test_folded_search() -> Result<(), UnitError> {
        let mut catalog = ItemCatalog::new("unit");
        catalog.register(item("Ampere", "amp"))?;
        catalog.register(item("Millimeter", "mm"))?;
        catalog.register(item("Megameter", "Mm"))?;
        assert_eq!(catalog.search_folded("Amp").map(|v| v.name()), Some("Ampere"));
        assert_eq!(
            catalog.search_folded("AMPERE").map(|v| v.name()),
            Some("Ampere")
        );
        // mm and Mm fold to the same key.
        assert!(catalog.search_folded("MM").is_none());
        Ok(())
    }
}
