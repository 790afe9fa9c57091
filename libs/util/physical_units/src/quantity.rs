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
use crate::{item::Cataloged, UnitId, UnitItem};
use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct QuantityId(pub(crate) u16);

impl QuantityId {
    pub(crate) const NULL: QuantityId = QuantityId(u16::MAX);

    pub(crate) fn offset(self) -> usize {
        self.0 as usize
    }
}

/// A dimension of measurement, owning the family of units that measure it.
#[derive(Clone, Debug)]
pub struct PhysicalQuantity {
    id: QuantityId,
    item: UnitItem,
    units: Vec<UnitId>,
}

impl PhysicalQuantity {
    pub(crate) fn new(id: QuantityId, item: UnitItem) -> Self {
        Self {
            id,
            item,
            units: Vec::new(),
        }
    }

    pub(crate) fn null() -> Self {
        Self::new(
            QuantityId::NULL,
            UnitItem::new(
                "NullPhysicalQuantity",
                "NullPQ",
                "Null",
                "Null Physical Quantity",
            ),
        )
    }

    pub(crate) fn push_unit(&mut self, unit: UnitId) {
        self.units.push(unit);
    }

    pub fn id(&self) -> QuantityId {
        self.id
    }

    pub fn is_null(&self) -> bool {
        self.id == QuantityId::NULL
    }

    pub fn item(&self) -> &UnitItem {
        &self.item
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn symbol(&self) -> &str {
        self.item.symbol()
    }

    pub fn latex_symbol(&self) -> &str {
        self.item.latex_symbol()
    }

    pub fn description(&self) -> &str {
        self.item.description()
    }

    /// Ids of the units measuring this quantity, in declaration order.
    pub fn unit_ids(&self) -> &[UnitId] {
        &self.units
    }
}

impl Cataloged for PhysicalQuantity {
    fn item(&self) -> &UnitItem {
        &self.item
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}
