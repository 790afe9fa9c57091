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
use crate::UnitId;
use std::collections::HashMap;

/// A registered conversion. Pure; not assumed to be invertible.
pub type ConversionFn = fn(f64) -> f64;

pub(crate) fn identity(v: f64) -> f64 {
    v
}

/// How a unit was named when asking for a conversion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IdentifierKind {
    Name,
    Symbol,
}

// Conversions keyed by unit identity. Name and symbol lookups resolve to ids
// first, so there is exactly one entry per ordered unit pair and no way for
// the name and symbol views to disagree.
#[derive(Clone, Debug, Default)]
pub(crate) struct ConversionTable {
    table: HashMap<(UnitId, UnitId), ConversionFn>,
}

impl ConversionTable {
    pub(crate) fn contains(&self, src: UnitId, tgt: UnitId) -> bool {
        self.table.contains_key(&(src, tgt))
    }

    pub(crate) fn get(&self, src: UnitId, tgt: UnitId) -> Option<ConversionFn> {
        self.table.get(&(src, tgt)).copied()
    }

    // Caller must have checked `contains` already; this cannot fail.
    pub(crate) fn insert(&mut self, src: UnitId, tgt: UnitId, f: ConversionFn) {
        let prior = self.table.insert((src, tgt), f);
        debug_assert!(prior.is_none(), "conversion inserted twice");
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}
