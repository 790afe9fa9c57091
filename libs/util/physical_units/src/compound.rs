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
use std::collections::BTreeMap;

// Operand names are stored as declared, but compared as a sorted multiset:
// `[psia, ft3]` and `[ft3, psia]` are the same key.
#[derive(Clone, Debug, Default)]
pub(crate) struct CompoundTable {
    table: BTreeMap<Vec<String>, (Vec<String>, UnitId)>,
}

fn sorted_key<S: AsRef<str>>(operands: &[S]) -> Vec<String> {
    let mut key = operands
        .iter()
        .map(|s| s.as_ref().to_owned())
        .collect::<Vec<_>>();
    key.sort();
    key
}

impl CompoundTable {
    pub(crate) fn search<S: AsRef<str>>(&self, operands: &[S]) -> Option<UnitId> {
        self.table.get(&sorted_key(operands)).map(|(_, unit)| *unit)
    }

    pub(crate) fn contains<S: AsRef<str>>(&self, operands: &[S]) -> bool {
        self.table.contains_key(&sorted_key(operands))
    }

    /// Returns false, changing nothing, if the key is already present.
    pub(crate) fn insert<S: AsRef<str>>(&mut self, operands: &[S], unit: UnitId) -> bool {
        let key = sorted_key(operands);
        if self.table.contains_key(&key) {
            return false;
        }
        let declared = operands.iter().map(|s| s.as_ref().to_owned()).collect();
        self.table.insert(key, (declared, unit));
        true
    }

    /// Declared operand lists and their results, in key order.
    pub(crate) fn items(&self) -> impl Iterator<Item = (&[String], UnitId)> + '_ {
        self.table
            .values()
            .map(|(declared, unit)| (declared.as_slice(), *unit))
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}
