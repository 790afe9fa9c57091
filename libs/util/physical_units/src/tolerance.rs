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

/// Fraction of a unit's span used as its tolerance unless declared otherwise.
pub const DEFAULT_EPSILON_RATIO: f64 = 0.05;

/// Largest accepted epsilon ratio. The lower bound is exclusive zero.
pub const MAX_EPSILON_RATIO: f64 = 0.3;

pub fn check_epsilon_ratio(unit: &str, ratio: f64) -> Result<(), UnitError> {
    // Written so that NaN is rejected too.
    if ratio > 0. && ratio <= MAX_EPSILON_RATIO {
        return Ok(());
    }
    Err(UnitError::InvalidTolerance {
        unit: unit.to_owned(),
        ratio,
    })
}

pub fn check_range(unit: &str, min: f64, max: f64) -> Result<(), UnitError> {
    if min > max {
        return Err(UnitError::RangeInverted {
            unit: unit.to_owned(),
            min,
            max,
        });
    }
    Ok(())
}

pub fn epsilon_for(ratio: f64, min: f64, max: f64) -> f64 {
    ratio * (max - min)
}

/// Inclusive range with slack at both ends: anything in [min, max], or
/// within epsilon of either bound.
pub fn within_tolerance(value: f64, min: f64, max: f64, epsilon: f64) -> bool {
    if value >= min && value <= max {
        return true;
    }
    (value - min).abs() <= epsilon || (value - max).abs() <= epsilon
}

/// The next representable f64 after `value` in the direction of `target`.
pub fn next_toward(value: f64, target: f64) -> f64 {
    if value.is_nan() || target.is_nan() {
        f64::NAN
    } else if value < target {
        value.next_up()
    } else if value > target {
        value.next_down()
    } else {
        target
    }
}
