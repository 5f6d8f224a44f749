/*
ENSnano, a 3d graphical application for DNA nanostructures.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use ordered_float::NotNan;

/// The index of the element before `index` in a ring of `len` elements.
pub fn previous_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// The index of the element after `index` in a ring of `len` elements.
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// The position of the first maximal value of `values`.
///
/// Return `None` if `values` is empty or contains a NaN.
pub fn position_of_max(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, NotNan<f64>)> = None;
    for (i, x) in values.iter().enumerate() {
        let x = NotNan::new(*x).ok()?;
        if best.map_or(true, |(_, max)| x > max) {
            best = Some((i, x));
        }
    }
    best.map(|(i, _)| i)
}

// Serialization utils
//===========================================================================
pub(super) fn is_false(x: &bool) -> bool {
    !*x
}
//===========================================================================
