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
//! NEMids produced by the side view generator.

use super::{Direction, StitchSeam};
use std::collections::BTreeMap;

/// Maximal distance between a NEMid and the left edge of its domain for it to be junctable.
pub const JUNCTABLE_EPSILON: f64 = 0.001;

/// A NEMid of the side view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub z: f64,
    /// Angle of the NEMid about the axis of its helix, in degrees.
    pub angle: f64,
    /// True iff the NEMid lies on the left edge of its domain, where it can be joined to a
    /// NEMid of the previous domain.
    pub junctable: bool,
    pub domain: usize,
    pub direction: Direction,
}

impl Point {
    pub fn new(x: f64, z: f64, angle: f64, domain: usize, direction: Direction) -> Self {
        Self {
            x,
            z,
            angle,
            junctable: (x - domain as f64).abs() < JUNCTABLE_EPSILON,
            domain,
            direction,
        }
    }
}

/// Identifier of one strand of a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrandId {
    pub domain: usize,
    pub direction: Direction,
}

impl StrandId {
    pub fn new(domain: usize, direction: Direction) -> Self {
        Self { domain, direction }
    }
}

impl std::fmt::Display for StrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "domain#{}-{}", self.domain, self.direction)
    }
}

/// The NEMids of every strand of every domain, in generation order.
///
/// A new container is produced by each computation; it is never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainsContainer {
    strands: BTreeMap<StrandId, Vec<Point>>,
    seams: Vec<StitchSeam>,
    closure_residual: f64,
}

impl DomainsContainer {
    pub(crate) fn new(
        strands: BTreeMap<StrandId, Vec<Point>>,
        seams: Vec<StitchSeam>,
        closure_residual: f64,
    ) -> Self {
        Self {
            strands,
            seams,
            closure_residual,
        }
    }

    pub fn get(&self, domain: usize, direction: Direction) -> Option<&[Point]> {
        self.strands
            .get(&StrandId::new(domain, direction))
            .map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StrandId, &[Point])> {
        self.strands.iter().map(|(id, points)| (id, points.as_slice()))
    }

    pub fn domain_count(&self) -> usize {
        self.seams.len()
    }

    pub fn len(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    /// The number of NEMids of each strand.
    pub fn strand_lengths(&self) -> BTreeMap<StrandId, usize> {
        self.strands
            .iter()
            .map(|(id, points)| (*id, points.len()))
            .collect()
    }

    pub fn junctable_points(&self) -> impl Iterator<Item = &Point> {
        self.strands.values().flatten().filter(|p| p.junctable)
    }

    /// How each domain was lined up with its left neighbour, in index order.
    pub fn seams(&self) -> &[StitchSeam] {
        &self.seams
    }

    pub fn closure_residual(&self) -> f64 {
        self.closure_residual
    }
}
