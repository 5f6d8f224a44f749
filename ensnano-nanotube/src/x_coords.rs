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
//! Mapping from NEMid angles to x coordinates of the side view.

use super::{AngleSequence, Domain, GenerationError, Profile};

const FULL_TURN: f64 = 360.;

/// Maps an angle to an x coordinate in `[domain.index, domain.index + 1]`.
///
/// The exterior part of the helix, `[0, theta_exterior)`, is traversed from left to right and
/// the interior part from right to left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XCoordinateMapper {
    offset: f64,
    theta_interior: f64,
    theta_exterior: f64,
}

impl XCoordinateMapper {
    pub fn new(domain: &Domain, profile: &Profile) -> Result<Self, GenerationError> {
        domain.check_angles(profile)?;
        Ok(Self {
            offset: domain.index as f64,
            theta_interior: domain.theta_interior(profile),
            theta_exterior: domain.theta_exterior(profile),
        })
    }

    pub fn x_coord(&self, angle: f64) -> f64 {
        let angle = angle.rem_euclid(FULL_TURN);
        let x = if angle < self.theta_exterior {
            angle / self.theta_exterior
        } else {
            (FULL_TURN - angle) / self.theta_interior
        };
        x + self.offset
    }

    /// The x coordinates of the first `period` angles of `angles`.
    pub fn cycle(&self, angles: &AngleSequence, period: usize) -> XCycle {
        XCycle {
            values: angles.iter().take(period).map(|a| self.x_coord(a)).collect(),
        }
    }
}

/// The x coordinates of a strand.
///
/// The geometry of a helix repeats itself every `B` NEMids, so only one period is stored and
/// the sequence is read cyclically.
#[derive(Clone, Debug, PartialEq)]
pub struct XCycle {
    values: Vec<f64>,
}

impl XCycle {
    pub fn period(&self) -> usize {
        self.values.len()
    }

    pub fn first_period(&self) -> &[f64] {
        &self.values
    }

    /// The `n`-th x coordinate. `n` may be negative.
    ///
    /// Return `None` only if the cycle is empty.
    pub fn nth(&self, n: isize) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            let i = n.rem_euclid(self.values.len() as isize) as usize;
            Some(self.values[i])
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().cycle()
    }
}
