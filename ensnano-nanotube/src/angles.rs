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
//! Angles of the NEMids of a strand.

use super::{Direction, Domain, Profile};

/// An infinite arithmetic sequence of NEMid angles, in degrees.
///
/// Angles are measured counter-clockwise about the axis of the helix from its line of
/// tangency with the previous domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSequence {
    start: f64,
    step: f64,
}

impl AngleSequence {
    pub fn new(start: f64, step: f64) -> Self {
        Self { start, step }
    }

    /// The angles of the `direction` strand of `domain`.
    ///
    /// The strand of the left joint starts at 0, the other one is shifted by the switch angle.
    pub fn for_strand(domain: &Domain, direction: Direction, profile: &Profile) -> Self {
        let start = if direction == domain.zeroed_direction() {
            0.0
        } else {
            0.0 - profile.theta_s
        };
        Self::new(start, profile.theta_b)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// The `n`-th angle of the sequence. `n` may be negative.
    pub fn nth(&self, n: isize) -> f64 {
        self.start + n as f64 * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        let sequence = *self;
        (0..).map(move |n| sequence.nth(n))
    }
}
