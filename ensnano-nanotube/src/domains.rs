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
//! Domains of a nanotube and the ring that contains them.

use super::utils::{is_false, previous_index};
use super::{GenerationError, NucleicAcidParameters, Profile};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::convert::TryFrom;
use std::ops::{Index, IndexMut};
use ultraviolet::DVec2;

/// Maximal distance between the first and last top view points of a closed tube.
pub const CLOSED_THRESHOLD: f64 = 0.01;

/// The body count of the domains of the default ring.
pub const DEFAULT_BODY_COUNT: usize = 50;

/// Orientation of a strand, or of a helix joint.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up = 0,
    Down = 1,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Read a helix joint encoded as 0 (up) or 1 (down).
    pub fn from_joint(domain: usize, value: u8) -> Result<Self, GenerationError> {
        Self::try_from(value).map_err(|_| GenerationError::InvalidJoint { domain, value })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One value for each strand direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ByDirection<T> {
    pub up: T,
    pub down: T,
}

impl<T> ByDirection<T> {
    pub fn from_fn<F: FnMut(Direction) -> T>(mut f: F) -> Self {
        Self {
            up: f(Direction::Up),
            down: f(Direction::Down),
        }
    }

    pub fn map<U, F: FnMut(Direction, &T) -> U>(&self, mut f: F) -> ByDirection<U> {
        ByDirection {
            up: f(Direction::Up, &self.up),
            down: f(Direction::Down, &self.down),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        std::iter::once((Direction::Up, &self.up))
            .chain(std::iter::once((Direction::Down, &self.down)))
    }
}

impl<T> Index<Direction> for ByDirection<T> {
    type Output = T;
    fn index(&self, direction: Direction) -> &T {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }
}

impl<T> IndexMut<Direction> for ByDirection<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}

/// The number of NEMids to generate on one strand of a domain.
///
/// `body_count` NEMids are generated from the bottom of the side view, then `bottom_count`
/// NEMids are added below them and `top_count` NEMids above them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationCount {
    #[serde(default)]
    pub bottom_count: usize,
    pub body_count: usize,
    #[serde(default)]
    pub top_count: usize,
}

impl GenerationCount {
    pub fn new(bottom_count: usize, body_count: usize, top_count: usize) -> Self {
        Self {
            bottom_count,
            body_count,
            top_count,
        }
    }

    pub fn body(body_count: usize) -> Self {
        Self::new(0, body_count, 0)
    }

    /// The number of NEMids of the strand, or `None` if it does not fit in an `isize`.
    pub fn total(&self) -> Option<usize> {
        self.bottom_count
            .checked_add(self.body_count)?
            .checked_add(self.top_count)
            .filter(|total| *total <= isize::MAX as usize)
    }
}

/// A domain, one double helix of the nanotube.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Position of the domain in its ring. Assigned by `Domains::domains`.
    #[serde(default)]
    pub index: usize,
    /// The interior angle of the domain, as a multiple of the characteristic angle.
    #[serde(alias = "m")]
    pub theta_m_multiple: i32,
    /// Orientation of the strand lined up with the right joint of the previous domain.
    pub left_joint: Direction,
    /// Orientation of the strand lined up with the left joint of the next domain.
    pub right_joint: Direction,
    /// Generation count of the strand whose direction is `left_joint`.
    pub left_helix_count: GenerationCount,
    /// Generation count of the other strand.
    pub other_helix_count: GenerationCount,
}

impl Domain {
    pub fn new(
        index: usize,
        theta_m_multiple: i32,
        left_joint: Direction,
        right_joint: Direction,
        count: GenerationCount,
    ) -> Self {
        Self {
            index,
            theta_m_multiple,
            left_joint,
            right_joint,
            left_helix_count: count,
            other_helix_count: count,
        }
    }

    /// Build a domain whose joints are encoded as 0 (up) or 1 (down).
    pub fn from_raw_joints(
        index: usize,
        theta_m_multiple: i32,
        left_joint: u8,
        right_joint: u8,
        count: GenerationCount,
    ) -> Result<Self, GenerationError> {
        Ok(Self::new(
            index,
            theta_m_multiple,
            Direction::from_joint(index, left_joint)?,
            Direction::from_joint(index, right_joint)?,
            count,
        ))
    }

    pub fn with_counts(
        mut self,
        left_helix_count: GenerationCount,
        other_helix_count: GenerationCount,
    ) -> Self {
        self.left_helix_count = left_helix_count;
        self.other_helix_count = other_helix_count;
        self
    }

    /// The strand that starts at angle 0 on the left edge of the domain.
    pub fn zeroed_direction(&self) -> Direction {
        self.left_joint
    }

    pub fn count(&self, direction: Direction) -> GenerationCount {
        if direction == self.left_joint {
            self.left_helix_count
        } else {
            self.other_helix_count
        }
    }

    pub fn theta_interior(&self, profile: &Profile) -> f64 {
        self.theta_m_multiple as f64 * profile.theta_c
    }

    pub fn theta_exterior(&self, profile: &Profile) -> f64 {
        360. - self.theta_interior(profile)
    }

    /// -1 for an up to down switch, 1 for a down to up switch and 0 otherwise.
    pub fn theta_s_multiple(&self) -> i32 {
        match (self.left_joint, self.right_joint) {
            (Direction::Up, Direction::Down) => -1,
            (Direction::Up, Direction::Up) | (Direction::Down, Direction::Down) => 0,
            (Direction::Down, Direction::Up) => 1,
        }
    }

    pub fn theta_s(&self, theta_s: f64) -> f64 {
        self.theta_s_multiple() as f64 * theta_s
    }

    /// Fails if the domain splits the helix into a non positive interior or exterior angle.
    pub fn check_counts(&self) -> Result<(), GenerationError> {
        for direction in Direction::ALL.iter() {
            if self.count(*direction).total().is_none() {
                return Err(GenerationError::CountOverflow {
                    domain: self.index,
                    direction: *direction,
                });
            }
        }
        Ok(())
    }

    pub fn check_angles(&self, profile: &Profile) -> Result<(), GenerationError> {
        let theta_interior = self.theta_interior(profile);
        let theta_exterior = self.theta_exterior(profile);
        if theta_interior > 0. && theta_exterior > 0. {
            Ok(())
        } else {
            Err(GenerationError::DegenerateDomain {
                domain: self.index,
                theta_interior,
                theta_exterior,
            })
        }
    }
}

/// The domains of a nanotube.
///
/// The ring is made of `symmetry` copies of a template subunit. The domain after the last one
/// is the first one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domains {
    pub subunit: Vec<Domain>,
    pub symmetry: usize,
    /// Force the joints of the domains to alternate between up and down.
    #[serde(default, skip_serializing_if = "is_false")]
    pub antiparallel: bool,
}

impl Domains {
    pub fn new(subunit: Vec<Domain>, symmetry: usize, antiparallel: bool) -> Self {
        Self {
            subunit,
            symmetry,
            antiparallel,
        }
    }

    /// A closed ring of 14 domains with alternating joints.
    pub fn default_ring() -> Self {
        let subunit = (0..14)
            .map(|index| {
                let direction = if index % 2 == 0 {
                    Direction::Up
                } else {
                    Direction::Down
                };
                Domain::new(
                    index,
                    9,
                    direction,
                    direction,
                    GenerationCount::body(DEFAULT_BODY_COUNT),
                )
            })
            .collect();
        Self::new(subunit, 1, false)
    }

    /// The number of domains in all the subunits.
    pub fn count(&self) -> usize {
        self.subunit.len() * self.symmetry
    }

    /// All the domains of the ring, indexed by their position.
    pub fn domains(&self) -> Vec<Domain> {
        let mut ret: Vec<Domain> = (0..self.symmetry)
            .flat_map(|_| self.subunit.iter().cloned())
            .collect();
        let mut direction = Direction::Up;
        for (index, domain) in ret.iter_mut().enumerate() {
            domain.index = index;
            if self.antiparallel {
                domain.left_joint = direction;
                domain.right_joint = direction;
                direction = direction.inverse();
            }
        }
        ret
    }

    /// The center of each double helix seen from the top, starting at the origin.
    ///
    /// The returned vector has one more point than there are domains. For a closed tube the
    /// last point is the first one.
    pub fn top_view(&self, parameters: &NucleicAcidParameters) -> Vec<DVec2> {
        let domains = self.domains();
        let mut ret = Vec::with_capacity(domains.len() + 1);
        let mut position = DVec2::zero();
        let mut heading = 0f64;
        ret.push(position);
        for index in 0..domains.len() {
            let previous = &domains[previous_index(index, domains.len())];
            let theta_m = previous.theta_m_multiple as f64 * parameters.theta_c;
            let interior_angle = theta_m - previous.theta_s(parameters.theta_s);
            heading += 180. - interior_angle;
            let heading_rad = heading.to_radians();
            position += DVec2::new(heading_rad.cos(), heading_rad.sin()) * parameters.d;
            ret.push(position);
        }
        ret
    }

    pub fn is_closed(&self, parameters: &NucleicAcidParameters) -> bool {
        let top_view = self.top_view(parameters);
        match (top_view.first(), top_view.last()) {
            (Some(first), Some(last)) => (*last - *first).mag() < CLOSED_THRESHOLD,
            _ => false,
        }
    }
}

impl Default for Domains {
    fn default() -> Self {
        Self::default_ring()
    }
}
