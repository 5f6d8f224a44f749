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
//! Vertical stitching of the domains.
//!
//! Each domain is lined up with its left neighbour: the first z coordinate of its left joint
//! strand is read from the right joint strand of the previous domain, at the NEMid that is
//! the closest to the line separating the two domains. Domain 0 is the anchor of the ring.

use super::utils::{next_index, position_of_max, previous_index};
use super::{ByDirection, Domain, GenerationError, Profile, XCycle};

/// An infinite arithmetic sequence of z coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZSequence {
    start: f64,
    step: f64,
}

impl ZSequence {
    pub fn new(start: f64, step: f64) -> Self {
        Self { start, step }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// The `n`-th z coordinate. `n` may be negative.
    pub fn nth(&self, n: isize) -> f64 {
        self.start + n as f64 * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        let sequence = *self;
        (0..).map(move |n| sequence.nth(n))
    }

    /// The first index `n >= 0` such that the `n`-th z coordinate is not negative.
    ///
    /// Returns `None` if the sequence never reaches 0.
    pub fn first_non_negative(&self) -> Option<isize> {
        if self.start >= 0. {
            return Some(0);
        }
        if !self.start.is_finite() || !(self.step > 0.) {
            return None;
        }
        let estimate = (-self.start / self.step).ceil() as isize;
        (estimate.saturating_sub(1).max(0)..).find(|n| self.nth(*n) >= 0.)
    }
}

/// How a domain was lined up with its left neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StitchSeam {
    pub domain: usize,
    /// The z coordinate read on the previous domain, before being shifted down.
    pub raw_seed: f64,
    /// The first z coordinate of the left joint strand of the domain.
    pub start_z: f64,
    /// The index of the NEMid of the previous domain from which `raw_seed` was read.
    /// `None` for the anchor domain.
    pub neighbour_sample: Option<usize>,
}

/// The z coordinates of all the domains of a ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Stitching {
    pub z_coords: Vec<ByDirection<ZSequence>>,
    pub seams: Vec<StitchSeam>,
    /// Vertical gap, modulo one period, between the start of domain 0 and the seed that the
    /// last domain would give it.
    pub closure_residual: f64,
}

pub struct ZCoordinateStitcher<'a> {
    profile: &'a Profile,
}

impl<'a> ZCoordinateStitcher<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    /// Shift `seed` down by whole periods.
    ///
    /// The result is the first value of `seed - k * period` that is lower than or equal to 0,
    /// shifted down by one more period.
    pub fn normalize_seed(&self, seed: f64) -> f64 {
        let period = self.profile.period_height();
        let mut z = seed;
        while z > 0. {
            z -= period;
        }
        z - period
    }

    /// Compute the z coordinates of each domain, in index order.
    ///
    /// `x_cycles[i]` must hold the x coordinates of `domains[i]`.
    pub fn stitch(
        &self,
        domains: &[Domain],
        x_cycles: &[ByDirection<XCycle>],
    ) -> Result<Stitching, GenerationError> {
        if domains.is_empty() {
            return Err(GenerationError::EmptyDomainList);
        }
        let mut z_coords: Vec<ByDirection<ZSequence>> = Vec::with_capacity(domains.len());
        let mut seams = Vec::with_capacity(domains.len());

        for (index, domain) in domains.iter().enumerate() {
            let (raw_seed, neighbour_sample) = if index == 0 {
                (0., None)
            } else {
                let previous = previous_index(index, domains.len());
                let (seed, sample) = self.boundary_seed(
                    &domains[previous],
                    &x_cycles[previous],
                    &z_coords[previous],
                )?;
                (seed, Some(sample))
            };
            let start_z = self.normalize_seed(raw_seed);
            log::debug!(
                "domain {}: raw seed {:.4}, start z {:.4}",
                domain.index,
                raw_seed,
                start_z
            );

            let zeroed = domain.zeroed_direction();
            z_coords.push(ByDirection::from_fn(|direction| {
                if direction == zeroed {
                    ZSequence::new(start_z, self.profile.z_b)
                } else {
                    ZSequence::new(start_z - self.profile.z_s, self.profile.z_b)
                }
            }));
            seams.push(StitchSeam {
                domain: domain.index,
                raw_seed,
                start_z,
                neighbour_sample,
            });
        }

        let last = domains.len() - 1;
        let (closing_seed, _) =
            self.boundary_seed(&domains[last], &x_cycles[last], &z_coords[last])?;
        let first = next_index(last, domains.len());
        let anchor_start = z_coords[first][domains[first].zeroed_direction()].start();
        let closure_residual = self.period_distance(closing_seed, anchor_start);
        log::debug!("ring closure residual {:.6}", closure_residual);

        Ok(Stitching {
            z_coords,
            seams,
            closure_residual,
        })
    }

    /// The z coordinate of the NEMid of `previous`'s right joint strand that has the largest x
    /// coordinate within the first period, together with the index of that NEMid.
    fn boundary_seed(
        &self,
        previous: &Domain,
        x_cycles: &ByDirection<XCycle>,
        z_coords: &ByDirection<ZSequence>,
    ) -> Result<(f64, usize), GenerationError> {
        let boundary = previous.right_joint;
        let x_coords = x_cycles[boundary].first_period();
        if x_coords.len() < self.profile.b {
            return Err(GenerationError::NoMaximum {
                domain: previous.index,
            });
        }
        let sample = position_of_max(x_coords).ok_or(GenerationError::NoMaximum {
            domain: previous.index,
        })?;
        Ok((z_coords[boundary].nth(sample as isize), sample))
    }

    fn period_distance(&self, a: f64, b: f64) -> f64 {
        let period = self.profile.period_height();
        let r = (a - b).rem_euclid(period);
        r.min(period - r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AngleSequence, Direction, GenerationCount, NucleicAcidParameters, XCoordinateMapper,
    };

    fn x_cycles(domains: &[Domain], profile: &Profile) -> Vec<ByDirection<XCycle>> {
        domains
            .iter()
            .map(|domain| {
                let mapper = XCoordinateMapper::new(domain, profile).unwrap();
                ByDirection::from_fn(|d| {
                    mapper.cycle(&AngleSequence::for_strand(domain, d, profile), profile.b)
                })
            })
            .collect()
    }

    #[test]
    fn seed_is_shifted_one_period_below_zero() {
        let profile = NucleicAcidParameters::DEFAULT.profile().unwrap();
        let stitcher = ZCoordinateStitcher::new(&profile);
        let period = profile.period_height();
        assert!((stitcher.normalize_seed(0.) + period).abs() < 1e-12);
        assert!((stitcher.normalize_seed(-1.) - (-1. - period)).abs() < 1e-12);
        let z = stitcher.normalize_seed(3.5 * period);
        assert!(z <= -period && z > -2. * period);
        assert!(((3.5 * period - z) / period - 5.).abs() < 1e-9);
    }

    #[test]
    fn neighbours_are_stitched() {
        let profile = NucleicAcidParameters::DEFAULT.profile().unwrap();
        let count = GenerationCount::body(10);
        let domains = vec![
            Domain::new(0, 9, Direction::Up, Direction::Down, count),
            Domain::new(1, 9, Direction::Down, Direction::Up, count),
            Domain::new(2, 8, Direction::Up, Direction::Up, count),
        ];
        let cycles = x_cycles(&domains, &profile);
        let stitching = ZCoordinateStitcher::new(&profile)
            .stitch(&domains, &cycles)
            .unwrap();

        let period = profile.period_height();
        let zero = &stitching.z_coords[0];
        assert!((zero.up.start() + period).abs() < 1e-12);
        assert!((zero.down.start() - (zero.up.start() - profile.z_s)).abs() < 1e-12);

        for i in 1..domains.len() {
            let previous = &domains[i - 1];
            let sample =
                position_of_max(cycles[i - 1][previous.right_joint].first_period()).unwrap();
            let expected = stitching.z_coords[i - 1][previous.right_joint].nth(sample as isize);
            let seam = stitching.seams[i];
            assert_eq!(seam.neighbour_sample, Some(sample));
            assert!((seam.raw_seed - expected).abs() < 1e-9);
            let start = stitching.z_coords[i][domains[i].left_joint].start();
            assert_eq!(start, seam.start_z);
            let periods = (expected - start) / period;
            assert!((periods - periods.round()).abs() < 1e-9);
            assert!(periods.round() >= 1.);
        }

        let last = &domains[2];
        let sample = position_of_max(cycles[2][last.right_joint].first_period()).unwrap();
        let closing_seed = stitching.z_coords[2][last.right_joint].nth(sample as isize);
        let gap = (closing_seed - zero.up.start()).rem_euclid(period);
        let expected_residual = gap.min(period - gap);
        assert!((stitching.closure_residual - expected_residual).abs() < 1e-12);
    }

    #[test]
    fn first_non_negative_index() {
        let profile = NucleicAcidParameters::DEFAULT.profile().unwrap();
        let period = profile.period_height();
        assert_eq!(ZSequence::new(-period, profile.z_b).first_non_negative(), Some(21));
        assert_eq!(ZSequence::new(-0.1, profile.z_b).first_non_negative(), Some(1));
        assert_eq!(ZSequence::new(2., profile.z_b).first_non_negative(), Some(0));
        assert_eq!(ZSequence::new(-1., 0.).first_non_negative(), None);
        assert_eq!(ZSequence::new(-1., -0.5).first_non_negative(), None);
        assert_eq!(ZSequence::new(f64::NEG_INFINITY, 1.).first_non_negative(), None);
    }

    #[test]
    fn short_cycle_is_degenerate() {
        let profile = NucleicAcidParameters::DEFAULT.profile().unwrap();
        let count = GenerationCount::body(10);
        let domains = vec![
            Domain::new(0, 9, Direction::Up, Direction::Up, count),
            Domain::new(1, 9, Direction::Up, Direction::Up, count),
        ];
        let mut cycles = x_cycles(&domains, &profile);
        let mapper = XCoordinateMapper::new(&domains[0], &profile).unwrap();
        cycles[0].up = mapper.cycle(&AngleSequence::new(0., profile.theta_b), 3);
        let err = ZCoordinateStitcher::new(&profile)
            .stitch(&domains, &cycles)
            .unwrap_err();
        assert_eq!(err, GenerationError::NoMaximum { domain: 0 });
    }
}
