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
//! Generation of the NEMids of the side view of a nanotube.

use super::{
    AngleSequence, ByDirection, Direction, Domain, DomainsContainer, GenerationCount,
    GenerationError, Point, Profile, StrandId, XCoordinateMapper, XCycle, ZCoordinateStitcher,
    ZSequence,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::time::Instant;

/// The angles and x coordinates of a domain. They do not depend on the other domains.
#[derive(Clone, Debug)]
struct DomainSequences {
    angles: ByDirection<AngleSequence>,
    x_cycles: ByDirection<XCycle>,
}

impl DomainSequences {
    fn new(domain: &Domain, profile: &Profile) -> Result<Self, GenerationError> {
        let mapper = XCoordinateMapper::new(domain, profile)?;
        let angles =
            ByDirection::from_fn(|direction| AngleSequence::for_strand(domain, direction, profile));
        let x_cycles = angles.map(|_, angles| mapper.cycle(angles, profile.b));
        Ok(Self { angles, x_cycles })
    }
}

/// Generator of the side view of a ring of domains.
#[derive(Clone, Debug)]
pub struct SideView {
    profile: Profile,
    domains: Vec<Domain>,
}

impl SideView {
    /// Check the inputs of the generator.
    ///
    /// `domains[i].index` must be `i`.
    pub fn new(profile: Profile, domains: Vec<Domain>) -> Result<Self, GenerationError> {
        profile.validate()?;
        if domains.is_empty() {
            return Err(GenerationError::EmptyDomainList);
        }
        for (position, domain) in domains.iter().enumerate() {
            if domain.index != position {
                return Err(GenerationError::DomainIndexMismatch {
                    domain: domain.index,
                    position,
                });
            }
            domain.check_angles(&profile)?;
            domain.check_counts()?;
        }
        Ok(Self { profile, domains })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Compute the NEMids of all the strands.
    ///
    /// Angles and x coordinates are computed for all domains in parallel. Each domain is then
    /// stitched to the previous one, in index order.
    pub fn compute(&self) -> Result<DomainsContainer, GenerationError> {
        let start_time = Instant::now();

        let sequences = self
            .domains
            .par_iter()
            .map(|domain| DomainSequences::new(domain, &self.profile))
            .collect::<Result<Vec<_>, _>>()?;

        let x_cycles: Vec<ByDirection<XCycle>> =
            sequences.iter().map(|s| s.x_cycles.clone()).collect();
        let stitching = ZCoordinateStitcher::new(&self.profile).stitch(&self.domains, &x_cycles)?;

        let strands: BTreeMap<StrandId, Vec<Point>> = self
            .domains
            .par_iter()
            .zip(sequences.par_iter())
            .zip(stitching.z_coords.par_iter())
            .flat_map_iter(|((domain, sequences), z_coords)| {
                IntoIterator::into_iter(Direction::ALL).map(move |direction| {
                    let assembler = PointAssembler {
                        domain: domain.index,
                        direction,
                        angles: &sequences.angles[direction],
                        x_coords: &sequences.x_cycles[direction],
                        z_coords: &z_coords[direction],
                    };
                    (
                        StrandId::new(domain.index, direction),
                        assembler.assemble(domain.count(direction)),
                    )
                })
            })
            .collect();

        log::info!(
            "Computed the NEMids of {} domains in {:.4} seconds.",
            self.domains.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(DomainsContainer::new(
            strands,
            stitching.seams,
            stitching.closure_residual,
        ))
    }
}

/// Merges the angles, x and z coordinates of one strand into NEMids.
pub struct PointAssembler<'a> {
    pub(crate) domain: usize,
    pub(crate) direction: Direction,
    pub(crate) angles: &'a AngleSequence,
    pub(crate) x_coords: &'a XCycle,
    pub(crate) z_coords: &'a ZSequence,
}

impl<'a> PointAssembler<'a> {
    /// The NEMid at generation index `n`.
    fn nemid(&self, n: isize) -> Option<Point> {
        let x = self.x_coords.nth(n)?;
        Some(Point::new(
            x,
            self.z_coords.nth(n),
            self.angles.nth(n),
            self.domain,
            self.direction,
        ))
    }

    /// The strand's NEMids, in generation order.
    ///
    /// The body is made of the first `count.body_count` NEMids whose z coordinate is not
    /// negative. `count.bottom_count` NEMids are added before it and `count.top_count` after
    /// it, whatever their z coordinate.
    pub fn assemble(&self, count: GenerationCount) -> Vec<Point> {
        if self.x_coords.period() == 0 {
            return Vec::new();
        }
        let bottom_count = isize::try_from(count.bottom_count).unwrap_or(isize::MAX);
        let top_count = isize::try_from(count.top_count).unwrap_or(isize::MAX);
        // The z coordinates increase with the generation index, so the body is the run of
        // NEMids that starts at the first non negative z.
        let (first, body_count) = match self.z_coords.first_non_negative() {
            Some(first) => (
                first,
                isize::try_from(count.body_count).unwrap_or(isize::MAX),
            ),
            None => (0, 0),
        };
        let end = first.saturating_add(body_count);

        (first.saturating_sub(bottom_count)..end.saturating_add(top_count))
            .filter_map(|n| self.nemid(n))
            .collect()
    }
}
