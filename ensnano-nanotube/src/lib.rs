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
//! Side view geometry of DNA nanotubes.
//!
//! A nanotube is a ring of domains, each domain being a double helix. This crate computes the
//! NEMids of every strand of every domain, projected on a plane where domain `i` occupies
//! the band `i <= x <= i + 1` and `z` is the height along the tube.
//!
//! The computation is a pure function of a `NucleicAcidParameters` and a `Domains` value
//! owned by the caller. Every call produces a new `DomainsContainer`.
#[macro_use]
extern crate serde_derive;
extern crate serde;

pub use ultraviolet::DVec2;

mod angles;
pub use angles::AngleSequence;
mod domains;
pub use domains::*;
mod error;
pub use error::GenerationError;
mod parameters;
pub use parameters::*;
mod points;
pub use points::*;
mod side_view;
pub use side_view::{PointAssembler, SideView};
pub mod utils;
mod x_coords;
pub use x_coords::{XCoordinateMapper, XCycle};
mod z_coords;
pub use z_coords::{StitchSeam, Stitching, ZCoordinateStitcher, ZSequence};

#[cfg(test)]
mod tests;

/// A nanotube: the geometry of its nucleic acid and its domains.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nanotube {
    #[serde(default, alias = "nucleic_acid_profile")]
    pub parameters: NucleicAcidParameters,
    #[serde(default)]
    pub domains: Domains,
}

impl Nanotube {
    pub fn new(parameters: NucleicAcidParameters, domains: Domains) -> Self {
        Self {
            parameters,
            domains,
        }
    }

    pub fn side_view(&self) -> Result<SideView, GenerationError> {
        let profile = self.parameters.profile()?;
        SideView::new(profile, self.domains.domains())
    }

    /// Compute the NEMids of all the strands of the nanotube.
    ///
    /// Errors are returned to the caller, who is responsible for reporting them.
    pub fn compute(&self) -> Result<DomainsContainer, GenerationError> {
        if !self.is_closed() {
            log::warn!("The domains do not form a closed tube");
        }
        self.side_view()?.compute()
    }

    /// The center of each double helix seen from the top.
    pub fn top_view(&self) -> Vec<DVec2> {
        self.domains.top_view(&self.parameters)
    }

    pub fn is_closed(&self) -> bool {
        self.domains.is_closed(&self.parameters)
    }
}
