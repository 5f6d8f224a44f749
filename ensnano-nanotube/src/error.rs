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
use super::{Direction, ParametersError};
use std::fmt;

/// Error aborting a side view computation.
///
/// No partial result is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    EmptyDomainList,
    /// A helix joint was neither 0 (up) nor 1 (down).
    InvalidJoint {
        domain: usize,
        value: u8,
    },
    /// The index stored in a domain is not its position in the ring.
    DomainIndexMismatch {
        domain: usize,
        position: usize,
    },
    /// The interior or exterior angle of the domain is not positive.
    DegenerateDomain {
        domain: usize,
        theta_interior: f64,
        theta_exterior: f64,
    },
    /// The generation counts of a strand of the domain add up to more than `isize::MAX`.
    CountOverflow {
        domain: usize,
        direction: Direction,
    },
    /// No maximal x coordinate could be found on the right joint strand of the domain.
    NoMaximum {
        domain: usize,
    },
    InvalidParameters(ParametersError),
}

impl GenerationError {
    /// The index of the offending domain, if the error concerns a single domain.
    pub fn domain(&self) -> Option<usize> {
        match self {
            Self::InvalidJoint { domain, .. }
            | Self::DomainIndexMismatch { domain, .. }
            | Self::DegenerateDomain { domain, .. }
            | Self::CountOverflow { domain, .. }
            | Self::NoMaximum { domain } => Some(*domain),
            Self::EmptyDomainList | Self::InvalidParameters(_) => None,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomainList => write!(f, "there are no domains"),
            Self::InvalidJoint { domain, value } => write!(
                f,
                "domain {}: helix joint {} is neither 0 (up) nor 1 (down)",
                domain, value
            ),
            Self::DomainIndexMismatch { domain, position } => write!(
                f,
                "domain {} is stored at position {} of the ring",
                domain, position
            ),
            Self::DegenerateDomain {
                domain,
                theta_interior,
                theta_exterior,
            } => write!(
                f,
                "domain {}: degenerate angles (interior {}°, exterior {}°)",
                domain, theta_interior, theta_exterior
            ),
            Self::CountOverflow { domain, direction } => write!(
                f,
                "domain {}: too many NEMids requested on the {} strand",
                domain, direction
            ),
            Self::NoMaximum { domain } => write!(
                f,
                "domain {}: could not find the strand point closest to the next domain",
                domain
            ),
            Self::InvalidParameters(e) => write!(f, "invalid nucleic acid parameters: {}", e),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidParameters(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParametersError> for GenerationError {
    fn from(e: ParametersError) -> Self {
        Self::InvalidParameters(e)
    }
}
