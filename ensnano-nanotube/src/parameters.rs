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
//! Nucleic acid geometric parameters.

use std::fmt;

/// Geometric parameters of a nucleic acid, as entered by the user.
///
/// Lengths are in nanometers and angles in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NucleicAcidParameters {
    /// Diameter of a domain.
    #[serde(rename = "D")]
    pub d: f64,
    /// Height of one helical turn.
    #[serde(rename = "H")]
    pub h: f64,
    /// There are `t` turns every `b` bases.
    #[serde(rename = "T")]
    pub t: u32,
    /// There are `b` bases every `t` turns.
    #[serde(rename = "B")]
    pub b: u32,
    /// Characteristic height.
    #[serde(rename = "Z_c")]
    pub z_c: f64,
    /// Strand switch height, the vertical offset between the two strands of a helix.
    #[serde(rename = "Z_s")]
    pub z_s: f64,
    /// Base angle, the rotation between two consecutive NEMids of a strand.
    pub theta_b: f64,
    /// Characteristic angle. Interior angles of domains are multiples of it.
    pub theta_c: f64,
    /// Switch angle, the angular offset between the two strands of a helix.
    pub theta_s: f64,
}

impl NucleicAcidParameters {
    /// The B-DNA profile.
    pub const DEFAULT: NucleicAcidParameters = NucleicAcidParameters {
        d: 2.2,
        h: 3.549,
        t: 2,
        b: 21,
        z_c: 0.17,
        z_s: 1.26,
        theta_b: 34.29,
        theta_c: 17.1428,
        theta_s: 2.3,
    };

    /// The base rise, `T * H / B` rounded to four decimals.
    pub fn z_b(&self) -> f64 {
        let z_b = (self.t as f64 * self.h) / self.b as f64;
        (z_b * 1e4).round() / 1e4
    }

    pub fn validate(&self) -> Result<(), ParametersError> {
        for (name, value) in [("D", self.d), ("H", self.h), ("Z_c", self.z_c)] {
            if !value.is_finite() {
                return Err(ParametersError::NotFinite(name));
            }
        }
        self.unchecked_profile().validate()
    }

    /// The constants consumed by the side view generator.
    pub fn profile(&self) -> Result<Profile, ParametersError> {
        self.validate()?;
        Ok(self.unchecked_profile())
    }

    fn unchecked_profile(&self) -> Profile {
        Profile {
            z_b: self.z_b(),
            z_s: self.z_s,
            theta_b: self.theta_b,
            theta_c: self.theta_c,
            theta_s: self.theta_s,
            b: self.b as usize,
        }
    }

    pub fn formated_string(&self) -> String {
        use std::fmt::Write;
        let mut ret = String::new();
        writeln!(&mut ret, "  Domain diameter: {:.2} nm", self.d).unwrap_or_default();
        writeln!(&mut ret, "  Turn height: {:.3} nm", self.h).unwrap_or_default();
        writeln!(&mut ret, "  {} turns every {} bases", self.t, self.b).unwrap_or_default();
        writeln!(&mut ret, "  Base rise: {:.4} nm", self.z_b()).unwrap_or_default();
        writeln!(&mut ret, "  Switch height: {:.3} nm", self.z_s).unwrap_or_default();
        writeln!(&mut ret, "  Base angle: {:.2}°", self.theta_b).unwrap_or_default();
        writeln!(&mut ret, "  Characteristic angle: {:.4}°", self.theta_c).unwrap_or_default();
        writeln!(&mut ret, "  Switch angle: {:.2}°", self.theta_s).unwrap_or_default();
        ret
    }
}

impl std::default::Default for NucleicAcidParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The immutable constants of the side view generator.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Base rise.
    pub z_b: f64,
    /// Strand switch height.
    pub z_s: f64,
    /// Base angle, in degrees.
    pub theta_b: f64,
    /// Characteristic angle, in degrees.
    pub theta_c: f64,
    /// Switch angle, in degrees.
    pub theta_s: f64,
    /// Number of NEMids after which the geometry of a helix repeats itself.
    pub b: usize,
}

impl Profile {
    /// The z-length of one period of the helix.
    pub fn period_height(&self) -> f64 {
        self.z_b * self.b as f64
    }

    pub fn validate(&self) -> Result<(), ParametersError> {
        if self.b == 0 {
            return Err(ParametersError::NoBasesPerPeriod);
        }
        for (name, value) in [
            ("Z_b", self.z_b),
            ("Z_s", self.z_s),
            ("theta_b", self.theta_b),
            ("theta_c", self.theta_c),
            ("theta_s", self.theta_s),
        ] {
            if !value.is_finite() {
                return Err(ParametersError::NotFinite(name));
            }
        }
        if self.z_b <= 0. {
            return Err(ParametersError::NonPositive("Z_b"));
        }
        if self.theta_c <= 0. {
            return Err(ParametersError::NonPositive("theta_c"));
        }
        if self.z_s < 0. {
            return Err(ParametersError::Negative("Z_s"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParametersError {
    NoBasesPerPeriod,
    NotFinite(&'static str),
    NonPositive(&'static str),
    Negative(&'static str),
}

impl fmt::Display for ParametersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBasesPerPeriod => write!(f, "B must be a positive number of bases"),
            Self::NotFinite(name) => write!(f, "{} is not a finite number", name),
            Self::NonPositive(name) => write!(f, "{} must be positive", name),
            Self::Negative(name) => write!(f, "{} must not be negative", name),
        }
    }
}

impl std::error::Error for ParametersError {}
