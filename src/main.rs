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
//! Print the side view of a nanotube.
//!
//! Usage: `ensnano_side_view [nanotube.json]`. Without argument, the default ring of 14
//! B-DNA domains is used. Set `RUST_LOG` to see the generator's logs.

use ensnano_nanotube::{DomainsContainer, Nanotube};
use std::env;
use std::fmt;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let nanotube = if let Some(path) = env::args().nth(1) {
        match read_nanotube(Path::new(&path)) {
            Ok(nanotube) => nanotube,
            Err(e) => {
                log::error!("Could not read {}: {}", path, e);
                process::exit(1);
            }
        }
    } else {
        log::info!("No input file, using the default nanotube");
        Nanotube::default()
    };

    println!("Nucleic acid parameters:");
    print!("{}", nanotube.parameters.formated_string());
    match nanotube.compute() {
        Ok(points) => print_summary(&nanotube, &points),
        Err(e) => {
            log::error!("Could not compute the side view: {}", e);
            process::exit(1);
        }
    }
}

#[derive(Debug)]
enum ReadNanotubeError {
    IOError(std::io::Error),
    ParseError(serde_json::Error),
}

impl From<std::io::Error> for ReadNanotubeError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e)
    }
}

impl From<serde_json::Error> for ReadNanotubeError {
    fn from(e: serde_json::Error) -> Self {
        Self::ParseError(e)
    }
}

impl fmt::Display for ReadNanotubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IOError(e) => write!(f, "{}", e),
            Self::ParseError(e) => write!(f, "invalid nanotube: {}", e),
        }
    }
}

fn read_nanotube(path: &Path) -> Result<Nanotube, ReadNanotubeError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn print_summary(nanotube: &Nanotube, points: &DomainsContainer) {
    println!(
        "{} domains, closed tube: {}",
        points.domain_count(),
        nanotube.is_closed()
    );
    for (id, strand) in points.iter() {
        let junctable = strand.iter().filter(|p| p.junctable).count();
        match (strand.first(), strand.last()) {
            (Some(first), Some(last)) => println!(
                "{}: {} NEMids, z from {:.3} to {:.3} nm, {} junctable",
                id,
                strand.len(),
                first.z,
                last.z,
                junctable
            ),
            _ => println!("{}: no NEMids", id),
        }
    }
    println!(
        "Ring closure residual: {:.6} nm",
        points.closure_residual()
    );
}
