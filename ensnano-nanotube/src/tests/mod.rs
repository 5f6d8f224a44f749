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

use super::*;
use crate::utils::{position_of_max, previous_index};

fn default_points() -> (Nanotube, DomainsContainer) {
    let nanotube = Nanotube::default();
    let points = nanotube.compute().expect("default nanotube");
    (nanotube, points)
}

#[test]
fn default_ring_has_all_strands() {
    let (nanotube, points) = default_points();
    assert_eq!(nanotube.domains.count(), 14);
    assert_eq!(points.len(), 28);
    assert_eq!(points.domain_count(), 14);
    for (id, strand) in points.iter() {
        assert_eq!(strand.len(), DEFAULT_BODY_COUNT, "{}", id);
    }
}

#[test]
fn x_coords_stay_in_their_domain() {
    let (_, points) = default_points();
    for (id, strand) in points.iter() {
        let left = id.domain as f64;
        for p in strand {
            assert!(p.x >= left && p.x <= left + 1., "{} {:?}", id, p);
            assert_eq!(p.domain, id.domain);
            assert_eq!(p.direction, id.direction);
        }
    }
}

#[test]
fn x_coords_are_periodic() {
    let (nanotube, points) = default_points();
    let b = nanotube.parameters.b as usize;
    for (_, strand) in points.iter() {
        for pair in strand.iter().zip(strand.iter().skip(b)) {
            assert_eq!(pair.0.x, pair.1.x);
        }
    }
}

#[test]
fn junctable_points_lie_on_left_edge() {
    let (_, points) = default_points();
    for (_, strand) in points.iter() {
        for p in strand {
            let on_left_edge =
                (p.x - p.x.round()).abs() < JUNCTABLE_EPSILON && p.x.round() as usize == p.domain;
            assert_eq!(p.junctable, on_left_edge, "{:?}", p);
        }
    }
    assert!(points.junctable_points().count() > 0);
}

#[test]
fn anchor_domain_starts_one_period_below_zero() {
    let (nanotube, points) = default_points();
    let period = nanotube.parameters.profile().unwrap().period_height();
    let seam = points.seams()[0];
    assert_eq!(seam.domain, 0);
    assert_eq!(seam.raw_seed, 0.);
    assert_eq!(seam.neighbour_sample, None);
    assert!((seam.start_z + period).abs() < 1e-12);
}

#[test]
fn ring_is_stitched_all_around() {
    let nanotube = Nanotube::default();
    let side_view = nanotube.side_view().unwrap();
    let profile = *side_view.profile();
    let domains = side_view.domains();
    let points = side_view.compute().unwrap();
    let period = profile.period_height();

    // Domain 0 is lined up with the last domain of the ring.
    assert_eq!(previous_index(0, domains.len()), 13);

    for i in 0..domains.len() {
        let previous = &domains[previous_index(i, domains.len())];
        let mapper = XCoordinateMapper::new(previous, &profile).unwrap();
        let angles = AngleSequence::for_strand(previous, previous.right_joint, &profile);
        let cycle = mapper.cycle(&angles, profile.b);
        let sample = position_of_max(cycle.first_period()).unwrap();

        let previous_start = points.seams()[previous.index].start_z;
        let previous_strand_start = if previous.right_joint == previous.left_joint {
            previous_start
        } else {
            previous_start - profile.z_s
        };
        let boundary_z = previous_strand_start + sample as f64 * profile.z_b;

        let seam = points.seams()[i];
        if i > 0 {
            assert_eq!(seam.neighbour_sample, Some(sample));
            assert!((seam.raw_seed - boundary_z).abs() < 1e-9);
        }
        let periods = (boundary_z - seam.start_z) / period;
        assert!((periods - periods.round()).abs() < 1e-9, "domain {}", i);
    }
    assert!(points.closure_residual() < 1e-9);
}

#[test]
fn open_ring_has_closure_residual() {
    let count = GenerationCount::body(10);
    let subunit = vec![
        Domain::new(0, 9, Direction::Up, Direction::Down, count),
        Domain::new(1, 8, Direction::Down, Direction::Up, count),
        Domain::new(2, 7, Direction::Up, Direction::Up, count),
    ];
    let nanotube = Nanotube::new(NucleicAcidParameters::DEFAULT, Domains::new(subunit, 1, false));
    let points = nanotube.compute().unwrap();
    assert!(points.closure_residual() > 0.1);
}

#[test]
fn computation_is_deterministic() {
    let (nanotube, points) = default_points();
    let again = nanotube.compute().unwrap();
    assert_eq!(points, again);
}

#[test]
fn body_counts_round_trip() {
    let count = GenerationCount::new(2, 17, 3);
    let subunit = vec![
        Domain::new(0, 9, Direction::Up, Direction::Down, count),
        Domain::new(1, 8, Direction::Down, Direction::Down, count)
            .with_counts(GenerationCount::body(12), GenerationCount::new(0, 20, 5)),
    ];
    let nanotube = Nanotube::new(
        NucleicAcidParameters::DEFAULT,
        Domains::new(subunit.clone(), 1, false),
    );
    let lengths = nanotube.compute().unwrap().strand_lengths();

    let fed_back: Vec<Domain> = subunit
        .into_iter()
        .map(|domain| {
            let left = lengths[&StrandId::new(domain.index, domain.left_joint)];
            let other = lengths[&StrandId::new(domain.index, domain.left_joint.inverse())];
            domain.with_counts(GenerationCount::body(left), GenerationCount::body(other))
        })
        .collect();
    let again = Nanotube::new(NucleicAcidParameters::DEFAULT, Domains::new(fed_back, 1, false));
    assert_eq!(again.compute().unwrap().strand_lengths(), lengths);
    assert_eq!(lengths[&StrandId::new(1, Direction::Up)], 25);
}

#[test]
fn symmetric_subunits_match_full_ring() {
    let count = GenerationCount::body(DEFAULT_BODY_COUNT);
    let subunit = vec![
        Domain::new(0, 9, Direction::Up, Direction::Up, count),
        Domain::new(1, 9, Direction::Down, Direction::Down, count),
    ];
    let symmetric = Nanotube::new(NucleicAcidParameters::DEFAULT, Domains::new(subunit, 7, false));
    let (_, points) = default_points();
    assert_eq!(symmetric.compute().unwrap(), points);
}

#[test]
fn single_domain_scenario() {
    let parameters = NucleicAcidParameters::DEFAULT;
    let domain = Domain::new(0, 9, Direction::Up, Direction::Up, GenerationCount::body(21));
    let nanotube = Nanotube::new(parameters, Domains::new(vec![domain.clone()], 1, false));
    let side_view = nanotube.side_view().unwrap();
    let profile = *side_view.profile();

    let up = AngleSequence::for_strand(&domain, Direction::Up, &profile);
    let down = AngleSequence::for_strand(&domain, Direction::Down, &profile);
    assert_eq!(up.nth(0), 0.);
    assert!((down.nth(0) + 2.3).abs() < 1e-12);
    let mapper = XCoordinateMapper::new(&domain, &profile).unwrap();
    assert_eq!(mapper.x_coord(up.nth(0)), 0.);

    let points = side_view.compute().unwrap();
    assert_eq!(points.get(0, Direction::Up).unwrap().len(), 21);
    assert_eq!(points.get(0, Direction::Down).unwrap().len(), 21);
}

#[test]
fn invalid_domain_aborts_computation() {
    let mut domains = Domains::default_ring();
    domains.subunit[5].theta_m_multiple = -1;
    let err = Nanotube::new(NucleicAcidParameters::DEFAULT, domains)
        .compute()
        .unwrap_err();
    assert_eq!(err.domain(), Some(5));
    assert!(matches!(err, GenerationError::DegenerateDomain { .. }));
}

#[test]
fn empty_ring_is_rejected() {
    let nanotube = Nanotube::new(NucleicAcidParameters::DEFAULT, Domains::new(vec![], 1, false));
    assert_eq!(nanotube.compute().unwrap_err(), GenerationError::EmptyDomainList);
}

#[test]
fn nanotube_from_json() {
    let input = r##"{
  "parameters": {"D": 2.2, "H": 3.549, "T": 2, "B": 21, "Z_c": 0.17, "Z_s": 1.26,
                 "theta_b": 34.29, "theta_c": 17.1428, "theta_s": 2.3},
  "domains": {
    "symmetry": 2,
    "subunit": [
      {"m": 9, "left_joint": "UP", "right_joint": "DOWN",
       "left_helix_count": {"body_count": 10},
       "other_helix_count": {"bottom_count": 1, "body_count": 10, "top_count": 2}},
      {"m": 9, "left_joint": "DOWN", "right_joint": "UP",
       "left_helix_count": {"body_count": 10},
       "other_helix_count": {"body_count": 10}}
    ]
  }
}"##;
    let nanotube: Nanotube = serde_json::from_str(input).expect("Failed to parse nanotube");
    assert_eq!(nanotube.parameters, NucleicAcidParameters::DEFAULT);
    assert!(!nanotube.domains.antiparallel);
    let domains = nanotube.domains.domains();
    assert_eq!(domains.len(), 4);
    assert_eq!(domains[2].index, 2);
    assert_eq!(domains[2].right_joint, Direction::Down);

    let points = nanotube.compute().unwrap();
    assert_eq!(points.get(0, Direction::Down).unwrap().len(), 13);
    assert_eq!(points.get(3, Direction::Down).unwrap().len(), 10);
}

#[test]
fn defaults_fill_missing_json_fields() {
    let nanotube: Nanotube = serde_json::from_str("{}").unwrap();
    assert_eq!(nanotube, Nanotube::default());
}

#[test]
fn huge_json_count_is_an_error() {
    let input = r#"{"domains": {"symmetry": 1, "subunit": [
      {"m": 9, "left_joint": "UP", "right_joint": "UP",
       "left_helix_count": {"bottom_count": 18446744073709551615, "body_count": 10},
       "other_helix_count": {"body_count": 10}}]}}"#;
    let nanotube: Nanotube = serde_json::from_str(input).unwrap();
    let err = nanotube.compute().unwrap_err();
    assert_eq!(err.domain(), Some(0));
    assert!(matches!(err, GenerationError::CountOverflow { .. }));
}
