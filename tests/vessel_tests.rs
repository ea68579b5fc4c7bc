use sea_battle::{Coordinate, Orientation, Vessel};

#[test]
fn test_horizontal_cells() {
    let vessel = Vessel::new(Coordinate::new(1, 4), 3, Orientation::Horizontal);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(1, 4),
            Coordinate::new(2, 4),
            Coordinate::new(3, 4)
        ]
    );
}

#[test]
fn test_vertical_cells() {
    let vessel = Vessel::new(Coordinate::new(0, 0), 2, Orientation::Vertical);
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]);
}

#[test]
fn test_is_hit_by() {
    let vessel = Vessel::new(Coordinate::new(2, 2), 2, Orientation::Vertical);
    assert!(vessel.is_hit_by(Coordinate::new(2, 2)));
    assert!(vessel.is_hit_by(Coordinate::new(2, 3)));
    assert!(!vessel.is_hit_by(Coordinate::new(3, 2)));
    assert!(!vessel.is_hit_by(Coordinate::new(2, 4)));
    // inspecting never damages the vessel
    assert_eq!(vessel.remaining_hits(), 2);
}

#[test]
fn test_new_vessel_is_undamaged() {
    let vessel = Vessel::new(Coordinate::new(5, 5), 1, Orientation::Horizontal);
    assert_eq!(vessel.len(), 1);
    assert_eq!(vessel.remaining_hits(), 1);
    assert!(!vessel.is_sunk());
    assert_eq!(vessel.origin(), Coordinate::new(5, 5));
    assert_eq!(vessel.orientation(), Orientation::Horizontal);
}

#[test]
fn test_neighbourhood_and_adjacency() {
    let c = Coordinate::new(0, 0);
    let around: Vec<_> = c.neighbourhood().collect();
    assert_eq!(around.len(), 9);
    assert!(around.contains(&c));
    assert!(around.contains(&Coordinate::new(-1, -1)));
    assert!(c.is_adjacent(Coordinate::new(1, 1)));
    assert!(!c.is_adjacent(c));
    assert!(!c.is_adjacent(Coordinate::new(2, 0)));
}
