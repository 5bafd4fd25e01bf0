//! Tests for the grid shortest-path search.

use super::*;

fn grid(text: &str) -> Grid {
    text.parse().unwrap()
}

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_open_3x3_corner_to_corner() {
    let g = grid("...\n...\n...");
    assert_eq!(shortest_path(&g, c(0, 0), c(2, 2)), Ok(PathCost::Reachable(4)));
}

#[test]
fn test_single_gap_in_middle_row() {
    let g = grid("...\n#.#\n...");
    assert_eq!(shortest_path(&g, c(0, 0), c(2, 2)), Ok(PathCost::Reachable(4)));

    let costs = cost_map(&g, c(0, 0)).unwrap();
    assert_eq!(costs.get(c(1, 1)), Some(2));
    assert!(!costs.contains(c(1, 0)));
}

#[test]
fn test_one_by_one_start_is_goal() {
    let g = grid("S");
    assert_eq!(shortest_path(&g, c(0, 0), c(0, 0)), Ok(PathCost::Reachable(0)));
}

#[test]
fn test_blocked_row_disconnects() {
    let g = grid("...\n###\n...");
    let result = shortest_path(&g, c(0, 0), c(2, 2)).unwrap();

    assert_eq!(result, PathCost::NotReachable);
    assert_eq!(result.cost(), None);
    assert!(!result.is_reachable());
}

#[test]
fn test_enclosed_goal_not_reachable() {
    let g = grid(".....\n..#..\n.#.#.\n..#..\n.....");
    assert_eq!(
        shortest_path(&g, c(0, 0), c(2, 2)),
        Ok(PathCost::NotReachable)
    );
}

#[test]
fn test_path_through_bottom_row() {
    // Column 2 is only open on the bottom row.
    let g = grid(
        "S.#..\n\
         ..#..\n\
         ....E",
    );
    let (start, goal) = (g.start().unwrap(), g.goal().unwrap());
    assert_eq!(shortest_path(&g, start, goal), Ok(PathCost::Reachable(6)));
}

#[test]
fn test_detour_longer_than_manhattan() {
    let g = grid("S#E\n.#.\n...");
    let (start, goal) = (g.start().unwrap(), g.goal().unwrap());

    assert_eq!(start.manhattan(goal), 2);
    assert_eq!(shortest_path(&g, start, goal), Ok(PathCost::Reachable(6)));
}

#[test]
fn test_invalid_endpoints_rejected() {
    let g = grid("..#\n...");

    assert_eq!(
        shortest_path(&g, c(0, 0), c(0, 3)),
        Err(GridPathError::InvalidEndpoint {
            at: c(0, 3),
            fault: EndpointFault::OutOfBounds
        })
    );
    assert_eq!(
        shortest_path(&g, c(0, 2), c(1, 2)),
        Err(GridPathError::InvalidEndpoint {
            at: c(0, 2),
            fault: EndpointFault::Blocked
        })
    );
    assert!(cost_map(&g, c(2, 0)).is_err());
}

#[test]
fn test_cost_map_covers_component_only() {
    let g = grid("..#.\n..#.\n###.");
    let costs = cost_map(&g, c(0, 0)).unwrap();

    assert_eq!(costs.len(), 4);
    assert_eq!(costs.get(c(1, 1)), Some(2));
    assert_eq!(costs.get(c(0, 3)), None);

    let mut pairs: Vec<_> = costs.iter().collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![(c(0, 0), 0), (c(0, 1), 1), (c(1, 0), 1), (c(1, 1), 2)]
    );
}

#[test]
fn test_cost_map_agrees_with_shortest_path() {
    let g = grid(
        "S..#....\n\
         .#.#.##.\n\
         .#...#..\n\
         .####.#.\n\
         ......#E",
    );
    let start = g.start().unwrap();
    let costs = cost_map(&g, start).unwrap();

    for at in g.open_cells() {
        let expected = costs.get(at);
        assert_eq!(shortest_path(&g, start, at).unwrap().cost(), expected);
    }
    assert_eq!(costs.get(g.goal().unwrap()), Some(15));
}
