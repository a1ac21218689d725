//! Tests for the Conway transition rule.

use lifeboard::{BoardState, CellState, ConwayEngine, Grid, Transition};

fn state(cells: Vec<Vec<i32>>) -> BoardState {
    let grid = Grid::try_from(cells).expect("Valid grid");
    BoardState::initial(grid)
}

fn cells(state: &BoardState) -> Vec<Vec<i32>> {
    state
        .grid()
        .cells()
        .iter()
        .map(|row| row.iter().map(|cell| *cell as i32).collect())
        .collect()
}

#[test]
fn test_dead_grid_stays_dead() {
    let engine = ConwayEngine::new();
    let next = engine.next_state(&state(vec![vec![0, 0], vec![0, 0]]));
    assert_eq!(cells(&next), vec![vec![0, 0], vec![0, 0]]);
}

#[test]
fn test_lonely_cell_dies() {
    let engine = ConwayEngine::new();
    let next = engine.next_state(&state(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]));
    assert!(next.grid().is_lifeless());
}

#[test]
fn test_dead_cell_with_three_neighbors_comes_alive() {
    let engine = ConwayEngine::new();
    // Corner of an L: the dead cell at (1, 1) has exactly three live
    // neighbors and completes the block
    let next = engine.next_state(&state(vec![vec![1, 1], vec![1, 0]]));
    assert_eq!(next.grid().cell(1, 1), CellState::Alive);
    assert_eq!(cells(&next), vec![vec![1, 1], vec![1, 1]]);
}

#[test]
fn test_crowded_cell_dies() {
    let engine = ConwayEngine::new();
    // Center of a plus sign has four live neighbors
    let next = engine.next_state(&state(vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]));
    assert_eq!(next.grid().cell(1, 1), CellState::Dead);
}

#[test]
fn test_block_is_a_fixed_point() {
    let engine = ConwayEngine::new();
    let block = state(vec![vec![1, 1], vec![1, 1]]);
    let next = engine.next_state(&block);
    assert_eq!(next.grid(), block.grid());
}

#[test]
fn test_blinker_flips_orientation() {
    let engine = ConwayEngine::new();
    let vertical = state(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);

    let horizontal = engine.next_state(&vertical);
    assert_eq!(
        cells(&horizontal),
        vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]
    );

    let back = engine.next_state(&horizontal);
    assert_eq!(back.grid(), vertical.grid());
}

#[test]
fn test_edges_do_not_wrap() {
    let engine = ConwayEngine::new();
    // A vertical blinker on the left edge: its end cells see one live
    // neighbor each because nothing wraps around
    let next = engine.next_state(&state(vec![vec![1, 0, 0], vec![1, 0, 0], vec![1, 0, 0]]));
    assert_eq!(
        cells(&next),
        vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]]
    );
}

#[test]
fn test_generation_advances_by_one() {
    let engine = ConwayEngine::new();
    let first = state(vec![vec![1, 1], vec![1, 1]]);
    let second = engine.next_state(&first);
    let third = engine.next_state(&second);
    assert_eq!(*second.generation(), 2);
    assert_eq!(*third.generation(), 3);
}

#[test]
fn test_single_row_grid() {
    let engine = ConwayEngine::new();
    // Three in a row with nothing above or below: ends die, middle
    // survives, nothing is born
    let next = engine.next_state(&state(vec![vec![1, 1, 1]]));
    assert_eq!(cells(&next), vec![vec![0, 1, 0]]);
}

#[test]
fn test_parallel_path_matches_sequential_rule() {
    // 64 rows crosses the threading threshold; check the result against
    // a naive per-cell evaluation
    let rows = 64;
    let cols = 48;
    let raw: Vec<Vec<i32>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| ((r * 31 + c * 17) % 3 == 0) as i32)
                .collect()
        })
        .collect();

    let current = state(raw.clone());
    let engine = ConwayEngine::new();
    let next = engine.next_state(&current);

    for r in 0..rows {
        for c in 0..cols {
            let mut neighbors = 0;
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (nr, nc) = (r as i32 + dr, c as i32 + dc);
                    if nr < 0 || nc < 0 || nr >= rows as i32 || nc >= cols as i32 {
                        continue;
                    }
                    neighbors += raw[nr as usize][nc as usize];
                }
            }
            let alive = raw[r][c] == 1;
            let expected = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            assert_eq!(
                next.grid().cell(r, c).is_alive(),
                expected,
                "Mismatch at ({r}, {c})"
            );
        }
    }
}
