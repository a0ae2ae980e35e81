//! Tests for grid state and the win/tie rules.

use connect_four::{
    Cell, Coordinate, Grid, HEIGHT, Orientation, Player, WIDTH, check_win, is_full, line_from,
};

#[test]
fn test_landing_row_is_bottom_most_empty() {
    let mut grid = Grid::new();
    for column in 0..WIDTH {
        // Fill each column to a different depth.
        for row in (HEIGHT - column % HEIGHT..HEIGHT).rev() {
            grid.place(row, column, Player::One);
        }
    }

    for column in 0..WIDTH {
        let expected = (0..HEIGHT)
            .rev()
            .find(|&row| grid.get(row, column) == Some(Cell::Empty));
        assert_eq!(grid.find_landing_row(column), expected, "column {column}");
    }
}

#[test]
fn test_full_column_has_no_landing_row() {
    let mut grid = Grid::new();
    let mut player = Player::One;
    while let Some(row) = grid.find_landing_row(4) {
        grid.place(row, 4, player);
        player = player.opponent();
    }
    assert_eq!(grid.find_landing_row(4), None);
    assert!(grid.is_column_full(4));
    assert_eq!(grid.count(Player::One) + grid.count(Player::Two), HEIGHT);
}

#[test]
fn test_scenario_vertical_four_in_column_three() {
    let mut grid = Grid::new();
    for _ in 0..4 {
        let row = grid.find_landing_row(3).expect("column has room");
        grid.place(row, 3, Player::One);
    }

    for row in [5, 4, 3, 2] {
        assert_eq!(grid.get(row, 3), Some(Cell::Occupied(Player::One)));
    }
    assert_eq!(grid.get(1, 3), Some(Cell::Empty));
    assert!(check_win(&grid, Player::One));
    assert!(!check_win(&grid, Player::Two));
}

#[test]
fn test_every_in_bounds_line_wins() {
    for orientation in [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalDownLeft,
    ] {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let line = line_from(Coordinate::from((row, column)), orientation);
                let Some(cells) = line
                    .iter()
                    .map(|coord| coord.to_indices())
                    .collect::<Option<Vec<_>>>()
                else {
                    continue;
                };

                let mut grid = Grid::new();
                for (r, c) in cells {
                    grid.place(r, c, Player::Two);
                }
                assert!(
                    check_win(&grid, Player::Two),
                    "{orientation:?} from ({row}, {column})"
                );
                assert!(!check_win(&grid, Player::One));
            }
        }
    }
}

#[test]
fn test_lines_wrapping_past_an_edge_do_not_win() {
    // Three at the right end of row 5 and one at the left of row 4 would be
    // contiguous if rows wrapped.
    let mut grid = Grid::new();
    for column in 4..WIDTH {
        grid.place(5, column, Player::One);
    }
    grid.place(4, 0, Player::One);
    assert!(!check_win(&grid, Player::One));
}

#[test]
fn test_non_collinear_four_do_not_win() {
    let mut grid = Grid::new();
    grid.place(5, 0, Player::One);
    grid.place(5, 1, Player::One);
    grid.place(4, 1, Player::One);
    grid.place(4, 2, Player::One);
    assert!(!check_win(&grid, Player::One));
}

#[test]
fn test_board_full_only_when_every_top_cell_taken() {
    let mut grid = Grid::new();
    for column in 0..WIDTH {
        for row in (0..HEIGHT).rev() {
            let player = if (row / 2 + column) % 2 == 0 { Player::One } else { Player::Two };
            grid.place(row, column, player);
        }
        assert_eq!(is_full(&grid), column == WIDTH - 1, "after column {column}");
    }
}
