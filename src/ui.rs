#![cfg(feature = "std")]

//! Text rendering of the ocean and parsing of typed coordinates.

use std::fmt::Write;

use crate::{
    board::Board,
    common::{CellView, Stats},
    config::BOARD_SIZE,
    ship::ShipType,
};

const N: usize = BOARD_SIZE as usize;

fn view_char(view: CellView) -> char {
    match view {
        CellView::Untouched => '.',
        CellView::Miss => '-',
        CellView::Hit => 'S',
        CellView::Sunk => 'x',
    }
}

fn class_char(ship_type: ShipType) -> char {
    match ship_type {
        ShipType::Battleship => 'B',
        ShipType::Cruiser => 'C',
        ShipType::Destroyer => 'D',
        ShipType::Submarine => 'U',
    }
}

fn render_with(mut cell: impl FnMut(usize, usize) -> char) -> String {
    let mut out = String::from(" ");
    for c in 0..N {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..N {
        let _ = write!(out, "{}", r);
        for c in 0..N {
            out.push(' ');
            out.push(cell(r, c));
        }
        out.push('\n');
    }
    out
}

/// Player view: `.` untouched, `-` miss, `S` hit, `x` sunk.
pub fn render_board(board: &Board) -> String {
    render_with(|r, c| view_char(board.view(r, c)))
}

/// Debug view revealing every ship by class letter; lowercase once hit.
pub fn render_fleet(board: &Board) -> String {
    render_with(|r, c| match board.ship_at(r, c) {
        None if board.is_fired(r, c) => '-',
        None => '.',
        Some(ship) => {
            let ch = class_char(ship.ship_type());
            let hit = ship
                .segment_index(r, c)
                .is_some_and(|segment| ship.is_hit(segment));
            if hit {
                ch.to_ascii_lowercase()
            } else {
                ch
            }
        }
    })
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Shots fired: {}  Hits: {}  Ships sunk: {}",
        stats.shots_fired,
        stats.hit_count,
        stats.ships_sunk
    )
}

/// Parse `"row col"` or `"row,col"`, both in `0..BOARD_SIZE`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty());
    let (Some(row_str), Some(col_str), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Expected a row and a column, e.g. `3 5`".to_string());
    };
    let row = parse_axis("row", row_str)?;
    let col = parse_axis("column", col_str)?;
    Ok((row, col))
}

fn parse_axis(axis: &str, value: &str) -> Result<usize, String> {
    let n: usize = value
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 0-{}", axis, value, N - 1))?;
    if n >= N {
        return Err(format!("{} {} out of bounds - must be 0-{}", axis, n, N - 1));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Orientation, ShipId};

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coord("3 5"), Ok((3, 5)));
        assert_eq!(parse_coord(" 0,9 "), Ok((0, 9)));
        assert_eq!(parse_coord("7 , 2"), Ok((7, 2)));
        assert!(parse_coord("").is_err());
        assert!(parse_coord("4").is_err());
        assert!(parse_coord("1 2 3").is_err());
        assert!(parse_coord("a 2").is_err());
        assert!(parse_coord("10 2").is_err());
        assert!(parse_coord("2 -1").is_err());
    }

    #[test]
    fn renders_shot_markers() {
        let mut board = Board::new();
        // Destroyer at (1,1)-(1,2), Submarine at (5,5)
        board
            .place_ship(ShipId::new(3).unwrap(), 1, 1, Orientation::Horizontal)
            .unwrap();
        board
            .place_ship(ShipId::new(6).unwrap(), 5, 5, Orientation::Horizontal)
            .unwrap();
        board.shoot_at(0, 0);
        board.shoot_at(1, 1);
        board.shoot_at(5, 5);

        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), N + 1);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7 8 9");
        assert_eq!(lines[1], "0 - . . . . . . . . .");
        assert_eq!(lines[2], "1 . S . . . . . . . .");
        assert_eq!(lines[6], "5 . . . . . x . . . .");
    }

    #[test]
    fn fleet_view_shows_classes() {
        let mut board = Board::new();
        board
            .place_ship(ShipId::new(0).unwrap(), 2, 0, Orientation::Vertical)
            .unwrap();
        board.shoot_at(3, 0);

        let text = render_fleet(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "2 B . . . . . . . . .");
        assert_eq!(lines[4], "3 b . . . . . . . . .");
        assert_eq!(lines[5], "4 B . . . . . . . . .");
        assert_eq!(lines[6], "5 B . . . . . . . . .");
    }

    #[test]
    fn stats_line() {
        let stats = Stats {
            shots_fired: 7,
            hit_count: 3,
            ships_sunk: 1,
        };
        assert_eq!(
            render_stats(&stats),
            "Shots fired: 7  Hits: 3  Ships sunk: 1"
        );
    }
}
