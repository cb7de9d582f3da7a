//! The ocean: fleet placement, shot resolution and statistics.

use crate::common::{BoardError, CellView, ShotResult, Stats};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::ship::{Orientation, Ship};
use core::{cmp::Reverse, fmt};
use rand::Rng;

const N: usize = BOARD_SIZE as usize;

/// Index of a ship in the board's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(u8);

impl ShipId {
    /// Id for fleet slot `index`, if there is such a slot.
    pub fn new(index: usize) -> Option<Self> {
        (index < NUM_SHIPS).then_some(ShipId(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Ship(ShipId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn ship_id(&self) -> Option<ShipId> {
        match self {
            Cell::Empty => None,
            Cell::Ship(id) => Some(*id),
        }
    }
}

/// Board state: the fleet, the grid referencing it, and shot counters.
///
/// Ships live in a fixed arena; every grid cell a ship covers stores that
/// ship's [`ShipId`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Ship; NUM_SHIPS],
    grid: [[Cell; N]; N],
    fired: [[bool; N]; N],
    shots_fired: usize,
    hit_count: usize,
    ships_sunk: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board holding the unplaced fleet.
    pub fn new() -> Self {
        Board {
            ships: SHIPS.map(Ship::new),
            grid: [[Cell::Empty; N]; N],
            fired: [[false; N]; N],
            shots_fired: 0,
            hit_count: 0,
            ships_sunk: 0,
        }
    }

    /// Place every ship not yet on the board at a random valid position,
    /// longest ships first.
    ///
    /// All or nothing: on error the board is left exactly as it was.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let mut order: [usize; NUM_SHIPS] = core::array::from_fn(|i| i);
        order.sort_unstable_by_key(|&i| (Reverse(self.ships[i].length()), i));

        let mut scratch = self.clone();
        for index in order {
            if scratch.ships[index].is_placed() {
                continue;
            }
            let id = ShipId(index as u8);
            let (row, col, orientation) = scratch.random_placement(rng, id)?;
            scratch.place_ship(id, row, col, orientation)?;
        }
        *self = scratch;
        log::info!("fleet placed: {} ships", NUM_SHIPS);
        Ok(())
    }

    /// Sample random anchors and orientations until one is valid for `id`.
    /// Does not modify the board.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        id: ShipId,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let ship = self.ships.get(id.index()).ok_or(BoardError::InvalidShipId)?;
        let len = ship.length();
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..N);
            let col = rng.random_range(0..N);
            let orientation = Orientation::from_bool(rng.random());
            if self.check_placement(len, row, col, orientation).is_ok() {
                log::debug!(
                    "{} at ({}, {}) {:?} after {} attempts",
                    ship.ship_type(),
                    row,
                    col,
                    orientation,
                    attempt
                );
                return Ok((row, col, orientation));
            }
        }
        log::warn!(
            "gave up placing {} after {} attempts",
            ship.ship_type(),
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(BoardError::PlacementExhausted {
            ship_type: ship.ship_type(),
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Check that a ship of `len` anchored at (`row`, `col`) fits on the board
    /// and keeps a one-cell gap (diagonals included) to every placed ship.
    pub fn check_placement(
        &self,
        len: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let (rows, cols) = match orientation {
            Orientation::Horizontal => (1, len),
            Orientation::Vertical => (len, 1),
        };
        if row + rows > N || col + cols > N {
            return Err(BoardError::ShipOutOfBounds);
        }

        // buffer rectangle, clipped to the grid
        let r_lo = row.saturating_sub(1);
        let c_lo = col.saturating_sub(1);
        let r_hi = (row + rows).min(N - 1);
        let c_hi = (col + cols).min(N - 1);
        for r in r_lo..=r_hi {
            for c in c_lo..=c_hi {
                if !self.grid[r][c].is_empty() {
                    return Err(BoardError::ShipTooClose);
                }
            }
        }
        Ok(())
    }

    /// Place ship `id` at (`row`, `col`) with `orientation`.
    pub fn place_ship(
        &mut self,
        id: ShipId,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.ships.get(id.index()).ok_or(BoardError::InvalidShipId)?;
        if ship.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        self.check_placement(ship.length(), row, col, orientation)?;

        let ship = &mut self.ships[id.index()];
        ship.set_position(row, col, orientation);
        for (r, c) in ship.cells() {
            self.grid[r][c] = Cell::Ship(id);
        }
        Ok(())
    }

    /// Fire at (`row`, `col`). Returns `true` if the cell holds a ship, sunk
    /// or not.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    pub fn shoot_at(&mut self, row: usize, col: usize) -> bool {
        self.resolve_shot(row, col).is_hit()
    }

    /// Bounds-checked [`shoot_at`](Self::shoot_at) reporting which ship sank.
    /// An out-of-range coordinate leaves the board untouched.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.resolve_shot(row, col))
    }

    fn resolve_shot(&mut self, row: usize, col: usize) -> ShotResult {
        self.shots_fired += 1;
        self.fired[row][col] = true;

        let Cell::Ship(id) = self.grid[row][col] else {
            log::trace!("shot {} at ({}, {}): miss", self.shots_fired, row, col);
            return ShotResult::Miss;
        };

        let ship = &mut self.ships[id.index()];
        let was_sunk = ship.is_sunk();
        if let Some(segment) = ship.segment_index(row, col) {
            ship.register_hit(segment);
        }
        self.hit_count += 1;
        log::trace!("shot {} at ({}, {}): hit", self.shots_fired, row, col);

        if was_sunk || !ship.is_sunk() {
            return ShotResult::Hit;
        }
        let ship_type = ship.ship_type();
        self.ships_sunk += 1;
        log::debug!("{} sunk ({} of {})", ship_type, self.ships_sunk, NUM_SHIPS);
        if self.is_game_over() {
            log::info!("all ships sunk after {} shots", self.shots_fired);
        }
        ShotResult::Sunk(ship_type)
    }

    /// Returns `true` if a ship occupies (`row`, `col`).
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        !self.grid[row][col].is_empty()
    }

    /// Returns `true` when the whole fleet is sunk.
    pub fn is_game_over(&self) -> bool {
        self.ships_sunk == NUM_SHIPS
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Shots that landed on a ship, repeats included.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    pub fn stats(&self) -> Stats {
        Stats {
            shots_fired: self.shots_fired,
            hit_count: self.hit_count,
            ships_sunk: self.ships_sunk,
        }
    }

    /// The full grid, row-major.
    pub fn grid(&self) -> &[[Cell; N]; N] {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.index()]
    }

    /// All ships with their ids, placed or not.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> + '_ {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, ship)| (ShipId(i as u8), ship))
    }

    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.grid[row][col].ship_id().map(|id| self.ship(id))
    }

    pub fn is_fired(&self, row: usize, col: usize) -> bool {
        self.fired[row][col]
    }

    /// Display state of (`row`, `col`).
    pub fn view(&self, row: usize, col: usize) -> CellView {
        match self.ship_at(row, col) {
            None if self.fired[row][col] => CellView::Miss,
            None => CellView::Untouched,
            Some(ship) if ship.is_sunk() => CellView::Sunk,
            Some(ship) => match ship.segment_index(row, col) {
                Some(segment) if ship.is_hit(segment) => CellView::Hit,
                _ => CellView::Untouched,
            },
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  shots_fired: {},\n  hit_count: {},\n  ships_sunk: {},\n  ships: {:?}\n}}",
            self.shots_fired, self.hit_count, self.ships_sunk, self.ships
        )
    }
}
