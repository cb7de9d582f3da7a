//! Common types: board errors, shot results, cell views and counters.

use crate::ship::ShipType;

/// Outcome of a validated shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on empty water.
    Miss,
    /// Shot landed on a ship without sinking it.
    Hit,
    /// Shot sank a ship, carrying its class.
    Sunk(ShipType),
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// What a display should show for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Never fired upon, or an unhit part of a ship.
    Untouched,
    /// Fired upon, nothing there.
    Miss,
    /// Hit part of a ship that is still afloat.
    Hit,
    /// Part of a sunk ship.
    Sunk,
}

/// Running shot statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub shots_fired: usize,
    pub hit_count: usize,
    pub ships_sunk: usize,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship id does not name a ship of the fleet.
    InvalidShipId,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship would extend past the edge of the board.
    ShipOutOfBounds,
    /// Ship would overlap or touch another ship.
    ShipTooClose,
    /// Random placement found no valid spot within the attempt limit.
    PlacementExhausted { ship_type: ShipType, attempts: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidShipId => write!(f, "Ship id is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::PlacementExhausted {
                ship_type,
                attempts,
            } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship_type, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
