//! Ship classes, orientation and per-segment hit tracking.

use core::fmt;

/// Longest ship in the fleet.
pub const MAX_SHIP_LENGTH: usize = 4;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Map a coin flip onto an orientation (`true` is horizontal).
    pub fn from_bool(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Cell `offset` segments away from (`row`, `col`) along this axis.
    #[inline]
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// Ship class. Each class has a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipType {
    /// Number of segments for this class.
    pub const fn length(self) -> usize {
        match self {
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Destroyer => 2,
            ShipType::Submarine => 1,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single vessel: its class, where it sits once placed, and which segments
/// have been hit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    position: Option<(usize, usize, Orientation)>,
    hits: [bool; MAX_SHIP_LENGTH],
}

impl Ship {
    /// An unplaced ship with no hits.
    pub const fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            position: None,
            hits: [false; MAX_SHIP_LENGTH],
        }
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Anchor and orientation, or `None` while the ship is unplaced.
    pub fn position(&self) -> Option<(usize, usize, Orientation)> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Anchor (row, col) of the first segment.
    pub fn origin(&self) -> Option<(usize, usize)> {
        self.position.map(|(r, c, _)| (r, c))
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.position.map(|(_, _, o)| o)
    }

    /// Hit flags, one per segment.
    pub fn hits(&self) -> &[bool] {
        &self.hits[..self.length()]
    }

    pub fn is_hit(&self, segment: usize) -> bool {
        self.hits().get(segment).copied().unwrap_or(false)
    }

    /// `true` once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits().iter().all(|&hit| hit)
    }

    /// Mark `segment` as hit. Hitting the same segment again is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `segment >= self.length()`.
    pub fn register_hit(&mut self, segment: usize) {
        let len = self.length();
        assert!(
            segment < len,
            "segment {segment} out of range for {} of length {len}",
            self.ship_type
        );
        self.hits[segment] = true;
    }

    /// Segment index of (`row`, `col`), or `None` if that cell is not part of
    /// this ship.
    pub fn segment_index(&self, row: usize, col: usize) -> Option<usize> {
        let (r0, c0, orientation) = self.position?;
        let (along, across, along0, across0) = match orientation {
            Orientation::Horizontal => (col, row, c0, r0),
            Orientation::Vertical => (row, col, r0, c0),
        };
        if across != across0 || along < along0 {
            return None;
        }
        let index = along - along0;
        (index < self.length()).then_some(index)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.segment_index(row, col).is_some()
    }

    /// Occupied cells in segment order. Empty while unplaced.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = if self.is_placed() { self.length() } else { 0 };
        (0..len).filter_map(move |i| {
            self.position
                .map(|(r, c, orientation)| orientation.step(r, c, i))
        })
    }

    pub(crate) fn set_position(&mut self, row: usize, col: usize, orientation: Orientation) {
        self.position = Some((row, col, orientation));
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hit = self.hits().iter().filter(|&&h| h).count();
        match self.position {
            Some((r, c, o)) => write!(
                f,
                "Ship {{ type: {}, origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
                self.ship_type,
                r,
                c,
                o,
                hit,
                self.length()
            ),
            None => write!(
                f,
                "Ship {{ type: {}, unplaced, hits: {}/{} }}",
                self.ship_type,
                hit,
                self.length()
            ),
        }
    }
}
