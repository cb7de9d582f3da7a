use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// Fleet composition as (class, count), largest class first.
pub const FLEET: [(ShipType, usize); 4] = [
    (ShipType::Battleship, 1),
    (ShipType::Cruiser, 2),
    (ShipType::Destroyer, 3),
    (ShipType::Submarine, 4),
];

/// One entry per ship in the fleet, in placement order.
pub const SHIPS: [ShipType; NUM_SHIPS] = expand_fleet();

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random placement gives up on a ship after this many samples.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

const fn expand_fleet() -> [ShipType; NUM_SHIPS] {
    let mut ships = [ShipType::Submarine; NUM_SHIPS];
    let mut next = 0;
    let mut class = 0;
    while class < FLEET.len() {
        let (ship_type, count) = FLEET[class];
        let mut i = 0;
        while i < count {
            ships[next] = ship_type;
            next += 1;
            i += 1;
        }
        class += 1;
    }
    assert!(next == NUM_SHIPS, "fleet table does not add up to NUM_SHIPS");
    ships
}
