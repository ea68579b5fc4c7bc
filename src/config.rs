/// Side length of the standard board.
pub const BOARD_SIZE: i32 = 6;
/// Vessel lengths of the standard fleet, largest first.
pub const FLEET: [usize; 6] = [3, 2, 2, 1, 1, 1];
pub const NUM_VESSELS: usize = FLEET.len();

/// Total number of vessel cells in the standard fleet.
pub const FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1;

/// Length of the fleet's flagship.
pub const FLAGSHIP_LENGTH: usize = 3;

/// Placement attempts allowed for a whole board before it is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
/// Times an abandoned board is restarted from scratch before giving up.
pub const MAX_LAYOUT_RESTARTS: usize = 1_000;
/// Rejected shots tolerated within a single turn.
pub const MAX_TURN_ATTEMPTS: usize = 10_000;
