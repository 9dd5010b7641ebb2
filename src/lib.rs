pub mod error;
pub mod oracle;
pub mod pool;
pub mod snapshot;
pub mod tick;

pub use error::OracleMathError;
pub use oracle::{block_timestamp, transform, ObservationState};
pub use pool::PoolState;
pub use snapshot::{
    check_ticks, snapshot_cumulatives_inside, try_snapshot_cumulatives_inside, SnapshotCumulative,
};
pub use tick::TickState;

/// Number of fractional bits in every X32 fixed point value
pub const RESOLUTION: u8 = 32;
