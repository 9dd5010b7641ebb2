use crate::error::OracleMathError;
use crate::oracle::{transform, ObservationState};
use crate::pool::PoolState;
use crate::tick::{TickState, MAX_TICK, MIN_TICK};
use cosmwasm_schema::cw_serde;
use tracing::{debug, trace};

// cumulative values of a tick range, only meaningful relative to another snapshot of the same range
#[cw_serde]
#[derive(Copy, Default)]
pub struct SnapshotCumulative {
    pub tick_cumulative_inside: i64,
    pub seconds_per_liquidity_inside_x32: u64,
    pub seconds_inside: u32,
}

impl SnapshotCumulative {
    /// The statistics accrued inside the range between `earlier` and `self`.
    ///
    /// Both snapshots must be taken over the same range, and the range must have
    /// been held for the whole interval. Wraparound in either snapshot cancels.
    pub fn since(&self, earlier: &SnapshotCumulative) -> SnapshotCumulative {
        SnapshotCumulative {
            tick_cumulative_inside: self
                .tick_cumulative_inside
                .wrapping_sub(earlier.tick_cumulative_inside),
            seconds_per_liquidity_inside_x32: self
                .seconds_per_liquidity_inside_x32
                .wrapping_sub(earlier.seconds_per_liquidity_inside_x32),
            seconds_inside: self.seconds_inside.wrapping_sub(earlier.seconds_inside),
        }
    }
}

/// Returns a snapshot of the tick cumulative, seconds per liquidity and seconds inside a tick range
///
/// The branch is picked by the current tick: below the lower tick, inside
/// `[lower, upper)`, or at and above the upper tick. Only the inside branch reads
/// `latest_observation`, advancing it to `time` when it is older.
///
/// # Arguments
///
/// * `pool` - The current pool state
/// * `tick_lower` - The lower tick of the range
/// * `tick_upper` - The upper tick of the range
/// * `latest_observation` - The most recently written observation of the pool
/// * `time` - The timestamp to snapshot at, usually the current block timestamp
///
pub fn snapshot_cumulatives_inside(
    pool: &PoolState,
    tick_lower: &TickState,
    tick_upper: &TickState,
    latest_observation: &ObservationState,
    time: u32,
) -> SnapshotCumulative {
    if pool.tick < tick_lower.tick {
        trace!(tick = pool.tick, tick_lower = tick_lower.tick, "range is above the current tick");
        SnapshotCumulative {
            tick_cumulative_inside: tick_lower
                .tick_cumulative_outside
                .wrapping_sub(tick_upper.tick_cumulative_outside),
            seconds_per_liquidity_inside_x32: tick_lower
                .seconds_per_liquidity_outside_x32
                .wrapping_sub(tick_upper.seconds_per_liquidity_outside_x32),
            seconds_inside: tick_lower
                .seconds_outside
                .wrapping_sub(tick_upper.seconds_outside),
        }
    } else if pool.is_in_range(tick_lower.tick, tick_upper.tick) {
        let advance = latest_observation.block_timestamp != time;
        trace!(
            tick = pool.tick,
            observation_timestamp = latest_observation.block_timestamp,
            time,
            advance,
            "range contains the current tick"
        );
        let observation = if advance {
            transform(latest_observation, time, pool.tick, pool.liquidity)
        } else {
            *latest_observation
        };

        SnapshotCumulative {
            tick_cumulative_inside: observation
                .tick_cumulative
                .wrapping_sub(tick_lower.tick_cumulative_outside)
                .wrapping_sub(tick_upper.tick_cumulative_outside),
            seconds_per_liquidity_inside_x32: observation
                .seconds_per_liquidity_cumulative_x32
                .wrapping_sub(tick_lower.seconds_per_liquidity_outside_x32)
                .wrapping_sub(tick_upper.seconds_per_liquidity_outside_x32),
            seconds_inside: time
                .wrapping_sub(tick_lower.seconds_outside)
                .wrapping_sub(tick_upper.seconds_outside),
        }
    } else {
        trace!(tick = pool.tick, tick_upper = tick_upper.tick, "range is below the current tick");
        SnapshotCumulative {
            tick_cumulative_inside: tick_upper
                .tick_cumulative_outside
                .wrapping_sub(tick_lower.tick_cumulative_outside),
            seconds_per_liquidity_inside_x32: tick_upper
                .seconds_per_liquidity_outside_x32
                .wrapping_sub(tick_lower.seconds_per_liquidity_outside_x32),
            seconds_inside: tick_upper
                .seconds_outside
                .wrapping_sub(tick_lower.seconds_outside),
        }
    }
}

/// Common checks for valid tick inputs.
pub fn check_ticks(tick_lower: i32, tick_upper: i32) -> Result<(), OracleMathError> {
    if tick_lower >= tick_upper {
        return Err(OracleMathError::Tlu);
    }
    if tick_lower < MIN_TICK {
        return Err(OracleMathError::Tlm);
    }
    if tick_upper > MAX_TICK {
        return Err(OracleMathError::Tum);
    }
    Ok(())
}

/// Same as [`snapshot_cumulatives_inside`], but rejects ranges the ledger itself would
/// refuse to snapshot: misordered or out of bounds ticks, and uninitialized ticks
/// whose outside accumulators carry no meaning.
pub fn try_snapshot_cumulatives_inside(
    pool: &PoolState,
    tick_lower: &TickState,
    tick_upper: &TickState,
    latest_observation: &ObservationState,
    time: u32,
) -> Result<SnapshotCumulative, OracleMathError> {
    if let Err(err) = check_ticks(tick_lower.tick, tick_upper.tick) {
        debug!(
            tick_lower = tick_lower.tick,
            tick_upper = tick_upper.tick,
            %err,
            "refusing to snapshot invalid range"
        );
        return Err(err);
    }
    for tick in [tick_lower, tick_upper] {
        if !tick.is_initialized() {
            debug!(tick = tick.tick, "refusing to snapshot range with uninitialized tick");
            return Err(OracleMathError::TickNotInitialized(tick.tick));
        }
    }
    Ok(snapshot_cumulatives_inside(
        pool,
        tick_lower,
        tick_upper,
        latest_observation,
        time,
    ))
}
