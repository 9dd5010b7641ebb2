//! Time weighted oracle observations.
//!
//! An observation stores the global accumulators of a pool at the block
//! timestamp it was written in. Between writes, the accumulators of any later
//! time can be derived from the latest observation plus the tick and liquidity
//! that were active during the elapsed interval, see [`transform`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Env;

use crate::RESOLUTION;

#[cw_serde]
#[derive(Copy, Default)]
pub struct ObservationState {
    // the element of the observations ring this observation is stored at
    pub index: u16,
    // the block timestamp of the observation
    pub block_timestamp: u32,
    // the tick multiplied by seconds elapsed for the life of the pool as of the observation timestamp
    pub tick_cumulative: i64,
    // the seconds per in range liquidity for the life of the pool as of the observation timestamp
    pub seconds_per_liquidity_cumulative_x32: u64,
    // whether the observation has been initialized and the values are safe to use
    pub initialized: bool,
}

/// Returns the block timestamp truncated to 32 bits, i.e. mod 2**32
pub fn block_timestamp(env: &Env) -> u32 {
    env.block.time.seconds() as u32 // truncation is desired
}

/// Transforms a previous observation into a new observation, given the passage of time
/// and the current tick and liquidity values.
///
/// `time` must be chronologically equal to or greater than
/// `observation.block_timestamp`. Timestamps are compared mod 2**32, so an
/// observation written just before the 32 bit rollover still advances correctly.
/// The accumulators wrap on overflow exactly like the ledger's own.
///
/// Only the two accumulators and the `initialized` flag change; the index and
/// the stored timestamp are those of the source observation.
///
/// # Arguments
///
/// * `observation` - The observation to be transformed
/// * `time` - The timestamp to advance the observation to
/// * `tick` - The active tick at the time of the new observation
/// * `liquidity` - The total in-range liquidity at the time of the new observation
///
pub fn transform(
    observation: &ObservationState,
    time: u32,
    tick: i32,
    liquidity: u64,
) -> ObservationState {
    let delta = time.wrapping_sub(observation.block_timestamp);

    ObservationState {
        tick_cumulative: observation
            .tick_cumulative
            .wrapping_add((tick as i64).wrapping_mul(delta as i64)),
        seconds_per_liquidity_cumulative_x32: observation
            .seconds_per_liquidity_cumulative_x32
            .wrapping_add(((delta as u64) << RESOLUTION) / liquidity.max(1)),
        initialized: true,
        ..*observation
    }
}

#[cfg(test)]
mod test {
    use super::{block_timestamp, transform, ObservationState};
    use cosmwasm_std::testing::mock_env;
    use cosmwasm_std::{from_binary, to_binary, Timestamp};

    fn observation() -> ObservationState {
        ObservationState {
            index: 3,
            block_timestamp: 900,
            tick_cumulative: 5_000,
            seconds_per_liquidity_cumulative_x32: 900,
            initialized: false,
        }
    }

    #[test]
    fn test_transform_same_timestamp_only_marks_initialized() {
        let last = observation();
        let next = transform(&last, last.block_timestamp, -887, 12_345);
        assert_eq!(
            next,
            ObservationState {
                initialized: true,
                ..last
            }
        );
    }

    #[test]
    fn test_transform_accumulates_tick_and_seconds_per_liquidity() {
        let last = observation();
        let next = transform(&last, 1_000, 7, 2);

        assert_eq!(next.index, 3);
        assert_eq!(next.block_timestamp, 900);
        // 7 * 100 seconds
        assert_eq!(next.tick_cumulative, 5_700);
        // (100 << 32) / 2
        assert_eq!(next.seconds_per_liquidity_cumulative_x32, 900 + (50 << 32));
        assert!(next.initialized);
    }

    #[test]
    fn test_transform_negative_tick_decreases_tick_cumulative() {
        let next = transform(&observation(), 1_000, -30, 1);
        assert_eq!(next.tick_cumulative, 5_000 - 3_000);
    }

    #[test]
    fn test_transform_zero_liquidity_divides_by_one() {
        let last = observation();
        let with_zero = transform(&last, 1_000, 0, 0);
        let with_one = transform(&last, 1_000, 0, 1);
        assert_eq!(with_zero, with_one);
        assert_eq!(with_zero.seconds_per_liquidity_cumulative_x32, 900 + (100 << 32));
    }

    #[test]
    fn test_transform_across_timestamp_rollover() {
        let last = ObservationState {
            block_timestamp: u32::MAX - 4,
            ..observation()
        };
        // 10 seconds later, after the 32 bit timestamp wrapped
        let next = transform(&last, 5, 2, 1);
        assert_eq!(next.block_timestamp, u32::MAX - 4);
        assert_eq!(next.tick_cumulative, 5_000 + 20);
        assert_eq!(next.seconds_per_liquidity_cumulative_x32, 900 + (10 << 32));
    }

    #[test]
    fn test_transform_wraps_accumulators() {
        let last = ObservationState {
            block_timestamp: 0,
            tick_cumulative: i64::MAX,
            seconds_per_liquidity_cumulative_x32: u64::MAX,
            ..observation()
        };
        let next = transform(&last, 1, 1, 1);
        assert_eq!(next.tick_cumulative, i64::MIN);
        assert_eq!(next.seconds_per_liquidity_cumulative_x32, (1 << 32) - 1);
    }

    #[test]
    fn test_block_timestamp_truncates_to_32_bits() {
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(1_700_000_000);
        assert_eq!(block_timestamp(&env), 1_700_000_000);

        env.block.time = Timestamp::from_seconds((1 << 32) + 42);
        assert_eq!(block_timestamp(&env), 42);
    }

    #[test]
    fn test_observation_json_round_trip() -> eyre::Result<()> {
        let next = transform(&observation(), 1_000, 7, 2);
        let decoded: ObservationState = from_binary(&to_binary(&next)?)?;
        assert_eq!(decoded, next);
        Ok(())
    }
}
