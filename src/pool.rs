use cosmwasm_schema::cw_serde;

// the current state of the pool, as decoded from the pool account
#[cw_serde]
#[derive(Copy, Default)]
pub struct PoolState {
    // the swap fee in hundredths of a bip
    pub fee: u32,
    pub tick_spacing: u16,
    // the currently in range liquidity available to the pool
    pub liquidity: u64,
    // the current price
    pub sqrt_price_x32: u64,
    // the current tick
    pub tick: i32,
    // the most recently written slot of the observation ring
    pub observation_index: u16,
    pub observation_cardinality: u16,
    pub observation_cardinality_next: u16,
    pub fee_growth_global_0_x32: u64,
    pub fee_growth_global_1_x32: u64,
    pub protocol_fees_token_0: u64,
    pub protocol_fees_token_1: u64,
    pub unlocked: bool,
}

impl PoolState {
    /// Whether `tick` lies in `[tick_lower, tick_upper)`, i.e. positions over that
    /// range currently earn and their range accrues the global accumulators.
    pub fn is_in_range(&self, tick_lower: i32, tick_upper: i32) -> bool {
        tick_lower <= self.tick && self.tick < tick_upper
    }
}
