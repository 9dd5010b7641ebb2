use cosmwasm_schema::cw_serde;

/// The minimum tick that can be used on any X32 pool
pub const MIN_TICK: i32 = -221818;
/// The maximum tick that can be used on any X32 pool
pub const MAX_TICK: i32 = -MIN_TICK;

// a tick boundary as decoded from its account; every `*_outside` accumulator was last
// written when the price crossed this tick and is relative to that moment only
#[cw_serde]
#[derive(Copy, Default)]
pub struct TickState {
    pub tick: i32,
    // liquidity added when crossed upwards, removed when crossed downwards
    pub liquidity_net: i64,
    pub liquidity_gross: u64,
    pub fee_growth_outside_0_x32: u64,
    pub fee_growth_outside_1_x32: u64,
    // tick * seconds accrued on the far side of this tick
    pub tick_cumulative_outside: i64,
    // seconds per max(1, liquidity) on the far side of this tick
    pub seconds_per_liquidity_outside_x32: u64,
    pub seconds_outside: u32,
}

impl TickState {
    // the ledger keeps no flag; a tick is live iff some position references it
    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross != 0
    }
}
