/// Panic messages
pub struct ErrorMsg;

impl ErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "pool already initialized";
    pub const INVALID_TICK_SPACING: &'static str = "invalid tick spacing: must be positive";
    pub const INVALID_TICK: &'static str = "tick out of range";
    pub const INVALID_TICK_RANGE: &'static str = "invalid tick range: lower must be < upper and aligned";
    pub const INVALID_LIQUIDITY_AMOUNT: &'static str = "liquidity amount must be positive";
    pub const INSUFFICIENT_LIQUIDITY: &'static str = "insufficient liquidity in position";
    pub const UNPAID_MINT: &'static str = "mint not paid: insufficient token balance in pool";
    pub const UNFUNDED_FEES: &'static str = "fee tokens not transferred to the pool";
    pub const NO_ACTIVE_LIQUIDITY: &'static str = "no liquidity in range to credit fees";
}
