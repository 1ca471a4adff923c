use soroban_sdk::{contracttype, Address};

/// Identity of a liquidity position inside a pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionKey {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Pool-side position record
#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct Position {
    pub liquidity: i128,
    pub fee_growth_inside_last_0: u128,
    pub fee_growth_inside_last_1: u128,
    pub tokens_owed_0: i128,
    pub tokens_owed_1: i128,
}

/// Position snapshot returned by `position_info`.
///
/// `tokens_owed_*` holds collectable tokens: principal from earlier burns
/// plus fees credited up to the last poke.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionInfo {
    pub liquidity: i128,
    pub fee_growth_inside_0: u128,
    pub fee_growth_inside_1: u128,
    pub tokens_owed_0: i128,
    pub tokens_owed_1: i128,
}

impl From<Position> for PositionInfo {
    fn from(pos: Position) -> Self {
        Self {
            liquidity: pos.liquidity,
            fee_growth_inside_0: pos.fee_growth_inside_last_0,
            fee_growth_inside_1: pos.fee_growth_inside_last_1,
            tokens_owed_0: pos.tokens_owed_0,
            tokens_owed_1: pos.tokens_owed_1,
        }
    }
}
