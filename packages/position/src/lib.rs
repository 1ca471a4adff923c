#![no_std]

pub mod types;
pub mod manager;
pub mod value;
pub mod client;

pub use types::{Position, PositionInfo, PositionKey};
pub use manager::{calculate_pending_fees, modify_position, update_position};
pub use value::principal_amounts;
pub use client::PoolClient;
