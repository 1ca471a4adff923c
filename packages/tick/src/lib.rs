#![no_std]

pub mod types;
pub mod spacing;
pub mod range;

pub use types::TickRange;
pub use spacing::{floor_tick, full_range_bounds, is_aligned, is_valid_threshold};
pub use range::{base_range, bid_range, ask_range, check_range};
