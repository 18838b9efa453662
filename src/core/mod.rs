pub mod accumulator;
pub mod backup;
pub mod clock;
pub mod commission;
pub mod payout;
