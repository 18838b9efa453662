pub mod backup;
pub mod clock;
pub mod commission;
pub mod config;
pub mod day;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod partner;
pub mod payout;
