pub mod attendance_day;
pub mod commission;
pub mod event;
pub mod event_kind;
pub mod interval;
pub mod partner;
pub mod payout;
