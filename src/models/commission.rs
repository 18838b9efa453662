use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One commission earned by a partner for a qualifying booking.
/// Created once, never updated in place; corrective recomputation deletes
/// and regenerates the row from `booking_total`.
#[derive(Debug, Clone, Serialize)]
pub struct CommissionRecord {
    pub id: i64,
    pub partner_id: i64,
    pub booking_id: i64,
    pub booking_total: Decimal,
    pub amount: Decimal,
    pub sale_date: NaiveDate,
    pub month: String, // canonical month name, e.g. "December"
    pub year: i32,
    pub created_at: String,
}
