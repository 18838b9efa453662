use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PayoutStatus {
    Pending,
    Approved,
    Paid,
}

impl PayoutStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Approved => "approved",
            PayoutStatus::Paid => "paid",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(PayoutStatus::Pending),
            "approved" => Some(PayoutStatus::Approved),
            "paid" => Some(PayoutStatus::Paid),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PayoutStatus::Pending => 0,
            PayoutStatus::Approved => 1,
            PayoutStatus::Paid => 2,
        }
    }

    /// Normal lifecycle only moves forward: Pending → Approved → Paid.
    /// Backward moves need the administrative override.
    pub fn can_advance_to(&self, next: PayoutStatus) -> bool {
        next.rank() >= self.rank()
    }
}

/// Per-(partner, month, year) aggregate over commission records.
/// total_count/total_amount are always re-derivable from the records;
/// refreshing twice over the same record set yields an identical row.
#[derive(Debug, Clone, Serialize)]
pub struct PayoutSummary {
    pub partner_id: i64,
    pub month: String, // canonical month name
    pub year: i32,
    pub total_count: i64,
    pub total_amount: Decimal,
    pub status: PayoutStatus,
}
