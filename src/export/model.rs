use serde::Serialize;

/// Flat row for exporting attendance events.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub subject_id: i64,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub source: String,
}

/// Flat row for exporting payout summaries.
#[derive(Serialize, Clone, Debug)]
pub struct PayoutExport {
    pub partner_id: i64,
    pub month: String,
    pub year: i32,
    pub total_count: i64,
    pub total_amount: String,
    pub status: String,
}
