//! Aggregation of commission records into per-(partner, month, year)
//! payout summaries.

use crate::db::commissions::{
    distinct_commission_keys, insert_summary, load_commissions_for_key, load_summary,
    update_summary_totals,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::commission::CommissionRecord;
use crate::models::payout::{PayoutStatus, PayoutSummary};
use crate::utils::date::canonical_month;
use rust_decimal::Decimal;

/// Plain count/sum over a record set. Summation is exact: amounts stay in
/// Decimal from the row text to the stored total, no floats involved.
pub fn aggregate(records: &[CommissionRecord]) -> (i64, Decimal) {
    let total: Decimal = records.iter().map(|r| r.amount).sum();
    (records.len() as i64, total)
}

pub struct PayoutAggregator;

impl PayoutAggregator {
    /// Recompute one (partner, month, year) summary from its records.
    ///
    /// Runs as a single transaction per key: read records, aggregate,
    /// write back. Only count/amount are overwritten on an existing row;
    /// its status is preserved. A missing row is created as Pending.
    /// Re-running over an unchanged record set leaves an identical row,
    /// which is what makes repeated recomputation safe as a repair tool.
    pub fn refresh_summary(
        pool: &mut DbPool,
        partner_id: i64,
        month: &str,
        year: i32,
    ) -> AppResult<PayoutSummary> {
        let canonical = canonical_month(month)
            .ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;

        let tx = pool.conn.transaction()?;

        let records = load_commissions_for_key(&tx, partner_id, canonical, year)?;
        let (total_count, total_amount) = aggregate(&records);

        let existing = load_summary(&tx, partner_id, canonical, year)?;

        let summary = match existing {
            Some(prev) => {
                update_summary_totals(&tx, partner_id, canonical, year, total_count, total_amount)?;
                PayoutSummary {
                    partner_id,
                    month: prev.month,
                    year,
                    total_count,
                    total_amount,
                    status: prev.status,
                }
            }
            None => {
                let summary = PayoutSummary {
                    partner_id,
                    month: canonical.to_string(),
                    year,
                    total_count,
                    total_amount,
                    status: PayoutStatus::Pending,
                };
                insert_summary(&tx, &summary)?;
                summary
            }
        };

        tx.commit()?;
        Ok(summary)
    }

    /// Bulk repair: refresh every key that has at least one commission
    /// record. Each key gets its own transaction. Keys stored under the
    /// abbreviated month collapse onto the canonical one; a row with an
    /// unrecognizable month is skipped, not fatal to the batch.
    pub fn refresh_all(pool: &mut DbPool) -> AppResult<Vec<PayoutSummary>> {
        let raw_keys = distinct_commission_keys(&pool.conn)?;

        let mut keys: Vec<(i64, &'static str, i32)> = Vec::with_capacity(raw_keys.len());
        for (partner_id, month, year) in &raw_keys {
            if let Some(canonical) = canonical_month(month) {
                let key = (*partner_id, canonical, *year);
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }

        let mut out = Vec::with_capacity(keys.len());
        for (partner_id, month, year) in keys {
            out.push(Self::refresh_summary(pool, partner_id, month, year)?);
        }
        Ok(out)
    }
}
