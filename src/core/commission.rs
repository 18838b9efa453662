//! Commission-amount derivation and corrective recomputation.

use crate::db::commissions::{
    delete_commissions_for_partner, insert_commission, load_commissions_for_partner, load_partner,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::commission::CommissionRecord;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;

/// Parse a partner's free-text commission rate.
///
/// The CRM field may carry a trailing '%' ("2.5%"); anything that does
/// not parse as a number degrades to 0 rather than failing the batch.
pub fn parse_rate(raw: &str) -> Decimal {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<Decimal>()
        .unwrap_or(Decimal::ZERO)
}

/// amount = booking_total * rate / 100, exact decimal arithmetic.
pub fn commission_amount(booking_total: Decimal, rate: Decimal) -> Decimal {
    booking_total * rate / Decimal::from(100)
}

pub struct CommissionLogic;

impl CommissionLogic {
    /// Create the commission record for one qualifying booking, using the
    /// partner's currently configured rate.
    ///
    /// A missing partner skips the record (returns Ok(None)) so a batch
    /// of bookings keeps going.
    pub fn record(
        pool: &mut DbPool,
        partner_id: i64,
        booking_id: i64,
        booking_total: Decimal,
        sale_date: NaiveDate,
    ) -> AppResult<Option<CommissionRecord>> {
        let Some(partner) = load_partner(&pool.conn, partner_id)? else {
            warning(format!(
                "Partner {} not found, skipping commission for booking {}.",
                partner_id, booking_id
            ));
            return Ok(None);
        };

        let rate = parse_rate(&partner.commission_rate);
        let amount = commission_amount(booking_total, rate);

        let month = month_name(sale_date.month())
            .ok_or_else(|| AppError::InvalidDate(sale_date.to_string()))?;

        let rec = CommissionRecord {
            id: 0,
            partner_id,
            booking_id,
            booking_total,
            amount,
            sale_date,
            month: month.to_string(),
            year: sale_date.year(),
            created_at: Local::now().to_rfc3339(),
        };

        insert_commission(&pool.conn, &rec)?;
        Ok(Some(rec))
    }

    /// Corrective recomputation for one partner: delete the records and
    /// regenerate them from the stored booking totals with the partner's
    /// current rate. Runs in one transaction so a reader never sees the
    /// records half gone.
    ///
    /// Returns the number of regenerated records. The caller is expected
    /// to refresh the affected payout summaries afterwards.
    pub fn recompute_for_partner(pool: &mut DbPool, partner_id: i64) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;

        let partner = load_partner(&tx, partner_id)?
            .ok_or(AppError::UnknownPartner(partner_id))?;
        let rate = parse_rate(&partner.commission_rate);

        let old = load_commissions_for_partner(&tx, partner_id)?;
        delete_commissions_for_partner(&tx, partner_id)?;

        let regenerated = old.len();
        for rec in old {
            let month = month_name(rec.sale_date.month())
                .ok_or_else(|| AppError::InvalidDate(rec.sale_date.to_string()))?;

            let fresh = CommissionRecord {
                id: 0,
                amount: commission_amount(rec.booking_total, rate),
                month: month.to_string(),
                year: rec.sale_date.year(),
                created_at: Local::now().to_rfc3339(),
                ..rec
            };
            insert_commission(&tx, &fresh)?;
        }

        tx.commit()?;
        Ok(regenerated)
    }
}
