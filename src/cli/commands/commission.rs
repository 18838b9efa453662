use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::commission::CommissionLogic;
use crate::core::payout::PayoutAggregator;
use crate::db::commissions::load_commissions_for_partner;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Commission {
        add,
        list,
        recompute,
        partner,
        booking,
        total,
        date: date_arg,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *add {
            let partner_id =
                partner.ok_or_else(|| AppError::Other("Missing --partner for --add.".into()))?;
            let booking_id =
                booking.ok_or_else(|| AppError::Other("Missing --booking for --add.".into()))?;
            let total_raw =
                total.as_ref().ok_or_else(|| AppError::Other("Missing --total for --add.".into()))?;

            let booking_total = total_raw
                .parse()
                .map_err(|_| AppError::InvalidAmount(total_raw.clone()))?;

            let sale_date = match date_arg {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };

            match CommissionLogic::record(&mut pool, partner_id, booking_id, booking_total, sale_date)? {
                Some(rec) => {
                    success(format!(
                        "Recorded commission of {} for booking {} ({} {}).",
                        rec.amount, rec.booking_id, rec.month, rec.year
                    ));
                    // Keep the summary in step with the new record.
                    PayoutAggregator::refresh_summary(&mut pool, partner_id, &rec.month, rec.year)?;
                }
                None => {
                    warning("Commission skipped.");
                }
            }
            return Ok(());
        }

        if *recompute {
            let partner_id = partner
                .ok_or_else(|| AppError::Other("Missing --partner for --recompute.".into()))?;

            let n = CommissionLogic::recompute_for_partner(&mut pool, partner_id)?;
            success(format!(
                "Regenerated {} commission record(s) for partner {}.",
                n, partner_id
            ));

            let refreshed = PayoutAggregator::refresh_all(&mut pool)?;
            success(format!("Refreshed {} payout summary(ies).", refreshed.len()));

            let _ = oplog(
                &pool.conn,
                "commission_recompute",
                &partner_id.to_string(),
                &format!("Regenerated {} records for partner {}", n, partner_id),
            );
            return Ok(());
        }

        if *list {
            let partner_id =
                partner.ok_or_else(|| AppError::Other("Missing --partner for --list.".into()))?;

            let records = load_commissions_for_partner(&pool.conn, partner_id)?;

            if records.is_empty() {
                warning(format!("No commission records for partner {}.", partner_id));
                return Ok(());
            }

            println!("COMMISSIONS for partner {}:", partner_id);
            for rec in records {
                println!(
                    "- booking {} | {} | total {} → commission {} | {} {}",
                    rec.booking_id, rec.sale_date, rec.booking_total, rec.amount, rec.month, rec.year
                );
            }
        }
    }
    Ok(())
}
