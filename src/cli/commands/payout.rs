use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payout::PayoutAggregator;
use crate::db::commissions::{
    list_summaries, load_summary, reset_summaries_for_month, update_summary_status,
};
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::payout::{PayoutStatus, PayoutSummary};
use crate::ui::messages::{success, warning};
use crate::utils::date::canonical_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payout {
        refresh,
        list,
        set_status,
        reset,
        force,
        partner,
        month,
        year,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *refresh {
            match (partner, month, year) {
                (Some(partner_id), Some(m), Some(y)) => {
                    let summary =
                        PayoutAggregator::refresh_summary(&mut pool, *partner_id, m, *y)?;
                    success(format!(
                        "Refreshed payout for partner {} {} {}: {} record(s), total {} [{}].",
                        summary.partner_id,
                        summary.month,
                        summary.year,
                        summary.total_count,
                        summary.total_amount,
                        summary.status.to_db_str()
                    ));
                }
                _ => {
                    let refreshed = PayoutAggregator::refresh_all(&mut pool)?;
                    success(format!("Refreshed {} payout summary(ies).", refreshed.len()));
                }
            }
            return Ok(());
        }

        if let Some(status_raw) = set_status {
            let partner_id = partner
                .ok_or_else(|| AppError::Other("Missing --partner for --set-status.".into()))?;
            let m = month
                .as_ref()
                .ok_or_else(|| AppError::Other("Missing --month for --set-status.".into()))?;
            let y = year.ok_or_else(|| AppError::Other("Missing --year for --set-status.".into()))?;

            let canonical =
                canonical_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
            let next = PayoutStatus::from_db_str(status_raw)
                .ok_or_else(|| AppError::InvalidStatus(status_raw.clone()))?;

            let current = load_summary(&pool.conn, partner_id, canonical, y)?
                .ok_or_else(|| AppError::NoSummaryForKey(partner_id, canonical.to_string(), y))?;

            if !current.status.can_advance_to(next) && !*force {
                return Err(AppError::StatusRegression(
                    current.status.to_db_str().to_string(),
                    next.to_db_str().to_string(),
                ));
            }

            update_summary_status(&pool.conn, partner_id, canonical, y, next)?;

            // Backward moves are the administrative escape hatch: leave a
            // trace in the internal log.
            if !current.status.can_advance_to(next) {
                let _ = oplog(
                    &pool.conn,
                    "payout_status_override",
                    &format!("{}/{}/{}", partner_id, canonical, y),
                    &format!(
                        "Status forced {} -> {}",
                        current.status.to_db_str(),
                        next.to_db_str()
                    ),
                );
            }

            success(format!(
                "Payout for partner {} {} {} is now {}.",
                partner_id,
                canonical,
                y,
                next.to_db_str()
            ));
            return Ok(());
        }

        if *reset {
            let m = month
                .as_ref()
                .ok_or_else(|| AppError::Other("Missing --month for --reset.".into()))?;
            let y = year.ok_or_else(|| AppError::Other("Missing --year for --reset.".into()))?;

            let canonical =
                canonical_month(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?;

            let n = reset_summaries_for_month(&pool.conn, canonical, y)?;

            let _ = oplog(
                &pool.conn,
                "payout_reset",
                &format!("{}/{}", canonical, y),
                &format!("Reset {} summary(ies) to pending", n),
            );

            success(format!(
                "Reset {} payout summary(ies) for {} {} to pending.",
                n, canonical, y
            ));
            return Ok(());
        }

        if *list {
            let summaries = list_summaries(&mut pool)?;

            if summaries.is_empty() {
                warning("No payout summaries yet (run `payout --refresh`).");
                return Ok(());
            }

            println!("PAYOUT SUMMARIES:");
            for s in summaries {
                print_summary(&s);
            }
        }
    }
    Ok(())
}

fn print_summary(s: &PayoutSummary) {
    println!(
        "- partner {} | {} {} | {} record(s) | total {} | {}",
        s.partner_id,
        s.month,
        s.year,
        s.total_count,
        s.total_amount,
        s.status.to_db_str()
    );
}
