use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_for_day;
use crate::errors::AppResult;
use crate::models::interval::DayTimeline;
use crate::utils::date;
use crate::utils::formatting::bold;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        subject,
        period,
        now,
        details,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let dates = if *now {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        for d in dates {
            let events = load_events_for_day(&mut pool, *subject, &d)?;

            if events.is_empty() {
                continue;
            }

            let timeline = ClockLogic::rebuild_day(&mut pool, *subject, d)?;
            print_day(&d, *subject, &timeline, *details);
        }
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    use crate::errors::AppError;

    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate);
            }
        }

        return date::generate_from_period(p).map_err(AppError::InvalidDate);
    }

    date::current_month_dates().map_err(AppError::InvalidDate)
}

fn print_day(d: &NaiveDate, subject: i64, timeline: &DayTimeline, details: bool) {
    let status = if timeline.total_minutes > 0 {
        "Present"
    } else {
        "Absent"
    };

    println!("\n{}", bold(&format!("=== {} | subject {} ===", d, subject)));
    println!("Status: {}", status);
    println!("{}", ClockLogic::describe(timeline));

    if let Some(first) = timeline.first_login {
        println!("First login: {}", first.format("%H:%M"));
    }
    if let Some(last) = timeline.last_logout {
        println!("Last logout: {}", last.format("%H:%M"));
    }

    if details {
        for iv in &timeline.intervals {
            match iv.end {
                Some(end) => println!(
                    "  {} → {} ({} min)",
                    iv.start.format("%H:%M"),
                    end.format("%H:%M"),
                    iv.duration_minutes
                ),
                None => println!("  {} → (active)", iv.start.format("%H:%M")),
            }
        }
    }
}
