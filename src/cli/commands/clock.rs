use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        subject,
        date: date_arg,
        login,
        logout,
    } = cmd
    {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let login_t = parse_optional_time(login.as_ref())?;
        let logout_t = parse_optional_time(logout.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;

        let timeline = ClockLogic::apply(&mut pool, *subject, day, login_t, logout_t)?;

        println!(
            "📊 {}: {}",
            day,
            ClockLogic::describe(&timeline)
        );
    }
    Ok(())
}
