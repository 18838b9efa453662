use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::commission::parse_rate;
use crate::db::commissions::{insert_partner, list_partners, update_partner_rate};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Partner {
        add,
        list,
        name,
        rate,
        id,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *add {
            let name = name
                .as_ref()
                .ok_or_else(|| AppError::Other("Missing --name for --add.".into()))?;
            let rate = rate.clone().unwrap_or_else(|| "0".to_string());

            let partner_id = insert_partner(&pool.conn, name, &rate)?;
            success(format!(
                "Added partner {} (id {}) with rate '{}'.",
                name, partner_id, rate
            ));
            return Ok(());
        }

        // --rate with --id updates an existing partner's configured rate.
        if let (Some(partner_id), Some(new_rate), false) = (id, rate, *add) {
            let n = update_partner_rate(&pool.conn, *partner_id, new_rate)?;
            if n == 0 {
                return Err(AppError::UnknownPartner(*partner_id));
            }
            success(format!(
                "Updated rate of partner {} to '{}'.",
                partner_id, new_rate
            ));
            return Ok(());
        }

        if *list {
            let partners = list_partners(&mut pool)?;

            if partners.is_empty() {
                warning("No partners registered yet.");
                return Ok(());
            }

            println!("PARTNERS:");
            for p in partners {
                println!(
                    "- {} | {} | rate '{}' (parsed {}%)",
                    p.id,
                    p.name,
                    p.commission_rate,
                    parse_rate(&p.commission_rate)
                );
            }
        }
    }
    Ok(())
}
