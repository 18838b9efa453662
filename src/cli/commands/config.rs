use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let config = Config::load();
            println!("📄 Current configuration:");
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("Serialization error: {e}")))?;
            println!("{}", yaml);
        }

        if *check {
            let path = Config::config_file();
            if !path.exists() {
                warning(format!(
                    "Config file not found: {} (run `agentledger init`)",
                    path.display()
                ));
                return Ok(());
            }

            let content = std::fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(_) => success("Configuration file is valid."),
                Err(e) => warning(format!("Configuration file has problems: {}", e)),
            }
        }
    }

    Ok(())
}
