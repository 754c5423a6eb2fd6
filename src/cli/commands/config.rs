use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        check,
        force,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            Config::write_defaults(path, *force)?;
            success(format!("Configuration file written: {}", path.display()));
        }

        // ---- CHECK ----
        if *check {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                let missing = Config::missing_keys(&content)?;
                if missing.is_empty() {
                    success(format!("{} is complete", path.display()));
                } else {
                    for key in missing {
                        warning(format!("Missing field '{}' (default value used)", key));
                    }
                }
            } else {
                warning(format!(
                    "{} does not exist (defaults used)",
                    path.display()
                ));
            }
        }

        // ---- PRINT ----
        if *print_config || !(*init || *check) {
            let cfg = Config::load(path)?;
            info(format!("Configuration file: {}", path.display()));
            print!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
