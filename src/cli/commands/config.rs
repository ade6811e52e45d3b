use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        init,
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            if Config::init_at(path)? {
                success(format!("Config file: {}", path.display()));
            } else {
                info(format!("Config file already exists: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let cfg = Config::load_from(path)?;
            info(format!("Current configuration ({}):", path.display()));
            print!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK / MIGRATE ----
        if *check || *run_migrate {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `shotlog config --init` first",
                    path.display()
                )));
            }

            if *run_migrate {
                let added = migrate::add_missing_keys(path)?;
                if added.is_empty() {
                    success("Configuration is up to date.");
                } else {
                    success(format!("Added missing fields: {}", added.join(", ")));
                }
            } else {
                let missing = migrate::missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults apply): {}",
                        missing.join(", ")
                    ));
                    info("Run `shotlog config --migrate` to write them to the file.");
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                )),
                Ok(_) | Err(_) => error(format!(
                    "Failed to edit configuration file using fallback '{default_editor}'"
                )),
            }
        }
    }
}
