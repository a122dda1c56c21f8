//! Config subcommand handlers.

use dialoguer::Input;

use foodlist_core::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// TOML rendering for the table view of `config show`.
fn format_config(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("# failed to render config: {e}"))
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_profile() -> Result<(String, Profile), CliError> {
    let name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(prompt_err)?;

    let api_url: String = Input::new()
        .with_prompt("API base URL")
        .default(DEFAULT_API_URL.into())
        .validate_with(|input: &String| -> Result<(), String> {
            url::Url::parse(input)
                .map(|_| ())
                .map_err(|e| format!("not a valid URL: {e}"))
        })
        .interact_text()
        .map_err(prompt_err)?;

    let collection: String = Input::new()
        .with_prompt("Collection")
        .default("Food".into())
        .interact_text()
        .map_err(prompt_err)?;

    let page_size: usize = Input::new()
        .with_prompt("Items per page")
        .default(DEFAULT_PAGE_SIZE)
        .validate_with(|n: &usize| -> Result<(), &'static str> {
            if *n == 0 { Err("must be at least 1") } else { Ok(()) }
        })
        .interact_text()
        .map_err(prompt_err)?;

    let profile = Profile {
        api_url,
        collection: Some(collection),
        timeout: None,
        page_size: Some(page_size),
    };
    Ok((name, profile))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            eprintln!("foodlist configuration wizard");
            eprintln!("   Config path: {}\n", config::config_path().display());

            let (name, profile) = prompt_profile()?;

            let mut cfg = config::load_config_or_default();
            cfg.profiles.insert(name.clone(), profile);
            cfg.default_profile = Some(name.clone());

            let path = config::save_config(&cfg)?;
            eprintln!("\n✓ Configuration written to {}", path.display());
            eprintln!("  Active profile: {name}");
            eprintln!("\n  Test it: foodlist list");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(global.format(), &cfg, format_config, |c| {
                c.default_profile.clone().unwrap_or_default()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: foodlist config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }
    }
}
