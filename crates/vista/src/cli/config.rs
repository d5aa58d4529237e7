//! The `vista config` command for configuration management.
//!
//! The config file never holds credentials directly; the provider sections
//! carry `${ENV_VAR}` references. `show` and `init` therefore point out
//! which of those variables still need to be exported.

use clap::{Args, Subcommand};
use console::Style;
use vista_core::provider::resolve_env_var;
use vista_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration and credential status
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Environment variables referenced by the provider sections that do not
/// currently resolve. These are the settings a fresh install must act on.
fn unresolved_credentials(config: &Config) -> Vec<String> {
    let mut references = Vec::new();
    if let Some(unsplash) = &config.providers.unsplash {
        references.push(unsplash.access_key.as_str());
    }
    if let Some(getty) = &config.providers.getty {
        references.push(getty.api_key.as_str());
        references.push(getty.client_secret.as_str());
    }

    references
        .into_iter()
        .filter(|value| value.starts_with("${") && value.ends_with('}'))
        .filter(|value| resolve_env_var(value).is_none())
        .map(|value| value[2..value.len() - 1].to_string())
        .collect()
}

fn print_credential_hints(config: &Config) {
    let missing = unresolved_credentials(config);
    if missing.is_empty() {
        return;
    }

    let warn = Style::new().for_stderr().yellow();
    eprintln!(
        "{}",
        warn.apply_to("Set the provider credentials before searching:")
    );
    for var in missing {
        eprintln!("  export {var}=...");
    }
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            println!("{}", config.to_toml()?);
            print_credential_hints(&config);
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let config = Config::default();
            std::fs::write(&path, config.to_toml()?)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
            print_credential_hints(&config);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_credentials_lists_placeholders() {
        let mut config = Config::default();
        if let Some(unsplash) = config.providers.unsplash.as_mut() {
            unsplash.access_key = "${VISTA_TEST_UNSET_ACCESS_KEY}".to_string();
        }
        if let Some(getty) = config.providers.getty.as_mut() {
            getty.api_key = "${VISTA_TEST_UNSET_API_KEY}".to_string();
            getty.client_secret = "${VISTA_TEST_UNSET_SECRET}".to_string();
        }

        let missing = unresolved_credentials(&config);
        assert_eq!(
            missing,
            vec![
                "VISTA_TEST_UNSET_ACCESS_KEY",
                "VISTA_TEST_UNSET_API_KEY",
                "VISTA_TEST_UNSET_SECRET"
            ]
        );
    }

    #[test]
    fn test_unresolved_credentials_skips_inline_keys() {
        let mut config = Config::default();
        if let Some(unsplash) = config.providers.unsplash.as_mut() {
            unsplash.access_key = "inline-key".to_string();
        }
        config.providers.getty = None;

        assert!(unresolved_credentials(&config).is_empty());
    }

    #[test]
    fn test_unresolved_credentials_ignores_disabled_providers() {
        let mut config = Config::default();
        config.providers.unsplash = None;
        config.providers.getty = None;

        assert!(unresolved_credentials(&config).is_empty());
    }
}
