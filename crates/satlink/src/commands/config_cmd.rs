//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_with_overrides(global)?;
            let out = match global.output {
                Some(format @ (OutputFormat::Json | OutputFormat::JsonCompact)) => {
                    output::render_json(&cfg, format == OutputFormat::JsonCompact)?
                }
                Some(OutputFormat::Yaml) => output::render_yaml(&cfg)?,
                _ => toml::to_string_pretty(&cfg).map_err(|e| CliError::Render(e.to_string()))?,
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::Validation {
                    field: "config".into(),
                    reason: format!("{} already exists (use --force to overwrite)", path.display()),
                });
            }

            let mut cfg = Config::default();
            config::apply_overrides(&mut cfg, global);
            let written = config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("Wrote {}", written.display());
            }
            Ok(())
        }
    }
}
