// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::PathBuf;

use crate::config::{example_config, ToolConfig, CONFIG_FILES};
use crate::error::{ConfigError, ExportError, PolicyError, Result, ResultExt};
use crate::export;
use crate::git;
use crate::policy::RuleName;

use super::args::{Cli, Commands, ExportArgs, InitArgs, OutputFormat, ShowArgs};
use super::report;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        ToolConfig::load_from(config_path)?
    } else {
        ToolConfig::load()?
    };

    if cli.no_color || !config.ui.color {
        console::set_colors_enabled(false);
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Show(args) => run_show(&cli, &config, args),
        Commands::Export(args) => run_export(&config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Directory exports and configuration are written to.
///
/// The repository root when inside a repository, otherwise the current directory.
fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    if git::is_git_repo(&cwd) {
        git::repository_root(&cwd)
    } else {
        tracing::debug!("Not inside a git repository, using {:?}", cwd);
        Ok(cwd)
    }
}

/// Run the show command.
fn run_show(cli: &Cli, config: &ToolConfig, args: ShowArgs) -> Result<()> {
    tracing::debug!("Running show command with args: {:?}", args);

    let policy = config.effective_policy();

    match args.rule {
        Some(name) => {
            let rule = name
                .parse::<RuleName>()
                .map_err(|_| PolicyError::Config(ConfigError::UnknownRule { name }))?;
            report::print_rules(policy.get(rule).map(|spec| (rule, spec)), cli.format);
        }
        None => {
            report::print_rules(policy.iter().map(|(rule, spec)| (*rule, spec)), cli.format);
            if cli.format != Some(OutputFormat::Json) {
                println!();
                println!("{}", report::summary(&policy));
            }
        }
    }

    Ok(())
}

/// Run the export command.
fn run_export(config: &ToolConfig, args: ExportArgs) -> Result<()> {
    tracing::debug!("Running export command with args: {:?}", args);

    let format = args.target.unwrap_or(config.export.format);
    let contents = export::render(&config.effective_policy(), format)?;

    if args.stdout {
        print!("{}", contents);
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => project_root()?.join(config.export_path(format)),
    };

    export::write(&path, &contents, args.force)?;
    println!("✓ Wrote {} policy to {}", format, path.display());
    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let path = project_root()?.join(CONFIG_FILES[0]);

    if path.exists() && !args.force {
        if !console::Term::stdout().is_term() {
            return Err(PolicyError::Export(ExportError::AlreadyExists { path }));
        }

        let overwrite = dialoguer::Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            return Err(PolicyError::Cancelled);
        }
    }

    export::write(&path, example_config(), true)?;
    println!("✓ Created {}", path.display());
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("commit-policy {}", crate::version::version_string());
    Ok(())
}
