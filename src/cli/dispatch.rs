// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use std::fs;

use crate::commit::{confirm_commit, parse_message, CommitBuilder, CommitPreview, MessageFormatter};
use crate::config::{self, Language, ScConfig};
use crate::error::{ConfigError, Result, ScError};
use crate::rules::{display_errors, CommitValidator};

use super::args::{CheckArgs, Cli, Commands, CommitArgs, HooksAction, HooksArgs, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        config::load_config_from(config_path)?
    } else {
        config::load_config()?
    };

    match cli.effective_command() {
        Commands::Commit(args) => run_commit(&cli, &config, args),
        Commands::Check(args) => run_check(&config, args),
        Commands::Init(args) => run_init(args),
        Commands::Hooks(args) => run_hooks(args),
        Commands::Version => run_version(),
    }
}

/// Run the commit command.
fn run_commit(cli: &Cli, config: &ScConfig, args: CommitArgs) -> Result<()> {
    tracing::debug!("Running commit command with args: {:?}", args);

    let repo = crate::git::open_repo()?;

    if cli.all {
        crate::git::stage_all()?;
    }

    if !args.amend && !repo.has_staged_changes()? {
        return Err(ScError::Git(crate::error::GitError::NoStagedChanges));
    }

    if !args.amend {
        let staged = repo.staged_files()?;
        eprintln!("{}", style("Staged files:").bold());
        for file in &staged {
            eprintln!("  {} {}", style("✓").green(), file.display());
        }
        eprintln!();
    }

    let mut builder = CommitBuilder::new(config);
    if let Some(ref t) = args.r#type {
        builder = builder.with_type(t);
    }
    if let Some(ref scope) = args.scope {
        builder = builder.with_scope(scope);
    }
    if let Some(ref message) = args.message {
        builder = builder.with_subject(message);
    }
    if let Some(ref body) = args.body {
        builder = builder.with_body(body);
    }
    if args.breaking {
        builder = builder.with_breaking(true);
    }
    if let Some(ref issues) = args.issues {
        builder = builder.with_issues(issues);
    }

    // Flag mode needs at least a type and a message; anything less turns
    // the flags into prefills for the interactive flow.
    let interactive = !builder.is_complete();

    let record = if interactive {
        builder.collect_interactive()?
    } else {
        builder.build()?
    };

    let validator = CommitValidator::new(config);
    let errors = validator.validate(&record);
    if !errors.is_empty() {
        display_errors(&errors);
        return Err(ScError::ValidationFailed {
            count: errors.len(),
        });
    }

    let message = MessageFormatter::new(config).format(&record);

    if cli.dry_run {
        println!("{}", message);
        return Ok(());
    }

    if interactive && !cli.yes {
        if !confirm_commit(config, &message)? {
            return Err(ScError::Cancelled);
        }
    } else {
        CommitPreview::new(&message).print();
    }

    let sha = if args.amend {
        crate::git::amend_commit(&message)?
    } else {
        crate::git::create_commit(&message)?
    };

    let short_sha = &sha[..sha.len().min(7)];
    let branch = repo.branch_name().unwrap_or_else(|_| "HEAD".to_string());
    eprintln!(
        "{} Commit {} created on {}",
        style("✓").green().bold(),
        style(short_sha).yellow(),
        style(&branch).cyan()
    );
    eprintln!("  Push with: git push origin {}", branch);

    Ok(())
}

/// Run the check command.
fn run_check(config: &ScConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let message = match (&args.message, &args.file) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(ScError::WithContext {
                context: "check".to_string(),
                message: "Provide a message with --message or --file".to_string(),
            });
        }
    };

    let record = match parse_message(&message) {
        Ok(record) => record,
        Err(err) => {
            if !args.quiet {
                eprintln!("{} {}", style("✗").red().bold(), err);
                eprintln!();
                eprintln!("Expected conventional commit format:");
                eprintln!("  <type>(<scope>): <subject>");
                eprintln!();
                eprintln!("Example: feat(auth): add login flow");
            }
            return Err(err);
        }
    };

    let errors = CommitValidator::new(config).validate(&record);
    if !errors.is_empty() {
        if !args.quiet {
            display_errors(&errors);
        }
        return Err(ScError::ValidationFailed {
            count: errors.len(),
        });
    }

    if !args.quiet {
        eprintln!(
            "{} {}",
            style("✓").green().bold(),
            style("Commit message is valid!").green()
        );
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let path = std::env::current_dir()?.join(".scrc.json");

    if path.exists() && !args.force {
        return Err(ScError::Config(ConfigError::AlreadyExists { path }));
    }

    let language = args.language.unwrap_or(Language::En);
    let config = config::default_config(language);

    let json = serde_json::to_string_pretty(&config).map_err(|e| {
        ScError::Config(ConfigError::ParseError {
            message: format!("Failed to serialize configuration: {}", e),
        })
    })?;
    fs::write(&path, format!("{}\n", json))?;

    eprintln!(
        "{} Created {}",
        style("✓").green().bold(),
        style(path.display()).cyan()
    );
    eprintln!("  Edit it to customize types, scopes, validation and formatting.");

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command with args: {:?}", args);

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { hook, force } => {
            match hook {
                Some(name) => manager.install_hook(&name, force)?,
                None => manager.install_all(force)?,
            }
            eprintln!("{} Hooks installed", style("✓").green().bold());
        }
        HooksAction::Uninstall { hook } => {
            match hook {
                Some(name) => manager.uninstall_hook(&name)?,
                None => manager.uninstall_all()?,
            }
            eprintln!("{} Hooks uninstalled", style("✓").green().bold());
        }
        HooksAction::Status => {
            for (name, installed) in manager.status()? {
                if installed {
                    eprintln!("  {} {}", style("✓").green(), name);
                } else {
                    eprintln!("  {} {} (not installed)", style("✗").dim(), name);
                }
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("{}", crate::version::version_string());
    Ok(())
}
