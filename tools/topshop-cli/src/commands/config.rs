//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::{find_config_file, Context};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("base_url", &ctx.config.catalog.base_url);
    ctx.output.kv("timeout_ms", &ctx.config.catalog.timeout_ms.to_string());
    ctx.output.kv("max_retries", &ctx.config.catalog.max_retries.to_string());

    ctx.output.info("");
    ctx.output.info("[session]");
    ctx.output.kv("greeting", &ctx.config.session.greeting);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let value = ctx.config.get_value(key)?;
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", ctx.config.get(key)?);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(path) = ctx.config_path.clone().or_else(|| find_config_file(&ctx.cwd)) else {
        bail!("No config file found. Run `topshop config init` to create one.");
    };

    let mut config = CliConfig::load(&path)?;
    config.set(key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.validate();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}
