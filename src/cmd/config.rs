use clap::{Args, Subcommand};

use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Enter the Zammad URL and API token interactively.
    Init,
    /// Show the stored configuration (token masked).
    Show,
}

pub fn run(ctx: &mut AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(ctx),
        ConfigCommand::Show => run_show(ctx),
    }
}

fn run_init(ctx: &mut AppContext) -> AppResult<()> {
    let current_url = ctx.settings.base_url();
    let current_token = ctx.settings.api_token();

    match ctx.ui.prompt_credentials(&current_url, &current_token)? {
        Some((url, token)) if ctx.settings.configure(&url, &token)? => {
            ctx.ui.show_info("Zammad settings saved.");
        }
        _ => ctx.ui.show_info("Settings unchanged."),
    }
    Ok(())
}

fn run_show(ctx: &AppContext) -> AppResult<()> {
    println!("Zammad URL: {}", display_value(&ctx.settings.base_url()));
    println!("API token: {}", mask_secret(&ctx.settings.api_token()));
    Ok(())
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "<not set>".to_string()
    } else {
        value.to_string()
    }
}

fn mask_secret(value: &str) -> String {
    // Counted in characters, not bytes: tokens are opaque and may contain
    // multi-byte UTF-8.
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        "<not set>".to_string()
    } else if chars.len() > 6 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 3..].iter().collect();
        format!("{prefix}***{suffix}")
    } else {
        "***".to_string()
    }
}
