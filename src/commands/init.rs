//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard for the shift policy and display
//! preferences, or resets the configuration to defaults.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset the configuration to product defaults instead of running the wizard
    #[arg(short, long)]
    reset: bool,
}

/// Executes the initialization command.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.reset {
        Config::default().save()?;
        msg_success!(Message::ConfigSaved);
        return Ok(());
    }

    // Interactive wizard pre-filled with current values
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
