//! Welcome banner and the confirmation gate.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use quizshow_core::config::Config;
use quizshow_core::input::read_token;

fn banner(config: &Config) -> String {
    format!(
        "Welcome to the Quiz Show!\n\
         \n\
         The quiz will have a time limit of {} seconds\n\
         \n\
         We will be presenting problems located from {}\n\
         \n\
         Do you accept this challenge? [y/N]\n",
        config.time_limit_secs,
        config.source_path.display()
    )
}

/// Show the banner and ask the player to accept.
///
/// Returns `Ok(false)` when the player declines; the caller exits cleanly.
pub fn confirm<R, W>(config: &Config, input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{}", banner(config))?;
    out.flush()?;

    let reply = read_token(input).context("failed to read confirmation")?;
    if reply.to_uppercase() != "Y" {
        tracing::debug!("challenge declined with {reply:?}");
        writeln!(out, "Not so brave now are you?")?;
        return Ok(false);
    }

    writeln!(out)?;
    Ok(true)
}
