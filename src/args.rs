use atm::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Parses the optional first argument as the path of an accounts seed file
pub fn parse_accounts_arg() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);

    let filename = match args.next() {
        None => return Ok(None),
        Some(filename) => filename,
    };

    if args.next().is_some() {
        Err(InputArgsError::Parse("Expected at most one argument: the accounts file.".to_string()))?
    }

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(Some(path));
}
