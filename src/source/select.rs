//! Choosing the root directory to scan.

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub trait RootSelector {
    /// Fails with [`AppError::NoSelection`] when nothing was chosen.
    fn select_root(&self) -> AppResult<PathBuf>;
}

/// Root passed on the command line.
pub struct ArgSelector(pub String);

impl RootSelector for ArgSelector {
    fn select_root(&self) -> AppResult<PathBuf> {
        if self.0.trim().is_empty() {
            return Err(AppError::NoSelection);
        }
        ensure_dir(expand_tilde(self.0.trim()))
    }
}

/// Asks for the root on stdin. An empty line or EOF counts as cancel.
pub struct PromptSelector;

impl PromptSelector {
    pub fn select_from<R: BufRead>(&self, mut input: R) -> AppResult<PathBuf> {
        eprint!("Where to look for backups? (subdirectories are searched too): ");
        io::stderr().flush().ok();

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Err(AppError::NoSelection);
        }

        ArgSelector(answer.trim().to_string()).select_root()
    }
}

impl RootSelector for PromptSelector {
    fn select_root(&self) -> AppResult<PathBuf> {
        self.select_from(io::stdin().lock())
    }
}

fn ensure_dir(path: PathBuf) -> AppResult<PathBuf> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(AppError::InvalidRoot(path))
    }
}
