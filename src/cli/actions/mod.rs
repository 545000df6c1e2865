pub mod shell;
pub mod users;

use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, Lines};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List(users::ListArgs),
    Search(users::SearchArgs),
    Add(users::FieldArgs),
    Edit(users::EditArgs),
    Delete(users::DeleteArgs),
    Shell(shell::Args),
}

impl Action {
    /// Run the action against the configured API.
    ///
    /// # Errors
    /// Returns an error if the client cannot be built or the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> Result<()> {
        match self {
            Self::List(args) => users::list(globals, args).await,
            Self::Search(args) => users::search(globals, args).await,
            Self::Add(args) => users::add(globals, args).await,
            Self::Edit(args) => users::edit(globals, args).await,
            Self::Delete(args) => users::delete(globals, args).await,
            Self::Shell(args) => shell::execute(globals, args).await,
        }
    }
}

/// Ask a yes/no question, anything but `y`/`yes` (or end of input) is a no.
pub(crate) async fn confirm<R, W>(lines: &mut Lines<R>, out: &mut W, question: &str) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{question} [y/N] ")?;
    out.flush()?;

    let answer = lines.next_line().await?.unwrap_or_default();

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncBufReadExt;

    #[tokio::test]
    async fn test_confirm() {
        for (input, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("", false)] {
            let mut lines = input.as_bytes().lines();
            let mut out = Vec::new();

            let answer = confirm(&mut lines, &mut out, "delete user 1?").await.unwrap();

            assert_eq!(answer, expected, "input {input:?}");
            assert_eq!(String::from_utf8(out).unwrap(), "delete user 1? [y/N] ");
        }
    }
}
