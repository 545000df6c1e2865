//! Interactive session over one table controller. The user list is loaded once
//! when the session starts; every later command works on the local state and
//! only create/update/delete reach the server.

use crate::{
    api::UserService,
    cli::{
        commands::users::{parse_page, parse_page_size},
        globals::GlobalArgs,
    },
    render,
    table::{Dialog, DraftField, TableError, UserTable},
};
use anyhow::Result;
use std::{io::Write, str::FromStr};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  show                 show the current page
  search [TERM]        filter by id or name, no term clears the filter;
                       TERM is used as typed, spaces included
  page N               go to page N
  next | prev          move one page forward or back
  size N               rows per page: 5, 10 or 25
  add                  start a new user
  edit ID              edit the user with id ID
  set FIELD VALUE      set name, login, password or role on the open draft
  draft                show the open draft
  save                 save the open draft
  cancel               discard the open draft
  delete ID            delete the user with id ID
  help                 show this help
  quit                 leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Empty,
    Show,
    Search(String),
    Page(usize),
    Next,
    Previous,
    Size(usize),
    Add,
    Edit(i64),
    Set(DraftField, String),
    Draft,
    Save,
    Cancel,
    Delete(i64),
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        // search terms are kept verbatim, spaces included
        let (word, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw.trim();

        let id = |value: &str| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid id: {value}"))
        };

        match word.to_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "show" | "ls" => Ok(Self::Show),
            "search" | "find" => Ok(Self::Search(raw.to_string())),
            "page" => parse_page(rest).map(Self::Page),
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Previous),
            "size" => parse_page_size(rest).map(Self::Size),
            "add" | "new" => Ok(Self::Add),
            "edit" => id(rest).map(Self::Edit),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(field, value)| (field, value.trim()));
                if field.is_empty() {
                    return Err("usage: set FIELD VALUE".to_string());
                }
                Ok(Self::Set(field.parse()?, value.to_string()))
            }
            "draft" => Ok(Self::Draft),
            "save" => Ok(Self::Save),
            "cancel" => Ok(Self::Cancel),
            "delete" | "rm" => id(rest).map(Self::Delete),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command: {other}, type `help` for a list")),
        }
    }
}

/// Handle the shell action on stdin/stdout
///
/// # Errors
/// Returns an error if the client cannot be built or the terminal cannot be read or written.
pub async fn execute(globals: &GlobalArgs, args: Args) -> Result<()> {
    let mut table = UserTable::with_page_size(globals.client()?, args.page_size);
    let input = BufReader::new(tokio::io::stdin());

    run(&mut table, input, &mut std::io::stdout()).await
}

/// Run the session until `quit` or end of input.
///
/// Failed actions are reported and the session keeps going; only I/O errors end it.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub async fn run<S, R, W>(table: &mut UserTable<S>, input: R, out: &mut W) -> Result<()>
where
    S: UserService,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    if let Err(e) = table.load().await {
        report(out, &e)?;
    }
    write!(out, "{}", render::page(&table.page()))?;

    loop {
        write!(out, "{}", prompt(table.dialog()))?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => write!(out, "{HELP}")?,
            ShellCommand::Show => write!(out, "{}", render::page(&table.page()))?,
            ShellCommand::Search(term) => {
                table.set_search_term(term);
                write!(out, "{}", render::page(&table.page()))?;
            }
            ShellCommand::Page(page_index) => {
                table.set_page(page_index);
                write!(out, "{}", render::page(&table.page()))?;
            }
            ShellCommand::Next => {
                table.next_page();
                write!(out, "{}", render::page(&table.page()))?;
            }
            ShellCommand::Previous => {
                table.previous_page();
                write!(out, "{}", render::page(&table.page()))?;
            }
            ShellCommand::Size(page_size) => {
                table.set_page_size(page_size);
                write!(out, "{}", render::page(&table.page()))?;
            }
            ShellCommand::Add => {
                table.open_add();
                writeln!(out, "New user: `set FIELD VALUE`, then `save` or `cancel`.")?;
            }
            ShellCommand::Edit(id) => match table.open_edit(id) {
                Ok(()) => write!(out, "{}", render::draft(table.draft()))?,
                Err(e) => report(out, &e)?,
            },
            ShellCommand::Set(field, value) => {
                if let Err(e) = table.set_field(field, &value) {
                    report(out, &e)?;
                }
            }
            ShellCommand::Draft => {
                if table.dialog().is_open() {
                    write!(out, "{}", render::draft(table.draft()))?;
                } else {
                    report(out, &TableError::DialogClosed)?;
                }
            }
            ShellCommand::Save => match table.save().await {
                Ok(user) => {
                    writeln!(out, "Saved user {}.", user.id.unwrap_or_default())?;
                    write!(out, "{}", render::page(&table.page()))?;
                }
                Err(e) => report(out, &e)?,
            },
            ShellCommand::Cancel => table.cancel(),
            ShellCommand::Delete(id) => {
                let question = format!("Delete user {id}?");
                if !super::confirm(&mut lines, out, &question).await? {
                    writeln!(out, "Cancelled.")?;
                    continue;
                }
                match table.delete(id).await {
                    Ok(()) => {
                        writeln!(out, "Deleted user {id}.")?;
                        write!(out, "{}", render::page(&table.page()))?;
                    }
                    Err(e) => report(out, &e)?,
                }
            }
        }
    }

    Ok(())
}

fn prompt(dialog: Dialog) -> &'static str {
    match dialog {
        Dialog::Closed => "usuarios> ",
        Dialog::Adding => "usuarios (new)> ",
        Dialog::Editing => "usuarios (edit)> ",
    }
}

fn report<W: Write>(out: &mut W, error: &TableError) -> std::io::Result<()> {
    writeln!(out, "error: {error}")
}
