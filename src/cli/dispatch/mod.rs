//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action to run and the global connection
//! settings shared by every action.

use crate::cli::{
    actions::{shell, users, Action},
    commands::{
        api,
        users::{
            ARG_ID, ARG_LOGIN, ARG_NAME, ARG_PAGE, ARG_PAGE_SIZE, ARG_PASSWORD, ARG_ROLE,
            ARG_SEARCH, ARG_YES, CMD_ADD, CMD_DELETE, CMD_EDIT, CMD_LIST, CMD_SEARCH, CMD_SHELL,
        },
    },
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &ArgMatches) -> Result<(Action, GlobalArgs)> {
    let api_opts = api::Options::parse(matches)?;
    let globals = GlobalArgs::new(api_opts.url, api_opts.timeout);

    let action = match matches.subcommand() {
        Some((CMD_LIST, sub)) => Action::List(users::ListArgs {
            search: sub.get_one::<String>(ARG_SEARCH).cloned(),
            page_index: sub.get_one::<usize>(ARG_PAGE).copied().unwrap_or(0),
            page_size: page_size(sub),
        }),
        Some((CMD_SEARCH, sub)) => Action::Search(users::SearchArgs {
            name: sub
                .get_one::<String>(ARG_NAME)
                .cloned()
                .context("missing required argument: NAME")?,
        }),
        Some((CMD_ADD, sub)) => Action::Add(fields(sub)),
        Some((CMD_EDIT, sub)) => Action::Edit(users::EditArgs {
            id: id(sub)?,
            fields: fields(sub),
        }),
        Some((CMD_DELETE, sub)) => Action::Delete(users::DeleteArgs {
            id: id(sub)?,
            confirmed: sub.get_flag(ARG_YES),
        }),
        Some((CMD_SHELL, sub)) => Action::Shell(shell::Args {
            page_size: page_size(sub),
        }),
        Some((name, _)) => return Err(anyhow!("unknown command: {name}")),
        None => return Err(anyhow!("missing command")),
    };

    Ok((action, globals))
}

fn id(matches: &ArgMatches) -> Result<i64> {
    matches
        .get_one::<i64>(ARG_ID)
        .copied()
        .context("missing required argument: ID")
}

fn page_size(matches: &ArgMatches) -> usize {
    matches
        .get_one::<usize>(ARG_PAGE_SIZE)
        .copied()
        .unwrap_or(crate::table::DEFAULT_PAGE_SIZE)
}

fn fields(matches: &ArgMatches) -> users::FieldArgs {
    let read = |id: &str| matches.get_one::<String>(id).cloned();

    users::FieldArgs {
        name: read(ARG_NAME),
        login: read(ARG_LOGIN),
        password: read(ARG_PASSWORD),
        role: read(ARG_ROLE),
    }
}
