//! One-shot user actions. Each one builds a fresh table controller, runs a
//! single operation through it and prints the outcome.

use crate::{
    api::{User, UserService},
    cli::globals::GlobalArgs,
    render,
    table::{DraftField, TableError, UserTable},
};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    pub search: Option<String>,
    pub page_index: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    pub name: String,
}

/// Draft fields given on the command line; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldArgs {
    pub name: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl FieldArgs {
    /// Merge the given fields into the table's open draft.
    ///
    /// # Errors
    /// Returns the first field the draft rejects.
    pub fn apply<S: UserService>(&self, table: &mut UserTable<S>) -> Result<(), TableError> {
        let fields = [
            (DraftField::DisplayName, &self.name),
            (DraftField::LoginName, &self.login),
            (DraftField::Password, &self.password),
            (DraftField::Role, &self.role),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                table.set_field(field, value)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    pub id: i64,
    pub fields: FieldArgs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    pub id: i64,
    pub confirmed: bool,
}

/// Handle the list action
///
/// # Errors
/// Returns an error if the users cannot be loaded.
pub async fn list(globals: &GlobalArgs, args: ListArgs) -> Result<()> {
    let mut table = UserTable::with_page_size(globals.client()?, args.page_size);
    run_list(&mut table, &args, &mut std::io::stdout()).await
}

/// Handle the server-side search action
///
/// # Errors
/// Returns an error if the search request fails.
pub async fn search(globals: &GlobalArgs, args: SearchArgs) -> Result<()> {
    let client = globals.client()?;
    run_search(&client, &args, &mut std::io::stdout()).await
}

/// Handle the add action
///
/// # Errors
/// Returns an error if a field is invalid or the user cannot be created.
pub async fn add(globals: &GlobalArgs, args: FieldArgs) -> Result<()> {
    let mut table = UserTable::new(globals.client()?);
    run_add(&mut table, &args, &mut std::io::stdout()).await
}

/// Handle the edit action
///
/// # Errors
/// Returns an error if the user is unknown, a field is invalid, or the update fails.
pub async fn edit(globals: &GlobalArgs, args: EditArgs) -> Result<()> {
    let mut table = UserTable::new(globals.client()?);
    run_edit(&mut table, &args, &mut std::io::stdout()).await
}

/// Handle the delete action, asking for confirmation unless `--yes` was given
///
/// # Errors
/// Returns an error if reading the confirmation or the delete request fails.
pub async fn delete(globals: &GlobalArgs, args: DeleteArgs) -> Result<()> {
    let mut table = UserTable::new(globals.client()?);
    let mut out = std::io::stdout();

    if !args.confirmed {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let question = format!("Delete user {}?", args.id);
        if !super::confirm(&mut lines, &mut out, &question).await? {
            writeln!(out, "Cancelled.")?;
            return Ok(());
        }
    }

    run_delete(&mut table, args.id, &mut out).await
}

pub(crate) async fn run_list<S, W>(
    table: &mut UserTable<S>,
    args: &ListArgs,
    out: &mut W,
) -> Result<()>
where
    S: UserService,
    W: Write,
{
    table.load().await.context("Failed to load users")?;

    if let Some(term) = &args.search {
        table.set_search_term(term.as_str());
    }
    table.set_page(args.page_index);

    if table.page_index() != args.page_index {
        debug!("page {} out of range", args.page_index + 1);
        writeln!(
            out,
            "Page {} is out of range, showing page 1.",
            args.page_index + 1
        )?;
    }

    write!(out, "{}", render::page(&table.page()))?;

    Ok(())
}

pub(crate) async fn run_search<S, W>(service: &S, args: &SearchArgs, out: &mut W) -> Result<()>
where
    S: UserService,
    W: Write,
{
    let found = service
        .search_users_by_name(&args.name)
        .await
        .with_context(|| format!("Failed to search users named {}", args.name))?;

    let rows: Vec<&User> = found.iter().collect();
    write!(out, "{}", render::users(&rows))?;

    Ok(())
}

pub(crate) async fn run_add<S, W>(
    table: &mut UserTable<S>,
    args: &FieldArgs,
    out: &mut W,
) -> Result<()>
where
    S: UserService,
    W: Write,
{
    table.open_add();
    args.apply(table)?;

    let created = table.save().await.context("Failed to create user")?;

    writeln!(out, "Created user {}.", created.id.unwrap_or_default())?;
    write!(out, "{}", render::users(&[&created]))?;

    Ok(())
}

pub(crate) async fn run_edit<S, W>(
    table: &mut UserTable<S>,
    args: &EditArgs,
    out: &mut W,
) -> Result<()>
where
    S: UserService,
    W: Write,
{
    table.load().await.context("Failed to load users")?;
    table.open_edit(args.id)?;
    args.fields.apply(table)?;

    let updated = table
        .save()
        .await
        .with_context(|| format!("Failed to update user {}", args.id))?;

    writeln!(out, "Updated user {}.", args.id)?;
    write!(out, "{}", render::users(&[&updated]))?;

    Ok(())
}

pub(crate) async fn run_delete<S, W>(table: &mut UserTable<S>, id: i64, out: &mut W) -> Result<()>
where
    S: UserService,
    W: Write,
{
    table
        .delete(id)
        .await
        .with_context(|| format!("Failed to delete user {id}"))?;

    writeln!(out, "Deleted user {id}.")?;

    Ok(())
}
