use crate::table::PAGE_SIZE_OPTIONS;
use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const CMD_LIST: &str = "list";
pub const CMD_SEARCH: &str = "search";
pub const CMD_ADD: &str = "add";
pub const CMD_EDIT: &str = "edit";
pub const CMD_DELETE: &str = "delete";
pub const CMD_SHELL: &str = "shell";

pub const ARG_ID: &str = "id";
pub const ARG_NAME: &str = "name";
pub const ARG_LOGIN: &str = "login";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_ROLE: &str = "role";
pub const ARG_SEARCH: &str = "search";
pub const ARG_PAGE: &str = "page";
pub const ARG_PAGE_SIZE: &str = "page-size";
pub const ARG_YES: &str = "yes";

/// Parse a page size, accepting only the offered options.
///
/// # Errors
/// Returns a message listing the valid sizes.
pub fn parse_page_size(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
        .ok_or_else(|| {
            let options: Vec<String> = PAGE_SIZE_OPTIONS.iter().map(ToString::to_string).collect();
            format!("invalid page size {value}, expected one of: {}", options.join(", "))
        })
}

/// Parse a 1-based page number into a 0-based page index.
///
/// # Errors
/// Returns a message if the value is not a positive integer.
pub fn parse_page(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page - 1),
        _ => Err(format!("invalid page {value}, pages start at 1")),
    }
}

#[must_use]
pub fn validator_page_size() -> ValueParser {
    ValueParser::from(parse_page_size)
}

#[must_use]
pub fn validator_page() -> ValueParser {
    ValueParser::from(parse_page)
}

fn page_size_arg() -> Arg {
    Arg::new(ARG_PAGE_SIZE)
        .short('s')
        .long(ARG_PAGE_SIZE)
        .help("Rows per page: 5, 10 or 25")
        .env("USUARIOS_PAGE_SIZE")
        .default_value("5")
        .value_parser(validator_page_size())
}

fn id_arg(help: &'static str) -> Arg {
    Arg::new(ARG_ID)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

fn field_args(command: Command, required: bool) -> Command {
    command
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long(ARG_NAME)
                .help("Display name")
                .required(required),
        )
        .arg(
            Arg::new(ARG_LOGIN)
                .short('l')
                .long(ARG_LOGIN)
                .help("Login name")
                .required(required),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Password, sent as-is to the API")
                .required(required),
        )
        .arg(
            Arg::new(ARG_ROLE)
                .short('r')
                .long(ARG_ROLE)
                .help("Role id, an empty value clears the role"),
        )
}

#[must_use]
pub fn subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_LIST)
                .about("Show one page of users, optionally filtered by name or id")
                .arg(
                    Arg::new(ARG_SEARCH)
                        .short('q')
                        .long(ARG_SEARCH)
                        .help("Only users whose id or name contains this term"),
                )
                .arg(
                    Arg::new(ARG_PAGE)
                        .long(ARG_PAGE)
                        .help("Page to show, starting at 1")
                        .default_value("1")
                        .value_parser(validator_page()),
                )
                .arg(page_size_arg()),
        )
        .subcommand(
            Command::new(CMD_SEARCH)
                .about("Search users by name on the server")
                .arg(
                    Arg::new(ARG_NAME)
                        .help("Name to search for")
                        .required(true),
                ),
        )
        .subcommand(field_args(
            Command::new(CMD_ADD).about("Create a user"),
            true,
        ))
        .subcommand(field_args(
            Command::new(CMD_EDIT)
                .about("Update a user, fields not given keep their value")
                .arg(id_arg("Id of the user to update")),
            false,
        ))
        .subcommand(
            Command::new(CMD_DELETE)
                .about("Delete a user")
                .arg(id_arg("Id of the user to delete"))
                .arg(
                    Arg::new(ARG_YES)
                        .short('y')
                        .long(ARG_YES)
                        .help("Do not ask for confirmation")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new(CMD_SHELL)
                .about("Interactive session: browse, search, add, edit and delete users")
                .arg(page_size_arg()),
        )
}
