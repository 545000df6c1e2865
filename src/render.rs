//! Plain-text rendering of user lists for the terminal.

use crate::{api::User, table::Page};

const HEADERS: [&str; 4] = ["ID", "Name", "Login", "Role"];

/// Render a page slice followed by its pagination footer.
#[must_use]
pub fn page(page: &Page<'_>) -> String {
    let mut out = users(&page.rows);

    let footer = match page.range() {
        Some((first, last)) => format!(
            "{first}-{last} of {}, page {}/{}, {} per page",
            page.total,
            page.page_index + 1,
            page.page_count(),
            page.page_size
        ),
        None => format!("0 of {}, {} per page", page.total, page.page_size),
    };
    out.push_str(&footer);
    out.push('\n');

    out
}

/// Render users as an aligned table, or a placeholder when there are none.
#[must_use]
pub fn users(users: &[&User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let rows: Vec<[String; 4]> = users.iter().map(|user| row(user)).collect();

    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    push_line(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }

    out
}

/// Render the draft being edited, password masked.
#[must_use]
pub fn draft(user: &User) -> String {
    let id = user.id.map_or_else(|| "(new)".to_string(), |id| id.to_string());
    let password = if user.password().is_empty() { "" } else { "********" };
    let role = user.role_id.map(|r| r.to_string()).unwrap_or_default();

    format!(
        "id:       {id}\nname:     {}\nlogin:    {}\npassword: {password}\nrole:     {role}\n",
        user.display_name(),
        user.login_name()
    )
}

fn row(user: &User) -> [String; 4] {
    [
        user.id.map(|id| id.to_string()).unwrap_or_default(),
        user.display_name().to_string(),
        user.login_name().to_string(),
        if user.is_active() { "Active" } else { "Inactive" }.to_string(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        let padding = width.saturating_sub(cell.chars().count());
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
