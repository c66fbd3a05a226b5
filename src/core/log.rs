use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Colour for each kind of logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "goal" => Colour::Green,
        "date" => Colour::Cyan,
        "reset" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Plain (uncoloured) "operation (target)" cell, truncated to the column limit.
fn op_target_cell(row: &LogRow) -> String {
    let cell = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if cell.chars().count() > MAX_OP_WIDTH {
        let mut s: String = cell.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        cell
    }
}

/// Render one log line. Only the operation word is coloured.
fn render_row(row: &LogRow, id_w: usize, date_w: usize, op_w: usize) -> String {
    let color = color_for_operation(&row.operation);
    let cell = op_target_cell(row);

    let colored = match cell.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(cell.as_str()).to_string(),
    };

    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    let date = chrono::DateTime::parse_from_rfc3339(&row.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| row.date.clone());

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        row.id,
        date,
        colored,
        padding,
        row.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|r| op_target_cell(r).chars().count())
            .max()
            .unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for row in &entries {
            println!("{}", render_row(row, id_w, date_w, op_w));
        }

        Ok(())
    }
}
