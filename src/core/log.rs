use crate::db::log::{LogLine, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

/// Colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Operation plus target, truncated to `MAX_OP_WIDTH` display columns.
fn op_target(line: &LogLine) -> String {
    let raw = if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    };

    if raw.width() <= MAX_OP_WIDTH {
        return raw;
    }

    let mut out = String::new();
    for c in raw.chars() {
        if out.width() + 4 > MAX_OP_WIDTH {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Render the log as aligned text lines, without colours.
pub fn render_plain(lines: &[LogLine]) -> Vec<String> {
    render(lines, false)
}

fn render(lines: &[LogLine], colored: bool) -> Vec<String> {
    let id_w = lines
        .iter()
        .map(|l| l.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = lines.iter().map(|l| l.date.width()).max().unwrap_or(10);
    let op_w = lines
        .iter()
        .map(|l| op_target(l).width())
        .max()
        .unwrap_or(10);

    lines
        .iter()
        .map(|l| {
            let text = op_target(l);
            let padding = " ".repeat(op_w.saturating_sub(text.width()));

            // Colour only the operation word so padding stays measurable.
            let shown = if colored {
                let color = color_for_operation(&l.operation);
                match text.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(text.as_str()).to_string(),
                }
            } else {
                text
            };

            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                l.id,
                l.date,
                shown,
                padding,
                l.message,
                id_w = id_w,
                date_w = date_w
            )
        })
        .collect()
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let lines = load_log(&pool.conn)?;

        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in render(&lines, true) {
            println!("{}", line);
        }

        Ok(())
    }
}
