//! Console command parsing

use umh_admin::AdminIntent;
use umh_core::{Result, UmhError};

pub const HELP: &str = "\
Commands:
  tab content|accounts     switch table
  search <text>            filter rows (resets to page 1)
  clear-search             remove the filter
  page <n> | next | prev   move between pages
  sort <field>             sort by field, again to reverse
  select <id>              toggle selection of a row
  select-all               toggle every row on this page
  clear                    clear the selection
  status <Status>          set status on selected rows
  delete                   delete selected rows
  delete <id>              delete one row
  edit <id> key=value ...  edit fields of one row
  chat <message>           ask the cinema concierge
  show | json              print the table (as text or JSON)
  help                     show this help
  quit                     exit";

/// A parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Intent(AdminIntent),
    Edit {
        id: String,
        assignments: Vec<(String, String)>,
    },
    Chat(String),
    Show,
    Json,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };
    let arg = rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        "tab" => Command::Intent(AdminIntent::SwitchTab(required(arg, "tab")?.parse()?)),
        "search" => Command::Intent(AdminIntent::SetQuery(rest.to_string())),
        "clear-search" => Command::Intent(AdminIntent::SetQuery(String::new())),
        "page" => {
            let page = required(arg, "page")?;
            let page = page.parse().map_err(|_| {
                UmhError::InvalidValue(format!("page must be a number, got '{}'", page))
            })?;
            Command::Intent(AdminIntent::SetPage(page))
        }
        "next" => Command::Intent(AdminIntent::NextPage),
        "prev" => Command::Intent(AdminIntent::PrevPage),
        "sort" => Command::Intent(AdminIntent::ToggleSort(required(arg, "sort")?.to_string())),
        "select" => Command::Intent(AdminIntent::ToggleSelect(
            required(arg, "select")?.to_string(),
        )),
        "select-all" => Command::Intent(AdminIntent::SelectAllVisible),
        "clear" => Command::Intent(AdminIntent::ClearSelection),
        "status" => Command::Intent(AdminIntent::BulkSetStatus(
            required(arg, "status")?.to_string(),
        )),
        "delete" if arg.is_empty() => Command::Intent(AdminIntent::BulkDelete),
        "delete" => Command::Intent(AdminIntent::DeleteRecord(arg.to_string())),
        "edit" => parse_edit(arg)?,
        "chat" => Command::Chat(required(arg, "chat")?.to_string()),
        "show" => Command::Show,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(UmhError::Other(format!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                other
            )));
        }
    };
    Ok(Some(command))
}

fn required<'a>(arg: &'a str, command: &str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(UmhError::InvalidValue(format!(
            "'{}' needs an argument",
            command
        )))
    } else {
        Ok(arg)
    }
}

/// `edit <id> key=value ...`
///
/// A value runs until the next word containing `=`, keeping its inner
/// spacing; trailing whitespace is dropped.
fn parse_edit(arg: &str) -> Result<Command> {
    let arg = arg.trim();
    let (id, rest) = arg
        .split_once(char::is_whitespace)
        .unwrap_or((arg, ""));
    if id.is_empty() {
        return Err(UmhError::InvalidValue("'edit' needs a record id".to_string()));
    }
    let rest = rest.trim_start();

    let key_starts: Vec<usize> = word_starts(rest)
        .filter(|&start| {
            rest[start..]
                .split(char::is_whitespace)
                .next()
                .is_some_and(|word| word.contains('='))
        })
        .collect();

    match key_starts.first() {
        None if rest.is_empty() => {
            return Err(UmhError::InvalidValue(
                "'edit' needs at least one key=value".to_string(),
            ));
        }
        Some(0) => {}
        _ => {
            let word = rest.split(char::is_whitespace).next().unwrap_or(rest);
            return Err(UmhError::InvalidValue(format!(
                "expected key=value, got '{}'",
                word
            )));
        }
    }

    let mut assignments = Vec::with_capacity(key_starts.len());
    for (i, &start) in key_starts.iter().enumerate() {
        let end = key_starts.get(i + 1).copied().unwrap_or(rest.len());
        if let Some((key, value)) = rest[start..end].trim_end().split_once('=') {
            assignments.push((key.to_string(), value.to_string()));
        }
    }

    Ok(Command::Edit {
        id: id.to_string(),
        assignments,
    })
}

/// Byte offsets where a whitespace-separated word begins
fn word_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.char_indices()
        .filter(move |&(i, c)| {
            !c.is_whitespace() && text[..i].chars().next_back().is_none_or(char::is_whitespace)
        })
        .map(|(i, _)| i)
}
