//! Text rendering of dashboard snapshots

use comfy_table::{presets::UTF8_FULL, Cell, Table};
use umh_admin::{DashboardSnapshot, SnapshotRow};
use umh_core::{Record, RecordKind};

/// (header, sortable field name)
const CONTENT_COLUMNS: &[(&str, Option<&str>)] = &[
    ("ID", None),
    ("Title", Some("title")),
    ("Genre", Some("genre")),
    ("Year", Some("year")),
    ("Quality", Some("quality")),
    ("Rating", Some("rating")),
    ("Views", Some("views")),
    ("Status", Some("status")),
];

const ACCOUNT_COLUMNS: &[(&str, Option<&str>)] = &[
    ("ID", None),
    ("Name", Some("name")),
    ("Email", Some("email")),
    ("Plan", Some("plan")),
    ("Status", Some("status")),
    ("Last Login", Some("lastLogin")),
];

/// Render the tab bar, the page table and the footer
pub fn render_snapshot(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&tab_bar(snapshot.tab));
    out.push('\n');
    if !snapshot.query.is_empty() {
        out.push_str(&format!("Search: \"{}\"\n", snapshot.query));
    }

    if snapshot.rows.is_empty() {
        out.push_str("No records found.\n");
    } else {
        out.push_str(&render_table(snapshot).to_string());
        out.push('\n');
    }

    out.push_str(&footer(snapshot));
    out
}

fn tab_bar(active: RecordKind) -> String {
    RecordKind::all()
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_table(snapshot: &DashboardSnapshot) -> Table {
    let columns = match snapshot.tab {
        RecordKind::Content => CONTENT_COLUMNS,
        RecordKind::Account => ACCOUNT_COLUMNS,
    };

    let mut header = vec![Cell::new(checkbox(snapshot.all_visible_selected))];
    header.extend(
        columns
            .iter()
            .map(|(title, field)| Cell::new(header_label(title, *field, snapshot.sort.as_deref()))),
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    for row in &snapshot.rows {
        table.add_row(row_cells(row));
    }
    table
}

/// Column title with an arrow when the table is sorted by it
fn header_label(title: &str, field: Option<&str>, sort: Option<&str>) -> String {
    let arrow = match (field, sort.and_then(|sort| sort.split_once(' '))) {
        (Some(field), Some((sorted, direction))) if field == sorted => match direction {
            "ASC" => " ▲",
            _ => " ▼",
        },
        _ => "",
    };
    format!("{}{}", title, arrow)
}

fn row_cells(row: &SnapshotRow) -> Vec<Cell> {
    let mut cells = vec![Cell::new(checkbox(row.selected))];
    match &row.record {
        Record::Content(movie) => cells.extend([
            Cell::new(&movie.id),
            Cell::new(&movie.title),
            Cell::new(&movie.genre),
            Cell::new(movie.year),
            Cell::new(movie.quality),
            Cell::new(&movie.rating),
            Cell::new(&movie.views),
            Cell::new(movie.status),
        ]),
        Record::Account(account) => cells.extend([
            Cell::new(&account.id),
            Cell::new(&account.name),
            Cell::new(&account.email),
            Cell::new(account.plan),
            Cell::new(account.status),
            Cell::new(account.last_login_label()),
        ]),
    }
    cells
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn footer(snapshot: &DashboardSnapshot) -> String {
    let mut footer = format!(
        "{} | Page {} of {}",
        snapshot.range_label,
        snapshot.current_page,
        snapshot.total_pages.max(1)
    );
    if snapshot.selected > 0 {
        footer.push_str(&format!(" | {} selected", snapshot.selected));
    }
    footer.push('\n');
    footer
}
