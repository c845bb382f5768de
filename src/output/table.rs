//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format data as tab-separated lines without a header, for scripts and pipes
pub fn format_plain<T: Tabled>(data: &[T]) -> String {
    data.iter()
        .map(|row| row.fields().join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}
