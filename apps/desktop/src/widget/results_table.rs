//! Read-only result table over the fixed user columns. No selection, no
//! checkboxes, compact fixed-width layout.

use dioxus::prelude::*;
use dirsearch_core::types::{Column, Row, USER_COLUMNS};

/// Inline width constraints for a column header.
fn column_style(col: &Column) -> String {
    let mut style = format!("min-width: {}px; max-width: {}px;", col.min_width, col.max_width);
    if col.resizable {
        style.push_str(" resize: horizontal; overflow: hidden;");
    }
    style
}

#[component]
pub fn ResultsTable(rows: Vec<Row>) -> Element {
    rsx! {
        table {
            class: "details-list compact",
            thead {
                tr {
                    for col in USER_COLUMNS.iter() {
                        th {
                            key: "{col.key}",
                            style: column_style(col),
                            "{col.name}"
                        }
                    }
                }
            }
            tbody {
                for (i, row) in rows.iter().enumerate() {
                    tr {
                        key: "{i}",
                        class: "details-row",
                        for col in USER_COLUMNS.iter() {
                            td {
                                class: "details-cell",
                                title: row.cell(col.key),
                                "{row.cell(col.key)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
