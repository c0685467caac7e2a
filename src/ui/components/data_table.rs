use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::ui::components::table_model::{
    filter_rows, page_count, page_slice, sort_rows, ColumnDef, RowView, SortState, PAGE_SIZE,
};

pub const TABLE_STYLE: &str =
    "border-collapse: collapse; width: 100%; border: 2px solid rgb(0, 0, 0); margin-bottom: 8px;";
pub const HEADER_CELL_STYLE: &str =
    "border: 1px solid #bbb; padding: 6px; background: #343a40; color: #fff; text-align: left;";
pub const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px;";
pub const SECTION_TITLE_STYLE: &str =
    "text-align: center; font-size: 22px; font-weight: bold; margin: 20px 0;";

/// Read-only grid with click-to-sort headers, optional header filters and
/// local pagination.
#[component]
pub fn DataTable(
    title: String,
    columns: Vec<ColumnDef>,
    rows: Vec<RowView>,
    #[props(!optional)] caption: Option<String>,
    on_row_click: Option<EventHandler<usize>>,
) -> Element {
    let mut page = use_signal(|| 0_usize);
    let mut sort = use_signal(|| None::<SortState>);
    let mut filters = use_signal(BTreeMap::<usize, String>::new);

    let mut visible_rows = filter_rows(rows, &filters.read());
    sort_rows(&mut visible_rows, sort());
    let total = visible_rows.len();
    let pages = page_count(total, PAGE_SIZE);
    let current_page = page().min(pages - 1);
    let page_rows = page_slice(&visible_rows, current_page, PAGE_SIZE).to_vec();
    let has_filters = columns.iter().any(|column| column.header_filter);
    let row_cursor = if on_row_click.is_some() { "pointer" } else { "default" };
    let page_label = format!("Page {} of {pages} ({total} rows)", current_page + 1);
    let next_page = current_page + 1;

    rsx! {
        section {
            h1 { style: SECTION_TITLE_STYLE, "{title}" }
            {caption.map(|caption| rsx!(
                p { style: "color: #666; margin: 0 0 6px;", "{caption}" }
            ))}
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        {columns.iter().enumerate().map(|(col_idx, column)| {
                            let marker = match sort() {
                                Some(state) if state.column == col_idx && state.descending => " ▼",
                                Some(state) if state.column == col_idx => " ▲",
                                _ => "",
                            };
                            let label = format!("{}{marker}", column.title);
                            rsx!(
                                th {
                                    key: "{column.field}",
                                    style: "{HEADER_CELL_STYLE} cursor: pointer;",
                                    onclick: move |_| {
                                        sort.set(SortState::toggle(sort(), col_idx));
                                        page.set(0);
                                    },
                                    "{label}"
                                }
                            )
                        })}
                    }
                    if has_filters {
                        tr {
                            {columns.iter().enumerate().map(|(col_idx, column)| {
                                let filterable = column.header_filter;
                                let term = filters.read().get(&col_idx).cloned().unwrap_or_default();
                                rsx!(
                                    th { key: "{column.field}-filter", style: CELL_STYLE,
                                        if filterable {
                                            input {
                                                value: "{term}",
                                                placeholder: "filter",
                                                oninput: move |event| {
                                                    filters.write().insert(col_idx, event.value());
                                                    page.set(0);
                                                }
                                            }
                                        }
                                    }
                                )
                            })}
                        }
                    }
                }
                tbody {
                    {page_rows.into_iter().map(|row| {
                        let index = row.index;
                        rsx!(
                            tr {
                                key: "{index}",
                                style: "cursor: {row_cursor};",
                                onclick: move |_| {
                                    if let Some(handler) = on_row_click {
                                        handler.call(index);
                                    }
                                },
                                {row.cells.into_iter().enumerate().map(|(col_idx, cell)| rsx!(
                                    td { key: "{col_idx}", style: CELL_STYLE, "{cell}" }
                                ))}
                            }
                        )
                    })}
                }
            }
            div { style: "display: flex; gap: 8px; align-items: center; margin-bottom: 24px;",
                button {
                    disabled: current_page == 0,
                    onclick: move |_| page.set(current_page.saturating_sub(1)),
                    "Prev"
                }
                span { "{page_label}" }
                button {
                    disabled: next_page >= pages,
                    onclick: move |_| page.set(next_page),
                    "Next"
                }
            }
        }
    }
}
