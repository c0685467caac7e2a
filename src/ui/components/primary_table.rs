use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use tracing::debug;

use crate::domain::entities::edit::{CellKey, CellMode};
use crate::domain::entities::record::VALUE_FIELD;
use crate::ui::components::columns::primary_columns;
use crate::ui::components::data_table::{
    CELL_STYLE, HEADER_CELL_STYLE, SECTION_TITLE_STYLE, TABLE_STYLE,
};
use crate::ui::services::Services;
use crate::usecase::primary_table::PrimaryTable;
use crate::usecase::services::edit_service::{EditService, SubmitTask};

fn spawn_submit(task: Option<SubmitTask>) {
    if let Some(task) = task {
        // Outlives the view so leaving the page does not drop the write.
        let _ = spawn_forever(task);
    }
}

fn commit(mut table: Signal<PrimaryTable>, edits: &EditService) {
    if let Ok(task) = edits.commit(&mut table.write()) {
        spawn_submit(task);
    }
}

fn activate(mut table: Signal<PrimaryTable>, edits: &EditService, cell: CellKey) {
    match edits.activate(&mut table.write(), cell) {
        Ok(task) => spawn_submit(task),
        Err(err) => debug!(error = %err, "activation rejected, open edit kept"),
    }
}

/// "Primary Node Info": key/value rows where only the IP value is editable.
/// Enter and losing focus both commit.
#[component]
pub fn PrimaryNodeTable(mut table: Signal<PrimaryTable>) -> Element {
    let services = use_context::<Services>();
    let snapshot = table.read().clone();
    let error_message = snapshot.editor().error().map(ToString::to_string);
    let pending = snapshot
        .editor()
        .session()
        .map(|session| session.pending_value.clone())
        .unwrap_or_default();

    rsx! {
        section {
            h1 { style: SECTION_TITLE_STYLE, "Primary Node Info" }
            table { style: TABLE_STYLE,
                thead {
                    tr {
                        {primary_columns().into_iter().map(|column| rsx!(
                            th { key: "{column.field}", style: HEADER_CELL_STYLE, "{column.title}" }
                        ))}
                    }
                }
                tbody {
                    {snapshot.records().iter().map(|record| {
                        let cell = CellKey::new(record.key.clone(), VALUE_FIELD);
                        let editable = snapshot.can_edit(&cell);
                        let editing = snapshot.mode(&cell) == CellMode::Editing;
                        let edits_for_enter = services.edits.clone();
                        let edits_for_blur = services.edits.clone();
                        let edits_for_click = services.edits.clone();
                        let error_message = error_message.clone();
                        let pending = pending.clone();
                        let value = record.value.clone();
                        rsx!(
                            tr { key: "{record.key}",
                                td { style: CELL_STYLE, "{record.key}" }
                                if editing {
                                    td { style: CELL_STYLE,
                                        input {
                                            value: "{pending}",
                                            oninput: move |event| {
                                                table.write().input(event.value());
                                            },
                                            onkeydown: move |event| {
                                                if event.key() == Key::Enter {
                                                    commit(table, &edits_for_enter);
                                                }
                                            },
                                            onblur: move |_| commit(table, &edits_for_blur),
                                            onmounted: move |event| async move {
                                                let _ = event.set_focus(true).await;
                                            },
                                        }
                                        {error_message.map(|message| rsx!(
                                            div { style: "color: #cf1322; font-size: 12px;", "{message}" }
                                        ))}
                                    }
                                } else {
                                    td {
                                        style: "{CELL_STYLE} padding-right: 24px;",
                                        onclick: move |_| activate(table, &edits_for_click, cell.clone()),
                                        span { "{value}" }
                                        if editable {
                                            span { style: "margin-left: 16px;", "✎" }
                                        }
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    }
}
