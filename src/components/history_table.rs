//! History Table Component
//!
//! Soul / fragment counts entered over time, newest first, each row showing
//! the change against the record before it. Double-click a row to delete.

use std::rc::Rc;

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mshexa_core::delta::Delta;
use mshexa_core::live_list::{AddOutcome, ListController, ListMessages, Prompter};

use crate::commands::{Backend, BrowserDialog};
use crate::context::use_app_context;
use crate::models::{HistoryView, NewRecord, Record};
use crate::store::{bind_collection, store_apply_records, use_app_store, AppStateStoreFields};

type RecordController = ListController<Record, Backend<Record>, BrowserDialog>;

#[component]
pub fn HistoryTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let history = ctx.config.history;
    let display_limit = history.display_limit;

    let controller = Rc::new(RecordController::new(
        Backend::connect(&history.collection),
        BrowserDialog,
        ListMessages::RECORDS,
    ));
    bind_collection(controller.collection(), history.fetch_limit, move |event| {
        store_apply_records(&store, event)
    });
    let controller = StoredValue::new_local(controller);

    let view_model = Memo::new(move |_| HistoryView::render(store.records().read().items(), display_limit));

    let soul = RwSignal::new(String::new());
    let fragment = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let at = Local::now().naive_local();
        let parsed = soul.with_untracked(|soul| {
            fragment.with_untracked(|fragment| NewRecord::from_inputs(soul, fragment, at))
        });
        let new_record = match parsed {
            Ok(record) => record,
            Err(e) => {
                controller.with_value(|c| c.prompter().alert(&e.to_string()));
                return;
            }
        };

        let controller = controller.get_value();
        saving.set(true);
        spawn_local(async move {
            if let AddOutcome::Added(_) = controller.add(new_record).await {
                soul.set(String::new());
                fragment.set(String::new());
            }
            saving.set(false);
        });
    };

    let on_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let both_filled = soul.with_untracked(|s| !s.is_empty()) && fragment.with_untracked(|f| !f.is_empty());
        if both_filled {
            submit();
        }
    };

    let delete_record = move |id: String| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.delete(&id).await;
        });
    };

    view! {
        <section class="card history-card">
            <h2>"紀錄"</h2>
            <div class="record-form">
                <input
                    id="soulInput"
                    type="text"
                    inputmode="numeric"
                    placeholder="靈魂"
                    prop:value=move || soul.get()
                    on:input=move |ev| soul.set(event_target_value(&ev))
                    on:keydown=on_enter
                />
                <input
                    id="fragmentInput"
                    type="text"
                    inputmode="numeric"
                    placeholder="碎片"
                    prop:value=move || fragment.get()
                    on:input=move |ev| fragment.set(event_target_value(&ev))
                    on:keydown=on_enter
                />
                <button
                    id="confirmBtn"
                    type="button"
                    prop:disabled=move || saving.get()
                    on:click=move |_| submit()
                >
                    {move || if saving.get() { "儲存中..." } else { "確認輸入" }}
                </button>
            </div>

            <table class="history-table">
                <thead>
                    <tr>
                        <th>"日期"</th>
                        <th>"時間"</th>
                        <th>"靈魂"</th>
                        <th>"變化"</th>
                        <th>"碎片"</th>
                        <th>"變化"</th>
                    </tr>
                </thead>
                <tbody id="historyBody">
                    {move || view_model.get().rows.into_iter().map(|row| {
                        let id = row.id.clone();
                        view! {
                            <tr
                                title="點擊兩下刪除此紀錄"
                                style="cursor: pointer;"
                                on:dblclick=move |_| delete_record(id.clone())
                            >
                                <td>{row.date}</td>
                                <td>{row.time}</td>
                                <td class="soul-val">{row.soul}</td>
                                <td class="diff-cell">{row.soul_delta.map(delta_badge)}</td>
                                <td class="fragment-val">{row.fragment}</td>
                                <td class="diff-cell">{row.fragment_delta.map(delta_badge)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            <div
                id="noDataMsg"
                class="no-data"
                style:display=move || if view_model.with(|v| v.show_placeholder()) { "block" } else { "none" }
            >
                "尚無紀錄"
            </div>
        </section>
    }
}

fn delta_badge(delta: Delta) -> impl IntoView {
    view! {
        <span class=format!("diff-val {}", delta.tone.css_class())>{delta.label()}</span>
    }
}
