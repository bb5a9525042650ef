//! Todo List Component

use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mshexa_core::live_list::{AddOutcome, ListController, ListMessages};

use crate::commands::{Backend, BrowserDialog};
use crate::context::use_app_context;
use crate::models::{NewTodo, TodoItem, TodoView};
use crate::store::{bind_collection, store_apply_todos, use_app_store, AppStateStoreFields};

type TodoController = ListController<TodoItem, Backend<TodoItem>, BrowserDialog>;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let todos = ctx.config.todos;

    let controller = Rc::new(TodoController::new(
        Backend::connect(&todos.collection),
        BrowserDialog,
        ListMessages::TODOS,
    ));
    bind_collection(controller.collection(), todos.fetch_limit, move |event| {
        store_apply_todos(&store, event)
    });
    let controller = StoredValue::new_local(controller);

    let view_model = Memo::new(move |_| TodoView::render(store.todos().read().items()));

    let task = RwSignal::new(String::new());
    let adding = RwSignal::new(false);
    let input_ref = NodeRef::<html::Input>::new();

    let add_todo = move || {
        if adding.get_untracked() {
            return;
        }
        let Some(new_todo) = task.with_untracked(|text| NewTodo::from_input(text)) else {
            return;
        };
        let controller = controller.get_value();
        adding.set(true);
        spawn_local(async move {
            if let AddOutcome::Added(_) = controller.add(new_todo).await {
                task.set(String::new());
            }
            adding.set(false);
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    };

    let toggle = move |id: String, completed: bool| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.toggle(&id, completed).await;
        });
    };

    let remove = move |id: String| {
        let controller = controller.get_value();
        spawn_local(async move {
            let _ = controller.delete(&id).await;
        });
    };

    view! {
        <section class="card todo-card">
            <h2>"待辦事項"</h2>
            <div class="todo-form">
                <input
                    id="todoInput"
                    type="text"
                    placeholder="新增待辦事項..."
                    node_ref=input_ref
                    prop:value=move || task.get()
                    on:input=move |ev| task.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_todo();
                        }
                    }
                />
                <button
                    id="addTodoBtn"
                    type="button"
                    prop:disabled=move || adding.get()
                    on:click=move |_| add_todo()
                >
                    "新增"
                </button>
            </div>
            <ul id="todoList" class="todo-list">
                {move || {
                    let view_model = view_model.get();
                    if view_model.show_placeholder() {
                        return view! { <div class="no-data">"目前沒有待辦事項"</div> }.into_any();
                    }
                    view_model.rows.into_iter().map(|row| {
                        let toggle_id = row.id.clone();
                        let delete_id = row.id.clone();
                        let completed = row.completed;
                        let class = row.class();
                        view! {
                            <li class=class>
                                <div class="todo-content" on:click=move |_| toggle(toggle_id.clone(), completed)>
                                    <div class=if completed { "checkbox-custom checked" } else { "checkbox-custom" }></div>
                                    <span class="todo-text">{row.task}</span>
                                </div>
                                <button class="delete-btn" on:click=move |_| remove(delete_id.clone())>"×"</button>
                            </li>
                        }
                    }).collect_view().into_any()
                }}
            </ul>
        </section>
    }
}
