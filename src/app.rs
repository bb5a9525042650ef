//! MS Hexa Frontend App
//!
//! Companion page with four widgets: exchange calculator, burning timer,
//! history records and to-do list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BurningTimerPanel, ExchangeCalculator, HistoryTable, TodoList};
use crate::context::{load_config, AppContext};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let store = Store::new(AppState::new(&config));

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(store);

    view! {
        <div class="app-layout">
            <h1>"MS Hexa"</h1>
            <div class="widget-row">
                <ExchangeCalculator />
                <BurningTimerPanel />
            </div>
            <div class="widget-row">
                <HistoryTable />
                <TodoList />
            </div>
        </div>
    }
}
