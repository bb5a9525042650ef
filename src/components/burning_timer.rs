//! Burning Timer Component
//!
//! Counts down the current burning level once per second; the reset button
//! restores the top level and restarts the countdown.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use mshexa_core::timer::{BurningTimer, TickOutcome};

use crate::context::use_app_context;

const TICK_MILLIS: u32 = 1_000;

#[component]
pub fn BurningTimerPanel() -> impl IntoView {
    let ctx = use_app_context();
    let timer = RwSignal::new(BurningTimer::from_config(&ctx.config.timer));
    let interval = StoredValue::new_local(None::<Interval>);

    let start = move || {
        // Dropping the old handle clears it; only one interval runs
        interval.set_value(None);
        let handle = Interval::new(TICK_MILLIS, move || {
            let mut outcome = TickOutcome::Counting;
            timer.update(|t| outcome = t.tick());
            match outcome {
                TickOutcome::LevelDropped(level) => log::info!("[timer] burning level dropped to {}", level),
                TickOutcome::CycleRestarted => log::debug!("[timer] cycle restarted at level 0"),
                TickOutcome::Counting => {}
            }
        });
        interval.set_value(Some(handle));
    };

    let reset = move |_: web_sys::MouseEvent| {
        timer.update(|t| t.reset());
        log::info!("[timer] reset to level {}", timer.with_untracked(|t| t.level()));
        start();
    };

    start();
    on_cleanup(move || interval.set_value(None));

    view! {
        <section class="card timer-card">
            <h2>"燃燒場倒數"</h2>
            <div class="timer-row">
                <span class="timer-label">"燃燒等級"</span>
                <span id="burningLevel" class="burning-level">{move || timer.with(|t| t.level())}</span>
            </div>
            <div class="timer-row">
                <span class="timer-label">"下次降級"</span>
                <span id="timerDisplay" class="timer-display">{move || timer.with(|t| t.display())}</span>
            </div>
            <button id="resetTimerBtn" type="button" on:click=reset>"重置"</button>
        </section>
    }
}
