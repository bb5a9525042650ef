//! Exchange Calculator Component
//!
//! Rate / NTD / Mesos inputs that derive each other on every keystroke,
//! with the Mesos amount spelled out in 億/萬 below.

use leptos::prelude::*;

use mshexa_core::conversion::{clear_zero_on_focus, normalize_on_blur, ConversionInputs, Converter, Field};

use crate::context::use_app_context;

#[component]
pub fn ExchangeCalculator() -> impl IntoView {
    let ctx = use_app_context();
    let converter = Converter::new(ctx.config.unit_multiplier);

    let rate = RwSignal::new(String::new());
    let ntd = RwSignal::new(String::new());
    let mesos = RwSignal::new(String::new());
    let chinese = RwSignal::new(String::new());

    let recompute = move |changed: Field| {
        let update = rate.with_untracked(|rate| {
            ntd.with_untracked(|ntd| {
                mesos.with_untracked(|mesos| {
                    converter.recompute(&ConversionInputs { rate, ntd, mesos }, changed)
                })
            })
        });
        if let Some(value) = update.ntd {
            ntd.set(value);
        }
        if let Some(value) = update.mesos {
            mesos.set(value);
        }
        if let Some(value) = update.chinese {
            chinese.set(value);
        }
    };

    let on_input = move |field: RwSignal<String>, changed: Field| {
        move |ev: web_sys::Event| {
            field.set(event_target_value(&ev));
            recompute(changed);
        }
    };

    let on_blur = move |field: RwSignal<String>| {
        move |_: web_sys::FocusEvent| field.update(|text| *text = normalize_on_blur(text))
    };

    let on_focus = move |field: RwSignal<String>| {
        move |_: web_sys::FocusEvent| {
            if let Some(cleared) = field.with_untracked(|text| clear_zero_on_focus(text)) {
                field.set(cleared);
            }
        }
    };

    view! {
        <section class="card exchange-card">
            <h2>"匯率換算"</h2>
            <div class="input-group">
                <label for="rateType">"匯率 (萬楓幣 / 1 台幣)"</label>
                <input
                    id="rateType"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || rate.get()
                    on:input=on_input(rate, Field::Rate)
                />
            </div>
            <div class="input-group">
                <label for="ntdInput">"台幣"</label>
                <input
                    id="ntdInput"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || ntd.get()
                    on:input=on_input(ntd, Field::Ntd)
                    on:blur=on_blur(ntd)
                    on:focus=on_focus(ntd)
                />
            </div>
            <div class="input-group">
                <label for="mesosInput">"楓幣"</label>
                <input
                    id="mesosInput"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || mesos.get()
                    on:input=on_input(mesos, Field::Mesos)
                    on:blur=on_blur(mesos)
                    on:focus=on_focus(mesos)
                />
                <div id="mesosChineseDisplay" class="chinese-display">{move || chinese.get()}</div>
            </div>
        </section>
    }
}
