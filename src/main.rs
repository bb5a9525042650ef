#![allow(warnings)]
//! MS Hexa Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::Level::Info);
    mount_to_body(App);
}
