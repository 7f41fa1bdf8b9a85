#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod controller;
mod core;
mod dom;
mod error;
mod view;

pub use crate::controller::PanelToggleController;
pub use crate::core::{Panel, PanelModel, ToggleConfig, Trigger};
pub use crate::error::ToggleError;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("panel-toggle starting");

    let document = dom::window_document()
        .ok_or(ToggleError::NoDocument)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let doc = document.clone();
    dom::on_dom_ready(&document, move || {
        if let Err(e) = init(&doc) {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let controller = PanelToggleController::mount(document, ToggleConfig::default())
        .context("mounting panel toggle")?
        .into_result()
        .context("wiring panel triggers")?;
    log::info!("[panel] ready, showing {}", controller.panel().name());
    Ok(())
}
