use anyhow::Context;
use leptos::*;
use std::cell::RefCell;
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};

pub mod actions;
pub mod api;
pub mod charts;
mod components;
pub mod config;
pub mod error;
pub mod pages;
#[cfg(test)]
mod test_support;

pub use actions::ActionRegistry;
pub use error::DashboardError;
pub use pages::dashboard::{DashboardController, DashboardDeps, DASHBOARD_ACTION_TAG};

/// Element the dashboard mounts into automatically when present.
pub const MOUNT_POINT_ID: &str = "shopping-dashboard";

thread_local! {
    static REGISTRY: RefCell<Option<ActionRegistry>> = const { RefCell::new(None) };
}

/// Every client action this bundle provides.
pub fn register_client_actions(
    registry: &mut ActionRegistry,
    deps: DashboardDeps,
) -> Result<(), DashboardError> {
    pages::dashboard::register(registry, deps)
}

fn bootstrap() -> anyhow::Result<ActionRegistry> {
    let mut registry = ActionRegistry::new();
    register_client_actions(&mut registry, DashboardDeps::browser())
        .context("registering client actions")?;
    Ok(registry)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::error_1(&format!("logger already initialized: {}", err).into());
    }
    log::set_max_level(log::LevelFilter::Info);
    log::info!("Starting shopping dashboard (wasm)");

    // Non-blocking; API calls await the same config before their first request.
    spawn_local(async move {
        let cfg = config::init().await;
        log::debug!("Runtime config initialized: {:?}", cfg);
    });

    match bootstrap() {
        Ok(registry) => REGISTRY.with(|r| *r.borrow_mut() = Some(registry)),
        Err(err) => {
            log::error!("{:#}", err);
            return;
        }
    }

    let has_mount_point = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
        .is_some();
    if has_mount_point {
        if let Err(err) = mount_client_action(DASHBOARD_ACTION_TAG, MOUNT_POINT_ID) {
            log::error!("failed to mount dashboard: {:?}", err);
        }
    }
}

/// Opens the client action registered under `tag` inside `#element_id`.
#[wasm_bindgen]
pub fn mount_client_action(tag: &str, element_id: &str) -> Result<(), JsValue> {
    let factory = REGISTRY
        .with(|r| r.borrow().as_ref().and_then(|registry| registry.get(tag)))
        .ok_or_else(|| JsValue::from_str(&format!("unknown client action `{}`", tag)))?;
    let parent = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", element_id)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| JsValue::from_str("mount point is not an HTML element"))?;
    log::info!("mounting client action `{}` into #{}", tag, element_id);
    mount_to(parent, move || factory());
    Ok(())
}
