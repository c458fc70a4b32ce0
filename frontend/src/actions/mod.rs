mod registry;
mod window;

pub use registry::{ActionRegistry, ClientActionFactory};
pub use window::{ActionTarget, ViewRef, WindowAction, ACT_WINDOW};

use wasm_bindgen::JsValue;

pub const DO_ACTION_EVENT: &str = "shopping:do_action";

/// Hands window actions to whatever owns navigation.
pub trait ActionDispatcher {
    fn do_action(&self, action: WindowAction);
}

/// Emits each action as a `shopping:do_action` `CustomEvent` on `window`,
/// with the serialized action as `detail`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserActionDispatcher;

impl BrowserActionDispatcher {
    fn emit(action: &WindowAction) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let raw = serde_json::to_string(action).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let detail = js_sys::JSON::parse(&raw)?;
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        let event = web_sys::CustomEvent::new_with_event_init_dict(DO_ACTION_EVENT, &init)?;
        window.dispatch_event(&event)?;
        Ok(())
    }
}

impl ActionDispatcher for BrowserActionDispatcher {
    fn do_action(&self, action: WindowAction) {
        log::debug!("dispatching {} for {}", action.action_type, action.res_model);
        if let Err(err) = Self::emit(&action) {
            log::error!("failed to dispatch action for {}: {:?}", action.res_model, err);
        }
    }
}
