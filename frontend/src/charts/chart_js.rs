use super::{ChartError, ChartHandle, ChartRenderer, ChartSpec};
use js_sys::{Array, Function, Reflect};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};
use wasm_bindgen::{JsCast, JsValue};

/// Draws charts with the page's global `Chart` constructor (Chart.js).
pub struct ChartJsRenderer {
    constructor: Function,
    instances: RefCell<HashMap<ChartHandle, JsValue>>,
    next_id: Cell<u32>,
}

impl ChartJsRenderer {
    /// Looks up `window.Chart`. Fails with [`ChartError::Unavailable`] when
    /// the library was not loaded.
    pub fn detect() -> Result<Self, ChartError> {
        let window = web_sys::window().ok_or(ChartError::Unavailable)?;
        let constructor = Reflect::get(&window, &"Chart".into())
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(ChartError::Unavailable)?;
        Ok(Self {
            constructor,
            instances: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        })
    }

    fn render_error(target_id: &str, reason: impl Into<String>) -> ChartError {
        ChartError::Render {
            target: target_id.to_string(),
            reason: reason.into(),
        }
    }
}

impl ChartRenderer for ChartJsRenderer {
    fn render(&self, target_id: &str, spec: &ChartSpec) -> Result<ChartHandle, ChartError> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(target_id))
            .ok_or_else(|| ChartError::TargetMissing(target_id.to_string()))?;

        let raw = serde_json::to_string(spec).map_err(|e| Self::render_error(target_id, e.to_string()))?;
        let config = js_sys::JSON::parse(&raw)
            .map_err(|e| Self::render_error(target_id, format!("{:?}", e)))?;

        let instance = Reflect::construct(&self.constructor, &Array::of2(&canvas, &config))
            .map_err(|e| Self::render_error(target_id, format!("{:?}", e)))?;

        let handle = ChartHandle(self.next_id.get());
        self.next_id.set(handle.0.wrapping_add(1));
        self.instances.borrow_mut().insert(handle, instance);
        Ok(handle)
    }

    fn destroy(&self, handle: ChartHandle) {
        let Some(instance) = self.instances.borrow_mut().remove(&handle) else {
            return;
        };
        let destroy = Reflect::get(&instance, &"destroy".into())
            .and_then(|value| value.dyn_into::<Function>().map_err(JsValue::from));
        match destroy {
            Ok(destroy) => {
                if let Err(err) = destroy.call0(&instance) {
                    log::warn!("Chart.destroy() failed: {:?}", err);
                }
            }
            Err(_) => log::warn!("chart instance {:?} has no destroy()", handle),
        }
    }
}
