use std::{collections::HashMap, sync::Arc};

use anyhow::{anyhow, Result};
use js_sys::{Object, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a JS object { "data/points.geojson": Uint8Array, ... } to an in-memory source.
pub(crate) fn js_files_to_source(files: JsValue) -> Result<geolayers_core::MemSource> {
    let obj: Object = files.dyn_into().map_err(|_| anyhow!("files must be an object"))?;
    let keys = Object::keys(&obj);

    let mut map: HashMap<String, Arc<[u8]>> = HashMap::with_capacity(keys.length() as usize);

    for i in 0..keys.length() {
        let k = keys.get(i).as_string().ok_or_else(|| anyhow!("non-string key"))?;
        let v = Reflect::get(&obj, &JsValue::from_str(&k))
            .map_err(|e| anyhow!("error getting property '{}': {:?}", k, e))?;

        // Accept Uint8Array-like values
        let u8arr = Uint8Array::new(&v);
        let mut buf = vec![0u8; u8arr.length() as usize];
        u8arr.copy_to(&mut buf[..]);

        map.insert(k, Arc::from(buf));
    }

    Ok(geolayers_core::MemSource::new(map))
}

/// Serialize through a JSON string and let the browser parse it; cheaper
/// than building large JS objects field by field.
pub(crate) fn json_to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    let json_string = serde_json::to_string(value)
        .map_err(|e| js_err(format!("Failed to serialize GeoJSON to string: {}", e)))?;

    js_sys::JSON::parse(&json_string)
        .map_err(|e| js_err(format!("Failed to parse GeoJSON string: {:?}", e)))
}

pub(crate) fn parse_overlay(name: &str) -> Result<geolayers_core::Overlay> {
    geolayers_core::Overlay::from_label(name)
        .ok_or_else(|| anyhow!("Unknown overlay {:?}. Expected one of: Boundary, Locations", name))
}

pub(crate) fn console_status(status: &geolayers_core::Status) {
    let msg = JsValue::from_str(&status.to_string());
    if status.is_error() {
        web_sys::console::error_1(&msg);
    } else {
        web_sys::console::log_1(&msg);
    }
}
