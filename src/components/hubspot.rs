use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;

use crate::config;

/// Mounts the HubSpot lead-capture form into the demo modal. Called once at
/// startup; when the embed script has not loaded the form is skipped without
/// retry and the rest of the page works normally.
pub fn mount_form() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let hbspt = match js_sys::Reflect::get(&window, &JsValue::from_str("hbspt")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => {
            info!("hbspt global not present, skipping form embed");
            return;
        }
    };

    let options = js_sys::Object::new();
    for (key, value) in [
        ("portalId", config::HUBSPOT_PORTAL_ID),
        ("formId", config::HUBSPOT_FORM_ID),
        ("region", config::HUBSPOT_REGION),
        ("target", config::HUBSPOT_TARGET),
    ] {
        if js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value))
            .is_err()
        {
            warn!("failed to set HubSpot option {}", key);
            return;
        }
    }

    let forms = match js_sys::Reflect::get(&hbspt, &JsValue::from_str("forms")) {
        Ok(forms) => forms,
        Err(err) => {
            warn!("hbspt.forms missing: {:?}", err);
            return;
        }
    };

    let create = match js_sys::Reflect::get(&forms, &JsValue::from_str("create")) {
        Ok(create) => create,
        Err(err) => {
            warn!("hbspt.forms.create missing: {:?}", err);
            return;
        }
    };

    let Ok(create) = create.dyn_into::<js_sys::Function>() else {
        warn!("hbspt.forms.create is not a function");
        return;
    };

    match create.call1(&forms, &options) {
        Ok(_) => info!("HubSpot form mounted"),
        Err(err) => warn!("HubSpot form embed failed: {:?}", err),
    }
}
