//! Offline asset caching registration.
//!
//! Registers the host's service worker script so the viewer bundle and report
//! assets stay available offline. Registration is fire-and-forget: failures
//! are logged and never affect what was rendered. Requires a browser
//! environment.

#[cfg(test)]
#[path = "service_worker_test.rs"]
mod service_worker_test;

/// Path the host server serves the service worker script from.
pub const SERVICE_WORKER_PATH: &str = "/service-worker.js";

/// Start service worker registration. No-op outside the browser or when the
/// browser has no service worker support (e.g. insecure origins).
pub fn register_service_worker() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
        if !supported {
            log::info!("service workers unavailable; offline caching disabled");
            return;
        }

        let promise = navigator.service_worker().register(SERVICE_WORKER_PATH);
        wasm_bindgen_futures::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => log::debug!("service worker registered at {SERVICE_WORKER_PATH}"),
                Err(e) => log::warn!("service worker registration failed: {e:?}"),
            }
        });
    }
}
