//! Dataset retrieval over the browser fetch API.
//!
//! This is the sole suspension point in the app: the dataset is awaited
//! here before any scale derivation runs. Failures surface as strings for
//! the error display; the app renders nothing and retries nothing.

use glt_core::dataset::Dataset;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Upstream source: monthly global land-surface temperature variance.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// GET `url` and parse the body as a temperature dataset.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, String> {
    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {e:?}"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "not a Response".to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let body = text.as_string().ok_or_else(|| "not a string".to_string())?;

    Dataset::from_json(&body).map_err(|e| e.to_string())
}
