//! Utilidades de comunicación frontend-backend
//!
//! Construcción de URLs del API y helpers de fetch sobre web_sys.

use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// URL base del API
///
/// Se arma desde la ubicación actual de la ventana, siempre con el puerto
/// 3000 del backend.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// URL completa del API a partir de un path
///
/// # Ejemplo
/// ```rust,ignore
/// let url = api_url("/api/producto/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Intenta extraer el mensaje de `{"error": "..."}` de una respuesta fallida
fn extract_error(text: &str, status: u16) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        error: Option<String>,
    }
    if let Ok(data) = serde_json::from_str::<ErrorResponse>(text) {
        if let Some(msg) = data.error {
            return msg;
        }
    }
    format!("HTTP {}: {}", status, text)
}

async fn run_request<T: serde::de::DeserializeOwned>(
    request: Request,
) -> Result<T, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let status = resp.status();
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if status == 404 {
        return Err("No encontrado".to_string());
    }
    if !resp.ok() {
        return Err(extract_error(&text, status));
    }

    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// GET con respuesta JSON
pub async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    run_request(request).await
}

/// POST de un cuerpo JSON con respuesta JSON
pub async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    run_request(request).await
}

/// POST sin cuerpo (acciones tipo /post, /enviar_sunat)
pub async fn post_empty<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    run_request(request).await
}

/// DELETE; el backend responde sin cuerpo
pub async fn delete_request(path: &str) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 404 {
        return Err("No encontrado".to_string());
    }
    if !resp.ok() {
        let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        let text: String = text.as_string().unwrap_or_default();
        return Err(extract_error(&text, resp.status()));
    }
    Ok(())
}
