//! API клиент для UseCase u101

use crate::shared::api_utils::{api_base, api_url};
use contracts::usecases::u101_process_pdf::{ArtifactKind, UploadResponse};
use wasm_bindgen::JsCast;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// Отправить PDF на обработку
///
/// Multipart POST с единственным полем `file`. Сервис отвечает JSON-ом с
/// локаторами готовых артефактов.
pub async fn upload_pdf(file: web_sys::File) -> Result<UploadResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url("/upload");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: UploadResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Получить бинарное тело одного артефакта по его идентификатору
pub async fn fetch_artifact(kind: ArtifactKind, filename: &str) -> Result<Vec<u8>, String> {
    let url = format!(
        "{}{}?filename={}",
        api_base(),
        kind.endpoint_path(),
        urlencoding::encode(filename)
    );

    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}
