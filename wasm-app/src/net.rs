//! The one outbound request: multipart POST to the analysis service.
//!
//! Classifies the result into the core's three outcome classes. A
//! non-ok status with a decodable body is a reported failure; anything
//! that yields no decodable response at all (network error, or a body
//! that is not the JSON we expect) is `Unreachable`.

use classlens::{AnalysisResult, SubmitOutcome, SubmitRequest};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, File, FormData, RequestInit, Response};

/// Optional `error` field of a failure body.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub async fn submit(request: SubmitRequest, file: &File) -> SubmitOutcome {
    match try_submit(request, file).await {
        Ok(outcome) => outcome,
        Err(err) => {
            console::error_1(&err);
            SubmitOutcome::Unreachable
        }
    }
}

async fn try_submit(request: SubmitRequest, file: &File) -> Result<SubmitOutcome, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob(request.field, file)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str_and_init(request.endpoint, &init))
        .await?
        .dyn_into()?;

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();

    if response.ok() {
        // A success status with an undecodable body takes the same
        // path as a transport failure; the renderer never sees it.
        Ok(match serde_json::from_str::<AnalysisResult>(&body) {
            Ok(result) => SubmitOutcome::Success(Box::new(result)),
            Err(_) => SubmitOutcome::Unreachable,
        })
    } else {
        Ok(match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { error }) => SubmitOutcome::Rejected { message: error },
            Err(_) => SubmitOutcome::Unreachable,
        })
    }
}
