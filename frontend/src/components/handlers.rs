use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_net::http::Request;
use shared::report::transport_failure;
use shared::{DiagnosisResponse, DiagnosisView};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

use crate::components::utils::first_image_file;
use crate::{FileData, Model, Msg, Tab};

pub fn handle_file_selected(model: &mut Model, file: GlooFile) -> bool {
    if model.stage.is_submitting() {
        return false;
    }

    let preview_url = ObjectUrl::from(file.clone());
    model.file = Some(FileData { file, preview_url });
    model.error = None;
    model.stage.file_selected();
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(file_data) = model.file.as_ref() else {
        model.error = Some("Please select an image first!".into());
        return true;
    };

    if !model.stage.begin_submission() {
        return false;
    }

    model.error = None;
    send_predict_request(ctx, file_data.file.clone());
    true
}

pub fn handle_diagnosis_received(model: &mut Model, view: DiagnosisView) -> bool {
    model.stage.finish(view);
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.file = None;
    model.error = None;
    model.stage.reset();
    true
}

pub fn handle_switch_tab(model: &mut Model, tab: Tab) -> bool {
    if model.tab == tab {
        return false;
    }
    model.tab = tab;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        match first_image_file(&file_list) {
            Some(file) => ctx.link().send_message(Msg::FileSelected(file)),
            None => ctx
                .link()
                .send_message(Msg::SetError(Some("No valid image file dropped.".into()))),
        }
    }

    true
}

pub fn send_predict_request(ctx: &Context<Model>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let form_data = web_sys::FormData::new().unwrap();
            form_data.append_with_blob("file", file.as_ref()).unwrap();

            let request = Request::post("/api/predict")
                .body(form_data)
                .expect("Failed to build request.");

            // The service sends well-formed JSON failure bodies with 4xx/5xx
            // statuses, so the body is parsed regardless of status.
            let view = match request.send().await {
                Ok(response) => match response.json::<DiagnosisResponse>().await {
                    Ok(data) => DiagnosisView::from_response(&data),
                    Err(e) => {
                        gloo_console::error!(format!("Failed to parse response: {}", e));
                        DiagnosisView::Failure(transport_failure(e))
                    }
                },
                Err(e) => {
                    gloo_console::error!(format!("Prediction request failed: {}", e));
                    DiagnosisView::Failure(transport_failure(e))
                }
            };

            link.send_message(Msg::DiagnosisReceived(view));
        }
    });
}
