use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

use crate::components::utils::{debounce, first_image_file};
use crate::{Model, Msg};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_image_file);

        input.set_value("");

        match file {
            Some(file) => Msg::FileSelected(file),
            None => Msg::SetError(Some("No valid image file selected.".into())),
        }
    });

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="upload-section">
            <form id="upload-form" onsubmit={handle_submit}>
                <input
                    type="file"
                    id="file-input"
                    accept="image/*"
                    style="display: none;"
                    onchange={handle_change}
                />

                <div
                    id="drop-zone"
                    class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                    ondragover={handle_drag_over}
                    ondragleave={handle_drag_leave}
                    ondrop={handle_drop}
                    onclick={debounce(300, {
                        let trigger_file_input = trigger_file_input.clone();
                        move || trigger_file_input.emit(())
                    })}
                >
                    { render_capture_preview(model) }
                </div>

                { render_submit_button(model) }
            </form>
        </div>
    }
}

fn render_capture_preview(model: &Model) -> Html {
    if let Some(file_data) = &model.file {
        html! {
            <img id="image-preview"
                src={file_data.preview_url.to_string()}
                alt={file_data.file.name()} />
        }
    } else {
        html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"Drag & drop a leaf photo here, or click to select"}</p>
                <p class="file-types">{"Supported formats: JPG, PNG, WEBP, GIF"}</p>
            </div>
        }
    }
}

fn render_submit_button(model: &Model) -> Html {
    // Revealed once a file is captured, disabled while a request is out.
    let Some(file_data) = &model.file else {
        return html! {};
    };

    html! {
        <button
            id="upload-btn"
            type="submit"
            class="analyze-btn"
            disabled={model.stage.is_submitting()}
        >
            {
                if model.stage.is_submitting() {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    let display_name = short_name(&file_data.file.name());
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{ format!(" Analyze \"{}\"", display_name) }</> }
                }
            }
        </button>
    }
}

fn short_name(filename: &str) -> String {
    if filename.chars().count() > 20 {
        format!("{}...", filename.chars().take(17).collect::<String>())
    } else {
        filename.to_string()
    }
}
