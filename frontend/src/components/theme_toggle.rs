use gloo_storage::{LocalStorage, Storage};
use yew::html::Scope;
use yew::prelude::*;

use crate::{Model, Msg};

const THEME_KEY: &str = "theme";

/// Theme persisted from the previous visit, applied to the body on load.
pub fn stored_theme() -> String {
    let theme: String = LocalStorage::get(THEME_KEY).unwrap_or_else(|_| "light".to_string());
    set_body_class(theme == "dark");
    theme
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = if model.theme == "light" {
        "dark".to_string()
    } else {
        "light".to_string()
    };

    set_body_class(model.theme == "dark");
    if let Err(e) = LocalStorage::set(THEME_KEY, &model.theme) {
        log::warn!("Could not persist theme: {}", e);
    }
    true
}

fn set_body_class(dark: bool) {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    if dark {
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        body.class_list().remove_1("dark-mode").unwrap();
    }
}

pub fn render_theme_toggle(theme: &str, link: &Scope<Model>) -> Html {
    html! {
        <div class="top-right">
            <button
                id="theme-toggle"
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                title={ if theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
            >
                { if theme == "light" {
                    html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/2600.svg" alt="Sun Icon" class="toggle-icon" /> }
                } else {
                    html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f319.svg" alt="Moon Icon" class="toggle-icon" /> }
                }}
            </button>
        </div>
    }
}
