use yew::prelude::*;

use crate::{Model, Msg, Tab};

/// Renders the application header with the view switcher
pub fn render_header(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let tab_button = |tab: Tab, icon: &'static str, label: &'static str| {
        html! {
            <button
                class={classes!("tab-btn", (model.tab == tab).then_some("active"))}
                onclick={link.callback(move |_| Msg::SwitchTab(tab))}
            >
                <i class={icon}></i>{ format!(" {}", label) }
            </button>
        }
    };

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-seedling"></i>{" AI Crop Disease Detection"}</h1>
            <p class="subtitle">{"Upload a leaf photo for diagnosis and treatment advice"}</p>
            <nav class="tab-nav">
                { tab_button(Tab::Diagnose, "fa-solid fa-camera", "Diagnose") }
                { tab_button(Tab::Assistant, "fa-solid fa-comments", "Assistant") }
                { tab_button(Tab::Weather, "fa-solid fa-cloud-sun", "Weather") }
            </nav>
        </header>
    }
}
