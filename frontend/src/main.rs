use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{DiagnosisView, Stage};
use web_sys::DragEvent;
use yew::prelude::*;

mod components;

use components::chatbot::ChatbotPanel;
use components::weather::WeatherPanel;
use components::{handlers, header, results, theme_toggle, upload_section, utils};

// Models
#[derive(Clone)]
pub struct FileData {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Diagnose,
    Assistant,
    Weather,
}

// Yew msg components
pub enum Msg {
    // File operations
    FileSelected(GlooFile),

    // Diagnosis flow
    Submit,
    DiagnosisReceived(DiagnosisView),
    Reset,

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    SwitchTab(Tab),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    pub tab: Tab,
    pub stage: Stage,
    pub file: Option<FileData>,
    pub error: Option<String>,
    pub is_dragging: bool,
    pub theme: String,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: Tab::Diagnose,
            stage: Stage::Idle,
            file: None,
            error: None,
            is_dragging: false,
            theme: theme_toggle::stored_theme(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileSelected(file) => handlers::handle_file_selected(self, file),

            // Diagnosis flow
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::DiagnosisReceived(view) => handlers::handle_diagnosis_received(self, view),
            Msg::Reset => handlers::handle_reset(self),

            // UI states
            Msg::SetError(error) => {
                self.error = error;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::SwitchTab(tab) => handlers::handle_switch_tab(self, tab),
            Msg::ToggleTheme => theme_toggle::handle_toggle_theme(self),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header(self, ctx) }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                {
                    match self.tab {
                        Tab::Diagnose => html! {
                            <>
                                { upload_section::render_upload_section(self, ctx) }
                                { utils::render_error_message(self) }
                                { results::render_results(self, ctx) }
                            </>
                        },
                        Tab::Assistant => html! { <ChatbotPanel /> },
                        Tab::Weather => html! { <WeatherPanel /> },
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"AI Crop Disease Detection | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
