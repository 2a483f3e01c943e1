use gloo_net::http::Request;
use shared::{ChatRequest, ChatResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

const GREETING: &str =
    "Namaste! I am your farm assistant. Ask me about crop diseases, fertilizers, or how to use this app.";
const APOLOGY_REPLY: &str = "Sorry, I encountered an error. Please try again!";
const OFFLINE_REPLY: &str =
    "Sorry, I could not connect to the server. Please check your internet connection!";

const QUICK_QUESTIONS: &[&str] = &[
    "How do I use this app?",
    "What does NPK mean on fertilizer bags?",
    "Where can I buy fertilizers at a low price?",
    "How do I prevent tomato blight?",
];

#[derive(Clone, PartialEq)]
enum Author {
    User,
    Bot,
}

#[derive(Clone, PartialEq)]
struct ChatEntry {
    author: Author,
    text: String,
}

pub enum ChatMsg {
    SetDraft(String),
    Send,
    AskQuick(&'static str),
    ReplyReceived(String),
}

/// Support chatbot transcript. The server is stateless per call; the
/// transcript lives only in this component.
pub struct ChatbotPanel {
    entries: Vec<ChatEntry>,
    draft: String,
    awaiting_reply: bool,
    transcript_ref: NodeRef,
}

impl Component for ChatbotPanel {
    type Message = ChatMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            entries: vec![ChatEntry {
                author: Author::Bot,
                text: GREETING.to_string(),
            }],
            draft: String::new(),
            awaiting_reply: false,
            transcript_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatMsg::SetDraft(text) => {
                self.draft = text;
                true
            }
            ChatMsg::Send => self.handle_send(ctx),
            ChatMsg::AskQuick(question) => {
                self.draft = question.to_string();
                self.handle_send(ctx)
            }
            ChatMsg::ReplyReceived(text) => {
                self.awaiting_reply = false;
                self.entries.push(ChatEntry {
                    author: Author::Bot,
                    text,
                });
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // keep the newest message in view
        if let Some(el) = self.transcript_ref.cast::<Element>() {
            el.set_scroll_top(el.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatMsg::SetDraft(input.value())
        });

        let onkeypress = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then(|| {
                e.prevent_default();
                ChatMsg::Send
            })
        });

        html! {
            <div class="chat-panel">
                <div class="chat-messages" ref={self.transcript_ref.clone()}>
                    { for self.entries.iter().map(render_entry) }
                    { self.render_typing_indicator() }
                </div>

                <div class="quick-questions">
                    { for QUICK_QUESTIONS.iter().copied().map(|question| html! {
                        <button
                            class="quick-question-btn"
                            disabled={self.awaiting_reply}
                            onclick={link.callback(move |_| ChatMsg::AskQuick(question))}
                        >
                            { question }
                        </button>
                    })}
                </div>

                <div class="chat-input-row">
                    <input
                        type="text"
                        id="chat-input"
                        placeholder="Ask about diseases, fertilizers, farming..."
                        value={self.draft.clone()}
                        disabled={self.awaiting_reply}
                        {oninput}
                        {onkeypress}
                    />
                    <button
                        id="send-btn"
                        class="analyze-btn"
                        disabled={self.awaiting_reply}
                        onclick={link.callback(|_| ChatMsg::Send)}
                    >
                        <i class="fa-solid fa-paper-plane"></i>{" Send"}
                    </button>
                </div>
            </div>
        }
    }
}

impl ChatbotPanel {
    fn handle_send(&mut self, ctx: &Context<Self>) -> bool {
        let message = self.draft.trim().to_string();
        if message.is_empty() || self.awaiting_reply {
            return false;
        }

        self.entries.push(ChatEntry {
            author: Author::User,
            text: message.clone(),
        });
        self.draft.clear();
        self.awaiting_reply = true;

        send_chat_request(ctx, message);
        true
    }

    fn render_typing_indicator(&self) -> Html {
        if !self.awaiting_reply {
            return html! {};
        }

        html! {
            <div class="message bot">
                <div class="message-avatar"><i class="fa-solid fa-robot"></i></div>
                <div class="typing-indicator active">
                    <span></span><span></span><span></span>
                </div>
            </div>
        }
    }
}

fn render_entry(entry: &ChatEntry) -> Html {
    match entry.author {
        Author::User => html! {
            <div class="message user">
                <div class="message-content">{ entry.text.clone() }</div>
                <div class="message-avatar"><i class="fa-solid fa-user"></i></div>
            </div>
        },
        // Bot replies carry markup and are rendered verbatim.
        Author::Bot => html! {
            <div class="message bot">
                <div class="message-avatar"><i class="fa-solid fa-robot"></i></div>
                <div class="message-content">
                    { Html::from_html_unchecked(AttrValue::from(entry.text.clone())) }
                </div>
            </div>
        },
    }
}

fn send_chat_request(ctx: &Context<ChatbotPanel>, message: String) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let reply = match Request::post("/api/chatbot").json(&ChatRequest { message }) {
                Ok(request) => match request.send().await {
                    Ok(response) => match response.json::<ChatResponse>().await {
                        Ok(data) => {
                            if data.success {
                                data.response.unwrap_or_else(|| APOLOGY_REPLY.to_string())
                            } else {
                                APOLOGY_REPLY.to_string()
                            }
                        }
                        Err(e) => {
                            gloo_console::error!(format!("Chatbot response unreadable: {}", e));
                            OFFLINE_REPLY.to_string()
                        }
                    },
                    Err(e) => {
                        gloo_console::error!(format!("Chatbot request failed: {}", e));
                        OFFLINE_REPLY.to_string()
                    }
                },
                Err(e) => {
                    gloo_console::error!(format!("Failed to build chatbot request: {}", e));
                    OFFLINE_REPLY.to_string()
                }
            };

            link.send_message(ChatMsg::ReplyReceived(reply));
        }
    });
}
