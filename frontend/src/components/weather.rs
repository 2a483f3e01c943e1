use gloo_net::http::Request;
use shared::WeatherReport;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

const FETCH_FAILURE: &str = "Failed to fetch weather data.";

/// Forecast entries shown per lookup.
const MAX_FORECAST_ENTRIES: usize = 6;

pub enum WeatherMsg {
    SetLocation(String),
    Fetch,
    Received(WeatherReport),
    Failed(String),
}

pub struct WeatherPanel {
    location: String,
    report: Option<WeatherReport>,
    loading: bool,
    error: Option<String>,
}

impl Component for WeatherPanel {
    type Message = WeatherMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            location: String::new(),
            report: None,
            loading: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WeatherMsg::SetLocation(location) => {
                self.location = location;
                true
            }
            WeatherMsg::Fetch => self.handle_fetch(ctx),
            WeatherMsg::Received(report) => {
                self.loading = false;
                self.error = None;
                self.report = Some(report);
                true
            }
            WeatherMsg::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WeatherMsg::SetLocation(input.value())
        });

        let onkeypress = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then(|| {
                e.prevent_default();
                WeatherMsg::Fetch
            })
        });

        html! {
            <div class="weather-panel">
                <div class="search-row">
                    <input
                        type="text"
                        id="location-input"
                        placeholder="Enter a city or district..."
                        value={self.location.clone()}
                        disabled={self.loading}
                        {oninput}
                        {onkeypress}
                    />
                    <button
                        id="fetch-weather-btn"
                        class="analyze-btn"
                        disabled={self.loading}
                        onclick={link.callback(|_| WeatherMsg::Fetch)}
                    >
                        {
                            if self.loading {
                                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Fetching..."}</> }
                            } else {
                                html! { <><i class="fa-solid fa-cloud-sun"></i>{" Get Forecast"}</> }
                            }
                        }
                    </button>
                </div>

                { self.render_error() }
                { self.render_report() }
            </div>
        }
    }
}

impl WeatherPanel {
    fn handle_fetch(&mut self, ctx: &Context<Self>) -> bool {
        let location = self.location.trim().to_string();
        if location.is_empty() {
            self.error = Some("Please enter a location.".into());
            return true;
        }
        if self.loading {
            return false;
        }

        self.loading = true;
        self.error = None;
        send_weather_request(ctx, location);
        true
    }

    fn render_error(&self) -> Html {
        if let Some(error_msg) = &self.error {
            html! {
                <div class="error-message">
                    <i class="fa-solid fa-circle-exclamation"></i>
                    <p>{ error_msg }</p>
                </div>
            }
        } else {
            html! {}
        }
    }

    fn render_report(&self) -> Html {
        let Some(report) = &self.report else {
            return html! {};
        };

        html! {
            <div class="weather-output">
                <h2>{ report.location.clone() }</h2>

                <div class="weather-card">
                    <p>
                        <i class="fa-solid fa-temperature-half"></i>
                        { format!(" {}°C", report.current_weather.temperature) }
                    </p>
                    <p>
                        <i class="fa-solid fa-droplet"></i>
                        { format!(" {}% humidity", report.current_weather.humidity) }
                    </p>
                    <p>{ report.current_weather.description.clone() }</p>
                </div>

                <h3>{"Forecast"}</h3>
                <ul class="forecast-list">
                    { for report.forecast.iter().take(MAX_FORECAST_ENTRIES).map(|entry| html! {
                        <li class="forecast-item">
                            { format!("{}: {}°C, {}", entry.date, entry.temperature, entry.description) }
                        </li>
                    })}
                </ul>

                <h3>{"Disease Risks"}</h3>
                { for report.disease_risks.iter().map(|risk| html! {
                    <div class={classes!("alert", format!("alert-{}", risk.severity()))}>
                        <p>
                            <strong>{ risk.risk_type.clone() }</strong>
                            { format!(" ({})", risk.risk_level) }
                        </p>
                        <p>{ risk.reason.clone() }</p>
                        <p><em>{ risk.preventive_action.clone() }</em></p>
                    </div>
                })}
            </div>
        }
    }
}

fn send_weather_request(ctx: &Context<WeatherPanel>, location: String) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let url = format!("/api/weather/{}", location);
            let msg = match Request::get(&url).send().await {
                Ok(response) => match response.json::<WeatherReport>().await {
                    Ok(report) if report.success => WeatherMsg::Received(report),
                    Ok(_) => WeatherMsg::Failed(FETCH_FAILURE.to_string()),
                    Err(e) => {
                        gloo_console::error!(format!("Weather response unreadable: {}", e));
                        WeatherMsg::Failed(FETCH_FAILURE.to_string())
                    }
                },
                Err(e) => {
                    log::error!("Weather request failed: {}", e);
                    WeatherMsg::Failed(FETCH_FAILURE.to_string())
                }
            };

            link.send_message(msg);
        }
    });
}
