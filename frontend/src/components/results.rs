use shared::report::{DiagnosisReport, Section, SectionBody};
use shared::{DiagnosisView, Stage};
use yew::prelude::*;

use crate::components::utils::debounce;
use crate::{Model, Msg};

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    match &model.stage {
        Stage::Idle | Stage::FileSelected => html! {},
        Stage::Submitting => html! {
            <div class="results-section">
                <div class="analyzing-message">
                    <i class="fa-solid fa-spinner fa-spin"></i>
                    <p>{"Analyzing image... Please wait."}</p>
                </div>
            </div>
        },
        Stage::Result(DiagnosisView::Failure(reason)) => html! {
            <div class="results-section">
                <div class="error-msg">
                    <i class="fa-solid fa-circle-exclamation"></i>
                    <p>{ reason.clone() }</p>
                </div>
            </div>
        },
        Stage::Result(DiagnosisView::Report(report)) => render_report(report, ctx),
    }
}

fn render_report(report: &DiagnosisReport, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class={classes!(
            "results-section",
            "results-container",
            if report.healthy { "healthy" } else { "diseased" }
        )}>
            <div class="result-header">
                <h2>
                    {
                        if report.healthy {
                            html! { <><i class="fa-solid fa-leaf"></i>{" Healthy Plant!"}</> }
                        } else {
                            html! { <><i class="fa-solid fa-triangle-exclamation"></i>{" Disease Detected"}</> }
                        }
                    }
                </h2>
                <p><strong>{"Disease: "}</strong>{ report.disease.clone() }</p>
                <p><strong>{"Confidence: "}</strong>{ format!("{}%", report.confidence) }</p>
            </div>

            { for report.sections.iter().map(render_section) }

            <div class="button-container">
                <button
                    class="analyze-btn"
                    onclick={debounce(300, move || link.send_message(Msg::Reset))}
                >
                    <i class="fa-solid fa-rotate-left"></i>{" Analyze Another Image"}
                </button>
            </div>
        </div>
    }
}

fn render_section(section: &Section) -> Html {
    html! {
        <div class={classes!("recommendation-section", section.tone.css_class())}>
            <h4>{ section.title }</h4>
            {
                match &section.body {
                    SectionBody::Text(text) => html! { <p>{ text.clone() }</p> },
                    SectionBody::List(items) => html! {
                        <ul>
                            { for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
                        </ul>
                    },
                }
            }
        </div>
    }
}
