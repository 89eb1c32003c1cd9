//! View rendering for the intent inference component.

use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{InferIntentsComponent, InferenceMode};

pub fn view(component: &InferIntentsComponent, ctx: &Context<InferIntentsComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="inference-card">
            <h2>{"Select Inference Mode"}</h2>
            <p class="lede">
                {"Choose how you want to infer customer intents from your dataset."}
            </p>
            <div class="mode-row">
                { build_mode_card(
                    component,
                    link,
                    InferenceMode::Full,
                    "grid_view",
                    "Full Dataset",
                    "Infer intents for the entire dataset.",
                ) }
                { build_mode_card(
                    component,
                    link,
                    InferenceMode::Sample,
                    "filter_center_focus",
                    "Sample",
                    "Infer intents for a random sample.",
                ) }
            </div>
            { build_controls(component, link) }
            { build_progress(component) }
            {
                match &component.error {
                    Some(error) => html! { <div class="run-error">{ error.clone() }</div> },
                    None => html! {},
                }
            }
            {
                if component.finished {
                    html! {
                        <div class="run-done">
                            {"Inference complete. Results are ready in Insights."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_mode_card(
    component: &InferIntentsComponent,
    link: &Scope<InferIntentsComponent>,
    mode: InferenceMode,
    icon: &str,
    label: &str,
    description: &str,
) -> Html {
    let class = if component.mode == Some(mode) {
        "mode-card selected"
    } else {
        "mode-card"
    };
    html! {
        <button class={class} onclick={link.callback(move |_| Msg::SelectMode(mode))}>
            <i class="material-icons">{icon}</i>
            <span class="mode-label">{label}</span>
            <span class="mode-desc">{description}</span>
        </button>
    }
}

fn build_controls(component: &InferIntentsComponent, link: &Scope<InferIntentsComponent>) -> Html {
    html! {
        <div class="action-row">
            <button
                class="primary"
                disabled={component.mode.is_none() || component.running}
                onclick={link.callback(|_| Msg::Start)}
            >
                { if component.running { "Running…" } else { "Start" } }
            </button>
            {
                if component.running {
                    html! {
                        <button onclick={link.callback(|_| Msg::Cancel)}>{"Cancel"}</button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_progress(component: &InferIntentsComponent) -> Html {
    match component.progress {
        Some((batch, total)) => {
            let percent = (f64::from(batch) / f64::from(total.max(1)) * 100.0) as u32;
            html! {
                <div class="progress-block">
                    <div class="progress-row">
                        <span>{ format!("Progress: Batch {} / {}", batch, total) }</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {}%;", percent)} />
                    </div>
                </div>
            }
        }
        None => html! {},
    }
}
