//! View rendering for the insights component: the RFM segment table, the
//! rule-mining embed and the suggestions chat.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::rfm::RfmCluster;

use crate::embed;

use super::helpers::markdown_html;
use super::messages::Msg;
use super::state::{ChatLine, InsightsComponent};

pub fn view(component: &InsightsComponent, ctx: &Context<InsightsComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="insights-grid">
            <h2>{"Insights"}</h2>
            <section class="panel">
                <h3>{"RFM Segments"}</h3>
                { build_segments(component) }
            </section>
            <section class="panel">
                <h3>{"Rule Mining"}</h3>
                <iframe
                    width="100%"
                    height="450"
                    src={embed::rule_mining_url()}
                    sandbox={embed::EMBED_SANDBOX}
                ></iframe>
                <p class="panel-tip">
                    <b>{"Tip:"}</b>
                    {" Click on a row to see the intent behind why they were bought together."}
                </p>
            </section>
            <section class="panel chat-panel">
                <h3>{"Suggestions"}</h3>
                { build_chat(component, link) }
            </section>
        </div>
    }
}

fn build_segments(component: &InsightsComponent) -> Html {
    if component.loading {
        return html! { <div class="panel-note">{"Loading RFM insights…"}</div> };
    }
    if let Some(message) = &component.load_error {
        return html! { <div class="panel-note">{ message.clone() }</div> };
    }
    if component.clusters.is_empty() {
        return html! { <div class="panel-note">{"No RFM cluster data available."}</div> };
    }

    html! {
        <table class="segment-table">
            <thead>
                <tr>
                    <th>{"Cluster"}</th>
                    <th>{"Avg Recency"}</th>
                    <th>{"Avg Frequency"}</th>
                    <th>{"Avg Monetary"}</th>
                    <th>{"Num Customers"}</th>
                </tr>
            </thead>
            <tbody>
                { for component.clusters.iter().map(build_segment_row) }
            </tbody>
        </table>
    }
}

fn build_segment_row(cluster: &RfmCluster) -> Html {
    html! {
        <tr>
            <td class="cluster-id">{ cluster.cluster }</td>
            <td>{ format!("{:.1}", cluster.recency) }</td>
            <td>{ format!("{:.1}", cluster.frequency) }</td>
            <td>{ format!("{:.2}", cluster.monetary) }</td>
            <td>{ cluster.customers }</td>
        </tr>
    }
}

fn build_chat(component: &InsightsComponent, link: &Scope<InsightsComponent>) -> Html {
    let oninput = link.callback(|event: InputEvent| {
        let input = event.target_unchecked_into::<HtmlInputElement>();
        Msg::SetDraft(input.value())
    });
    let onkeydown = link.batch_callback(|event: KeyboardEvent| {
        if event.key() == "Enter" {
            Some(Msg::Send)
        } else {
            None
        }
    });

    html! {
        <div class="chat-box">
            <div class="chat-log">
                { for component.chat.iter().map(build_chat_line) }
                {
                    if component.asking {
                        html! { <div class="chat-line bot pending">{"Thinking…"}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="chat-input-row">
                <input
                    value={component.draft.clone()}
                    placeholder="Ask for recommendations..."
                    {oninput}
                    {onkeydown}
                />
                <button
                    class="primary"
                    disabled={component.asking}
                    onclick={link.callback(|_| Msg::Send)}
                >
                    <i class="material-icons">{"send"}</i>
                </button>
            </div>
        </div>
    }
}

fn build_chat_line(line: &ChatLine) -> Html {
    if line.from_user {
        html! { <div class="chat-line user">{ line.text.clone() }</div> }
    } else {
        html! { <div class="chat-line bot">{ markdown_html(&line.text) }</div> }
    }
}
