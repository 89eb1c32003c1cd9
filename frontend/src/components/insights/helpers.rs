//! Cache, API and markdown helpers for the insights component.

use gloo_net::http::Request;
use pulldown_cmark::{html, Parser};
use yew::virtual_dom::AttrValue;
use yew::Html;

use common::model::rfm::{Interpretation, InterpretRequest, RfmCluster};

use crate::config;
use crate::storage;

/// Local-storage key holding the last fetched cluster array.
pub const RFM_CACHE_KEY: &str = "rfmClusters";

pub fn cached_clusters() -> Option<Vec<RfmCluster>> {
    storage::get_json(RFM_CACHE_KEY)
}

pub fn cache_clusters(clusters: &[RfmCluster]) {
    storage::set_json(RFM_CACHE_KEY, &clusters);
}

/// Asks the backend LLM endpoint for a written interpretation of the
/// cluster summary. The reply is markdown-ish prose.
pub async fn interpret_clusters(clusters: &[RfmCluster]) -> Result<String, String> {
    let url = config::api_url("/llm-interpret-rfm");
    let response = Request::post(&url)
        .json(&InterpretRequest { clusters })
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!(
            "interpretation endpoint returned {}",
            response.status()
        ));
    }
    let reply = response
        .json::<Interpretation>()
        .await
        .map_err(|err| err.to_string())?;
    Ok(reply.interpretation)
}

/// Renders markdown text to HTML for the chat transcript.
pub fn markdown_html(text: &str) -> Html {
    let parser = Parser::new(text);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    Html::from_html_unchecked(AttrValue::from(out))
}
