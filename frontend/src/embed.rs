//! Looker Studio embed URLs.
//!
//! Report parameters travel in the `params` query argument as a
//! URL-encoded JSON object, the format Looker Studio expects from
//! `encodeURIComponent(JSON.stringify(...))`. Building the URL is the only
//! client responsibility; rendering happens inside the iframe.

use serde_json::{Map, Value};

pub const REPORT_ID: &str = "5841b56f-c70e-4aba-8bbb-49c8bcd2457f";
pub const SALES_PAGE_ID: &str = "GAcaF";
pub const RULE_MINING_PAGE_ID: &str = "GPoaF";

/// The dataset the published report is wired to.
pub const DATASET_ID: &str = "1";

/// Sandbox attribute for the embed iframes. Looker Studio needs scripts,
/// same-origin storage and popups to sign the viewer in.
pub const EMBED_SANDBOX: &str = "allow-storage-access-by-user-activation allow-scripts \
                                 allow-same-origin allow-popups allow-popups-to-escape-sandbox";

pub fn sales_report_url() -> String {
    embed_url(REPORT_ID, SALES_PAGE_ID, &[("dataset_id", DATASET_ID)])
}

pub fn rule_mining_url() -> String {
    embed_url(REPORT_ID, RULE_MINING_PAGE_ID, &[("dataset_id", DATASET_ID)])
}

/// Builds an embed URL for one page of a report, with the given parameter
/// map passed through to Looker Studio.
pub fn embed_url(report_id: &str, page_id: &str, params: &[(&str, &str)]) -> String {
    let mut map = Map::new();
    for (key, value) in params {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    let json = Value::Object(map).to_string();
    format!(
        "https://lookerstudio.google.com/embed/reporting/{}/page/{}?params={}",
        report_id,
        page_id,
        encode_uri_component(&json)
    )
}

/// Percent-encodes `input` the way `encodeURIComponent` does: everything
/// except ASCII alphanumerics and `-_.!~*'()` becomes `%XX` per UTF-8 byte.
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(*byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(*byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_params_encode_like_encode_uri_component() {
        let url = embed_url("r1", "p1", &[("dataset_id", "1")]);
        assert_eq!(
            url,
            "https://lookerstudio.google.com/embed/reporting/r1/page/p1\
             ?params=%7B%22dataset_id%22%3A%221%22%7D"
        );
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(
            encode_uri_component("AZaz09-_.!~*'()"),
            "AZaz09-_.!~*'()"
        );
    }

    #[test]
    fn reserved_and_multibyte_characters_are_percent_encoded() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("a/b&c=d"), "a%2Fb%26c%3Dd");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn rule_mining_and_sales_pages_share_the_report() {
        let mining = rule_mining_url();
        let sales = sales_report_url();
        assert!(mining.contains(REPORT_ID));
        assert!(sales.contains(REPORT_ID));
        assert!(mining.contains("/page/GPoaF?"));
        assert!(sales.contains("/page/GAcaF?"));
    }
}
