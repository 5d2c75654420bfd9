//! Links between views.
//!
//! Selecting a result opens `detalhe.html?id=<id>`; submitting a search opens
//! `menubusca.html?q=<term>`. Values are encoded like JavaScript's
//! `encodeURIComponent`, and the destination reads them back with
//! [`query_param`].

use crate::models::Record;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DETAIL_PAGE: &str = "detalhe.html";
pub const SEARCH_PAGE: &str = "menubusca.html";

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where a link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Detail { id: String },
    Search { query: String },
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Decode a query-string component: `+` is a space, then percent escapes
pub fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Link to the detail view of a record; `None` when the record has no id
pub fn detail_link(record: &Record) -> Option<String> {
    record
        .id()
        .map(|id| format!("{}?id={}", DETAIL_PAGE, encode_component(&id)))
}

/// Link to the search view for a term; `None` when the trimmed term is empty.
/// The trimmed term is passed through as typed (no normalization).
pub fn search_link(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!("{}?q={}", SEARCH_PAGE, encode_component(term)))
}

/// First value of `name` in a query string. Accepts a bare query
/// (`q=x&y=z`), a query with its leading `?`, or a whole link.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.split_once('?').map_or(query, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
}

/// Resolve a link produced by [`detail_link`] or [`search_link`]
pub fn parse_link(link: &str) -> Option<Destination> {
    let page = link.split(['?', '#']).next().unwrap_or("");
    let page = page.rsplit('/').next().unwrap_or(page);

    match page {
        DETAIL_PAGE => query_param(link, "id").map(|id| Destination::Detail { id }),
        SEARCH_PAGE => query_param(link, "q").map(|query| Destination::Search { query }),
        _ => None,
    }
}
