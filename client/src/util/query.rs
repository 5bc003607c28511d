//! Query-string lookup for `location.search` values.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use regex::RegexBuilder;

/// Return the percent-decoded value of `name` in `search`, if present.
///
/// `search` may carry its leading `?`. Keys match case-insensitively and must
/// be bounded by the start of the string or `&`. Values that do not decode to
/// valid UTF-8 are returned as written.
pub fn get_query_string(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    let pattern = format!("(^|&){}=([^&]*)(&|$)", regex::escape(name));
    let re = RegexBuilder::new(&pattern).case_insensitive(true).build().ok()?;
    let raw = re.captures(query)?.get(2)?.as_str();
    Some(urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |decoded| decoded.into_owned()))
}

/// Like [`get_query_string`], treating an empty value as absent.
pub fn non_empty_query_value(search: &str, name: &str) -> Option<String> {
    get_query_string(search, name).filter(|value| !value.is_empty())
}
