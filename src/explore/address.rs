//! Canonical explore addresses.
//!
//! Every controller snapshot projects to exactly one `/explore?...` address,
//! shareable between lectern runs (and with the marketplace's own web
//! explore page, which uses the same parameter names). The address is a
//! write-mostly projection of controller state: it is parsed exactly once,
//! when a run is seeded with `--address`, and written on every snapshot.
//!
//! Canonicalization rules: the default tab, page 1, and sentinel-valued
//! filters are omitted, so equivalent views always share one spelling.

use url::form_urlencoded;

use crate::error::{LecternError, Result};

use super::filters::{Filters, Tab};

/// Path component of every explore address.
pub const EXPLORE_PATH: &str = "/explore";

/// Build the canonical address for `{tab, filters, page}`.
pub fn build_address(tab: Tab, filters: &Filters, page: u32) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;

    if tab != Tab::default() {
        query.append_pair("type", tab.param());
        any = true;
    }
    for (key, value) in filters.to_query_pairs() {
        query.append_pair(key, &value);
        any = true;
    }
    if page > 1 {
        query.append_pair("page", &page.to_string());
        any = true;
    }

    if any {
        format!("{}?{}", EXPLORE_PATH, query.finish())
    } else {
        EXPLORE_PATH.to_string()
    }
}

/// Parse an address back into `(tab, filters, page)`.
///
/// Accepts a full `/explore?...` path, a bare `?`-prefixed query string, or
/// the query string alone. Unknown keys and unrecognized enum values are
/// tolerated (they resolve to defaults); a path component other than
/// `/explore` is rejected so a pasted non-explore URL fails loudly instead
/// of silently showing the default view.
pub fn parse_address(address: &str) -> Result<(Tab, Filters, u32)> {
    let trimmed = address.trim();

    let (path, query) = match trimmed.split_once('?') {
        Some((path, query)) => (path, query),
        None if trimmed.contains('=') => ("", trimmed),
        None => (trimmed, ""),
    };

    let path = path.trim_end_matches('/');
    let path_ok = path.is_empty() || path == "explore" || path.ends_with(EXPLORE_PATH);
    if !path_ok {
        return Err(LecternError::InvalidAddress(
            address.to_string(),
            "expected an /explore address".to_string(),
        ));
    }

    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut tab = Tab::default();
    let mut page = 1u32;
    for (key, value) in &pairs {
        match key.as_str() {
            "type" => tab = Tab::from_param(value),
            "page" => page = value.parse::<u32>().unwrap_or(1).max(1),
            _ => {}
        }
    }

    let filters = Filters::from_query_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    Ok((tab, filters, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::filters::{Category, FilterChange, SortOrder, Timeframe};

    #[test]
    fn test_default_view_is_bare_path() {
        assert_eq!(build_address(Tab::Courses, &Filters::default(), 1), "/explore");
    }

    #[test]
    fn test_page_one_and_default_tab_omitted() {
        let filters = Filters::default().with(FilterChange::Category(Category::Medical));
        let addr = build_address(Tab::Courses, &filters, 1);
        assert_eq!(addr, "/explore?category=medical");
        assert!(!addr.contains("page="));
        assert!(!addr.contains("type="));
    }

    #[test]
    fn test_full_address_shape() {
        let filters = Filters::default()
            .with(FilterChange::Search("chess club".to_string()))
            .with(FilterChange::Sort(SortOrder::Newest));
        let addr = build_address(Tab::Events, &filters, 3);
        assert_eq!(
            addr,
            "/explore?type=events&search=chess+club&sort=newest&page=3"
        );
    }

    #[test]
    fn test_roundtrip_through_parse() {
        let filters = Filters::default()
            .with(FilterChange::Search("intro to suturing".to_string()))
            .with(FilterChange::Category(Category::Medical))
            .with(FilterChange::Timeframe(Timeframe::ThisMonth));
        let addr = build_address(Tab::Events, &filters, 2);
        let (tab, parsed, page) = parse_address(&addr).unwrap();
        assert_eq!(tab, Tab::Events);
        assert_eq!(parsed, filters);
        assert_eq!(page, 2);
    }

    #[test]
    fn test_parse_accepts_query_only_forms() {
        let (tab, filters, page) = parse_address("?type=events&category=medical&page=2").unwrap();
        assert_eq!(tab, Tab::Events);
        assert_eq!(filters.category, Category::Medical);
        assert_eq!(page, 2);

        let (tab, _, page) = parse_address("type=events&page=5").unwrap();
        assert_eq!(tab, Tab::Events);
        assert_eq!(page, 5);
    }

    #[test]
    fn test_parse_rejects_foreign_path() {
        assert!(parse_address("/dashboard?type=events").is_err());
    }

    #[test]
    fn test_parse_bad_page_falls_back_to_one() {
        let (_, _, page) = parse_address("/explore?page=banana").unwrap();
        assert_eq!(page, 1);
        let (_, _, page) = parse_address("/explore?page=0").unwrap();
        assert_eq!(page, 1);
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let (_, filters, _) = parse_address("/explore?search=chess+club").unwrap();
        assert_eq!(filters.search, "chess club");
    }
}
