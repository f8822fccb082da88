//! Spotlight search: result assembly, keyboard selection, and activation.

use desktop_app_calculator::{evaluate_to_display, is_arithmetic_query};

use crate::{
    apps::{catalog_entries, CatalogEntry},
    reducer::DesktopAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Web search engines offered for any non-blank query.
pub enum SearchProvider {
    /// Google web search.
    Google,
    /// Wikipedia full-text search.
    Wikipedia,
}

impl SearchProvider {
    /// Providers in result order.
    pub const ALL: [SearchProvider; 2] = [Self::Google, Self::Wikipedia];

    /// Result label prefix.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Search Google for",
            Self::Wikipedia => "Search Wikipedia for",
        }
    }

    /// Search URL for `query`.
    pub fn url(self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        match self {
            Self::Google => format!("https://www.google.com/search?q={encoded}"),
            Self::Wikipedia => {
                format!("https://en.wikipedia.org/wiki/Special:Search?search={encoded}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One row in the Spotlight result list.
pub enum SpotlightResult {
    /// Launch an application.
    App(&'static CatalogEntry),
    /// Search the web.
    WebSearch(SearchProvider),
    /// Inline arithmetic result.
    Calculation {
        /// Display text of the evaluation (`Invalid calculation` on failure).
        result: String,
    },
}

impl SpotlightResult {
    /// Heading of the result group this row belongs to.
    pub const fn section(&self) -> &'static str {
        match self {
            Self::App(_) => "Applications",
            Self::WebSearch(_) => "Web Search",
            Self::Calculation { .. } => "Calculator",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// What activating a result asks the shell to do.
pub enum SpotlightActivation {
    /// Dispatch these actions in order (Spotlight closes).
    Dispatch(Vec<DesktopAction>),
    /// Replace the query text and keep Spotlight open.
    ReplaceQuery(String),
}

/// Builds the merged result list: matching apps, then web searches, then the calculator.
pub fn search(query: &str) -> Vec<SpotlightResult> {
    let mut results: Vec<SpotlightResult> = catalog_entries()
        .iter()
        .filter(|entry| entry.matches(query))
        .map(SpotlightResult::App)
        .collect();

    if query.trim().is_empty() {
        return results;
    }

    results.extend(SearchProvider::ALL.into_iter().map(SpotlightResult::WebSearch));
    if is_arithmetic_query(query) {
        results.push(SpotlightResult::Calculation {
            result: evaluate_to_display(query),
        });
    }
    results
}

/// Moves `selected` one step down, wrapping at the end of `len` results.
pub fn select_next(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + 1) % len
    }
}

/// Moves `selected` one step up, wrapping at the start of `len` results.
pub fn select_previous(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (selected + len - 1) % len
    }
}

/// Resolves activation of `result` for the current `query`.
pub fn activate(result: &SpotlightResult, query: &str) -> SpotlightActivation {
    match result {
        SpotlightResult::App(entry) => {
            SpotlightActivation::Dispatch(vec![entry.open_action(), DesktopAction::CloseSpotlight])
        }
        SpotlightResult::WebSearch(provider) => SpotlightActivation::Dispatch(vec![
            DesktopAction::OpenExternalUrl {
                url: provider.url(query),
            },
            DesktopAction::CloseSpotlight,
        ]),
        SpotlightResult::Calculation { result } => SpotlightActivation::ReplaceQuery(result.clone()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::AppId;

    fn app_ids(results: &[SpotlightResult]) -> Vec<AppId> {
        results
            .iter()
            .filter_map(|result| match result {
                SpotlightResult::App(entry) => Some(entry.id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_query_lists_only_the_catalog() {
        for query in ["", "   "] {
            let results = search(query);
            assert_eq!(results.len(), 9);
            assert!(results
                .iter()
                .all(|result| matches!(result, SpotlightResult::App(_))));
        }
    }

    #[test]
    fn notes_query_surfaces_notes_tile_then_web_searches() {
        let results = search("notes");
        assert_eq!(app_ids(&results), vec![AppId::Notes]);
        assert_eq!(
            results[1..].to_vec(),
            vec![
                SpotlightResult::WebSearch(SearchProvider::Google),
                SpotlightResult::WebSearch(SearchProvider::Wikipedia),
            ]
        );
    }

    #[test]
    fn arithmetic_query_appends_calculator_result() {
        let results = search("12+5");
        assert_eq!(
            results.last(),
            Some(&SpotlightResult::Calculation {
                result: "17".to_string(),
            })
        );

        let results = search("4/0");
        assert_eq!(
            results.last(),
            Some(&SpotlightResult::Calculation {
                result: "Invalid calculation".to_string(),
            })
        );
        let sections: Vec<&str> = results.iter().map(SpotlightResult::section).collect();
        assert_eq!(sections, vec!["Web Search", "Web Search", "Calculator"]);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(app_ids(&search("BROWSE")), vec![AppId::Finder, AppId::Files]);
    }

    #[test]
    fn selection_wraps_both_ways() {
        assert_eq!(select_next(2, 3), 0);
        assert_eq!(select_previous(0, 3), 2);
        assert_eq!(select_next(0, 0), 0);
        assert_eq!(select_previous(0, 0), 0);
    }

    #[test]
    fn activation_outcomes() {
        let results = search("calc");
        let SpotlightActivation::Dispatch(actions) = activate(&results[0], "calc") else {
            panic!("app activation dispatches");
        };
        assert!(matches!(
            actions[0],
            DesktopAction::OpenApp {
                id: AppId::Calculator,
                ..
            }
        ));
        assert_eq!(actions[1], DesktopAction::CloseSpotlight);

        assert_eq!(
            activate(&SpotlightResult::WebSearch(SearchProvider::Wikipedia), "rust lang"),
            SpotlightActivation::Dispatch(vec![
                DesktopAction::OpenExternalUrl {
                    url: "https://en.wikipedia.org/wiki/Special:Search?search=rust%20lang"
                        .to_string(),
                },
                DesktopAction::CloseSpotlight,
            ])
        );

        assert_eq!(
            activate(
                &SpotlightResult::Calculation {
                    result: "17".to_string()
                },
                "12+5"
            ),
            SpotlightActivation::ReplaceQuery("17".to_string())
        );
    }

    #[test]
    fn search_urls_percent_encode_the_query() {
        assert_eq!(
            SearchProvider::Google.url("a b&c=d"),
            "https://www.google.com/search?q=a%20b%26c%3Dd"
        );
        assert_eq!(
            SearchProvider::Wikipedia.url("é/?"),
            "https://en.wikipedia.org/wiki/Special:Search?search=%C3%A9%2F%3F"
        );
        assert_eq!(
            SearchProvider::Google.url("1+1"),
            "https://www.google.com/search?q=1%2B1"
        );
    }
}
