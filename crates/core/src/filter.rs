//! Project gallery filtering: a tag predicate AND-combined with a
//! case-insensitive substring predicate over the project list.
//!
//! Deliberately not a search engine. There is no tokenizing, ranking, or fuzzy
//! matching; the result is always a subsequence of the input list, so the
//! gallery never reorders cards while the user types.

use crate::types::{Project, Tag};

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Tag side of the filter: the `All` sentinel or a single vocabulary tag.
///
/// Modeled separately from [`Tag`] so "no restriction" can never collide with
/// a real tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// No tag restriction.
    #[default]
    All,
    /// Only projects carrying this tag.
    Only(Tag),
}

impl TagFilter {
    /// Whether a project with the given tag set passes this filter.
    pub fn matches(&self, tags: &[Tag]) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(tag) => tags.contains(tag),
        }
    }
}

/// The user-controlled filter inputs. Defaults to "show everything": empty
/// query, no tag restriction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Free-text search over project titles and blurbs.
    pub query: String,
    /// The selected tag, or `All`.
    pub tag: TagFilter,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Filter the project list under the given state, preserving list order.
///
/// A project is kept when it passes the tag filter and its lowercased title or
/// blurb contains the lowercased query. The query is matched verbatim (no
/// trimming, so surrounding whitespace is significant), and the empty string
/// is a substring of everything, which is what makes the default state return
/// the full list. Pure and total: any query and any tag produce a (possibly
/// empty) result without error.
pub fn filter_projects<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    let query = state.query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            state.tag.matches(&p.tags)
                && (p.title.to_lowercase().contains(&query)
                    || p.blurb.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, blurb: &str, tags: &[Tag]) -> Project {
        Project { title: title.into(), blurb: blurb.into(), tags: tags.to_vec() }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("VIO", "Visual-inertial odometry pipeline", &[Tag::Robotics]),
            project("Chatbot Eval", "Relevancy metrics for AI chatbots", &[Tag::Ai, Tag::Nlp]),
            project("Dense MST", "Spanning trees over \u{398}(n\u{b2}) edges", &[Tag::Algorithms]),
        ]
    }

    fn titles<'a>(results: &[&'a Project]) -> Vec<&'a str> {
        results.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn default_state_returns_the_full_list_in_order() {
        let projects = sample();
        let results = filter_projects(&projects, &FilterState::default());
        assert_eq!(titles(&results), vec!["VIO", "Chatbot Eval", "Dense MST"]);
    }

    #[test]
    fn tag_filter_keeps_only_carriers() {
        let projects = sample();
        let state = FilterState { query: String::new(), tag: TagFilter::Only(Tag::Ai) };
        assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Chatbot Eval"]);
    }

    #[test]
    fn tag_nobody_carries_matches_nothing() {
        let projects = sample();
        let state = FilterState { query: String::new(), tag: TagFilter::Only(Tag::Backend) };
        assert!(filter_projects(&projects, &state).is_empty());
    }

    #[test]
    fn query_matches_titles_and_blurbs_case_insensitively() {
        let projects = sample();

        let by_title = FilterState { query: "vio".into(), tag: TagFilter::All };
        assert_eq!(titles(&filter_projects(&projects, &by_title)), vec!["VIO"]);

        let by_blurb = FilterState { query: "RELEVANCY".into(), tag: TagFilter::All };
        assert_eq!(titles(&filter_projects(&projects, &by_blurb)), vec!["Chatbot Eval"]);

        // The same query in different cases yields identical results.
        let lower = FilterState { query: "ai".into(), tag: TagFilter::All };
        let upper = FilterState { query: "AI".into(), tag: TagFilter::All };
        assert_eq!(filter_projects(&projects, &lower), filter_projects(&projects, &upper));
    }

    #[test]
    fn query_and_tag_are_combined_with_and() {
        let projects = sample();

        let disjoint = FilterState { query: "vio".into(), tag: TagFilter::Only(Tag::Ai) };
        assert!(filter_projects(&projects, &disjoint).is_empty());

        let agreeing = FilterState { query: "vio".into(), tag: TagFilter::Only(Tag::Robotics) };
        assert_eq!(titles(&filter_projects(&projects, &agreeing)), vec!["VIO"]);
    }

    #[test]
    fn unmatched_query_yields_empty_not_error() {
        let projects = sample();
        let state = FilterState { query: "zzz".into(), tag: TagFilter::All };
        assert!(filter_projects(&projects, &state).is_empty());
    }

    #[test]
    fn whitespace_in_the_query_is_significant() {
        let projects = sample();

        // No trimming: a padded query is a different query.
        let padded = FilterState { query: " vio".into(), tag: TagFilter::All };
        assert!(filter_projects(&projects, &padded).is_empty());

        // A lone space is a legitimate query and matches any spaced text.
        let space = FilterState { query: " ".into(), tag: TagFilter::All };
        assert_eq!(filter_projects(&projects, &space).len(), 3);
    }

    #[test]
    fn lowercasing_is_unicode_aware() {
        let projects = sample();
        let state = FilterState { query: "\u{3b8}(n".into(), tag: TagFilter::All };
        assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Dense MST"]);
    }

    #[test]
    fn results_are_an_order_preserving_subsequence() {
        let projects = sample();
        // "in" skips the middle project but keeps the outer two in list order.
        let state = FilterState { query: "in".into(), tag: TagFilter::All };
        let results = filter_projects(&projects, &state);
        assert_eq!(titles(&results), vec!["VIO", "Dense MST"]);
    }

    #[test]
    fn same_state_always_yields_the_same_results() {
        let projects = sample();
        let state = FilterState { query: "a".into(), tag: TagFilter::Only(Tag::Ai) };
        let first = filter_projects(&projects, &state);
        let second = filter_projects(&projects, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn narrowing_either_input_never_grows_the_result() {
        let projects = sample();

        let broad = FilterState { query: "e".into(), tag: TagFilter::All };
        let narrower_query = FilterState { query: "ev".into(), tag: TagFilter::All };
        let narrower_tag = FilterState { query: "e".into(), tag: TagFilter::Only(Tag::Nlp) };

        let base = filter_projects(&projects, &broad).len();
        assert!(filter_projects(&projects, &narrower_query).len() <= base);
        assert!(filter_projects(&projects, &narrower_tag).len() <= base);
    }

    #[test]
    fn empty_input_list_stays_empty() {
        let results = filter_projects(&[], &FilterState::default());
        assert!(results.is_empty());
    }
}
