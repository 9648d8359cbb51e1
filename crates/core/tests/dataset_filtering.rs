//! End-to-end filtering scenarios against the shipped dataset — the same
//! calls the site makes on every keystroke and chip click.

use folio_core::filter::{filter_projects, FilterState, TagFilter};
use folio_core::types::{Project, Tag};

fn state(query: &str, tag: TagFilter) -> FilterState {
    FilterState { query: query.into(), tag }
}

fn titles<'a>(results: &[&'a Project]) -> Vec<&'a str> {
    results.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn test_default_state_lists_every_project_in_card_order() {
    let portfolio = folio_core::portfolio();
    let results = filter_projects(&portfolio.projects, &FilterState::default());
    assert_eq!(
        titles(&results),
        vec![
            "AI Assurance Platform (Infosys)",
            "Chatbot Evaluation System",
            "Visual-Inertial Odometry (VIO)",
            "Space Rat Pursuit",
            "Semi-External MST",
            "ROS/LIDAR Security Bot",
        ]
    );
}

#[test]
fn test_ai_chip_selects_the_ai_projects() {
    let portfolio = folio_core::portfolio();
    let results = filter_projects(&portfolio.projects, &state("", TagFilter::Only(Tag::Ai)));
    assert_eq!(
        titles(&results),
        vec!["AI Assurance Platform (Infosys)", "Chatbot Evaluation System", "Space Rat Pursuit"]
    );
}

#[test]
fn test_query_vio_matches_a_title_and_a_blurb() {
    let portfolio = folio_core::portfolio();
    // Hits the odometry project by title and the security bot by blurb
    // ("patrol behaviors" contains "vio"), returned in card order.
    let results = filter_projects(&portfolio.projects, &state("vio", TagFilter::All));
    assert_eq!(
        titles(&results),
        vec!["Visual-Inertial Odometry (VIO)", "ROS/LIDAR Security Bot"]
    );
}

#[test]
fn test_blurbs_are_searchable_too() {
    let portfolio = folio_core::portfolio();
    // "DeepEval" appears only in the chatbot project's blurb, not its title.
    let results = filter_projects(&portfolio.projects, &state("deepeval", TagFilter::All));
    assert_eq!(titles(&results), vec!["Chatbot Evaluation System"]);
}

#[test]
fn test_query_narrows_within_the_selected_chip() {
    let portfolio = folio_core::portfolio();
    let robotics = filter_projects(&portfolio.projects, &state("", TagFilter::Only(Tag::Robotics)));
    assert_eq!(robotics.len(), 2, "expected two robotics projects: {:?}", titles(&robotics));

    let narrowed =
        filter_projects(&portfolio.projects, &state("lidar", TagFilter::Only(Tag::Robotics)));
    assert_eq!(titles(&narrowed), vec!["ROS/LIDAR Security Bot"]);
}

#[test]
fn test_unmatched_query_produces_the_empty_state() {
    let portfolio = folio_core::portfolio();
    let results = filter_projects(&portfolio.projects, &state("zzz", TagFilter::All));
    assert!(results.is_empty(), "expected no matches, got {:?}", titles(&results));
}

#[test]
fn test_every_chip_matches_at_least_one_project() {
    let portfolio = folio_core::portfolio();
    for tag in Tag::ALL {
        let results = filter_projects(&portfolio.projects, &state("", TagFilter::Only(tag)));
        assert!(!results.is_empty(), "chip '{tag}' would render an empty gallery");
    }
}
