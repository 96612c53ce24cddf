//! End-to-end properties of the shareable address projection, covering the
//! documented seeding scenarios.

use lectern::explore::{
    Category, Department, EventType, ExploreState, FilterChange, Filters, Level, SortOrder, Tab,
    Timeframe, build_address, parse_address,
};

#[test]
fn test_seeding_scenario_from_shared_address() {
    // A pasted address seeds everything it names and defaults the rest.
    let state =
        ExploreState::seed_from_address("/explore?type=events&category=medical&page=2", 12)
            .unwrap();

    assert_eq!(state.tab, Tab::Events);
    assert_eq!(state.filters.category, Category::Medical);
    assert_eq!(state.filters.level, Level::All);
    assert_eq!(state.filters.department, Department::All);
    assert_eq!(state.filters.event_type, EventType::All);
    assert_eq!(state.filters.timeframe, Timeframe::Upcoming);
    assert_eq!(state.filters.sort, SortOrder::Popular);
    assert_eq!(state.filters.search, "");
    assert_eq!(state.page, 2);

    // The first request carries exactly the constrained parameters.
    let mut state = state;
    let request = state.begin_fetch();
    assert_eq!(
        request.snapshot.request_pairs(),
        vec![
            ("type", "events".to_string()),
            ("category", "medical".to_string()),
            ("page", "2".to_string()),
            ("limit", "12".to_string()),
        ]
    );
}

#[test]
fn test_address_roundtrip_across_every_field() {
    let filters = Filters::default()
        .with(FilterChange::Search("clinical skills".to_string()))
        .with(FilterChange::Category(Category::Medical))
        .with(FilterChange::Level(Level::Intermediate))
        .with(FilterChange::Department(Department::HealthSciences))
        .with(FilterChange::EventType(EventType::Workshop))
        .with(FilterChange::Timeframe(Timeframe::ThisWeek))
        .with(FilterChange::Sort(SortOrder::PriceLow));

    let address = build_address(Tab::Events, &filters, 4);
    let (tab, parsed, page) = parse_address(&address).unwrap();

    assert_eq!(tab, Tab::Events);
    assert_eq!(parsed, filters);
    assert_eq!(page, 4);
}

#[test]
fn test_canonical_addresses_are_stable() {
    // Re-serializing a parsed address yields the identical spelling.
    let address = "/explore?type=events&search=osce+prep&timeframe=this-month&page=3";
    let (tab, filters, page) = parse_address(address).unwrap();
    assert_eq!(build_address(tab, &filters, page), address);
}

#[test]
fn test_default_view_address_is_bare() {
    let state = ExploreState::new(12);
    assert_eq!(state.address(), "/explore");

    let reparsed = ExploreState::seed_from_address(&state.address(), 12).unwrap();
    assert_eq!(reparsed.tab, Tab::Courses);
    assert_eq!(reparsed.filters, Filters::default());
    assert_eq!(reparsed.page, 1);
}

#[test]
fn test_foreign_values_degrade_to_defaults() {
    // Hand-edited addresses with unknown vocabulary still produce a usable
    // view instead of failing.
    let (tab, filters, page) =
        parse_address("/explore?type=events&category=astrology&sort=cheapest&page=-2").unwrap();
    assert_eq!(tab, Tab::Events);
    assert_eq!(filters.category, Category::All);
    assert_eq!(filters.sort, SortOrder::Popular);
    assert_eq!(page, 1);
}
