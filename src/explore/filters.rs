//! Filter state for the explore controller.
//!
//! A [`Filters`] value is one complete, queryable view configuration. Every
//! field is always present; "no constraint" is expressed by each field's
//! sentinel value, never by omission, so any snapshot serializes to the same
//! query string every time. Fields at their sentinel are left out of the
//! serialized form entirely to keep addresses short and canonical.

use std::fmt;
use std::str::FromStr;

/// Listing domain selected by the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Courses,
    Events,
}

impl Tab {
    pub fn toggle(self) -> Self {
        match self {
            Tab::Courses => Tab::Events,
            Tab::Events => Tab::Courses,
        }
    }

    /// Wire spelling used for the `type` parameter.
    pub fn param(&self) -> &'static str {
        match self {
            Tab::Courses => "courses",
            Tab::Events => "events",
        }
    }

    /// Tolerant inverse of [`Tab::param`]; unknown values resolve to the
    /// default domain.
    pub fn from_param(s: &str) -> Self {
        match s {
            "events" => Tab::Events,
            _ => Tab::Courses,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.param())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "courses" => Ok(Tab::Courses),
            "events" => Ok(Tab::Events),
            other => Err(format!("invalid tab '{other}' (expected courses or events)")),
        }
    }
}

/// Declares a closed filter enum: wire spellings, human labels, a variants
/// table for the filter modal, strict `FromStr` for CLI flags, and a tolerant
/// `from_param` for addresses (unknown values resolve to the sentinel).
macro_rules! filter_enum {
    (
        $(#[$meta:meta])*
        $name:ident, sentinel: $sentinel:ident, {
            $($variant:ident => $param:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            $sentinel,
            $($variant,)+
        }

        impl $name {
            pub const VARIANTS: &'static [$name] =
                &[$name::$sentinel, $($name::$variant,)+];

            /// Wire spelling used in query strings and addresses.
            pub fn param(&self) -> &'static str {
                match self {
                    $name::$sentinel => Self::SENTINEL_PARAM,
                    $($name::$variant => $param,)+
                }
            }

            /// Human label shown in the TUI filter modal.
            pub fn label(&self) -> &'static str {
                match self {
                    $name::$sentinel => Self::SENTINEL_LABEL,
                    $($name::$variant => $label,)+
                }
            }

            /// Tolerant parse: unknown or sentinel spellings resolve to the
            /// sentinel, so hand-edited addresses never fail.
            pub fn from_param(s: &str) -> Self {
                match s {
                    $($param => $name::$variant,)+
                    _ => $name::$sentinel,
                }
            }

            /// True when this field places no constraint on the query.
            pub fn is_sentinel(&self) -> bool {
                matches!(self, $name::$sentinel)
            }

            /// Next variant in display order, wrapping (filter modal cycling).
            pub fn cycled(&self, forward: bool) -> Self {
                let idx = Self::VARIANTS.iter().position(|v| v == self).unwrap_or(0);
                let len = Self::VARIANTS.len();
                let next = if forward {
                    (idx + 1) % len
                } else {
                    (idx + len - 1) % len
                };
                Self::VARIANTS[next]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.param())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::VARIANTS
                    .iter()
                    .find(|v| v.param() == s)
                    .copied()
                    .ok_or_else(|| {
                        let expected: Vec<&str> =
                            Self::VARIANTS.iter().map(|v| v.param()).collect();
                        format!(
                            "invalid value '{}' (expected one of: {})",
                            s,
                            expected.join(", ")
                        )
                    })
            }
        }
    };
}

filter_enum! {
    /// Subject area of a course or event.
    Category, sentinel: All, {
        Medical => "medical", "Medical";
        Technology => "technology", "Technology";
        Business => "business", "Business";
        Science => "science", "Science";
        Language => "language", "Language";
    }
}

impl Category {
    const SENTINEL_PARAM: &'static str = "all";
    const SENTINEL_LABEL: &'static str = "All categories";
}

filter_enum! {
    /// Course difficulty. Ignored by the events domain rather than cleared.
    Level, sentinel: All, {
        Beginner => "beginner", "Beginner";
        Intermediate => "intermediate", "Intermediate";
        Advanced => "advanced", "Advanced";
    }
}

impl Level {
    const SENTINEL_PARAM: &'static str = "all";
    const SENTINEL_LABEL: &'static str = "Any level";
}

filter_enum! {
    /// Hosting department of the institution behind a listing.
    Department, sentinel: All, {
        Engineering => "engineering", "Engineering";
        HealthSciences => "health-sciences", "Health Sciences";
        Humanities => "humanities", "Humanities";
        Law => "law", "Law";
        Education => "education", "Education";
    }
}

impl Department {
    const SENTINEL_PARAM: &'static str = "all";
    const SENTINEL_LABEL: &'static str = "All departments";
}

filter_enum! {
    /// Format of a live event. Ignored by the courses domain rather than cleared.
    EventType, sentinel: All, {
        Webinar => "webinar", "Webinar";
        Workshop => "workshop", "Workshop";
        Conference => "conference", "Conference";
        Meetup => "meetup", "Meetup";
    }
}

impl EventType {
    const SENTINEL_PARAM: &'static str = "all";
    const SENTINEL_LABEL: &'static str = "Any format";
}

filter_enum! {
    /// Scheduling window for events. `Upcoming` is the sentinel: it is the
    /// catalog's default scope, so it is never serialized.
    Timeframe, sentinel: Upcoming, {
        Today => "today", "Today";
        ThisWeek => "this-week", "This week";
        ThisMonth => "this-month", "This month";
        Past => "past", "Past events";
    }
}

impl Timeframe {
    const SENTINEL_PARAM: &'static str = "upcoming";
    const SENTINEL_LABEL: &'static str = "Upcoming";
}

filter_enum! {
    /// Result ordering. `Popular` is the catalog default and is omitted from
    /// serialized addresses.
    SortOrder, sentinel: Popular, {
        Newest => "newest", "Newest";
        PriceLow => "price-low", "Price: low to high";
        PriceHigh => "price-high", "Price: high to low";
        Rating => "rating", "Highest rated";
    }
}

impl SortOrder {
    const SENTINEL_PARAM: &'static str = "popular";
    const SENTINEL_LABEL: &'static str = "Most popular";
}

/// A single-field update to a [`Filters`] snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Search(String),
    Category(Category),
    Level(Level),
    Department(Department),
    EventType(EventType),
    Timeframe(Timeframe),
    Sort(SortOrder),
}

/// One complete search/filter/sort configuration. Immutable per snapshot:
/// updates go through [`Filters::with`], which returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub search: String,
    pub category: Category,
    pub level: Level,
    pub department: Department,
    pub event_type: EventType,
    pub timeframe: Timeframe,
    pub sort: SortOrder,
}

impl Filters {
    /// Return a new snapshot with one field replaced. Never fails: values
    /// come from the closed enums above or free text.
    pub fn with(&self, change: FilterChange) -> Filters {
        let mut next = self.clone();
        match change {
            FilterChange::Search(s) => next.search = s,
            FilterChange::Category(c) => next.category = c,
            FilterChange::Level(l) => next.level = l,
            FilterChange::Department(d) => next.department = d,
            FilterChange::EventType(e) => next.event_type = e,
            FilterChange::Timeframe(t) => next.timeframe = t,
            FilterChange::Sort(s) => next.sort = s,
        }
        next
    }

    /// True when at least one field constrains the query.
    pub fn is_constrained(&self) -> bool {
        !self.search.is_empty()
            || !self.category.is_sentinel()
            || !self.level.is_sentinel()
            || !self.department.is_sentinel()
            || !self.event_type.is_sentinel()
            || !self.timeframe.is_sentinel()
            || !self.sort.is_sentinel()
    }

    /// Serialize to ordered query pairs. Sentinel-valued fields and empty
    /// search are omitted entirely.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if !self.category.is_sentinel() {
            pairs.push(("category", self.category.param().to_string()));
        }
        if !self.level.is_sentinel() {
            pairs.push(("level", self.level.param().to_string()));
        }
        if !self.department.is_sentinel() {
            pairs.push(("department", self.department.param().to_string()));
        }
        if !self.event_type.is_sentinel() {
            pairs.push(("eventType", self.event_type.param().to_string()));
        }
        if !self.timeframe.is_sentinel() {
            pairs.push(("timeframe", self.timeframe.param().to_string()));
        }
        if !self.sort.is_sentinel() {
            pairs.push(("sort", self.sort.param().to_string()));
        }
        pairs
    }

    /// Inverse of [`Filters::to_query_pairs`]. Missing keys resolve to each
    /// field's default; unrecognized values for a closed enum resolve to that
    /// field's sentinel.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Filters
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filters = Filters::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "search" => filters.search = value.to_string(),
                "category" => filters.category = Category::from_param(value),
                "level" => filters.level = Level::from_param(value),
                "department" => filters.department = Department::from_param(value),
                "eventType" => filters.event_type = EventType::from_param(value),
                "timeframe" => filters.timeframe = Timeframe::from_param(value),
                "sort" => filters.sort = SortOrder::from_param(value),
                _ => {}
            }
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constrained() -> Filters {
        Filters::default()
            .with(FilterChange::Search("chess club".to_string()))
            .with(FilterChange::Category(Category::Medical))
            .with(FilterChange::Level(Level::Advanced))
            .with(FilterChange::Timeframe(Timeframe::ThisWeek))
            .with(FilterChange::Sort(SortOrder::Rating))
    }

    #[test]
    fn test_default_serializes_to_nothing() {
        assert!(Filters::default().to_query_pairs().is_empty());
        assert!(!Filters::default().is_constrained());
    }

    #[test]
    fn test_sentinel_values_never_emitted() {
        let pairs = constrained().to_query_pairs();
        for (key, value) in &pairs {
            assert_ne!(value, "all", "sentinel leaked for key {key}");
            assert_ne!(value, "upcoming");
            assert_ne!(value, "popular");
        }
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["search", "category", "level", "timeframe", "sort"]
        );
    }

    #[test]
    fn test_query_pair_roundtrip() {
        let original = constrained();
        let parsed = Filters::from_query_pairs(
            original
                .to_query_pairs()
                .iter()
                .map(|(k, v)| (*k, v.as_str())),
        );
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_roundtrip_every_single_field_value() {
        // Each field exercised through every variant independently.
        for &category in Category::VARIANTS {
            let f = Filters::default().with(FilterChange::Category(category));
            let parsed = Filters::from_query_pairs(
                f.to_query_pairs().iter().map(|(k, v)| (*k, v.as_str())),
            );
            assert_eq!(parsed, f);
        }
        for &timeframe in Timeframe::VARIANTS {
            let f = Filters::default().with(FilterChange::Timeframe(timeframe));
            let parsed = Filters::from_query_pairs(
                f.to_query_pairs().iter().map(|(k, v)| (*k, v.as_str())),
            );
            assert_eq!(parsed, f);
        }
        for &sort in SortOrder::VARIANTS {
            let f = Filters::default().with(FilterChange::Sort(sort));
            let parsed = Filters::from_query_pairs(
                f.to_query_pairs().iter().map(|(k, v)| (*k, v.as_str())),
            );
            assert_eq!(parsed, f);
        }
    }

    #[test]
    fn test_with_replaces_one_field_only() {
        let base = constrained();
        let changed = base.with(FilterChange::Department(Department::Law));
        assert_eq!(changed.department, Department::Law);
        assert_eq!(changed.search, base.search);
        assert_eq!(changed.category, base.category);
        assert_eq!(changed.sort, base.sort);
    }

    #[test]
    fn test_unknown_param_value_resolves_to_sentinel() {
        let filters = Filters::from_query_pairs(vec![
            ("category", "underwater-basketweaving"),
            ("timeframe", "yesteryear"),
        ]);
        assert_eq!(filters.category, Category::All);
        assert_eq!(filters.timeframe, Timeframe::Upcoming);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let filters = Filters::from_query_pairs(vec![("utm_source", "newsletter")]);
        assert_eq!(filters, Filters::default());
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!("medical".parse::<Category>().is_ok());
        assert!("bogus".parse::<Category>().is_err());
        assert!("price-low".parse::<SortOrder>().is_ok());
        assert!("cheapest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_tab_toggle_and_parse() {
        assert_eq!(Tab::Courses.toggle(), Tab::Events);
        assert_eq!(Tab::Events.toggle(), Tab::Courses);
        assert_eq!(Tab::from_param("events"), Tab::Events);
        assert_eq!(Tab::from_param("nonsense"), Tab::Courses);
        assert!("events".parse::<Tab>().is_ok());
        assert!("webinars".parse::<Tab>().is_err());
    }

    #[test]
    fn test_cycling_wraps() {
        let mut level = Level::All;
        for _ in 0..Level::VARIANTS.len() {
            level = level.cycled(true);
        }
        assert_eq!(level, Level::All);
        assert_eq!(Level::All.cycled(false), Level::Advanced);
    }
}
