//! One-shot explore query: fetch a single listing page and print it.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::{CatalogSource, HttpCatalog};
use crate::config::Config;
use crate::error::{LecternError, Result};
use crate::explore::{
    Category, Department, EventType, ExploreState, FetchPhase, FilterChange, Level, SortOrder,
    Tab, Timeframe,
};
use crate::types::Listing;

/// Parsed flags for `lectern explore`.
#[derive(Debug, Default)]
pub struct ExploreOptions {
    pub tab: Tab,
    pub search: Option<String>,
    pub category: Option<Category>,
    pub level: Option<Level>,
    pub department: Option<Department>,
    pub event_type: Option<EventType>,
    pub timeframe: Option<Timeframe>,
    pub sort: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Seed the whole query from a shared address instead of flags.
    pub address: Option<String>,
    pub json: bool,
}

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Teacher")]
    teacher: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Starts")]
    starts: String,
    #[tabled(rename = "Seats")]
    seats: String,
}

fn price_cell(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${p:.2}"),
        None => "free".to_string(),
    }
}

/// Build the initial controller state from the parsed flags.
fn seed_state(options: &ExploreOptions, page_size: u32) -> Result<ExploreState> {
    if let Some(address) = &options.address {
        return ExploreState::seed_from_address(address, page_size);
    }

    let mut state = ExploreState::new(page_size);
    state.tab = options.tab;
    if let Some(search) = &options.search {
        state.filters = state.filters.with(FilterChange::Search(search.clone()));
    }
    if let Some(category) = options.category {
        state.filters = state.filters.with(FilterChange::Category(category));
    }
    if let Some(level) = options.level {
        state.filters = state.filters.with(FilterChange::Level(level));
    }
    if let Some(department) = options.department {
        state.filters = state.filters.with(FilterChange::Department(department));
    }
    if let Some(event_type) = options.event_type {
        state.filters = state.filters.with(FilterChange::EventType(event_type));
    }
    if let Some(timeframe) = options.timeframe {
        state.filters = state.filters.with(FilterChange::Timeframe(timeframe));
    }
    if let Some(sort) = options.sort {
        state.filters = state.filters.with(FilterChange::Sort(sort));
    }
    state.page = options.page.unwrap_or(1).max(1);
    Ok(state)
}

/// Run one explore query and print the page.
pub async fn cmd_explore(options: ExploreOptions) -> Result<()> {
    let config = Config::load()?;
    let page_size = options.limit.unwrap_or(config.page_size);
    let mut state = seed_state(&options, page_size)?;

    let catalog = HttpCatalog::from_config(&config)?;

    // Single-shot: first fetch bypasses the debounce by contract.
    let request = state.begin_fetch();
    let result = catalog
        .fetch_page(&request.snapshot)
        .await
        .map_err(|e| e.to_string());
    state.apply_result(request.seq, result);

    if state.phase == FetchPhase::Failed {
        return Err(LecternError::Api(
            state.last_error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    if options.json {
        print_json(&state)?;
    } else {
        print_table(&state);
    }

    Ok(())
}

fn print_json(state: &ExploreState) -> Result<()> {
    let items: Vec<serde_json::Value> = state
        .items
        .iter()
        .map(|listing| match listing {
            Listing::Course(c) => serde_json::to_value(c),
            Listing::Event(e) => serde_json::to_value(e),
        })
        .collect::<std::result::Result<_, _>>()?;

    let output = serde_json::json!({
        "address": state.address(),
        "items": items,
        "pagination": {
            "page": state.page,
            "totalPages": state.total_pages,
            "totalItems": state.total_items,
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_table(state: &ExploreState) {
    if state.items.is_empty() {
        println!("{}", "No results".dimmed());
        println!("{}", state.address().dimmed());
        return;
    }

    let table = match state.tab {
        Tab::Courses => {
            let rows: Vec<CourseRow> = state
                .items
                .iter()
                .filter_map(|listing| match listing {
                    Listing::Course(c) => Some(CourseRow {
                        id: c.id.clone(),
                        title: c.title.clone(),
                        teacher: c.teacher.clone().unwrap_or_default(),
                        category: c.category.clone().unwrap_or_default(),
                        level: c.level.clone().unwrap_or_default(),
                        price: price_cell(c.price),
                        rating: c
                            .rating
                            .map(|r| format!("{r:.1}"))
                            .unwrap_or_default(),
                    }),
                    Listing::Event(_) => None,
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            table
        }
        Tab::Events => {
            let rows: Vec<EventRow> = state
                .items
                .iter()
                .filter_map(|listing| match listing {
                    Listing::Event(e) => Some(EventRow {
                        id: e.id.clone(),
                        title: e.title.clone(),
                        host: e.host.clone().unwrap_or_default(),
                        format: e.event_type.clone().unwrap_or_default(),
                        starts: e
                            .starts_at
                            .as_ref()
                            .map(|t| t.strftime("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default(),
                        seats: e
                            .seats_left
                            .map(|s| s.to_string())
                            .unwrap_or_default(),
                    }),
                    Listing::Course(_) => None,
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            table
        }
    };

    println!("{table}");
    println!(
        "{}",
        format!(
            "page {} of {} ({} results)",
            state.page, state.total_pages, state.total_items
        )
        .dimmed()
    );
    println!("{}", state.address().cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_state_from_flags() {
        let options = ExploreOptions {
            tab: Tab::Events,
            category: Some(Category::Medical),
            page: Some(2),
            ..Default::default()
        };
        let state = seed_state(&options, 12).unwrap();
        assert_eq!(state.tab, Tab::Events);
        assert_eq!(state.filters.category, Category::Medical);
        assert_eq!(state.page, 2);
        assert_eq!(state.address(), "/explore?type=events&category=medical&page=2");
    }

    #[test]
    fn test_seed_state_prefers_address() {
        let options = ExploreOptions {
            tab: Tab::Courses,
            address: Some("/explore?type=events&search=osce".to_string()),
            ..Default::default()
        };
        let state = seed_state(&options, 12).unwrap();
        assert_eq!(state.tab, Tab::Events);
        assert_eq!(state.filters.search, "osce");
    }

    #[test]
    fn test_seed_state_rejects_bad_address() {
        let options = ExploreOptions {
            address: Some("/teachers?x=1".to_string()),
            ..Default::default()
        };
        assert!(seed_state(&options, 12).is_err());
    }

    #[test]
    fn test_price_cell() {
        assert_eq!(price_cell(Some(19.5)), "$19.50");
        assert_eq!(price_cell(None), "free");
    }
}
