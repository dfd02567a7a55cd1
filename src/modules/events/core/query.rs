// Typed query arguments for filtered event listing.
//
// Purpose
// - TimeWindow: the four filter shapes (both bounds, start only, end only, none).
// - SortField and SortOrder: closed sets with a fixed mapping to column and keyword names.
// - EventQuery: window + sort + limit as consumed by EventStore::get_by_filter.
//
// Boundaries
// - Nothing here parses caller strings. See application::query_translator for that.

use crate::modules::events::core::event::Event;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    /// Events overlapping `[start, end]`.
    Between {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Events ending after `start`.
    After { start: DateTime<Utc> },
    /// Events starting before `end`.
    Before { end: DateTime<Utc> },
    #[default]
    Unbounded,
}

impl TimeWindow {
    pub fn from_bounds(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => TimeWindow::Between { start, end },
            (Some(start), None) => TimeWindow::After { start },
            (None, Some(end)) => TimeWindow::Before { end },
            (None, None) => TimeWindow::Unbounded,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match *self {
            TimeWindow::Between { start, end } => event.overlaps(start, end),
            TimeWindow::After { start } => event.date_to > start,
            TimeWindow::Before { end } => event.date_from < end,
            TimeWindow::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Uuid,
    Title,
    Description,
    DateFrom,
    DateTo,
    CreatedAt,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Id,
        SortField::Uuid,
        SortField::Title,
        SortField::Description,
        SortField::DateFrom,
        SortField::DateTo,
        SortField::CreatedAt,
    ];

    /// Physical column name. Also the token callers use to select the field.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Uuid => "uuid",
            SortField::Title => "title",
            SortField::Description => "description",
            SortField::DateFrom => "date_from",
            SortField::DateTo => "date_to",
            SortField::CreatedAt => "created_at",
        }
    }

    pub fn compare(self, a: &Event, b: &Event) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Uuid => a.uuid.cmp(&b.uuid),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Description => a.description.cmp(&b.description),
            SortField::DateFrom => a.date_from.cmp(&b.date_from),
            SortField::DateTo => a.date_to.cmp(&b.date_to),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventQuery {
    pub window: TimeWindow,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Maximum number of rows, 0 means unbounded.
    pub limit: u32,
}

impl EventQuery {
    /// Calendar views list everything in the window by start time.
    pub fn calendar(window: TimeWindow) -> Self {
        Self {
            window,
            sort_field: SortField::DateFrom,
            sort_order: SortOrder::Asc,
            limit: 0,
        }
    }

    /// Ordering used by every adapter: the requested field, ties broken by ascending id.
    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        let primary = self.sort_field.compare(a, b);
        let primary = match self.sort_order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}
