use crate::modules::events::core::event::{Event, EventDetails};
use chrono::{DateTime, TimeZone, Utc};

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid UTC instant")
}

pub fn make_details(title: &str, date_from: DateTime<Utc>, date_to: DateTime<Utc>) -> EventDetails {
    EventDetails {
        title: title.to_string(),
        description: format!("{title} description"),
        date_from,
        date_to,
    }
}

pub fn make_event(id: i64, title: &str, date_from: DateTime<Utc>, date_to: DateTime<Utc>) -> Event {
    Event {
        id,
        uuid: format!("uuid-{id:04}"),
        title: title.to_string(),
        description: format!("{title} description"),
        date_from,
        date_to,
        created_at: utc(2021, 12, 1, 0, 0),
    }
}

/// Calendar used by the store and HTTP scenarios, in insertion order.
pub fn calendar_2022() -> Vec<EventDetails> {
    vec![
        make_details("New Year Party", utc(2021, 12, 31, 20, 0), utc(2022, 1, 1, 2, 0)),
        make_details("Planning", utc(2022, 1, 2, 9, 0), utc(2022, 1, 2, 10, 0)),
        make_details("Ski Trip", utc(2022, 1, 30, 0, 0), utc(2022, 2, 5, 0, 0)),
        make_details("Dentist", utc(2022, 2, 1, 8, 30), utc(2022, 2, 1, 9, 0)),
        make_details("Conference", utc(2022, 2, 14, 9, 0), utc(2022, 2, 16, 17, 0)),
        make_details("Retro", utc(2022, 3, 1, 15, 0), utc(2022, 3, 1, 16, 0)),
    ]
}
