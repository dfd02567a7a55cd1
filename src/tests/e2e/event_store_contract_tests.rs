use crate::modules::events::core::event::{Event, EventDetails};
use crate::modules::events::core::ports::{EventStore, StoreError};
use crate::modules::events::core::query::{EventQuery, SortField, SortOrder, TimeWindow};
use crate::tests::fixtures::events::{calendar_2022, make_details, utc};
use crate::tests::fixtures::stores::{in_memory_store, seed, sqlite_store};
use chrono::{DateTime, Utc};
use rstest::rstest;
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum Backend {
    InMemory,
    Sqlite,
}

impl Backend {
    fn open(self) -> Arc<dyn EventStore> {
        match self {
            Backend::InMemory => in_memory_store(),
            Backend::Sqlite => sqlite_store(),
        }
    }
}

fn titles(events: &[Event]) -> Vec<&str> {
    events.iter().map(|event| event.title.as_str()).collect()
}

fn by_date_from(window: TimeWindow) -> EventQuery {
    EventQuery::calendar(window)
}

#[rstest]
#[case::single_day(
    TimeWindow::Between { start: utc(2022, 2, 1, 0, 0), end: utc(2022, 2, 2, 0, 0) },
    vec!["Ski Trip", "Dentist"]
)]
#[case::window_inside_a_long_event(
    TimeWindow::Between { start: utc(2022, 2, 2, 0, 0), end: utc(2022, 2, 3, 0, 0) },
    vec!["Ski Trip"]
)]
#[case::touching_end_is_excluded(
    TimeWindow::Between { start: utc(2022, 1, 2, 10, 0), end: utc(2022, 1, 2, 12, 0) },
    vec![]
)]
#[case::touching_start_is_excluded(
    TimeWindow::Between { start: utc(2022, 3, 1, 12, 0), end: utc(2022, 3, 1, 15, 0) },
    vec![]
)]
#[case::after(TimeWindow::After { start: utc(2022, 2, 10, 0, 0) }, vec!["Conference", "Retro"])]
#[case::before(TimeWindow::Before { end: utc(2022, 1, 2, 9, 30) }, vec!["New Year Party", "Planning"])]
#[case::unbounded(
    TimeWindow::Unbounded,
    vec!["New Year Party", "Planning", "Ski Trip", "Dentist", "Conference", "Retro"]
)]
#[tokio::test]
async fn it_should_return_exactly_the_overlapping_events(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
    #[case] window: TimeWindow,
    #[case] expected: Vec<&str>,
) {
    let store = backend.open();
    seed(store.as_ref()).await;

    let events = store.get_by_filter(&by_date_from(window)).await.unwrap();

    assert_eq!(titles(&events), expected);
    assert!(events.iter().all(|event| window.matches(event)));
}

#[rstest]
#[tokio::test]
async fn it_should_keep_every_result_sorted_for_every_field_and_order(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
    #[values(SortOrder::Asc, SortOrder::Desc)] sort_order: SortOrder,
) {
    let store = backend.open();
    seed(store.as_ref()).await;
    store
        .create(make_details("Planning", utc(2022, 1, 5, 9, 0), utc(2022, 1, 5, 10, 0)))
        .await
        .unwrap();

    for sort_field in SortField::ALL {
        let query = EventQuery {
            sort_field,
            sort_order,
            ..EventQuery::default()
        };
        let events = store.get_by_filter(&query).await.unwrap();
        assert_eq!(events.len(), 7, "{sort_field:?}");
        for pair in events.windows(2) {
            assert_ne!(
                query.compare(&pair[0], &pair[1]),
                Ordering::Greater,
                "{sort_field:?} {sort_order:?}: {} before {}",
                pair[0].id,
                pair[1].id
            );
        }
    }
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_first_n_of_the_sorted_result(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
) {
    let store = backend.open();
    seed(store.as_ref()).await;
    let sorted = EventQuery {
        sort_field: SortField::DateTo,
        sort_order: SortOrder::Desc,
        ..EventQuery::default()
    };
    let all = store.get_by_filter(&sorted).await.unwrap();

    for limit in 1..=8 {
        let capped = store
            .get_by_filter(&EventQuery { limit, ..sorted })
            .await
            .unwrap();
        let expected = all.len().min(limit as usize);
        assert_eq!(capped, all[..expected].to_vec(), "limit {limit}");
    }
}

#[rstest]
#[tokio::test]
async fn it_should_round_trip_created_events(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
) {
    let store = backend.open();
    let before: DateTime<Utc> = Utc::now() - chrono::Duration::seconds(1);

    let mut uuids = Vec::new();
    for details in calendar_2022() {
        uuids.push(store.create(details).await.unwrap());
    }

    for (index, (uuid, details)) in uuids.iter().zip(calendar_2022()).enumerate() {
        let event = store.get_by_uuid(uuid).await.unwrap();
        assert_eq!(event.details(), details);
        assert_eq!(&event.uuid, uuid);
        assert_eq!(event.id, index as i64 + 1);
        assert!(event.created_at >= before);
    }

    let mut distinct = uuids.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), uuids.len());
}

#[rstest]
#[tokio::test]
async fn it_should_store_inverted_intervals_as_given(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
) {
    let store = backend.open();
    let details: EventDetails =
        make_details("Backwards", utc(2022, 5, 2, 0, 0), utc(2022, 5, 1, 0, 0));
    let uuid = store.create(details.clone()).await.unwrap();
    assert_eq!(store.get_by_uuid(&uuid).await.unwrap().details(), details);
}

#[rstest]
#[tokio::test]
async fn it_should_update_in_place_and_keep_identity(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
) {
    let store = backend.open();
    let uuids = seed(store.as_ref()).await;
    let original = store.get_by_uuid(&uuids[1]).await.unwrap();
    let changed = make_details("Planning (long)", utc(2022, 1, 2, 9, 0), utc(2022, 1, 2, 17, 0));

    store.update(&uuids[1], changed.clone()).await.unwrap();

    let updated = store.get_by_uuid(&uuids[1]).await.unwrap();
    assert_eq!(updated.details(), changed);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(store.get_all().await.unwrap().len(), 6);
}

#[rstest]
#[tokio::test]
async fn it_should_report_not_found_for_unknown_uuids(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
) {
    let store = backend.open();
    let uuids = seed(store.as_ref()).await;
    let details = make_details("x", utc(2022, 1, 1, 0, 0), utc(2022, 1, 1, 1, 0));

    store.delete(&uuids[2]).await.unwrap();

    let gone = StoreError::NotFound(uuids[2].clone());
    assert_eq!(store.delete(&uuids[2]).await, Err(gone.clone()));
    assert_eq!(store.get_by_uuid(&uuids[2]).await, Err(gone.clone()));
    assert_eq!(store.update(&uuids[2], details).await, Err(gone));
    assert_eq!(store.get_all().await.unwrap().len(), 5);
}

#[rstest]
#[tokio::test]
async fn it_should_list_all_events_in_id_order(
    #[values(Backend::InMemory, Backend::Sqlite)] backend: Backend,
) {
    let store = backend.open();
    let uuids = seed(store.as_ref()).await;
    let all = store.get_all().await.unwrap();
    let listed: Vec<&String> = all.iter().map(|event| &event.uuid).collect();
    assert_eq!(listed, uuids.iter().collect::<Vec<_>>());
}
