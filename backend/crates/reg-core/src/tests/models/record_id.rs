use crate::RecordId;
use crate::models::record_id::{GENERATED_ID_LENGTH, TICK_WIDTH};

use std::collections::HashSet;
use std::str::FromStr;

use googletest::prelude::*;
use proptest::prelude::*;
use uuid::Uuid;

#[test]
fn given_generated_id_then_fixed_width_lowercase_hex() {
    let id = RecordId::generate();

    assert_that!(id.as_str().len(), eq(GENERATED_ID_LENGTH));
    assert!(
        id.as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
}

#[test]
fn given_rapid_sequential_generation_then_no_collisions() {
    let ids: HashSet<RecordId> = (0..10_000).map(|_| RecordId::generate()).collect();

    assert_that!(ids.len(), eq(10_000));
}

#[test]
fn given_sequential_generation_then_tick_component_strictly_increases() {
    let first = RecordId::generate();
    let second = RecordId::generate();

    let first_tick = u64::from_str_radix(&first.as_str()[..TICK_WIDTH], 16).unwrap();
    let second_tick = u64::from_str_radix(&second.as_str()[..TICK_WIDTH], 16).unwrap();

    assert_that!(second_tick, gt(first_tick));
}

#[test]
fn given_concurrent_generation_then_no_collisions() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| (0..1_000).map(|_| RecordId::generate()).collect::<Vec<_>>()))
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id generated");
        }
    }

    assert_that!(ids.len(), eq(8_000));
}

#[test]
fn given_empty_string_when_parsed_then_error() {
    assert_that!(RecordId::from_str(""), err(anything()));
}

#[test]
fn given_whitespace_when_parsed_then_error() {
    assert_that!(RecordId::new("abc def"), err(anything()));
}

#[test]
fn given_uuid_then_simple_form_used() {
    let uuid = Uuid::new_v4();
    let id = RecordId::from(uuid);

    assert_that!(id.as_str(), eq(uuid.simple().to_string().as_str()));
}

#[test]
fn given_id_when_serialized_then_plain_json_string() {
    let id = RecordId::new("1234abcd").unwrap();

    let json = serde_json::to_string(&id).unwrap();

    assert_that!(json, eq("\"1234abcd\""));
}

proptest! {
    #[test]
    fn given_batch_of_any_size_then_all_ids_distinct(count in 1usize..2_000) {
        let ids: HashSet<RecordId> = (0..count).map(|_| RecordId::generate()).collect();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn given_non_blank_token_when_wrapped_then_round_trips(value in "[a-zA-Z0-9_-]{1,40}") {
        let id = RecordId::new(value.clone()).unwrap();
        prop_assert_eq!(id.to_string(), value);
    }
}
