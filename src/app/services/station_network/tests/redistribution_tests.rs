//! Tests for fleet redistribution

use super::*;
use crate::app::models::StationField;

#[test]
fn test_redistribute_handout() {
    let mut network = handout_network();

    assert_eq!(network.redistribute_bikes(), 0);
    assert_eq!(availability(&network), vec![(17, 14), (8, 7)]);
}

#[test]
fn test_redistribute_sample() {
    let mut network = sample_network();

    assert_eq!(network.redistribute_bikes(), -1);
    assert_eq!(availability(&network), vec![(6, 8), (10, 14), (8, 11)]);
}

#[test]
fn test_redistribute_preserves_in_service_slots() {
    let mut network = sample_network();
    let before: Vec<u32> = network.stations().iter().map(|s| s.in_service_slots()).collect();

    network.redistribute_bikes();

    let after: Vec<u32> = network.stations().iter().map(|s| s.in_service_slots()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_redistribute_return_value_matches_totals() {
    let mut network = sample_network();
    let bikes_before = network.column_total(StationField::BikesAvailable);

    let net_removed = network.redistribute_bikes();

    let bikes_after = network.column_total(StationField::BikesAvailable);
    assert_eq!(net_removed, bikes_before - bikes_after);
}

#[test]
fn test_redistribute_is_idempotent_for_balanced_network() {
    let mut network = StationNetwork::new(vec![
        create_test_station(1, "A", 43.7, -79.4, 10, 5, 5),
        create_test_station(2, "B", 43.7, -79.5, 20, 10, 10),
    ]);

    assert_eq!(network.redistribute_bikes(), 0);
    assert_eq!(availability(&network), vec![(5, 5), (10, 10)]);
}

#[test]
fn test_redistribute_rounds_half_to_even() {
    // Ratio 0.5: capacity 5 -> 2.5 -> 2, capacity 7 -> 3.5 -> 4
    let mut network = StationNetwork::new(vec![
        create_test_station(1, "A", 43.7, -79.4, 5, 5, 0),
        create_test_station(2, "B", 43.7, -79.5, 7, 1, 6),
    ]);

    assert_eq!(network.redistribute_bikes(), 0);
    assert_eq!(availability(&network), vec![(2, 3), (4, 3)]);
}

#[test]
fn test_redistribute_caps_at_in_service_slots() {
    // Station 1 has only 2 working slots out of 10
    let mut network = StationNetwork::new(vec![
        create_test_station(1, "A", 43.7, -79.4, 10, 0, 2),
        create_test_station(2, "B", 43.7, -79.5, 10, 10, 0),
    ]);

    let net_removed = network.redistribute_bikes();

    assert_eq!(availability(&network), vec![(2, 0), (5, 5)]);
    assert_eq!(net_removed, 3);
}

#[test]
fn test_redistribute_zero_capacity() {
    let mut empty = StationNetwork::new(Vec::new());
    assert_eq!(empty.redistribute_bikes(), 0);

    let station = create_test_station(1, "A", 43.7, -79.4, 0, 0, 0);
    let mut no_capacity = StationNetwork::new(vec![station]);
    assert_eq!(no_capacity.redistribute_bikes(), 0);
    assert_eq!(availability(&no_capacity), vec![(0, 0)]);
}
