// Copyright 2025 Cowboy AI, LLC.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use hotel_domain::{
    HotelError, Reservation, ReservationId, ReservationLedger, Room, RoomCatalog, RoomId, UserId,
};
use proptest::prelude::*;

fn room(id: i64, price: f64) -> Room {
    Room::new(RoomId::new(id), "Standard", price, true).unwrap()
}

fn reservation(id: i64, cost: f64) -> Reservation {
    Reservation::new(
        ReservationId::new(id),
        UserId::new(1),
        RoomId::new(id),
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        cost,
    )
    .unwrap()
}

/// Distinct positive ids in a random order
fn distinct_ids() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::btree_set(1i64..10_000, 0..32)
        .prop_map(|set: BTreeSet<i64>| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn list_all_returns_rooms_in_insertion_order(ids in distinct_ids()) {
        let mut catalog = RoomCatalog::new();
        for id in &ids {
            catalog.add(room(*id, 100.0)).unwrap();
        }

        let listed: Vec<i64> = catalog.list_all().iter().map(|r| r.id().value()).collect();
        prop_assert_eq!(listed, ids);
    }

    #[test]
    fn duplicate_add_never_mutates(ids in distinct_ids(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!ids.is_empty());
        let mut catalog = RoomCatalog::new();
        for id in &ids {
            catalog.add(room(*id, 100.0)).unwrap();
        }
        let before = catalog.list_all();

        let dup = ids[pick.index(ids.len())];
        let is_duplicate = matches!(
            catalog.add(room(dup, 999.0)),
            Err(HotelError::DuplicateId { .. })
        );
        prop_assert!(is_duplicate);
        prop_assert_eq!(catalog.list_all(), before);
    }

    #[test]
    fn removal_keeps_remaining_order(ids in distinct_ids(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!ids.is_empty());
        let mut catalog = RoomCatalog::new();
        for id in &ids {
            catalog.add(room(*id, 100.0)).unwrap();
        }

        let gone = ids[pick.index(ids.len())];
        catalog.remove(RoomId::new(gone)).unwrap();

        let expected: Vec<i64> = ids.iter().copied().filter(|id| *id != gone).collect();
        let listed: Vec<i64> = catalog.list_all().iter().map(|r| r.id().value()).collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn revenue_is_sum_of_costs(costs in proptest::collection::vec(0u32..5_000, 0..24)) {
        let mut ledger = ReservationLedger::new();
        for (i, cost) in costs.iter().enumerate() {
            ledger.make(reservation(i as i64 + 1, f64::from(*cost))).unwrap();
        }

        let expected: f64 = costs.iter().map(|c| f64::from(*c)).sum();
        prop_assert_eq!(ledger.total_revenue(), expected);
    }

    #[test]
    fn cancel_reduces_revenue_by_exact_cost(
        costs in proptest::collection::vec(0u32..5_000, 1..24),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut ledger = ReservationLedger::new();
        for (i, cost) in costs.iter().enumerate() {
            ledger.make(reservation(i as i64 + 1, f64::from(*cost))).unwrap();
        }
        let before = ledger.total_revenue();

        let idx = pick.index(costs.len());
        let cancelled = ledger.cancel(ReservationId::new(idx as i64 + 1)).unwrap();

        prop_assert_eq!(cancelled.total_cost(), f64::from(costs[idx]));
        prop_assert_eq!(ledger.total_revenue(), before - cancelled.total_cost());
    }
}
