//! Unit tests for lift-car.

use std::collections::BTreeSet;

use lift_core::{CostWeights, ElevatorId, ElevatorState, Floor};
use lift_demand::FloorDemand;

use crate::{Acceptance, CarState, Cost, ElevatorUnit, TickAction};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TOP: Floor = Floor(10);

fn unit(capacity: u32) -> ElevatorUnit {
    ElevatorUnit::new(ElevatorId(0), capacity, TOP, CostWeights::default())
}

fn unit_in(capacity: u32, state: CarState) -> ElevatorUnit {
    ElevatorUnit::with_state(ElevatorId(0), capacity, TOP, CostWeights::default(), state)
}

fn floors(list: &[u32]) -> BTreeSet<Floor> {
    list.iter().map(|&f| Floor(f)).collect()
}

fn car(position: u32, load: u32, state: ElevatorState, up: &[u32], down: &[u32]) -> CarState {
    CarState {
        position:   Floor(position),
        load,
        state,
        up_stops:   floors(up),
        down_stops: floors(down),
    }
}

fn demand_with(entries: &[(u32, u32)]) -> FloorDemand {
    let mut d = FloorDemand::new(TOP.0);
    for &(floor, people) in entries {
        d.inject(Floor(floor), people).unwrap();
    }
    d
}

// ── Acceptance rule ───────────────────────────────────────────────────────────

#[cfg(test)]
mod acceptance {
    use super::*;

    #[test]
    fn idle_above_goes_up() {
        let mut c = CarState::new();
        assert_eq!(c.queue(Floor(4)), Some(ElevatorState::Ascending));
        assert_eq!(c.state, ElevatorState::Ascending);
        assert_eq!(c.up_stops, floors(&[4]));
    }

    #[test]
    fn idle_below_goes_down() {
        let mut c = car(6, 0, ElevatorState::Idle, &[], &[]);
        assert_eq!(c.queue(Floor(2)), Some(ElevatorState::Descending));
        assert_eq!(c.state, ElevatorState::Descending);
        assert_eq!(c.down_stops, floors(&[2]));
    }

    #[test]
    fn idle_same_floor_is_served_in_place() {
        let mut c = car(5, 0, ElevatorState::Idle, &[], &[]);
        assert_eq!(c.queue(Floor(5)), None);
        assert_eq!(c.state, ElevatorState::Idle);
        assert!(!c.has_stops());
    }

    #[test]
    fn ascending_splits_on_position() {
        let mut c = car(5, 0, ElevatorState::Ascending, &[8], &[]);
        c.queue(Floor(5));
        c.queue(Floor(3));
        assert_eq!(c.up_stops, floors(&[5, 8]));
        assert_eq!(c.down_stops, floors(&[3]));
        assert_eq!(c.state, ElevatorState::Ascending);
    }

    #[test]
    fn descending_splits_on_position() {
        let mut c = car(5, 0, ElevatorState::Descending, &[], &[2]);
        c.queue(Floor(5));
        c.queue(Floor(9));
        assert_eq!(c.down_stops, floors(&[2, 5]));
        assert_eq!(c.up_stops, floors(&[9]));
    }

    #[test]
    fn floor_lives_in_one_set_only() {
        let mut c = car(5, 0, ElevatorState::Ascending, &[], &[3]);
        // Re-queued while descending past it: moves from down to up.
        c.state = ElevatorState::Descending;
        c.position = Floor(2);
        c.queue(Floor(3));
        assert!(c.up_stops.contains(&Floor(3)));
        assert!(!c.down_stops.contains(&Floor(3)));
    }

    #[test]
    fn unit_rejects_out_of_range() {
        let u = unit(5);
        let mut d = demand_with(&[]);
        assert!(u.accept_request(Floor(11), &mut d).is_err());
        assert!(u.accept_request(Floor(0), &mut d).is_err());
        assert_eq!(u.snapshot().pending_stops(), 0);
    }

    #[test]
    fn unit_boards_in_place_when_idle_there() {
        let u = unit_in(5, car(4, 0, ElevatorState::Idle, &[], &[]));
        let mut d = demand_with(&[(4, 7)]);
        let acc = u.accept_request(Floor(4), &mut d).unwrap();
        assert_eq!(acc, Acceptance::ServedHere { boarded: 5 });
        assert_eq!(u.load(), 5);
        assert_eq!(d.waiting(Floor(4)), 2);
    }
}

// ── Pickup ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pickup {
    use super::*;

    #[test]
    fn takes_min_of_room_and_waiting() {
        let mut c = car(3, 3, ElevatorState::Descending, &[], &[]);
        let mut d = demand_with(&[(3, 4)]);
        let t = c.pickup(Floor(3), 5, &mut d);
        assert_eq!(t.boarded, 2);
        assert_eq!(c.load, 5);
        assert_eq!(d.waiting(Floor(3)), 2);
    }

    #[test]
    fn full_car_is_noop() {
        let mut c = car(3, 5, ElevatorState::Descending, &[], &[]);
        let mut d = demand_with(&[(3, 4)]);
        assert_eq!(c.pickup(Floor(3), 5, &mut d).boarded, 0);
        assert_eq!(d.waiting(Floor(3)), 4);
    }

    #[test]
    fn ground_discharges_everyone() {
        let mut c = car(1, 4, ElevatorState::Descending, &[], &[]);
        let mut d = demand_with(&[]);
        let t = c.pickup(Floor::GROUND, 5, &mut d);
        assert_eq!(t.discharged, 4);
        assert_eq!(c.load, 0);
    }
}

// ── Route length ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn idle_at_ground_is_zero() {
        assert_eq!(CarState::new().route_length(), 0);
    }

    #[test]
    fn homing_is_distance_to_ground() {
        assert_eq!(car(7, 0, ElevatorState::Descending, &[], &[]).route_length(), 6);
    }

    #[test]
    fn ascending_serves_up_then_down_then_home() {
        // 3 -> 5 -> 8 -> 4 -> 2 -> 1
        let c = car(3, 0, ElevatorState::Ascending, &[5, 8], &[2, 4]);
        assert_eq!(c.route_length(), 2 + 3 + 4 + 2 + 1);
    }

    #[test]
    fn descending_serves_down_then_up_then_home() {
        // 6 -> 4 -> 7 -> 9 -> 1
        let c = car(6, 0, ElevatorState::Descending, &[7, 9], &[4]);
        assert_eq!(c.route_length(), 2 + 3 + 2 + 8);
    }
}

// ── Cost model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use super::*;

    #[test]
    fn full_car_is_unbounded_regardless_of_distance() {
        let u = unit_in(5, car(1, 5, ElevatorState::Idle, &[], &[]));
        for f in 1..=10 {
            assert_eq!(u.estimate_cost(Floor(f)), Cost::UNBOUNDED);
        }
        assert!(!Cost::UNBOUNDED.is_finite());
    }

    #[test]
    fn idle_at_ground() {
        // Route 1 -> 6 -> 1 = 10, along direction 0.9.
        let u = unit(5);
        assert_eq!(u.estimate_cost(Floor(6)), Cost(9));
    }

    #[test]
    fn ascending_near_candidate() {
        // Route 5 -> 6 -> 1 = 6, along direction 0.9 -> 5.4.
        let u = unit_in(5, car(5, 0, ElevatorState::Ascending, &[6], &[]));
        assert_eq!(u.estimate_cost(Floor(6)), Cost(5));
    }

    #[test]
    fn reversal_is_penalised() {
        // Route 5 -> 8 -> 3 -> 1 = 10, reversal 1.2.
        let u = unit_in(5, car(5, 0, ElevatorState::Ascending, &[8], &[]));
        assert_eq!(u.estimate_cost(Floor(3)), Cost(12));
    }

    #[test]
    fn same_floor_is_cheapest_factor() {
        // Idle at 4: served in place, route 4 -> 1 = 3, factor 0.7 -> 2.1.
        let u = unit_in(5, car(4, 0, ElevatorState::Idle, &[], &[]));
        assert_eq!(u.estimate_cost(Floor(4)), Cost(2));
    }

    #[test]
    fn load_factor_scales() {
        // Route 10, along 0.9, load 1 + 0.5 * 5/10 = 1.25 -> 11.25.
        let u = unit_in(10, car(1, 5, ElevatorState::Idle, &[], &[]));
        assert_eq!(u.estimate_cost(Floor(6)), Cost(11));
    }

    #[test]
    fn estimate_is_idempotent_and_pure() {
        let u = unit_in(5, car(5, 2, ElevatorState::Ascending, &[7], &[3]));
        let before = u.snapshot();
        let first  = u.estimate_cost(Floor(9));
        for _ in 0..5 {
            assert_eq!(u.estimate_cost(Floor(9)), first);
        }
        assert_eq!(u.snapshot(), before);
    }

    #[test]
    fn display() {
        assert_eq!(Cost(7).to_string(), "7");
        assert_eq!(Cost::UNBOUNDED.to_string(), "unbounded");
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn parked_at_ground_stays_idle() {
        let u = unit(5);
        let mut d = demand_with(&[]);
        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::Parked);
        assert!(!out.moved());
        assert_eq!(u.state(), ElevatorState::Idle);
    }

    #[test]
    fn single_request_round_trip() {
        let u = unit(5);
        let mut d = demand_with(&[(4, 3)]);
        u.accept_request(Floor(4), &mut d).unwrap();
        let snap = u.snapshot();
        assert_eq!(snap.state, ElevatorState::Ascending);
        assert_eq!(snap.up_stops, vec![Floor(4)]);

        for _ in 0..3 {
            u.tick(&mut d);
        }
        let snap = u.snapshot();
        assert_eq!(snap.position, Floor(4));
        assert_eq!(snap.load, 3);
        assert_eq!(d.waiting(Floor(4)), 0);
        assert_eq!(snap.pending_stops(), 0);

        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::Homing);
        assert_eq!(u.position(), Floor(3));
        u.tick(&mut d);
        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::ReturnedHome);
        assert_eq!(out.discharged, 3);
        assert_eq!(u.load(), 0);
        assert_eq!(u.state(), ElevatorState::Idle);
    }

    #[test]
    fn arrival_reports_boarded() {
        let u = unit_in(5, car(3, 0, ElevatorState::Ascending, &[4], &[]));
        let mut d = demand_with(&[(4, 2)]);
        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::Arrived { floor: Floor(4) });
        assert_eq!(out.boarded, 2);
    }

    #[test]
    fn opportunistic_pickup_on_the_way_down() {
        let u = unit_in(5, car(5, 0, ElevatorState::Descending, &[], &[2]));
        let mut d = demand_with(&[(3, 2), (2, 1)]);
        u.tick(&mut d); // 4
        let out = u.tick(&mut d); // 3
        assert_eq!(out.to, Floor(3));
        assert_eq!(out.boarded, 2);
        assert_eq!(d.waiting(Floor(3)), 0);
        let snap = u.snapshot();
        assert_eq!(snap.load, 2);
        assert_eq!(snap.down_stops, vec![Floor(2)]);
    }

    #[test]
    fn stale_stop_dropped_without_moving() {
        let u = unit_in(5, car(2, 0, ElevatorState::Ascending, &[6], &[]));
        let mut d = demand_with(&[]);
        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::SkippedStale { floor: Floor(6) });
        assert_eq!(out.from, out.to);
        assert_eq!(u.position(), Floor(2));
        assert_eq!(u.snapshot().pending_stops(), 0);
    }

    #[test]
    fn stale_drop_descending_still_boards_here() {
        let u = unit_in(5, car(5, 0, ElevatorState::Descending, &[], &[3, 2]));
        let mut d = demand_with(&[(5, 2), (2, 1)]);
        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::SkippedStale { floor: Floor(3) });
        assert_eq!(out.to, Floor(5));
        assert_eq!(out.boarded, 2);
        assert_eq!(d.waiting(Floor(5)), 0);
        assert_eq!(u.snapshot().down_stops, vec![Floor(2)]);

        let out = u.tick(&mut d);
        assert_eq!(out.to, Floor(4));
        assert_eq!(u.load(), 2);
    }

    #[test]
    fn reverses_when_direction_runs_dry() {
        let u = unit_in(5, car(4, 0, ElevatorState::Ascending, &[5], &[2]));
        let mut d = demand_with(&[(5, 1), (2, 1)]);
        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::Arrived { floor: Floor(5) });
        assert_eq!(u.state(), ElevatorState::Descending);
        u.tick(&mut d);
        u.tick(&mut d);
        let out = u.tick(&mut d);
        assert_eq!(out.action, TickAction::Arrived { floor: Floor(2) });
        assert_eq!(u.load(), 2);
    }

    #[test]
    fn empty_direction_flips_in_same_tick() {
        // Ascending label but only a down stop: serve it now.
        let u = unit_in(5, car(6, 0, ElevatorState::Ascending, &[], &[3]));
        let mut d = demand_with(&[(3, 1)]);
        let out = u.tick(&mut d);
        assert_eq!(out.to, Floor(5));
        assert_eq!(u.state(), ElevatorState::Descending);
    }

    #[test]
    fn load_never_exceeds_capacity() {
        let u = unit(3);
        let mut d = demand_with(&[(9, 5), (7, 5), (5, 5), (3, 5)]);
        for f in [9, 7, 5, 3] {
            u.accept_request(Floor(f), &mut d).unwrap();
        }
        for _ in 0..40 {
            u.tick(&mut d);
            assert!(u.load() <= 3);
        }
        assert_eq!(u.position(), Floor::GROUND);
    }

    #[test]
    fn idle_implies_no_stops() {
        let u = unit(5);
        let mut d = demand_with(&[(8, 2), (3, 1)]);
        u.accept_request(Floor(8), &mut d).unwrap();
        u.accept_request(Floor(3), &mut d).unwrap();
        for _ in 0..30 {
            u.tick(&mut d);
            let snap = u.snapshot();
            if snap.state == ElevatorState::Idle {
                assert_eq!(snap.pending_stops(), 0);
            }
        }
    }
}
