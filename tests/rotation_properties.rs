//! Property-based tests for rotation engine invariants.
//!
//! Tests validate:
//! 1. The index always stays below `page_count`
//! 2. Nothing rotates when every item already fits in view
//! 3. Advance then retreat restores the index once the transition settles
//! 4. Jumps are refused mid-transition and bounds-checked otherwise
//! 5. Resizing resets the index to 0
//! 6. Stale timer tokens never move the index

use campusboard::rotation::{
    Breakpoints, Navigation, Refusal, RotationConfig, RotationEngine, ViewPolicy,
};
use proptest::prelude::*;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(100);
const SETTLE: Duration = Duration::from_millis(10);

fn window(items_per_view: usize) -> RotationConfig {
    RotationConfig::sliding_window(ViewPolicy::Fixed(items_per_view))
        .with_interval(INTERVAL)
        .with_settle(SETTLE)
}

fn responsive() -> RotationConfig {
    RotationConfig::sliding_window(ViewPolicy::Responsive(Breakpoints::default()))
        .with_interval(INTERVAL)
        .with_settle(SETTLE)
}

/// One user or timer input against the engine.
#[derive(Debug, Clone)]
enum Op {
    Advance,
    Retreat,
    Jump(usize),
    Pause(bool),
    Hover(bool),
    Resize(u32),
    Wait(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Advance),
        Just(Op::Retreat),
        (0usize..12).prop_map(Op::Jump),
        any::<bool>().prop_map(Op::Pause),
        any::<bool>().prop_map(Op::Hover),
        (0u32..1600).prop_map(Op::Resize),
        (0u64..250).prop_map(Op::Wait),
    ]
}

// ===== Property 1: Index bounds =====

proptest! {
    #[test]
    fn index_stays_within_page_count(
        item_count in 0usize..10,
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut now = Instant::now();
        let mut engine = RotationEngine::mount(responsive(), item_count, 640, now);

        for op in ops {
            match op {
                Op::Advance => { engine.advance(now); }
                Op::Retreat => { engine.retreat(now); }
                Op::Jump(to) => { engine.jump_to(to, now); }
                Op::Pause(paused) => engine.set_paused(paused, now),
                Op::Hover(hovered) => engine.set_hovered(hovered, now),
                Op::Resize(width) => engine.recompute_items_per_view(width, now),
                Op::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    engine.tick(now);
                }
            }

            prop_assert!(engine.items_per_view() >= 1);
            prop_assert!(engine.current_index() < engine.page_count());
            prop_assert_eq!(
                engine.active_timer().is_some(),
                engine.is_rotatable() && !engine.is_paused(),
                "timer exists exactly while active, unpaused and rotatable"
            );
        }
    }
}

// ===== Property 2: Nothing to rotate =====

proptest! {
    #[test]
    fn collection_that_fits_never_moves(
        items_per_view in 1usize..4,
        shortfall in 0usize..4,
        waits in 1u32..20,
    ) {
        let item_count = items_per_view.saturating_sub(shortfall);
        let mut now = Instant::now();
        let mut engine = RotationEngine::mount(window(items_per_view), item_count, 0, now);

        prop_assert_eq!(engine.advance(now), Navigation::Refused(Refusal::NothingToRotate));
        prop_assert_eq!(engine.retreat(now), Navigation::Refused(Refusal::NothingToRotate));

        now += INTERVAL * waits;
        prop_assert_eq!(engine.tick(now), None);
        prop_assert_eq!(engine.current_index(), 0);
        prop_assert_eq!(engine.timer_registrations(), 0);
        prop_assert_eq!(engine.next_deadline(), None);
    }
}

// ===== Property 3: Advance/retreat inverse =====

proptest! {
    #[test]
    fn advance_then_retreat_restores_index(
        item_count in 2usize..12,
        items_per_view in 1usize..4,
        start in 0usize..12,
    ) {
        prop_assume!(item_count > items_per_view);
        let mut now = Instant::now();
        let mut engine = RotationEngine::mount(window(items_per_view), item_count, 0, now);
        let start = start % engine.page_count();
        engine.jump_to(start, now);
        now += SETTLE;

        prop_assert!(engine.advance(now).moved());
        now += SETTLE;
        prop_assert!(engine.retreat(now).moved());

        prop_assert_eq!(engine.current_index(), start);
    }
}

// ===== Property 4: Jump rules =====

proptest! {
    #[test]
    fn jump_is_refused_while_transitioning(
        item_count in 3usize..12,
        target in 0usize..12,
    ) {
        let now = Instant::now();
        let mut engine = RotationEngine::mount(window(1), item_count, 0, now);
        prop_assert!(engine.advance(now).moved());

        let during = now + SETTLE / 2;
        prop_assert_eq!(
            engine.jump_to(target, during),
            Navigation::Refused(Refusal::Transitioning)
        );
        prop_assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn jump_is_bounds_checked_when_idle(
        item_count in 2usize..12,
        items_per_view in 1usize..4,
        target in 0usize..16,
    ) {
        prop_assume!(item_count > items_per_view);
        let now = Instant::now();
        let mut engine = RotationEngine::mount(window(items_per_view), item_count, 0, now);

        let outcome = engine.jump_to(target, now);

        if target >= engine.page_count() {
            prop_assert_eq!(outcome, Navigation::Refused(Refusal::OutOfBounds));
            prop_assert_eq!(engine.current_index(), 0);
        } else if target == 0 {
            prop_assert_eq!(outcome, Navigation::Refused(Refusal::AlreadyShown));
        } else {
            prop_assert_eq!(outcome, Navigation::Moved { from: 0, to: target });
        }
    }
}

// ===== Property 5: Resize =====

proptest! {
    #[test]
    fn resize_resets_index(
        item_count in 4usize..12,
        steps in 1usize..4,
        width in 0u32..2000,
    ) {
        let mut now = Instant::now();
        let mut engine = RotationEngine::mount(responsive(), item_count, 0, now);
        for _ in 0..steps {
            engine.advance(now);
            now += SETTLE;
        }

        engine.recompute_items_per_view(width, now);

        prop_assert_eq!(engine.current_index(), 0);
        prop_assert_eq!(
            engine.items_per_view(),
            Breakpoints::default().items_per_view(width)
        );
    }
}

// ===== Property 6: Stale tokens =====

proptest! {
    #[test]
    fn replaced_or_released_token_never_advances(
        item_count in 2usize..8,
        unmount in any::<bool>(),
    ) {
        let now = Instant::now();
        let mut engine = RotationEngine::mount(window(1), item_count, 0, now);
        let old = engine.active_timer();
        prop_assert!(old.is_some());

        if unmount {
            engine.unmount();
        } else {
            // Pause and resume registers a fresh timer
            engine.set_paused(true, now);
            engine.set_paused(false, now);
            prop_assert_ne!(engine.active_timer(), old);
        }

        let later = now + INTERVAL * 3;
        if let Some(token) = old {
            prop_assert_eq!(engine.fire(token, later), None);
        }
        prop_assert_eq!(engine.current_index(), 0);
    }
}

// ===== Scenarios =====

#[test]
fn seven_items_three_per_view_cycle_through_five_pages() {
    let mut now = Instant::now();
    let mut engine = RotationEngine::mount(window(3), 7, 0, now);
    assert_eq!(engine.page_count(), 5);

    let mut seen = vec![engine.current_index()];
    for _ in 0..5 {
        now += INTERVAL;
        assert!(engine.tick(now).is_some_and(|nav| nav.moved()));
        seen.push(engine.current_index());
    }

    assert_eq!(seen, vec![0, 1, 2, 3, 4, 0]);
    assert_eq!(engine.visible_range(), 0..3);
}

#[test]
fn empty_collection_registers_no_timer() {
    let now = Instant::now();
    let engine = RotationEngine::mount(RotationConfig::single_item(), 0, 0, now);

    assert_eq!(engine.page_count(), 1);
    assert_eq!(engine.visible_range(), 0..0);
    assert_eq!(engine.timer_registrations(), 0);
}
