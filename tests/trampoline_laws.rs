//! Monad laws and resumption behavior for `Trampoline`.

use kindling::control::Trampoline;
use proptest::prelude::*;

fn add_one(n: i32) -> Trampoline<i32> {
    Trampoline::done(n.wrapping_add(1))
}

fn double(n: i32) -> Trampoline<i32> {
    Trampoline::defer(move || Trampoline::done(n.wrapping_mul(2)))
}

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            Trampoline::pure(value).flat_map(add_one).run(),
            add_one(value).run()
        );
    }

    #[test]
    fn prop_right_identity(value in any::<i32>()) {
        prop_assert_eq!(
            Trampoline::done(value).flat_map(Trampoline::pure).run(),
            value
        );
    }

    #[test]
    fn prop_associativity(value in any::<i32>()) {
        let nested = Trampoline::done(value).flat_map(add_one).flat_map(double).run();
        let flat = Trampoline::done(value)
            .flat_map(|n| add_one(n).flat_map(double))
            .run();
        prop_assert_eq!(nested, flat);
    }

    #[test]
    fn prop_map_agrees_with_flat_map_pure(value in any::<i32>()) {
        prop_assert_eq!(
            Trampoline::done(value).map(|n| n.wrapping_mul(3)).run(),
            Trampoline::done(value)
                .flat_map(|n| Trampoline::done(n.wrapping_mul(3)))
                .run()
        );
    }
}

#[test]
fn resume_exposes_one_step_at_a_time() {
    let deferred = Trampoline::defer(|| Trampoline::done(42));

    match deferred.resume() {
        kindling::control::Either::Left(next) => assert_eq!(next().run(), 42),
        kindling::control::Either::Right(_) => panic!("expected a pending step"),
    }

    match Trampoline::done(7).resume() {
        kindling::control::Either::Left(_) => panic!("expected a finished value"),
        kindling::control::Either::Right(value) => assert_eq!(value, 7),
    }
}

#[test]
fn then_sequences_and_discards() {
    let program = Trampoline::defer(|| Trampoline::done("ignored")).then(Trampoline::done(42));
    assert_eq!(program.run(), 42);
}

#[test]
fn deep_interleaved_binds_stay_flat() {
    fn count_up(n: u32, limit: u32) -> Trampoline<u32> {
        if n >= limit {
            Trampoline::done(n)
        } else {
            Trampoline::defer(move || count_up(n + 1, limit)).flat_map(Trampoline::done)
        }
    }

    assert_eq!(count_up(0, 100_000).run(), 100_000);
}
