//! Integration tests for monad transformer stacks.
//!
//! Each transformer adds one effect on top of an arbitrary inner monad;
//! these tests exercise the stacks end to end, including over `Io`.

use kindling::control::Either;
use kindling::effect::{
    EitherT, Io, OptionT, StateT, either_t_lift, option_t_lift, state_t_lift,
};

#[derive(Clone, PartialEq, Debug)]
enum LookupError {
    Missing(String),
}

fn find_port(config: &[(String, i32)], key: &str) -> EitherT<Option<Either<LookupError, i32>>> {
    config
        .iter()
        .find(|(name, _)| name == key)
        .map_or_else(
            || EitherT::left(LookupError::Missing(key.to_string())),
            |(_, port)| EitherT::right(*port),
        )
}

#[test]
fn either_t_threads_domain_errors_through_option() {
    let config = vec![("port".to_string(), 8080)];

    let valid = find_port(&config, "port").map(|port| port + 1);
    assert_eq!(valid.run(), Some(Either::Right(8081)));

    let missing = find_port(&config, "host").map(|port| port + 1);
    assert_eq!(
        missing.run(),
        Some(Either::Left(LookupError::Missing("host".to_string())))
    );
}

#[test]
fn either_t_catch_recovers_and_flat_map_chains() {
    let config = vec![("port".to_string(), 8080)];

    let fallback = config.clone();
    let recovered = find_port(&config, "host")
        .catch(|_| EitherT::right(9090))
        .flat_map(move |port| find_port(&fallback, "port").map(move |base| base + port));

    assert_eq!(recovered.run(), Some(Either::Right(17_170)));
}

#[test]
fn either_t_lift_wraps_plain_inner_values() {
    let lifted = either_t_lift::<LookupError, _>(Some(42));
    assert_eq!(lifted.run(), Some(Either::Right(42)));
}

#[test]
fn option_t_chains_presence_through_result() {
    let stacked = OptionT::new(Ok::<_, String>(Some(20)))
        .flat_map(|n| OptionT::new(Ok::<_, String>(Some(n + 1))))
        .map(|n| n * 2);

    assert_eq!(stacked.run(), Ok(Some(42)));
}

#[test]
fn option_t_inner_error_beats_absence() {
    let failed: OptionT<Result<Option<i32>, String>> = OptionT::new(Err("io error".to_string()));
    let chained = failed.or_else(OptionT::some(7));

    assert_eq!(chained.run(), Err("io error".to_string()));
}

#[test]
fn option_t_get_or_else_collapses_to_the_inner_monad() {
    let lifted = option_t_lift(Ok::<_, String>(5));
    assert_eq!(lifted.get_or_else(0), Ok(5));

    let absent: OptionT<Result<Option<i32>, String>> = OptionT::none();
    assert_eq!(absent.get_or_else(0), Ok(0));
}

#[test]
fn state_t_threads_state_through_result() {
    let program = StateT::<i32, Result<((), i32), String>>::modify(|n| n * 2)
        .flat_map(|()| StateT::<i32, Result<((), i32), String>>::modify(|n| n + 1))
        .flat_map(|()| StateT::<i32, Result<(i32, i32), String>>::get());

    assert_eq!(program.run(20), Ok((41, 41)));
}

#[test]
fn state_t_inner_failure_aborts_the_rest() {
    let failing: StateT<i32, Result<(i32, i32), String>> =
        StateT::new(|_| Err("boom".to_string()));
    let program = failing.flat_map(|n| StateT::pure(n + 1));

    assert_eq!(program.run(0), Err("boom".to_string()));
}

#[test]
fn state_t_lift_keeps_the_state() {
    let lifted = state_t_lift::<i32, _>(Ok::<_, String>("hello"));
    assert_eq!(lifted.run(10), Ok(("hello", 10)));
}

#[test]
fn transformers_stack_over_io() {
    let either_stack = EitherT::new(Io::pure(Either::<String, i32>::Right(20)))
        .flat_map(|n| EitherT::new(Io::pure(Either::<String, i32>::Right(n + 1))))
        .map(|n| n * 2);
    assert_eq!(either_stack.run().run_unsafe(), Either::Right(42));

    let option_stack = OptionT::new(Io::pure(Some(20))).map(|n| n + 22);
    assert_eq!(option_stack.run().run_unsafe(), Some(42));

    let state_stack: StateT<i32, Io<((), i32)>> = StateT::put(42);
    let (unit, state) = state_stack.run(0).run_unsafe();
    assert_eq!((unit, state), ((), 42));
}

#[test]
fn state_t_eval_and_exec_project() {
    let step: StateT<i32, Option<(String, i32)>> = StateT::gets(|n: &i32| n.to_string());
    assert_eq!(step.eval(7), Some("7".to_string()));

    let step: StateT<i32, Option<(String, i32)>> = StateT::gets(|n: &i32| n.to_string());
    assert_eq!(step.exec(7), Some(7));
}
