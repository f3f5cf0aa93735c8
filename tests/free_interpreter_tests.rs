//! Interpreting one `Free` program under different handlers.
//!
//! The program is data; the handler decides what each instruction means.
//! Every handler that implements the same arithmetic must produce the same
//! result.

use kindling::control::Free;

enum Arith {
    Value(i64),
    Add(i64, i64),
    Subtract(i64, i64),
}

fn decode_i64(raw: Box<dyn std::any::Any>) -> i64 {
    *raw.downcast::<i64>().expect("arithmetic answers with i64")
}

fn value(n: i64) -> Free<Arith, i64> {
    Free::<Arith, ()>::lift(Arith::Value(n), decode_i64)
}

fn add(left: i64, right: i64) -> Free<Arith, i64> {
    Free::<Arith, ()>::lift(Arith::Add(left, right), decode_i64)
}

fn subtract(left: i64, right: i64) -> Free<Arith, i64> {
    Free::<Arith, ()>::lift(Arith::Subtract(left, right), decode_i64)
}

fn program() -> Free<Arith, i64> {
    value(10)
        .flat_map(|a| add(a, 10))
        .flat_map(|a| subtract(a, 50))
}

#[test]
fn direct_handler_computes_minus_thirty() {
    let result = program().interpret(|instruction| match instruction {
        Arith::Value(n) => Box::new(n),
        Arith::Add(left, right) => Box::new(left + right),
        Arith::Subtract(left, right) => Box::new(left - right),
    });

    assert_eq!(result, -30);
}

#[test]
fn tracing_handler_computes_the_same_result() {
    let mut trace = Vec::new();

    let result = program().interpret(|instruction| match instruction {
        Arith::Value(n) => {
            trace.push(format!("value({n})"));
            Box::new(n)
        }
        Arith::Add(left, right) => {
            trace.push(format!("add({left}, {right})"));
            Box::new(left + right)
        }
        Arith::Subtract(left, right) => {
            trace.push(format!("subtract({left}, {right})"));
            Box::new(left - right)
        }
    });

    assert_eq!(result, -30);
    assert_eq!(
        trace,
        vec![
            "value(10)".to_string(),
            "add(10, 10)".to_string(),
            "subtract(20, 50)".to_string(),
        ]
    );
}

#[test]
fn checked_handler_computes_the_same_result() {
    let result = program().try_interpret(|instruction| match instruction {
        Arith::Value(n) => Box::new(n),
        Arith::Add(left, right) => Box::new(left.saturating_add(right)),
        Arith::Subtract(left, right) => Box::new(left.saturating_sub(right)),
    });

    assert_eq!(result.expect("well-typed program interprets cleanly"), -30);
}

#[test]
fn pure_programs_never_consult_the_handler() {
    let result = Free::<Arith, i64>::pure(7).interpret(|_| unreachable!("no instructions"));
    assert_eq!(result, 7);
}

#[test]
fn mapped_program_transforms_the_final_value() {
    let negated = program().map(|n| -n).interpret(|instruction| match instruction {
        Arith::Value(n) => Box::new(n),
        Arith::Add(left, right) => Box::new(left + right),
        Arith::Subtract(left, right) => Box::new(left - right),
    });

    assert_eq!(negated, 30);
}
