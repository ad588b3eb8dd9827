use rpn_calc::{BinaryOp, CalculatorModel, OperationError, StackSnapshot};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn model_with_stack(values: &[f64]) -> CalculatorModel {
    let mut model = CalculatorModel::new();
    for &v in values {
        model.set_accumulator(v);
        model.push();
    }
    model
}

fn counting(model: &mut CalculatorModel) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    model.add_listener(move |_: f64, _: &StackSnapshot| counter.set(counter.get() + 1));
    count
}

#[test]
fn test_push_then_pop_restores_accumulator_and_depth() {
    for v in [0.0, -1.5, 42.0, f64::INFINITY] {
        let mut model = model_with_stack(&[1.0, 2.0]);
        let depth = model.stack_size();

        model.set_accumulator(v);
        model.push();
        model.set_accumulator(99.0);
        assert!(model.pop());

        assert_eq!(model.accumulator(), v);
        assert_eq!(model.stack_size(), depth);
    }
}

#[test]
fn test_nan_propagates_as_ordinary_value() {
    let mut model = CalculatorModel::new();
    model.set_accumulator(f64::NAN);
    model.push();
    model.set_accumulator(1.0);
    model.add().unwrap();
    assert!(model.accumulator().is_nan());
}

#[test]
fn test_swap_twice_is_identity() {
    let mut model = model_with_stack(&[7.0]);
    model.set_accumulator(3.0);

    model.swap();
    model.swap();

    assert_eq!(model.accumulator(), 3.0);
    assert_eq!(model.top(), Some(7.0));
    assert_eq!(model.stack_size(), 1);
}

#[test]
fn test_add_sub_mul() {
    let mut model = model_with_stack(&[3.0]);
    model.set_accumulator(4.0);
    model.add().unwrap();
    assert_eq!(model.accumulator(), 7.0);
    assert_eq!(model.stack_size(), 0);

    let mut model = model_with_stack(&[3.0]);
    model.set_accumulator(4.0);
    model.sub().unwrap();
    assert_eq!(model.accumulator(), -1.0);

    let mut model = model_with_stack(&[3.0]);
    model.set_accumulator(4.0);
    model.mul().unwrap();
    assert_eq!(model.accumulator(), 12.0);
}

#[test]
fn test_division() {
    let mut model = model_with_stack(&[10.0]);
    model.set_accumulator(2.0);
    model.div().unwrap();
    assert_eq!(model.accumulator(), 5.0);
    assert_eq!(model.stack_size(), 0);
}

#[test]
fn test_division_by_zero_leaves_state_untouched() {
    let mut model = model_with_stack(&[10.0]);
    model.set_accumulator(0.0);
    let notified = counting(&mut model);

    assert_eq!(model.div(), Err(OperationError::DivisionByZero));
    assert_eq!(model.accumulator(), 0.0);
    assert_eq!(model.stack_snapshot().as_slice(), &[10.0]);
    assert_eq!(notified.get(), 0);
}

#[test]
fn test_arithmetic_on_empty_stack_fails_without_mutation() {
    for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
        let mut model = CalculatorModel::new();
        model.set_accumulator(5.0);
        let notified = counting(&mut model);

        assert_eq!(
            model.apply(op),
            Err(OperationError::InsufficientOperands { operation: op })
        );
        assert_eq!(model.accumulator(), 5.0);
        assert_eq!(model.stack_size(), 0);
        assert_eq!(notified.get(), 0);
    }
}

#[test]
fn test_insufficient_operands_checked_before_division_by_zero() {
    let mut model = CalculatorModel::new();
    assert_eq!(
        model.div(),
        Err(OperationError::InsufficientOperands {
            operation: BinaryOp::Div
        })
    );
}

#[test]
fn test_drop_all_notifies_once_then_is_noop() {
    let mut model = model_with_stack(&[1.0, 2.0, 3.0]);
    let notified = counting(&mut model);

    assert!(model.drop_all());
    assert_eq!(model.stack_size(), 0);
    assert_eq!(notified.get(), 1);

    assert!(!model.drop_all());
    assert_eq!(notified.get(), 1);
}

#[test]
fn test_empty_stack_operations_are_silent_noops() {
    let mut model = CalculatorModel::new();
    model.set_accumulator(8.0);
    let notified = counting(&mut model);

    assert!(!model.pop());
    assert!(!model.drop_top());
    assert!(!model.swap());

    assert_eq!(model.accumulator(), 8.0);
    assert_eq!(notified.get(), 0);
}

#[test]
fn test_drop_top_keeps_accumulator() {
    let mut model = model_with_stack(&[1.0, 2.0]);
    model.set_accumulator(5.0);

    assert!(model.drop_top());
    assert_eq!(model.accumulator(), 5.0);
    assert_eq!(model.stack_snapshot().as_slice(), &[1.0]);
}

#[test]
fn test_clear_accumulator_always_notifies() {
    let mut model = CalculatorModel::new();
    let notified = counting(&mut model);

    model.clear_accumulator();
    model.clear_accumulator();

    assert_eq!(model.accumulator(), 0.0);
    assert_eq!(notified.get(), 2);
}

#[test]
fn test_each_successful_call_notifies_once_with_current_state() {
    let mut model = CalculatorModel::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    model.add_listener(move |acc: f64, stack: &StackSnapshot| {
        sink.borrow_mut().push((acc, stack.clone()));
    });

    model.set_accumulator(1.0);
    model.push();
    model.set_accumulator(2.0);
    model.push();
    model.swap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    let (acc, stack) = &seen[4];
    assert_eq!(*acc, model.accumulator());
    assert_eq!(stack, &model.stack_snapshot());
    assert_eq!(stack.as_slice(), &[2.0, 1.0]);
}

#[test]
fn test_snapshot_is_independent_of_later_changes() {
    let mut model = model_with_stack(&[1.0, 2.0]);
    let snapshot = model.stack_snapshot();

    model.set_accumulator(3.0);
    model.push();
    model.drop_all();

    assert_eq!(snapshot.as_slice(), &[2.0, 1.0]);
    assert_eq!(model.stack_size(), 0);

    let mut copy = snapshot.into_vec();
    copy.push(100.0);
    assert_eq!(model.stack_size(), 0);
}
