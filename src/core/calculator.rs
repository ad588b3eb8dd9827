use crate::domain::model::{BinaryOp, CalculatorState, StackSnapshot};
use crate::domain::ports::{CalculatorListener, ListenerId};
use crate::utils::error::OperationError;
use std::collections::BTreeMap;
use std::fmt;

/// RPN calculator state: an accumulator being edited plus an operand stack.
///
/// Every call that changes observable state notifies each registered
/// listener exactly once, in registration order, after the change is
/// complete. Calls that leave the state untouched notify nobody.
pub struct CalculatorModel {
    accumulator: f64,
    // bottom..top
    stack: Vec<f64>,
    listeners: BTreeMap<ListenerId, Box<dyn CalculatorListener>>,
    next_listener_id: u64,
}

impl CalculatorModel {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            stack: Vec::new(),
            listeners: BTreeMap::new(),
            next_listener_id: 1,
        }
    }

    /// Registers a listener for all subsequent changes.
    pub fn add_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: CalculatorListener + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.saturating_add(1);
        self.listeners.insert(id, Box::new(listener));
        tracing::debug!("Registered listener #{}", id.get());
        id
    }

    /// Same as [`add_listener`](Self::add_listener), but `None` is ignored.
    pub fn add_optional_listener<L>(&mut self, listener: Option<L>) -> Option<ListenerId>
    where
        L: CalculatorListener + 'static,
    {
        listener.map(|l| self.add_listener(l))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(&id).is_some();
        if removed {
            tracing::debug!("Removed listener #{}", id.get());
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_change(&mut self) {
        let snapshot = StackSnapshot::from_bottom_up(&self.stack);
        tracing::debug!(
            accumulator = self.accumulator,
            depth = snapshot.len(),
            listeners = self.listeners.len(),
            "State changed"
        );
        for listener in self.listeners.values_mut() {
            listener.on_change(self.accumulator, &snapshot);
        }
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn set_accumulator(&mut self, value: f64) {
        self.accumulator = value;
        self.notify_change();
    }

    /// Resets the accumulator to zero. Notifies even if it already was zero.
    pub fn clear_accumulator(&mut self) {
        self.accumulator = 0.0;
        self.notify_change();
    }

    /// Pushes the accumulator; the accumulator keeps its value.
    pub fn push(&mut self) {
        self.stack.push(self.accumulator);
        self.notify_change();
    }

    /// Moves the top of the stack into the accumulator. Returns `false`
    /// without notifying when the stack is empty.
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(top) => {
                self.accumulator = top;
                self.notify_change();
                true
            }
            None => false,
        }
    }

    /// Discards the top of the stack, leaving the accumulator alone.
    pub fn drop_top(&mut self) -> bool {
        if self.stack.pop().is_some() {
            self.notify_change();
            true
        } else {
            false
        }
    }

    pub fn drop_all(&mut self) -> bool {
        if self.stack.is_empty() {
            return false;
        }
        self.stack.clear();
        self.notify_change();
        true
    }

    /// Exchanges the accumulator with the top of the stack.
    pub fn swap(&mut self) -> bool {
        match self.stack.last_mut() {
            Some(top) => {
                std::mem::swap(top, &mut self.accumulator);
                self.notify_change();
                true
            }
            None => false,
        }
    }

    pub fn top(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// Independent copy of the stack, top-first.
    pub fn stack_snapshot(&self) -> StackSnapshot {
        StackSnapshot::from_bottom_up(&self.stack)
    }

    pub fn state(&self) -> CalculatorState {
        CalculatorState {
            accumulator: self.accumulator,
            stack: self.stack_snapshot(),
        }
    }

    /// Combines the top of the stack (left) with the accumulator (right).
    ///
    /// All checks run before the stack is touched, so a failed call leaves
    /// the model exactly as it was and notifies nobody.
    pub fn apply(&mut self, operation: BinaryOp) -> Result<(), OperationError> {
        let left = self
            .top()
            .ok_or(OperationError::InsufficientOperands { operation })?;

        // -0.0 == 0.0 也算除以零
        if operation == BinaryOp::Div && self.accumulator == 0.0 {
            tracing::debug!("Rejected division of {} by zero", left);
            return Err(OperationError::DivisionByZero);
        }

        self.stack.pop();
        self.accumulator = operation.evaluate(left, self.accumulator);
        self.notify_change();
        Ok(())
    }

    pub fn add(&mut self) -> Result<(), OperationError> {
        self.apply(BinaryOp::Add)
    }

    pub fn sub(&mut self) -> Result<(), OperationError> {
        self.apply(BinaryOp::Sub)
    }

    pub fn mul(&mut self) -> Result<(), OperationError> {
        self.apply(BinaryOp::Mul)
    }

    pub fn div(&mut self) -> Result<(), OperationError> {
        self.apply(BinaryOp::Div)
    }
}

impl Default for CalculatorModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalculatorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorModel")
            .field("accumulator", &self.accumulator)
            .field("stack", &self.stack_snapshot())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
