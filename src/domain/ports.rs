use crate::domain::model::StackSnapshot;

/// Receives the calculator state after every change.
pub trait CalculatorListener {
    fn on_change(&mut self, accumulator: f64, stack: &StackSnapshot);
}

impl<F> CalculatorListener for F
where
    F: FnMut(f64, &StackSnapshot),
{
    fn on_change(&mut self, accumulator: f64, stack: &StackSnapshot) {
        self(accumulator, stack)
    }
}

/// Handle returned on registration, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    pub fn get(self) -> u64 {
        self.0
    }
}
