//! Observing the solver's successive guesses.

/// What the solver should do after reporting a guess to the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    /// Abandon the iteration; the solver returns `SqrtError::Stopped`.
    Stop,
}

/// One iteration as seen by an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessStep<T> {
    /// Zero-based iteration index
    pub iteration: usize,
    /// The guess entering this iteration (the value the trace reports)
    pub guess: T,
    /// The refined guess produced from it; `None` when `n / guess` could not
    /// be formed, in which case the solver fails with `DivisionByZero`
    pub better_guess: Option<T>,
    /// Whether `guess` and `better_guess` are close, ending the iteration
    pub converged: bool,
}

/// Adapts a plain guess sink, such as a printer, into a solver callback.
///
/// The sink sees each guess once, in order, before its successor is computed.
pub fn emit_guesses<T: Copy, F>(mut sink: F) -> impl FnMut(&GuessStep<T>) -> Control
where
    F: FnMut(T),
{
    move |step: &GuessStep<T>| {
        sink(step.guess);
        Control::Continue
    }
}
