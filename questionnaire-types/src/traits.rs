use crate::{Control, QuestionId};

/// Trait for UI layers that present questions and report input.
///
/// Renderers receive the controls to draw and a callback to invoke with
/// `(question id, current value)` whenever the user's input changes or is
/// confirmed. Empty values may be reported freely; collectors ignore them.
/// The callback is borrowed for the duration of `present` only.
pub trait QuestionRenderer {
    /// The error type for this renderer.
    type Error: Into<anyhow::Error>;

    /// Present the controls and forward input until the user is done.
    fn present(
        &self,
        controls: &[Control],
        on_answer: &mut dyn FnMut(QuestionId, &str),
    ) -> Result<(), Self::Error>;
}
