use thiserror::Error;

/// Errors a generator may surface instead of a candidate.
///
/// The enforcement boundary converts these into generator-failure
/// candidates, which the gate's degenerate screen rejects. A generator
/// error can therefore never end in an admitted output.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("generation failed: {0}")]
    Failed(String),

    #[error("generator produced no output")]
    EmptyOutput,
}
