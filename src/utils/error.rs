use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvertirError {
    #[error("Solo se permiten valores numéricos enteros.")]
    NonNumeric { input: String },

    #[error("El numero debe estar entre 0 y 99.999.")]
    OutOfRange { value: String },

    #[error("Input closed before a valid number was entered")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InvertirError {
    /// Input errors are answered with a diagnostic and a new prompt.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            InvertirError::NonNumeric { .. } | InvertirError::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InvertirError>;
