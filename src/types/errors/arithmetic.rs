/// An error raised by the checked arithmetic of `Money`.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "The error messages describe the variants")]
pub enum ArithmeticError {
    #[error("The resulting amount does not fit into 64 bits")]
    Overflow,
}
