/// A rejected form submission.
///
/// The `Display` text of each variant is shown verbatim to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill out all fields.")]
    MissingField,

    #[error("Pennies must be integer, volume numeric.")]
    ParseError,

    #[error("Pennies and volume must be positive.")]
    OutOfRange,
}
