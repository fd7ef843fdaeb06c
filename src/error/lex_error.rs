#[derive(Debug, Clone, PartialEq, Eq)]
/// An unrecognized character encountered outside any token rule.
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source.
    pub position:  usize,
    /// The source line where the error occurred.
    pub line:      usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}: Unrecognized character '{}' at position {}.",
               self.line, self.character, self.position)
    }
}

impl std::error::Error for LexError {}
