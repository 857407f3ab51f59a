/// Default nesting limit for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configuration options for the parser.
///
/// # Default
///
/// `max_depth` defaults to [`DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How deeply arrays and objects may nest.
    ///
    /// The top-level array or object is at depth 1, so a limit of 0 accepts
    /// only scalar documents. Input that nests deeper fails with
    /// "Nesting too deep" at the bracket that crosses the limit.
    ///
    /// The parser keeps its own stack of open containers rather than
    /// recursing, so for the parse itself this bounds memory use, not native
    /// stack use. A [`Value`](crate::Value) built by
    /// [`DomBuilder`](crate::DomBuilder) also drops without recursion, but its
    /// `Clone`, `PartialEq` and `Display` recurse once per level, so keep the
    /// limit near the default when those are used on untrusted input.
    ///
    /// # Default
    ///
    /// `1000`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
