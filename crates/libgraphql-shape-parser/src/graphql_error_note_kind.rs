/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// Context about the error, e.g. "`[` opened here".
    ///
    /// Rendered as `= note: ...`.
    General,

    /// An actionable suggestion, e.g. "did you mean `name: Type`?".
    ///
    /// Rendered as `= help: ...`.
    Help,
}

impl GraphQLErrorNoteKind {
    pub(crate) fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
        }
    }
}
