//! One-call pipeline: source text -> lexer -> parser -> extraction -> Scala
//! text. The contract is total: any input yields a string, and problems are
//! reported through the diagnostic side channel instead of a failure path.

pub use diagnostics::{DiagKind, Diagnostic, ErrorCode, NoteCode, Span};

use extract::extract;
use syntax::{Lexer, Parser};

pub struct Conversion {
    pub scala: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts TypeScript declaration source to Scala 3 declarations,
/// discarding diagnostics.
pub fn convert(source: &str) -> String {
    convert_with_diagnostics(source, 0).scala
}

/// Converts TypeScript declaration source to Scala 3 declarations. Parser
/// diagnostics come first, extraction diagnostics after, both tagged with
/// `file_id` so a `Reporter` can resolve their spans.
pub fn convert_with_diagnostics(source: &str, file_id: u32) -> Conversion {
    if source.trim().is_empty() {
        return Conversion {
            scala: String::new(),
            diagnostics: Vec::new(),
        };
    }

    let mut lexer = Lexer::new(source.to_string(), file_id);
    let tokens = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let (module, mut diagnostics) = parser.parse();

    let extraction = extract(&module, source);
    diagnostics.extend(extraction.diagnostics);

    Conversion {
        scala: emit_scala::emit(&extraction.declarations),
        diagnostics,
    }
}
