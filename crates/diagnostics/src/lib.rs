use ariadne::{Color, Label, Report, ReportKind, Source};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub file_id: u32,
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(file_id: u32, start: u32, end: u32) -> Self {
        Self { file_id, start, end }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(&self, other: Span) -> Span {
        Span::new(self.file_id, self.start, other.end)
    }
}

#[derive(Debug, Clone)]
pub enum DiagKind {
    Error(ErrorCode),
    Note(NoteCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
}

/// Non-fatal notes: the input was syntactically valid but fell outside the
/// supported mapping subset, so a fallback was used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCode {
    UnsupportedMember,
    UnsupportedType,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagKind,
    pub span: Span,
    pub message: String,
    pub labels: Vec<(Span, String)>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: DiagKind::Error(code),
            span,
            message: message.into(),
            labels: Vec::new(),
        }
    }

    pub fn note(code: NoteCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind: DiagKind::Note(code),
            span,
            message: message.into(),
            labels: Vec::new(),
        }
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push((span, message.into()));
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagKind::Error(_))
    }
}

pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
    files: HashMap<u32, (String, String)>, // file_id -> (name, content)
    next_file_id: u32,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            files: HashMap::new(),
            next_file_id: 0,
        }
    }

    pub fn add_file(&mut self, name: String, content: String) -> u32 {
        let file_id = self.next_file_id;
        self.next_file_id += 1;
        self.files.insert(file_id, (name, content));
        file_id
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn print_all(&self) {
        for diagnostic in &self.diagnostics {
            self.print_diagnostic(diagnostic);
        }
    }

    fn print_diagnostic(&self, diagnostic: &Diagnostic) {
        let Some((file_name, file_content)) = self.files.get(&diagnostic.span.file_id) else {
            eprintln!("{}", diagnostic.message);
            return;
        };

        let (report_kind, color) = match diagnostic.kind {
            DiagKind::Error(_) => (ReportKind::Error, Color::Red),
            DiagKind::Note(_) => (ReportKind::Advice, Color::Blue),
        };

        let mut report = Report::build(report_kind, file_name, diagnostic.span.start as usize)
            .with_message(&diagnostic.message)
            .with_label(
                Label::new((
                    file_name,
                    diagnostic.span.start as usize..diagnostic.span.end as usize,
                ))
                .with_message(&diagnostic.message)
                .with_color(color),
            );

        for (span, message) in &diagnostic.labels {
            report = report.with_label(
                Label::new((file_name, span.start as usize..span.end as usize))
                    .with_message(message)
                    .with_color(Color::Cyan),
            );
        }

        let _ = report
            .finish()
            .eprint((file_name, Source::from(file_content)));
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_are_not_errors() {
        let mut reporter = Reporter::new();
        let file_id = reporter.add_file("t.d.ts".to_string(), "keyof T".to_string());
        reporter.report(Diagnostic::note(
            NoteCode::UnsupportedType,
            Span::new(file_id, 0, 7),
            "unsupported type",
        ));
        assert!(!reporter.has_errors());

        reporter.report(Diagnostic::error(
            ErrorCode::ParseError,
            Span::new(file_id, 0, 1),
            "expected declaration",
        ));
        assert!(reporter.has_errors());
    }

    #[test]
    fn span_join_covers_both_endpoints() {
        let a = Span::new(0, 2, 5);
        let b = Span::new(0, 9, 12);
        let joined = a.to(b);
        assert_eq!((joined.start, joined.end), (2, 12));
        assert_eq!(joined.len(), 10);
    }
}
