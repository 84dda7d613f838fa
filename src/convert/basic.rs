//! Positions, ranges, locations, document identifiers and diagnostics.

use super::Converter;
use crate::host::{self, TextDocument};
use crate::types::{
    Diagnostic, DiagnosticCode, DiagnosticRelatedInformation, DiagnosticSeverity, DiagnosticTag,
    Location, Position, Range, TextDocumentIdentifier, TextDocumentPositionParams, TextEdit,
    VersionedTextDocumentIdentifier,
};

impl Converter {
    /// Create a wire position with the same coordinates.
    pub fn as_position(&self, position: &host::Position) -> Position {
        Position::new(position.line, position.character)
    }

    /// `None` in, `None` out.
    pub fn as_position_opt(&self, position: Option<&host::Position>) -> Option<Position> {
        position.map(|position| self.as_position(position))
    }

    /// Create a wire range from a host range.
    pub fn as_range(&self, range: &host::Range) -> Range {
        Range::new(self.as_position(&range.start), self.as_position(&range.end))
    }

    /// `None` in, `None` out.
    pub fn as_range_opt(&self, range: Option<&host::Range>) -> Option<Range> {
        range.map(|range| self.as_range(range))
    }

    /// Create a wire location, rendering its URI.
    pub fn as_location(&self, location: &host::Location) -> Location {
        Location::new(self.as_uri(&location.uri), self.as_range(&location.range))
    }

    /// `None` in, `None` out.
    pub fn as_location_opt(&self, location: Option<&host::Location>) -> Option<Location> {
        location.map(|location| self.as_location(location))
    }

    /// Identify a document by its rendered URI.
    pub fn as_text_document_identifier<D>(&self, document: &D) -> TextDocumentIdentifier
    where
        D: TextDocument + ?Sized,
    {
        TextDocumentIdentifier::new(self.as_uri(document.uri()))
    }

    /// Identify a document by URI and current version.
    pub fn as_versioned_text_document_identifier<D>(
        &self,
        document: &D,
    ) -> VersionedTextDocumentIdentifier
    where
        D: TextDocument + ?Sized,
    {
        VersionedTextDocumentIdentifier::new(self.as_uri(document.uri()), document.version())
    }

    /// A position inside a document.
    pub fn as_text_document_position_params<D>(
        &self,
        document: &D,
        position: &host::Position,
    ) -> TextDocumentPositionParams
    where
        D: TextDocument + ?Sized,
    {
        TextDocumentPositionParams {
            text_document: self.as_text_document_identifier(document),
            position: self.as_position(position),
        }
    }

    /// Shift a zero-based host severity onto the 1-4 wire scale.
    pub fn as_diagnostic_severity(&self, severity: host::DiagnosticSeverity) -> DiagnosticSeverity {
        match severity {
            host::DiagnosticSeverity::Error => DiagnosticSeverity::Error,
            host::DiagnosticSeverity::Warning => DiagnosticSeverity::Warning,
            host::DiagnosticSeverity::Information => DiagnosticSeverity::Information,
            host::DiagnosticSeverity::Hint => DiagnosticSeverity::Hint,
        }
    }

    /// Keeps the tags the protocol knows about. `None` when none survive.
    pub fn as_diagnostic_tags(&self, tags: &[host::DiagnosticTag]) -> Option<Vec<DiagnosticTag>> {
        let converted: Vec<DiagnosticTag> = tags
            .iter()
            .filter_map(|tag| match *tag {
                host::DiagnosticTag::UNNECESSARY => Some(DiagnosticTag::Unnecessary),
                host::DiagnosticTag::DEPRECATED => Some(DiagnosticTag::Deprecated),
                host::DiagnosticTag(other) => {
                    log::trace!("dropping unknown diagnostic tag {}", other);
                    None
                }
            })
            .collect();

        if converted.is_empty() {
            None
        } else {
            Some(converted)
        }
    }

    /// Copy a numeric or string diagnostic code.
    pub fn as_diagnostic_code(&self, code: &host::DiagnosticCode) -> DiagnosticCode {
        match code {
            host::DiagnosticCode::Number(number) => DiagnosticCode::Number(*number),
            host::DiagnosticCode::String(string) => DiagnosticCode::String(string.clone()),
        }
    }

    /// Related locations with their messages.
    pub fn as_related_information(
        &self,
        information: &host::DiagnosticRelatedInformation,
    ) -> DiagnosticRelatedInformation {
        DiagnosticRelatedInformation {
            location: self.as_location(&information.location),
            message: information.message.clone(),
        }
    }

    /// Convert one diagnostic, copying each optional field that is set.
    pub fn as_diagnostic(&self, diagnostic: &host::Diagnostic) -> Diagnostic {
        let mut result = Diagnostic::new_simple(self.as_range(&diagnostic.range), &diagnostic.message);
        result.severity = diagnostic
            .severity
            .map(|severity| self.as_diagnostic_severity(severity));
        result.code = diagnostic
            .code
            .as_ref()
            .map(|code| self.as_diagnostic_code(code));
        result.source = diagnostic.source.clone();
        result.tags = self.as_diagnostic_tags(&diagnostic.tags);
        if !diagnostic.related_information.is_empty() {
            result.related_information = Some(
                diagnostic
                    .related_information
                    .iter()
                    .map(|information| self.as_related_information(information))
                    .collect(),
            );
        }
        result
    }

    /// Convert diagnostics in order.
    pub fn as_diagnostics(&self, diagnostics: &[host::Diagnostic]) -> Vec<Diagnostic> {
        diagnostics
            .iter()
            .map(|diagnostic| self.as_diagnostic(diagnostic))
            .collect()
    }

    /// `None` in, `None` out.
    pub fn as_diagnostics_opt(
        &self,
        diagnostics: Option<&[host::Diagnostic]>,
    ) -> Option<Vec<Diagnostic>> {
        diagnostics.map(|diagnostics| self.as_diagnostics(diagnostics))
    }

    /// Create a wire text edit.
    pub fn as_text_edit(&self, edit: &host::TextEdit) -> TextEdit {
        TextEdit::new(self.as_range(&edit.range), edit.new_text.clone())
    }

    /// Convert text edits in order.
    pub fn as_text_edits(&self, edits: &[host::TextEdit]) -> Vec<TextEdit> {
        edits.iter().map(|edit| self.as_text_edit(edit)).collect()
    }
}
