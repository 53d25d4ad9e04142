//! Compiler diagnostics.
//!
//! Lines are parsed in the csc/Roslyn format:
//!
//! ```text
//! /tmp/fixture.cs(12,5): error CS0246: The type or namespace name 'Type1005' could not be found
//! warning CS0169: The field 'Type1001._field0' is never used
//! ```

use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning; compilation still succeeds.
    Warning,
    /// Error; compilation fails.
    Error,
}

impl Severity {
    const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Info];

    /// Returns the keyword used in compiler output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message reported by a compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub severity: Severity,
    /// Diagnostic code such as `CS0246`.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Source location such as `fixture.cs(12,5)`.
    pub location: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic without code or location.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: None,
            message: message.into(),
            location: None,
        }
    }

    /// Creates a warning diagnostic without code or location.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            location: None,
        }
    }

    /// Returns true for error-severity diagnostics.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Parses one line of compiler output.
    ///
    /// Returns `None` for lines that carry no diagnostic.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = strip_project_suffix(line.trim());
        let (severity, location, rest) = split_severity(line)?;
        let (code, message) = split_code(rest);
        Some(Self {
            severity,
            code,
            message: message.to_string(),
            location,
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}", self.severity)?;
        if let Some(code) = &self.code {
            write!(f, " {code}")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Parses every diagnostic line in `output`.
#[must_use]
pub fn parse_output(output: &str) -> Vec<Diagnostic> {
    output.lines().filter_map(Diagnostic::parse_line).collect()
}

/// Finds the severity keyword that opens the diagnostic.
///
/// Messages may themselves contain `: error `, so the keyword is the
/// earliest match after the location, not the most severe one.
fn split_severity(line: &str) -> Option<(Severity, Option<String>, &str)> {
    for severity in Severity::ALL {
        if let Some(rest) = line
            .strip_prefix(severity.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
        {
            return Some((severity, None, rest));
        }
    }

    Severity::ALL
        .into_iter()
        .filter_map(|severity| {
            line.find(&format!(": {severity} "))
                .map(|pos| (pos, severity))
        })
        .min_by_key(|(pos, _)| *pos)
        .map(|(pos, severity)| {
            let location = line[..pos].trim();
            let rest = &line[pos + severity.as_str().len() + 3..];
            (
                severity,
                (!location.is_empty()).then(|| location.to_string()),
                rest,
            )
        })
}

/// Splits `CS0246: message` into code and message.
fn split_code(rest: &str) -> (Option<String>, &str) {
    if let Some((candidate, message)) = rest.split_once(':') {
        let candidate = candidate.trim();
        let looks_like_code = !candidate.is_empty()
            && candidate.chars().all(|c| c.is_ascii_alphanumeric())
            && candidate.chars().any(|c| c.is_ascii_digit());
        if looks_like_code {
            return (Some(candidate.to_string()), message.trim());
        }
    }
    (None, rest.trim())
}

/// Drops the ` [project.csproj]` suffix appended by MSBuild.
fn strip_project_suffix(line: &str) -> &str {
    match line.rfind(" [") {
        Some(pos) if line.ends_with(']') => line[..pos].trim_end(),
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_located_error() {
        let line = "/tmp/fixture.cs(12,5): error CS0246: The type or namespace name 'Type1005' could not be found";
        let diagnostic = Diagnostic::parse_line(line).unwrap();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.code.as_deref(), Some("CS0246"));
        assert_eq!(diagnostic.location.as_deref(), Some("/tmp/fixture.cs(12,5)"));
        assert_eq!(
            diagnostic.message,
            "The type or namespace name 'Type1005' could not be found"
        );
    }

    #[test]
    fn test_parse_unlocated_warning() {
        let diagnostic =
            Diagnostic::parse_line("warning CS0169: The field 'Type1001._field0' is never used")
                .unwrap();
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.code.as_deref(), Some("CS0169"));
        assert_eq!(diagnostic.location, None);
    }

    #[test]
    fn test_parse_msbuild_suffix() {
        let line = "Program.cs(3,1): error CS1002: ; expected [/src/app.csproj]";
        let diagnostic = Diagnostic::parse_line(line).unwrap();
        assert_eq!(diagnostic.message, "; expected");
        assert_eq!(diagnostic.location.as_deref(), Some("Program.cs(3,1)"));
    }

    #[test]
    fn test_parse_warning_mentioning_error() {
        let line = "a.cs(3,5): warning CS0618: 'Old' is obsolete: error prone API";
        let diagnostic = Diagnostic::parse_line(line).unwrap();
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.code.as_deref(), Some("CS0618"));
        assert_eq!(diagnostic.location.as_deref(), Some("a.cs(3,5)"));
        assert_eq!(diagnostic.message, "'Old' is obsolete: error prone API");

        let diagnostic =
            Diagnostic::parse_line("warning CS0618: 'Old' is obsolete: error prone API").unwrap();
        assert_eq!(diagnostic.severity, Severity::Warning);
    }

    #[test]
    fn test_parse_without_code() {
        let diagnostic = Diagnostic::parse_line("error: something went wrong").map(|d| d.message);
        // "error:" has no trailing space after the keyword, so it is not a diagnostic line
        assert_eq!(diagnostic, None);

        let diagnostic = Diagnostic::parse_line("error something went wrong").unwrap();
        assert_eq!(diagnostic.code, None);
        assert_eq!(diagnostic.message, "something went wrong");
    }

    #[test]
    fn test_parse_ignores_noise() {
        assert_eq!(Diagnostic::parse_line(""), None);
        assert_eq!(
            Diagnostic::parse_line("Microsoft (R) Visual C# Compiler version 4.8.0"),
            None
        );
    }

    #[test]
    fn test_parse_output() {
        let output = "\
Microsoft (R) Visual C# Compiler
a.cs(1,1): warning CS0169: unused
a.cs(2,1): error CS0246: missing type
";
        let diagnostics = parse_output(output);
        assert_eq!(diagnostics.len(), 2);
        assert!(!diagnostics[0].is_error());
        assert!(diagnostics[1].is_error());
    }

    #[test]
    fn test_display_round_trips_format() {
        let line = "a.cs(2,1): error CS0246: missing type";
        let diagnostic = Diagnostic::parse_line(line).unwrap();
        assert_eq!(diagnostic.to_string(), line);
        assert_eq!(Diagnostic::error("boom").to_string(), "error: boom");
    }
}
