//! Fixture specifications and the canonical registry.

use crate::error::{ConfigError, Result};
use crate::params::non_zero;
use serde::Serialize;
use std::borrow::Cow;
use std::num::NonZeroUsize;

/// Describes one fixture: its namespace, size and output file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FixtureSpec {
    /// Assembly name, also used as the namespace of the generated source.
    pub name: Cow<'static, str>,
    /// Total number of types to generate.
    pub type_count: NonZeroUsize,
    /// File name of the compiled module inside the output directory.
    pub output_id: Cow<'static, str>,
}

impl FixtureSpec {
    /// Small fixture with 50 types for basic scenarios.
    pub const SMALL: Self = Self::from_static("TestAssembly.Small", 50, "TestAssembly.Small.dll");

    /// Medium fixture with 500 types for moderate complexity.
    pub const MEDIUM: Self =
        Self::from_static("TestAssembly.Medium", 500, "TestAssembly.Medium.dll");

    /// Large fixture with 2000 types for scalability testing.
    pub const LARGE: Self = Self::from_static("TestAssembly.Large", 2000, "TestAssembly.Large.dll");

    /// The canonical fixtures in generation order.
    pub const CANONICAL: [Self; 3] = [Self::SMALL, Self::MEDIUM, Self::LARGE];

    const fn from_static(name: &'static str, type_count: usize, output_id: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            type_count: non_zero(type_count),
            output_id: Cow::Borrowed(output_id),
        }
    }

    /// Creates a custom fixture spec.
    ///
    /// # Errors
    /// Returns `ConfigError` if the name is not a dotted identifier, the type
    /// count is zero or the output identifier contains a path separator.
    pub fn new(
        name: impl Into<String>,
        type_count: usize,
        output_id: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let output_id = output_id.into();

        validate_name(&name)?;
        let type_count = NonZeroUsize::new(type_count).ok_or(ConfigError::ZeroTypeCount)?;
        if output_id.is_empty()
            || output_id == "."
            || output_id == ".."
            || output_id.contains(['/', '\\'])
        {
            return Err(ConfigError::InvalidOutputId { output_id });
        }

        Ok(Self {
            name: Cow::Owned(name),
            type_count,
            output_id: Cow::Owned(output_id),
        })
    }

    /// Creates a spec whose output file is `<name>.dll`.
    ///
    /// # Errors
    /// Same as [`FixtureSpec::new`].
    pub fn named(name: impl Into<String>, type_count: usize) -> Result<Self> {
        let name = name.into();
        let output_id = format!("{name}.dll");
        Self::new(name, type_count, output_id)
    }

    /// Looks up a canonical fixture by short name or full assembly name.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownFixture` if nothing matches.
    pub fn by_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::CANONICAL
            .into_iter()
            .find(|spec| {
                spec.name.eq_ignore_ascii_case(wanted)
                    || spec.short_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ConfigError::UnknownFixture {
                name: name.to_string(),
            })
    }

    /// Returns the last dotted segment of the name (`Small` for `TestAssembly.Small`).
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.rsplit_once('.').map_or(&*self.name, |(_, short)| short)
    }
}

/// Reserved C# keywords; none may appear as a namespace segment.
const RESERVED_KEYWORDS: [&str; 77] = [
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Checks that `name` is a dotted sequence of identifiers.
fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| ConfigError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }

    for segment in name.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err(invalid("empty namespace segment")),
            Some(first) if !(first.is_ascii_alphabetic() || first == '_') => {
                return Err(invalid("segment must start with a letter or underscore"));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("segment contains characters outside [A-Za-z0-9_]"));
        }
        if RESERVED_KEYWORDS.contains(&segment) {
            return Err(invalid("segment is a reserved C# keyword"));
        }
    }

    Ok(())
}
