//! Code generation options.

/// How a Wordy `Equals` comparison is rendered.
///
/// The legacy generator emitted a single `=` inside `if (...)`, which a C
/// compiler reads as assignment. `Legacy` reproduces that output byte for
/// byte; `Equality` emits a real `==` test.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EqualsToken {
    #[default]
    Legacy,
    Equality,
}

impl EqualsToken {
    pub const fn as_str(self) -> &'static str {
        match self {
            EqualsToken::Legacy => "=",
            EqualsToken::Equality => "==",
        }
    }
}

/// Options controlling generated text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodegenOptions {
    /// Prefix added per nesting level inside blocks.
    pub indent: String,
    pub equals_token: EqualsToken,
}

impl CodegenOptions {
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_equals_token(mut self, equals_token: EqualsToken) -> Self {
        self.equals_token = equals_token;
        self
    }
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions {
            indent: "    ".to_string(),
            equals_token: EqualsToken::default(),
        }
    }
}
