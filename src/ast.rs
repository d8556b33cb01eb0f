use core::fmt;

// Root AST Definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.items.iter().filter_map(|item| match item {
            Item::Statement(statement) => Some(statement),
            Item::Binding(_) => None,
        })
    }
}

/// Top-level entries of a rule document, kept in document order.
///
/// Bindings are not owned by the statement that follows them: a binding applies to
/// every statement evaluated after it.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Binding(Binding),
    Statement(Statement),
}

/// `bind <local> = <property>`
///
/// Aliases the caller-supplied property `property` under the name `local`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub local: String,
    pub property: String,
}

/// A rule: conditions guarding a single output block.
///
/// # Example
/// ```text
/// (os=linux, arch=~/x86_64|aarch64/) {
///     target=unix
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub conditions: Vec<Condition>,
    pub output: OutputBlock,
}

/// `<name> = <pattern>` inside a condition list.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub name: String,
    pub pattern: Pattern,
}

/// A condition pattern.
///
/// Both variants are matched as a full-match regular expression. A literal is not
/// escaped first, so `1.0` also matches `1x0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Literal(String),
    Regex(String),
}

impl Pattern {
    pub fn source(&self) -> &str {
        match self {
            Pattern::Literal(text) | Pattern::Regex(text) => text,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(text) => write!(f, "{}", text),
            Pattern::Regex(text) => write!(f, "~/{}/", text.replace('/', "\\/")),
        }
    }
}

/// Raw output block, braces included.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputBlock {
    pub raw: String,
}

impl OutputBlock {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The block text with its braces and surrounding whitespace removed.
    pub fn text(&self) -> &str {
        let inner = self
            .raw
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(&self.raw);
        inner.trim()
    }
}
