//! Directive parsing
//!
//! A directive is the `rule:argument` text attached to a field, e.g.
//! `min:18` or `in:admin,user`. Parsing only splits it; the rule name is
//! returned uninterpreted and the argument is left as raw text for the
//! rule evaluator to parse further.

use std::fmt;

use crate::foundation::ValidationError;

/// Separator between the rule name and its argument.
pub const SEPARATOR: char = ':';

/// A parsed `rule:argument` pair borrowing from the directive text.
///
/// # Examples
///
/// ```rust
/// use fieldtag::directive::Directive;
///
/// let directive = Directive::parse("in:1,2,3").unwrap();
/// assert_eq!(directive.rule(), "in");
/// assert_eq!(directive.argument(), "1,2,3");
///
/// assert!(Directive::parse("min").is_err());
/// assert!(Directive::parse("min:").is_err());
/// assert!(Directive::parse("a:b:c").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive<'a> {
    rule: &'a str,
    argument: &'a str,
}

impl<'a> Directive<'a> {
    /// Splits `raw` into rule name and argument.
    ///
    /// Fails with [`ErrorKind::InvalidSyntax`](crate::ErrorKind::InvalidSyntax)
    /// unless `raw` contains exactly one separator and the argument is
    /// non-empty. The rule name may be empty; it is rejected later as an
    /// unknown rule.
    pub fn parse(raw: &'a str) -> Result<Self, ValidationError> {
        if raw.matches(SEPARATOR).count() != 1 {
            return Err(ValidationError::invalid_syntax(raw.to_owned()));
        }

        match raw.split_once(SEPARATOR) {
            Some((rule, argument)) if !argument.is_empty() => Ok(Self { rule, argument }),
            _ => Err(ValidationError::invalid_syntax(raw.to_owned())),
        }
    }

    /// The rule name, as written.
    #[must_use]
    pub const fn rule(&self) -> &'a str {
        self.rule
    }

    /// The raw argument text.
    #[must_use]
    pub const fn argument(&self) -> &'a str {
        self.argument
    }
}

impl fmt::Display for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.rule, self.argument)
    }
}

/// The rules known to this crate.
///
/// Which ones apply depends on the field kind: `len` is text-only, the
/// others work on integers and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `len:N` exact text length.
    Len,
    /// `in:a,b,c` membership.
    In,
    /// `min:N` inclusive lower bound.
    Min,
    /// `max:N` inclusive upper bound.
    Max,
}

impl Rule {
    /// Looks a rule up by name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Self::Len),
            "in" => Some(Self::In),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    /// The rule name as used in directives.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::In => "in",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
