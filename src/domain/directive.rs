use crate::matcher::PathPattern;

/// Whether a path directive grants or denies access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRule {
    Allow,
    Disallow,
}

impl PathRule {
    /// The verdict a matching directive of this kind produces
    pub fn is_allowed(self) -> bool {
        matches!(self, PathRule::Allow)
    }

    /// The canonical field name for this rule kind
    pub fn field_name(self) -> &'static str {
        match self {
            PathRule::Allow => "allow",
            PathRule::Disallow => "disallow",
        }
    }
}

/// One parsed robots.txt rule
///
/// Path directives carry their compiled matcher alongside the raw pattern
/// string; the matcher is derived state and takes no part in equality.
/// Other directives (crawl-delay, sitemap, host, anything the engine does
/// not interpret) are preserved verbatim for callers.
#[derive(Debug, Clone)]
pub enum Directive {
    Path {
        rule: PathRule,
        value: String,
        pattern: PathPattern,
    },
    Other {
        field: String,
        value: String,
    },
}

impl Directive {
    /// Builds an allow/disallow directive, compiling its path pattern
    pub fn path(rule: PathRule, value: impl Into<String>) -> Self {
        let value = value.into();
        let pattern = PathPattern::compile(&value);
        Directive::Path {
            rule,
            value,
            pattern,
        }
    }

    /// Builds an uninterpreted directive, field kept in its original case
    pub fn other(field: impl Into<String>, value: impl Into<String>) -> Self {
        Directive::Other {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The directive's field name
    pub fn field(&self) -> &str {
        match self {
            Directive::Path { rule, .. } => rule.field_name(),
            Directive::Other { field, .. } => field,
        }
    }

    /// The directive's raw value
    pub fn value(&self) -> &str {
        match self {
            Directive::Path { value, .. } => value,
            Directive::Other { value, .. } => value,
        }
    }
}

// Identity is the (field, value) pair; the compiled matcher is derived
impl PartialEq for Directive {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Directive::Path {
                    rule: a, value: av, ..
                },
                Directive::Path {
                    rule: b, value: bv, ..
                },
            ) => a == b && av == bv,
            (
                Directive::Other {
                    field: a, value: av,
                },
                Directive::Other {
                    field: b, value: bv,
                },
            ) => a == b && av == bv,
            _ => false,
        }
    }
}

impl Eq for Directive {}
