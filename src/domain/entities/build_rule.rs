//! Build rule entity
//!
//! A minimal Starlark rule model: enough to render generated `filegroup` and
//! `go_mod` targets the way buildifier would lay them out.

use std::fmt::Write as _;

/// Attribute value of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    List(Vec<String>),
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(v: Vec<String>) -> Self {
        AttrValue::List(v)
    }
}

/// One rule call, `kind(name = ..., attr = ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRule {
    kind: String,
    name: String,
    attrs: Vec<(String, AttrValue)>,
}

impl BuildRule {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value with the same key.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// String list attribute, or an empty list if absent or scalar.
    pub fn attr_strings(&self, key: &str) -> Vec<String> {
        match self.attr(key) {
            Some(AttrValue::List(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Render the rule as Starlark, terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}(", self.kind);
        let _ = writeln!(out, "    name = {},", quote(&self.name));
        for (key, value) in &self.attrs {
            match value {
                AttrValue::Str(s) => {
                    let _ = writeln!(out, "    {} = {},", key, quote(s));
                }
                AttrValue::List(items) if items.len() <= 1 => {
                    let inner: Vec<String> = items.iter().map(|i| quote(i)).collect();
                    let _ = writeln!(out, "    {} = [{}],", key, inner.join(", "));
                }
                AttrValue::List(items) => {
                    let _ = writeln!(out, "    {} = [", key);
                    for item in items {
                        let _ = writeln!(out, "        {},", quote(item));
                    }
                    let _ = writeln!(out, "    ],");
                }
            }
        }
        out.push_str(")\n");
        out
    }
}

/// `load("<module>", "<symbol>", ...)` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadStatement {
    pub module: String,
    pub symbols: Vec<String>,
}

impl LoadStatement {
    pub fn new(module: impl Into<String>, symbols: &[&str]) -> Self {
        Self {
            module: module.into(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut parts = vec![quote(&self.module)];
        parts.extend(self.symbols.iter().map(|s| quote(s)));
        format!("load({})\n", parts.join(", "))
    }
}

/// Double-quoted Starlark string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
