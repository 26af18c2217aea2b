//! Import specifier extraction
//!
//! The graph builder does not understand language semantics; it consumes a
//! parser capability that turns a file's text into the list of module
//! specifiers the file references. Parsers are pluggable so tests (and other
//! source dialects) can substitute their own extraction.

use regex::Regex;

/// A parser that extracts module specifiers from source text
pub trait SpecifierParser: Send + Sync {
    /// Get the name of this parser (e.g., "es-modules")
    fn name(&self) -> &str;

    /// Extract the raw module specifiers referenced by `content`, in source
    /// order.
    fn parse_specifiers(&self, content: &str) -> Vec<String>;
}

/// Regex-based parser for ES-style module syntax
///
/// Recognizes static `import ... from`, re-exports (`export ... from`),
/// side-effect imports, dynamic `import(...)` and CommonJS `require(...)`.
#[derive(Debug, Clone)]
pub struct EsModuleParser {
    from_clause: Regex,
    bare_import: Regex,
    call_import: Regex,
}

impl Default for EsModuleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EsModuleParser {
    /// Create a parser with the built-in specifier patterns.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile (should never happen)
    #[must_use]
    pub fn new() -> Self {
        // The inner [^;'"] class spans newlines, so multi-line import blocks
        // still reach their trailing `from` clause.
        Self {
            from_clause: Regex::new(r#"(?:\bimport|\bexport)\s[^;'"]*?\bfrom\s*['"]([^'"]+)['"]"#)
                .expect("built-in pattern always compiles"),
            bare_import: Regex::new(r#"\bimport\s*['"]([^'"]+)['"]"#)
                .expect("built-in pattern always compiles"),
            call_import: Regex::new(r#"\b(?:import|require)\s*\(\s*['"]([^'"]+)['"]\s*\)"#)
                .expect("built-in pattern always compiles"),
        }
    }

    fn capture_all(regex: &Regex, content: &str, out: &mut Vec<(usize, String)>) {
        for captures in regex.captures_iter(content) {
            if let (Some(whole), Some(spec)) = (captures.get(0), captures.get(1)) {
                out.push((whole.start(), spec.as_str().to_string()));
            }
        }
    }
}

impl SpecifierParser for EsModuleParser {
    fn name(&self) -> &'static str {
        "es-modules"
    }

    fn parse_specifiers(&self, content: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = Vec::new();
        Self::capture_all(&self.from_clause, content, &mut found);
        Self::capture_all(&self.bare_import, content, &mut found);
        Self::capture_all(&self.call_import, content, &mut found);

        // Merge the per-pattern hits back into source order
        found.sort_by_key(|(offset, _)| *offset);
        found.into_iter().map(|(_, specifier)| specifier).collect()
    }
}
