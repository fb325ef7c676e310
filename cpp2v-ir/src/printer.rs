//! Term Printer
//!
//! An append-only text sink for the term language. Every opening call
//! (`ctor` with parentheses, `begin_list`, `begin_record`) raises the
//! nesting depth and the matching closing call lowers it; a complete term
//! leaves the depth where it found it.

/// Append-only writer for IR text
#[derive(Debug, Default)]
pub struct TermPrinter {
    out: String,
    depth: usize,
}

impl TermPrinter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    /// Current open/close nesting depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// Start a constructor application; `paren` opens a nesting level
    pub fn ctor(&mut self, name: &str, paren: bool) {
        if paren {
            self.open("(");
        }
        self.out.push_str(name);
    }

    pub fn end_ctor(&mut self) {
        self.close(")");
    }

    pub fn begin_list(&mut self) {
        self.open("(");
    }

    pub fn cons(&mut self) {
        self.out.push_str(" :: ");
    }

    pub fn end_list(&mut self) {
        self.out.push_str("nil");
        self.close(")");
    }

    pub fn begin_record(&mut self) {
        self.open("{| ");
    }

    pub fn record_field(&mut self, name: &str) {
        self.out.push_str(name);
        self.out.push_str(" := ");
    }

    pub fn field_separator(&mut self) {
        self.out.push_str("; ");
    }

    pub fn end_record(&mut self) {
        self.close(" |}");
    }

    /// Quoted string literal; `"` is doubled as the proof assistant expects
    pub fn string(&mut self, s: &str) {
        self.out.push('"');
        self.out.push_str(&s.replace('"', "\"\""));
        self.out.push('"');
    }

    pub fn int(&mut self, n: u64) {
        self.out.push_str(&n.to_string());
    }

    pub fn boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    /// Raw text: fixed tokens, keywords, punctuation
    pub fn text(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn space(&mut self) {
        self.out.push(' ');
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, delim: &str) {
        self.out.push_str(delim);
        self.depth += 1;
    }

    fn close(&mut self, delim: &str) {
        debug_assert!(self.depth > 0, "unbalanced close '{delim}' in term output");
        self.out.push_str(delim);
        self.depth = self.depth.saturating_sub(1);
    }
}
