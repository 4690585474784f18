use crate::cli::TargetSyntax;

impl TargetSyntax {
    pub fn opening(self, name: &str) -> String {
        match self {
            TargetSyntax::Js => format!("const {} = [", name),
            TargetSyntax::Ts => format!("const {}: string[] = [", name),
            TargetSyntax::Rust => format!("const {}: &[&str] = &[", name),
            TargetSyntax::Python => format!("{} = [", name),
        }
    }

    pub fn closing(self) -> &'static str {
        match self {
            TargetSyntax::Python => "]",
            TargetSyntax::Js | TargetSyntax::Ts | TargetSyntax::Rust => "];",
        }
    }
}

/// Words are written verbatim. A `"` inside a word is not escaped and will
/// usually break the emitted literal.
pub fn render_entry(word: &str) -> String {
    format!("\"{}\",\n", word)
}

pub fn render_declaration<S: AsRef<str>>(name: &str, words: &[S], syntax: TargetSyntax) -> String {
    let mut out = String::new();
    out.push_str(&syntax.opening(name));
    out.push('\n');
    for w in words {
        out.push_str(&render_entry(w.as_ref()));
    }
    out.push_str(syntax.closing());
    out.push('\n');
    out
}
