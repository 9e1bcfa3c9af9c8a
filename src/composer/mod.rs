// src/composer/mod.rs
use crate::extractors::TableFragment;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Non-greedy up to the first closing brace; captions with nested braces get cut short.
static CAPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\caption\{(.*?)\}").expect("Failed to compile CAPTION_RE")
});

const PREAMBLE: &str = r"\documentclass[12pt]{article}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage{geometry}
\usepackage{booktabs,array,longtable,multirow,multicol,amsmath,amssymb,siunitx,tabularx,ltxtable,caption,threeparttable,dcolumn,xcolor}
\geometry{landscape, paperwidth=22in, paperheight=17in, margin=1in}
\pagestyle{empty}
\pagecolor{white}
\color{black}
\begin{document}
";

const CLOSING: &str = "\n\\end{document}\n";

const TABLE_SHELL_OPEN: &str = "\\begin{table}[ht]\\centering\n";
const TABLE_SHELL_CLOSE: &str = "\n\\end{table}";

/// Turns every numbered `\caption{...}` into an unnumbered `\caption*{Table: ...}`.
pub fn rewrite_captions(fragment: &str) -> String {
    CAPTION_RE
        .replace_all(fragment, |caps: &Captures| {
            format!("\\caption*{{Table: {}}}", caps[1].trim())
        })
        .into_owned()
}

/// Builds a standalone, compilable LaTeX document around a table fragment.
///
/// Captions are rewritten first. A bare tabular-family fragment is then placed
/// inside a `table` float so captions and centering behave as they would in
/// the source document.
pub fn compose_document(fragment: &TableFragment) -> String {
    let body = rewrite_captions(&fragment.text);
    let body = if fragment.is_full_table {
        body
    } else {
        format!("{TABLE_SHELL_OPEN}{body}{TABLE_SHELL_CLOSE}")
    };

    let mut document = String::with_capacity(PREAMBLE.len() + body.len() + CLOSING.len());
    document.push_str(PREAMBLE);
    document.push_str(&body);
    document.push_str(CLOSING);
    document
}
