// src/extractors/table.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

// --- Regex Patterns (Lazy Static) ---
// A full `table` float wins over any bare tabular-family environment.
static TABLE_ENV_RE: Lazy<Regex> = Lazy::new(|| env_pattern("table"));

// Bare environments, checked in priority order; the first that matches anywhere wins.
static TABULAR_ENV_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["tabular", "tabularx", "longtable"]
        .iter()
        .map(|env| env_pattern(env))
        .collect()
});

/// Non-greedy span from `\begin{env}` to the first following `\end{env}`,
/// with `.` matching newlines. Nested environments of the same name produce
/// the shortest span; this is textual matching, not a LaTeX parser.
fn env_pattern(env: &str) -> Regex {
    let pattern = format!(
        r"(?s)\\begin\{{{env}\}}.*?\\end\{{{env}\}}",
        env = regex::escape(env)
    );
    Regex::new(&pattern).expect("environment pattern is a valid regex")
}

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFragment {
    pub text: String,       // Verbatim span from \begin to \end
    pub is_full_table: bool, // false => bare tabular-family environment, needs a table shell
}

/// Finds the first table-like fragment in `content`.
pub fn extract_table(content: &str) -> Option<TableFragment> {
    if let Some(m) = TABLE_ENV_RE.find(content) {
        return Some(TableFragment {
            text: m.as_str().to_string(),
            is_full_table: true,
        });
    }

    TABULAR_ENV_RES.iter().find_map(|re| {
        re.find(content).map(|m| TableFragment {
            text: m.as_str().to_string(),
            is_full_table: false,
        })
    })
}

/// Reads `path` as UTF-8 text and extracts its first table fragment.
pub fn extract_table_from_file(path: &Path) -> Result<Option<TableFragment>, ExtractError> {
    let content = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let fragment = extract_table(&content);
    match &fragment {
        Some(f) => tracing::debug!(
            "Extracted {} bytes from {} (full table: {})",
            f.text.len(),
            path.display(),
            f.is_full_table
        ),
        None => tracing::debug!("No table environment in {}", path.display()),
    }
    Ok(fragment)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table_is_returned_verbatim() {
        let table = "\\begin{table}[h]\n\\centering\n\\begin{tabular}{cc}\na & b \\\\\n\\end{tabular}\n\\caption{Result summary}\n\\end{table}";
        let content = format!("\\section{{Results}}\nSome prose.\n{}\nMore prose.\n", table);

        let fragment = extract_table(&content).expect("table should be found");

        assert!(fragment.is_full_table);
        assert_eq!(fragment.text, table);
    }

    #[test]
    fn bare_tabular_is_flagged_for_rewrap() {
        let content = "Intro\n\\begin{tabular}{ll}\nx & y \\\\\n\\end{tabular}\nOutro";

        let fragment = extract_table(content).unwrap();

        assert!(!fragment.is_full_table);
        assert_eq!(fragment.text, "\\begin{tabular}{ll}\nx & y \\\\\n\\end{tabular}");
    }

    #[test]
    fn table_environment_takes_priority_over_earlier_tabular() {
        let content = "\\begin{tabular}{l}a\\end{tabular}\n\\begin{table}\\begin{tabular}{l}b\\end{tabular}\\end{table}";

        let fragment = extract_table(content).unwrap();

        assert!(fragment.is_full_table);
        assert!(fragment.text.contains("{l}b"));
    }

    #[test]
    fn tabularx_and_longtable_are_recognised() {
        let tx = "\\begin{tabularx}{\\textwidth}{XX}\n1 & 2\n\\end{tabularx}";
        let lt = "\\begin{longtable}{cc}\n1 & 2\n\\end{longtable}";

        assert_eq!(extract_table(tx).unwrap().text, tx);
        assert_eq!(extract_table(lt).unwrap().text, lt);
    }

    #[test]
    fn tabular_is_checked_before_longtable() {
        let content = "\\begin{longtable}{c}L\\end{longtable}\n\\begin{tabular}{c}T\\end{tabular}";

        let fragment = extract_table(content).unwrap();

        assert!(fragment.text.starts_with("\\begin{tabular}"));
    }

    #[test]
    fn first_match_is_non_greedy() {
        let content = "\\begin{table}A\\end{table}\n\\begin{table}B\\end{table}";

        let fragment = extract_table(content).unwrap();

        assert_eq!(fragment.text, "\\begin{table}A\\end{table}");
    }

    #[test]
    fn nested_same_name_environment_yields_shortest_span() {
        let content = "\\begin{tabular}{c}\\begin{tabular}{c}x\\end{tabular}\\end{tabular}";

        let fragment = extract_table(content).unwrap();

        assert_eq!(
            fragment.text,
            "\\begin{tabular}{c}\\begin{tabular}{c}x\\end{tabular}"
        );
    }

    #[test]
    fn no_marker_yields_none() {
        assert!(extract_table("\\section{Intro}\nNo tables here.\n\\begin{figure}\\end{figure}").is_none());
        assert!(extract_table("").is_none());
        // Opening marker without a closing one is not a match
        assert!(extract_table("\\begin{table}never closed").is_none());
    }

    #[test]
    fn extract_from_file_reads_and_matches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tex");
        std::fs::write(&path, "\\begin{longtable}{c}z\\end{longtable}").unwrap();

        let fragment = extract_table_from_file(&path).unwrap().unwrap();
        assert!(!fragment.is_full_table);

        let missing = dir.path().join("missing.tex");
        assert!(matches!(
            extract_table_from_file(&missing),
            Err(ExtractError::Read { .. })
        ));
    }
}
