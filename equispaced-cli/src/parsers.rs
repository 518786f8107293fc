use std::path::Path;

use anyhow::{Context, Result, bail};

/// Parse a two-column `x y` table.
///
/// Columns may be separated by whitespace or commas. Blank lines and lines
/// starting with `#` are skipped; columns past the second are ignored.
pub fn parse_columns(content: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() < 2 {
            bail!("line {}: expected two columns, found {}", idx + 1, parts.len());
        }
        let xi: f64 = parts[0]
            .parse()
            .with_context(|| format!("line {}: invalid x value '{}'", idx + 1, parts[0]))?;
        let yi: f64 = parts[1]
            .parse()
            .with_context(|| format!("line {}: invalid y value '{}'", idx + 1, parts[1]))?;
        x.push(xi);
        y.push(yi);
    }
    Ok((x, y))
}

/// Read a two-column table from `path`, or from stdin when `path` is `-`.
pub fn read_columns(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let content = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    parse_columns(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Render `x y` rows separated by a tab.
pub fn format_columns(x: &[f64], y: &[f64]) -> String {
    x.iter()
        .zip(y)
        .map(|(xi, yi)| format!("{xi}\t{yi}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_whitespace_and_comments() {
        let content = "# energy mu\n\n1.0  2.5\n2.0\t3.5 extra\n  # indented comment\n3 4\n";
        let (x, y) = parse_columns(content).unwrap();
        assert_eq!(x, vec![1.0, 2.0, 3.0]);
        assert_eq!(y, vec![2.5, 3.5, 4.0]);
    }

    #[test]
    fn test_parse_commas() {
        let (x, y) = parse_columns("0,1\n0.5, -2e-3\n").unwrap();
        assert_eq!(x, vec![0.0, 0.5]);
        assert_eq!(y, vec![1.0, -0.002]);
    }

    #[test]
    fn test_parse_reports_line() {
        let err = parse_columns("1 2\n3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        let err = parse_columns("1 2\n\nabc 4\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# x y").unwrap();
        writeln!(file, "0 1").unwrap();
        writeln!(file, "1 3").unwrap();
        let (x, y) = read_columns(file.path()).unwrap();
        assert_eq!(x, vec![0.0, 1.0]);
        assert_eq!(y, vec![1.0, 3.0]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_columns(Path::new("/nonexistent/signal.dat")).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "{err}");
    }

    #[test]
    fn test_format_columns() {
        assert_eq!(format_columns(&[0.0, 0.5], &[1.25, -2.0]), "0\t1.25\n0.5\t-2\n");
    }
}
