//! Input parsing and validation for coin tables.
//!
//! Coin lists are decimal probabilities separated by commas and/or
//! whitespace, in seat order: `0.25,0.5,1.0` or `0.25 0.5 1.0`.

/// Parse a coin list into seat-ordered probabilities.
///
/// # Example
///
/// ```rust
/// # use royale_cli::validation::parse_coins;
/// assert_eq!(parse_coins("0.25, 0.5 1").unwrap(), vec![0.25, 0.5, 1.0]);
/// assert!(parse_coins("0.5,abc").unwrap_err().contains("abc"));
/// assert!(parse_coins("0.5,1.5").unwrap_err().contains("[0, 1]"));
/// ```
pub fn parse_coins(input: &str) -> Result<Vec<f64>, String> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err("at least one coin probability is required".to_string());
    }

    tokens
        .iter()
        .enumerate()
        .map(|(seat, token)| {
            let p: f64 = token
                .parse()
                .map_err(|_| format!("coin {} ('{}') is not a number", seat, token))?;
            if !(0.0..=1.0).contains(&p) {
                return Err(format!(
                    "coin {} ('{}') must be within [0, 1]",
                    seat, token
                ));
            }
            Ok(p)
        })
        .collect()
}

/// Coin tables found in a batch file, with their 1-based line numbers.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_batch_lines(content: &str) -> Vec<(usize, Result<Vec<f64>, String>)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| (idx + 1, parse_coins(line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coins_mixed_separators() {
        assert_eq!(
            parse_coins(" 0.5,0.2  0.05,\t0.85 ").unwrap(),
            vec![0.5, 0.2, 0.05, 0.85]
        );
    }

    #[test]
    fn test_parse_coins_rejects_empty() {
        assert!(parse_coins("").is_err());
        assert!(parse_coins(" , ,").is_err());
    }

    #[test]
    fn test_parse_coins_rejects_nan_and_range() {
        assert!(parse_coins("NaN").is_err());
        assert!(parse_coins("-0.1").is_err());
        assert!(parse_coins("1.0001").is_err());
    }

    #[test]
    fn test_parse_batch_lines_skips_comments() {
        let content = "# tables\n0.25,0.5,1.0\n\n0.3 0.6\nbad\n";
        let parsed = parse_batch_lines(content);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].0, 2);
        assert_eq!(parsed[1], (4, Ok(vec![0.3, 0.6])));
        assert_eq!(parsed[2].0, 5);
        assert!(parsed[2].1.is_err());
    }
}
