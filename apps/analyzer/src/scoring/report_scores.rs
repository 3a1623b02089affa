//! Per-point score extraction from a generated report.
//!
//! The report prompt asks the model to open every point with a score such as
//! `3/5`; the AI score is the mean of those scores normalized to [0, 1].

use std::sync::LazyLock;

use regex::Regex;

static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)/5").expect("Invalid score regex"));

/// Returns every `<number>/5` score in `text`, in order of appearance.
pub fn extract_scores(text: &str) -> Vec<f64> {
    SCORE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Average score as a fraction of the maximum: Σscores / (5 × n). Empty → 0.0.
pub fn average_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / (5.0 * scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPORT: &str = "\
1. ✅ 4/5 Rust experience: five years building async services.
2. ❌ 1/5 Kubernetes: not mentioned anywhere in the resume.
3. ⚠️ 2.5/5 Leadership: mentored interns, scope unclear.

Suggestions to improve your resume:
- Add a 24/7 on-call rotation and quantify the 3x throughput gain.";

    #[test]
    fn test_extracts_integer_and_decimal_scores() {
        let scores = extract_scores("✅ 3/5 skills, ⚠️ 4.5/5 experience");
        assert_eq!(scores, vec![3.0, 4.5]);
    }

    #[test]
    fn test_ignores_non_matching_substrings() {
        let scores = extract_scores("Score: 3 out of 5, ratio 2/3, 10 / 5 spaced, 4/6 wrong");
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sample_report() {
        // "24/7" does not end in /5 and is skipped.
        let scores = extract_scores(SAMPLE_REPORT);
        assert_eq!(scores, vec![4.0, 1.0, 2.5]);
        let avg = average_score(&scores);
        assert!((avg - 7.5 / 15.0).abs() < 1e-9, "avg was {avg}");
    }

    #[test]
    fn test_number_run_matches_trailing_digits() {
        // Same leftmost-first semantics as any findall over `\d+/5`.
        assert_eq!(extract_scores("15/5"), vec![15.0]);
        assert_eq!(extract_scores("3/55"), vec![3.0]);
    }

    #[test]
    fn test_empty_report_averages_zero() {
        let scores = extract_scores("");
        assert!(scores.is_empty());
        assert_eq!(average_score(&scores), 0.0);
    }

    #[test]
    fn test_perfect_scores_average_one() {
        assert_eq!(average_score(&[5.0, 5.0, 5.0]), 1.0);
    }
}
