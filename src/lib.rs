use std::fmt;

/// Default timing parameters shared by the UI widgets.
pub mod defaults {
    /// How long a toast stays fully visible.
    pub const TOAST_DURATION_MS: f64 = 3000.0;
    /// Length of the toast hide transition; the element is detached after it.
    pub const TOAST_SETTLE_MS: f64 = 300.0;
    /// Duration of the gauge arc sweep.
    pub const GAUGE_ARC_MS: f64 = 1500.0;
}

// Decision threshold for the binary plant-validity score.
const POSITIVE_THRESHOLD: f32 = 0.5;

/// Errors produced when interpreting a raw classifier score.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The score was NaN or infinite.
    NotFinite,
    /// The score fell outside the [0, 1] probability range.
    OutOfRange(f32),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::NotFinite => write!(f, "Classifier score is not a finite number"),
            ScoreError::OutOfRange(s) => {
                write!(f, "Classifier score {} is outside the [0, 1] range", s)
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Outcome derived from a single raw probability returned by the
/// prediction service.
///
/// The service emits one sigmoid output in [0, 1]. A score above 0.5 means
/// the positive class; the reported confidence is the probability of the
/// side that won: the score itself for positive results, its complement
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnosis {
    pub is_positive: bool,
    pub confidence: f32,
}

impl Diagnosis {
    pub fn from_score(score: f32) -> Result<Self, ScoreError> {
        if !score.is_finite() {
            return Err(ScoreError::NotFinite);
        }
        if !(0.0..=1.0).contains(&score) {
            return Err(ScoreError::OutOfRange(score));
        }
        let is_positive = score > POSITIVE_THRESHOLD;
        let confidence = if is_positive { score } else { 1.0 - score };
        Ok(Diagnosis {
            is_positive,
            confidence,
        })
    }

    /// Confidence as a whole percentage, suitable for the gauge.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}

/// Escape a string for embedding into HTML markup.
///
/// Full entity escaping, not just the angle brackets: attacker-controlled
/// text echoed back into a toast or chat bubble must never parse as markup
/// regardless of whether it lands in content or an attribute position.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub mod gauge;
pub mod i18n;
pub mod toast;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_score_keeps_probability_as_confidence() {
        let d = Diagnosis::from_score(0.87).unwrap();
        assert!(d.is_positive);
        assert!((d.confidence - 0.87).abs() < f32::EPSILON);
        assert_eq!(d.confidence_percent(), 87);
    }

    #[test]
    fn negative_score_reports_complement() {
        let d = Diagnosis::from_score(0.2).unwrap();
        assert!(!d.is_positive);
        assert!((d.confidence - 0.8).abs() < f32::EPSILON);
        assert_eq!(d.confidence_percent(), 80);
    }

    #[test]
    fn exact_threshold_is_negative() {
        // 0.5 is not strictly greater than the threshold.
        let d = Diagnosis::from_score(0.5).unwrap();
        assert!(!d.is_positive);
        assert_eq!(d.confidence_percent(), 50);
    }

    #[test]
    fn invalid_scores_are_rejected() {
        assert_eq!(Diagnosis::from_score(f32::NAN), Err(ScoreError::NotFinite));
        assert_eq!(Diagnosis::from_score(1.2), Err(ScoreError::OutOfRange(1.2)));
        assert_eq!(Diagnosis::from_score(-0.1), Err(ScoreError::OutOfRange(-0.1)));
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html(r#"a & "b""#), "a &amp; &quot;b&quot;");
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
