//! Confidence-gauge state machine.
//!
//! The gauge is an annular SVG indicator: a static track plus a progress
//! arc whose `stroke-dashoffset` sweeps from the full circumference down to
//! the offset matching the target percentage, while a centered label counts
//! up to the same value. Both interpolations are modelled here as pure
//! `advance(elapsed_ms)` step functions so the DOM driver (and the tests)
//! can feed them elapsed time from whatever clock they own.

use std::f64::consts::PI;
use std::fmt;

/// Radius of the gauge circles in SVG user units.
pub const RADIUS: f64 = 54.0;

/// Circumference of the progress arc; also the dash array length.
pub const CIRCUMFERENCE: f64 = 2.0 * PI * RADIUS;

use crate::defaults::GAUGE_ARC_MS;

// Total wall time the label spends counting. Each increment takes
// 1000/target ms, so the label lands roughly half a second before the arc
// does. The mismatch is inherited behavior, visual polish only.
const COUNT_TOTAL_MS: f64 = 1000.0;

/// Why a draw request was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeError {
    /// The requested percentage was NaN or infinite.
    NotANumber,
    /// The requested percentage fell outside [0, 100].
    OutOfRange(f64),
}

impl fmt::Display for GaugeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeError::NotANumber => write!(f, "Gauge percentage is not a finite number"),
            GaugeError::OutOfRange(p) => {
                write!(f, "Gauge percentage {} is outside the [0, 100] range", p)
            }
        }
    }
}

impl std::error::Error for GaugeError {}

/// Validate a raw percentage and normalize it to a whole number.
pub fn validate_percent(raw: f64) -> Result<u8, GaugeError> {
    if !raw.is_finite() {
        return Err(GaugeError::NotANumber);
    }
    if !(0.0..=100.0).contains(&raw) {
        return Err(GaugeError::OutOfRange(raw));
    }
    Ok(raw.round() as u8)
}

/// Color band for the progress arc, inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    High,
    Medium,
    Low,
}

impl Band {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=49 => Band::Low,
            50..=69 => Band::Medium,
            _ => Band::High,
        }
    }

    pub fn stroke_color(self) -> &'static str {
        match self {
            Band::High => "#2ecc71",
            Band::Medium => "#f39c12",
            Band::Low => "#e74c3c",
        }
    }
}

#[inline]
fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Stroke offset matching a fully drawn arc for `percent`.
#[inline]
pub fn offset_for(percent: u8) -> f64 {
    CIRCUMFERENCE * (1.0 - f64::from(percent) / 100.0)
}

/// Eased sweep of the arc offset from the full circumference to the target.
#[derive(Debug, Clone)]
struct ArcSweep {
    target_offset: f64,
    elapsed_ms: f64,
}

impl ArcSweep {
    fn new(percent: u8) -> Self {
        ArcSweep {
            target_offset: offset_for(percent),
            elapsed_ms: 0.0,
        }
    }

    fn advance(&mut self, elapsed_ms: f64) {
        self.elapsed_ms += elapsed_ms;
    }

    fn offset(&self) -> f64 {
        let t = (self.elapsed_ms / GAUGE_ARC_MS).clamp(0.0, 1.0);
        CIRCUMFERENCE - (CIRCUMFERENCE - self.target_offset) * ease_out_cubic(t)
    }

    fn is_done(&self) -> bool {
        self.elapsed_ms >= GAUGE_ARC_MS
    }
}

/// Integer label counting 0 → target, one increment per `1000/target` ms.
///
/// A zero target has nothing to count: the label shows `0%` from the first
/// frame and the counter reports done immediately, which also keeps the
/// per-step division well defined.
#[derive(Debug, Clone)]
struct Counter {
    target: u8,
    shown: u8,
    step_ms: f64,
    carry_ms: f64,
}

impl Counter {
    fn new(target: u8) -> Self {
        let step_ms = if target == 0 {
            0.0
        } else {
            COUNT_TOTAL_MS / f64::from(target)
        };
        Counter {
            target,
            shown: 0,
            step_ms,
            carry_ms: 0.0,
        }
    }

    fn advance(&mut self, elapsed_ms: f64) {
        if self.is_done() {
            return;
        }
        self.carry_ms += elapsed_ms;
        while self.carry_ms >= self.step_ms && self.shown < self.target {
            self.carry_ms -= self.step_ms;
            self.shown += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.shown >= self.target
    }
}

/// One rendered frame of the gauge: arc offset plus label value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeFrame {
    pub offset: f64,
    pub label_percent: u8,
}

/// Both gauge interpolations, stepped together by the driver.
///
/// The arc and the counter run concurrently but finish at different times;
/// the animation as a whole is done only once both are.
#[derive(Debug, Clone)]
pub struct GaugeAnimation {
    target: u8,
    arc: ArcSweep,
    counter: Counter,
}

impl GaugeAnimation {
    pub fn new(percent: u8) -> Self {
        GaugeAnimation {
            target: percent,
            arc: ArcSweep::new(percent),
            counter: Counter::new(percent),
        }
    }

    pub fn target_percent(&self) -> u8 {
        self.target
    }

    /// Step both interpolations by `elapsed_ms`; returns true once the
    /// whole animation has settled and the driver may release its timer.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        self.arc.advance(elapsed_ms);
        self.counter.advance(elapsed_ms);
        self.is_done()
    }

    pub fn frame(&self) -> GaugeFrame {
        GaugeFrame {
            offset: self.arc.offset(),
            label_percent: self.counter.shown,
        }
    }

    pub fn is_done(&self) -> bool {
        self.arc.is_done() && self.counter.is_done()
    }
}

/// Initial SVG markup for a gauge showing `percent` once animated.
///
/// The arc starts fully retracted (offset = circumference) and the label at
/// `0%`; the driver animates both attributes frame by frame.
pub fn svg_markup(percent: u8) -> String {
    let color = Band::for_percent(percent).stroke_color();
    format!(
        concat!(
            r#"<svg width="120" height="120" viewBox="0 0 120 120" class="gauge-svg">"#,
            r##"<circle cx="60" cy="60" r="{r}" fill="none" stroke="#e0e0e0" stroke-width="8"></circle>"##,
            r#"<circle class="gauge-fill" cx="60" cy="60" r="{r}" fill="none" stroke="{color}" stroke-width="8" "#,
            r#"stroke-dasharray="{c:.3}" stroke-dashoffset="{c:.3}" stroke-linecap="round" "#,
            r#"transform="rotate(-90 60 60)"></circle>"#,
            r#"</svg>"#,
            r#"<div class="confidence-value">0%</div>"#,
        ),
        r = RADIUS,
        c = CIRCUMFERENCE,
        color = color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn validate_accepts_whole_range() {
        assert_eq!(validate_percent(0.0), Ok(0));
        assert_eq!(validate_percent(100.0), Ok(100));
        assert_eq!(validate_percent(72.6), Ok(73));
    }

    #[test]
    fn validate_rejects_bad_input() {
        assert_eq!(validate_percent(f64::NAN), Err(GaugeError::NotANumber));
        assert_eq!(
            validate_percent(f64::INFINITY),
            Err(GaugeError::NotANumber)
        );
        assert_eq!(validate_percent(-0.5), Err(GaugeError::OutOfRange(-0.5)));
        assert_eq!(validate_percent(100.5), Err(GaugeError::OutOfRange(100.5)));
    }

    #[test]
    fn band_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(Band::for_percent(100), Band::High);
        assert_eq!(Band::for_percent(73), Band::High);
        assert_eq!(Band::for_percent(70), Band::High);
        assert_eq!(Band::for_percent(69), Band::Medium);
        assert_eq!(Band::for_percent(50), Band::Medium);
        assert_eq!(Band::for_percent(49), Band::Low);
        assert_eq!(Band::for_percent(0), Band::Low);
    }

    #[test]
    fn arc_settles_on_exact_target_offset() {
        for p in [0u8, 1, 37, 50, 73, 100] {
            let mut anim = GaugeAnimation::new(p);
            anim.advance(GAUGE_ARC_MS + 1.0);
            let expected = CIRCUMFERENCE * (1.0 - f64::from(p) / 100.0);
            assert!(
                (anim.frame().offset - expected).abs() < TOLERANCE,
                "p={p}: offset {} vs {expected}",
                anim.frame().offset
            );
            assert!(anim.is_done());
        }
    }

    #[test]
    fn label_counts_monotonically_to_target() {
        let mut anim = GaugeAnimation::new(73);
        let mut last = 0u8;
        // Irregular frame times, like a busy event loop.
        for dt in [3.0, 16.0, 7.0, 40.0, 16.0].iter().cycle().take(200) {
            anim.advance(*dt);
            let shown = anim.frame().label_percent;
            assert!(shown >= last, "label went backwards");
            assert!(shown <= 73, "label overshot the target");
            last = shown;
        }
        assert_eq!(last, 73);
    }

    #[test]
    fn zero_percent_skips_counting() {
        let anim = GaugeAnimation::new(0);
        assert_eq!(anim.frame().label_percent, 0);
        // The counter is done from the start; only the arc still runs.
        let mut anim = anim;
        assert!(!anim.advance(10.0));
        assert!(anim.advance(GAUGE_ARC_MS));
        assert!((anim.frame().offset - CIRCUMFERENCE).abs() < TOLERANCE);
    }

    #[test]
    fn counter_finishes_before_arc() {
        let mut anim = GaugeAnimation::new(80);
        // 80 steps of 12.5 ms each: the label lands at ~1000 ms.
        anim.advance(1001.0);
        assert_eq!(anim.frame().label_percent, 80);
        assert!(!anim.is_done(), "arc should still be sweeping at 1 s");
        anim.advance(GAUGE_ARC_MS - 1001.0);
        assert!(anim.is_done());
    }

    #[test]
    fn easing_decelerates_toward_the_end() {
        let mut anim = GaugeAnimation::new(100);
        anim.advance(GAUGE_ARC_MS / 2.0);
        let halfway = anim.frame().offset;
        // Ease-out-cubic covers 87.5% of the distance in the first half.
        let expected = CIRCUMFERENCE * (1.0 - 0.875);
        assert!((halfway - expected).abs() < TOLERANCE);
    }

    #[test]
    fn markup_reflects_band_color_and_initial_state() {
        let html = svg_markup(73);
        assert!(html.contains(Band::High.stroke_color()));
        assert!(html.contains(">0%<"));
        assert!(html.contains("gauge-fill"));

        let low = svg_markup(12);
        assert!(low.contains(Band::Low.stroke_color()));
    }
}
