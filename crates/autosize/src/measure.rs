use style::MirrorMetrics;

/// Host-supplied text metrics.
///
/// The engine never touches a font stack itself; whatever renders the
/// page answers these two questions for the mirror's font signature.
pub trait TextMeasurer {
    /// Width of `text` in px when rendered with `metrics`.
    fn advance(&self, text: &str, metrics: &MirrorMetrics) -> i32;

    /// Line height in px for `metrics`.
    fn line_height(&self, metrics: &MirrorMetrics) -> i32;
}

/// Fixed-advance measurer: every character is half the font size wide,
/// lines are 1.2 times the font size tall.
///
/// Good enough for monospace hosts and for exercising the wrap logic
/// without a font stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospaceMeasurer;

impl TextMeasurer for MonospaceMeasurer {
    fn advance(&self, text: &str, metrics: &MirrorMetrics) -> i32 {
        let cell = (metrics.font_px / 2).max(1);
        text.chars().count() as i32 * cell
    }

    fn line_height(&self, metrics: &MirrorMetrics) -> i32 {
        (metrics.font_px * 12 / 10).max(1)
    }
}
