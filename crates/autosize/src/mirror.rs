use crate::measure::TextMeasurer;
use style::MirrorMetrics;

/// Off-screen measurement surface for one font/padding signature.
///
/// One surface is shared by every text input with the same signature,
/// so its width and content are reset per measurement and it is hidden
/// again afterwards. A hidden surface reports zero height, exactly like
/// the off-screen element it stands in for, which is why callers must
/// bracket measurement with [`show`](Self::show)/[`hide`](Self::hide).
#[derive(Clone, Debug)]
pub struct MirrorSurface {
    metrics: MirrorMetrics,
    width: i32,
    content: String,
    visible: bool,
}

impl MirrorSurface {
    pub fn new(metrics: MirrorMetrics) -> Self {
        Self {
            metrics,
            width: 0,
            content: String::new(),
            visible: false,
        }
    }

    pub fn metrics(&self) -> &MirrorMetrics {
        &self.metrics
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Load the text to measure. Newlines stay explicit; measurement
    /// walks them line by line, since measuring the value as one
    /// unwrapped run would collapse multi-line content to a single
    /// line's height.
    pub fn set_content(&mut self, content: &str) {
        self.content.clear();
        self.content.push_str(content);
    }

    /// Match the mirror's width to the measured input's content width
    /// so line wrapping agrees between the two.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    /// Content height of the loaded text in px: wrapped line count
    /// times line height. Empty content measures zero, and so does a
    /// hidden surface.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> i32 {
        if !self.visible {
            log::debug!(target: "autosize.mirror", "measure on hidden mirror reports 0");
            return 0;
        }
        if self.content.is_empty() {
            return 0;
        }

        let lines: i32 = self
            .content
            .split('\n')
            .map(|line| wrapped_line_count(line, self.width, measurer, &self.metrics))
            .sum();

        lines * measurer.line_height(&self.metrics)
    }
}

/// Greedy word wrap: how many rendered lines `line` occupies at
/// `width`. Words wider than the whole width break at character
/// granularity rather than overflowing.
fn wrapped_line_count(
    line: &str,
    width: i32,
    measurer: &dyn TextMeasurer,
    metrics: &MirrorMetrics,
) -> i32 {
    if width <= 0 {
        // Degenerate width; treat each explicit line as one line.
        return 1;
    }

    let space_w = measurer.advance(" ", metrics);
    let mut lines = 1i32;
    let mut x = 0i32;

    for word in line.split_whitespace() {
        let w = measurer.advance(word, metrics);

        if w > width {
            if x > 0 {
                x += space_w;
            }
            for ch in word.chars() {
                let cw = measurer.advance(ch.encode_utf8(&mut [0u8; 4]), metrics);
                if x > 0 && x + cw > width {
                    lines += 1;
                    x = 0;
                }
                x += cw;
            }
            continue;
        }

        if x == 0 {
            x = w;
        } else if x + space_w + w <= width {
            x += space_w + w;
        } else {
            lines += 1;
            x = w;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasurer;

    fn mirror(width: i32) -> MirrorSurface {
        let metrics = MirrorMetrics {
            font_px: 16,
            ..Default::default()
        };
        let mut m = MirrorSurface::new(metrics);
        m.set_width(width);
        m
    }

    // MonospaceMeasurer at 16px: 8px per char, 19px per line.

    #[test]
    fn hidden_mirror_measures_zero() {
        let mut m = mirror(100);
        m.set_content("hello");
        assert_eq!(m.measure(&MonospaceMeasurer), 0);
        m.show();
        assert_eq!(m.measure(&MonospaceMeasurer), 19);
    }

    #[test]
    fn empty_content_measures_zero() {
        let mut m = mirror(100);
        m.show();
        assert_eq!(m.measure(&MonospaceMeasurer), 0);
    }

    #[test]
    fn explicit_line_breaks_stack() {
        let mut m = mirror(800);
        m.show();
        m.set_content("a\nb\nc");
        assert_eq!(m.measure(&MonospaceMeasurer), 3 * 19);
        m.set_content("a\n\nc");
        assert_eq!(m.measure(&MonospaceMeasurer), 3 * 19);
    }

    #[test]
    fn padding_keys_the_mirror_but_never_enters_the_height() {
        // Heights are content-box on both sides of the comparison, so
        // a padded signature measures the same as an unpadded one.
        let metrics = MirrorMetrics {
            font_px: 16,
            padding_top: 10,
            padding_bottom: 10,
            ..Default::default()
        };
        let mut m = MirrorSurface::new(metrics);
        m.set_width(100);
        m.show();
        m.set_content("hello");
        assert_eq!(m.measure(&MonospaceMeasurer), 19);
    }

    #[test]
    fn height_is_monotonic_in_line_breaks() {
        let mut m = mirror(800);
        m.show();
        m.set_content("alpha beta");
        let one = m.measure(&MonospaceMeasurer);
        m.set_content("alpha\nbeta");
        let two = m.measure(&MonospaceMeasurer);
        assert!(two > one);
    }

    #[test]
    fn long_content_wraps_at_width() {
        // 10 chars fit per 80px line.
        let mut m = mirror(80);
        m.show();
        m.set_content("aaaa bbbb cccc");
        assert_eq!(m.measure(&MonospaceMeasurer), 2 * 19);
    }

    #[test]
    fn overlong_word_breaks_at_character_granularity() {
        let mut m = mirror(80);
        m.show();
        m.set_content("aaaaaaaaaaaaaaaaaaaa"); // 20 chars, 10 per line
        assert_eq!(m.measure(&MonospaceMeasurer), 2 * 19);
    }

    #[test]
    fn degenerate_width_counts_explicit_lines_only() {
        let mut m = mirror(0);
        m.show();
        m.set_content("one two three\nfour");
        assert_eq!(m.measure(&MonospaceMeasurer), 2 * 19);
    }
}
