/// Header gets its backdrop once the page moves past this offset.
pub const HEADER_SCROLL_OFFSET: f64 = 10.0;
/// Scroll-to-top button shows up past this offset.
pub const SCROLL_TOP_OFFSET: f64 = 500.0;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_OFFSET
}

pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_OFFSET
}

/// Share of a section that must be on screen before it animates in.
pub const REVEAL_AMOUNT: f64 = 0.2;
/// The project grid is tall, so it starts earlier.
pub const PROJECTS_REVEAL_AMOUNT: f64 = 0.1;

// observers report ratios a hair under the threshold they fired for
const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether an intersection report shows at least `amount` of the target.
pub fn meets_reveal_amount(intersecting: bool, ratio: f64, amount: f64) -> bool {
    intersecting && ratio + RATIO_TOLERANCE >= amount
}

/// Entrance animations play once: after a section has been seen it stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Inline style for an element that fades and slides in, staggered by `delay_ms`.
pub fn reveal_style(revealed: bool, offset: (i32, i32), delay_ms: u32) -> String {
    if revealed {
        format!("opacity: 1; transform: none; transition: all 600ms ease-out {delay_ms}ms;")
    } else {
        let (x, y) = offset;
        format!(
            "opacity: 0; transform: translate({x}px, {y}px); transition: all 600ms ease-out {delay_ms}ms;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(10.0));
        assert!(header_is_scrolled(10.5));
        assert!(!scroll_to_top_visible(500.0));
        assert!(scroll_to_top_visible(501.0));
    }

    #[test]
    fn test_latch_stays_revealed() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_reveal_amount() {
        assert!(!meets_reveal_amount(true, 0.01, REVEAL_AMOUNT));
        assert!(!meets_reveal_amount(true, 0.15, REVEAL_AMOUNT));
        assert!(meets_reveal_amount(true, 0.1999, REVEAL_AMOUNT));
        assert!(meets_reveal_amount(true, 0.5, REVEAL_AMOUNT));
        assert!(!meets_reveal_amount(false, 0.5, REVEAL_AMOUNT));

        assert!(meets_reveal_amount(true, 0.1, PROJECTS_REVEAL_AMOUNT));
        assert!(!meets_reveal_amount(true, 0.05, PROJECTS_REVEAL_AMOUNT));
    }

    #[test]
    fn test_latch_ignores_sliver_of_section() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(meets_reveal_amount(true, 0.02, REVEAL_AMOUNT)));
        assert!(latch.observe(meets_reveal_amount(true, 0.25, REVEAL_AMOUNT)));
    }

    #[test]
    fn test_reveal_style() {
        assert!(reveal_style(false, (0, 20), 0).contains("translate(0px, 20px)"));
        assert!(reveal_style(true, (0, 20), 200).contains("opacity: 1"));
        assert!(reveal_style(true, (0, 20), 200).contains("200ms"));
    }
}
