//! Preview panel state: stroke width and the active snippet tab.
//!
//! # Design
//! - State is a small `Copy` value owned by one preview instance; transitions return a new value.
//! - Only legal stroke widths are representable, so the stroke class can never drift.
//! - Tabs are an enum; index-based selection rejects anything outside the tab strip.

use std::fmt;

const QUARTERS_MIN: u8 = 4;
const QUARTERS_MAX: u8 = 8;

/// Stroke width in quarter-pixel steps between 1 and 2 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrokeWidth(u8);

impl StrokeWidth {
    /// Thinnest stroke offered by the slider.
    pub const MIN: Self = Self(QUARTERS_MIN);
    /// Default (and thickest) stroke.
    pub const MAX: Self = Self(QUARTERS_MAX);
    /// Slider step.
    pub const STEP: f64 = 0.25;

    /// Build from a number of quarter steps (4..=8).
    #[must_use]
    pub const fn from_quarters(quarters: u8) -> Option<Self> {
        if quarters >= QUARTERS_MIN && quarters <= QUARTERS_MAX {
            Some(Self(quarters))
        } else {
            None
        }
    }

    /// Snap a numeric value to the nearest quarter; `None` when outside [1, 2].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() || !(1.0..=2.0).contains(&value) {
            return None;
        }
        Self::from_quarters((value * 4.0).round() as u8)
    }

    /// Parse the raw value reported by the range input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().and_then(Self::from_value)
    }

    /// Numeric width.
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.0) * Self::STEP
    }

    /// Width × 100, as used by the stroke classes (`100`..=`200`).
    #[must_use]
    pub const fn hundredths(self) -> u16 {
        self.0 as u16 * 25
    }

    /// CSS class applied to the preview (`s-w-150`).
    #[must_use]
    pub fn class_name(self) -> String {
        format!("s-w-{}", self.hundredths())
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 4;
        match self.0 % 4 {
            1 => write!(f, "{whole}.25"),
            2 => write!(f, "{whole}.5"),
            3 => write!(f, "{whole}.75"),
            _ => write!(f, "{whole}"),
        }
    }
}

/// Code snippet tabs in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SnippetKind {
    /// Raw SVG markup.
    #[default]
    Svg,
    /// JSX markup (placeholder).
    Jsx,
    /// Data URI (placeholder).
    DataUri,
    /// React package install and import.
    React,
    /// Vue package install and import.
    Vue,
    /// Webfont stylesheet and usage.
    Webfont,
    /// SCSS import and usage.
    Scss,
}

impl SnippetKind {
    /// Number of tabs in the strip.
    pub const COUNT: usize = 7;

    /// All tabs in display order.
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Svg,
            Self::Jsx,
            Self::DataUri,
            Self::React,
            Self::Vue,
            Self::Webfont,
            Self::Scss,
        ]
    }

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Svg => "SVG Code",
            Self::Jsx => "JSX code",
            Self::DataUri => "Data URI",
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Webfont => "Webfont",
            Self::Scss => "SCSS",
        }
    }

    /// Position in the tab strip.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Svg => 0,
            Self::Jsx => 1,
            Self::DataUri => 2,
            Self::React => 3,
            Self::Vue => 4,
            Self::Webfont => 5,
            Self::Scss => 6,
        }
    }

    /// Tab at a strip position; `None` past the last tab.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

/// Local state of one preview panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    /// Current stroke width.
    pub stroke: StrokeWidth,
    /// Active snippet tab.
    pub tab: SnippetKind,
}

impl PreviewState {
    /// Replace the stroke width.
    #[must_use]
    pub const fn with_stroke(self, stroke: StrokeWidth) -> Self {
        Self { stroke, ..self }
    }

    /// Apply a raw slider value; unparseable or out-of-range input is ignored.
    #[must_use]
    pub fn with_stroke_input(self, raw: &str) -> Self {
        StrokeWidth::parse(raw).map_or(self, |stroke| self.with_stroke(stroke))
    }

    /// Activate a tab.
    #[must_use]
    pub const fn with_tab(self, tab: SnippetKind) -> Self {
        Self { tab, ..self }
    }

    /// Activate the tab at `index`; indices past the strip leave the state unchanged.
    #[must_use]
    pub fn with_tab_index(self, index: usize) -> Self {
        SnippetKind::from_index(index).map_or(self, |tab| self.with_tab(tab))
    }

    /// Whether `tab` is the active one.
    #[must_use]
    pub fn is_active(self, tab: SnippetKind) -> bool {
        self.tab == tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_render() {
        let state = PreviewState::default();
        assert_eq!(state.stroke, StrokeWidth::MAX);
        assert_eq!(state.stroke.to_string(), "2");
        assert_eq!(state.tab, SnippetKind::Svg);
    }

    #[test]
    fn slider_values_map_to_stroke_classes() {
        let cases = [
            ("1", "s-w-100", "1"),
            ("1.25", "s-w-125", "1.25"),
            ("1.5", "s-w-150", "1.5"),
            ("1.75", "s-w-175", "1.75"),
            ("2", "s-w-200", "2"),
        ];
        for (raw, class, label) in cases {
            let state = PreviewState::default().with_stroke_input(raw);
            assert_eq!(state.stroke.class_name(), class, "input {raw}");
            assert_eq!(state.stroke.to_string(), label, "input {raw}");
        }
    }

    #[test]
    fn invalid_slider_input_keeps_previous_width() {
        let state = PreviewState::default().with_stroke_input("1.5");
        assert_eq!(state.with_stroke_input("abc"), state);
        assert_eq!(state.with_stroke_input("0.5"), state);
        assert_eq!(state.with_stroke_input("2.5"), state);
        assert_eq!(state.with_stroke_input("NaN"), state);
    }

    #[test]
    fn slider_input_snaps_to_quarter_steps() {
        assert_eq!(StrokeWidth::parse("1.3"), StrokeWidth::from_quarters(5));
        assert_eq!(StrokeWidth::parse(" 1.74 "), StrokeWidth::from_quarters(7));
    }

    #[test]
    fn stroke_widths_cover_range() {
        let values: Vec<f64> = (QUARTERS_MIN..=QUARTERS_MAX)
            .filter_map(StrokeWidth::from_quarters)
            .map(StrokeWidth::value)
            .collect();
        assert_eq!(values, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
        assert_eq!(StrokeWidth::from_quarters(3), None);
        assert_eq!(StrokeWidth::from_quarters(9), None);
        assert_eq!(StrokeWidth::MIN.hundredths(), 100);
    }

    #[test]
    fn each_tab_selects_exactly_one_view() {
        for tab in SnippetKind::all() {
            let state = PreviewState::default().with_tab(tab);
            let active: Vec<SnippetKind> = SnippetKind::all()
                .into_iter()
                .filter(|candidate| state.is_active(*candidate))
                .collect();
            assert_eq!(active, vec![tab]);
            assert!(state.tab.index() < SnippetKind::COUNT);
        }
    }

    #[test]
    fn tab_indices_round_trip_in_order() {
        for (position, tab) in SnippetKind::all().into_iter().enumerate() {
            assert_eq!(tab.index(), position);
            assert_eq!(SnippetKind::from_index(position), Some(tab));
        }
    }

    #[test]
    fn tab_strip_index_selects_matching_tab() {
        for tab in SnippetKind::all() {
            let state = PreviewState::default().with_tab_index(tab.index());
            assert_eq!(state.tab, tab);
            assert_eq!(state.stroke, StrokeWidth::MAX);
        }
    }

    #[test]
    fn out_of_range_index_does_not_fall_through_to_scss() {
        let state = PreviewState::default().with_tab(SnippetKind::React);
        assert_eq!(state.with_tab_index(7), state);
        assert_eq!(state.with_tab_index(usize::MAX), state);
        assert_eq!(SnippetKind::from_index(7), None);
    }

    #[test]
    fn tab_labels_match_strip() {
        let labels: Vec<&str> = SnippetKind::all().iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["SVG Code", "JSX code", "Data URI", "React", "Vue", "Webfont", "SCSS"]
        );
    }

    #[test]
    fn stroke_and_tab_change_independently() {
        let state = PreviewState::default()
            .with_tab(SnippetKind::Vue)
            .with_stroke_input("1.25");
        assert_eq!(state.tab, SnippetKind::Vue);
        assert_eq!(state.stroke.class_name(), "s-w-125");
    }
}
