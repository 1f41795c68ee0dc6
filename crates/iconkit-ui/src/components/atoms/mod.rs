//! Shared UI atoms used across the icon pages.

pub(crate) mod copy_link;
pub(crate) mod empty_state;
pub(crate) mod icon_glyph;
pub(crate) mod icon_svg;
pub(crate) mod stroke_range;
pub(crate) mod tab;

pub(crate) use copy_link::CopyLink;
pub(crate) use empty_state::EmptyState;
pub(crate) use icon_glyph::IconGlyph;
pub(crate) use icon_svg::IconSvg;
pub(crate) use stroke_range::StrokeRange;
pub(crate) use tab::Tab;
