//! Override resolution: the precedence rules that turn sparse local
//! overrides plus global DNA tokens into concrete presentation values.
//!
//! Every attribute resolves independently through the same three-tier
//! chain - local override, then global token, then hardcoded default - so
//! two attributes on the same element may be sourced from different tiers.
//! Two sub-systems intentionally deviate from per-field resolution:
//!
//! - the typography bundle resolves **all-or-nothing**
//!   ([`resolve_typography`]),
//! - the motion config resolves **per-field** with an unconditional branch
//!   for the timing fields ([`resolve_motion`]).
//!
//! The asymmetry is inherited behavior, kept distinct on purpose.
//!
//! Resolution is pure and infallible: a render pass never errors, it falls
//! back.

use crate::types::{
    AnimationTokens, ButtonStyleOverride, ButtonTokens, MediaOverride, MediaPosition,
    MotionOverride, TypographyTokens, TypoOverride,
};

/// Viewport width below which the mobile layout branch activates. The
/// boundary is exclusive on the mobile side: 767 is mobile, 768 is desktop.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// A value that can stand in as a local override. Strings count as absent
/// when empty; everything else counts whenever it is `Some`.
pub trait OverrideValue {
    /// Whether this value counts as a present override.
    fn is_set(&self) -> bool;
}

impl OverrideValue for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl OverrideValue for &str {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl OverrideValue for f32 {
    fn is_set(&self) -> bool {
        true
    }
}

impl OverrideValue for bool {
    fn is_set(&self) -> bool {
        true
    }
}

/// The three-tier fallback chain: local override, global token, default.
///
/// Applied independently per attribute - there is no cascading theme
/// object.
pub fn resolve<T: OverrideValue>(local: Option<T>, global: Option<T>, default: T) -> T {
    if let Some(v) = local {
        if v.is_set() {
            return v;
        }
    }
    if let Some(v) = global {
        if v.is_set() {
            return v;
        }
    }
    default
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Viewport-mode flag held by the store: auto-detect from the observed
/// width, or force one layout regardless of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    /// Follow the observed width.
    #[default]
    Auto,
    /// Mobile layout regardless of width.
    ForcedMobile,
    /// Desktop preview; a genuinely narrow viewport still wins.
    ForcedDesktop,
}

/// The viewport a render pass sees: a live width observation (when one
/// exists) plus the store's mode flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Observed width in CSS pixels; `None` when nothing has been measured.
    pub width: Option<u32>,
    /// The store's mode flag.
    pub mode: ViewportMode,
}

impl Viewport {
    /// Bundle a width observation with the store's mode flag.
    pub fn new(width: Option<u32>, mode: ViewportMode) -> Self {
        Self { width, mode }
    }

    /// Mobile is a distinct rendering mode, not a continuous scale-down:
    /// either a narrow observed width or a forced-mobile flag flips the
    /// whole layout branch.
    pub fn is_mobile(&self) -> bool {
        let narrow = self.width.is_some_and(|w| w < MOBILE_BREAKPOINT);
        narrow || self.mode == ViewportMode::ForcedMobile
    }
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

/// A fully-materialized typography bundle, ready to print into a style
/// attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct TypoStyle {
    /// CSS length (px or a calc expression).
    pub font_size: String,
    pub font_weight: String,
    /// CSS length in em.
    pub letter_spacing: String,
    pub line_height: String,
    /// `uppercase` or `none`.
    pub transform: &'static str,
    /// `antialiased` or `auto`.
    pub smoothing: &'static str,
}

impl TypoStyle {
    /// Render as inline CSS declarations (no trailing separator).
    pub fn to_css(&self) -> String {
        format!(
            "font-size:{};font-weight:{};letter-spacing:{};line-height:{};text-transform:{};-webkit-font-smoothing:{}",
            self.font_size,
            self.font_weight,
            self.letter_spacing,
            self.line_height,
            self.transform,
            self.smoothing,
        )
    }
}

/// Resolve a typography override against its computed default bundle.
///
/// All-or-nothing: unless the override is present with
/// `use_global == Some(false)`, the default bundle applies verbatim and no
/// per-field mixing happens. Only inside the local branch do individual
/// fields fall back to the default bundle's fields (and `uppercase` to the
/// global token).
pub fn resolve_typography(
    ovr: Option<&TypoOverride>,
    defaults: &TypoStyle,
    tokens: &TypographyTokens,
) -> TypoStyle {
    let Some(typo) = ovr else {
        return defaults.clone();
    };
    if typo.use_global != Some(false) {
        return defaults.clone();
    }

    TypoStyle {
        font_size: typo
            .font_size
            .map(|px| format!("{px}px"))
            .unwrap_or_else(|| defaults.font_size.clone()),
        font_weight: typo
            .font_weight
            .clone()
            .unwrap_or_else(|| defaults.font_weight.clone()),
        letter_spacing: typo
            .letter_spacing
            .map(|em| format!("{em}em"))
            .unwrap_or_else(|| defaults.letter_spacing.clone()),
        line_height: typo
            .line_height
            .clone()
            .unwrap_or_else(|| defaults.line_height.clone()),
        transform: match typo.uppercase {
            Some(true) => "uppercase",
            Some(false) => "none",
            None => {
                if tokens.uppercase {
                    "uppercase"
                } else {
                    "none"
                }
            }
        },
        smoothing: defaults.smoothing,
    }
}

// ---------------------------------------------------------------------------
// Motion
// ---------------------------------------------------------------------------

/// Resolved entrance animation parameters for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Entrance duration in seconds.
    pub duration: f32,
    /// Delay between staggered siblings, in seconds.
    pub stagger: f32,
    /// Vertical entrance offset in px.
    pub entrance_y: f32,
    /// Initial scale factor.
    pub scale: f32,
    /// Initial blur in px.
    pub blur: f32,
}

impl From<&AnimationTokens> for Motion {
    fn from(t: &AnimationTokens) -> Self {
        Self {
            duration: t.duration,
            stagger: t.stagger,
            entrance_y: t.entrance_y,
            scale: t.scale,
            blur: t.blur,
        }
    }
}

/// Resolve the motion config.
///
/// With `use_global == Some(false)`, the timing fields
/// (duration/stagger/entrance_y) come from the override unconditionally -
/// an absent field degrades to `0.0`, which produces a degenerate
/// animation rather than an error. `scale` and `blur` fall back to the
/// global token when absent or zero.
pub fn resolve_motion(ovr: Option<&MotionOverride>, tokens: &AnimationTokens) -> Motion {
    match ovr {
        Some(a) if a.use_global == Some(false) => Motion {
            duration: a.duration.unwrap_or_default(),
            stagger: a.stagger.unwrap_or_default(),
            entrance_y: a.entrance_y.unwrap_or_default(),
            scale: match a.scale {
                Some(s) if s != 0.0 => s,
                _ => tokens.scale,
            },
            blur: match a.blur {
                Some(b) if b != 0.0 => b,
                _ => tokens.blur,
            },
        },
        _ => tokens.into(),
    }
}

// ---------------------------------------------------------------------------
// Media placement
// ---------------------------------------------------------------------------

/// The layout a hero render pass actually uses for its media.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaLayout {
    /// No image, text-only.
    None,
    /// Two-region layout: media beside or stacked with the text column.
    Split(MediaPosition),
    /// Full-bleed background behind the text. Never produced on mobile.
    FullBackground,
}

impl MediaLayout {
    /// Whether any image renders at all.
    pub fn has_image(&self) -> bool {
        !matches!(self, MediaLayout::None)
    }
}

/// Resolve where the hero image goes.
///
/// Mobile stacks the image on top of the text whenever one is present,
/// which also makes full-background unreachable on mobile even when the
/// override asks for it explicitly.
pub fn resolve_media_layout(media: Option<&MediaOverride>, mobile: bool) -> MediaLayout {
    let Some(m) = media else {
        return MediaLayout::None;
    };
    let has_image = m.show_image && m.image_url.as_deref().is_some_and(|u| !u.is_empty());
    if !has_image {
        return MediaLayout::None;
    }

    let position = m.image_position.unwrap_or_default();
    if position == MediaPosition::Background && !mobile {
        return MediaLayout::FullBackground;
    }
    let effective = if mobile { MediaPosition::Top } else { position };
    MediaLayout::Split(effective)
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// Resolved button sizing bundle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonBundle {
    /// Uniform size multiplier.
    pub scale: f32,
    /// Horizontal padding in px (pre-scale).
    pub pad_x: f32,
    /// Vertical padding in px (pre-scale).
    pub pad_y: f32,
    /// Label font size in px (pre-scale).
    pub font_size: f32,
    /// Border stroke width in px.
    pub stroke: f32,
    /// Corner radius in px.
    pub radius: f32,
    /// Drop shadow under primary buttons.
    pub shadow: bool,
}

impl From<&ButtonTokens> for ButtonBundle {
    fn from(t: &ButtonTokens) -> Self {
        Self {
            scale: t.scale,
            pad_x: t.pad_x,
            pad_y: t.pad_y,
            font_size: t.font_size,
            stroke: t.stroke,
            radius: t.radius,
            shadow: t.shadow,
        }
    }
}

impl From<&ButtonStyleOverride> for ButtonBundle {
    fn from(s: &ButtonStyleOverride) -> Self {
        Self {
            scale: s.scale,
            pad_x: s.pad_x,
            pad_y: s.pad_y,
            font_size: s.font_size,
            stroke: s.stroke,
            radius: s.radius,
            shadow: s.shadow,
        }
    }
}

impl ButtonBundle {
    /// Scaled padding, `"{y}px {x}px"`.
    pub fn padding(&self) -> String {
        format!(
            "{}px {}px",
            self.pad_y * self.scale,
            self.pad_x * self.scale
        )
    }

    /// Scaled label font size in px.
    pub fn scaled_font(&self) -> f32 {
        self.font_size * self.scale
    }
}

/// Resolve the button bundle for a block.
///
/// Like typography, the bundle substitutes as a whole: the global tokens
/// apply unless the block explicitly opts out, and an opted-out block with
/// no `btn_styles` record falls back to the stock bundle
/// ([`ButtonStyleOverride::default`]), not to the global tokens.
pub fn resolve_buttons(
    use_global: Option<bool>,
    styles: Option<&ButtonStyleOverride>,
    tokens: &ButtonTokens,
) -> ButtonBundle {
    if use_global != Some(false) {
        return tokens.into();
    }
    match styles {
        Some(s) => s.into(),
        None => (&ButtonStyleOverride::default()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn default_bundle() -> TypoStyle {
        TypoStyle {
            font_size: "calc(var(--dna-unit) * 6)".into(),
            font_weight: "800".into(),
            letter_spacing: "-0.03em".into(),
            line_height: "1.1".into(),
            transform: "none",
            smoothing: "antialiased",
        }
    }

    #[test]
    fn resolve_prefers_local_over_global() {
        let got = resolve(Some("#111".to_string()), Some("#222".to_string()), "#333".to_string());
        assert_eq!(got, "#111");
    }

    #[test]
    fn resolve_uses_global_when_local_absent() {
        let got = resolve(None, Some("#222".to_string()), "#333".to_string());
        assert_eq!(got, "#222");
    }

    #[test]
    fn resolve_falls_to_default_when_neither_set() {
        let got: String = resolve(None, None, "#333".to_string());
        assert_eq!(got, "#333");
    }

    #[test]
    fn resolve_treats_empty_string_as_absent() {
        let got = resolve(Some(String::new()), Some("#222".to_string()), "#333".to_string());
        assert_eq!(got, "#222");
    }

    #[test]
    fn typography_defaults_apply_verbatim_without_opt_out() {
        let tokens = TypographyTokens::default();
        let ovr = TypoOverride {
            font_weight: Some("700".into()),
            ..Default::default()
        };
        // use_global unset means the bundle is ignored wholesale.
        let got = resolve_typography(Some(&ovr), &default_bundle(), &tokens);
        assert_eq!(got, default_bundle());
    }

    #[test]
    fn typography_is_all_or_nothing() {
        let tokens = TypographyTokens::default();
        let ovr = TypoOverride {
            use_global: Some(false),
            font_weight: Some("700".into()),
            ..Default::default()
        };
        let got = resolve_typography(Some(&ovr), &default_bundle(), &tokens);
        // The one supplied field comes from the override...
        assert_eq!(got.font_weight, "700");
        // ...and every absent field comes from the default bundle, not the
        // global tokens.
        assert_eq!(got.font_size, default_bundle().font_size);
        assert_eq!(got.letter_spacing, default_bundle().letter_spacing);
        assert_eq!(got.line_height, default_bundle().line_height);
    }

    #[test]
    fn typography_uppercase_falls_back_to_global_token() {
        let tokens = TypographyTokens {
            uppercase: true,
            ..Default::default()
        };
        let ovr = TypoOverride {
            use_global: Some(false),
            ..Default::default()
        };
        let got = resolve_typography(Some(&ovr), &default_bundle(), &tokens);
        assert_eq!(got.transform, "uppercase");

        let ovr = TypoOverride {
            use_global: Some(false),
            uppercase: Some(false),
            ..Default::default()
        };
        let got = resolve_typography(Some(&ovr), &default_bundle(), &tokens);
        assert_eq!(got.transform, "none");
    }

    #[test]
    fn motion_uses_tokens_by_default() {
        let tokens = AnimationTokens::default();
        let got = resolve_motion(None, &tokens);
        assert_eq!(got, Motion::from(&tokens));

        // An override without the explicit opt-out is ignored too.
        let ovr = MotionOverride {
            duration: Some(9.0),
            ..Default::default()
        };
        assert_eq!(resolve_motion(Some(&ovr), &tokens), Motion::from(&tokens));
    }

    #[test]
    fn motion_timing_fields_are_unconditional_when_local() {
        let tokens = AnimationTokens::default();
        let ovr = MotionOverride {
            use_global: Some(false),
            duration: Some(2.0),
            ..Default::default()
        };
        let got = resolve_motion(Some(&ovr), &tokens);
        assert_eq!(got.duration, 2.0);
        // Missing timing fields degrade to zero rather than falling back.
        assert_eq!(got.stagger, 0.0);
        assert_eq!(got.entrance_y, 0.0);
        // scale/blur keep the global fallback.
        assert_eq!(got.scale, tokens.scale);
        assert_eq!(got.blur, tokens.blur);
    }

    #[test]
    fn motion_zero_scale_falls_back_to_global() {
        let tokens = AnimationTokens::default();
        let ovr = MotionOverride {
            use_global: Some(false),
            scale: Some(0.0),
            blur: Some(2.5),
            ..Default::default()
        };
        let got = resolve_motion(Some(&ovr), &tokens);
        assert_eq!(got.scale, tokens.scale);
        assert_eq!(got.blur, 2.5);
    }

    #[test]
    fn viewport_boundary_is_exclusive_on_the_mobile_side() {
        assert!(Viewport::new(Some(767), ViewportMode::Auto).is_mobile());
        assert!(!Viewport::new(Some(768), ViewportMode::Auto).is_mobile());
    }

    #[test]
    fn forced_mobile_wins_at_any_width() {
        assert!(Viewport::new(Some(1920), ViewportMode::ForcedMobile).is_mobile());
        assert!(Viewport::new(None, ViewportMode::ForcedMobile).is_mobile());
    }

    #[test]
    fn forced_desktop_does_not_suppress_a_narrow_width() {
        // Either signal being "mobile" forces the mobile branch.
        assert!(Viewport::new(Some(500), ViewportMode::ForcedDesktop).is_mobile());
    }

    #[test]
    fn unmeasured_auto_viewport_is_desktop() {
        assert!(!Viewport::new(None, ViewportMode::Auto).is_mobile());
    }

    fn media(position: MediaPosition) -> MediaOverride {
        MediaOverride {
            show_image: true,
            image_url: Some("https://example.com/a.jpg".into()),
            image_position: Some(position),
            ..Default::default()
        }
    }

    #[test]
    fn media_defaults_to_right_split() {
        let m = MediaOverride {
            show_image: true,
            image_url: Some("x.jpg".into()),
            ..Default::default()
        };
        assert_eq!(
            resolve_media_layout(Some(&m), false),
            MediaLayout::Split(MediaPosition::Right)
        );
    }

    #[test]
    fn media_without_url_is_text_only() {
        let m = MediaOverride {
            show_image: true,
            image_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(resolve_media_layout(Some(&m), false), MediaLayout::None);
        assert_eq!(resolve_media_layout(None, false), MediaLayout::None);
    }

    #[test]
    fn mobile_forces_image_to_top() {
        assert_eq!(
            resolve_media_layout(Some(&media(MediaPosition::Left)), true),
            MediaLayout::Split(MediaPosition::Top)
        );
    }

    #[test]
    fn full_background_requires_desktop() {
        assert_eq!(
            resolve_media_layout(Some(&media(MediaPosition::Background)), false),
            MediaLayout::FullBackground
        );
        // Explicit background position on mobile still stacks on top.
        assert_eq!(
            resolve_media_layout(Some(&media(MediaPosition::Background)), true),
            MediaLayout::Split(MediaPosition::Top)
        );
    }

    #[test]
    fn buttons_follow_global_tokens_by_default() {
        let tokens = ButtonTokens::default();
        let got = resolve_buttons(None, None, &tokens);
        assert_eq!(got, ButtonBundle::from(&tokens));

        // A styles record without the opt-out flag is ignored.
        let styles = ButtonStyleOverride {
            pad_x: 99.0,
            ..Default::default()
        };
        assert_eq!(
            resolve_buttons(Some(true), Some(&styles), &tokens),
            ButtonBundle::from(&tokens)
        );
    }

    #[test]
    fn opted_out_buttons_use_stock_bundle_without_styles() {
        let tokens = ButtonTokens::default();
        let got = resolve_buttons(Some(false), None, &tokens);
        assert_eq!(got, ButtonBundle::from(&ButtonStyleOverride::default()));
        assert_ne!(got, ButtonBundle::from(&tokens));
    }

    #[test]
    fn button_padding_scales() {
        let bundle = ButtonBundle {
            scale: 2.0,
            pad_x: 10.0,
            pad_y: 5.0,
            font_size: 12.0,
            stroke: 1.0,
            radius: 4.0,
            shadow: false,
        };
        assert_eq!(bundle.padding(), "10px 20px");
        assert_eq!(bundle.scaled_font(), 24.0);
    }
}
