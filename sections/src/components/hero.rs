//! Hero banner: the full-width lead section.
//!
//! The hero exercises every resolution rule: per-attribute three-tier
//! fallback for colors and spacing, the all-or-nothing typography bundle,
//! the per-field motion config, translation lookup, the mobile layout
//! branch, and media placement (split vs full background).

use leptos::prelude::*;

use crate::resolve::{
    resolve, resolve_buttons, resolve_media_layout, resolve_motion, resolve_typography,
    ButtonBundle, MediaLayout, Motion, TypoStyle,
};
use crate::types::{
    Alignment, DesignTokens, HeroOverrides, MediaOverride, MediaPosition, MediaShape,
};
use crate::RenderContext;

/// Hero section.
#[component]
pub fn HeroSection(
    id: String,
    overrides: HeroOverrides,
    tokens: DesignTokens,
    ctx: RenderContext,
) -> impl IntoView {
    let mobile = ctx.viewport.is_mobile();
    let data = overrides.data.clone().unwrap_or_default();
    let layout = overrides.layout.clone().unwrap_or_default();
    let style_ovr = overrides.style.clone().unwrap_or_default();
    let media = overrides.media.clone();

    let motion = resolve_motion(overrides.animation.as_ref(), &tokens.animation);
    let media_layout = resolve_media_layout(media.as_ref(), mobile);
    let full_bg = media_layout == MediaLayout::FullBackground;

    let title_text = data.texts.translated("title", &ctx.lang).to_string();
    let desc_text = data.texts.translated("description", &ctx.lang).to_string();
    let primary_label = data.texts.translated("primary_btn", &ctx.lang).to_string();
    let secondary_label = data.texts.translated("secondary_btn", &ctx.lang).to_string();

    // Computed default bundles; the override bundle substitutes these as a
    // unit, never field-by-field against the tokens.
    let smoothing = if tokens.typography.antialias {
        "antialiased"
    } else {
        "auto"
    };
    let title_defaults = TypoStyle {
        font_size: if mobile {
            "calc(var(--dna-unit) * 3.25)".into()
        } else {
            "calc(var(--dna-unit) * 6)".into()
        },
        font_weight: tokens.typography.title_weight.clone(),
        letter_spacing: format!("{}em", tokens.typography.title_spacing),
        line_height: "1.1".into(),
        transform: if tokens.typography.uppercase {
            "uppercase"
        } else {
            "none"
        },
        smoothing,
    };
    let desc_defaults = TypoStyle {
        font_size: if mobile {
            "calc(var(--dna-unit) * 1.125)".into()
        } else {
            "calc(var(--dna-unit) * 1.5)".into()
        },
        font_weight: "400".into(),
        letter_spacing: "0em".into(),
        line_height: "1.6".into(),
        transform: "none",
        smoothing,
    };
    let title_typo = resolve_typography(data.title_typo.as_ref(), &title_defaults, &tokens.typography);
    let desc_typo = resolve_typography(
        data.description_typo.as_ref(),
        &desc_defaults,
        &tokens.typography,
    );

    let title_color = resolve(
        style_ovr.title_color.clone(),
        style_ovr.text_color.clone(),
        tokens.colors.text_primary.clone(),
    );
    let desc_color = resolve(
        style_ovr.desc_color.clone(),
        style_ovr.text_color.clone(),
        tokens.colors.text_secondary.clone(),
    );

    let entrance = entrance_style(&id, &motion);

    // Mobile pins the title to a fixed display size regardless of bundle.
    let mobile_title_fix = if mobile {
        "font-size:3.5rem;line-height:0.9;"
    } else {
        ""
    };
    let title_style = format!(
        "{};color:{title_color};{mobile_title_fix}{}",
        title_typo.to_css(),
        entrance(0),
    );
    let desc_style = format!("{};color:{desc_color};{}", desc_typo.to_css(), entrance(1));

    // Container
    let padding_x = layout.padding_x.unwrap_or(tokens.spacing.padding_x);
    let padding_y = layout.padding_y.unwrap_or(tokens.spacing.padding_y);
    let padding = if mobile {
        "40px 16px".to_string()
    } else {
        format!("{padding_y}px {padding_x}px")
    };
    let background = match overrides.background.as_ref() {
        Some(bg) if bg.lock_background => bg
            .fixed_color
            .clone()
            .unwrap_or_else(|| "transparent".to_string()),
        _ => style_ovr
            .bg_fill
            .clone()
            .unwrap_or_else(|| "transparent".to_string()),
    };
    let min_height = layout
        .height
        .clone()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "70vh".to_string());
    let alignment = layout.alignment.unwrap_or_default();
    let centered = !mobile && alignment == Alignment::Center;
    let text_align = if mobile { "left" } else { alignment.as_css() };
    // DOM order is media-first, so reversed directions put the image on
    // the named side.
    let direction = if mobile {
        "column"
    } else {
        match media_layout {
            MediaLayout::Split(MediaPosition::Left) => "row",
            MediaLayout::Split(MediaPosition::Top) => "column",
            MediaLayout::Split(MediaPosition::Bottom) => "column-reverse",
            _ => "row-reverse",
        }
    };
    let container_style = format!(
        "min-height:{min_height};background-color:{background};padding:{padding};justify-content:center;text-align:{text_align};transition:all 0.5s ease-out;",
    );
    let inner_style = format!("flex-direction:{direction};");

    let glow_style = if full_bg {
        "opacity:0;".to_string()
    } else {
        "opacity:0.2;".to_string()
    };

    let bundle = resolve_buttons(
        overrides.btn_use_global,
        overrides.btn_styles.as_ref(),
        &tokens.buttons,
    );
    let show_primary = data.primary_btn_visible != Some(false);
    let show_secondary = data.secondary_btn_visible != Some(false);
    let actions_style = format!(
        "justify-content:{};{}",
        if centered { "center" } else { "flex-start" },
        entrance(2),
    );

    let keyframes = format!(
        "@keyframes entrance-{id} {{ to {{ opacity: 1; transform: translateY(0) scale(1); filter: blur(0); }} }}\n\
         @keyframes levitate-{id} {{ 0% {{ transform: translateY(0); }} 50% {{ transform: translateY(-15px); }} 100% {{ transform: translateY(0); }} }}",
    );

    let text_column_style = format!(
        "{}{}",
        if mobile {
            "width:100%;padding:0 24px;".to_string()
        } else if matches!(media_layout, MediaLayout::Split(_)) {
            "width:45%;".to_string()
        } else {
            "width:100%;max-width:56rem;".to_string()
        },
        if centered { "margin:0 auto;" } else { "" },
    );

    let split_view = match (&media_layout, media.as_ref()) {
        (MediaLayout::Split(_), Some(m)) => {
            Some(split_media(m, &tokens, &id, mobile, entrance(3)))
        }
        _ => None,
    };
    let bg_view = match (&media_layout, media.as_ref()) {
        (MediaLayout::FullBackground, Some(m)) => Some(background_media(m)),
        _ => None,
    };

    view! {
        <section id=id.clone() class="dna-hero" style=container_style>
            <style>{keyframes}</style>

            {bg_view}

            <div class="hero-glow" style=glow_style></div>

            <div class="hero-inner" style=inner_style>
                {split_view}

                <div class="hero-text" style=text_column_style>
                    <h1 class="hero-title" style=title_style>{title_text}</h1>
                    <p class="hero-desc" style=desc_style>{desc_text}</p>
                    <div class="hero-actions" style=actions_style>
                        {show_primary.then(|| hero_button(
                            primary_label.clone(),
                            true,
                            &bundle,
                            &tokens,
                            &style_ovr.desc_color,
                            mobile,
                        ))}
                        {show_secondary.then(|| hero_button(
                            secondary_label.clone(),
                            false,
                            &bundle,
                            &tokens,
                            &style_ovr.desc_color,
                            mobile,
                        ))}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Per-index entrance style, staggered by the resolved motion config.
fn entrance_style(id: &str, motion: &Motion) -> impl Fn(usize) -> String {
    let id = id.to_string();
    let motion = *motion;
    move |index: usize| {
        format!(
            "opacity:0;transform:translateY({}px) scale({});filter:blur({}px);animation:entrance-{} {}s cubic-bezier(0.16, 1, 0.3, 1) {}s forwards;",
            motion.entrance_y,
            motion.scale,
            motion.blur,
            id,
            motion.duration,
            index as f32 * motion.stagger,
        )
    }
}

fn hero_button(
    label: String,
    primary: bool,
    bundle: &ButtonBundle,
    tokens: &DesignTokens,
    desc_color: &Option<String>,
    mobile: bool,
) -> impl IntoView {
    let accent = tokens.colors.accent.clone();
    let color = if primary {
        "#FFFFFF".to_string()
    } else {
        desc_color
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| tokens.colors.text_primary.clone())
    };
    let style = format!(
        "padding:{padding};min-height:{min_h};background-color:{bg};color:{color};border-radius:{radius}px;font-size:{font}px;border:{border};box-shadow:{shadow};",
        padding = bundle.padding(),
        min_h = if mobile { "48px" } else { "0" },
        bg = if primary { accent.as_str() } else { "transparent" },
        radius = bundle.radius,
        font = bundle.scaled_font(),
        border = if primary {
            "none".to_string()
        } else {
            format!("{}px solid rgba(0,0,0,0.1)", bundle.stroke)
        },
        shadow = if primary && bundle.shadow {
            format!("0 10px 30px -10px {accent}80")
        } else {
            "none".to_string()
        },
    );
    view! {
        <button class="hero-btn" style=style>{label}</button>
    }
}

/// The image column of a split layout.
fn split_media(
    media: &MediaOverride,
    tokens: &DesignTokens,
    id: &str,
    mobile: bool,
    entrance: String,
) -> AnyView {
    let url = media.image_url.clone().unwrap_or_default();
    let opacity = media.image_opacity.unwrap_or(100.0) / 100.0;
    let scale = media.image_scale.unwrap_or(110.0) / 100.0;

    let column_style = if mobile {
        format!("{entrance}width:100%;height:50vh;min-height:400px;margin-bottom:32px;")
    } else {
        format!("{entrance}width:50%;display:flex;justify-content:center;align-items:center;")
    };

    let frame_style = if mobile {
        "width:100%;height:100%;border-radius:0 0 24px 24px;".to_string()
    } else {
        let levitate = if media.levitation {
            format!(
                "animation:levitate-{id} {}s ease-in-out infinite;",
                media.levitation_speed.unwrap_or(3.0),
            )
        } else {
            String::new()
        };
        format!(
            "{frame}box-shadow:0 {off}px {blur}px rgba(0,0,0,0.3);border:{bw}px solid rgba(255,255,255,0.1);{levitate}",
            frame = shape_frame(media.shape, media.image_position.unwrap_or_default()),
            off = tokens.effects.shadow_offset,
            blur = tokens.effects.shadow_blur,
            bw = tokens.effects.border_width,
        )
    };

    let img_style = if mobile {
        format!("opacity:{opacity};")
    } else {
        format!("opacity:{opacity};transform:scale({scale});")
    };

    view! {
        <div class="hero-media-column" style=column_style>
            <div class="hero-media" style=frame_style>
                <img src=url alt="Hero media" style=img_style />
                {mobile.then(|| view! { <div class="hero-media-fade"></div> })}
            </div>
        </div>
    }
    .into_any()
}

/// Aspect ratio and corner radius for the desktop media frame.
fn shape_frame(shape: Option<MediaShape>, position: MediaPosition) -> String {
    match shape {
        Some(MediaShape::Square) => "width:100%;aspect-ratio:1/1;border-radius:0;".to_string(),
        Some(MediaShape::Circle) => "width:100%;aspect-ratio:1/1;border-radius:999px;".to_string(),
        Some(MediaShape::Portrait) => {
            "width:100%;aspect-ratio:3/4;border-radius:var(--dna-radius-panel);".to_string()
        }
        Some(MediaShape::Landscape) => {
            "width:100%;aspect-ratio:16/9;border-radius:var(--dna-radius-panel);".to_string()
        }
        // Stacked positions stretch across the column; side positions keep
        // a wider photographic crop.
        None if matches!(position, MediaPosition::Top | MediaPosition::Bottom) => {
            "width:100%;aspect-ratio:4/3;border-radius:var(--dna-radius-panel);".to_string()
        }
        None => "width:100%;aspect-ratio:16/9;border-radius:var(--dna-radius-panel);".to_string(),
    }
}

/// The full-bleed background layer (desktop only by construction).
fn background_media(media: &MediaOverride) -> AnyView {
    let url = media.image_url.clone().unwrap_or_default();
    let opacity = media.image_opacity.unwrap_or(100.0) / 100.0;
    view! {
        <div class="hero-bg-layer" style=format!("opacity:{opacity};")>
            <img src=url alt="Hero background" />
            <div class="hero-bg-scrim"></div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{Viewport, ViewportMode};
    use crate::types::{HeroData, HeroStyle, MotionOverride, TypoOverride};
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    fn render(overrides: HeroOverrides, ctx: RenderContext) -> String {
        let id = "hero-01".to_string();
        let tokens = DesignTokens::default();
        view! {
            <HeroSection id=id overrides=overrides tokens=tokens ctx=ctx />
        }
        .to_html()
    }

    fn with_media(position: MediaPosition) -> HeroOverrides {
        HeroOverrides {
            media: Some(MediaOverride {
                show_image: true,
                image_url: Some("https://example.com/a.jpg".into()),
                image_position: Some(position),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn mobile_ctx() -> RenderContext {
        RenderContext::default().with_viewport(Viewport::new(Some(390), ViewportMode::Auto))
    }

    #[test]
    fn desktop_background_position_renders_the_substrate_layer() {
        let html = render(with_media(MediaPosition::Background), RenderContext::default());
        assert!(html.contains("hero-bg-layer"));
        assert!(!html.contains("hero-media-column"));
    }

    #[test]
    fn background_position_on_mobile_stacks_instead() {
        let html = render(with_media(MediaPosition::Background), mobile_ctx());
        assert!(!html.contains("hero-bg-layer"));
        assert!(html.contains("hero-media-column"));
        assert!(html.contains("flex-direction:column"));
    }

    #[test]
    fn title_color_falls_back_through_text_color() {
        let overrides = HeroOverrides {
            style: Some(HeroStyle {
                text_color: Some("#ABCDEF".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = render(overrides, RenderContext::default());
        assert!(html.contains("color:#ABCDEF"));
    }

    #[test]
    fn local_motion_config_drives_the_entrance_styles() {
        let overrides = HeroOverrides {
            animation: Some(MotionOverride {
                use_global: Some(false),
                duration: Some(2.5),
                stagger: Some(0.5),
                entrance_y: Some(64.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = render(overrides, RenderContext::default());
        assert!(html.contains("translateY(64px)"));
        assert!(html.contains("entrance-hero-01 2.5s"));
        // Third content index staggers by 2 * 0.5s.
        assert!(html.contains("1s forwards"));
    }

    #[test]
    fn typography_opt_out_keeps_default_fields() {
        let mut data = HeroData::default();
        data.title_typo = Some(TypoOverride {
            use_global: Some(false),
            font_weight: Some("950".into()),
            ..Default::default()
        });
        let overrides = HeroOverrides {
            data: Some(data),
            ..Default::default()
        };
        let html = render(overrides, RenderContext::default());
        assert!(html.contains("font-weight:950"));
        // Absent fields stay on the computed default bundle.
        assert!(html.contains("calc(var(--dna-unit) * 6)"));
    }

    #[test]
    fn hidden_buttons_are_not_rendered() {
        let mut data = HeroData::default();
        data.primary_btn_visible = Some(false);
        let overrides = HeroOverrides {
            data: Some(data),
            ..Default::default()
        };
        let html = render(overrides, RenderContext::default());
        assert!(!html.contains("Get Started"));
        assert!(html.contains("Documentation"));
    }
}
