//! Inline SVG icons for section chrome.
//!
//! Stroke-based 24x24 glyphs; category cards look icons up by key via
//! [`CategoryIcon`], falling back to the `code` glyph for unknown keys.

use leptos::prelude::*;

/// Shared `<svg>` shell for the stroke glyphs.
macro_rules! icon_svg {
    ($size:expr, $color:expr, $($body:tt)*) => {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=$size
                height=$size
                viewBox="0 0 24 24"
                fill="none"
                stroke=$color
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                $($body)*
            </svg>
        }
    };
}

/// Icon for a category key.
#[component]
pub fn CategoryIcon(
    /// Icon key: `code`, `database`, `palette`, `zap`, `cloud`, `shield`.
    #[prop(into)]
    kind: String,
    /// Icon size in pixels.
    #[prop(default = "24")]
    size: &'static str,
    /// Stroke color (CSS color value).
    #[prop(default = "currentColor")]
    color: &'static str,
) -> impl IntoView {
    match kind.as_str() {
        "database" => icon_svg!(size, color,
            <ellipse cx="12" cy="5" rx="9" ry="3"></ellipse>
            <path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"></path>
            <path d="M3 12c0 1.66 4 3 9 3s9-1.34 9-3"></path>
        )
        .into_any(),
        "palette" => icon_svg!(size, color,
            <path d="M12 22a10 10 0 1 1 10-10c0 2.2-1.8 4-4 4h-2a2 2 0 0 0-1.4 3.4c.4.4.6.9.6 1.4a2.2 2.2 0 0 1-3.2 1.2Z"></path>
            <circle cx="7.5" cy="11.5" r="0.5"></circle>
            <circle cx="12" cy="7.5" r="0.5"></circle>
            <circle cx="16.5" cy="11.5" r="0.5"></circle>
        )
        .into_any(),
        "zap" => icon_svg!(size, color,
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"></polygon>
        )
        .into_any(),
        "cloud" => icon_svg!(size, color,
            <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"></path>
        )
        .into_any(),
        "shield" => icon_svg!(size, color,
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z"></path>
        )
        .into_any(),
        _ => icon_svg!(size, color,
            <polyline points="16 18 22 12 16 6"></polyline>
            <polyline points="8 6 2 12 8 18"></polyline>
        )
        .into_any(),
    }
}

/// Upload glyph shown over editable image slots.
#[component]
pub fn UploadIcon(
    #[prop(default = "24")] size: &'static str,
    #[prop(default = "currentColor")] color: &'static str,
) -> impl IntoView {
    icon_svg!(size, color,
        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"></path>
        <polyline points="17 8 12 3 7 8"></polyline>
        <line x1="12" y1="3" x2="12" y2="15"></line>
    )
}
