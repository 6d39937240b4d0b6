//! Navigation-guarded links.
//!
//! While a page is being edited in the constructor, an accidental click on
//! an outbound link would navigate away from the editor. Guarded anchors
//! carry a `data-nav-guard` marker in preview mode; the page script
//! intercepts their clicks and suppresses default navigation. Published
//! pages render plain anchors. External links always navigate (new tab)
//! and are never guarded.

use leptos::prelude::*;

/// An anchor whose navigation is suppressed in preview mode.
#[component]
pub fn GuardedLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    /// Constructor/preview mode - guards the link.
    preview: bool,
    /// External links open in a new tab and bypass the guard.
    #[prop(default = false)]
    external: bool,
    #[prop(default = "")] class: &'static str,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    if external {
        return view! {
            <a href=href class=class style=style target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
        .into_any();
    }
    if preview {
        view! {
            <a href=href class=class style=style data-nav-guard="true">
                {label}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=class style=style>
                {label}
            </a>
        }
        .into_any()
    }
}
