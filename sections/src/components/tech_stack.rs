//! Tech-stack showcase: category cards with an expandable detail panel.
//!
//! Selection is single-select with toggle-off semantics
//! ([`CategorySelection`]). The server renders the selected state; in the
//! browser the page script re-applies the same transition rules on click.
//! Every category's panel is rendered (hidden) so the script can expand
//! one without a round trip.

use leptos::prelude::*;

use super::CategoryIcon;
use crate::selection::CategorySelection;
use crate::types::{Category, DesignTokens, TechStackOverrides};

/// Tech-stack section.
#[component]
pub fn TechStack(
    id: String,
    overrides: TechStackOverrides,
    tokens: DesignTokens,
    /// Ephemeral view state; a fresh mount has nothing selected.
    #[prop(optional)]
    selection: CategorySelection,
) -> impl IntoView {
    let data = overrides.data.clone().unwrap_or_default();
    let layout = overrides.layout.clone().unwrap_or_default();
    let padding_y = layout.padding_y.unwrap_or(80.0);

    let text_prim = tokens.colors.text_primary.clone();
    let border = tokens.colors.border.clone();
    let panel_radius = tokens.radius.panel;
    let chip_radius = tokens.radius.small;
    let duration = tokens.animation.duration;
    let entrance_y = tokens.animation.entrance_y;

    let section_style = format!(
        "padding-top:{padding_y}px;padding-bottom:{padding_y}px;animation:stack-in-{id} {duration}s ease-out;",
    );
    let keyframes = format!(
        "@keyframes stack-in-{id} {{ from {{ opacity: 0; transform: translateY({entrance_y}px); }} to {{ opacity: 1; transform: translateY(0); }} }}",
    );

    let title = data.title.clone().unwrap_or_default();
    let description = data.description.clone().unwrap_or_default();
    let title_style = format!("color:{text_prim};");
    let categories = data.categories.clone().unwrap_or_default();

    view! {
        <div id=id class="dna-stack">
            <style>{keyframes}</style>
            <div class="stack-inner" style=section_style>
                {(!title.is_empty()).then(|| view! {
                    <div class="stack-header">
                        <h2 class="stack-title" style=title_style.clone()>{title.clone()}</h2>
                        {(!description.is_empty()).then(|| view! {
                            <p class="stack-desc" style=title_style.clone()>{description.clone()}</p>
                        })}
                    </div>
                })}

                <div class="stack-grid">
                    {categories
                        .iter()
                        .map(|category| {
                            category_card(
                                category,
                                selection.is_selected(&category.id),
                                &text_prim,
                                &border,
                                panel_radius,
                            )
                        })
                        .collect::<Vec<_>>()}
                </div>

                {categories
                    .iter()
                    .map(|category| {
                        detail_panel(
                            category,
                            selection.is_selected(&category.id),
                            &text_prim,
                            panel_radius,
                            chip_radius,
                        )
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn category_card(
    category: &Category,
    selected: bool,
    text_prim: &str,
    border: &str,
    panel_radius: f32,
) -> impl IntoView {
    let color = category.color.clone();
    let card_style = if selected {
        format!(
            "border-color:{color};border-radius:{panel_radius}px;background-color:{color}15;box-shadow:0 10px 30px -10px {color}40;",
        )
    } else {
        format!(
            "border-color:{border}40;border-radius:{panel_radius}px;background-color:rgba(255,255,255,0.02);",
        )
    };
    let icon_style = if selected {
        format!("color:{color};opacity:1;")
    } else {
        format!("color:{text_prim};opacity:0.4;")
    };
    let name_style = if selected {
        format!("color:{color};opacity:1;")
    } else {
        format!("color:{text_prim};opacity:0.6;")
    };
    let class = if selected {
        "stack-card active"
    } else {
        "stack-card"
    };
    let tool_count = category.technologies.len();

    view! {
        <div class="stack-cell">
            <button
                class=class
                style=card_style
                data-category=category.id.clone()
                data-color=color
            >
                <div class="stack-card-icon" style=icon_style>
                    <CategoryIcon kind=category.icon.clone() />
                </div>
                <div class="stack-card-name" style=name_style>{category.name.clone()}</div>
                {(tool_count > 0).then(|| view! {
                    <div class="stack-card-count">{tool_count} " Tools"</div>
                })}
            </button>
        </div>
    }
}

fn detail_panel(
    category: &Category,
    selected: bool,
    text_prim: &str,
    panel_radius: f32,
    chip_radius: f32,
) -> impl IntoView {
    let color = category.color.clone();
    let display = if selected { "block" } else { "none" };
    let panel_style = format!(
        "display:{display};border-color:{color};border-radius:{panel_radius}px;background-color:{color}05;",
    );
    let heading_style = format!("color:{color};");
    let chip_style = format!(
        "border-color:{color};border-radius:{chip_radius}px;color:{text_prim};",
    );

    view! {
        <div class="stack-panel" style=panel_style data-panel-for=category.id.clone()>
            <h3 class="stack-panel-title" style=heading_style>{category.name.clone()}</h3>
            <div class="stack-chips">
                {category
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <div class="stack-chip" style=chip_style.clone()>{tech.clone()}</div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    fn render(selection: CategorySelection) -> String {
        let id = "stack-01".to_string();
        let overrides = TechStackOverrides::default();
        let tokens = DesignTokens::default();
        view! {
            <TechStack id=id overrides=overrides tokens=tokens selection=selection />
        }
        .to_html()
    }

    #[test]
    fn fresh_mount_renders_every_panel_collapsed() {
        let html = render(CategorySelection::new());
        assert!(html.contains("data-panel-for=\"frontend\""));
        assert!(!html.contains("display:block"));
        assert!(!html.contains("stack-card active"));
    }

    #[test]
    fn selected_category_expands_exactly_one_panel() {
        let mut selection = CategorySelection::new();
        selection.toggle("backend");
        let html = render(selection);

        assert!(html.contains("stack-card active"));
        // One expanded panel, five collapsed.
        assert_eq!(html.matches("display:block").count(), 1);
        assert_eq!(html.matches("display:none").count(), 5);
        assert!(html.contains("PostgreSQL"));
    }
}
