// HTML writer: a self-contained fragment with inline styles so it can be
// dropped into a CI report page or an email body.

use maud::{html, Markup, PreEscaped};
use super::{
    CardDetail, CardTone, FooterIndicator, StatusGlyph, StepCardView, SummaryView, FOOTER_HEADING,
    TIMESTAMP_LABEL,
};

const ANIMATION_CSS: &str = "@keyframes pv-pulse{50%{opacity:.35}}@keyframes pv-spin{to{transform:rotate(360deg)}}\
.pv-pulse{animation:pv-pulse 1.5s ease-in-out infinite}\
.pv-spin{display:inline-block;animation:pv-spin 1s linear infinite}";

/// (background, left border) colors for a card tone
fn tone_colors(tone: CardTone) -> (&'static str, &'static str) {
    match tone {
        CardTone::Affirmative => ("#f0fdf4", "#22c55e"),
        CardTone::Negative => ("#fef2f2", "#ef4444"),
        CardTone::Neutral => ("#f9fafb", "#6b7280"),
    }
}

/// StatusIcon as markup
pub fn glyph_markup(glyph: StatusGlyph, label: &str) -> Markup {
    html! {
        @match glyph {
            StatusGlyph::Check => {
                span class="pv-status pv-done" title=(label) style="color:#16a34a" { (glyph.symbol()) }
            }
            StatusGlyph::Cross => {
                span class="pv-status pv-failed" title=(label) style="color:#dc2626" { (glyph.symbol()) }
            }
            StatusGlyph::Placeholder => {
                span class="pv-status pv-pending pv-pulse" title=(label)
                    style="display:inline-block;width:.75em;height:.75em;border-radius:50%;background:#e5e7eb" {}
            }
        }
    }
}

/// StepCard as markup
pub fn card_markup(card: &StepCardView) -> Markup {
    let (background, border) = tone_colors(card.tone);
    let card_style = format!(
        "position:relative;background:{};border-left:4px solid {};border-radius:6px;padding:12px 16px",
        background, border
    );

    html! {
        div class="pv-card" data-stage=(card.stage.key()) style=(card_style) {
            div style="display:flex;align-items:center;gap:8px" {
                span style={ "color:" (border) } { (card.icon.symbol()) }
                strong { (card.title) }
            }
            div style="position:absolute;top:12px;right:16px" {
                (glyph_markup(card.badge, card.status.as_str()))
            }
            @match &card.detail {
                None => {}
                Some(CardDetail::Text(text)) => {
                    div style="margin-top:6px;font-size:.9em" { (text) }
                }
                Some(CardDetail::Environments(rows)) => {
                    div style="margin-top:6px;display:grid;grid-template-columns:repeat(3,1fr);gap:8px" {
                        @for row in rows {
                            div class="pv-env" style="display:flex;justify-content:space-between;padding:4px 8px;background:#fff;border-radius:4px" {
                                span { (row.name) }
                                (glyph_markup(row.glyph, row.status.as_str()))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footer_indicator(indicator: FooterIndicator) -> Markup {
    html! {
        @match indicator {
            FooterIndicator::Success => span style="color:#16a34a" { (indicator.symbol()) },
            FooterIndicator::Spinner => span class="pv-spin" style="color:#ca8a04" { (indicator.symbol()) },
        }
    }
}

/// Build the summary markup
pub fn summary_markup(view: &SummaryView) -> Markup {
    html! {
        style { (PreEscaped(ANIMATION_CSS)) }
        section class="pv-summary" style="font-family:sans-serif;max-width:640px" {
            header style="background:#1e3a8a;color:#fff;padding:16px;border-radius:6px 6px 0 0;display:flex;justify-content:space-between" {
                div {
                    h2 style="margin:0" { (view.header.title) }
                    div { "Proxy: " (view.header.proxy_name) " (v" (view.header.version) ")" }
                }
                div style="text-align:right" {
                    div style="font-size:.85em" { (TIMESTAMP_LABEL) }
                    div { (view.header.timestamp) }
                }
            }
            div style="padding:16px" {
                @for (idx, card) in view.cards.iter().enumerate() {
                    @if idx > 0 {
                        div class="pv-arrow" style="text-align:center;color:#9ca3af" { "↓" }
                    }
                    (card_markup(card))
                }
            }
            footer style="padding:12px 16px;border-top:1px solid #e5e7eb;display:flex;justify-content:space-between" {
                span { (FOOTER_HEADING) }
                span {
                    strong { (view.footer.label) }
                    " "
                    (footer_indicator(view.footer.indicator))
                }
            }
        }
    }
}

/// Format the summary as an HTML fragment
pub fn format_summary_html(view: &SummaryView) -> String {
    let mut output = summary_markup(view).into_string();
    output.push('\n');
    output
}
