// Terminal writer for the deployment summary

use super::{CardDetail, CardTone, FooterIndicator, StatusGlyph, StepCardView, SummaryView, FOOTER_HEADING, TIMESTAMP_LABEL};

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

const BORDER: &str = "┃";
const ARROW: &str = "↓";

/// Narrowest layout that still fits a title and its badge
pub const MIN_WIDTH: usize = 40;
/// Widest layout accepted from any source
pub const MAX_WIDTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Emit ANSI colors
    pub color: bool,
    /// Total line width in columns
    pub width: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions { color: false, width: 72 }
    }
}

fn tone_fg(tone: CardTone) -> &'static str {
    match tone {
        CardTone::Affirmative => ANSI_FG_GREEN,
        CardTone::Negative => ANSI_FG_RED,
        CardTone::Neutral => ANSI_FG_BRIGHT_BLACK,
    }
}

fn glyph_fg(glyph: StatusGlyph) -> &'static str {
    match glyph {
        StatusGlyph::Check => ANSI_FG_GREEN,
        StatusGlyph::Cross => ANSI_FG_RED,
        StatusGlyph::Placeholder => ANSI_FG_BRIGHT_BLACK,
    }
}

/// Wrap text in an ANSI code when color is enabled
fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", code, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Replace control characters in caller-supplied text so it cannot carry
/// escape sequences or line breaks into the layout
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

/// Visible width of plain (uncolored) text
fn visible_len(text: &str) -> usize {
    text.chars().count()
}

/// Lay out `left` and `right` so that `right` ends at column `width`.
/// Both parts are measured uncolored and painted afterwards.
fn justify(left_plain: &str, left: String, right_plain: &str, right: String, width: usize) -> String {
    let used = visible_len(left_plain) + visible_len(right_plain);
    let pad = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(pad), right)
}

fn format_card(card: &StepCardView, opts: &TextOptions, out: &mut String) {
    let border = paint(BORDER, tone_fg(card.tone), opts.color);
    let heading_plain = format!("{} {} {}", BORDER, card.icon.symbol(), card.title);
    let heading = format!("{} {} {}", border, card.icon.symbol(), paint(&card.title, ANSI_BOLD, opts.color));
    let badge_plain = card.badge.symbol();
    let badge = paint(badge_plain, glyph_fg(card.badge), opts.color);
    out.push_str(&justify(&heading_plain, heading, badge_plain, badge, opts.width));
    out.push('\n');

    match &card.detail {
        None => {}
        Some(CardDetail::Text(text)) => {
            out.push_str(&format!("{}   {}\n", border, sanitize(text)));
        }
        Some(CardDetail::Environments(rows)) => {
            if rows.is_empty() {
                out.push_str(&format!("{}   {}\n", border, paint("(no environments)", ANSI_FG_BRIGHT_BLACK, opts.color)));
            }
            for row in rows {
                let name = sanitize(&row.name);
                let left_plain = format!("{}   {}", BORDER, name);
                let left = format!("{}   {}", border, name);
                let glyph_plain = row.glyph.symbol();
                let glyph = paint(glyph_plain, glyph_fg(row.glyph), opts.color);
                out.push_str(&justify(&left_plain, left, glyph_plain, glyph, opts.width));
                out.push('\n');
            }
        }
    }
}

/// Format the summary for a terminal
pub fn format_summary_text(view: &SummaryView, opts: &TextOptions) -> String {
    let width = opts.width.clamp(MIN_WIDTH, MAX_WIDTH);
    let opts = TextOptions { width, ..*opts };
    let mut output = String::new();

    // Header band
    let rule = "═".repeat(width);
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(" {}\n", paint(&sanitize(&view.header.title), ANSI_BOLD, opts.color)));
    output.push_str(&format!(
        " Proxy: {} (v{})\n",
        sanitize(&view.header.proxy_name),
        sanitize(&view.header.version)
    ));
    output.push_str(&format!(" {}: {}\n", TIMESTAMP_LABEL, sanitize(&view.header.timestamp)));
    output.push_str(&rule);
    output.push_str("\n\n");

    // Stage cards separated by arrows
    let arrow_line = format!("{}{}\n", " ".repeat(width / 2), ARROW);
    for (idx, card) in view.cards.iter().enumerate() {
        if idx > 0 {
            output.push_str(&arrow_line);
        }
        format_card(card, &opts, &mut output);
    }
    output.push('\n');

    // Footer
    output.push_str(&"─".repeat(width));
    output.push('\n');
    let indicator_fg = match view.footer.indicator {
        FooterIndicator::Success => ANSI_FG_GREEN,
        FooterIndicator::Spinner => ANSI_FG_YELLOW,
    };
    output.push_str(&format!(
        " {}: {} {}\n",
        FOOTER_HEADING,
        paint(view.footer.indicator.symbol(), indicator_fg, opts.color),
        paint(&view.footer.label, ANSI_BOLD, opts.color)
    ));

    output
}
