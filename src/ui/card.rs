/// Framework card rendering: header, expandable section rows, and tag pills.

use crate::core::config;
use crate::core::types::*;
use crate::platform::renderer::Renderer;
use crate::search::engine::{FrameworkMatch, SectionMatch};
use crate::search::highlight::Highlighter;
use crate::search::index::{FrameworkRecord, SectionRecord};
use crate::ui::anim::lerp;
use crate::ui::theme::Theme;

// Vertical metrics inside a section row
const SECTION_TITLE_LINE: f64 = 20.0;
const SECTION_DESC_LINE: f64 = 20.0;
const SECTION_INSET: f64 = 16.0;
const SECTION_GAP: f64 = 10.0;
const CONTENT_TOP_PAD: f64 = 8.0;
const CONTENT_BOTTOM_PAD: f64 = 16.0;
const TAG_TEXT_PAD: f64 = 8.0;

pub struct CardRenderer;

impl CardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Height of the expandable body with the given visibility, before the
    /// expansion animation scales it.
    pub fn content_height(
        &self,
        fw: &FrameworkRecord,
        fw_match: &FrameworkMatch,
        card_w: f64,
    ) -> f64 {
        let mut h = CONTENT_TOP_PAD;
        let mut visible = 0;
        for (section, sec_match) in fw.sections.iter().zip(&fw_match.sections) {
            if !sec_match.visible {
                continue;
            }
            if visible > 0 {
                h += SECTION_GAP;
            }
            h += self.section_height(section, sec_match, card_w);
            visible += 1;
        }
        if visible == 0 {
            return 0.0;
        }
        h + CONTENT_BOTTOM_PAD
    }

    pub fn section_height(
        &self,
        section: &SectionRecord,
        sec_match: &SectionMatch,
        card_w: f64,
    ) -> f64 {
        let avail = card_w - SECTION_INSET * 2.0 - config::SECTION_PAD * 2.0;
        let labels: Vec<&str> = section
            .tags
            .iter()
            .zip(&sec_match.tags)
            .filter(|(_, m)| **m)
            .map(|(t, _)| t.text.as_str())
            .collect();

        let tags_h = tag_rows_height(&labels, avail);
        let mut h = config::SECTION_PAD * 2.0 + SECTION_TITLE_LINE + SECTION_DESC_LINE;
        if tags_h > 0.0 {
            h += tags_h + 6.0;
        }
        h
    }

    /// Draw one card. `rect.h` is the currently shown height, header plus
    /// whatever slice of the body the expansion animation exposes.
    #[allow(clippy::too_many_arguments)]
    pub fn render_card(
        &self,
        renderer: &dyn Renderer,
        theme: &Theme,
        fw: &FrameworkRecord,
        fw_match: &FrameworkMatch,
        hl: &Highlighter,
        rect: Rect,
        expand_t: f64,
        hover_t: f64,
        opacity: f64,
    ) {
        let r = config::CARD_CORNER_RADIUS;

        if hover_t > 0.01 {
            renderer.draw_shadow(
                rect.x,
                rect.y,
                rect.w,
                rect.h,
                r,
                Color {
                    r: 0.0,
                    g: 0.0,
                    b: 0.0,
                    a: 0.25 * hover_t * opacity,
                },
                10.0 * hover_t,
            );
        }

        renderer.fill_rounded_rect(
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            r,
            theme.surface.with_alpha(theme.surface.a * opacity),
        );

        let border = lerp_color(theme.border, theme.accent, hover_t);
        renderer.stroke_rounded_rect(
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            r,
            border.with_alpha(border.a * opacity),
            1.0 + hover_t,
        );

        self.render_header(renderer, theme, fw, fw_match, hl, rect, expand_t, opacity);

        let body_h = rect.h - config::CARD_HEADER_H;
        if body_h > 0.5 {
            renderer.push_clip(rect.x, rect.y + config::CARD_HEADER_H, rect.w, body_h);

            renderer.fill_rect(
                rect.x + SECTION_INSET,
                rect.y + config::CARD_HEADER_H,
                rect.w - SECTION_INSET * 2.0,
                1.0,
                theme.border.with_alpha(theme.border.a * 0.6 * opacity),
            );

            let mut y = rect.y + config::CARD_HEADER_H + CONTENT_TOP_PAD;
            for (section, sec_match) in fw.sections.iter().zip(&fw_match.sections) {
                if !sec_match.visible {
                    continue;
                }
                let sh = self.section_height(section, sec_match, rect.w);
                self.render_section(
                    renderer,
                    theme,
                    section,
                    sec_match,
                    hl,
                    Rect::new(rect.x + SECTION_INSET, y, rect.w - SECTION_INSET * 2.0, sh),
                    opacity,
                );
                y += sh + SECTION_GAP;
            }

            renderer.pop_clip();
        }
    }

    /// Hit test against the always-visible header strip.
    pub fn header_hit(&self, rect: Rect, point: Vec2) -> bool {
        Rect::new(rect.x, rect.y, rect.w, config::CARD_HEADER_H).contains(point)
    }

    // ===== Private helpers =====

    #[allow(clippy::too_many_arguments)]
    fn render_header(
        &self,
        renderer: &dyn Renderer,
        theme: &Theme,
        fw: &FrameworkRecord,
        fw_match: &FrameworkMatch,
        hl: &Highlighter,
        rect: Rect,
        expand_t: f64,
        opacity: f64,
    ) {
        let text_w = rect.w - 80.0;
        let name = truncate_str(&fw.name, max_chars(text_w, config::FONT_TITLE));
        draw_highlighted(
            renderer,
            theme,
            rect.x + 20.0,
            rect.y + 14.0,
            &name,
            config::FONT_TITLE,
            theme.text.with_alpha(theme.text.a * opacity),
            hl,
            fw_match.name_match,
            opacity,
        );

        let desc = truncate_str(&fw.description, max_chars(text_w, config::FONT_BODY));
        draw_highlighted(
            renderer,
            theme,
            rect.x + 20.0,
            rect.y + 44.0,
            &desc,
            config::FONT_BODY,
            theme.text_muted.with_alpha(theme.text_muted.a * opacity),
            hl,
            fw_match.name_match,
            opacity,
        );

        // Chevron flips as the card opens
        let cx = rect.x + rect.w - 36.0;
        let cy = rect.y + config::CARD_HEADER_H / 2.0;
        let s = lerp(4.0, -4.0, expand_t);
        let color = theme.text_muted.with_alpha(theme.text_muted.a * opacity);
        renderer.draw_line(cx - 7.0, cy - s, cx, cy + s, color, 2.0);
        renderer.draw_line(cx, cy + s, cx + 7.0, cy - s, color, 2.0);
    }

    fn render_section(
        &self,
        renderer: &dyn Renderer,
        theme: &Theme,
        section: &SectionRecord,
        sec_match: &SectionMatch,
        hl: &Highlighter,
        rect: Rect,
        opacity: f64,
    ) {
        renderer.fill_rounded_rect(
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            config::SECTION_CORNER_RADIUS,
            theme
                .surface_raised
                .with_alpha(theme.surface_raised.a * opacity),
        );

        // Sections still on screen during a search are hits; give them the
        // accent edge the resting state lacks
        if hl.is_active() {
            renderer.fill_rounded_rect(
                rect.x,
                rect.y,
                4.0,
                rect.h,
                2.0,
                theme.accent.with_alpha(theme.accent.a * opacity),
            );
        }

        let pad = config::SECTION_PAD;
        let avail = rect.w - pad * 2.0;

        let title = truncate_str(&section.title, max_chars(avail, config::FONT_BODY));
        draw_highlighted(
            renderer,
            theme,
            rect.x + pad,
            rect.y + pad,
            &title,
            config::FONT_BODY,
            theme.text.with_alpha(theme.text.a * opacity),
            hl,
            sec_match.visible,
            opacity,
        );

        let desc = truncate_str(&section.description, max_chars(avail, config::FONT_SMALL));
        draw_highlighted(
            renderer,
            theme,
            rect.x + pad,
            rect.y + pad + SECTION_TITLE_LINE,
            &desc,
            config::FONT_SMALL,
            theme.text_muted.with_alpha(theme.text_muted.a * opacity),
            hl,
            sec_match.visible,
            opacity,
        );

        let labels: Vec<&str> = section
            .tags
            .iter()
            .zip(&sec_match.tags)
            .filter(|(_, m)| **m)
            .map(|(t, _)| t.text.as_str())
            .collect();

        if labels.is_empty() {
            return;
        }

        // Any tag that survives the filter is a hit, so the whole pill
        // flips to the accent treatment while a query is applied
        let marked = hl.is_active();
        let boxes = tag_boxes(&labels, avail);
        let tags_y = rect.y + pad + SECTION_TITLE_LINE + SECTION_DESC_LINE + 6.0;

        for (label, tag_box) in labels.iter().zip(&boxes) {
            let (bg, fg) = if marked {
                (theme.accent, Color::from_hex(0xFFFFFF, 1.0))
            } else {
                (theme.tag_bg, theme.tag_text)
            };
            renderer.fill_rounded_rect(
                rect.x + pad + tag_box.x,
                tags_y + tag_box.y,
                tag_box.w,
                tag_box.h,
                config::TAG_CORNER_RADIUS,
                bg.with_alpha(bg.a * opacity),
            );
            draw_highlighted(
                renderer,
                theme,
                rect.x + pad + tag_box.x + TAG_TEXT_PAD,
                tags_y + tag_box.y + 6.0,
                label,
                config::FONT_SMALL,
                fg.with_alpha(fg.a * opacity),
                hl,
                marked,
                opacity,
            );
        }
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Monospace width estimate used for layout and truncation.
pub fn text_width(text: &str, size: f64) -> f64 {
    text.len() as f64 * size * config::CHAR_W_FACTOR
}

/// Flow tag pills left to right, wrapping rows that would overflow.
/// Positions are relative to the flow origin.
pub fn tag_boxes(labels: &[&str], avail_w: f64) -> Vec<Rect> {
    let mut out = Vec::new();
    let mut x = 0.0;
    let mut y = 0.0;
    for label in labels {
        let w = text_width(label, config::FONT_SMALL) + TAG_TEXT_PAD * 2.0;
        if x > 0.0 && x + w > avail_w {
            x = 0.0;
            y += config::TAG_H + config::TAG_GAP;
        }
        out.push(Rect::new(x, y, w.min(avail_w), config::TAG_H));
        x += w + config::TAG_GAP;
    }
    out
}

fn tag_rows_height(labels: &[&str], avail_w: f64) -> f64 {
    match tag_boxes(labels, avail_w).last() {
        Some(last) => last.y + config::TAG_H,
        None => 0.0,
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_highlighted(
    renderer: &dyn Renderer,
    theme: &Theme,
    x: f64,
    y: f64,
    text: &str,
    size: f64,
    color: Color,
    hl: &Highlighter,
    apply: bool,
    opacity: f64,
) {
    if !apply || !hl.is_active() {
        renderer.draw_text(x, y, text, size, color);
        return;
    }

    let mut cursor = x;
    for (run, marked) in hl.segments(text) {
        let w = text_width(run, size);
        if marked {
            renderer.fill_rect(
                cursor - 1.0,
                y - 2.0,
                w + 2.0,
                size + 6.0,
                theme.highlight.with_alpha(theme.highlight.a * 0.85 * opacity),
            );
        }
        renderer.draw_text(cursor, y, run, size, color);
        cursor += w;
    }
}

fn max_chars(avail_w: f64, size: f64) -> usize {
    (avail_w / (size * config::CHAR_W_FACTOR)) as usize
}

// max_chars budgets are in characters, not bytes
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    Color {
        r: lerp(a.r, b.r, t),
        g: lerp(a.g, b.g, t),
        b: lerp(a.b, b.b, t),
        a: lerp(a.a, b.a, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_boxes_wrap() {
        // Each label is 10 chars: 10 * 11 * 0.6 + 16 = 82 wide
        let labels = vec!["AAAAAAAAAA"; 3];
        let boxes = tag_boxes(&labels, 180.0);
        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[0].y, 0.0);
        assert_eq!(boxes[1].y, 0.0);
        assert_eq!(boxes[2].y, config::TAG_H + config::TAG_GAP);
        assert_eq!(boxes[2].x, 0.0);
    }

    #[test]
    fn test_tag_boxes_oversized_label_clamps() {
        let labels = vec!["AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"];
        let boxes = tag_boxes(&labels, 100.0);
        assert_eq!(boxes[0].w, 100.0);
    }

    #[test]
    fn test_tag_rows_height() {
        assert_eq!(tag_rows_height(&[], 200.0), 0.0);
        let one_row = tag_rows_height(&["AA", "BB"], 200.0);
        assert_eq!(one_row, config::TAG_H);
        let two_rows = tag_rows_height(&["AAAAAAAAAA"; 3], 180.0);
        assert_eq!(two_rows, config::TAG_H * 2.0 + config::TAG_GAP);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer string", 10), "a longe...");
        assert_eq!(truncate_str("abc", 2), "ab");
    }

    #[test]
    fn test_truncate_str_cuts_multibyte_text_on_char_boundary() {
        // The cut lands right after a two-byte character
        assert_eq!(
            truncate_str("Zugriffskontrolle für Admins", 23),
            "Zugriffskontrolle fü..."
        );
        // Fits in characters even though it overruns the budget in bytes
        assert_eq!(truncate_str("Verschlüsselung", 15), "Verschlüsselung");
        assert_eq!(truncate_str("Schlüssel", 3), "Sch");
    }

    #[test]
    fn test_text_width_tracks_length() {
        assert_eq!(text_width("", 12.0), 0.0);
        assert!((text_width("abcd", 12.0) - 4.0 * 7.2).abs() < 1e-9);
    }
}
