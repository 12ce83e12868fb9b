/// Main dashboard view: navbar, hero, search box, and the framework card
/// grid, with scrolling, staggered reveals, and typed interaction events
/// for the background animation.

use crate::content::Catalog;
use crate::core::config;
use crate::core::types::*;
use crate::platform::renderer::Renderer;
use crate::search::engine::SearchEngine;
use crate::search::highlight::Highlighter;
use crate::search::index::SearchIndex;
use crate::ui::anim::{smooth_towards, Animation};
use crate::ui::card::{text_width, CardRenderer};
use crate::ui::navbar::{Navbar, SmoothScroll};
use crate::ui::theme::{Theme, ThemeKind};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct CardSlot {
    // Content-space top edge
    y: f64,
    // Currently drawn height: header plus the open slice of the body
    height: f64,
    // Body height when fully expanded
    body_h: f64,
    visible: bool,
}

pub struct DashboardView {
    engine: SearchEngine,
    highlighter: Highlighter,
    applied_query: String,
    theme: Theme,

    // Viewport
    viewport_w: f64,
    viewport_h: f64,

    // Scrolling
    scroll_offset: f64,
    content_h: f64,
    smooth_scroll: SmoothScroll,
    navbar: Navbar,
    nav_hide_t: f64,

    // Cards
    expanded: Vec<String>,
    expand_t: Vec<f64>,
    hover_t: Vec<f64>,
    hovered_card: Option<usize>,
    keyboard_focus: Option<usize>,
    reveal: Vec<Animation>,
    revealed: Vec<bool>,
    layout: Vec<CardSlot>,
    pending_scroll: Option<(usize, Instant)>,

    // Search box
    search_focused: bool,
    // Set by Ctrl+K; the next keystroke replaces the whole query
    select_all_pending: bool,
    query_text: String,

    // Entry fade
    load_anim: Animation,
    time_sec: f64,

    prefs_dirty: bool,
    card_renderer: CardRenderer,
}

impl DashboardView {
    pub fn new(catalog: &Catalog, theme: ThemeKind, viewport_w: f64, viewport_h: f64) -> Self {
        let engine = SearchEngine::new(SearchIndex::build(catalog));
        let n = engine.index().framework_count();

        let mut load_anim = Animation::new();
        load_anim.start_after(config::LOAD_FADE_DELAY_MS, config::LOAD_FADE_MS);

        let mut view = Self {
            engine,
            highlighter: Highlighter::new(""),
            applied_query: String::new(),
            theme: Theme::for_kind(theme),
            viewport_w,
            viewport_h,
            scroll_offset: 0.0,
            content_h: 0.0,
            smooth_scroll: SmoothScroll::new(),
            navbar: Navbar::new(),
            nav_hide_t: 0.0,
            expanded: Vec::new(),
            expand_t: vec![0.0; n],
            hover_t: vec![0.0; n],
            hovered_card: None,
            keyboard_focus: None,
            reveal: vec![Animation::new(); n],
            revealed: vec![false; n],
            layout: Vec::new(),
            pending_scroll: None,
            search_focused: false,
            select_all_pending: false,
            query_text: String::new(),
            load_anim,
            time_sec: 0.0,
            prefs_dirty: false,
            card_renderer: CardRenderer::new(),
        };
        view.recompute_layout();
        view
    }

    /// Reinstate a persisted expansion set. Cards snap open without the
    /// expand animation and nothing is marked dirty.
    pub fn restore_expanded(&mut self, ids: &[String]) {
        for id in ids {
            match self.framework_index(id) {
                Some(i) => {
                    if !self.expanded.iter().any(|e| e == id) {
                        self.expanded.push(id.clone());
                        self.expand_t[i] = 1.0;
                    }
                }
                None => log::warn!("Ignoring unknown framework id in saved state: {}", id),
            }
        }
        self.recompute_layout();
    }

    pub fn expanded_ids(&self) -> &[String] {
        &self.expanded
    }

    pub fn theme_kind(&self) -> ThemeKind {
        self.theme.kind
    }

    /// Canvas clear color for the current theme.
    pub fn background(&self) -> Color {
        self.theme.background
    }

    pub fn take_prefs_dirty(&mut self) -> bool {
        std::mem::take(&mut self.prefs_dirty)
    }

    pub fn resize(&mut self, viewport_w: f64, viewport_h: f64) {
        self.viewport_w = viewport_w;
        self.viewport_h = viewport_h;
        self.recompute_layout();
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    // ===== Input =====

    pub fn handle_mouse(&mut self, e: &MouseEvent, now: Instant) -> Option<UiEvent> {
        let p = Vec2::new(e.x, e.y);

        if e.scroll_y.abs() > 0.01 {
            self.smooth_scroll.cancel();
            self.scroll_offset = (self.scroll_offset
                - e.scroll_y * config::SCROLL_WHEEL_STEP)
                .clamp(0.0, self.max_scroll());
            self.navbar.scrolled(self.scroll_offset);
            return None;
        }

        // Plain motion: hover tracking, burst on entry
        if !e.pressed && !e.released {
            let prev = self.hovered_card;
            self.hovered_card = self.card_at(p);
            if self.hovered_card != prev {
                if let Some(i) = self.hovered_card {
                    return Some(UiEvent::CardHover(self.card_screen_rect(i).center()));
                }
            }
            return None;
        }

        if e.button == 1 && e.pressed {
            self.select_all_pending = false;

            // Navbar floats above everything else
            if !self.navbar.is_hidden() {
                let button = self.theme_button_rect();
                if button.contains(p) {
                    self.toggle_theme();
                    return Some(UiEvent::ButtonPress(button.center()));
                }
                if self.nav_link_rect().contains(p) {
                    self.smooth_scroll
                        .scroll_to_anchor(self.scroll_offset, self.grid_top());
                    return None;
                }
                // The bar swallows clicks on its empty stretch
                if p.y <= self.nav_y() + config::NAV_HEIGHT {
                    return None;
                }
            }

            self.search_focused = self.search_box_screen_rect().contains(p);
            if !self.query_text.is_empty() && self.clear_button_rect().contains(p) {
                self.clear_search();
                return None;
            }

            // The ripple is tied to the whole card, the accordion toggle
            // to its header strip only
            if let Some(i) = self.card_at(p) {
                let rect = self.card_screen_rect(i);
                if self.card_renderer.header_hit(rect, p) {
                    self.toggle_framework(i, now, true);
                }
                return Some(UiEvent::CardClick(rect.center()));
            }
        }
        None
    }

    pub fn handle_key(&mut self, e: &KeyEvent, now: Instant) -> Option<UiEvent> {
        if !e.pressed {
            return None;
        }

        if e.ctrl {
            // Ctrl+K: jump to search with the query selected (k = 45)
            if e.keycode == 45 {
                self.search_focused = true;
                self.select_all_pending = !self.query_text.is_empty();
            }
            // Ctrl+/: toggle theme (slash = 61)
            if e.keycode == 61 {
                self.toggle_theme();
            }
            return None;
        }

        // ESC clears the search, but only while the field has focus (9)
        if e.keycode == 9 {
            if self.search_focused {
                self.clear_search();
            }
            return None;
        }

        // Tab / Shift+Tab: move keyboard focus through visible cards (23)
        if e.keycode == 23 {
            self.search_focused = false;
            self.select_all_pending = false;
            if e.shift {
                self.focus_prev_card();
            } else {
                self.focus_next_card();
            }
            return None;
        }

        // Return: submit the search, or toggle the focused card (36)
        if e.keycode == 36 {
            if self.search_focused {
                return Some(UiEvent::FormSubmit);
            }
            if let Some(i) = self.keyboard_focus {
                if self.layout.get(i).map(|s| s.visible).unwrap_or(false) {
                    self.toggle_framework(i, now, true);
                }
            }
            return None;
        }

        // BackSpace: edit the query (22)
        if e.keycode == 22 {
            if self.search_focused {
                let selecting = std::mem::take(&mut self.select_all_pending);
                if selecting {
                    self.query_text.clear();
                    self.engine.set_query(&self.query_text, now);
                } else if self.query_text.pop().is_some() {
                    self.engine.set_query(&self.query_text, now);
                }
            }
            return None;
        }

        if self.search_focused {
            if let Some(c) = e.ch {
                if std::mem::take(&mut self.select_all_pending) {
                    self.query_text.clear();
                }
                self.query_text.push(c);
                self.engine.set_query(&self.query_text, now);
            }
        }
        None
    }

    // ===== Per-frame state =====

    pub fn update(&mut self, dt_ms: f64, now: Instant) {
        self.time_sec += dt_ms / 1000.0;
        self.load_anim.update(dt_ms);

        // Debounced search application auto-expands matching cards
        if let Some(ids) = self.engine.tick(now) {
            let mut first_new = None;
            for id in &ids {
                if self.expanded.iter().any(|e| e == id) {
                    continue;
                }
                if let Some(i) = self.framework_index(id) {
                    self.expanded.push(id.clone());
                    self.prefs_dirty = true;
                    if first_new.is_none() {
                        first_new = Some(i);
                    }
                }
            }
            if let Some(i) = first_new {
                let delay = Duration::from_millis(config::EXPAND_SCROLL_DELAY_MS as u64);
                self.pending_scroll = Some((i, now + delay));
            }
        }

        if self.engine.query() != self.applied_query {
            self.applied_query = self.engine.query().to_string();
            self.highlighter = Highlighter::new(&self.applied_query);
        }

        self.navbar.step();
        let hide_target = if self.navbar.is_hidden() { 1.0 } else { 0.0 };
        self.nav_hide_t = smooth_towards(self.nav_hide_t, hide_target, dt_ms, 12.0);

        if let Some(y) = self.smooth_scroll.update(dt_ms) {
            self.scroll_offset = y;
            self.navbar.scrolled(y);
        }

        if let Some((idx, at)) = self.pending_scroll {
            if now >= at {
                self.pending_scroll = None;
                self.scroll_card_into_view(idx);
            }
        }

        for i in 0..self.expand_t.len() {
            let target = if self.is_expanded(i) { 1.0 } else { 0.0 };
            self.expand_t[i] = smooth_towards(self.expand_t[i], target, dt_ms, 14.0);

            let hover_target = if self.hovered_card == Some(i) { 1.0 } else { 0.0 };
            self.hover_t[i] = smooth_towards(self.hover_t[i], hover_target, dt_ms, 10.0);
        }

        // Reveal cards entering the viewport, staggered within each batch
        let mut batch = 0;
        for i in 0..self.layout.len() {
            if !self.layout[i].visible || self.revealed[i] {
                continue;
            }
            let top_screen = self.layout[i].y - self.scroll_offset;
            let trigger = top_screen + self.layout[i].height * config::REVEAL_THRESHOLD
                < self.viewport_h - config::REVEAL_MARGIN;
            if trigger {
                self.revealed[i] = true;
                self.reveal[i]
                    .start_after(batch as f64 * config::REVEAL_STAGGER_MS, config::REVEAL_ANIM_MS);
                batch += 1;
            }
        }
        for anim in &mut self.reveal {
            anim.update(dt_ms);
        }

        self.recompute_layout();
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    // ===== Rendering =====

    pub fn render(&self, renderer: &dyn Renderer) {
        let content_x = self.content_x();
        let content_w = self.content_width();

        self.render_hero(renderer, content_x);
        self.render_search(renderer, content_x);
        // A name-only match can keep a sectionless card on screen while
        // the visible section count is zero
        self.render_cards(renderer, content_x, content_w);
        if self.engine.is_active() && self.engine.report().visible_sections == 0 {
            self.render_no_results(renderer, content_x, content_w);
        }
        self.render_navbar(renderer);

        // Entry fade sits on top until it finishes
        if !self.load_anim.is_complete() {
            renderer.fill_rect(
                0.0,
                0.0,
                self.viewport_w,
                self.viewport_h,
                self.theme.background.with_alpha(1.0 - self.load_anim.progress()),
            );
        }
    }

    // ===== Private helpers =====

    fn render_hero(&self, renderer: &dyn Renderer, content_x: f64) {
        let y = config::NAV_HEIGHT + 36.0 - self.scroll_offset;
        if y < -120.0 {
            return;
        }
        renderer.draw_text(
            content_x,
            y,
            "CyberSecure Framework Dashboard",
            28.0,
            self.theme.text,
        );
        renderer.draw_text(
            content_x,
            y + 44.0,
            "Browse, search, and explore security compliance frameworks and their controls.",
            config::FONT_BODY,
            self.theme.text_muted,
        );
    }

    fn render_search(&self, renderer: &dyn Renderer, content_x: f64) {
        let rect = self.search_box_screen_rect();
        if rect.y + config::SEARCH_AREA_H < 0.0 {
            return;
        }

        renderer.fill_rounded_rect(
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            8.0,
            self.theme.surface,
        );
        let border = if self.search_focused {
            self.theme.accent
        } else {
            self.theme.border
        };
        renderer.stroke_rounded_rect(rect.x, rect.y, rect.w, rect.h, 8.0, border, 1.5);

        let text_y = rect.y + (rect.h - config::FONT_BODY) / 2.0 - 2.0;
        if self.query_text.is_empty() {
            renderer.draw_text(
                rect.x + 16.0,
                text_y,
                "Search frameworks, sections, controls...",
                config::FONT_BODY,
                self.theme.text_muted,
            );
        } else {
            if self.select_all_pending {
                renderer.fill_rect(
                    rect.x + 14.0,
                    rect.y + 8.0,
                    text_width(&self.query_text, config::FONT_BODY) + 4.0,
                    rect.h - 16.0,
                    self.theme.accent_soft,
                );
            }
            renderer.draw_text(
                rect.x + 16.0,
                text_y,
                &self.query_text,
                config::FONT_BODY,
                self.theme.text,
            );

            // Clear control, shown whenever there is something to clear
            let clear = self.clear_button_rect();
            let c = self.theme.text_muted;
            renderer.draw_line(clear.x + 5.0, clear.y + 5.0, clear.x + clear.w - 5.0, clear.y + clear.h - 5.0, c, 1.5);
            renderer.draw_line(clear.x + clear.w - 5.0, clear.y + 5.0, clear.x + 5.0, clear.y + clear.h - 5.0, c, 1.5);
        }

        if self.search_focused && !self.select_all_pending && self.time_sec % 1.0 < 0.5 {
            let caret_x = rect.x + 16.0 + text_width(&self.query_text, config::FONT_BODY);
            renderer.fill_rect(caret_x, rect.y + 10.0, 1.5, rect.h - 20.0, self.theme.text);
        }

        renderer.draw_text(
            content_x,
            rect.y + rect.h + 14.0,
            &self.engine.stats_line(),
            config::FONT_SMALL,
            self.theme.text_muted,
        );
    }

    fn render_cards(&self, renderer: &dyn Renderer, content_x: f64, content_w: f64) {
        let report = self.engine.report();
        let frameworks = &self.engine.index().frameworks;

        for i in 0..self.layout.len() {
            let slot = self.layout[i];
            if !slot.visible {
                continue;
            }
            let screen_y = slot.y - self.scroll_offset;
            if screen_y > self.viewport_h || screen_y + slot.height < 0.0 {
                continue;
            }

            let (opacity, dy) = if self.revealed[i] {
                let p = self.reveal[i].progress();
                (p, config::REVEAL_SHIFT * (1.0 - p))
            } else {
                (0.0, config::REVEAL_SHIFT)
            };
            if opacity <= 0.001 {
                continue;
            }

            let rect = Rect::new(content_x, screen_y + dy, content_w, slot.height);
            let open_frac = if slot.body_h > 0.0 {
                ((slot.height - config::CARD_HEADER_H) / slot.body_h).clamp(0.0, 1.0)
            } else {
                0.0
            };

            self.card_renderer.render_card(
                renderer,
                &self.theme,
                &frameworks[i],
                &report.frameworks[i],
                &self.highlighter,
                rect,
                open_frac,
                self.hover_t[i],
                opacity,
            );

            if self.keyboard_focus == Some(i) {
                renderer.stroke_rounded_rect(
                    rect.x - 3.0,
                    rect.y - 3.0,
                    rect.w + 6.0,
                    rect.h + 6.0,
                    config::CARD_CORNER_RADIUS + 3.0,
                    self.theme.accent.with_alpha(0.8 * opacity),
                    2.0,
                );
            }
        }
    }

    fn render_no_results(&self, renderer: &dyn Renderer, content_x: f64, content_w: f64) {
        // Sits in flow below whatever cards survived the filter
        let h = config::NO_RESULTS_H;
        let y = self.content_h - config::VIEW_BOTTOM_PAD - h - self.scroll_offset;
        if y > self.viewport_h || y + h < 0.0 {
            return;
        }

        renderer.fill_rounded_rect(content_x, y, content_w, h, 10.0, self.theme.surface);
        renderer.stroke_rounded_rect(content_x, y, content_w, h, 10.0, self.theme.border, 1.0);

        let title = "No results found";
        renderer.draw_text(
            content_x + (content_w - text_width(title, config::FONT_TITLE)) / 2.0,
            y + 34.0,
            title,
            config::FONT_TITLE,
            self.theme.text,
        );
        let hint = "Try adjusting your search terms, or clear the search to browse all frameworks.";
        renderer.draw_text(
            content_x + (content_w - text_width(hint, config::FONT_BODY)) / 2.0,
            y + 70.0,
            hint,
            config::FONT_BODY,
            self.theme.text_muted,
        );
    }

    fn render_navbar(&self, renderer: &dyn Renderer) {
        let y = self.nav_y();
        if y + config::NAV_HEIGHT < 0.5 {
            return;
        }

        let bg = if self.navbar.is_solid() {
            self.theme.navbar_solid
        } else {
            self.theme.navbar
        };
        renderer.fill_rect(0.0, y, self.viewport_w, config::NAV_HEIGHT, bg);
        if self.navbar.is_solid() {
            renderer.fill_rect(
                0.0,
                y + config::NAV_HEIGHT - 1.0,
                self.viewport_w,
                1.0,
                self.theme.border,
            );
        }

        renderer.draw_text(24.0, y + 22.0, "CyberSecure", 18.0, self.theme.accent);

        let link = self.nav_link_rect();
        renderer.draw_text(
            link.x + 8.0,
            link.y + 9.0,
            "Frameworks",
            config::FONT_SMALL,
            self.theme.text,
        );

        let button = self.theme_button_rect();
        renderer.stroke_rounded_rect(
            button.x,
            button.y,
            button.w,
            button.h,
            8.0,
            self.theme.border,
            1.0,
        );
        let label = match self.theme.kind {
            ThemeKind::Light => "Dark mode",
            ThemeKind::Dark => "Light mode",
        };
        renderer.draw_text(
            button.x + 12.0,
            button.y + 10.0,
            label,
            config::FONT_SMALL,
            self.theme.text,
        );
    }

    fn content_width(&self) -> f64 {
        config::CONTENT_MAX_W.min(self.viewport_w - 48.0)
    }

    fn content_x(&self) -> f64 {
        (self.viewport_w - self.content_width()) / 2.0
    }

    fn grid_top(&self) -> f64 {
        config::HERO_H + config::SEARCH_AREA_H
    }

    fn max_scroll(&self) -> f64 {
        (self.content_h - self.viewport_h).max(0.0)
    }

    fn nav_y(&self) -> f64 {
        -config::NAV_HEIGHT * self.nav_hide_t
    }

    fn theme_button_rect(&self) -> Rect {
        Rect::new(self.viewport_w - 124.0, self.nav_y() + 16.0, 100.0, 32.0)
    }

    fn nav_link_rect(&self) -> Rect {
        Rect::new(self.viewport_w - 232.0, self.nav_y() + 16.0, 92.0, 32.0)
    }

    fn search_box_screen_rect(&self) -> Rect {
        Rect::new(
            self.content_x(),
            config::HERO_H + 20.0 - self.scroll_offset,
            self.content_width(),
            config::SEARCH_BOX_H,
        )
    }

    fn clear_button_rect(&self) -> Rect {
        let search = self.search_box_screen_rect();
        Rect::new(
            search.x + search.w - 34.0,
            search.y + (search.h - 20.0) / 2.0,
            20.0,
            20.0,
        )
    }

    fn card_screen_rect(&self, idx: usize) -> Rect {
        let slot = &self.layout[idx];
        Rect::new(
            self.content_x(),
            slot.y - self.scroll_offset,
            self.content_width(),
            slot.height,
        )
    }

    fn card_at(&self, p: Vec2) -> Option<usize> {
        (0..self.layout.len())
            .filter(|&i| self.layout[i].visible)
            .find(|&i| self.card_screen_rect(i).contains(p))
    }

    fn framework_index(&self, id: &str) -> Option<usize> {
        self.engine
            .index()
            .frameworks
            .iter()
            .position(|f| f.id == id)
    }

    fn is_expanded(&self, idx: usize) -> bool {
        let id = &self.engine.index().frameworks[idx].id;
        self.expanded.iter().any(|e| e == id)
    }

    fn toggle_framework(&mut self, idx: usize, now: Instant, schedule_scroll: bool) {
        let id = self.engine.index().frameworks[idx].id.clone();
        if let Some(pos) = self.expanded.iter().position(|e| *e == id) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(id);
            if schedule_scroll {
                let delay = Duration::from_millis(config::EXPAND_SCROLL_DELAY_MS as u64);
                self.pending_scroll = Some((idx, now + delay));
            }
        }
        self.prefs_dirty = true;
    }

    fn toggle_theme(&mut self) {
        self.theme = Theme::for_kind(self.theme.kind.toggled());
        self.prefs_dirty = true;
    }

    /// Reset the query and the filter, returning focus to the search field.
    fn clear_search(&mut self) {
        self.query_text.clear();
        self.select_all_pending = false;
        self.engine.clear();
        self.search_focused = true;
        self.recompute_layout();
    }

    fn focus_next_card(&mut self) {
        let visible: Vec<usize> = (0..self.layout.len())
            .filter(|&i| self.layout[i].visible)
            .collect();
        if visible.is_empty() {
            self.keyboard_focus = None;
            return;
        }
        self.keyboard_focus = match self.keyboard_focus {
            Some(current) => visible
                .iter()
                .find(|&&i| i > current)
                .or_else(|| visible.first())
                .copied(),
            None => visible.first().copied(),
        };
    }

    fn focus_prev_card(&mut self) {
        let visible: Vec<usize> = (0..self.layout.len())
            .filter(|&i| self.layout[i].visible)
            .collect();
        if visible.is_empty() {
            self.keyboard_focus = None;
            return;
        }
        self.keyboard_focus = match self.keyboard_focus {
            Some(current) => visible
                .iter()
                .rev()
                .find(|&&i| i < current)
                .or_else(|| visible.last())
                .copied(),
            None => visible.last().copied(),
        };
    }

    /// Minimal scroll that brings the card fully on screen, preferring the
    /// top edge for cards taller than the viewport.
    fn scroll_card_into_view(&mut self, idx: usize) {
        let (top, bottom) = match self.layout.get(idx) {
            Some(slot) if slot.visible => {
                (slot.y, slot.y + config::CARD_HEADER_H + slot.body_h)
            }
            _ => return,
        };

        let view_top = self.scroll_offset + config::NAV_HEIGHT;
        let view_bottom = self.scroll_offset + self.viewport_h;
        let top_aligned = top - config::NAV_HEIGHT - config::CARD_GAP;

        let target = if top < view_top {
            top_aligned
        } else if bottom > view_bottom {
            (bottom + config::CARD_GAP - self.viewport_h).min(top_aligned)
        } else {
            return;
        };

        // Already easing toward this destination
        if self.smooth_scroll.is_active() && (self.smooth_scroll.target() - target).abs() < 0.5 {
            return;
        }
        self.smooth_scroll.scroll_to(self.scroll_offset, target);
    }

    fn recompute_layout(&mut self) {
        let content_w = self.content_width();
        let report = self.engine.report();
        let no_hits = report.active && report.visible_sections == 0;
        let frameworks = &self.engine.index().frameworks;

        let mut slots = Vec::with_capacity(frameworks.len());
        let mut y = self.grid_top();
        for (i, (fw, m)) in frameworks.iter().zip(&report.frameworks).enumerate() {
            if !m.visible {
                slots.push(CardSlot {
                    y,
                    height: 0.0,
                    body_h: 0.0,
                    visible: false,
                });
                continue;
            }
            let body_h = self.card_renderer.content_height(fw, m, content_w);
            let height = config::CARD_HEADER_H + body_h * self.expand_t[i];
            slots.push(CardSlot {
                y,
                height,
                body_h,
                visible: true,
            });
            y += height + config::CARD_GAP;
        }

        self.layout = slots;
        // The no-results panel takes a slot at the end of the flow
        let panel_h = if no_hits { config::NO_RESULTS_H } else { 0.0 };
        self.content_h = y + panel_h + config::VIEW_BOTTOM_PAD;
    }
}
