//! # User Interface Elements
//!
//! Modal panels drawn over the world: title screen, transition fade,
//! pocket, map, wardrobe, shop, notices and the dialogue box.

use crate::config::GRID_SIZE;
use crate::game::{DialoguePanel, GameState, ItemType, Notice, Session};
use crate::generation::shop_catalog;
use macroquad::prelude::*;
use std::ops::Range;

/// Rows shown at once in a scrolling list.
const LIST_ROWS: usize = 12;
const PANEL_BG: Color = Color::new(0.99, 0.97, 0.91, 0.97);
const INK: Color = Color::new(0.27, 0.2, 0.12, 1.0);

/// Rows of a `len`-long list to draw so that `cursor` stays visible.
pub fn visible_window(cursor: usize, len: usize, rows: usize) -> Range<usize> {
    if len <= rows {
        return 0..len;
    }
    let start = cursor.saturating_sub(rows / 2).min(len - rows);
    start..start + rows
}

/// Accent colour for a dialogue emotion.
pub fn emotion_color(emotion: &str) -> Color {
    match emotion {
        "happy" => Color::from_rgba(250, 204, 21, 255),
        "surprised" => Color::from_rgba(249, 115, 22, 255),
        "sleepy" => Color::from_rgba(129, 140, 248, 255),
        "grumpy" => Color::from_rgba(220, 38, 38, 255),
        _ => GRAY,
    }
}

/// Panel renderer.
#[derive(Debug, Default)]
pub struct UI;

impl UI {
    pub fn new() -> Self {
        Self
    }

    /// Draws every open overlay in stacking order.
    pub fn render_overlays(&self, session: &Session, width: f32, height: f32) {
        let overlays = &session.overlays;

        if let Some(panel) = &overlays.dialogue {
            self.render_dialogue(panel, width, height);
        }
        if overlays.inventory {
            self.render_inventory(&session.state, width, height);
        }
        if overlays.map {
            self.render_map(&session.state, width, height);
        }
        if overlays.wardrobe {
            self.render_wardrobe(session, width, height);
        }
        if overlays.shop {
            self.render_shop(session, width, height);
        }
        if let Some(notice) = &overlays.notice {
            self.render_notice(notice, width, height);
        }
        if session.is_transitioning() {
            self.render_transition(session, width, height);
        }
        if overlays.menu_open {
            self.render_title(session.greeting.as_deref(), width, height);
        }
    }

    fn panel(&self, title: &str, width: f32, height: f32) -> Rect {
        let w = (width * 0.6).min(640.0);
        let h = (height * 0.7).min(520.0);
        let rect = Rect::new((width - w) / 2.0, (height - h) / 2.0, w, h);
        draw_rectangle(0.0, 0.0, width, height, Color::new(0.0, 0.0, 0.0, 0.35));
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_BG);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 4.0, INK);
        draw_text(title, rect.x + 20.0, rect.y + 36.0, 28.0, INK);
        rect
    }

    fn render_title(&self, greeting: Option<&str>, width: f32, height: f32) {
        draw_rectangle(0.0, 0.0, width, height, Color::from_rgba(125, 211, 252, 255));
        let title = "Island Horizons";
        let size = measure_text(title, None, 64, 1.0);
        draw_text(title, (width - size.width) / 2.0, height * 0.4, 64.0, WHITE);

        let line = greeting.unwrap_or("...");
        let size = measure_text(line, None, 22, 1.0);
        draw_text(line, (width - size.width) / 2.0, height * 0.4 + 48.0, 22.0, INK);

        let prompt = "Press Enter or click to start";
        let size = measure_text(prompt, None, 20, 1.0);
        draw_text(prompt, (width - size.width) / 2.0, height * 0.65, 20.0, WHITE);
    }

    fn render_transition(&self, session: &Session, width: f32, height: f32) {
        let alpha = session.transition_progress();
        draw_rectangle(0.0, 0.0, width, height, Color::new(0.0, 0.0, 0.0, alpha));
        if let Some(destination) = session.transition_destination() {
            let text = format!("Heading to {}...", destination.display_name());
            let size = measure_text(&text, None, 28, 1.0);
            draw_text(&text, (width - size.width) / 2.0, height / 2.0, 28.0, Color::new(1.0, 1.0, 1.0, alpha));
        }
    }

    fn render_inventory(&self, state: &GameState, width: f32, height: f32) {
        let rect = self.panel("Pocket", width, height);
        let mut y = rect.y + 76.0;
        for item in &state.inventory {
            draw_text(&format!("{}  {}  x{}", item.icon, item.name, item.count), rect.x + 24.0, y, 22.0, INK);
            y += 30.0;
        }
        draw_text(
            &format!("Bells: {}", state.bells),
            rect.x + 24.0,
            rect.y + rect.h - 24.0,
            22.0,
            INK,
        );
    }

    fn render_map(&self, state: &GameState, width: f32, height: f32) {
        let rect = self.panel("Island Map", width, height);
        let side = (rect.w.min(rect.h) - 90.0).max(60.0);
        let origin = vec2(rect.x + (rect.w - side) / 2.0, rect.y + 60.0);
        let scale = side / GRID_SIZE;

        draw_rectangle(origin.x, origin.y, side, side, Color::from_rgba(56, 189, 248, 255));
        draw_rectangle(
            origin.x + scale * 1.5,
            origin.y + scale * 1.5,
            side - scale * 3.0,
            side - scale * 3.0,
            Color::from_rgba(134, 239, 172, 255),
        );

        for item in &state.island_items {
            let color = match item.item_type {
                ItemType::House => RED,
                ItemType::Shop | ItemType::GeneralStore | ItemType::TownHall | ItemType::Museum => DARKBLUE,
                ItemType::Tree => DARKGREEN,
                _ => GRAY,
            };
            draw_circle(origin.x + item.position.x * scale, origin.y + item.position.y * scale, 4.0, color);
        }
        for villager in &state.villagers {
            draw_circle(
                origin.x + villager.position.x * scale,
                origin.y + villager.position.y * scale,
                3.0,
                ORANGE,
            );
        }
        if state.location.is_main() {
            draw_circle(
                origin.x + state.player_pos.x * scale,
                origin.y + state.player_pos.y * scale,
                5.0,
                YELLOW,
            );
        }
    }

    fn render_list(&self, rect: Rect, rows: &[String], cursor: usize) {
        let window = visible_window(cursor, rows.len(), LIST_ROWS);
        let mut y = rect.y + 76.0;
        for index in window {
            let selected = index == cursor;
            if selected {
                draw_rectangle(rect.x + 12.0, y - 20.0, rect.w - 24.0, 28.0, Color::new(0.98, 0.8, 0.3, 0.6));
            }
            draw_text(&rows[index], rect.x + 24.0, y, 22.0, INK);
            y += 30.0;
        }
    }

    fn render_wardrobe(&self, session: &Session, width: f32, height: f32) {
        let rect = self.panel("Wardrobe", width, height);
        let wardrobe = &session.state.wardrobe;
        let rows: Vec<String> = session
            .wardrobe_entries()
            .into_iter()
            .map(|item| {
                let worn = wardrobe.outfit == item || wardrobe.accessory.as_deref() == Some(item.as_str());
                if worn {
                    format!("{}  (wearing)", item)
                } else {
                    item
                }
            })
            .collect();
        self.render_list(rect, &rows, session.overlays.cursor);
        draw_text("Enter: wear / remove   Esc: close", rect.x + 24.0, rect.y + rect.h - 20.0, 18.0, INK);
    }

    fn render_shop(&self, session: &Session, width: f32, height: f32) {
        let rect = self.panel("Able Sisters", width, height);
        let wardrobe = &session.state.wardrobe;
        let rows: Vec<String> = shop_catalog()
            .into_iter()
            .map(|entry| {
                if wardrobe.owns(entry.item) {
                    format!("{}  owned", entry.item)
                } else {
                    format!("{}  {} bells", entry.item, entry.price)
                }
            })
            .collect();
        self.render_list(rect, &rows, session.overlays.cursor);
        draw_text(
            &format!("Bells: {}   Enter: buy   Esc: close", session.state.bells),
            rect.x + 24.0,
            rect.y + rect.h - 20.0,
            18.0,
            INK,
        );
    }

    fn render_notice(&self, notice: &Notice, width: f32, height: f32) {
        let w = (width * 0.7).min(720.0);
        let rect = Rect::new((width - w) / 2.0, height / 2.0 - 60.0, w, 120.0);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_BG);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 4.0, INK);
        draw_text(&notice.speaker, rect.x + 20.0, rect.y + 32.0, 24.0, ORANGE);
        draw_text(&notice.text, rect.x + 20.0, rect.y + 68.0, 20.0, INK);
        draw_text("Enter / Esc", rect.x + rect.w - 120.0, rect.y + rect.h - 14.0, 16.0, GRAY);
    }

    fn render_dialogue(&self, panel: &DialoguePanel, width: f32, height: f32) {
        let w = (width * 0.8).min(820.0);
        let rect = Rect::new((width - w) / 2.0, height - 200.0, w, 120.0);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_BG);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 4.0, INK);
        draw_text(
            &format!("{} {}", panel.villager.icon, panel.villager.name),
            rect.x + 20.0,
            rect.y + 30.0,
            24.0,
            INK,
        );

        match &panel.line {
            None => {
                draw_text("...", rect.x + 20.0, rect.y + 70.0, 22.0, GRAY);
            }
            Some(line) => {
                draw_circle(rect.x + rect.w - 24.0, rect.y + 22.0, 8.0, emotion_color(&line.emotion));
                draw_text(&line.text, rect.x + 20.0, rect.y + 70.0, 20.0, INK);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_list_shows_everything() {
        assert_eq!(visible_window(1, 3, 12), 0..3);
    }

    #[test]
    fn test_window_follows_cursor() {
        assert_eq!(visible_window(0, 61, 12), 0..12);
        assert_eq!(visible_window(20, 61, 12), 14..26);
        assert_eq!(visible_window(60, 61, 12), 49..61);
    }

    #[test]
    fn test_unknown_emotion_is_neutral_grey() {
        assert_eq!(emotion_color("confused"), GRAY);
        assert_ne!(emotion_color("happy"), GRAY);
    }
}
