//! # Display Management
//!
//! Top-down 2D rendering of the current location using macroquad.
//!
//! The display only reads the session. It keeps its own presentation
//! state (camera, eased positions, poses) so animation runs at the frame
//! rate while the simulation stays purely step-based.

use crate::config::GRID_SIZE;
use crate::game::{
    idle_bob, pose, Activity, GameState, IslandItem, ItemType, Location, Pose, PoseInput, Position,
    Session,
};
use crate::generation::{tile_at, TileType, GRID_TILES};
use crate::rendering::UI;
use macroquad::prelude::*;
use std::collections::HashMap;

/// Fraction of the remaining distance the camera covers each frame.
pub const CAMERA_EASE: f32 = 0.05;
/// Fraction of the remaining distance a drawn character covers each frame.
const BODY_EASE: f32 = 0.2;
/// Drawn displacement above which a character counts as walking.
const WALK_THRESHOLD: f32 = 0.02;

/// Parses `#rrggbb` into a colour.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::from_rgba(channel(0)?, channel(2)?, channel(4)?, 255))
}

/// Moves `current` toward `target` by `factor` of the gap.
pub fn ease_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Presentation state of one drawn character.
#[derive(Debug, Clone, Copy)]
struct Figure {
    shown: Position,
    pose: Pose,
}

impl Figure {
    fn at(position: Position) -> Self {
        Self {
            shown: position,
            pose: Pose::rest(),
        }
    }

    /// Eases the drawn position toward `actual` and advances the pose.
    fn follow(&mut self, elapsed: f32, actual: Position) {
        let previous = self.shown;
        let eased = ease_toward(vec2(previous.x, previous.y), vec2(actual.x, actual.y), BODY_EASE);
        self.shown = Position::new(eased.x, eased.y);
        let activity = if previous.distance(actual) > WALK_THRESHOLD {
            Activity::Walking
        } else {
            Activity::Idle
        };
        let input = PoseInput {
            activity,
            previous_position: previous,
            position: self.shown,
        };
        self.pose = pose(elapsed, &input, &self.pose);
    }
}

/// Macroquad display manager for the island.
pub struct MacroquadDisplay {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Pixels per grid unit
    pub tile_size: f32,
    /// World point shown at the screen centre
    pub camera: Vec2,
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Seconds since the display was created
    pub elapsed: f32,
    player: Figure,
    villagers: HashMap<String, Figure>,
    shown_location: Location,
    /// Panel drawing
    pub ui: UI,
}

impl MacroquadDisplay {
    pub fn new(state: &GameState) -> Self {
        let player = state.player_pos;
        Self {
            screen_width: screen_width(),
            screen_height: screen_height(),
            tile_size: 32.0,
            camera: vec2(player.x, player.y),
            messages: Vec::new(),
            max_messages: 100,
            elapsed: 0.0,
            player: Figure::at(player),
            villagers: HashMap::new(),
            shown_location: state.location,
            ui: UI::new(),
        }
    }

    /// Renders the complete frame.
    pub fn render_game(&mut self, session: &Session, dt: f32) {
        self.screen_width = screen_width();
        self.screen_height = screen_height();
        self.elapsed += dt;
        self.follow_state(&session.state);

        clear_background(Color::from_rgba(14, 116, 144, 255));

        if session.state.location.is_main() {
            self.render_island(&session.state);
        } else {
            self.render_interior(session.state.location);
        }
        self.render_character(self.player, YELLOW, "You", &session.state.wardrobe.outfit);
        self.render_hud(&session.state);
        self.render_messages();

        self.ui.render_overlays(session, self.screen_width, self.screen_height);
    }

    /// Catches presentation state up with the simulation.
    fn follow_state(&mut self, state: &GameState) {
        if state.location != self.shown_location {
            // Snap on arrival rather than gliding across the cut
            self.shown_location = state.location;
            self.player = Figure::at(state.player_pos);
            self.camera = vec2(state.player_pos.x, state.player_pos.y);
        }

        self.player.follow(self.elapsed, state.player_pos);
        self.camera = ease_toward(
            self.camera,
            vec2(self.player.shown.x, self.player.shown.y),
            CAMERA_EASE,
        );

        for villager in &state.villagers {
            let figure = self
                .villagers
                .entry(villager.id.clone())
                .or_insert_with(|| Figure::at(villager.position));
            figure.follow(self.elapsed, villager.position);
        }
    }

    /// Converts a world position to screen pixels.
    pub fn world_to_screen(&self, position: Position) -> Vec2 {
        let centre = vec2(self.screen_width / 2.0, self.screen_height / 2.0);
        centre + (vec2(position.x, position.y) - self.camera) * self.tile_size
    }

    fn render_island(&self, state: &GameState) {
        for y in 0..GRID_TILES {
            for x in 0..GRID_TILES {
                let corner = self.world_to_screen(Position::new(x as f32, y as f32));
                draw_rectangle(corner.x, corner.y, self.tile_size, self.tile_size, tile_color(tile_at(x, y)));
            }
        }

        for item in &state.island_items {
            self.render_item(item);
        }

        for villager in &state.villagers {
            let Some(figure) = self.villagers.get(&villager.id) else {
                continue;
            };
            let body = parse_hex_color(&villager.color).unwrap_or(LIGHTGRAY);
            let outfit = villager.outfit.as_deref().unwrap_or("");
            self.render_character(*figure, body, &villager.name, outfit);
        }
    }

    fn render_item(&self, item: &IslandItem) {
        let at = self.world_to_screen(item.position);
        let t = self.tile_size;
        match item.item_type {
            ItemType::House
            | ItemType::Shop
            | ItemType::GeneralStore
            | ItemType::TownHall
            | ItemType::Museum => {
                let scale = if item.item_type == ItemType::House { 1.0 } else { 1.5 };
                let wall = item.wall_color.as_deref().and_then(parse_hex_color).unwrap_or(WHITE);
                let roof = item.color.as_deref().and_then(parse_hex_color).unwrap_or(RED);
                let w = t * 1.6 * scale;
                let h = t * 1.1 * scale;
                draw_rectangle(at.x - w / 2.0, at.y - h / 2.0, w, h, wall);
                draw_triangle(
                    vec2(at.x - w / 2.0 - 4.0, at.y - h / 2.0),
                    vec2(at.x + w / 2.0 + 4.0, at.y - h / 2.0),
                    vec2(at.x, at.y - h / 2.0 - t * 0.8 * scale),
                    roof,
                );
                draw_rectangle(at.x - t * 0.15, at.y + h / 2.0 - t * 0.5, t * 0.3, t * 0.5, DARKBROWN);
                if item.item_type != ItemType::House {
                    self.render_label(&item.name, at + vec2(0.0, h / 2.0 + 14.0), WHITE);
                }
            }
            ItemType::Tree => {
                draw_rectangle(at.x - t * 0.1, at.y, t * 0.2, t * 0.5, BROWN);
                draw_circle(at.x, at.y - t * 0.1, t * 0.5, DARKGREEN);
            }
            ItemType::Rock => draw_circle(at.x, at.y, t * 0.35, GRAY),
            ItemType::Flower => {
                let petal = match item.name.as_str() {
                    "White Lilies" => WHITE,
                    "Blue Roses" => BLUE,
                    _ => RED,
                };
                for (dx, dy) in [(-0.2, 0.0), (0.2, 0.0), (0.0, -0.2), (0.0, 0.2)] {
                    draw_circle(at.x + dx * t, at.y + dy * t, t * 0.12, petal);
                }
                draw_circle(at.x, at.y, t * 0.08, YELLOW);
            }
            _ => draw_circle(at.x, at.y, t * 0.2, PINK),
        }
    }

    fn render_interior(&self, location: Location) {
        let floor = match location {
            Location::Shop => Color::from_rgba(254, 243, 199, 255),
            Location::NookCranny => Color::from_rgba(217, 119, 6, 255),
            Location::ResidentServices => Color::from_rgba(187, 247, 208, 255),
            Location::Museum => Color::from_rgba(231, 229, 228, 255),
            Location::Main => GREEN,
        };
        let corner = self.world_to_screen(Position::new(0.0, 0.0));
        let side = GRID_SIZE * self.tile_size;
        draw_rectangle(corner.x, corner.y, side, side, floor);
        draw_rectangle_lines(corner.x, corner.y, side, side, 6.0, DARKBROWN);

        if let Some(exit) = location.exit_zone() {
            let at = self.world_to_screen(exit.center);
            draw_circle_lines(at.x, at.y, exit.radius * self.tile_size, 3.0, DARKGREEN);
            self.render_label("Exit", at, DARKGREEN);
        }

        let bob = idle_bob(self.elapsed) * self.tile_size;
        for npc in location.residents() {
            let at = self.world_to_screen(npc.position) - vec2(0.0, bob);
            draw_circle(at.x, at.y, self.tile_size * 0.45, ORANGE);
            draw_circle(at.x, at.y - self.tile_size * 0.55, self.tile_size * 0.3, BEIGE);
            self.render_label(npc.name, at + vec2(0.0, self.tile_size * 0.9), BLACK);
        }

        let title = self.world_to_screen(Position::new(GRID_SIZE / 2.0, 1.5));
        self.render_label(location.display_name(), title, DARKBROWN);
    }

    /// Draws a posed character: two legs, body, two arms, head.
    fn render_character(&self, figure: Figure, body: Color, label: &str, outfit: &str) {
        let t = self.tile_size;
        let at = self.world_to_screen(figure.shown);
        let pose = figure.pose;
        let lift = pose.body_lift * t;
        let hip = at - vec2(0.0, lift);

        for (side, swing) in [(-1.0, pose.left_leg), (1.0, pose.right_leg)] {
            let top = hip + vec2(side * t * 0.12, 0.0);
            let foot = top + vec2(swing.sin() * t * 0.35, swing.cos() * t * 0.35);
            draw_line(top.x, top.y, foot.x, foot.y, 4.0, DARKGRAY);
        }

        let torso_w = t * 0.5;
        let torso_h = t * 0.55;
        let torso = hip - vec2(torso_w / 2.0, torso_h);
        draw_rectangle(torso.x, torso.y, torso_w, torso_h, body);

        for (side, swing) in [(-1.0, pose.left_arm), (1.0, pose.right_arm)] {
            let shoulder = hip + vec2(side * torso_w / 2.0, -torso_h * 0.9);
            let hand = shoulder + vec2(side * swing.sin().abs() * t * 0.2 + side * 2.0, swing.cos() * t * 0.35);
            draw_line(shoulder.x, shoulder.y, hand.x, hand.y, 3.0, body);
        }

        let head = hip - vec2(pose.body_roll * t, pose.head_lift * t);
        draw_circle(head.x, head.y, t * 0.3, body);
        // facing marker: a dot offset along the heading
        let eye = head + vec2(pose.heading.sin(), pose.heading.cos()) * t * 0.15;
        draw_circle(eye.x, eye.y, 2.5, BLACK);

        let caption = if outfit.is_empty() {
            label.to_string()
        } else {
            format!("{} {}", label, outfit)
        };
        self.render_label(&caption, at + vec2(0.0, t * 0.6), WHITE);
    }

    fn render_label(&self, text: &str, centre: Vec2, color: Color) {
        let size = measure_text(text, None, 16, 1.0);
        draw_text(text, centre.x - size.width / 2.0, centre.y, 16.0, color);
    }

    /// Renders bells, location and controls.
    fn render_hud(&self, state: &GameState) {
        draw_rectangle(8.0, 8.0, 240.0, 74.0, Color::new(0.0, 0.0, 0.0, 0.6));
        draw_text(&format!("Bells: {}", state.bells), 18.0, 30.0, 20.0, GOLD);
        draw_text(state.location.display_name(), 18.0, 52.0, 18.0, WHITE);
        draw_text(
            &format!("{} - ({:.1}, {:.1})", state.day_time.as_str(), state.player_pos.x, state.player_pos.y),
            18.0,
            72.0,
            16.0,
            LIGHTGRAY,
        );

        let controls = "WASD move  F interact  E pocket  M map  C wardrobe  X exit  Esc close";
        let size = measure_text(controls, None, 16, 1.0);
        draw_text(controls, self.screen_width - size.width - 12.0, 24.0, 16.0, WHITE);
    }

    /// Renders the message area.
    fn render_messages(&self) {
        let message_area_y = self.screen_height - 60.0;
        let message_count = 3;
        let line_height = 18.0;

        draw_rectangle(
            0.0,
            message_area_y - 16.0,
            self.screen_width,
            76.0,
            Color::new(0.0, 0.0, 0.0, 0.6),
        );

        let start_index = self.messages.len().saturating_sub(message_count);
        for (i, message) in self.messages.iter().skip(start_index).enumerate() {
            let y = message_area_y + i as f32 * line_height;
            draw_text(message, 10.0, y, 16.0, WHITE);
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }
}

fn tile_color(tile: TileType) -> Color {
    match tile {
        TileType::Grass => Color::from_rgba(134, 239, 172, 255),
        TileType::Water => Color::from_rgba(56, 189, 248, 255),
        TileType::Sand => Color::from_rgba(253, 230, 138, 255),
        TileType::Dirt => Color::from_rgba(180, 83, 9, 255),
    }
}
