use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::motion::MotionCommands;

/// Gravity acceleration (px/s^2, +y is down).
pub const GRAVITY: f32 = 1500.0;
/// Horizontal speed cap.
pub const MAX_VELOCITY_X: f32 = 300.0;
/// Vertical speed cap.
pub const MAX_VELOCITY_Y: f32 = 1500.0;
/// Player width for AABB collision.
pub const BODY_WIDTH: f32 = 14.0;
/// Player height for AABB collision.
pub const BODY_HEIGHT: f32 = 16.0;
/// Longest integration step; longer frames are split into substeps.
const MAX_STEP_MS: f32 = 8.0;
/// Upper bound on substeps for one frame.
const MAX_SUBSTEPS: u32 = 16;

/// Configurable arcade physics parameters, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub max_velocity_x: f32,
    pub max_velocity_y: f32,
    pub body_width: f32,
    pub body_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_velocity_x: MAX_VELOCITY_X,
            max_velocity_y: MAX_VELOCITY_Y,
            body_width: BODY_WIDTH,
            body_height: BODY_HEIGHT,
        }
    }
}

/// Reference physics collaborator: an arcade body centred on (x, y).
///
/// The left, right and top world edges collide; the bottom is open so the
/// player can fall out of the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcadeBody {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub acceleration_x: f32,
    pub drag_x: f32,
    /// Resting on a colliding tile after the last step.
    pub blocked_down: bool,
}

impl ArcadeBody {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            acceleration_x: 0.0,
            drag_x: 0.0,
            blocked_down: false,
        }
    }

    /// Take over the controller's commands for the next step.
    pub fn apply(&mut self, cmd: &MotionCommands) {
        self.vx = cmd.vx;
        self.vy = cmd.vy;
        self.acceleration_x = cmd.acceleration_x;
        self.drag_x = cmd.drag_x;
        if let Some((x, y)) = cmd.respawn_at {
            self.x = x;
            self.y = y;
            self.blocked_down = false;
        }
    }

    /// Integrate one frame, split into substeps.
    pub fn step(&mut self, level: &Level, config: &PhysicsConfig, dt_ms: f32) {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return;
        }
        // Time past the substep budget is dropped so no substep can carry
        // the body across a whole tile.
        let dt_ms = dt_ms.min(MAX_STEP_MS * MAX_SUBSTEPS as f32);
        let substeps = ((dt_ms / MAX_STEP_MS).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let sub_dt = dt_ms / 1000.0 / substeps as f32;
        self.blocked_down = false;
        for _ in 0..substeps {
            self.substep(level, config, sub_dt);
        }
    }

    fn substep(&mut self, level: &Level, config: &PhysicsConfig, dt: f32) {
        // Drag only acts when there is no acceleration.
        if self.acceleration_x != 0.0 {
            self.vx += self.acceleration_x * dt;
        } else if self.drag_x > 0.0 {
            let slowed = self.vx.abs() - self.drag_x * dt;
            self.vx = if slowed > 0.0 {
                slowed.copysign(self.vx)
            } else {
                0.0
            };
        }
        self.vy += config.gravity * dt;

        self.vx = self.vx.clamp(-config.max_velocity_x, config.max_velocity_x);
        self.vy = self.vy.clamp(-config.max_velocity_y, config.max_velocity_y);

        let half_w = config.body_width / 2.0;
        let half_h = config.body_height / 2.0;

        let dx = self.vx * dt;
        self.x += dx;
        self.resolve_x(level, dx, half_w, half_h);

        let dy = self.vy * dt;
        self.y += dy;
        self.resolve_y(level, dy, half_w, half_h);

        self.clamp_to_world(level, half_w, half_h);
    }

    fn resolve_x(&mut self, level: &Level, dx: f32, half_w: f32, half_h: f32) {
        let ts = level.tile_size;
        let (min_tx, max_tx) = tile_span(self.x - half_w, self.x + half_w, ts);
        let (min_ty, max_ty) = tile_span(self.y - half_h, self.y + half_h, ts);

        let mut hit: Option<i32> = None;
        for ty in min_ty..max_ty {
            for tx in min_tx..max_tx {
                if !level.is_solid(tx, ty) {
                    continue;
                }
                hit = Some(match hit {
                    Some(h) if dx > 0.0 => h.min(tx),
                    Some(h) => h.max(tx),
                    None => tx,
                });
            }
        }

        if let Some(tx) = hit {
            if dx > 0.0 {
                self.x = tx as f32 * ts - half_w;
            } else {
                self.x = (tx + 1) as f32 * ts + half_w;
            }
            self.vx = 0.0;
        }
    }

    fn resolve_y(&mut self, level: &Level, dy: f32, half_w: f32, half_h: f32) {
        let ts = level.tile_size;
        let (min_tx, max_tx) = tile_span(self.x - half_w, self.x + half_w, ts);
        let (min_ty, max_ty) = tile_span(self.y - half_h, self.y + half_h, ts);

        let mut hit: Option<i32> = None;
        for ty in min_ty..max_ty {
            for tx in min_tx..max_tx {
                if !level.is_solid(tx, ty) {
                    continue;
                }
                hit = Some(match hit {
                    Some(h) if dy > 0.0 => h.min(ty),
                    Some(h) => h.max(ty),
                    None => ty,
                });
            }
        }

        if let Some(ty) = hit {
            if dy > 0.0 {
                // Landed on top of the tile
                self.y = ty as f32 * ts - half_h;
                self.blocked_down = true;
            } else {
                // Hit head on the tile
                self.y = (ty + 1) as f32 * ts + half_h;
            }
            self.vy = 0.0;
        }
    }

    fn clamp_to_world(&mut self, level: &Level, half_w: f32, half_h: f32) {
        let right = level.world_width() - half_w;
        if self.x < half_w {
            self.x = half_w;
            self.vx = self.vx.max(0.0);
        } else if self.x > right {
            self.x = right;
            self.vx = self.vx.min(0.0);
        }
        if self.y < half_h {
            self.y = half_h;
            self.vy = self.vy.max(0.0);
        }
    }
}

/// Tile index range `[min, max)` covered by the open interval `(lo, hi)`.
fn tile_span(lo: f32, hi: f32, tile_size: f32) -> (i32, i32) {
    (
        (lo / tile_size).floor() as i32,
        (hi / tile_size).ceil() as i32,
    )
}
