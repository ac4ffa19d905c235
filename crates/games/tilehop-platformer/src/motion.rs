use serde::{Deserialize, Serialize};

use tilehop_core::timer::Countdown;

use crate::level::TileLookup;

/// Horizontal acceleration while a direction is held (px/s^2).
pub const ACCELERATION: f32 = 500.0;
/// Drag is this many times the acceleration, so stopping is quicker than starting.
pub const DRAG_MULTIPLIER: f32 = 6.0;
/// Upward impulse applied on a granted jump (px/s, negative is up).
pub const JUMP_VELOCITY: f32 = -500.0;
/// Rising speed is capped to this once the jump key is released.
pub const JUMP_CUTOFF_VELOCITY: f32 = -200.0;
/// Grace period after walking off a ledge during which a jump is still allowed.
pub const COYOTE_MS: f32 = 100.0;
/// How long a jump press is remembered before landing.
pub const JUMP_BUFFER_MS: f32 = 100.0;
/// Input lock after a fall-out respawn.
pub const INPUT_LOCK_MS: f32 = 500.0;
/// Factor applied to opposing velocity on a direction reversal.
pub const REVERSAL_DAMPING: f32 = 0.25;
/// Distance below the body centre at which the ground tile is probed.
pub const FOOT_PROBE_Y: f32 = 9.0;

/// Tunables for the motion controller, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub acceleration: f32,
    pub drag_multiplier: f32,
    pub jump_velocity: f32,
    pub jump_cutoff_velocity: f32,
    pub coyote_ms: f32,
    pub jump_buffer_ms: f32,
    pub input_lock_ms: f32,
    pub reversal_damping: f32,
    pub foot_probe_y: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            drag_multiplier: DRAG_MULTIPLIER,
            jump_velocity: JUMP_VELOCITY,
            jump_cutoff_velocity: JUMP_CUTOFF_VELOCITY,
            coyote_ms: COYOTE_MS,
            jump_buffer_ms: JUMP_BUFFER_MS,
            input_lock_ms: INPUT_LOCK_MS,
            reversal_damping: REVERSAL_DAMPING,
            foot_probe_y: FOOT_PROBE_Y,
        }
    }
}

impl MotionConfig {
    pub fn drag(&self) -> f32 {
        self.acceleration * self.drag_multiplier
    }
}

/// Control state for one frame, as reported by the input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInput {
    pub left: bool,
    pub right: bool,
    /// Jump went down this frame (edge).
    pub jump_pressed: bool,
    /// Any jump key is currently down.
    pub jump_held: bool,
}

impl ControlInput {
    /// Held direction. Left wins when both are down.
    pub fn direction(&self) -> Option<Facing> {
        if self.left {
            Some(Facing::Left)
        } else if self.right {
            Some(Facing::Right)
        } else {
            None
        }
    }
}

/// Everything the controller reads in one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub dt_ms: f32,
    pub controls: ControlInput,
    /// Body is blocked below, queried fresh from the collision system.
    pub grounded: bool,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Bottom of the playable world; +y is down.
    pub world_height: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animation {
    #[default]
    Idle,
    Walk,
    Jump,
}

/// One-shot triggers for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionEvent {
    WalkStart,
    WalkStop,
    Jump,
    Land,
    Respawn { x: f32, y: f32 },
}

/// What the physics body should do after this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCommands {
    pub acceleration_x: f32,
    pub drag_x: f32,
    pub vx: f32,
    pub vy: f32,
    /// Teleport target when the player fell out of the world.
    pub respawn_at: Option<(f32, f32)>,
    pub facing: Facing,
    pub animation: Animation,
    pub walking: bool,
    pub events: Vec<MotionEvent>,
}

impl MotionCommands {
    pub fn jumped(&self) -> bool {
        self.events.contains(&MotionEvent::Jump)
    }
}

/// Per-level controller state. Recreated wholesale on restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub grounded: bool,
    pub was_grounded_prev_frame: bool,
    pub coyote: Countdown,
    pub jump_buffer: Countdown,
    pub has_jumped_since_grounded: bool,
    pub input_lock: Countdown,
    pub last_safe_x: f32,
    pub last_safe_y: f32,
    pub was_walking: bool,
    pub facing: Facing,
}

impl PlayerState {
    pub fn new(spawn_x: f32, spawn_y: f32) -> Self {
        Self {
            grounded: false,
            was_grounded_prev_frame: false,
            coyote: Countdown::EXPIRED,
            jump_buffer: Countdown::EXPIRED,
            has_jumped_since_grounded: false,
            input_lock: Countdown::EXPIRED,
            last_safe_x: spawn_x,
            last_safe_y: spawn_y,
            was_walking: false,
            facing: Facing::Right,
        }
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_lock.is_active()
    }

    /// The jump grant condition.
    pub fn can_jump(&self) -> bool {
        self.coyote.is_active()
            && self.jump_buffer.is_active()
            && !self.has_jumped_since_grounded
            && !self.is_input_locked()
    }

    pub fn last_safe_position(&self) -> (f32, f32) {
        (self.last_safe_x, self.last_safe_y)
    }
}

/// Advance the controller by one frame.
///
/// Pure with respect to the outside world: reads the body snapshot in
/// `input`, mutates only `state`, and returns commands for the body.
pub fn tick(
    state: &mut PlayerState,
    input: &TickInput,
    tiles: &impl TileLookup,
    config: &MotionConfig,
) -> MotionCommands {
    let dt = if input.dt_ms.is_finite() && input.dt_ms > 0.0 {
        input.dt_ms
    } else {
        0.0
    };

    state.input_lock.tick(dt);
    let locked = state.is_input_locked();

    let grounded_now = input.grounded;
    state.grounded = grounded_now;

    let mut cmd = MotionCommands {
        acceleration_x: 0.0,
        drag_x: 0.0,
        vx: if input.vx.is_finite() { input.vx } else { 0.0 },
        vy: if input.vy.is_finite() { input.vy } else { 0.0 },
        respawn_at: None,
        facing: state.facing,
        animation: Animation::Idle,
        walking: false,
        events: Vec::new(),
    };

    // Horizontal: accelerate toward the held direction, quartering any
    // opposing velocity so reversals do not drift.
    let direction = if locked {
        None
    } else {
        input.controls.direction()
    };
    match direction {
        Some(Facing::Left) => {
            cmd.acceleration_x = -config.acceleration;
            if cmd.vx > 0.0 {
                cmd.vx *= config.reversal_damping;
            }
            state.facing = Facing::Left;
        },
        Some(Facing::Right) => {
            cmd.acceleration_x = config.acceleration;
            if cmd.vx < 0.0 {
                cmd.vx *= config.reversal_damping;
            }
            state.facing = Facing::Right;
        },
        None => {
            cmd.drag_x = config.drag();
        },
    }

    if grounded_now && !state.was_grounded_prev_frame {
        cmd.events.push(MotionEvent::Land);
    }

    if grounded_now {
        state.coyote.reset(config.coyote_ms);
        state.has_jumped_since_grounded = false;
    } else {
        state.coyote.tick(dt);
    }

    if input.controls.jump_pressed {
        state.jump_buffer.reset(config.jump_buffer_ms);
    } else {
        state.jump_buffer.tick(dt);
    }

    let jumped = state.can_jump();
    if jumped {
        cmd.vy = config.jump_velocity;
        state.coyote.clear();
        state.jump_buffer.clear();
        state.has_jumped_since_grounded = true;
        cmd.events.push(MotionEvent::Jump);
    }

    // Short hop: releasing jump while rising caps the rise speed.
    if cmd.vy < 0.0 && !input.controls.jump_held {
        cmd.vy = cmd.vy.max(config.jump_cutoff_velocity);
    }

    let mut respawned = false;
    if input.y > input.world_height {
        let (x, y) = state.last_safe_position();
        tracing::debug!(x, y, fell_at = input.y, "Player left the world, respawning");
        cmd.respawn_at = Some((x, y));
        cmd.acceleration_x = 0.0;
        cmd.drag_x = 0.0;
        cmd.vx = 0.0;
        cmd.vy = 0.0;
        state.input_lock.reset(config.input_lock_ms);
        cmd.events.push(MotionEvent::Respawn { x, y });
        respawned = true;
    }

    if grounded_now
        && !respawned
        && tiles
            .tile_at(input.x, input.y + config.foot_probe_y)
            .is_some_and(|t| t.safe)
    {
        state.last_safe_x = input.x;
        state.last_safe_y = input.y;
    }

    let walking = direction.is_some() && grounded_now && !respawned;
    if walking && !state.was_walking {
        cmd.events.push(MotionEvent::WalkStart);
    } else if !walking && state.was_walking {
        cmd.events.push(MotionEvent::WalkStop);
    }
    state.was_walking = walking;

    cmd.walking = walking;
    cmd.facing = state.facing;
    cmd.animation = if respawned {
        Animation::Idle
    } else if jumped || !grounded_now {
        Animation::Jump
    } else if direction.is_some() {
        Animation::Walk
    } else {
        Animation::Idle
    };

    state.was_grounded_prev_frame = grounded_now;
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::TileInfo;

    /// Solid ground everywhere; `safe` controls the marker.
    struct Floor {
        safe: bool,
    }

    impl TileLookup for Floor {
        fn tile_at(&self, _x: f32, _y: f32) -> Option<TileInfo> {
            Some(TileInfo {
                collides: true,
                safe: self.safe,
            })
        }
    }

    const SAFE: Floor = Floor { safe: true };

    fn frame(dt_ms: f32, grounded: bool, controls: ControlInput) -> TickInput {
        TickInput {
            dt_ms,
            controls,
            grounded,
            x: 100.0,
            y: 200.0,
            vx: 0.0,
            vy: 0.0,
            world_height: 360.0,
        }
    }

    fn press_jump() -> ControlInput {
        ControlInput {
            jump_pressed: true,
            jump_held: true,
            ..Default::default()
        }
    }

    fn hold_jump() -> ControlInput {
        ControlInput {
            jump_held: true,
            ..Default::default()
        }
    }

    fn grounded_player() -> PlayerState {
        let mut state = PlayerState::new(25.0, 245.0);
        tick(
            &mut state,
            &frame(16.0, true, ControlInput::default()),
            &SAFE,
            &MotionConfig::default(),
        );
        state
    }

    #[test]
    fn grounded_tick_resets_coyote_and_jump_flag() {
        let config = MotionConfig::default();
        let mut state = PlayerState::new(0.0, 0.0);
        state.has_jumped_since_grounded = true;
        state.coyote = Countdown::new(-40.0);

        tick(&mut state, &frame(16.0, true, ControlInput::default()), &SAFE, &config);

        assert_eq!(state.coyote.remaining_ms(), COYOTE_MS);
        assert!(!state.has_jumped_since_grounded);
    }

    #[test]
    fn jump_within_coyote_window_is_granted() {
        let config = MotionConfig::default();
        let mut state = grounded_player();

        // Leave the ground, 60ms of airborne frames.
        for _ in 0..3 {
            let cmd = tick(&mut state, &frame(20.0, false, ControlInput::default()), &SAFE, &config);
            assert!(!cmd.jumped());
        }
        // Press at 80ms after leaving.
        let cmd = tick(&mut state, &frame(20.0, false, press_jump()), &SAFE, &config);
        assert!(cmd.jumped(), "Coyote time should still allow the jump");
        assert_eq!(cmd.vy, JUMP_VELOCITY);
    }

    #[test]
    fn jump_after_coyote_window_is_denied() {
        let config = MotionConfig::default();
        let mut state = grounded_player();

        tick(&mut state, &frame(50.0, false, ControlInput::default()), &SAFE, &config);
        tick(&mut state, &frame(50.0, false, ControlInput::default()), &SAFE, &config);
        // 150ms after leaving.
        let cmd = tick(&mut state, &frame(50.0, false, press_jump()), &SAFE, &config);
        assert!(!cmd.jumped(), "Coyote window has closed");

        // The buffered press must not fire later while still airborne.
        let cmd = tick(&mut state, &frame(20.0, false, hold_jump()), &SAFE, &config);
        assert!(!cmd.jumped());
    }

    #[test]
    fn buffered_jump_fires_on_landing() {
        let config = MotionConfig::default();
        let mut state = PlayerState::new(0.0, 0.0);

        // Falling with no coyote; press 50ms before landing.
        tick(&mut state, &frame(16.0, false, ControlInput::default()), &SAFE, &config);
        let cmd = tick(&mut state, &frame(16.0, false, press_jump()), &SAFE, &config);
        assert!(!cmd.jumped());
        tick(&mut state, &frame(25.0, false, hold_jump()), &SAFE, &config);

        let cmd = tick(&mut state, &frame(25.0, true, hold_jump()), &SAFE, &config);
        assert!(cmd.jumped(), "Buffered press should jump on the landing tick");
        assert!(cmd.events.contains(&MotionEvent::Land));
    }

    #[test]
    fn buffered_press_expires() {
        let config = MotionConfig::default();
        let mut state = PlayerState::new(0.0, 0.0);

        tick(&mut state, &frame(16.0, false, press_jump()), &SAFE, &config);
        tick(&mut state, &frame(60.0, false, hold_jump()), &SAFE, &config);
        let cmd = tick(&mut state, &frame(60.0, true, hold_jump()), &SAFE, &config);
        assert!(!cmd.jumped(), "Press was 120ms before landing");
    }

    #[test]
    fn grant_zeroes_both_timers() {
        let config = MotionConfig::default();
        let mut state = grounded_player();

        let cmd = tick(&mut state, &frame(16.0, true, press_jump()), &SAFE, &config);
        assert!(cmd.jumped());
        assert_eq!(state.coyote.remaining_ms(), 0.0);
        assert_eq!(state.jump_buffer.remaining_ms(), 0.0);
        assert!(state.has_jumped_since_grounded);
    }

    #[test]
    fn second_press_in_same_coyote_window_is_denied() {
        let config = MotionConfig::default();
        let mut state = grounded_player();

        let cmd = tick(&mut state, &frame(16.0, true, press_jump()), &SAFE, &config);
        assert!(cmd.jumped());
        let cmd = tick(&mut state, &frame(16.0, false, press_jump()), &SAFE, &config);
        assert!(!cmd.jumped(), "Only one jump per ground contact");
    }

    #[test]
    fn one_press_never_grants_twice_even_with_large_dt() {
        let config = MotionConfig::default();
        for dt in [1.0, 16.0, 99.0, 250.0, 1000.0] {
            let mut state = grounded_player();
            let mut jumps = 0;
            let cmd = tick(&mut state, &frame(dt, true, press_jump()), &SAFE, &config);
            jumps += usize::from(cmd.jumped());
            // Body still grounded on the next frames (physics has not lifted it yet).
            for _ in 0..5 {
                let cmd = tick(&mut state, &frame(dt, true, hold_jump()), &SAFE, &config);
                jumps += usize::from(cmd.jumped());
            }
            assert_eq!(jumps, 1, "dt={dt}: a single press must grant exactly one jump");
        }
    }

    #[test]
    fn releasing_jump_while_rising_clamps_velocity() {
        let config = MotionConfig::default();
        let mut state = PlayerState::new(0.0, 0.0);

        let mut input = frame(16.0, false, ControlInput::default());
        input.vy = -500.0;
        let cmd = tick(&mut state, &input, &SAFE, &config);
        assert_eq!(cmd.vy, JUMP_CUTOFF_VELOCITY);

        input.vy = 50.0;
        let cmd = tick(&mut state, &input, &SAFE, &config);
        assert_eq!(cmd.vy, 50.0, "Falling is unaffected");

        input.vy = -150.0;
        let cmd = tick(&mut state, &input, &SAFE, &config);
        assert_eq!(cmd.vy, -150.0, "Already slower than the cutoff");

        input.vy = -500.0;
        input.controls = hold_jump();
        let cmd = tick(&mut state, &input, &SAFE, &config);
        assert_eq!(cmd.vy, -500.0, "Holding jump keeps full speed");
    }

    #[test]
    fn reversal_quarters_opposing_velocity() {
        let config = MotionConfig::default();
        let mut state = grounded_player();

        let mut input = frame(16.0, true, ControlInput {
            left: true,
            ..Default::default()
        });
        input.vx = 200.0;
        let cmd = tick(&mut state, &input, &SAFE, &config);
        assert_eq!(cmd.vx, 50.0);
        assert_eq!(cmd.acceleration_x, -ACCELERATION);
        assert_eq!(cmd.facing, Facing::Left);

        let mut input = frame(16.0, true, ControlInput {
            right: true,
            ..Default::default()
        });
        input.vx = -200.0;
        let cmd = tick(&mut state, &input, &SAFE, &config);
        assert_eq!(cmd.vx, -50.0);
        assert_eq!(cmd.acceleration_x, ACCELERATION);

        // Same direction: untouched.
        input.vx = 120.0;
        let cmd = tick(&mut state, &input, &SAFE, &config);
        assert_eq!(cmd.vx, 120.0);
    }

    #[test]
    fn neutral_input_applies_drag() {
        let config = MotionConfig::default();
        let mut state = grounded_player();
        let cmd = tick(&mut state, &frame(16.0, true, ControlInput::default()), &SAFE, &config);
        assert_eq!(cmd.acceleration_x, 0.0);
        assert_eq!(cmd.drag_x, 6.0 * ACCELERATION);
        assert_eq!(cmd.animation, Animation::Idle);
    }

    #[test]
    fn falling_out_respawns_and_locks_input() {
        let config = MotionConfig::default();
        let mut state = PlayerState::new(25.0, 245.0);
        state.last_safe_x = 60.0;
        state.last_safe_y = 230.0;

        let mut input = frame(100.0, false, ControlInput {
            right: true,
            ..Default::default()
        });
        input.y = 400.0;
        input.vx = 120.0;
        input.vy = 900.0;
        let cmd = tick(&mut state, &input, &SAFE, &config);

        assert_eq!(cmd.respawn_at, Some((60.0, 230.0)));
        assert_eq!((cmd.vx, cmd.vy), (0.0, 0.0));
        assert_eq!((cmd.acceleration_x, cmd.drag_x), (0.0, 0.0));
        assert!(state.is_input_locked());
        assert!(matches!(cmd.events.last(), Some(MotionEvent::Respawn { .. })));

        // Locked for 400ms worth of frames, unlocked once 500ms have passed.
        let held_right = frame(100.0, true, ControlInput {
            right: true,
            jump_pressed: true,
            jump_held: true,
            ..Default::default()
        });
        for _ in 0..4 {
            let cmd = tick(&mut state, &held_right, &SAFE, &config);
            assert!(state.is_input_locked());
            assert_eq!(cmd.acceleration_x, 0.0, "Direction keys are ignored while locked");
            assert_eq!(cmd.drag_x, config.drag());
            assert!(!cmd.jumped(), "No jump while locked");
        }
        let cmd = tick(&mut state, &held_right, &SAFE, &config);
        assert!(!state.is_input_locked());
        assert_eq!(cmd.acceleration_x, ACCELERATION);
    }

    #[test]
    fn safe_ground_updates_respawn_point() {
        let config = MotionConfig::default();
        let mut state = PlayerState::new(25.0, 245.0);

        let mut input = frame(16.0, true, ControlInput::default());
        input.x = 300.0;
        input.y = 150.0;
        tick(&mut state, &input, &Floor { safe: false }, &config);
        assert_eq!(state.last_safe_position(), (25.0, 245.0), "Unsafe tile ignored");

        tick(&mut state, &input, &SAFE, &config);
        assert_eq!(state.last_safe_position(), (300.0, 150.0));

        input.grounded = false;
        input.x = 500.0;
        tick(&mut state, &input, &SAFE, &config);
        assert_eq!(state.last_safe_position(), (300.0, 150.0), "Airborne ignored");
    }

    #[test]
    fn land_and_walk_edges_fire_once() {
        let config = MotionConfig::default();
        let mut state = PlayerState::new(0.0, 0.0);
        let right = ControlInput {
            right: true,
            ..Default::default()
        };

        let cmd = tick(&mut state, &frame(16.0, false, right), &SAFE, &config);
        assert!(cmd.events.is_empty());
        assert_eq!(cmd.animation, Animation::Jump);

        let cmd = tick(&mut state, &frame(16.0, true, right), &SAFE, &config);
        assert_eq!(cmd.events, vec![MotionEvent::Land, MotionEvent::WalkStart]);
        assert_eq!(cmd.animation, Animation::Walk);

        let cmd = tick(&mut state, &frame(16.0, true, right), &SAFE, &config);
        assert!(cmd.events.is_empty());

        let cmd = tick(&mut state, &frame(16.0, true, ControlInput::default()), &SAFE, &config);
        assert_eq!(cmd.events, vec![MotionEvent::WalkStop]);
    }

    #[test]
    fn left_wins_when_both_held() {
        let controls = ControlInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(controls.direction(), Some(Facing::Left));
    }

    // ================================================================
    // Property-based tests (proptest)
    // ================================================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_frame() -> impl Strategy<Value = (f32, bool, bool, bool, bool, f32)> {
            (
                1.0f32..120.0,
                any::<bool>(),
                any::<bool>(),
                any::<bool>(),
                any::<bool>(),
                -800.0f32..800.0,
            )
        }

        /// Grant condition evaluated on a copy of the state after the
        /// lock, coyote and buffer timers have been advanced for this frame.
        fn expected_grant(state: &PlayerState, input: &TickInput, config: &MotionConfig) -> bool {
            let mut model = state.clone();
            model.input_lock.tick(input.dt_ms);
            if input.grounded {
                model.coyote.reset(config.coyote_ms);
                model.has_jumped_since_grounded = false;
            } else {
                model.coyote.tick(input.dt_ms);
            }
            if input.controls.jump_pressed {
                model.jump_buffer.reset(config.jump_buffer_ms);
            } else {
                model.jump_buffer.tick(input.dt_ms);
            }
            model.can_jump()
        }

        proptest! {
            #[test]
            fn timer_and_grant_invariants_hold(
                frames in proptest::collection::vec(arb_frame(), 1..120)
            ) {
                let config = MotionConfig::default();
                let mut state = PlayerState::new(25.0, 245.0);
                let mut presses = 0usize;
                let mut jumps = 0usize;

                for (dt, grounded, left, jump_pressed, jump_held, vy) in frames {
                    let input = TickInput {
                        dt_ms: dt,
                        controls: ControlInput {
                            left,
                            right: false,
                            jump_pressed,
                            jump_held: jump_held || jump_pressed,
                        },
                        grounded,
                        x: 100.0,
                        y: 200.0,
                        vx: 0.0,
                        vy,
                        world_height: 360.0,
                    };
                    let expected = expected_grant(&state, &input, &config);
                    let cmd = tick(&mut state, &input, &SAFE, &config);
                    presses += usize::from(jump_pressed);
                    prop_assert_eq!(cmd.jumped(), expected);

                    if cmd.jumped() {
                        jumps += 1;
                        prop_assert_eq!(state.coyote.remaining_ms(), 0.0);
                        prop_assert_eq!(state.jump_buffer.remaining_ms(), 0.0);
                        prop_assert!(state.has_jumped_since_grounded);
                    } else if grounded {
                        prop_assert_eq!(state.coyote.remaining_ms(), config.coyote_ms);
                        prop_assert!(!state.has_jumped_since_grounded);
                    }
                    if !input.controls.jump_held {
                        prop_assert!(cmd.vy >= config.jump_cutoff_velocity);
                    }
                    prop_assert!(jumps <= presses, "A jump needs a press");
                }
            }

            #[test]
            fn coyote_never_increases_while_airborne(
                dts in proptest::collection::vec(1.0f32..60.0, 1..40)
            ) {
                let config = MotionConfig::default();
                let mut state = grounded_player();
                let mut previous = state.coyote.remaining_ms();
                for dt in dts {
                    tick(&mut state, &frame(dt, false, ControlInput::default()), &SAFE, &config);
                    prop_assert!(state.coyote.remaining_ms() <= previous);
                    previous = state.coyote.remaining_ms();
                }
            }
        }
    }
}
