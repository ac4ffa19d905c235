//! Scripted keyboard input for headless runs.
//!
//! A script is a list of lines of the form `<duration_ms> [keys...]`,
//! where keys are any of `left`, `right`, `jump` or `idle`. Blank lines
//! and `#` comments are skipped. Holding `jump` across consecutive steps
//! is a single press; insert a step without it to press again.

use std::fmt;
use std::path::Path;

use tilehop_platformer::motion::ControlInput;

/// Built-in run: walk to the first gap, hop onto the floating platform and
/// carry on to the right.
pub const DEMO: &str = "\
# Settle on the ground.
200 idle
# Run at the first gap and jump near its edge.
450 right
300 right jump
400 right
# Short hop.
60 right jump
500 right
200 idle
";

/// One held key combination and how long it is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub duration_ms: f32,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Empty,
    BadDuration { line: usize, text: String },
    UnknownKey { line: usize, key: String },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "cannot read script: {e}"),
            ScriptError::Empty => write!(f, "script has no steps"),
            ScriptError::BadDuration { line, text } => {
                write!(f, "line {line}: invalid duration '{text}'")
            },
            ScriptError::UnknownKey { line, key } => {
                write!(f, "line {line}: unknown key '{key}'")
            },
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Io(e)
    }
}

pub fn parse(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let mut words = content.split_whitespace();
        let Some(first) = words.next() else {
            continue;
        };
        let duration_ms = match first.parse::<f32>() {
            Ok(ms) if ms.is_finite() && ms > 0.0 => ms,
            _ => {
                return Err(ScriptError::BadDuration {
                    line,
                    text: first.to_string(),
                });
            },
        };

        let mut step = ScriptStep {
            duration_ms,
            left: false,
            right: false,
            jump: false,
        };
        for key in words {
            match key.to_ascii_lowercase().as_str() {
                "left" => step.left = true,
                "right" => step.right = true,
                "jump" => step.jump = true,
                "idle" => {},
                _ => {
                    return Err(ScriptError::UnknownKey {
                        line,
                        key: key.to_string(),
                    });
                },
            }
        }
        steps.push(step);
    }
    if steps.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(steps)
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<ScriptStep>, ScriptError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Plays a script back one frame at a time, turning held keys into
/// per-frame controls with jump press edges.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<ScriptStep>,
    index: usize,
    elapsed_in_step: f32,
    jump_was_held: bool,
}

impl Playback {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            index: 0,
            elapsed_in_step: 0.0,
            jump_was_held: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Total scripted time in milliseconds.
    pub fn duration_ms(&self) -> f32 {
        self.steps.iter().map(|s| s.duration_ms).sum()
    }

    /// Controls for the next frame, or `None` once the script has run out.
    pub fn next_frame(&mut self, dt_ms: f32) -> Option<ControlInput> {
        let step = *self.steps.get(self.index)?;
        let controls = ControlInput {
            left: step.left,
            right: step.right,
            jump_pressed: step.jump && !self.jump_was_held,
            jump_held: step.jump,
        };
        self.jump_was_held = step.jump;

        self.elapsed_in_step += dt_ms.max(0.0);
        while let Some(current) = self.steps.get(self.index)
            && self.elapsed_in_step >= current.duration_ms
        {
            self.elapsed_in_step -= current.duration_ms;
            self.index += 1;
        }
        Some(controls)
    }
}
