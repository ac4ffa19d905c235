use serde::{Deserialize, Serialize};

/// Tile edge length in pixels.
pub const TILE_SIZE: f32 = 18.0;

/// Attributes of a tile as seen by the controller and the physics body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileInfo {
    pub collides: bool,
    /// Standing here records a respawn point.
    pub safe: bool,
}

/// Tile collaborator: world-coordinate lookup. "No tile" is `None`, never an error.
pub trait TileLookup {
    fn tile_at(&self, x: f32, y: f32) -> Option<TileInfo>;
}

/// Tile types for the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    /// Solid ground, safe to respawn on.
    Ground,
    /// Solid floating platform, not a respawn point.
    Platform,
    /// Non-colliding scenery.
    Decoration,
}

impl Tile {
    pub fn info(self) -> Option<TileInfo> {
        match self {
            Tile::Empty => None,
            Tile::Ground => Some(TileInfo {
                collides: true,
                safe: true,
            }),
            Tile::Platform => Some(TileInfo {
                collides: true,
                safe: false,
            }),
            Tile::Decoration => Some(TileInfo {
                collides: false,
                safe: false,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin,
    Diamond,
}

/// Pickup placed on the level. Positions are cell centres in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
    pub collected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndFlag {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    Empty,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownTile {
        row: usize,
        col: usize,
        ch: char,
    },
    MissingSpawn,
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "level has no rows"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} is {found} tiles wide, expected {expected}"),
            Self::UnknownTile { row, col, ch } => {
                write!(f, "unknown tile {ch:?} at row {row}, column {col}")
            },
            Self::MissingSpawn => write!(f, "level has no spawn marker 'P'"),
        }
    }
}

impl std::error::Error for LevelError {}

/// A single level: tile grid plus placed objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    pub tile_size: f32,
    /// Tile data stored row-major (y * width + x), row 0 at the top.
    pub tiles: Vec<Tile>,
    pub collectibles: Vec<Collectible>,
    pub end_flag: Option<EndFlag>,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Level {
    /// Build a level from text rows, top row first.
    ///
    /// `.` empty, `#` ground, `=` platform, `~` decoration,
    /// `c` coin, `d` diamond, `F` end flag, `P` spawn.
    pub fn from_rows(rows: &[&str], tile_size: f32) -> Result<Self, LevelError> {
        let first = rows.first().ok_or(LevelError::Empty)?;
        let width = first.chars().count();
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut level = Level {
            width: width as u32,
            height: rows.len() as u32,
            tile_size,
            tiles: Vec::with_capacity(width * rows.len()),
            collectibles: Vec::new(),
            end_flag: None,
            spawn_x: 0.0,
            spawn_y: 0.0,
        };
        let mut spawn = None;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cx = (col as f32 + 0.5) * tile_size;
                let cy = (row as f32 + 0.5) * tile_size;
                let tile = match ch {
                    '.' => Tile::Empty,
                    '#' => Tile::Ground,
                    '=' => Tile::Platform,
                    '~' => Tile::Decoration,
                    'c' | 'd' => {
                        let kind = if ch == 'c' {
                            CollectibleKind::Coin
                        } else {
                            CollectibleKind::Diamond
                        };
                        level.collectibles.push(Collectible {
                            x: cx,
                            y: cy,
                            kind,
                            collected: false,
                        });
                        Tile::Empty
                    },
                    'F' => {
                        level.end_flag = Some(EndFlag { x: cx, y: cy });
                        Tile::Empty
                    },
                    'P' => {
                        spawn = Some((cx, cy));
                        Tile::Empty
                    },
                    _ => return Err(LevelError::UnknownTile { row, col, ch }),
                };
                level.tiles.push(tile);
            }
        }

        let (spawn_x, spawn_y) = spawn.ok_or(LevelError::MissingSpawn)?;
        level.spawn_x = spawn_x;
        level.spawn_y = spawn_y;
        Ok(level)
    }

    pub fn get_tile(&self, x: i32, y: i32) -> Tile {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return Tile::Empty;
        }
        self.tiles[y as usize * self.width as usize + x as usize]
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).info().is_some_and(|t| t.collides)
    }

    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.tile_size
    }

    /// Bottom of the playable world in pixels.
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.tile_size
    }

    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }
}

impl TileLookup for Level {
    fn tile_at(&self, x: f32, y: f32) -> Option<TileInfo> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let tx = (x / self.tile_size).floor() as i32;
        let ty = (y / self.tile_size).floor() as i32;
        self.get_tile(tx, ty).info()
    }
}

const LEVEL_ONE: &[&str] = &[
    "................................................",
    "................................................",
    "................................................",
    "................................................",
    "................................................",
    "...............................d................",
    "..............................===...............",
    "................................................",
    "....................c.c.........................",
    "...................=====..................c.c...",
    "..........c.c................c..........=====...",
    ".........=====..............===.................",
    "..............................................F.",
    ".P.......................~~.................####",
    "#########.....###########..######....###########",
    "#########.....###########..######....###########",
    "#########.....#################......###########",
    "#########.....#################......###########",
    "#########.....#################......###########",
    "#########.....#################......###########",
];

/// The built-in level.
pub fn level_one() -> Level {
    Level::from_rows(LEVEL_ONE, TILE_SIZE).expect("built-in level layout must be valid")
}
