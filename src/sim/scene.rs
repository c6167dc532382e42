//! Sprite records and the scene they live in
//!
//! Layout reporting is an upsert merge: the first size report for a sprite
//! materializes its record, later reports refresh only the measured size.
//! The surface size is captured once and further reports are ignored.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TINT;

/// A single bouncing sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: u32,
    /// Measured draw size in pixels
    pub size: Vec2,
    /// Top-left corner in surface pixels
    pub pos: Vec2,
    /// Signed step applied once per tick
    pub vel: Vec2,
    /// RGBA overlay color
    pub tint: [f32; 4],
}

impl Sprite {
    fn new(id: u32, size: Vec2, speed: f32) -> Self {
        Self {
            id,
            size,
            pos: Vec2::ZERO,
            vel: Vec2::splat(speed),
            tint: DEFAULT_TINT,
        }
    }
}

/// All sprite state owned by the view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Velocity magnitude handed to new sprites and restored on wall hits
    pub speed: f32,
    /// Spawn-ordered sprite ids (render order)
    pub roster: Vec<u32>,
    /// Sprite records keyed by id; a roster id without a record has simply
    /// not been laid out yet
    pub records: HashMap<u32, Sprite>,
    surface: Option<Vec2>,
    next_id: u32,
}

impl Scene {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            roster: Vec::new(),
            records: HashMap::new(),
            surface: None,
            next_id: 1,
        }
    }

    /// Allocate a new sprite ID
    fn next_sprite_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a sprite to the roster. Its record materializes at the first
    /// layout report.
    pub fn spawn_sprite(&mut self) -> u32 {
        let id = self.next_sprite_id();
        self.roster.push(id);
        id
    }

    /// Merge a measured sprite size into the records.
    ///
    /// First report for an id creates the record at the origin with the
    /// default velocity and tint; later reports touch only the size.
    pub fn note_sprite_size(&mut self, id: u32, size: Vec2) {
        match self.records.entry(id) {
            Entry::Occupied(mut entry) => entry.get_mut().size = size,
            Entry::Vacant(entry) => {
                entry.insert(Sprite::new(id, size, self.speed));
            }
        }
    }

    /// Capture the bounding surface size. Only the first non-empty report
    /// sticks; live resize is not tracked.
    pub fn note_surface_size(&mut self, size: Vec2) {
        if self.surface.is_some() || size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.surface = Some(size);
    }

    pub fn surface(&self) -> Option<Vec2> {
        self.surface
    }

    /// Record ids in ascending order, for deterministic iteration
    pub fn sorted_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
