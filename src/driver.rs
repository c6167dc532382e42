//! Frame loop lifecycle
//!
//! The host owns the actual tick source (requestAnimationFrame in the
//! browser). The driver only gates whether a delivered frame advances the
//! simulation: started when the view becomes visible, stopped when it goes
//! away. Frames the host never delivers are simply never seen.

use crate::sim::{self, Scene, TintSource};

/// Start/stop gate between the host frame callback and the simulation
#[derive(Debug, Default)]
pub struct Driver {
    running: bool,
}

impl Driver {
    pub fn new() -> Self {
        Self { running: false }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::debug!("frame driver started");
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::debug!("frame driver stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the scene by one tick if the driver is running
    pub fn frame(&mut self, scene: &mut Scene, tints: &mut dyn TintSource) {
        if self.running {
            sim::step(scene, tints);
        }
    }
}
