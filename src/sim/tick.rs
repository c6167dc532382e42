//! Per-frame bounce update
//!
//! One call advances every sprite by exactly one velocity step. The update
//! is a pure function of the scene and the tint source; the host frame
//! callback never reaches in here.

use super::scene::Scene;
use super::tint::TintSource;

/// Advance every sprite record by one tick.
///
/// The four wall checks are evaluated independently (right, bottom, left,
/// top) and more than one may fire in the same tick. A corner hit flips
/// both velocity components; each firing check draws its own tint, so the
/// last-evaluated wall's color wins. No-op until the surface size has been
/// captured.
pub fn step(scene: &mut Scene, tints: &mut dyn TintSource) {
    let Some(surface) = scene.surface() else {
        return;
    };
    let speed = scene.speed;

    for id in scene.sorted_ids() {
        let Some(sprite) = scene.records.get_mut(&id) else {
            continue;
        };
        let max = sprite.pos + sprite.size;

        if max.x >= surface.x {
            sprite.vel.x = -speed;
            sprite.tint = tints.next_tint();
        }
        if max.y >= surface.y {
            sprite.vel.y = -speed;
            sprite.tint = tints.next_tint();
        }
        if sprite.pos.x <= 0.0 {
            sprite.vel.x = speed;
            sprite.tint = tints.next_tint();
        }
        if sprite.pos.y <= 0.0 {
            sprite.vel.y = speed;
            sprite.tint = tints.next_tint();
        }

        sprite.pos += sprite.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_SPEED, DEFAULT_TINT};
    use glam::Vec2;
    use proptest::prelude::*;

    /// Tint source that hands out a fixed sequence
    struct Scripted {
        seq: Vec<[f32; 4]>,
        cursor: usize,
    }

    impl Scripted {
        fn new(seq: Vec<[f32; 4]>) -> Self {
            Self { seq, cursor: 0 }
        }

        fn draws(&self) -> usize {
            self.cursor
        }
    }

    impl TintSource for Scripted {
        fn next_tint(&mut self) -> [f32; 4] {
            let tint = self.seq[self.cursor % self.seq.len()];
            self.cursor += 1;
            tint
        }
    }

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

    /// Scene with one 50x50 sprite inside a 300x300 surface
    fn scene_with_sprite(pos: Vec2, vel: Vec2) -> (Scene, u32) {
        let mut scene = Scene::new(DEFAULT_SPEED);
        scene.note_surface_size(Vec2::new(300.0, 300.0));
        let id = scene.spawn_sprite();
        scene.note_sprite_size(id, Vec2::new(50.0, 50.0));
        let sprite = scene.records.get_mut(&id).unwrap();
        sprite.pos = pos;
        sprite.vel = vel;
        (scene, id)
    }

    #[test]
    fn test_free_flight_changes_only_position() {
        let (mut scene, id) = scene_with_sprite(
            Vec2::new(100.0, 100.0),
            Vec2::new(DEFAULT_SPEED, -DEFAULT_SPEED),
        );
        let mut tints = Scripted::new(vec![RED]);

        step(&mut scene, &mut tints);

        let sprite = &scene.records[&id];
        assert_eq!(sprite.pos, Vec2::new(110.0, 90.0));
        assert_eq!(sprite.vel, Vec2::new(DEFAULT_SPEED, -DEFAULT_SPEED));
        assert_eq!(sprite.tint, DEFAULT_TINT);
        assert_eq!(tints.draws(), 0);
    }

    #[test]
    fn test_right_wall_reflects() {
        // Surface 300x300, sprite 50x50, speed 10, at (295,100) moving right:
        // max x is 345 >= 300, so velocity flips and the sprite steps back to 285.
        let (mut scene, id) =
            scene_with_sprite(Vec2::new(295.0, 100.0), Vec2::new(DEFAULT_SPEED, 0.0));
        let mut tints = Scripted::new(vec![RED]);

        step(&mut scene, &mut tints);

        let sprite = &scene.records[&id];
        assert_eq!(sprite.vel, Vec2::new(-DEFAULT_SPEED, 0.0));
        assert_eq!(sprite.pos, Vec2::new(285.0, 100.0));
        assert_eq!(sprite.tint, RED);
        assert_eq!(tints.draws(), 1);
    }

    #[test]
    fn test_left_wall_reflects() {
        let (mut scene, id) =
            scene_with_sprite(Vec2::new(0.0, 100.0), Vec2::new(-DEFAULT_SPEED, 0.0));
        let mut tints = Scripted::new(vec![RED]);

        step(&mut scene, &mut tints);

        let sprite = &scene.records[&id];
        assert_eq!(sprite.vel, Vec2::new(DEFAULT_SPEED, 0.0));
        assert_eq!(sprite.pos, Vec2::new(10.0, 100.0));
        assert_eq!(sprite.tint, RED);
    }

    #[test]
    fn test_top_and_bottom_walls_reflect() {
        let (mut scene, id) =
            scene_with_sprite(Vec2::new(100.0, 255.0), Vec2::new(0.0, DEFAULT_SPEED));
        let mut tints = Scripted::new(vec![RED]);
        step(&mut scene, &mut tints);
        assert_eq!(scene.records[&id].vel, Vec2::new(0.0, -DEFAULT_SPEED));

        let (mut scene, id) =
            scene_with_sprite(Vec2::new(100.0, 0.0), Vec2::new(0.0, -DEFAULT_SPEED));
        let mut tints = Scripted::new(vec![RED]);
        step(&mut scene, &mut tints);
        assert_eq!(scene.records[&id].vel, Vec2::new(0.0, DEFAULT_SPEED));
    }

    #[test]
    fn test_corner_hit_flips_both_and_later_tint_wins() {
        // Bottom-right corner: both the right and bottom checks fire in the
        // same tick. The bottom check is evaluated second, so its tint draw
        // is the one that survives.
        let (mut scene, id) = scene_with_sprite(
            Vec2::new(295.0, 295.0),
            Vec2::new(DEFAULT_SPEED, DEFAULT_SPEED),
        );
        let mut tints = Scripted::new(vec![RED, GREEN]);

        step(&mut scene, &mut tints);

        let sprite = &scene.records[&id];
        assert_eq!(sprite.vel, Vec2::new(-DEFAULT_SPEED, -DEFAULT_SPEED));
        assert_eq!(sprite.pos, Vec2::new(285.0, 285.0));
        assert_eq!(sprite.tint, GREEN);
        assert_eq!(tints.draws(), 2);
    }

    #[test]
    fn test_tint_stable_between_wall_hits() {
        // Start touching the left wall so the first tick recolors, then
        // watch the tint hold through free flight.
        let (mut scene, id) = scene_with_sprite(
            Vec2::new(0.0, 30.0),
            Vec2::new(-DEFAULT_SPEED, DEFAULT_SPEED),
        );
        let mut tints = Scripted::new(vec![RED, GREEN]);

        step(&mut scene, &mut tints);
        assert_eq!(scene.records[&id].tint, RED);

        for _ in 0..10 {
            step(&mut scene, &mut tints);
        }
        assert_eq!(scene.records[&id].tint, RED);
        assert_eq!(tints.draws(), 1);
    }

    #[test]
    fn test_step_without_surface_is_noop() {
        let mut scene = Scene::new(DEFAULT_SPEED);
        let id = scene.spawn_sprite();
        scene.note_sprite_size(id, Vec2::new(50.0, 50.0));
        let mut tints = Scripted::new(vec![RED]);

        step(&mut scene, &mut tints);

        assert_eq!(scene.records[&id].pos, Vec2::ZERO);
        assert_eq!(tints.draws(), 0);
    }

    #[test]
    fn test_roster_without_record_is_skipped() {
        let mut scene = Scene::new(DEFAULT_SPEED);
        scene.note_surface_size(Vec2::new(300.0, 300.0));
        scene.spawn_sprite();
        let mut tints = Scripted::new(vec![RED]);

        // Not laid out yet; must not panic or draw tints
        step(&mut scene, &mut tints);
        assert!(scene.records.is_empty());
        assert_eq!(tints.draws(), 0);
    }

    #[test]
    fn test_sprites_update_independently() {
        let mut scene = Scene::new(DEFAULT_SPEED);
        scene.note_surface_size(Vec2::new(300.0, 300.0));
        let a = scene.spawn_sprite();
        let b = scene.spawn_sprite();
        scene.note_sprite_size(a, Vec2::new(50.0, 50.0));
        scene.note_sprite_size(b, Vec2::new(50.0, 50.0));
        scene.records.get_mut(&a).unwrap().pos = Vec2::new(100.0, 100.0);
        scene.records.get_mut(&b).unwrap().pos = Vec2::new(295.0, 120.0);
        let mut tints = Scripted::new(vec![RED]);

        step(&mut scene, &mut tints);

        // Only the sprite at the wall recolored and reversed
        assert_eq!(scene.records[&a].vel, Vec2::splat(DEFAULT_SPEED));
        assert_eq!(scene.records[&a].tint, DEFAULT_TINT);
        assert_eq!(scene.records[&b].vel.x, -DEFAULT_SPEED);
        assert_eq!(scene.records[&b].tint, RED);
    }

    proptest! {
        /// new_pos = old_pos + (post-check) velocity, exactly once per tick,
        /// no matter how many wall conditions fired.
        #[test]
        fn prop_position_advances_by_one_velocity_step(
            x in -20.0f32..320.0,
            y in -20.0f32..320.0,
            vx_sign in prop::bool::ANY,
            vy_sign in prop::bool::ANY,
        ) {
            let vel = Vec2::new(
                if vx_sign { DEFAULT_SPEED } else { -DEFAULT_SPEED },
                if vy_sign { DEFAULT_SPEED } else { -DEFAULT_SPEED },
            );
            let (mut scene, id) = scene_with_sprite(Vec2::new(x, y), vel);
            let old_pos = scene.records[&id].pos;
            let mut tints = Scripted::new(vec![RED, GREEN]);

            step(&mut scene, &mut tints);

            let sprite = &scene.records[&id];
            prop_assert_eq!(sprite.pos, old_pos + sprite.vel);
            // Velocity components only ever hold the configured magnitude
            prop_assert_eq!(sprite.vel.x.abs(), DEFAULT_SPEED);
            prop_assert_eq!(sprite.vel.y.abs(), DEFAULT_SPEED);
        }

        /// Wall contact before the tick fixes the velocity sign after it.
        #[test]
        fn prop_wall_contact_fixes_velocity_sign(
            x in 0.0f32..300.0,
            y in 60.0f32..240.0,
        ) {
            let (mut scene, id) =
                scene_with_sprite(Vec2::new(x, y), Vec2::new(DEFAULT_SPEED, 0.0));
            let hit_right = x + 50.0 >= 300.0;
            let hit_left = x <= 0.0;
            let mut tints = Scripted::new(vec![RED]);

            step(&mut scene, &mut tints);

            let sprite = &scene.records[&id];
            if hit_right {
                prop_assert!(sprite.vel.x < 0.0);
            } else if hit_left {
                prop_assert!(sprite.vel.x > 0.0);
            } else {
                prop_assert_eq!(sprite.vel.x, DEFAULT_SPEED);
            }
        }
    }
}
