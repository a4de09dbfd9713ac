//! Proximity collision detection
//!
//! Brute-force pairwise distance checks. Entity counts are capped (tens, not
//! thousands) so there is no broad phase.
//!
//! Each entity takes part in at most one collision per tick: the first match
//! in iteration order wins and the rest are skipped. At 60 Hz and these
//! speeds an entity that missed its chance collides on the next tick.

use glam::Vec3;

use super::state::{Body, Enemy, PowerUp, Projectile, Spaceship};

/// A body that can be consumed by a collision
pub trait Collider: Body {
    /// Still eligible for a collision this tick
    fn is_available(&self) -> bool {
        self.is_alive()
    }

    /// Called once when this body takes part in a collision
    fn engage(&mut self);
}

impl Collider for Projectile {
    fn engage(&mut self) {
        self.alive = false;
    }
}

impl Collider for PowerUp {
    fn engage(&mut self) {
        self.alive = false;
    }
}

/// Enemies survive a hit unless the resolver finds their health gone, but
/// they are out of play for the rest of the tick.
impl Collider for Enemy {
    fn is_available(&self) -> bool {
        self.alive && !self.engaged
    }

    fn engage(&mut self) {
        self.engaged = true;
    }
}

/// The ship is never consumed
impl Collider for Spaceship {
    fn engage(&mut self) {}
}

/// True if two points are strictly closer than `radius`
#[inline]
pub fn within(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Test every available pair in `a` × `b`. On a hit `on_hit` runs exactly
/// once for the pair, then both participants are engaged. Returns the number
/// of hits.
pub fn check_collisions<A: Collider, B: Collider>(
    a: &mut [A],
    b: &mut [B],
    radius: f32,
    mut on_hit: impl FnMut(&A, &B),
) -> usize {
    let mut hits = 0;
    for first in a.iter_mut() {
        if !first.is_available() {
            continue;
        }
        let Some(second) = b
            .iter_mut()
            .find(|other| other.is_available() && within(first.pos(), other.pos(), radius))
        else {
            continue;
        };
        on_hit(&*first, &*second);
        first.engage();
        second.engage();
        hits += 1;
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EnemyKind, EntityId, PowerUpKind, ProjectileKind};
    use crate::tuning::Tuning;

    fn shot(id: u32, z: f32) -> Projectile {
        Projectile::new(
            EntityId(id),
            ProjectileKind::Laser,
            Vec3::new(0.0, 0.0, z),
            Vec3::NEG_Z,
            0.5,
            1,
        )
    }

    fn enemy(id: u32, z: f32) -> Enemy {
        Enemy::new(
            EntityId(id),
            EnemyKind::Standard,
            Vec3::new(0.0, 0.0, z),
            &Tuning::default().standard,
        )
    }

    #[test]
    fn test_within_is_strict() {
        assert!(within(Vec3::ZERO, Vec3::new(0.49, 0.0, 0.0), 0.5));
        assert!(!within(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), 0.5));
    }

    #[test]
    fn test_single_hit_engages_both() {
        let mut shots = vec![shot(1, -10.0)];
        let mut enemies = vec![enemy(2, -10.2)];
        let mut pairs = Vec::new();

        let hits = check_collisions(&mut shots, &mut enemies, 0.5, |s, e| pairs.push((s.id, e.id)));
        assert_eq!(hits, 1);
        assert_eq!(pairs, vec![(EntityId(1), EntityId(2))]);
        assert!(!shots[0].alive);
        assert!(enemies[0].engaged);
        // The enemy's fate is up to the resolver
        assert!(enemies[0].alive);
    }

    #[test]
    fn test_earliest_match_wins() {
        // Two shots on one enemy: only the first counts this tick
        let mut shots = vec![shot(1, -10.0), shot(2, -10.1)];
        let mut enemies = vec![enemy(3, -10.05)];
        let mut pairs = Vec::new();

        check_collisions(&mut shots, &mut enemies, 0.5, |s, e| pairs.push((s.id, e.id)));
        assert_eq!(pairs, vec![(EntityId(1), EntityId(3))]);
        assert!(shots[1].alive);
    }

    #[test]
    fn test_one_shot_one_enemy() {
        // One shot between two enemies hits only the first listed
        let mut shots = vec![shot(1, -10.0)];
        let mut enemies = vec![enemy(2, -10.1), enemy(3, -9.9)];
        let hits = check_collisions(&mut shots, &mut enemies, 0.5, |_, _| {});
        assert_eq!(hits, 1);
        assert!(enemies[0].engaged);
        assert!(!enemies[1].engaged);
    }

    #[test]
    fn test_dead_entities_skipped() {
        let mut shots = vec![shot(1, -10.0)];
        let mut enemies = vec![enemy(2, -10.0)];
        enemies[0].alive = false;
        assert_eq!(check_collisions(&mut shots, &mut enemies, 0.5, |_, _| {}), 0);
        assert!(shots[0].alive);
    }

    #[test]
    fn test_ship_collects_many() {
        let mut ship = Spaceship::default();
        let mut ups = vec![
            PowerUp::new(EntityId(1), PowerUpKind::Shield, ship.pos, 0.05),
            PowerUp::new(EntityId(2), PowerUpKind::Healing, ship.pos, 0.05),
        ];
        let hits = check_collisions(&mut ups, std::slice::from_mut(&mut ship), 0.5, |_, _| {});
        assert_eq!(hits, 2);
        assert!(ups.iter().all(|p| !p.alive));
    }
}
