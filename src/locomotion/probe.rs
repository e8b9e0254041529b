//! Locomotion domain: synchronous ray queries against the physics world.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::ground_check_mask;

/// Which colliders a probe may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeFilter {
    /// Everything except the probing body.
    Obstacles,
    /// Walkable layers only.
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub point: Vec3,
    pub normal: Vec3,
}

/// Ray queries used by ground and obstacle detection.
pub trait GroundProbe {
    fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        filter: ProbeFilter,
    ) -> Option<ProbeHit>;
}

/// [`GroundProbe`] backed by the avian spatial query pipeline.
pub struct SpatialProbe<'a, 'w, 's> {
    query: &'a SpatialQuery<'w, 's>,
    body: Entity,
}

impl<'a, 'w, 's> SpatialProbe<'a, 'w, 's> {
    pub fn new(query: &'a SpatialQuery<'w, 's>, body: Entity) -> Self {
        Self { query, body }
    }
}

impl GroundProbe for SpatialProbe<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        filter: ProbeFilter,
    ) -> Option<ProbeHit> {
        let filter = match filter {
            ProbeFilter::Obstacles => SpatialQueryFilter::default(),
            ProbeFilter::Ground => SpatialQueryFilter::from_mask(ground_check_mask()),
        }
        .with_excluded_entities([self.body]);

        self.query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| ProbeHit {
                point: origin + *direction * hit.distance,
                normal: hit.normal,
            })
    }
}
