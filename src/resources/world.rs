use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;
use std::f64::consts::TAU;

use crate::components::{
    Bounds, CloudPuff, EntityId, EntityKind, Interval, Motion, PuffShape, RenderAttributes, WorldEntity,
};
use crate::resources::config::WorldConfig;
use crate::resources::terrain::TerrainHeightField;
use crate::utils::RngManager;

const PUFF_SHAPES: [PuffShape; 3] = [PuffShape::LargeSphere, PuffShape::Slab, PuffShape::SmallSphere];

/// Flat store of every ambient entity.
///
/// Simulation records and their render attributes live in parallel vectors and
/// share an index, which is also the entity's `EntityId`.
#[derive(Resource, Debug, Clone, Default)]
pub struct WorldEntities {
    entities: Vec<WorldEntity>,
    render: Vec<RenderAttributes>,
    seed: u64,
}

fn symmetric_offset<R: Rng + ?Sized>(rng: &mut R, half_extent: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        Interval::symmetric(half_extent.x).sample(rng),
        Interval::symmetric(half_extent.y).sample(rng),
        Interval::symmetric(half_extent.z).sample(rng),
    )
}

fn pick_variant<R: Rng + ?Sized>(rng: &mut R, variants: u8) -> u8 {
    rng.gen_range(0..variants.max(1))
}

impl WorldEntities {
    /// Populate the world. The same seed always yields the same world.
    pub fn generate(config: &WorldConfig, terrain: &TerrainHeightField, rng: &RngManager) -> Self {
        let mut world = Self {
            entities: Vec::with_capacity(config.population()),
            render: Vec::with_capacity(config.population()),
            seed: rng.master_seed(),
        };

        let clouds = &config.clouds;
        let mut cloud_rng = rng.stream("clouds");
        for _ in 0..clouds.count {
            let position = clouds.bounds.sample(&mut cloud_rng);
            let heading = cloud_rng.gen_range(0.0..TAU);
            let speed = clouds.speed.sample(&mut cloud_rng);
            let puff_count = cloud_rng.gen_range(clouds.min_puffs..=clouds.max_puffs);
            let puffs = (0..puff_count)
                .map(|_| CloudPuff {
                    offset: symmetric_offset(&mut cloud_rng, &clouds.puff_spread),
                    shape: PUFF_SHAPES[cloud_rng.gen_range(0..PUFF_SHAPES.len())],
                })
                .collect();
            let rotation = cloud_rng.gen_range(0.0..TAU);
            world.push(
                EntityKind::Cloud,
                position,
                clouds.bounds,
                Motion::Cloud {
                    direction: Vector3::new(heading.cos(), 0.0, heading.sin()),
                    speed,
                },
                RenderAttributes::Cloud { puffs, rotation },
            );
        }

        let birds = &config.birds;
        let mut bird_rng = rng.stream("birds");
        for flock in 0..birds.flocks {
            let flock_centre = birds.bounds.sample(&mut bird_rng);
            for _ in 0..birds.birds_per_flock {
                let offset = symmetric_offset(&mut bird_rng, &birds.spread);
                let position = birds.bounds.wrap_horizontal(&(flock_centre + offset));
                let speed = birds.speed.sample(&mut bird_rng);
                let phase = bird_rng.gen_range(0.0..TAU);
                world.push(
                    EntityKind::Bird,
                    position,
                    birds.bounds,
                    Motion::Bird {
                        flock,
                        centre: position - offset,
                        offset,
                        speed,
                        phase,
                        flap_rate: birds.flap_rate,
                    },
                    RenderAttributes::Bird,
                );
            }
        }

        let planes = &config.planes;
        let mut plane_rng = rng.stream("planes");
        for _ in 0..planes.count {
            let position = planes.bounds.sample(&mut plane_rng);
            let heading = plane_rng.gen_range(0.0..TAU);
            let speed = planes.speed.sample(&mut plane_rng);
            let variant = pick_variant(&mut plane_rng, planes.variants);
            world.push(
                EntityKind::OtherPlane,
                position,
                planes.bounds,
                Motion::OtherPlane { heading, speed },
                RenderAttributes::OtherPlane { variant },
            );
        }

        let trees = &config.trees;
        let mut tree_rng = rng.stream("trees");
        for _ in 0..trees.count {
            let position = terrain.seat(&trees.bounds.sample(&mut tree_rng));
            let height = trees.height.sample(&mut tree_rng);
            let variant = pick_variant(&mut tree_rng, trees.variants);
            world.push(
                EntityKind::Tree,
                position,
                trees.bounds,
                Motion::Static,
                RenderAttributes::Tree { height, variant },
            );
        }

        let mountains = &config.mountains;
        let mut mountain_rng = rng.stream("mountains");
        for _ in 0..mountains.count {
            let position = terrain.seat(&mountains.bounds.sample(&mut mountain_rng));
            let height = mountains.height.sample(&mut mountain_rng);
            let radius = mountains.radius.sample(&mut mountain_rng);
            let variant = pick_variant(&mut mountain_rng, mountains.variants);
            world.push(
                EntityKind::Mountain,
                position,
                mountains.bounds,
                Motion::Static,
                RenderAttributes::Mountain {
                    height,
                    radius,
                    variant,
                },
            );
        }

        world
    }

    fn push(
        &mut self,
        kind: EntityKind,
        position: Vector3<f64>,
        bounds: Bounds,
        motion: Motion,
        render: RenderAttributes,
    ) {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(WorldEntity {
            id,
            kind,
            position,
            bounds,
            motion,
        });
        self.render.push(render);
    }

    pub fn get(&self, id: EntityId) -> Option<&WorldEntity> {
        self.entities.get(id.0 as usize)
    }

    pub fn render(&self, id: EntityId) -> Option<&RenderAttributes> {
        self.render.get(id.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldEntity> {
        self.entities.iter()
    }

    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &WorldEntity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Mutable access for the world advance. Ids and kinds must not be changed.
    pub fn entities_mut(&mut self) -> &mut [WorldEntity] {
        &mut self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Master seed the world was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
