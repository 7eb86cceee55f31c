//! Scripted decorative props: trees, tourists and clouds around the landmark.
//!
//! Placement is a pure function of the render config and the animation clock.

use engine_core::{AnimationClock, Palette, PropDensity, RenderConfig, Transform};
use glam::{Mat4, Vec3};
use renderer::InstanceData;
use std::f32::consts::TAU;

const JUNGLE_TREES: usize = 32;
const JUNGLE_RADIUS: f32 = 35.0;

const LANDSCAPED_TREES: [(f32, f32, f32); 4] = [
    (-25.0, -25.0, 1.5),
    (25.0, -25.0, 1.3),
    (-25.0, 25.0, 1.4),
    (25.0, 25.0, 1.2),
];

/// Tourists stand in front of the south staircase.
const TOURISTS: [(f32, f32); 4] = [(-5.0, 18.0), (0.0, 20.0), (5.0, 22.0), (10.0, 18.0)];

/// (x offset, height, z, radius) per cloud puff.
const CLOUDS: [(f32, f32, f32, f32); 3] = [
    (-50.0, 38.0, -30.0, 4.0),
    (-20.0, 42.0, -45.0, 5.0),
    (10.0, 36.0, -20.0, 3.5),
];

/// Instances per prop part. Boxes use the unit cube, the rest the unit sphere.
#[derive(Debug, Default)]
pub struct PropInstances {
    pub boxes: Vec<InstanceData>,
    pub spheres: Vec<InstanceData>,
}

impl PropInstances {
    pub fn build(config: &RenderConfig, clock: &AnimationClock) -> Self {
        let mut props = Self::default();
        let palette = &config.palette;
        match config.prop_density {
            PropDensity::Overgrown => {
                for i in 0..JUNGLE_TREES {
                    let angle = i as f32 * TAU / JUNGLE_TREES as f32;
                    let radius = JUNGLE_RADIUS + (i % 5) as f32 * 2.0;
                    let scale = 1.0 + (i % 3) as f32 * 0.2;
                    props.tree(palette, angle.cos() * radius, angle.sin() * radius, scale);
                }
            }
            PropDensity::Landscaped => {
                for (x, z, scale) in LANDSCAPED_TREES {
                    props.tree(palette, x, z, scale);
                }
                for (x, z) in TOURISTS {
                    props.tourist(palette, x, z, clock.bounce());
                }
                for (x, y, z, radius) in CLOUDS {
                    let t = Transform::from_position(Vec3::new(x + clock.drift(), y, z))
                        .scaled_by(radius);
                    props.spheres.push(InstanceData::from_transform(&t, palette.cloud));
                }
            }
        }
        props
    }

    fn tree(&mut self, palette: &Palette, x: f32, z: f32, scale: f32) {
        let root = Mat4::from_translation(Vec3::new(x, 0.0, z)) * Mat4::from_scale(Vec3::splat(scale));
        let trunk = Transform::from_position_scale(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.5, 4.0, 0.5));
        let canopy = Transform::from_position(Vec3::new(0.0, 5.0, 0.0)).scaled_by(2.5);
        self.boxes.push(part(root, &trunk, palette.trunk));
        self.spheres.push(part(root, &canopy, palette.canopy));
    }

    fn tourist(&mut self, palette: &Palette, x: f32, z: f32, bounce: f32) {
        let root = Mat4::from_translation(Vec3::new(x, bounce, z));
        let body = Transform::from_position_scale(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.7, 1.5, 0.4));
        let head = Transform::from_position(Vec3::new(0.0, 2.1, 0.0)).scaled_by(0.35);
        self.boxes.push(part(root, &body, palette.tourist_body));
        self.spheres.push(part(root, &head, palette.tourist_head));
    }
}

fn part(root: Mat4, local: &Transform, color: [f32; 3]) -> InstanceData {
    InstanceData::new(
        (root * local.to_matrix()).to_cols_array_2d(),
        [color[0], color[1], color[2], 1.0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{SceneState, FIXED_TICK_SECONDS};

    fn translation(inst: &InstanceData) -> Vec3 {
        Vec3::new(inst.model[3][0], inst.model[3][1], inst.model[3][2])
    }

    #[test]
    fn jungle_ring_has_one_trunk_and_canopy_per_tree() {
        let config = RenderConfig::for_scene(SceneState::Ancient);
        let props = PropInstances::build(&config, &AnimationClock::new());
        assert_eq!(props.boxes.len(), JUNGLE_TREES);
        assert_eq!(props.spheres.len(), JUNGLE_TREES);
        for trunk in &props.boxes {
            let p = translation(trunk);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((35.0 - 1e-3..=43.0 + 1e-3).contains(&r), "tree at radius {r}");
        }
    }

    #[test]
    fn modern_scene_places_trees_tourists_and_clouds() {
        let config = RenderConfig::for_scene(SceneState::Modern);
        let props = PropInstances::build(&config, &AnimationClock::new());
        assert_eq!(props.boxes.len(), LANDSCAPED_TREES.len() + TOURISTS.len());
        assert_eq!(
            props.spheres.len(),
            LANDSCAPED_TREES.len() + TOURISTS.len() + CLOUDS.len()
        );
    }

    #[test]
    fn tourists_bob_with_the_clock() {
        let config = RenderConfig::for_scene(SceneState::Modern);
        let mut clock = AnimationClock::new();
        for _ in 0..40 {
            clock.tick(FIXED_TICK_SECONDS);
        }
        let props = PropInstances::build(&config, &clock);
        let body = &props.boxes[LANDSCAPED_TREES.len()];
        let y = translation(body).y;
        assert!((y - (1.0 + clock.bounce())).abs() < 1e-5);
        assert!(clock.bounce() != 0.0);
    }

    #[test]
    fn clouds_drift_along_x() {
        let config = RenderConfig::for_scene(SceneState::Modern);
        let mut clock = AnimationClock::new();
        let before = PropInstances::build(&config, &clock);
        for _ in 0..100 {
            clock.tick(FIXED_TICK_SECONDS);
        }
        let after = PropInstances::build(&config, &clock);
        let a = translation(before.spheres.last().unwrap());
        let b = translation(after.spheres.last().unwrap());
        assert!((b.x - a.x - clock.drift()).abs() < 1e-4);
        assert_eq!(a.y, b.y);
        assert_eq!(a.z, b.z);
    }

    #[test]
    fn tree_parts_use_palette_colours() {
        let config = RenderConfig::for_scene(SceneState::Ancient);
        let props = PropInstances::build(&config, &AnimationClock::new());
        let trunk = config.palette.trunk;
        assert_eq!(props.boxes[0].color, [trunk[0], trunk[1], trunk[2], 1.0]);
        let canopy = config.palette.canopy;
        assert_eq!(props.spheres[0].color, [canopy[0], canopy[1], canopy[2], 1.0]);
    }
}
