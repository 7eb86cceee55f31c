//! Rendering: one lit pass over the landmark and the scripted props.

use anyhow::Result;
use renderer::{DrawBatch, InstanceData, LightingUniform};

use crate::props::PropInstances;
use crate::GameState;

/// Draw one frame. Called from `GameState::render()`.
pub fn run(state: &mut GameState) -> Result<()> {
    // Re-derived every frame so a scene toggle shows up immediately.
    let config = state.session.render_config();
    let palette = config.palette;

    state.renderer.update_camera(&state.session.camera);
    state.renderer.update_lighting(&LightingUniform::new(
        &config,
        &state.session.camera,
        state.session.fog_enabled,
    ));

    let (output, mut encoder) = match state.renderer.begin_frame() {
        Ok(frame) => frame,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            log::debug!("Surface lost or outdated, reconfiguring");
            state.renderer.reconfigure();
            return Ok(());
        }
        Err(wgpu::SurfaceError::Timeout) => {
            log::warn!("Surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let ground = [InstanceData::identity(palette.ground)];
    let stone = [InstanceData::identity(palette.stone)];
    let doorway = [InstanceData::identity(palette.doorway)];
    let props = PropInstances::build(&config, &state.session.clock);

    let meshes = &state.meshes;
    let mut batches = vec![
        DrawBatch { mesh: &meshes.ground, instances: &ground },
        DrawBatch { mesh: &meshes.body, instances: &stone },
    ];
    batches.extend(
        meshes
            .staircases
            .iter()
            .map(|mesh| DrawBatch { mesh, instances: &stone }),
    );
    batches.push(DrawBatch { mesh: &meshes.doorways, instances: &doorway });
    batches.push(DrawBatch { mesh: &meshes.cube, instances: &props.boxes });
    batches.push(DrawBatch { mesh: &meshes.sphere, instances: &props.spheres });

    state
        .renderer
        .render_scene(&mut encoder, &view, config.clear_color, &batches);
    state.renderer.end_frame(output, encoder);
    Ok(())
}
