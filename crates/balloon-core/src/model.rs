//! Binary glTF decoding into one flat, GPU-ready triangle list.
//!
//! The balloon asset is drawn as a single instanced mesh, so the whole
//! default scene is flattened: node transforms are baked into positions and
//! normals, and each primitive's base color is written into its vertices.

use crate::error::AssetError;
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default)]
pub struct ModelAsset {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl ModelAsset {
    pub fn from_glb(bytes: &[u8]) -> Result<Self, AssetError> {
        let gltf = gltf::Gltf::from_slice(bytes)?;
        let mut buffers: Vec<&[u8]> = Vec::new();
        for buffer in gltf.buffers() {
            match buffer.source() {
                gltf::buffer::Source::Bin => {
                    let blob = gltf
                        .blob
                        .as_deref()
                        .ok_or(AssetError::MissingBlob(buffer.index()))?;
                    buffers.push(blob);
                }
                gltf::buffer::Source::Uri(uri) => {
                    return Err(AssetError::ExternalBuffer(uri.to_string()));
                }
            }
        }

        let mut asset = ModelAsset::default();
        match gltf.default_scene().or_else(|| gltf.scenes().next()) {
            Some(scene) => {
                for node in scene.nodes() {
                    asset.append_node(&node, Mat4::IDENTITY, &buffers)?;
                }
            }
            None => {
                for mesh in gltf.meshes() {
                    asset.append_mesh(&mesh, Mat4::IDENTITY, &buffers)?;
                }
            }
        }
        if asset.indices.is_empty() {
            return Err(AssetError::Empty);
        }
        log::info!(
            "[asset] decoded model: {} vertices, {} triangles",
            asset.vertices.len(),
            asset.triangle_count()
        );
        Ok(asset)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn append_node(
        &mut self,
        node: &gltf::Node,
        parent: Mat4,
        buffers: &[&[u8]],
    ) -> Result<(), AssetError> {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            self.append_mesh(&mesh, world, buffers)?;
        }
        for child in node.children() {
            self.append_node(&child, world, buffers)?;
        }
        Ok(())
    }

    fn append_mesh(
        &mut self,
        mesh: &gltf::Mesh,
        world: Mat4,
        buffers: &[&[u8]],
    ) -> Result<(), AssetError> {
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!("[asset] skipping non-triangle primitive {:?}", primitive.mode());
                continue;
            }
            let reader = primitive.reader(|b| buffers.get(b.index()).copied());
            let positions: Vec<[f32; 3]> = reader
                .read_positions()
                .ok_or(AssetError::MissingPositions)?
                .collect();
            let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|n| n.collect());
            let colors: Option<Vec<[f32; 4]>> =
                reader.read_colors(0).map(|c| c.into_rgba_f32().collect());
            let base = primitive
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();

            let first = self.vertices.len() as u32;
            for (i, p) in positions.iter().enumerate() {
                let position = world.transform_point3(Vec3::from_array(*p));
                let normal = normals
                    .as_ref()
                    .and_then(|n| n.get(i))
                    .map(|n| (normal_matrix * Vec3::from_array(*n)).normalize_or_zero())
                    .filter(|n| *n != Vec3::ZERO)
                    .unwrap_or(Vec3::Y);
                let tint = colors
                    .as_ref()
                    .and_then(|c| c.get(i).copied())
                    .unwrap_or([1.0; 4]);
                self.vertices.push(MeshVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    color: [
                        base[0] * tint[0],
                        base[1] * tint[1],
                        base[2] * tint[2],
                        base[3] * tint[3],
                    ],
                });
            }
            match reader.read_indices() {
                Some(indices) => self
                    .indices
                    .extend(indices.into_u32().map(|i| first + i)),
                None => self.indices.extend(first..first + positions.len() as u32),
            }
        }
        Ok(())
    }
}
