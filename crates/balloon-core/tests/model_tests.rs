// Host-side tests for the glTF decoder, using small GLB files assembled
// in memory.

use balloon_core::{AssetError, ModelAsset};

fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }
    let mut bin_bytes = bin.to_vec();
    while bin_bytes.len() % 4 != 0 {
        bin_bytes.push(0);
    }
    let bin_chunk = if bin.is_empty() { 0 } else { 8 + bin_bytes.len() };
    let total = 12 + 8 + json_bytes.len() + bin_chunk;
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json_bytes);
    if !bin.is_empty() {
        out.extend_from_slice(&(bin_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin_bytes);
    }
    out
}

fn triangle_bin() -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices: [u16; 3] = [0, 1, 2];
    let mut bin = Vec::new();
    for p in positions {
        bin.extend_from_slice(&p.to_le_bytes());
    }
    for i in indices {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    bin
}

const INDEXED_TRIANGLE: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [ { "nodes": [0] } ],
  "nodes": [ { "mesh": 0, "translation": [0.0, 2.0, 0.0] } ],
  "materials": [ { "pbrMetallicRoughness": { "baseColorFactor": [1.0, 0.0, 0.0, 1.0] } } ],
  "meshes": [ { "primitives": [ { "attributes": { "POSITION": 0 }, "indices": 1, "material": 0 } ] } ],
  "buffers": [ { "byteLength": 42 } ],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 36, "target": 34962 },
    { "buffer": 0, "byteOffset": 36, "byteLength": 6, "target": 34963 }
  ],
  "accessors": [
    { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
      "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] },
    { "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR" }
  ]
}"#;

const UNINDEXED_TRIANGLE: &str = r#"{
  "asset": { "version": "2.0" },
  "scenes": [ { "nodes": [0] } ],
  "nodes": [ { "mesh": 0 } ],
  "meshes": [ { "primitives": [ { "attributes": { "POSITION": 0 } } ] } ],
  "buffers": [ { "byteLength": 36 } ],
  "bufferViews": [ { "buffer": 0, "byteOffset": 0, "byteLength": 36 } ],
  "accessors": [
    { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
      "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] }
  ]
}"#;

#[test]
fn decodes_indexed_triangle_with_node_transform() {
    let model = ModelAsset::from_glb(&glb(INDEXED_TRIANGLE, &triangle_bin())).expect("decode");
    assert_eq!(model.vertices.len(), 3);
    assert_eq!(model.indices, vec![0, 1, 2]);
    assert_eq!(model.triangle_count(), 1);
    // translation baked into positions
    assert_eq!(model.vertices[0].position, [0.0, 2.0, 0.0]);
    assert_eq!(model.vertices[2].position, [0.0, 3.0, 0.0]);
    // base color carried into every vertex; missing normals fall back to +Y
    for v in &model.vertices {
        assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
    }
}

#[test]
fn generates_indices_for_unindexed_primitives() {
    let bin = &triangle_bin()[..36];
    let model = ModelAsset::from_glb(&glb(UNINDEXED_TRIANGLE, bin)).expect("decode");
    assert_eq!(model.indices, vec![0, 1, 2]);
    // default material is opaque white
    assert_eq!(model.vertices[1].color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn garbage_is_a_parse_error() {
    let err = ModelAsset::from_glb(b"definitely not a model").unwrap_err();
    assert!(matches!(err, AssetError::Parse(_)), "{err:?}");
}

#[test]
fn scene_without_meshes_is_empty() {
    let json = r#"{ "asset": { "version": "2.0" }, "scenes": [ { "nodes": [] } ] }"#;
    let err = ModelAsset::from_glb(&glb(json, &[])).unwrap_err();
    assert!(matches!(err, AssetError::Empty), "{err:?}");
}

#[test]
fn external_buffers_are_rejected() {
    let json = r#"{
      "asset": { "version": "2.0" },
      "buffers": [ { "uri": "balloon.bin", "byteLength": 36 } ]
    }"#;
    let err = ModelAsset::from_glb(json.as_bytes()).unwrap_err();
    assert!(matches!(err, AssetError::ExternalBuffer(ref uri) if uri == "balloon.bin"));
}
