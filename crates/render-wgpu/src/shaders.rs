/// WGSL shader for lit standard-material meshes.
///
/// Group 0 carries the camera and lights for the frame, group 1 the per-mesh
/// transform and material (bound with a dynamic offset). Shading is Lambert
/// diffuse plus a Blinn-Phong highlight that fades out as roughness reaches 1.
pub const MESH_SHADER: &str = r#"
const MAX_POINT_LIGHTS: u32 = 4u;

struct PointLight {
    position: vec4<f32>,
    color: vec4<f32>,
};

struct Frame {
    view_proj: mat4x4<f32>,
    camera_position: vec4<f32>,
    ambient: vec4<f32>,
    counts: vec4<u32>,
    point_lights: array<PointLight, 4>,
};

struct MeshUniforms {
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    base_color: vec4<f32>,
    material: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame_data: Frame;

@group(1) @binding(0)
var<uniform> mesh_data: MeshUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = mesh_data.model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (mesh_data.normal_matrix * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = frame_data.view_proj * world_pos;
    out.world_position = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    return out;
}

fn attenuation(d: f32, range: f32, decay: f32) -> f32 {
    var falloff = 1.0;
    if (decay > 0.0) {
        falloff = 1.0 / pow(max(d, 0.01), decay);
    }
    if (range > 0.0) {
        let fade = clamp(1.0 - pow(d / range, 4.0), 0.0, 1.0);
        falloff = falloff * fade * fade;
    }
    return falloff;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let v = normalize(frame_data.camera_position.xyz - in.world_position);
    let base = mesh_data.base_color.rgb;
    let roughness = mesh_data.material.x;
    let metalness = mesh_data.material.y;

    let diffuse_color = base * (1.0 - metalness);
    let specular_color = mix(vec3<f32>(0.04), base, metalness);
    let shininess = mix(256.0, 1.0, roughness);

    var color = frame_data.ambient.rgb * diffuse_color;
    let light_count = min(frame_data.counts.x, MAX_POINT_LIGHTS);
    for (var i = 0u; i < light_count; i = i + 1u) {
        let pl = frame_data.point_lights[i];
        let to_light = pl.position.xyz - in.world_position;
        let d = length(to_light);
        let l = to_light / max(d, 0.0001);
        let ndotl = max(dot(n, l), 0.0);
        let radiance = pl.color.rgb * attenuation(d, pl.position.w, pl.color.w);

        let h = normalize(l + v);
        let highlight = pow(max(dot(n, h), 0.0), shininess) * (1.0 - roughness);

        color += radiance * ndotl * (diffuse_color + specular_color * highlight);
    }

    return vec4<f32>(color, mesh_data.base_color.a);
}
"#;
