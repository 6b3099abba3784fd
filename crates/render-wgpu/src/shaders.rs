/// WGSL shader for instanced shaded meshes (the spheres).
pub const MESH_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    ambient: vec4<f32>,
    light_dir: vec4<f32>,
    light_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
    @location(7) params: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
    @location(3) params: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = world_normal;
    out.color = instance.color;
    out.params = instance.params;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let roughness = in.params.x;
    let metalness = in.params.y;

    let n = normalize(in.world_normal);
    let l = -normalize(uniforms.light_dir.xyz);
    let v = normalize(uniforms.camera_pos.xyz - in.world_pos);
    let h = normalize(l + v);

    let ndotl = max(dot(n, l), 0.0);
    let ambient = in.color.rgb * uniforms.ambient.rgb;
    // Metals scatter less diffusely and pick up a stronger highlight;
    // roughness widens the highlight lobe.
    let diffuse = in.color.rgb * uniforms.light_color.rgb * ndotl * (1.0 - 0.9 * metalness);
    let shininess = mix(128.0, 8.0, roughness);
    let spec = pow(max(dot(n, h), 0.0), shininess);
    let specular = uniforms.light_color.rgb * spec * mix(0.04, 1.0, metalness);

    return vec4<f32>(ambient + diffuse + specular, in.color.a);
}
"#;

/// WGSL shader for instanced wireframe line lists (the cube edges).
pub const WIRE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    ambient: vec4<f32>,
    light_dir: vec4<f32>,
    light_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct WireVertex {
    @location(0) position: vec3<f32>,
};

struct WireInstance {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
    @location(7) params: vec4<f32>,
};

struct WireOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_wire(vertex: WireVertex, instance: WireInstance) -> WireOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    var out: WireOutput;
    out.clip_position = uniforms.view_proj * model * vec4<f32>(vertex.position, 1.0);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_wire(in: WireOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
