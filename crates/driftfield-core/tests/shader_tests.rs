// The particle shader must parse and validate on the host.

use driftfield_core::render::ParticleUniforms;
use driftfield_core::PARTICLES_WGSL;

fn validated() -> naga::Module {
    let module = naga::front::wgsl::parse_str(PARTICLES_WGSL).expect("particles.wgsl parses");
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .expect("particles.wgsl validates");
    module
}

#[test]
fn shader_validates_with_expected_entry_points() {
    let module = validated();
    let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

#[test]
fn shader_uniform_block_matches_rust_layout() {
    let module = validated();
    let (_, var) = module
        .global_variables
        .iter()
        .find(|(_, v)| v.name.as_deref() == Some("u"))
        .expect("uniform `u` declared");
    let size = module.types[var.ty].inner.size(module.to_ctx());
    assert_eq!(size as usize, std::mem::size_of::<ParticleUniforms>());
}

#[test]
fn gradient_starts_at_minus_pi_and_output_is_premultiplied() {
    let module = validated();
    assert!(module
        .constants
        .iter()
        .any(|(_, c)| c.name.as_deref() == Some("PI")));
    let src: String = PARTICLES_WGSL.split_whitespace().collect();
    assert!(src.contains("fract((atan2(vel.y,vel.x)+PI)/TAU)"));
    assert!(src.contains("vec4<f32>(tint(vel)*op,op)"));
}
