//! Section-level behaviour exercised through the public API.

use clt_core::calculations::PointPosition;
use clt_core::{calculate, CalcError, CltLayup, CltSectionInput, LamellaMaterial, LayerStack, SectionForces};

fn c24() -> LamellaMaterial {
    LamellaMaterial {
        name: "C24".to_string(),
        e0_mean: 11_000.0,
        ft0k: 14.5,
        fc0k: 21.0,
        fmk: 24.0,
        fvk: 4.0,
        frk: 1.1,
    }
}

fn gl28h() -> LamellaMaterial {
    LamellaMaterial {
        name: "GL28h".to_string(),
        e0_mean: 12_600.0,
        ft0k: 22.3,
        fc0k: 28.0,
        fmk: 28.0,
        fvk: 3.5,
        frk: 1.2,
    }
}

fn stack(thicknesses: &[f64], orientations: &[i32]) -> LayerStack {
    LayerStack::new(thicknesses, orientations, &vec![c24(); thicknesses.len()]).unwrap()
}

#[test]
fn homogeneous_rectangle_matches_closed_form() {
    let h = 120.0;
    let b = clt_core::STRIP_WIDTH_MM;
    let s = stack(&[h], &[0]);
    let p = s.effective_properties();

    assert!((p.center_of_gravity_mm - h / 2.0).abs() < 1e-9);
    assert!((p.moment_of_inertia_mm4 - b * h.powi(3) / 12.0).abs() < 1e-3);

    let q = s.static_moment_profile().values();
    assert_eq!(q.len(), 1);
    assert_eq!(q[0][0], 0.0);
    assert!((q[0][1] - b * h * h / 8.0).abs() < 1e-6);
    assert!(q[0][2].abs() < 1e-6);
}

#[test]
fn symmetric_three_layer_panel() {
    let s = stack(&[40.0, 40.0, 40.0], &[0, 90, 0]);
    let p = s.effective_properties();

    assert!((p.center_of_gravity_mm - 60.0).abs() < 1e-9);
    assert!((p.z_top_mm - 60.0).abs() < 1e-9);
    assert!((p.z_bottom_mm - 60.0).abs() < 1e-9);
    assert!((p.active_area_mm2 - 80_000.0).abs() < 1e-9);
    assert!((p.moment_of_inertia_mm4 - 138_666_666.667).abs() < 1e-2);
    assert!((p.ae_eff - 11_000.0 * 80.0).abs() < 1e-6);
}

#[test]
fn geometry_is_consistent() {
    let s = stack(&[30.0, 20.0, 40.0, 20.0, 20.0], &[0, 90, 0, 90, 0]);
    let p = s.effective_properties();
    let geo = s.layer_geometry();

    assert!(p.center_of_gravity_mm >= 0.0 && p.center_of_gravity_mm <= p.thickness_mm);

    let first = geo.first().unwrap();
    let last = geo.last().unwrap();
    let span = last.center_mm - first.center_mm + 30.0 / 2.0 + 20.0 / 2.0;
    assert!((p.z_top_mm + p.z_bottom_mm - span).abs() < 1e-9);
    assert!((p.z_top_mm + p.z_bottom_mm - p.thickness_mm).abs() < 1e-9);
}

#[test]
fn normal_force_equilibrium() {
    let s = LayerStack::new(
        &[30.0, 30.0, 40.0, 30.0, 30.0],
        &[0, 90, 0, 90, 0],
        &[gl28h(), c24(), c24(), c24(), c24()],
    )
    .unwrap();
    let p = s.effective_properties();

    for n_kn in [250.0, -75.5] {
        let stresses = s.normal_stress(n_kn);
        // σ_i · t_i summed over the section is the force per mm of width
        let resultant: f64 = s
            .layers()
            .iter()
            .enumerate()
            .map(|(i, l)| (stresses.tension[i] + stresses.compression[i]) * l.thickness_mm())
            .sum();
        assert!((resultant - n_kn).abs() < 1e-9);

        // Each active layer carries its stiffness share
        let top = stresses.tension[0] + stresses.compression[0];
        assert!((top - n_kn * 12_600.0 / p.ae_eff).abs() < 1e-12);
    }
}

#[test]
fn static_moment_is_continuous() {
    let s = LayerStack::new(
        &[20.0, 30.0, 20.0, 30.0, 20.0, 30.0, 20.0],
        &[0, 90, 0, 90, 0, 90, 0],
        &[c24(), c24(), gl28h(), c24(), c24(), c24(), gl28h()],
    )
    .unwrap();
    let profile = s.static_moment_profile();

    assert_eq!(profile.layers[0].first_value(), 0.0);
    for pair in profile.layers.windows(2) {
        assert_eq!(pair[0].last_value(), pair[1].first_value());
    }
    assert!(profile.layers.last().unwrap().last_value().abs() < 1e-3);
}

#[test]
fn weakest_link_monotonicity() {
    let base = LayerStack::new(&[40.0, 40.0, 40.0], &[0, 90, 0], &[c24(), c24(), c24()]).unwrap();
    let base_cap = base.capacities();

    // Strengthening every mode of the bottom lamella: the symmetric partner
    // still governs, nothing changes
    let mut strong = c24();
    strong.ft0k *= 2.0;
    strong.fc0k *= 2.0;
    strong.fmk *= 2.0;
    strong.fvk *= 2.0;
    let s = LayerStack::new(&[40.0, 40.0, 40.0], &[0, 90, 0], &[c24(), c24(), strong.clone()]).unwrap();
    let cap = s.capacities();
    assert_eq!(cap.tension_kn, base_cap.tension_kn);
    assert_eq!(cap.compression_kn, base_cap.compression_kn);
    assert!(cap.bending_knm >= base_cap.bending_knm);
    assert!(cap.shear_kn >= base_cap.shear_kn);

    // Strengthening both outer lamellae raises the axial capacities
    let s = LayerStack::new(&[40.0, 40.0, 40.0], &[0, 90, 0], &[strong.clone(), c24(), strong]).unwrap();
    let cap = s.capacities();
    assert!(cap.tension_kn > base_cap.tension_kn);
    assert!(cap.compression_kn > base_cap.compression_kn);
}

#[test]
fn many_layers_terminate_with_bounded_profile() {
    let n = 31;
    let thicknesses = vec![20.0; n];
    let orientations: Vec<i32> = (0..n).map(|i| if i % 2 == 0 { 0 } else { 90 }).collect();
    let s = stack(&thicknesses, &orientations);

    let profile = s.static_moment_profile();
    assert_eq!(profile.layers.len(), n);
    for layer in &profile.layers {
        assert!(!layer.points.is_empty() && layer.points.len() <= 4);
    }
    // Symmetric: CoG at mid-depth of the middle cross layer, no extra point
    assert!((s.effective_properties().center_of_gravity_mm - 310.0).abs() < 1e-9);
    assert!(profile
        .layers
        .iter()
        .flat_map(|l| l.points.iter())
        .all(|p| p.position != PointPosition::CenterOfGravity));
}

#[test]
fn unbalanced_layup_has_center_of_gravity_point() {
    let s = stack(&[30.0, 20.0, 40.0, 20.0, 20.0], &[0, 90, 0, 90, 0]);
    let profile = s.static_moment_profile();
    let cog_point = profile
        .layers
        .iter()
        .flat_map(|l| l.points.iter())
        .find(|p| p.position == PointPosition::CenterOfGravity)
        .expect("CoG lies inside the middle lamella");

    assert!((cog_point.depth_mm - s.effective_properties().center_of_gravity_mm).abs() < 1e-9);
    assert!((cog_point.static_moment_mm3 - profile.max_static_moment_mm3()).abs() < 1e-6);
}

#[test]
fn construction_errors() {
    let err = LayerStack::new(&[40.0, 40.0, 40.0], &[0, 90], &vec![c24(); 3]).unwrap_err();
    assert!(matches!(err, CalcError::LengthMismatch { .. }));

    let err = LayerStack::new(&[40.0, 0.0, 40.0], &[0, 90, 0], &vec![c24(); 3]).unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { .. }));

    let err = LayerStack::new(&[40.0, 40.0], &[90, 90], &vec![c24(); 2]).unwrap_err();
    assert!(matches!(err, CalcError::NoActiveLayers { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn layup_and_one_shot_calculation_agree() {
    let layup = CltLayup::new(&[40.0, 40.0, 40.0], &[0, 90, 0], &vec![c24(); 3]).unwrap();

    let input = CltSectionInput {
        label: "L3s".to_string(),
        thicknesses_mm: vec![40.0, 40.0, 40.0],
        orientations: vec![0, 90, 0],
        materials: vec![c24(); 3],
    };
    let result = calculate(&input, &SectionForces::default()).unwrap();

    assert_eq!(&result.properties, layup.section_x().effective_properties());
    assert_eq!(result.capacities, layup.section_x().capacities());
}
