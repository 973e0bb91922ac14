//! APDL 스크립트 형식 회귀 테스트.
use stress_strain_toolbox::{
    apdl::{generate_script, GenerationError, MaterialParameters, MeshKind},
    modulus::EstimationError,
    sample::{parse, Sample, SampleSequence},
};

fn two_rows() -> SampleSequence {
    parse("1 100\n2 180\n").expect("parse")
}

#[test]
fn default_params_full_script() {
    let script = generate_script(&MaterialParameters::default(), &two_rows()).unwrap();
    let expected = "! Commands inserted into this file will be executed just after material definitions in /PREP7.

! Active UNIT system in Workbench when this object was created: Metric (mm, t, N, s, mV, mA)

! NOTE: Any data that requires units (such as mass) is assumed to be in the consistent solver unit system.

! See Solving Units in the help system for more information.
/prep7
MPTEMP,,,,,,,,
MPTEMP, 1, 22
MPDATA, EX, MATID, , 10000
MPDATA, PRXY, MATID, , 0.35
ET, MATID, SOLID92
TB, MELA, MATID, 1, 2
TBTEMP, 22
TBPT,,0.0100, 100
TBPT,,0.0200, 180
";
    assert_eq!(script, expected);
}

#[test]
fn hexahedra_uses_solid95() {
    let params = MaterialParameters {
        mesh: MeshKind::Hexahedra,
        ..Default::default()
    };
    let script = generate_script(&params, &two_rows()).unwrap();
    assert!(script.contains("ET, MATID, SOLID95\n"));
    assert!(!script.contains("SOLID92"));
}

#[test]
fn element_type_mapping_is_total_and_distinct() {
    let tokens: Vec<&str> = MeshKind::ALL.iter().map(|m| m.element_type()).collect();
    assert_eq!(tokens, ["SOLID92", "SOLID95"]);
    assert_eq!(MeshKind::Tetrahedra.element_type(), MeshKind::Tetrahedra.element_type());
}

#[test]
fn row_count_matches_rows() {
    let samples: SampleSequence = (1..=7)
        .map(|i| Sample::new(i as f64 * 0.5, i as f64 * 90.0))
        .collect::<Vec<_>>()
        .into();
    let script = generate_script(&MaterialParameters::default(), &samples).unwrap();
    assert!(script.contains("TB, MELA, MATID, 1, 7\n"));
    assert_eq!(script.lines().filter(|l| l.starts_with("TBPT,,")).count(), 7);
}

#[test]
fn custom_temperature_and_fractional_stress() {
    let params = MaterialParameters {
        temperature: 120.5,
        poisson_ratio: 0.3,
        material_name: "AlMg3".into(),
        mesh: MeshKind::Tetrahedra,
    };
    let samples = parse("50 180.5").unwrap();
    let script = generate_script(&params, &samples).unwrap();
    assert!(script.contains("MPTEMP, 1, 120.5\n"));
    assert!(script.contains("TBTEMP, 120.5\n"));
    assert!(script.contains("MPDATA, PRXY, MATID, , 0.3\n"));
    assert!(script.contains("MPDATA, EX, MATID, , 361\n"));
    assert!(script.ends_with("TBPT,,0.5000, 180.5\n"));
}

#[test]
fn empty_dataset_rejected() {
    let params = MaterialParameters {
        mesh: MeshKind::Hexahedra,
        temperature: -40.0,
        ..Default::default()
    };
    assert_eq!(
        generate_script(&params, &SampleSequence::default()),
        Err(GenerationError::EmptyDataset)
    );
}

#[test]
fn zero_first_strain_propagates() {
    let samples = parse("0 50\n1 100").unwrap();
    assert_eq!(
        generate_script(&MaterialParameters::default(), &samples),
        Err(GenerationError::EstimationFailed(EstimationError::DivisionByZero))
    );
}

#[test]
fn output_is_deterministic() {
    let params = MaterialParameters::default();
    let a = generate_script(&params, &two_rows()).unwrap();
    let b = generate_script(&params, &two_rows()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn suggested_file_name() {
    let mut params = MaterialParameters::default();
    assert_eq!(params.suggested_file_name(), "material.mac");
    params.material_name = "S355 JR".into();
    assert_eq!(params.suggested_file_name(), "S355_JR.mac");
}
