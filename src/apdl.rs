//! APDL 재료 정의 스크립트 생성기.
//!
//! 출력 형식은 솔버가 그대로 읽으므로 키워드(`MPTEMP`, `MPDATA`, `ET`, `TB, MELA`, `TBTEMP`,
//! `TBPT`)와 리터럴 `MATID`는 글자 그대로 유지해야 한다.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::modulus::{self, EstimationError};
use crate::sample::SampleSequence;

const HEADER: &str = "! Commands inserted into this file will be executed just after material definitions in /PREP7.

! Active UNIT system in Workbench when this object was created: Metric (mm, t, N, s, mV, mA)

! NOTE: Any data that requires units (such as mass) is assumed to be in the consistent solver unit system.

! See Solving Units in the help system for more information.
";

/// 메시 요소 형상. 요소 타입 토큰을 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshKind {
    #[default]
    Tetrahedra,
    Hexahedra,
}

impl MeshKind {
    pub const ALL: [MeshKind; 2] = [MeshKind::Tetrahedra, MeshKind::Hexahedra];

    /// `ET` 명령에 들어갈 요소 타입.
    pub fn element_type(self) -> &'static str {
        match self {
            MeshKind::Tetrahedra => "SOLID92",
            MeshKind::Hexahedra => "SOLID95",
        }
    }
}

/// 생성 요청마다 호출자가 넘기는 재료 파라미터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialParameters {
    /// 온도 [°C]
    pub temperature: f64,
    pub poisson_ratio: f64,
    pub material_name: String,
    pub mesh: MeshKind,
}

impl Default for MaterialParameters {
    fn default() -> Self {
        Self {
            temperature: 22.0,
            poisson_ratio: 0.35,
            material_name: String::new(),
            mesh: MeshKind::Tetrahedra,
        }
    }
}

impl MaterialParameters {
    /// 스크립트 저장 시 제안할 파일 이름.
    pub fn suggested_file_name(&self) -> String {
        let name = self.material_name.trim();
        if name.is_empty() {
            "material.mac".to_string()
        } else {
            let safe: String = name
                .chars()
                .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
                .collect();
            format!("{safe}.mac")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// 샘플이 비어 있음
    EmptyDataset,
    /// 탄성계수 추정 실패
    EstimationFailed(EstimationError),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::EmptyDataset => write!(f, "데이터가 비어 있습니다."),
            GenerationError::EstimationFailed(e) => write!(f, "탄성계수 추정 실패: {e}"),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::EstimationFailed(e) => Some(e),
            GenerationError::EmptyDataset => None,
        }
    }
}

impl From<EstimationError> for GenerationError {
    fn from(value: EstimationError) -> Self {
        GenerationError::EstimationFailed(value)
    }
}

/// 헤더, 재료 명령, `TBPT` 행을 이어 붙인 스크립트를 만든다.
/// 같은 입력에는 항상 같은 바이트열을 돌려준다.
pub fn generate_script(
    params: &MaterialParameters,
    samples: &SampleSequence,
) -> Result<String, GenerationError> {
    if samples.is_empty() {
        return Err(GenerationError::EmptyDataset);
    }
    let modulus = modulus::estimate_modulus(samples)?;

    let mut out = String::from(HEADER);
    // String에 대한 write!는 실패하지 않는다.
    let _ = writeln!(out, "/prep7");
    let _ = writeln!(out, "MPTEMP,,,,,,,,");
    let _ = writeln!(out, "MPTEMP, 1, {}", params.temperature);
    let _ = writeln!(out, "MPDATA, EX, MATID, , {modulus}");
    let _ = writeln!(out, "MPDATA, PRXY, MATID, , {}", params.poisson_ratio);
    let _ = writeln!(out, "ET, MATID, {}", params.mesh.element_type());
    let _ = writeln!(out, "TB, MELA, MATID, 1, {}", samples.len());
    let _ = writeln!(out, "TBTEMP, {}", params.temperature);
    for s in samples {
        let _ = writeln!(out, "TBPT,,{:.4}, {}", s.first / 100.0, s.second);
    }
    log::debug!(
        "generated APDL script: {} rows, E={modulus}, {}",
        samples.len(),
        params.mesh.element_type()
    );
    Ok(out)
}
