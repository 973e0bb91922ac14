//! 첫 번째 샘플로부터 탄성계수를 근사한다.

use crate::sample::SampleSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationError {
    /// 샘플이 하나도 없음
    EmptyDataset,
    /// 첫 샘플의 변형률이 0
    DivisionByZero,
}

impl std::fmt::Display for EstimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimationError::EmptyDataset => write!(f, "데이터가 비어 있습니다."),
            EstimationError::DivisionByZero => {
                write!(f, "첫 번째 변형률이 0이라 탄성계수를 계산할 수 없습니다.")
            }
        }
    }
}

impl std::error::Error for EstimationError {}

/// E ≈ σ₁ / (ε₁[%] / 100)
pub fn estimate_modulus(samples: &SampleSequence) -> Result<f64, EstimationError> {
    let first = samples.first().ok_or(EstimationError::EmptyDataset)?;
    let strain = first.first / 100.0;
    if strain == 0.0 {
        return Err(EstimationError::DivisionByZero);
    }
    let modulus = first.second / strain;
    // 아주 작은 변형률에서는 오버플로로 inf가 나올 수 있다.
    if !modulus.is_finite() {
        return Err(EstimationError::DivisionByZero);
    }
    Ok(modulus)
}
