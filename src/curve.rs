//! 차트 렌더러에 넘길 이름 붙은 곡선 모델.

use crate::sample::SampleSequence;

pub const STRAIN_AXIS_LABEL: &str = "Strain [-]";
pub const STRESS_AXIS_LABEL: &str = "Stress [MPa]";

/// 퍼센트 변형률을 분율로 바꾼 (x, y) 점 목록.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl Curve {
    /// 차트 제목. 예: "S355 --- Stress-Strain Curve"
    pub fn title(&self) -> String {
        format!("{} --- Stress-Strain Curve", self.name)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// 첫 번째 필드를 100으로 나눠 분율 변형률로 만든다. 두 번째 필드는 그대로.
pub fn build_curve(samples: &SampleSequence, name: &str) -> Curve {
    Curve {
        name: name.to_string(),
        points: samples
            .iter()
            .map(|s| [s.first / 100.0, s.second])
            .collect(),
    }
}
