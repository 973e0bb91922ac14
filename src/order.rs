//! 변형률/응력 열 순서를 바꾸는 변환. 손실이 있는 best-effort 변환으로 실패하지 않는다.

use serde::{Deserialize, Serialize};

/// 현재 입력이 어떤 열 순서로 되어 있는지 나타내는 표시용 플래그.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputOrder {
    /// 변형률, 응력 순
    #[default]
    StrainStress,
    /// 응력, 변형률 순
    StressStrain,
}

impl InputOrder {
    /// 열을 한 번 바꾼 뒤의 순서.
    pub fn toggled(self) -> Self {
        match self {
            InputOrder::StrainStress => InputOrder::StressStrain,
            InputOrder::StressStrain => InputOrder::StrainStress,
        }
    }
}

/// 각 줄의 두 토큰을 맞바꿔 탭으로 이어 붙인다.
/// 토큰이 정확히 2개가 아닌 줄은 출력에서 빠진다.
pub fn switch_order(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split('\n') {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let [a, b] = tokens.as_slice() {
            out.push_str(b);
            out.push('\t');
            out.push_str(a);
            out.push('\n');
        }
    }
    out
}
