//! 자유 텍스트로 입력된 (변형률 %, 응력) 샘플을 파싱한다.

use serde::{Deserialize, Serialize};

/// 입력 한 줄에서 얻은 두 개의 숫자 필드.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub first: f64,
    pub second: f64,
}

impl Sample {
    pub fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.first, self.second)
    }
}

/// 입력 줄 순서를 그대로 유지하는 샘플 목록.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSequence(Vec<Sample>);

impl SampleSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.0
    }

    /// 탭으로 구분된 줄 단위 텍스트로 되돌린다. 원래 공백 형식은 보존하지 않는다.
    pub fn to_text(&self) -> String {
        self.0.iter().map(|s| format!("{s}\n")).collect()
    }
}

impl From<Vec<Sample>> for SampleSequence {
    fn from(value: Vec<Sample>) -> Self {
        SampleSequence(value)
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for SampleSequence {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// 중간에 끼어 있는 빈 줄을 어떻게 다룰지 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlankLinePolicy {
    /// 빈 줄도 잘못된 행으로 본다. 기본값.
    #[default]
    Reject,
    /// 빈 줄은 건너뛴다.
    Skip,
}

/// 샘플 파싱 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 토큰 수가 정확히 2개가 아닌 행 (line은 1부터 시작)
    MalformedRow { line: usize, content: String },
    /// 숫자로 해석할 수 없는 토큰
    NotANumber { line: usize, token: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedRow { line, content } => {
                write!(f, "{line}번째 줄은 두 개의 값이 필요합니다: '{content}'")
            }
            ParseError::NotANumber { line, token } => {
                write!(f, "{line}번째 줄의 '{token}'은(는) 숫자가 아닙니다.")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// 엄격 모드로 파싱한다. 끝부분의 빈 줄을 제외한 모든 빈 줄은 오류.
pub fn parse(text: &str) -> Result<SampleSequence, ParseError> {
    parse_with(text, BlankLinePolicy::Reject)
}

/// 정책을 지정해 파싱한다. 한 줄이라도 실패하면 전체가 실패한다.
pub fn parse_with(text: &str, policy: BlankLinePolicy) -> Result<SampleSequence, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);

    let mut samples = Vec::with_capacity(end);
    for (idx, raw) in lines[..end].iter().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() && policy == BlankLinePolicy::Skip {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let [a, b] = tokens.as_slice() else {
            return Err(ParseError::MalformedRow {
                line,
                content: trimmed.to_string(),
            });
        };
        samples.push(Sample::new(parse_number(line, a)?, parse_number(line, b)?));
    }
    log::debug!("parsed {} samples", samples.len());
    Ok(SampleSequence(samples))
}

fn parse_number(line: usize, token: &str) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::NotANumber {
            line,
            token: token.to_string(),
        }),
    }
}
