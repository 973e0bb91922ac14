//! GUI/CLI 가 공통으로 쓰는 요청/응답 계층.

use crate::apdl::{self, GenerationError, MaterialParameters};
use crate::config::ConfigError;
use crate::curve::{self, Curve};
use crate::order::{self, InputOrder};
use crate::sample::{self, BlankLinePolicy, ParseError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 입력 데이터 파싱 오류
    Parse(ParseError),
    /// 스크립트 생성 오류
    Generation(GenerationError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Parse(e) => write!(f, "입력 데이터 오류: {e}"),
            AppError::Generation(e) => write!(f, "APDL 생성 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Parse(e) => Some(e),
            AppError::Generation(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ParseError> for AppError {
    fn from(value: ParseError) -> Self {
        AppError::Parse(value)
    }
}

impl From<GenerationError> for AppError {
    fn from(value: GenerationError) -> Self {
        AppError::Generation(value)
    }
}

/// 텍스트를 파싱해 곡선을 만든다.
pub fn plot(text: &str, name: &str, policy: BlankLinePolicy) -> Result<Curve, AppError> {
    let samples = sample::parse_with(text, policy)?;
    Ok(curve::build_curve(&samples, name))
}

/// 텍스트를 파싱해 APDL 스크립트를 만든다.
pub fn generate(
    text: &str,
    params: &MaterialParameters,
    policy: BlankLinePolicy,
) -> Result<String, AppError> {
    let samples = sample::parse_with(text, policy)?;
    Ok(apdl::generate_script(params, &samples)?)
}

/// 한 사용자의 작업 상태. 실패한 요청은 이전 결과를 그대로 둔다.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    pub input: String,
    pub order: InputOrder,
    pub curve: Option<Curve>,
    pub script: Option<String>,
}

impl Workbench {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// 입력 열을 맞바꾸고 순서 플래그를 뒤집는다.
    pub fn switch_order(&mut self) {
        self.input = order::switch_order(&self.input);
        self.order = self.order.toggled();
    }

    pub fn plot(&mut self, name: &str, policy: BlankLinePolicy) -> Result<&Curve, AppError> {
        let curve = plot(&self.input, name, policy)?;
        Ok(self.curve.insert(curve))
    }

    pub fn generate(
        &mut self,
        params: &MaterialParameters,
        policy: BlankLinePolicy,
    ) -> Result<&str, AppError> {
        let script = generate(&self.input, params, policy)?;
        Ok(self.script.insert(script).as_str())
    }
}
