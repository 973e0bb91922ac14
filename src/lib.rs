//! 응력-변형률 데이터 처리 로직을 라이브러리로 분리하여 CLI 와 GUI 가 함께 쓴다.

pub mod apdl;
pub mod app;
pub mod config;
pub mod curve;
pub mod i18n;
pub mod logging;
pub mod modulus;
pub mod order;
pub mod sample;
