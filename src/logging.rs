//! 로그 초기화. RUST_LOG가 없으면 warn 수준으로 출력한다.

/// 바이너리 시작 시 한 번 호출한다. 두 번째 호출부터는 무시된다.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
