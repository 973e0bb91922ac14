use stress_strain_toolbox::{
    apdl::MeshKind,
    config::{self, Config},
    i18n::{self, keys, Translator},
    sample::BlankLinePolicy,
};

#[test]
fn config_round_trips_through_toml() {
    let mut cfg = Config::default();
    cfg.material.mesh = MeshKind::Hexahedra;
    cfg.material.material_name = "S235".into();
    cfg.blank_lines = BlankLinePolicy::Skip;
    let text = toml::to_string_pretty(&cfg).unwrap();
    assert_eq!(config::from_toml(&text).unwrap(), cfg);
}

#[test]
fn partial_config_uses_defaults() {
    let cfg = config::from_toml("language = \"ko\"\n[material]\nmesh = \"hexahedra\"\n").unwrap();
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.material.mesh, MeshKind::Hexahedra);
    assert_eq!(cfg.material.temperature, 22.0);
    assert_eq!(cfg.material.poisson_ratio, 0.35);
    assert_eq!(cfg.blank_lines, BlankLinePolicy::Reject);
}

#[test]
fn load_from_writes_defaults_when_missing() {
    let dir = std::env::temp_dir().join(format!("sst_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(config::load_from(&path).unwrap(), cfg);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_config_is_an_error() {
    assert!(matches!(
        config::from_toml("language = ["),
        Err(config::ConfigError::Serde(_))
    ));
}

#[test]
fn unreadable_config_reports_path() {
    // 디렉터리는 존재하지만 파일로 읽을 수 없다.
    let dir = std::env::temp_dir().join(format!("sst_cfg_dir_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let err = config::load_from(&dir).unwrap_err();
    match &err {
        config::ConfigError::Io { path, .. } => assert_eq!(path, &dir),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains(&dir.display().to_string()));
    assert!(std::error::Error::source(&err).is_some());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn translator_languages() {
    let en = Translator::new("en-us");
    assert_eq!(en.language_code(), "en");
    assert_eq!(en.t(keys::BUTTON_PLOT), "Plot Curve");
    let ko = Translator::new("ko");
    assert_eq!(ko.language_code(), "ko");
    assert_eq!(ko.t(keys::ERROR_PREFIX), "오류");
    assert_eq!(ko.t("no.such.key"), "[missing translation]");
}

#[test]
fn explicit_language_wins() {
    assert_eq!(i18n::resolve_language("ko-KR", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en-uk")), "en-us");
    assert_eq!(i18n::resolve_language("de", None), "de-de");
}

#[test]
fn language_pack_flattens_sections() {
    let map = i18n::parse_toml_to_map("[button]\nplot = \"Kurve zeichnen\"\n").unwrap();
    assert_eq!(map.get(keys::BUTTON_PLOT).map(String::as_str), Some("Kurve zeichnen"));
    assert!(i18n::parse_toml_to_map("x = 1").is_none());
}

#[test]
fn bundled_german_pack_overrides() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/locales");
    let tr = Translator::new_with_pack("de-de", Some(dir));
    assert_eq!(tr.lookup(keys::BUTTON_GENERATE), Some("APDL erzeugen"));
    assert_eq!(tr.t(keys::BUTTON_GENERATE), "APDL erzeugen");
}
