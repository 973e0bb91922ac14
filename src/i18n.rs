use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";

    pub const LABEL_MATERIAL: &str = "material.name";
    pub const LABEL_MESH: &str = "material.mesh";
    pub const LABEL_TEMPERATURE: &str = "material.temperature";
    pub const LABEL_POISSON: &str = "material.poisson";
    pub const MESH_TETRAHEDRA: &str = "mesh.tetrahedra";
    pub const MESH_HEXAHEDRA: &str = "mesh.hexahedra";

    pub const BUTTON_PLOT: &str = "button.plot";
    pub const BUTTON_GENERATE: &str = "button.generate";
    pub const BUTTON_SWITCH: &str = "button.switch";
    pub const BUTTON_SAVE: &str = "button.save";
    pub const LABEL_LENIENT: &str = "input.lenient";
    pub const LABEL_INPUT: &str = "input.heading";
    pub const HINT_INPUT: &str = "input.hint";
    pub const LABEL_OUTPUT: &str = "output.heading";
    pub const LABEL_ORDER: &str = "input.order";
    pub const ORDER_STRAIN_STRESS: &str = "order.strain_stress";
    pub const ORDER_STRESS_STRAIN: &str = "order.stress_strain";

    pub const STATUS_PLOTTED: &str = "status.plotted";
    pub const STATUS_GENERATED: &str = "status.generated";
    pub const STATUS_SWITCHED: &str = "status.switched";
    pub const STATUS_SAVED: &str = "status.saved";
    pub const STATUS_NO_SCRIPT: &str = "status.no_script";
    pub const CHART_EMPTY: &str = "chart.empty";
    pub const CLI_SCRIPT_WRITTEN: &str = "cli.script_written";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en 으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리 → locales/ → 바이너리에 내장된 언어팩 순으로 찾는다. 모두 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        if overrides.is_some() {
            log::debug!("language pack loaded for {lang_code}");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "de" | "de-de" => Some("de-de".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("de") => Some("de-de".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        "de" => Some("de-de".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: [section] key = "value" 를 "section.key" 로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., de-de)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., de)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

/// 언어팩 TOML을 평탄화된 키 맵으로 변환한다. 문자열이 하나도 없으면 None.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "de-de" | "de" => parse_toml_to_map(include_str!("../locales/de-de.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "응력-변형률 곡선 도구",
        LABEL_MATERIAL => "재료 이름:",
        LABEL_MESH => "메시 종류:",
        LABEL_TEMPERATURE => "온도 [°C]:",
        LABEL_POISSON => "포아송 비:",
        MESH_TETRAHEDRA => "사면체 (SOLID92)",
        MESH_HEXAHEDRA => "육면체 (SOLID95)",
        BUTTON_PLOT => "곡선 그리기",
        BUTTON_GENERATE => "APDL 생성",
        BUTTON_SWITCH => "입력 순서 바꾸기",
        BUTTON_SAVE => "스크립트 저장…",
        LABEL_LENIENT => "중간 빈 줄 무시",
        LABEL_INPUT => "입력 데이터 (변형률[%] 응력[MPa])",
        HINT_INPUT => "0.1\t200\n0.2\t380",
        LABEL_OUTPUT => "APDL 출력",
        LABEL_ORDER => "현재 열 순서:",
        ORDER_STRAIN_STRESS => "변형률 → 응력",
        ORDER_STRESS_STRAIN => "응력 → 변형률",
        STATUS_PLOTTED => "곡선을 그렸습니다.",
        STATUS_GENERATED => "APDL 스크립트를 생성했습니다.",
        STATUS_SWITCHED => "열 순서를 바꿨습니다.",
        STATUS_SAVED => "저장했습니다:",
        STATUS_NO_SCRIPT => "먼저 APDL 스크립트를 생성하세요.",
        CHART_EMPTY => "아직 그린 곡선이 없습니다.",
        CLI_SCRIPT_WRITTEN => "스크립트를 저장했습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "Stress-Strain Curve Plotter",
        LABEL_MATERIAL => "Material Name:",
        LABEL_MESH => "Mesh Type:",
        LABEL_TEMPERATURE => "Temperature [°C]:",
        LABEL_POISSON => "Poisson Ratio:",
        MESH_TETRAHEDRA => "Tetrahedrons (SOLID92)",
        MESH_HEXAHEDRA => "Hexahedrons (SOLID95)",
        BUTTON_PLOT => "Plot Curve",
        BUTTON_GENERATE => "Generate APDL",
        BUTTON_SWITCH => "Switch Input Order",
        BUTTON_SAVE => "Save Script…",
        LABEL_LENIENT => "Skip blank lines",
        LABEL_INPUT => "Input data (strain[%] stress[MPa])",
        HINT_INPUT => "0.1\t200\n0.2\t380",
        LABEL_OUTPUT => "APDL output",
        LABEL_ORDER => "Current column order:",
        ORDER_STRAIN_STRESS => "strain → stress",
        ORDER_STRESS_STRAIN => "stress → strain",
        STATUS_PLOTTED => "Curve plotted.",
        STATUS_GENERATED => "APDL script generated.",
        STATUS_SWITCHED => "Input order switched.",
        STATUS_SAVED => "Saved:",
        STATUS_NO_SCRIPT => "Generate an APDL script first.",
        CHART_EMPTY => "No curve plotted yet.",
        CLI_SCRIPT_WRITTEN => "Script written to",
        _ => return None,
    })
}
