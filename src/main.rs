use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stress_strain_toolbox::{
    apdl::{MaterialParameters, MeshKind},
    app::{self, AppError},
    config, i18n, logging, order,
    sample::BlankLinePolicy,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plot stress-strain samples and generate APDL material scripts."
)]
struct Cli {
    /// 샘플 텍스트 파일. 생략하면 stdin 을 읽는다.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// auto/ko/en-us/de-de
    #[arg(short = 'L', long, default_value = "auto", global = true)]
    lang: String,

    /// 중간 빈 줄을 오류 대신 건너뛴다.
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 곡선 점을 "strain,stress" CSV 로 출력한다.
    Plot {
        #[arg(long)]
        name: Option<String>,
    },
    /// APDL 재료 스크립트를 생성한다.
    Generate(GenerateArgs),
    /// 두 열을 맞바꾼 텍스트를 출력한다.
    Switch,
}

/// 생략한 값은 config.toml 의 [material] 값을 쓴다.
#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long)]
    temperature: Option<f64>,
    #[arg(long)]
    poisson: Option<f64>,
    #[arg(long)]
    material: Option<String>,
    #[arg(long, value_enum, ignore_case = true)]
    mesh: Option<MeshArg>,
    /// 출력 파일. 생략하면 stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn params(&self, defaults: &MaterialParameters) -> MaterialParameters {
        MaterialParameters {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            poisson_ratio: self.poisson.unwrap_or(defaults.poisson_ratio),
            material_name: self
                .material
                .clone()
                .unwrap_or_else(|| defaults.material_name.clone()),
            mesh: self.mesh.map(MeshKind::from).unwrap_or(defaults.mesh),
        }
    }
}

/// --lenient 가 있으면 설정과 무관하게 빈 줄을 건너뛴다.
fn blank_line_policy(lenient: bool, cfg: &config::Config) -> BlankLinePolicy {
    if lenient {
        BlankLinePolicy::Skip
    } else {
        cfg.blank_lines
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MeshArg {
    Tetrahedra,
    Hexahedra,
}

impl From<MeshArg> for MeshKind {
    fn from(value: MeshArg) -> Self {
        match value {
            MeshArg::Tetrahedra => MeshKind::Tetrahedra,
            MeshArg::Hexahedra => MeshKind::Hexahedra,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() {
    logging::init();
    let cli = Cli::parse();
    let cfg = config::load_or_default().unwrap_or_else(|e| {
        log::warn!("config.toml 을 읽지 못해 기본값을 사용합니다: {e}");
        config::Config::default()
    });
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::debug!("language {lang} (built-in strings: {})", tr.language_code());

    if let Err(err) = try_run(cli, &cfg, &tr) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli, cfg: &config::Config, tr: &i18n::Translator) -> Result<(), AppError> {
    let text = read_input(cli.input.as_ref())?;
    let policy = blank_line_policy(cli.lenient, cfg);

    match cli.command {
        Command::Plot { name } => {
            let name = name.unwrap_or_else(|| cfg.material.material_name.clone());
            let curve = app::plot(&text, &name, policy)?;
            println!("# {}", curve.title());
            println!("strain,stress");
            for [x, y] in &curve.points {
                println!("{x},{y}");
            }
        }
        Command::Generate(args) => {
            let params = args.params(&cfg.material);
            let script = app::generate(&text, &params, policy)?;
            match args.output {
                Some(path) => {
                    fs::write(&path, script)?;
                    println!("{} {}", tr.t(i18n::keys::CLI_SCRIPT_WRITTEN), path.display());
                }
                None => print!("{script}"),
            }
        }
        Command::Switch => print!("{}", order::switch_order(&text)),
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String, AppError> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("cli args")
    }

    #[test]
    fn mesh_flag_maps_to_element_kind() {
        let cli = parse(&["cli", "generate", "--mesh", "HEXAHEDRA"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let params = args.params(&MaterialParameters::default());
        assert_eq!(params.mesh, MeshKind::Hexahedra);
        assert_eq!(MeshKind::from(MeshArg::Tetrahedra), MeshKind::Tetrahedra);
        assert!(Cli::try_parse_from(["cli", "generate", "--mesh", "prism"]).is_err());
    }

    #[test]
    fn omitted_flags_fall_back_to_config() {
        let defaults = MaterialParameters {
            temperature: 80.0,
            poisson_ratio: 0.3,
            material_name: "S235".into(),
            mesh: MeshKind::Hexahedra,
        };
        let cli = parse(&["cli", "generate", "--poisson", "0.28", "-o", "out.mac"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let params = args.params(&defaults);
        assert_eq!(params.temperature, 80.0);
        assert_eq!(params.poisson_ratio, 0.28);
        assert_eq!(params.material_name, "S235");
        assert_eq!(params.mesh, MeshKind::Hexahedra);
        assert_eq!(args.output, Some(PathBuf::from("out.mac")));
    }

    #[test]
    fn lenient_flag_overrides_config() {
        let cfg = config::Config::default();
        assert_eq!(blank_line_policy(false, &cfg), BlankLinePolicy::Reject);
        assert_eq!(blank_line_policy(true, &cfg), BlankLinePolicy::Skip);

        let skip_cfg = config::Config {
            blank_lines: BlankLinePolicy::Skip,
            ..Default::default()
        };
        assert_eq!(blank_line_policy(false, &skip_cfg), BlankLinePolicy::Skip);

        let cli = parse(&["cli", "switch", "--lenient", "--input", "data.txt"]);
        assert!(cli.lenient);
        assert_eq!(cli.input, Some(PathBuf::from("data.txt")));
    }
}
