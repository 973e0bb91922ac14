#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use stress_strain_toolbox::{
    apdl::{MaterialParameters, MeshKind},
    app::Workbench,
    config,
    curve::{STRAIN_AXIS_LABEL, STRESS_AXIS_LABEL},
    i18n,
    i18n::keys,
    logging,
    order::InputOrder,
    sample::BlankLinePolicy,
};

fn main() -> Result<(), eframe::Error> {
    logging::init();
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko/de-de)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 680.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        log::warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Stress-Strain Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                log::warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 글리프를 위해 시스템 폰트를 폴백으로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 1) assets/fonts/  2) Windows 시스템 폰트  3) 리눅스 Noto CJK 순으로 찾는다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        Path::new("assets/fonts/malgun.ttf").to_path_buf(),
        Path::new("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc").to_path_buf(),
        Path::new("/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc").to_path_buf(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.insert(1, fonts.join("malgun.ttf"));
        candidates.insert(2, fonts.join("gulim.ttc"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found; Korean labels may not render.".into())
}

enum Status {
    Info(String),
    Error(String),
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    bench: Workbench,
    params: MaterialParameters,
    lenient: bool,
    status: Option<Status>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        Self {
            params: config.material.clone(),
            lenient: config.blank_lines == BlankLinePolicy::Skip,
            tr,
            bench: Workbench::default(),
            status: None,
            config,
        }
    }

    fn policy(&self) -> BlankLinePolicy {
        if self.lenient {
            BlankLinePolicy::Skip
        } else {
            BlankLinePolicy::Reject
        }
    }

    fn fail(&mut self, err: impl std::fmt::Display) {
        log::debug!("request failed: {err}");
        self.status = Some(Status::Error(format!(
            "{}: {err}",
            self.tr.t(keys::ERROR_PREFIX)
        )));
    }

    fn on_plot(&mut self) {
        let policy = self.policy();
        match self.bench.plot(&self.params.material_name, policy).map(|_| ()) {
            Ok(_) => self.status = Some(Status::Info(self.tr.t(keys::STATUS_PLOTTED).to_string())),
            Err(e) => self.fail(e),
        }
    }

    fn on_generate(&mut self) {
        let policy = self.policy();
        match self.bench.generate(&self.params, policy).map(|_| ()) {
            Ok(_) => {
                self.status = Some(Status::Info(self.tr.t(keys::STATUS_GENERATED).to_string()));
                self.remember_params();
            }
            Err(e) => self.fail(e),
        }
    }

    fn on_switch(&mut self) {
        self.bench.switch_order();
        self.status = Some(Status::Info(self.tr.t(keys::STATUS_SWITCHED).to_string()));
    }

    fn on_save(&mut self) {
        let Some(script) = self.bench.script.clone() else {
            self.status = Some(Status::Error(self.tr.t(keys::STATUS_NO_SCRIPT).to_string()));
            return;
        };
        let Some(path) = FileDialog::new()
            .set_file_name(self.params.suggested_file_name())
            .add_filter("APDL", &["mac", "inp", "txt"])
            .save_file()
        else {
            return;
        };
        match fs::write(&path, script) {
            Ok(()) => {
                log::info!("saved APDL script to {}", path.display());
                self.status = Some(Status::Info(format!(
                    "{} {}",
                    self.tr.t(keys::STATUS_SAVED),
                    path.display()
                )));
            }
            Err(e) => self.fail(e),
        }
    }

    /// 마지막으로 생성에 성공한 파라미터를 config.toml 에 남긴다.
    fn remember_params(&mut self) {
        self.config.material = self.params.clone();
        self.config.blank_lines = self.policy();
        if let Err(e) = self.config.save() {
            log::warn!("config save failed: {e}");
        }
    }

    fn mesh_label(&self, mesh: MeshKind) -> &str {
        match mesh {
            MeshKind::Tetrahedra => self.tr.t(keys::MESH_TETRAHEDRA),
            MeshKind::Hexahedra => self.tr.t(keys::MESH_HEXAHEDRA),
        }
    }

    fn ui_controls(&mut self, ui: &mut egui::Ui) {
        let selected = self.mesh_label(self.params.mesh).to_string();
        let labels: Vec<(MeshKind, String)> = MeshKind::ALL
            .iter()
            .map(|m| (*m, self.mesh_label(*m).to_string()))
            .collect();
        let tr = &self.tr;
        let params = &mut self.params;
        egui::Grid::new("material_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::LABEL_MATERIAL));
                ui.text_edit_singleline(&mut params.material_name);
                ui.end_row();

                ui.label(tr.t(keys::LABEL_MESH));
                egui::ComboBox::from_id_source("mesh_kind")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (mesh, label) in labels {
                            ui.selectable_value(&mut params.mesh, mesh, label);
                        }
                    });
                ui.end_row();

                ui.label(tr.t(keys::LABEL_TEMPERATURE));
                ui.add(egui::DragValue::new(&mut params.temperature).speed(0.5));
                ui.end_row();

                ui.label(tr.t(keys::LABEL_POISSON));
                ui.add(
                    egui::DragValue::new(&mut params.poisson_ratio)
                        .speed(0.005)
                        .clamp_range(0.0..=0.5),
                );
                ui.end_row();
            });
        ui.separator();
        ui.checkbox(&mut self.lenient, self.tr.t(keys::LABEL_LENIENT).to_string());
        ui.separator();
        if ui.button(self.tr.t(keys::BUTTON_PLOT).to_string()).clicked() {
            self.on_plot();
        }
        if ui.button(self.tr.t(keys::BUTTON_GENERATE).to_string()).clicked() {
            self.on_generate();
        }
        if ui.button(self.tr.t(keys::BUTTON_SWITCH).to_string()).clicked() {
            self.on_switch();
        }
        if ui.button(self.tr.t(keys::BUTTON_SAVE).to_string()).clicked() {
            self.on_save();
        }
        ui.separator();
        let order = match self.bench.order {
            InputOrder::StrainStress => self.tr.t(keys::ORDER_STRAIN_STRESS),
            InputOrder::StressStrain => self.tr.t(keys::ORDER_STRESS_STRAIN),
        };
        ui.label(format!("{} {order}", self.tr.t(keys::LABEL_ORDER)));
        match &self.status {
            Some(Status::Info(msg)) => {
                ui.label(msg.as_str());
            }
            Some(Status::Error(msg)) => {
                ui.colored_label(egui::Color32::RED, msg.as_str());
            }
            None => {}
        }
    }

    fn ui_chart(&self, ui: &mut egui::Ui) {
        let Some(curve) = &self.bench.curve else {
            ui.label(self.tr.t(keys::CHART_EMPTY));
            return;
        };
        ui.heading(curve.title());
        Plot::new("stress_strain_plot")
            .legend(Legend::default())
            .x_axis_label(STRAIN_AXIS_LABEL)
            .y_axis_label(STRESS_AXIS_LABEL)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(PlotPoints::from(curve.points.clone())).name(&curve.name));
                plot_ui.points(Points::new(PlotPoints::from(curve.points.clone())).radius(2.5));
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.heading(self.tr.t(keys::APP_TITLE));
        });

        egui::SidePanel::left("controls")
            .resizable(true)
            .min_width(220.0)
            .default_width(260.0)
            .show(ctx, |ui| self.ui_controls(ui));

        egui::SidePanel::right("chart")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| self.ui_chart(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                cols[0].label(self.tr.t(keys::LABEL_INPUT));
                egui::ScrollArea::vertical()
                    .id_source("input_scroll")
                    .show(&mut cols[0], |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut self.bench.input)
                                .hint_text(self.tr.t(keys::HINT_INPUT))
                                .code_editor()
                                .desired_rows(20)
                                .desired_width(f32::INFINITY),
                        );
                    });

                cols[1].label(self.tr.t(keys::LABEL_OUTPUT));
                let mut shown = self.bench.script.as_deref().unwrap_or_default();
                egui::ScrollArea::vertical()
                    .id_source("output_scroll")
                    .show(&mut cols[1], |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut shown)
                                .code_editor()
                                .desired_rows(20)
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_generate_keeps_previous_script() {
        let mut app = GuiApp::new(config::Config::default());
        app.bench.input = "1 100\n2 180\n".into();
        app.bench.generate(&app.params, BlankLinePolicy::Reject).unwrap();
        let before = app.bench.script.clone();

        app.bench.input = "0 50\n".into();
        let policy = app.policy();
        assert!(app.bench.generate(&app.params, policy).is_err());
        assert_eq!(app.bench.script, before);
    }

    #[test]
    fn switch_updates_order_flag() {
        let mut app = GuiApp::new(config::Config::default());
        app.bench.input = "1 100\n".into();
        app.on_switch();
        assert_eq!(app.bench.input, "100\t1\n");
        assert_eq!(app.bench.order, InputOrder::StressStrain);
        assert!(matches!(app.status, Some(Status::Info(_))));
    }

    #[test]
    fn plot_error_sets_status() {
        let mut app = GuiApp::new(config::Config::default());
        app.bench.input = "1 2 3".into();
        app.on_plot();
        assert!(matches!(app.status, Some(Status::Error(_))));
        assert!(app.bench.curve.is_none());
    }

    #[test]
    fn lenient_checkbox_selects_skip_policy() {
        let mut app = GuiApp::new(config::Config::default());
        assert_eq!(app.policy(), BlankLinePolicy::Reject);
        app.lenient = true;
        assert_eq!(app.policy(), BlankLinePolicy::Skip);
    }
}
