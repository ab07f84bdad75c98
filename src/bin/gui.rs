#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::{fs, path::Path, path::PathBuf};

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use physics_edu_toolbox::{
    config, hooke, logging,
    pressure::PressureMode,
    quantity::QuantityKind,
    report::{self, ReportLine},
    state::{
        ActiveScreen, IdealGasState, MechanicalPressureState, PressureScreen, SpringScreen, Tab,
    },
};

#[derive(Parser)]
#[command(name = "physics_edu_toolbox")]
struct GuiArgs {
    /// Ruta del archivo de configuración
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let log = logging::init();
    let app_cfg = config::load_or_fallback(&args.config);
    log.apply_config_filter(&app_cfg.log_filter);
    tracing::info!(path = %app_cfg.path().display(), "starting GUI");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([520.0, 860.0])
        .with_title("Física/Química")
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Física/Química",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_pixels_per_point(app_cfg.ui_scale);
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    screen: ActiveScreen,
    show_settings_modal: bool,
    show_formula_modal: bool,
    save_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let screen = ActiveScreen::Spring(SpringScreen::with_time_constant(
            config.animation_time_constant_s,
        ));
        Self {
            config,
            screen,
            show_settings_modal: false,
            show_formula_modal: false,
            save_status: None,
        }
    }

    fn open_tab(&mut self, tab: Tab) {
        self.screen.open(tab, self.config.animation_time_constant_s);
    }

    /// 스프링 그림 보간을 dt만큼 진행한다. 다시 그려야 하면 true.
    fn advance_animation(&mut self, dt_s: f64) -> bool {
        match &mut self.screen {
            ActiveScreen::Spring(spring) => spring.advance(dt_s),
            ActiveScreen::Pressure(_) => false,
        }
    }

    fn apply_time_constant(&mut self) {
        if let ActiveScreen::Spring(spring) = &mut self.screen {
            spring.set_time_constant(self.config.animation_time_constant_s);
        }
    }

    fn ui_tabs(&mut self, ui: &mut egui::Ui) {
        ui.columns(Tab::ALL.len(), |cols| {
            for (col, tab) in cols.iter_mut().zip(Tab::ALL) {
                let selected = self.screen.tab() == tab;
                let button = egui::Button::new(egui::RichText::new(tab.label()).strong())
                    .fill(if selected {
                        col.visuals().selection.bg_fill
                    } else {
                        col.visuals().extreme_bg_color
                    })
                    .min_size(egui::vec2(col.available_width(), 32.0));
                if col.add(button).clicked() {
                    self.open_tab(tab);
                }
            }
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new("Ajustes")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Escala de la interfaz");
                let scale_slider =
                    egui::Slider::new(&mut self.config.ui_scale, 0.8..=1.6).suffix(" x");
                if ui.add(scale_slider).changed() {
                    ctx.set_pixels_per_point(self.config.ui_scale);
                }
                ui.separator();
                ui.checkbox(&mut self.config.always_on_top, "Siempre visible");
                ui.separator();
                ui.label("Transparencia de la ventana");
                ui.add(egui::Slider::new(&mut self.config.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                ui.label("Suavizado del resorte (constante de tiempo)");
                let tau = egui::Slider::new(
                    &mut self.config.animation_time_constant_s,
                    hooke::smoothing::MIN_TIME_CONSTANT_S..=1.0,
                )
                .suffix(" s");
                if ui.add(tau).changed() {
                    self.apply_time_constant();
                }
                ui.separator();
                if ui.button("Guardar").clicked() {
                    self.config.sanitize();
                    self.save_status = Some(match self.config.save() {
                        Ok(()) => "Guardado.".to_string(),
                        Err(e) => {
                            tracing::warn!(error = %e, "settings save failed");
                            format!("Error al guardar: {e}")
                        }
                    });
                }
                if let Some(msg) = &self.save_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    fn ui_formulas(&mut self, ctx: &egui::Context) {
        egui::Window::new("Fórmulas")
            .collapsible(true)
            .resizable(true)
            .open(&mut self.show_formula_modal)
            .show(ctx, |ui| {
                ui.heading("Ley de Hooke");
                ui.label("x = m · g / k   (g = 9.81 m/s²)");
                ui.label("F = k · x,   P = m · g");
                ui.separator();
                ui.heading("Presión mecánica");
                ui.label("P = F / A,   1 bar = 100000 Pa");
                ui.separator();
                ui.heading("Gas ideal");
                ui.label("P = n R T / V,   R = 8.314462618 J/(mol·K)");
                ui.label("1 atm = 101325 Pa");
            });
    }
}

fn slider_row(ui: &mut egui::Ui, kind: QuantityKind, value: f64) -> Option<f64> {
    let domain = kind.domain();
    let mut edited = value;
    ui.label(kind.format_input(value));
    let slider = egui::Slider::new(&mut edited, domain.min..=domain.max).show_value(false);
    let changed = ui
        .add_sized([ui.available_width(), 20.0], slider)
        .changed();
    changed.then_some(edited)
}

fn result_card(ui: &mut egui::Ui, lines: &[ReportLine], note: Option<&str>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        for line in lines {
            ui.label(egui::RichText::new(line.label).small().weak());
            ui.label(egui::RichText::new(&line.value).size(16.0).strong());
        }
        if let Some(note) = note {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(note).small().weak());
        }
    });
}

fn pt(x: f64, y: f64) -> egui::Pos2 {
    egui::pos2(x as f32, y as f32)
}

/// 천장, 코일, 추, 바닥선을 그린다. 좌표는 그림 영역 좌상단 기준 px.
fn spring_diagram(ui: &mut egui::Ui, length_px: f64) {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), 320.0), egui::Sense::hover());
    let rect = response.rect;
    let visuals = ui.visuals();
    let primary = visuals.selection.bg_fill;
    let secondary = visuals.hyperlink_color;
    let tertiary = visuals.warn_fg_color;
    let outline = visuals.widgets.noninteractive.bg_stroke.color;

    let ox = rect.left() as f64;
    let oy = rect.top() as f64;
    let center_x = ox + rect.width() as f64 / 2.0;
    let top_y = oy + hooke::TOP_MARGIN_PX;
    let bottom_y = top_y + length_px;

    let ceiling_y = top_y - hooke::CEILING_OFFSET_PX;
    painter.line_segment(
        [
            pt(center_x - hooke::CEILING_HALF_WIDTH_PX, ceiling_y),
            pt(center_x + hooke::CEILING_HALF_WIDTH_PX, ceiling_y),
        ],
        egui::Stroke::new(8.0, primary),
    );

    let coil: Vec<egui::Pos2> = hooke::coil_polyline(center_x, top_y, bottom_y)
        .into_iter()
        .map(|(x, y)| pt(x, y))
        .collect();
    painter.add(egui::Shape::line(coil, egui::Stroke::new(6.0, secondary)));

    let block = egui::Rect::from_min_size(
        pt(center_x - hooke::BLOCK_WIDTH_PX / 2.0, bottom_y),
        egui::vec2(hooke::BLOCK_WIDTH_PX as f32, hooke::BLOCK_HEIGHT_PX as f32),
    );
    painter.rect_filled(block, 0.0, tertiary);

    let floor_y = bottom_y + hooke::BLOCK_HEIGHT_PX;
    painter.line_segment(
        [
            pt(center_x - hooke::FLOOR_HALF_WIDTH_PX, floor_y),
            pt(center_x + hooke::FLOOR_HALF_WIDTH_PX, floor_y),
        ],
        egui::Stroke::new(4.0, outline),
    );
}

fn ui_spring(ui: &mut egui::Ui, screen: &mut SpringScreen) {
    ui.vertical_centered(|ui| {
        ui.heading("Simulador de resorte (Ley de Hooke)");
    });
    ui.add_space(12.0);
    spring_diagram(ui, screen.displayed_length_px());
    ui.add_space(8.0);

    let state = *screen.state();
    if let Some(v) = slider_row(ui, QuantityKind::Mass, state.mass_kg()) {
        screen.set_mass_kg(v);
    }
    if let Some(v) = slider_row(ui, QuantityKind::SpringConstant, state.k_n_per_m()) {
        screen.set_k_n_per_m(v);
    }

    ui.add_space(8.0);
    let result = screen.state().evaluate();
    result_card(ui, &report::spring_report(&result), Some(report::SPRING_NOTE));
}

fn ui_mechanical(ui: &mut egui::Ui, state: &mut MechanicalPressureState) {
    ui.label(PressureMode::Mechanical.formula());
    ui.add_space(8.0);
    if let Some(v) = slider_row(ui, QuantityKind::Force, state.force_n()) {
        state.set_force_n(v);
    }
    if let Some(v) = slider_row(ui, QuantityKind::Area, state.area_m2()) {
        state.set_area_m2(v);
    }
    ui.add_space(8.0);
    result_card(ui, &report::mechanical_report(&state.evaluate()), None);
}

fn ui_ideal_gas(ui: &mut egui::Ui, state: &mut IdealGasState) {
    ui.label(PressureMode::IdealGas.formula());
    ui.add_space(8.0);
    if let Some(v) = slider_row(ui, QuantityKind::AmountOfSubstance, state.n_mol()) {
        state.set_n_mol(v);
    }
    if let Some(v) = slider_row(ui, QuantityKind::Temperature, state.temperature_k()) {
        state.set_temperature_k(v);
    }
    if let Some(v) = slider_row(ui, QuantityKind::Volume, state.volume_m3()) {
        state.set_volume_m3(v);
    }
    ui.add_space(8.0);
    result_card(
        ui,
        &report::ideal_gas_report(&state.evaluate()),
        Some(report::IDEAL_GAS_NOTE),
    );
}

fn ui_pressure(ui: &mut egui::Ui, screen: &mut PressureScreen) {
    ui.columns(PressureMode::ALL.len(), |cols| {
        for (col, mode) in cols.iter_mut().zip(PressureMode::ALL) {
            let chip = col.add_sized(
                [col.available_width(), 28.0],
                egui::SelectableLabel::new(screen.mode() == mode, mode.label()),
            );
            if chip.clicked() {
                screen.select_mode(mode);
            }
        }
    });
    ui.add_space(12.0);
    match screen.mode() {
        PressureMode::Mechanical => ui_mechanical(ui, screen.mechanical_mut()),
        PressureMode::IdealGas => ui_ideal_gas(ui, screen.ideal_gas_mut()),
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(
            if self.config.always_on_top {
                egui::WindowLevel::AlwaysOnTop
            } else {
                egui::WindowLevel::Normal
            },
        ));

        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        let alpha = self.config.window_alpha;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Física/Química");
                ui.separator();
                if ui.button("Fórmulas").clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button("Ajustes").clicked() {
                    self.show_settings_modal = true;
                }
            });
            ui.add_space(4.0);
            self.ui_tabs(ui);
            ui.add_space(4.0);
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }
        if self.show_formula_modal {
            self.ui_formulas(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match &mut self.screen {
                    ActiveScreen::Spring(spring) => ui_spring(ui, spring),
                    ActiveScreen::Pressure(pressure) => ui_pressure(ui, pressure),
                });
        });

        let dt = f64::from(ctx.input(|i| i.stable_dt));
        if self.advance_animation(dt) {
            ctx.request_repaint();
        }
    }
}
