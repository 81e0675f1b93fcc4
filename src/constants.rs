use ratatui::style::Color;

pub const TIME_SETTINGS: TimeSettings = TimeSettings {
    frame_ms: 16,
    target_fps: 30,
};

pub const CANVAS: CanvasSettings = CanvasSettings {
    width: 800.0,
    height: 600.0,
};

pub const RAIN_SETTINGS: RainSettings = RainSettings {
    particle_count: 30,
    duration_ms: 10_000,
    spawn_y_min: -200.0,
    spawn_y_max: 0.0,
    recycle_y_min: -100.0,
    recycle_y_max: -20.0,
    size_min: 10.0,
    size_max: 18.0,
    speed_min: 1.0,
    speed_max: 2.5,
};

pub const FILE_PATHS: FilePaths = FilePaths {
    export_file: "registros_agricolas.csv",
    log_file: "seedfall.log",
};

pub const CSV_HEADER: [&str; 4] = ["Cultura", "Área (ha)", "Data", "Lucro (R$)"];

pub const MESSAGES: Messages = Messages {
    invalid_form: "⚠️ Preencha todos os campos corretamente!",
    record_saved: "✅ Registro salvo com sucesso!",
    export_done: "✅ Dados exportados para",
    export_failed: "⚠️ Falha ao exportar:",
};

pub const CURRENCY_PREFIX: &str = "R$";

pub const SEED_COLORS: SeedColors = SeedColors {
    corn: Color::Rgb(255, 215, 0),
    soy: Color::Rgb(100, 200, 100),
    wheat: Color::Rgb(222, 184, 135),
    bean: Color::Rgb(139, 69, 19),
    other: Color::Rgb(120, 120, 120),
};

pub struct TimeSettings {
    pub frame_ms: u64,
    pub target_fps: u64,
}

pub struct CanvasSettings {
    pub width: f32,
    pub height: f32,
}

pub struct RainSettings {
    pub particle_count: usize,
    pub duration_ms: u64,
    pub spawn_y_min: f32,
    pub spawn_y_max: f32,
    pub recycle_y_min: f32,
    pub recycle_y_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
}

pub struct FilePaths {
    pub export_file: &'static str,
    pub log_file: &'static str,
}

pub struct Messages {
    pub invalid_form: &'static str,
    pub record_saved: &'static str,
    pub export_done: &'static str,
    pub export_failed: &'static str,
}

pub struct SeedColors {
    pub corn: Color,
    pub soy: Color,
    pub wheat: Color,
    pub bean: Color,
    pub other: Color,
}
