use crate::config::SurfaceConfig;
use crate::error::{ExportError, SurfaceError};
use crate::export;
use crate::input::InputHandler;
use crate::panels::{self, PanelAction};
use crate::surface::DrawingSurface;

/// Nothing here is persisted: every session starts with an empty surface.
pub struct SketchApp {
    config: SurfaceConfig,
    surface: DrawingSurface,
    input: InputHandler,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SurfaceConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SurfaceConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: SurfaceConfig) -> Self {
        Self {
            surface: DrawingSurface::new(&config),
            input: InputHandler::new(),
            config,
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::Undo => {
                self.surface.undo();
            }
            PanelAction::Redo => {
                self.surface.redo();
            }
            PanelAction::Reset => self.surface.reset(),
            PanelAction::Export => self.export(),
        }
    }

    fn export(&self) {
        match export::export_surface(&self.surface, &self.config.export_filename) {
            Ok(_) => {}
            Err(ExportError::Surface(SurfaceError::NotMounted)) => {
                log::debug!("Skipping export, surface not shown yet");
            }
            Err(err) => log::error!("Export failed: {}", err),
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panels must be added before the central panel
        let actions = panels::tools_panel(&mut self.surface, ctx);

        self.surface.unmount();
        panels::central_panel(&mut self.surface, &mut self.input, ctx);

        for action in actions {
            self.apply(action);
        }
    }
}
