use crate::config::SurfaceConfig;
use crate::error::{ExportResult, SurfaceError};
use crate::history::StrokeHistory;
use crate::input::InputEvent;
use crate::scene::Scene;
use crate::stroke::{Stroke, StrokeStyle};
use crate::style::StyleState;
use egui::{Color32, Pos2, Rect, Vec2};

/// Strokes with fewer points than this are discarded on commit.
pub const MIN_STROKE_POINTS: usize = 2;

/// Whether a gesture is in progress
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawState {
    #[default]
    Idle,
    Drawing {
        /// Surface-local points, first one is the origin
        path: Vec<Pos2>,
    },
}

impl DrawState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn path(&self) -> &[Pos2] {
        match self {
            Self::Drawing { path } => path,
            Self::Idle => &[],
        }
    }
}

/// Drawing surface controller: owns the in-progress stroke, the committed
/// strokes with their redo history, and the global style.
///
/// It never touches a live egui context; the widget in [`crate::panels`]
/// feeds it input and paints its [`Scene`].
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    size: Vec2,
    state: DrawState,
    history: StrokeHistory,
    style: StyleState,
    /// On-screen rect from the last frame the surface was shown
    screen_rect: Option<Rect>,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}

impl DrawingSurface {
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            size: config.size(),
            state: DrawState::Idle,
            history: StrokeHistory::new(),
            style: StyleState::from_config(config),
            screen_rect: None,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Points of the in-progress stroke, empty when idle.
    pub fn current_path(&self) -> &[Pos2] {
        self.state.path()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    // --- Mounting and coordinate mapping ---

    /// Record where the surface sits on screen this frame.
    pub fn mount(&mut self, screen_rect: Rect) {
        self.screen_rect = Some(screen_rect);
    }

    pub fn unmount(&mut self) {
        self.screen_rect = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.screen_rect.is_some()
    }

    pub fn screen_rect(&self) -> Option<Rect> {
        self.screen_rect
    }

    /// Translate a screen position into surface-local coordinates.
    ///
    /// Positions outside the surface are not clamped.
    pub fn map_pointer(&self, screen_pos: Pos2) -> Result<Pos2, SurfaceError> {
        let rect = self.screen_rect.ok_or(SurfaceError::NotMounted)?;
        Ok((screen_pos - rect.min).to_pos2())
    }

    // --- Pointer entry points ---

    pub fn pointer_down(&mut self, screen_pos: Pos2) {
        match self.map_pointer(screen_pos) {
            Ok(point) => self.start(point),
            Err(err) => log::debug!("Dropping pointer down: {}", err),
        }
    }

    pub fn pointer_move(&mut self, screen_pos: Pos2) {
        if !self.is_drawing() {
            return;
        }
        match self.map_pointer(screen_pos) {
            Ok(point) => self.extend(point),
            Err(err) => log::debug!("Dropping pointer move: {}", err),
        }
    }

    pub fn pointer_up(&mut self) {
        self.commit();
    }

    pub fn pointer_leave(&mut self) {
        self.commit();
    }

    /// Dispatch a batch of translated input events in order.
    pub fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::PointerDown { position } => self.pointer_down(position),
                InputEvent::PointerMove { position } => self.pointer_move(position),
                InputEvent::PointerUp { .. } => self.pointer_up(),
                InputEvent::PointerLeave => self.pointer_leave(),
            }
        }
    }

    // --- Stroke lifecycle ---

    /// Begin a stroke at `point`. An unfinished stroke is dropped rather than
    /// committed, which covers a missed release (e.g. lost pointer capture).
    pub fn start(&mut self, point: Pos2) {
        if self.is_drawing() {
            log::debug!("Restarting stroke without a prior commit");
        }
        self.state = DrawState::Drawing { path: vec![point] };
    }

    /// Append a point to the in-progress stroke. Ignored while idle.
    pub fn extend(&mut self, point: Pos2) {
        if let DrawState::Drawing { path } = &mut self.state {
            path.push(point);
        }
    }

    /// Finish the in-progress stroke, freezing the current style into it.
    ///
    /// Returns true if a stroke was appended. Always ends the gesture.
    pub fn commit(&mut self) -> bool {
        let DrawState::Drawing { path } = std::mem::take(&mut self.state) else {
            return false;
        };

        if path.len() < MIN_STROKE_POINTS {
            log::debug!("Discarding stroke with {} point(s)", path.len());
            return false;
        }

        let stroke = Stroke::new_ref(path, self.style.snapshot());
        log::info!("Committed stroke with {} points", stroke.points().len());
        self.history.push(stroke);
        true
    }

    /// Remove the last committed stroke. Abandons any in-progress stroke.
    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.history.undo() else {
            log::debug!("Nothing to undo");
            return false;
        };
        self.state = DrawState::Idle;
        log::info!(
            "Undo stroke ({} points), {} left",
            stroke.points().len(),
            self.history.undo_len()
        );
        true
    }

    /// Restore the most recently undone stroke on top of the paint order.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.history.redo() else {
            log::debug!("Nothing to redo");
            return false;
        };
        log::info!(
            "Redo stroke ({} points), {} undone left",
            stroke.points().len(),
            self.history.redo_len()
        );
        true
    }

    /// Drop every stroke, the redo history and the in-progress stroke.
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = DrawState::Idle;
        log::info!("Surface cleared");
    }

    // --- Style ---

    pub fn set_line_color(&mut self, color: Color32) {
        self.style.set_line_color(color);
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.style.set_line_width(width);
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        self.style.set_halo_color(color);
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.set_halo_width(width);
    }

    /// Style the in-progress stroke is previewed with and would commit with.
    pub fn current_style(&self) -> StrokeStyle {
        self.style.snapshot()
    }

    // --- Output ---

    /// Project the current state into paintable layers.
    pub fn scene(&self) -> Scene {
        Scene::from_surface(self)
    }

    /// Serialize the full current rendering, in-progress stroke included.
    pub fn export_svg(&self) -> ExportResult<String> {
        if !self.is_mounted() {
            return Err(SurfaceError::NotMounted.into());
        }
        Ok(crate::export::svg::to_svg(&self.scene()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_pointer_requires_mount() {
        let mut surface = DrawingSurface::default();
        assert_eq!(
            surface.map_pointer(Pos2::new(5.0, 5.0)),
            Err(SurfaceError::NotMounted)
        );

        surface.mount(Rect::from_min_size(Pos2::new(100.0, 50.0), surface.size()));
        assert_eq!(
            surface.map_pointer(Pos2::new(110.0, 70.0)),
            Ok(Pos2::new(10.0, 20.0))
        );
        // Out of bounds positions are not clamped
        assert_eq!(
            surface.map_pointer(Pos2::new(90.0, 40.0)),
            Ok(Pos2::new(-10.0, -10.0))
        );
    }

    #[test]
    fn test_pointer_down_when_unmounted_is_dropped() {
        let mut surface = DrawingSurface::default();
        surface.pointer_down(Pos2::new(5.0, 5.0));
        assert!(!surface.is_drawing());
        assert!(surface.current_path().is_empty());
    }

    #[test]
    fn test_start_restarts_active_stroke() {
        let mut surface = DrawingSurface::default();
        surface.start(Pos2::new(1.0, 1.0));
        surface.extend(Pos2::new(2.0, 2.0));
        surface.start(Pos2::new(9.0, 9.0));
        assert_eq!(surface.current_path(), &[Pos2::new(9.0, 9.0)]);
        assert_eq!(surface.history().undo_len(), 0);
    }

    #[test]
    fn test_extend_while_idle_is_ignored() {
        let mut surface = DrawingSurface::default();
        surface.extend(Pos2::new(1.0, 1.0));
        assert_eq!(surface.state(), &DrawState::Idle);
    }

    #[test]
    fn test_commit_while_idle_is_noop() {
        let mut surface = DrawingSurface::default();
        assert!(!surface.commit());
        assert_eq!(surface.history().undo_len(), 0);
    }

    #[test]
    fn test_undo_abandons_active_stroke() {
        let mut surface = DrawingSurface::default();
        surface.start(Pos2::ZERO);
        surface.extend(Pos2::new(3.0, 4.0));
        surface.commit();

        surface.start(Pos2::new(10.0, 10.0));
        surface.extend(Pos2::new(20.0, 20.0));
        assert!(surface.undo());
        assert!(!surface.is_drawing());
        assert_eq!(surface.history().undo_len(), 0);
        assert_eq!(surface.history().redo_len(), 1);
    }

    #[test]
    fn test_export_requires_mount() {
        let surface = DrawingSurface::default();
        assert!(surface.export_svg().is_err());
    }
}
