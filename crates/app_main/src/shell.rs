//! Application root: owns the view state and lays out every panel
//!
//! Components only read the state and hand back actions. All mutations go
//! through the `ViewState` setters here or through the command registry.

use anyhow::Result;
use app_core::{
    AppConfig, Command, CommandOutcome, CommandRegistry, I18n, LoadEvent, MockPhotoRepository, PhotoCatalog,
    ViewState,
};
use app_ui::components::{
    ContentAction, ContentArea, LeftPanel, LeftPanelAction, MenuBar, RightPanel, RightPanelAction, StatusBar,
    Toolbar, ToolbarAction,
};
use app_ui::{layout, Theme};
use std::sync::Arc;
use std::time::Duration;

/// How often to wake up while the collection is loading
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct Shell {
    pub view: ViewState,
    pub catalog: PhotoCatalog,
    pub registry: CommandRegistry,
    pub i18n: I18n,
    pub theme: Theme,
    left_panel: LeftPanel,
    content: ContentArea,
    /// Dropped while hidden so its edits start over when shown again
    right_panel: Option<RightPanel>,
}

impl Shell {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let i18n = I18n::embedded(&config.general.language)?;
        if let Some(dir) = &config.general.locale_dir {
            match i18n.load_from_dir(dir) {
                Ok(()) => tracing::info!("Locales available: {:?}", i18n.available_locales()),
                Err(e) => tracing::warn!("Failed to load locales from {:?}: {}", dir, e),
            }
        }

        let view = ViewState::new(&config.view);
        let right_panel = view.right_panel_visible().then(RightPanel::new);

        let mut shell = Self {
            view,
            catalog: PhotoCatalog::new(),
            registry: CommandRegistry::with_defaults(),
            i18n,
            theme: Theme::by_name(&config.general.theme),
            left_panel: LeftPanel::new(),
            content: ContentArea::new(config.content.page_size),
            right_panel,
        };

        shell.mount(config)?;
        Ok(shell)
    }

    /// Start loading the collection shown by the content area
    pub fn mount(&mut self, config: &AppConfig) -> Result<()> {
        let repository = MockPhotoRepository::new(config.content.photo_count, config.content.seed);
        tracing::info!(
            "Loading {} photos (seed {})",
            config.content.photo_count,
            repository.seed()
        );
        self.catalog.mount(
            Arc::new(repository),
            Duration::from_millis(config.content.load_delay_ms),
        )?;
        self.view.set_collection_len(0);
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.catalog.unmount();
        self.view.set_collection_len(0);
    }

    pub fn right_panel(&self) -> Option<&RightPanel> {
        self.right_panel.as_ref()
    }

    /// Build one frame
    pub fn ui(&mut self, ctx: &egui::Context) {
        if let Some(LoadEvent::Completed { total }) = self.catalog.poll() {
            self.view.set_collection_len(total);
        }
        if self.catalog.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }

        let mut commands: Vec<Command> = Vec::new();

        egui::TopBottomPanel::top("menu_bar")
            .exact_height(layout::MENU_HEIGHT)
            .show(ctx, |ui| {
                commands.extend(MenuBar::ui(ui, &self.registry, &self.i18n));
            });

        egui::TopBottomPanel::top("toolbar")
            .exact_height(layout::TOOLBAR_HEIGHT)
            .show(ctx, |ui| {
                if let Some(action) = Toolbar::ui(ui, &self.view, &self.registry, &self.i18n, &self.theme) {
                    commands.extend(apply_toolbar_action(&mut self.view, action));
                }
            });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(layout::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                commands.extend(StatusBar::ui(ui, &self.view, &self.i18n, &self.theme));
            });

        if !self.view.left_panel_collapsed() {
            egui::SidePanel::left("left_panel")
                .exact_width(layout::LEFT_PANEL_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    if let Some(action) = self.left_panel.ui(ui, &self.view, &self.i18n, &self.theme) {
                        apply_left_panel_action(&mut self.view, action);
                    }
                });
        }

        if let Some(panel) = &mut self.right_panel {
            egui::SidePanel::right("right_panel")
                .exact_width(layout::RIGHT_PANEL_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    let action = panel.ui(
                        ui,
                        &self.view,
                        self.catalog.records(),
                        &self.registry,
                        &self.i18n,
                        &self.theme,
                    );
                    if let Some(RightPanelAction::Command(command)) = action {
                        commands.push(command);
                    }
                });
        }

        let content_frame = egui::Frame::central_panel(&ctx.style()).fill(self.theme.background);
        egui::CentralPanel::default().frame(content_frame).show(ctx, |ui| {
            let records = (!self.catalog.is_loading()).then(|| self.catalog.records());
            if let Some(action) = self.content.ui(ui, &self.view, records, &self.i18n, &self.theme) {
                apply_content_action(&mut self.view, action);
            }
        });

        for command in commands {
            self.execute(&command);
        }
    }

    /// Run a command against the view state
    pub fn execute(&mut self, command: &Command) {
        match self.registry.dispatch(command, &mut self.view) {
            Ok(CommandOutcome::Applied) => tracing::debug!("Command applied: {}", command.id.as_str()),
            Ok(CommandOutcome::Ignored) => tracing::trace!("Command ignored: {}", command.id.as_str()),
            Err(e) if e.is_fatal() => tracing::error!("Command {} failed: {}", command.id.as_str(), e),
            Err(e) => tracing::warn!("Command {} failed: {}", command.id.as_str(), e),
        }

        sync_right_panel(self.view.right_panel_visible(), &mut self.right_panel);
    }
}

/// Apply a toolbar action; commands are handed back for dispatch
fn apply_toolbar_action(view: &mut ViewState, action: ToolbarAction) -> Option<Command> {
    match action {
        ToolbarAction::Command(command) => Some(command),
        ToolbarAction::SetThumbnailSize(px) => {
            view.set_thumbnail_size(px);
            None
        }
    }
}

fn apply_left_panel_action(view: &mut ViewState, action: LeftPanelAction) {
    match action {
        LeftPanelAction::SetThumbnailSize(px) => {
            view.set_thumbnail_size(px);
        }
    }
}

fn apply_content_action(view: &mut ViewState, action: ContentAction) {
    match action {
        ContentAction::Toggle(id) => view.toggle_selection(id),
        ContentAction::SelectAll(ids) => view.select_all(ids),
        ContentAction::DeselectAll(ids) => view.deselect_all(ids),
    }
}

/// Mount or drop the right panel to match its visibility flag
fn sync_right_panel(visible: bool, panel: &mut Option<RightPanel>) {
    match (visible, panel.is_some()) {
        (true, false) => *panel = Some(RightPanel::new()),
        (false, true) => *panel = None,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{CommandId, PhotoId, ThumbnailSize, ViewMode};
    use std::time::Instant;

    fn config(delay_ms: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.content.load_delay_ms = delay_ms;
        config.content.seed = Some(11);
        config
    }

    fn frame(shell: &mut Shell, ctx: &egui::Context) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 800.0))),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| shell.ui(ctx));
    }

    fn wait_until_loaded(shell: &mut Shell, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while shell.catalog.is_loading() {
            assert!(Instant::now() < deadline, "load did not complete");
            std::thread::sleep(Duration::from_millis(5));
            frame(shell, ctx);
        }
    }

    #[test]
    fn test_mount_load_and_toggle() {
        let ctx = egui::Context::default();
        let mut shell = Shell::new(&config(200)).unwrap();

        frame(&mut shell, &ctx);
        assert!(shell.catalog.is_loading());
        assert_eq!(shell.view.file_stats().total, 0);

        wait_until_loaded(&mut shell, &ctx);
        let stats = shell.view.file_stats();
        assert_eq!((stats.total, stats.selected), (24, 0));

        apply_content_action(&mut shell.view, ContentAction::Toggle(PhotoId(5)));
        assert_eq!(shell.view.selection().ids(), &[PhotoId(5)]);
        assert_eq!(shell.view.file_stats().selected, 1);

        apply_content_action(&mut shell.view, ContentAction::Toggle(PhotoId(5)));
        assert!(shell.view.selection().is_empty());
        assert_eq!(shell.view.file_stats().selected, 0);
    }

    #[test]
    fn test_view_commands_keep_selection() {
        let ctx = egui::Context::default();
        let mut shell = Shell::new(&config(0)).unwrap();
        wait_until_loaded(&mut shell, &ctx);

        apply_content_action(&mut shell.view, ContentAction::SelectAll(vec![PhotoId(1), PhotoId(2)]));
        for mode in [ViewMode::List, ViewMode::Detail, ViewMode::Grid] {
            shell.execute(&Command::new(CommandId::for_view_mode(mode)));
            frame(&mut shell, &ctx);
            assert_eq!(shell.view.view_mode(), mode);
            assert_eq!(shell.view.selection().ids(), &[PhotoId(1), PhotoId(2)]);
            assert_eq!(shell.catalog.records().len(), 24);
        }
    }

    #[test]
    fn test_hiding_right_panel_drops_edits() {
        let mut shell = Shell::new(&config(0)).unwrap();
        assert!(shell.right_panel().is_some());

        shell.execute(&Command::new(CommandId::VIEW_TOGGLE_RIGHT_PANEL));
        assert!(!shell.view.right_panel_visible());
        assert!(shell.right_panel().is_none());

        shell.execute(&Command::new(CommandId::VIEW_TOGGLE_RIGHT_PANEL));
        let panel = shell.right_panel().unwrap();
        assert!(panel.edits().note.is_empty());
    }

    #[test]
    fn test_unmount_discards_pending_load() {
        let ctx = egui::Context::default();
        let mut shell = Shell::new(&config(50)).unwrap();
        shell.unmount();

        std::thread::sleep(Duration::from_millis(120));
        frame(&mut shell, &ctx);
        assert!(shell.catalog.records().is_empty());
        assert_eq!(shell.view.file_stats().total, 0);
    }

    #[test]
    fn test_both_sliders_share_thumbnail_size() {
        let mut view = ViewState::default();

        apply_left_panel_action(&mut view, LeftPanelAction::SetThumbnailSize(220));
        assert_eq!(view.thumbnail_size().get(), 220);

        let command = apply_toolbar_action(&mut view, ToolbarAction::SetThumbnailSize(80));
        assert!(command.is_none());
        assert_eq!(view.thumbnail_size().get(), 80);

        apply_left_panel_action(&mut view, LeftPanelAction::SetThumbnailSize(500));
        assert_eq!(view.thumbnail_size().get(), ThumbnailSize::MAX);

        apply_toolbar_action(&mut view, ToolbarAction::SetThumbnailSize(10));
        assert_eq!(view.thumbnail_size().get(), ThumbnailSize::MIN);
    }

    #[test]
    fn test_toolbar_commands_are_passed_on() {
        let mut view = ViewState::default();
        let command = apply_toolbar_action(
            &mut view,
            ToolbarAction::Command(Command::new(CommandId::VIEW_LIST)),
        );
        assert_eq!(command.map(|c| c.id), Some(CommandId::new(CommandId::VIEW_LIST)));
        assert_eq!(view.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_unknown_command_is_logged_not_fatal() {
        let mut shell = Shell::new(&config(0)).unwrap();
        let before = shell.view.clone();
        shell.execute(&Command::new("photo.delete"));
        assert_eq!(shell.view.view_mode(), before.view_mode());
        assert_eq!(shell.view.thumbnail_size(), before.thumbnail_size());
    }
}
