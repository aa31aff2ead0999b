//! Application main loop

use crate::shell::Shell;
use anyhow::Result;
use app_core::{AppConfig, Command};
use app_ui::{install_fonts, InputHandler, Renderer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Window, GPU and egui platform state around the shell
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,
    input_handler: InputHandler,
    shell: Shell,
    /// Deadline egui asked to be repainted at
    next_repaint: Option<Instant>,
}

impl App {
    fn new(config: AppConfig) -> Result<Self> {
        let shell = Shell::new(&config)?;
        let input_handler = InputHandler::new(&config.keybindings);

        Ok(Self {
            config,
            window: None,
            renderer: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,
            input_handler,
            shell,
            next_repaint: None,
        })
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(self.shell.i18n.get("app-title"))
            .with_inner_size(winit::dpi::LogicalSize::new(1400, 860))
            .with_min_inner_size(winit::dpi::LogicalSize::new(960, 600));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = pollster::block_on(Renderer::new(window.clone(), self.shell.theme.background))?;

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        install_fonts(&self.egui_ctx, self.config.general.ui_font.as_deref());
        self.shell.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);

        tracing::info!("Window created");
        Ok(())
    }

    fn execute(&mut self, command: &Command) {
        self.shell.execute(command);
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(egui_state)) = (self.window.clone(), self.egui_state.as_mut()) else {
            return;
        };

        let raw_input = egui_state.take_egui_input(&window);
        let ctx = self.egui_ctx.clone();
        let full_output = ctx.run(raw_input, |ctx| self.shell.ui(ctx));

        if let Some(egui_state) = &mut self.egui_state {
            egui_state.handle_platform_output(&window, full_output.platform_output);
        }

        let repaint_delay = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|viewport| viewport.repaint_delay)
            .unwrap_or(Duration::MAX);
        self.schedule_repaint(repaint_delay);

        let primitives = ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.paint(&full_output.textures_delta, &primitives, full_output.pixels_per_point) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => tracing::warn!("Frame dropped: {:?}", e),
        }
    }

    fn schedule_repaint(&mut self, delay: Duration) {
        if delay.is_zero() {
            self.next_repaint = None;
            self.request_redraw();
        } else {
            self.next_repaint = Instant::now().checked_add(delay);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(command) = self.input_handler.navigation_command(&event) {
            self.execute(&command);
            return;
        }

        // Let egui handle the event first
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.repaint {
                window.request_redraw();
            }
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                self.shell.unmount();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
                self.request_redraw();
            }

            WindowEvent::ThemeChanged(_) => {
                self.shell.theme.apply(&self.egui_ctx);
                if let Some(renderer) = &mut self.renderer {
                    renderer.set_clear_color(self.shell.theme.background);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(command) = self.input_handler.handle_key(&event) {
                    self.execute(&command);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input_handler.update_modifiers(modifiers.state());
            }

            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.next_repaint {
            Some(deadline) if deadline <= Instant::now() => {
                self.next_repaint = None;
                self.request_redraw();
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

/// Run the application
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;

    tracing::info!("PhotoDesk exited");
    Ok(())
}
