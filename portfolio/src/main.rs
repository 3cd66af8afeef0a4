//! Single-page portfolio with an animated galaxy / black hole background
//!
//! The background runs a looping five-phase particle simulation rendered
//! with wgpu; the page itself (navbar, hero, about, projects, contact and
//! the chat widget) is an egui overlay composited on top each frame.

use common::{Camera3D, GraphicsContext, OrbitPath, PointerTilt};
use glam::Vec2;
use portfolio::chat::ChatClient;
use portfolio::chat_ui::ChatUi;
use portfolio::content;
use portfolio::renderer::Renderer;
use portfolio::simulation::Simulation;
use portfolio::site_ui::SiteUi;
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    simulation: Simulation,
    camera: Camera3D,
    orbit: OrbitPath,
    tilt: PointerTilt,
    site: SiteUi,
    chat: ChatUi,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let simulation = Simulation::default();
        let renderer = Renderer::new(&ctx, &simulation);
        let camera = Camera3D::new(ctx.aspect_ratio());

        let client = ChatClient::from_env(content::SYSTEM_INSTRUCTION);
        if !client.has_credential() {
            log::warn!("GEMINI_API_KEY not set; chat replies with a fallback message");
        }
        let chat = ChatUi::new(client, content::CHAT_GREETING);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            simulation,
            camera,
            orbit: OrbitPath::default(),
            tilt: PointerTilt::default(),
            site: SiteUi::new(),
            chat,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
    }

    fn update(&mut self, dt: f32) {
        self.simulation.update(dt);
        self.tilt.update(dt);
        self.camera.position = self.orbit.position_at(self.simulation.time);
    }

    fn render(&mut self, dt: f32) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .update(&self.ctx.queue, &self.simulation, &self.camera, &self.tilt);

        // Build egui UI
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            self.site.show(ctx, dt);
            self.chat.show(ctx);
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Pointer position in normalized device coordinates drives the tilt
    fn handle_cursor(&mut self, x: f64, y: f64) {
        let w = self.ctx.size.width.max(1) as f32;
        let h = self.ctx.size.height.max(1) as f32;
        let ndc = Vec2::new(
            x as f32 / w * 2.0 - 1.0,
            -(y as f32 / h * 2.0 - 1.0),
        );
        self.tilt.set_pointer(ndc);
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn main() {
    env_logger::init();

    let (ctx, event_loop) =
        match pollster::block_on(GraphicsContext::new("Abhishek M G - Portfolio", 1280, 800)) {
            Ok(pair) => pair,
            Err(e) => {
                log::error!("failed to initialize graphics: {e:#}");
                return;
            }
        };

    let mut app = App::new(ctx);
    let mut last_time = std::time::Instant::now();

    if let Err(e) = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                // egui may claim pointer events; the tilt still follows them
                if let WindowEvent::CursorMoved { position, .. } = event {
                    app.handle_cursor(position.x, position.y);
                }

                if !consumed {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.resize(*size),
                        WindowEvent::RedrawRequested => {
                            let now = std::time::Instant::now();
                            let dt = (now - last_time).as_secs_f32().min(0.1);
                            last_time = now;

                            app.update(dt);
                            match app.render(dt) {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                Err(e) => log::warn!("render error: {e:?}"),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    }) {
        log::error!("event loop error: {e}");
    }
}
