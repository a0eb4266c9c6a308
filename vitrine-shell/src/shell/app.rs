//! Application state and winit event loop.
//!
//! `App` composes the two core components: the section pager (wheel →
//! section index, cooldown-debounced) and the backdrop (camera + spinning
//! grid planes with their GPU buffers). Mount happens in `resumed`,
//! unmount in `suspended`/`exiting`; nothing survives a remount.
//!
//! The frame loop is a redraw chain: each `RedrawRequested` renders and
//! re-requests a redraw only while the backdrop is running or a section
//! glide is in flight. Tearing the backdrop down therefore stops the
//! chain at the next hop; no frame handle needs tracking.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use vitrine_core::motion::{CarouselDrift, SectionGlide};
use vitrine_core::scene::BACKGROUND;
use vitrine_core::{ScrollIntent, SectionPager, WheelOutcome};

use crate::audio::CueSink;
use crate::backdrop::Backdrop;
use crate::gfx::{GpuState, PanelPipeline};
use crate::shell::layout::{CAROUSEL_PERIOD, CAROUSEL_SPAN, SECTION_COUNT};
use crate::ui;

/// The Vitrine application. Owns all state.
pub struct App {
    // ── Window + GPU (mount state) ──
    pub window: Option<Arc<Window>>,
    pub gpu: Option<GpuState>,
    pub backdrop: Option<Backdrop>,
    pub panels: Option<PanelPipeline>,
    pub cue: Option<CueSink>,

    // ── Navigation ──
    pub pager: SectionPager,
    pub glide: SectionGlide,
    pub carousel: CarouselDrift,
    pub mounted_at: Option<Instant>,

    // GPU init already failed once this mount; don't retry.
    gpu_failed: bool,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            window: None,
            gpu: None,
            backdrop: None,
            panels: None,
            cue: None,
            pager: SectionPager::new(SECTION_COUNT)?,
            glide: SectionGlide::new(0.0),
            carousel: CarouselDrift::new(CAROUSEL_SPAN, CAROUSEL_PERIOD),
            mounted_at: None,
            gpu_failed: false,
        })
    }

    /// Request a window redraw.
    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// One wheel gesture. The event terminates here — nothing else
    /// scrolls in this shell, which is the native analogue of
    /// suppressing the default scroll.
    pub fn handle_scroll(&mut self, intent: ScrollIntent) {
        let now = Instant::now();
        match self.pager.handle_wheel(intent, now) {
            WheelOutcome::Moved(_) => {
                self.glide.retarget(self.pager.offset_sections(), now);
                if let Some(cue) = &self.cue {
                    cue.page_cue();
                }
                self.request_redraw();
            }
            WheelOutcome::Bounced | WheelOutcome::Ignored => {}
        }
    }

    /// Window resize: camera aspect and surface follow synchronously.
    pub fn handle_resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(new_size);
        }
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.set_aspect(new_size.width as f32, new_size.height as f32);
        }
        self.request_redraw();
    }

    /// Render one frame and keep the chain alive while anything animates.
    pub fn redraw(&mut self) {
        let Self {
            window,
            gpu,
            backdrop,
            panels,
            glide,
            carousel,
            mounted_at,
            ..
        } = self;

        let Some(gpu) = gpu.as_mut() else {
            return;
        };

        // Rotation updates land before the render call observes them.
        if let Some(backdrop) = backdrop.as_mut() {
            backdrop.advance_frame();
        }

        let now = Instant::now();
        let viewport = [gpu.size.width, gpu.size.height];
        let elapsed = mounted_at
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or_default();

        if let Some(panels) = panels.as_mut() {
            ui::scene::compose(
                panels,
                &ui::scene::FrameData {
                    viewport,
                    offset_sections: glide.value(now),
                    carousel_offset: carousel.offset(elapsed),
                },
            );
        }

        let backdrop_ref = backdrop.as_ref();
        let panels_ref = panels.as_ref();
        let result = gpu.render_frame(BACKGROUND, |device, queue, pass| {
            if let Some(backdrop) = backdrop_ref {
                backdrop.encode(queue, pass);
            }
            if let Some(panels) = panels_ref {
                panels.render(pass, device, queue, viewport);
            }
        });
        if let Err(e) = result {
            tracing::error!("render failed: {:#}", e);
        }

        // Self-rescheduling hop; checks the cancellation state each time.
        let keep_animating =
            backdrop.as_ref().is_some_and(|b| b.is_running()) || !glide.settled(now);
        if keep_animating {
            if let Some(window) = window {
                window.request_redraw();
            }
        }
    }

    /// Build the mount state for the current window.
    fn mount(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Fresh navigation state: nothing survives a remount.
        self.glide = SectionGlide::new(0.0);
        if let Ok(pager) = SectionPager::new(SECTION_COUNT) {
            self.pager = pager;
        }
        self.mounted_at = Some(Instant::now());
        self.cue = Some(CueSink::new());

        match GpuState::new(window.clone()) {
            Ok(gpu) => {
                let size = window.inner_size();
                let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
                self.backdrop = Some(Backdrop::new(&gpu.device, gpu.format, aspect));
                self.panels = Some(PanelPipeline::new(&gpu.device, gpu.format));
                self.gpu = Some(gpu);
                tracing::info!("window + GPU initialized");
                self.request_redraw();
            }
            Err(e) => {
                // Decorative shell: keep the window, draw nothing, no
                // retries.
                tracing::error!("GPU init failed, continuing without rendering: {:#}", e);
                self.gpu_failed = true;
            }
        }
    }

    /// Tear the mount state down. Ordering: stop the frame chain, release
    /// the registered scene buffers, then the surface/device. Every step
    /// is a no-op against a never-mounted or already-unmounted state.
    fn unmount(&mut self) {
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.teardown();
        }
        self.backdrop = None;
        self.panels = None;
        self.gpu = None;
        self.cue = None;
        self.mounted_at = None;
        self.gpu_failed = false;
        tracing::info!("shell unmounted");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title("Vitrine /// Showcase")
                .with_inner_size(PhysicalSize::new(1280u32, 800u32));
            match event_loop.create_window(attrs) {
                Ok(window) => self.window = Some(Arc::new(window)),
                Err(e) => {
                    tracing::error!("window creation failed: {:#}", e);
                    event_loop.exit();
                    return;
                }
            }
        }

        if self.gpu.is_none() && !self.gpu_failed {
            self.mount();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // The platform may invalidate the surface while suspended; a
        // later resumed() remounts from scratch.
        self.unmount();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        super::events::handle_window_event(self, event_loop, event);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
    }
}

/// Run the Vitrine showcase shell.
pub fn run() -> anyhow::Result<()> {
    tracing::info!("Vitrine starting...");

    let event_loop = EventLoop::new()?;
    // Frames are driven by the redraw chain, not by a busy poll.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
