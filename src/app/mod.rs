//! `PortfolioApp`: the top-level egui application state.
//!
//! This module declares the struct, its constructor, and the frame loop.
//! Panels are split across the sibling sub-modules:
//!
//! - `header`     : brand, nav links, theme toggle, profile picker
//! - `background` : hero section and its particle field
//! - `learning`   : learning path (search, filters, progress, items)
//! - `projects`   : project cards and their category filter
//! - `contact`    : contact form, submission and notifications
//!
//! Widgets only push [`UiEvent`]s; `process_events` runs them through the
//! [`Dispatcher`] after the frame is drawn, keeps the page mirror patched,
//! and carries out the returned effects.

pub mod background;
pub mod contact;
pub mod header;
pub mod learning;
pub mod projects;

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use folio::bindings::{Dispatcher, Effect, ListenerKind, ListenerSet, UiEvent};
use folio::catalog::builtin::{HERO_ROLES, HERO_STATS, TYPING_TEXT};
use folio::catalog::builtin::SectionSpec;
use folio::config::SiteConfig;
use folio::contact::{ContactFlow, NotificationCenter, NotificationKind, Submitter};
use folio::effects::{CounterAnimation, FrameLoop, ParticleSystem, RevealTracker, RoleRotation, TypingAnimation};
use folio::render::PageMirror;
use folio::state::{SectionLayout, Theme, ViewState};

/// Role rotation period in the hero.
const ROLE_PERIOD: Duration = Duration::from_millis(2000);
/// Counters start once the hero has been on screen this long.
const COUNTER_DELAY: Duration = Duration::from_millis(2000);

// ─── Application state ───────────────────────────────────────────────────────

pub struct PortfolioApp {
    pub config: SiteConfig,
    pub state: ViewState,
    pub dispatcher: Dispatcher,
    /// Rendered page kept current by patches; source for "Export HTML".
    pub mirror: PageMirror,
    pub events: Vec<UiEvent>,
    // Repeating callbacks (frame loop, scroll, resize)
    pub listeners: ListenerSet,
    pub frame_loop: FrameLoop,
    // Decorative effects
    pub particles: ParticleSystem,
    pub typing: TypingAnimation,
    pub roles: RoleRotation,
    pub counters: Vec<CounterAnimation>,
    pub reveal: RevealTracker,
    // Contact
    pub contact: ContactFlow,
    pub notifications: NotificationCenter,
    // Widget buffers
    pub search_input: String,
    pub profile_path: String,
    /// Decoded profile picture, keyed by the data URL it came from.
    pub profile_texture: Option<(String, Option<egui::TextureHandle>)>,
    // Scroll geometry
    pub scroll_y: f32,
    pub scroll_to: Option<f32>,
    pub layout: Vec<SectionLayout>,
    pub hero_size: egui::Vec2,
}

impl PortfolioApp {
    pub fn new(config: SiteConfig, state: ViewState, submitter: Arc<dyn Submitter>) -> Self {
        let now = Instant::now();
        let mut listeners = ListenerSet::new();
        let frame_loop = FrameLoop::new(listeners.attach(ListenerKind::AnimationFrame), now);
        listeners.attach(ListenerKind::Scroll);
        listeners.attach(ListenerKind::Resize);

        let counters = HERO_STATS
            .iter()
            .map(|(label, _)| CounterAnimation::new(label, config.counter_steps))
            .collect();
        let typing = TypingAnimation::new(
            TYPING_TEXT,
            Duration::from_millis(config.typing_interval_ms),
            Duration::from_millis(config.typing_delay_ms),
        );
        let hero_size = egui::vec2(1280.0, background::HERO_HEIGHT);

        Self {
            mirror: PageMirror::new(&state, None),
            search_input: state.filter().search.clone(),
            particles: ParticleSystem::new(config.particles, hero_size.x, hero_size.y),
            notifications: NotificationCenter::new(Duration::from_millis(config.notification_ttl_ms)),
            dispatcher: Dispatcher::new(),
            events: Vec::new(),
            listeners,
            frame_loop,
            typing,
            roles: RoleRotation::new(HERO_ROLES, ROLE_PERIOD),
            counters,
            reveal: RevealTracker::new(),
            contact: ContactFlow::new(submitter),
            profile_path: String::new(),
            profile_texture: None,
            scroll_y: 0.0,
            scroll_to: None,
            layout: Vec::new(),
            hero_size,
            config,
            state,
        }
    }

    pub fn emit(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Run queued widget events through the dispatcher, patch the mirror,
    /// and perform the resulting effects.
    pub fn process_events(&mut self, ctx: &egui::Context) {
        for event in std::mem::take(&mut self.events) {
            match event {
                UiEvent::Scroll(_) if !self.listeners.is_attached(ListenerKind::Scroll) => continue,
                UiEvent::Resize(..) if !self.listeners.is_attached(ListenerKind::Resize) => continue,
                _ => {}
            }
            let update = self.dispatcher.dispatch(&mut self.state, event);
            self.mirror.sync(&self.state, update.stale, update.touched.as_ref());
            if let Some(effect) = update.effect {
                self.handle_effect(ctx, effect);
            }
        }
    }

    fn handle_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::ScrollTo(y) => self.scroll_to = Some(y),
            Effect::OpenUrl(url) => ctx.open_url(egui::OpenUrl::new_tab(url)),
            Effect::Resized { width, height } => self.particles.resize(width, height),
            Effect::PickProfileImage => self.upload_profile_from_path(),
            Effect::SubmitContact => self.submit_contact(ctx),
            Effect::DismissNotification => {
                self.notifications.dismiss();
                self.mirror.set_notification(None);
            }
        }
    }

    /// Show a notification, replacing any current one.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.show(kind, message, Instant::now());
        self.mirror.set_notification(self.notifications.current());
    }

    pub fn upload_profile(&mut self, bytes: &[u8]) {
        match self.dispatcher.upload_profile_image(&mut self.state, bytes) {
            Ok(update) => {
                self.mirror.sync(&self.state, update.stale, None);
                self.notify(NotificationKind::Success, "Profile image updated");
            }
            Err(e) => {
                log::warn!("Profile image rejected: {}", e);
                self.notify(NotificationKind::Error, e.to_string());
            }
        }
    }

    fn upload_profile_from_path(&mut self) {
        let path = self.profile_path.trim().to_string();
        if path.is_empty() {
            self.notify(NotificationKind::Info, "Enter an image path or drop an image onto the window");
            return;
        }
        match std::fs::read(&path) {
            Ok(bytes) => self.upload_profile(&bytes),
            Err(e) => self.notify(NotificationKind::Error, format!("{}: {}", path, e)),
        }
    }

    pub fn export_html(&mut self) {
        let path = self.config.export_path.clone();
        match self.mirror.export(&path) {
            Ok(()) => self.notify(NotificationKind::Success, format!("Exported to {}", path.display())),
            Err(e) => {
                log::warn!("Export to {} failed: {}", path.display(), e);
                self.notify(NotificationKind::Error, format!("Export failed: {}", e));
            }
        }
    }

    /// Channel polling, expiry and dropped files. Runs before drawing.
    fn poll_background(&mut self, ctx: &egui::Context, now: Instant) {
        self.poll_submission();

        if self.notifications.tick(now) {
            self.mirror.set_notification(None);
        }

        let dropped: Vec<egui::DroppedFile> = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let bytes = match (&file.bytes, &file.path) {
                (Some(bytes), _) => Some(bytes.to_vec()),
                (None, Some(path)) => std::fs::read(path).ok(),
                (None, None) => None,
            };
            if let Some(bytes) = bytes {
                self.upload_profile(&bytes);
            }
        }
    }

    fn advance_effects(&mut self, dt: Duration) {
        self.typing.advance(dt);
        self.roles.advance(dt);
        self.reveal.advance(dt);
        self.particles.step();
        if self.frame_loop.elapsed(Instant::now()) >= COUNTER_DELAY {
            for counter in &mut self.counters {
                counter.tick();
            }
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.state.theme() {
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        }
    }

    /// Scrollable page body. Records each section's extent for
    /// scroll-spy and reports scroll movement.
    fn draw_page(&mut self, ui: &mut egui::Ui) {
        let mut area = egui::ScrollArea::vertical()
            .id_salt("page")
            .auto_shrink([false, false]);
        if let Some(y) = self.scroll_to.take() {
            area = area.vertical_scroll_offset(y);
        }

        let output = area.show(ui, |ui| {
            let origin = ui.min_rect().top();
            let sections = self.state.sections();
            let mut layout = Vec::with_capacity(sections.len());
            for (index, section) in sections.iter().enumerate() {
                let top = ui.cursor().top() - origin;
                self.draw_section(ui, section, index);
                ui.add_space(48.0);
                let height = ui.cursor().top() - origin - top;
                layout.push(SectionLayout { id: section.id, top, height });
            }
            layout
        });

        let y = output.state.offset.y;
        if (y - self.scroll_y).abs() > 0.5 {
            self.scroll_y = y;
            self.emit(UiEvent::Scroll(y));
        }
        if output.inner != self.layout {
            self.layout = output.inner.clone();
            self.dispatcher.set_layout(output.inner);
        }
    }

    fn draw_section(&mut self, ui: &mut egui::Ui, section: &SectionSpec, index: usize) {
        let opacity = self.reveal.opacity(index);
        let shown = ui.scope(|ui| {
            ui.set_opacity(opacity);
            match section.id {
                "home" => self.draw_hero(ui),
                "learning" => self.draw_learning(ui),
                "projects" => self.draw_projects(ui),
                "contact" => self.draw_contact(ui),
                _ => draw_placeholder(ui, section),
            }
        });
        if ui.is_rect_visible(shown.response.rect) {
            self.reveal.observe(index);
        }
    }
}

fn draw_placeholder(ui: &mut egui::Ui, section: &SectionSpec) {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new(section.label).size(26.0).strong());
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Coming soon").italics().weak());
    });
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_background(ctx, now);
        if let Some(dt) = self.frame_loop.tick(now) {
            self.advance_effects(dt);
        }
        self.apply_theme(ctx);

        // Header
        let mut header_frame = egui::Frame::side_top_panel(&ctx.style());
        if self.state.nav().scrolled {
            header_frame = header_frame.shadow(ctx.style().visuals.popup_shadow);
        }
        egui::TopBottomPanel::top("header")
            .frame(header_frame)
            .show(ctx, |ui| {
                self.draw_header(ui);
            });

        // Mobile menu drawer
        if self.state.nav().menu_open {
            egui::SidePanel::left("mobile_menu")
                .resizable(false)
                .default_width(200.0)
                .show(ctx, |ui| {
                    self.draw_mobile_menu(ui);
                });
        }

        self.draw_notification(ctx);

        // Page body
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_page(ui);
        });

        self.emit(UiEvent::Frame);
        self.process_events(ctx);

        if self.frame_loop.is_running() {
            ctx.request_repaint();
        } else if let Some(left) = self.notifications.remaining(Instant::now()) {
            ctx.request_repaint_after(left);
        }
    }
}
