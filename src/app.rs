use iced::event;
use iced::{Element, Subscription, Theme};
use std::path::PathBuf;

use crate::config::{MAX_NUM_VIDEOS, MIN_NUM_VIDEOS};
use crate::message::Message;
use crate::motion;
use crate::state::App;
use crate::ui;
use crate::visual::BorderStyle;

impl App {
    /// Handle UI messages and state updates.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => {
                self.ticker.observe(now);
                motion::step(&mut self.registry, &self.viewport);
                self.registry.sync_visuals(&mut self.videos);
            }
            Message::TickIntervalChanged(interval_ms) => {
                self.ticker.set_interval_ms(interval_ms);
            }
            Message::VideoSizeChanged(size) => {
                self.registry.set_size_all(size, &mut self.videos);
                self.video_size = self.registry.size().width as u32;
            }
            Message::VideoCountChanged(count) => {
                let count = (count as usize).clamp(MIN_NUM_VIDEOS, MAX_NUM_VIDEOS);
                if count != self.video_count {
                    self.video_count = count;
                    self.error = None;
                    self.repopulate();
                }
            }
            Message::RandomizeVelocities => {
                self.registry.randomize_velocities(&mut self.placement);
            }
            Message::ToggleDarkMode => {
                self.set_dark_mode(!self.dark_mode);
            }
            Message::BrowseFile => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter(
                        "Videos",
                        &[
                            "mov", "MOV", "mp4", "MP4", "m4v", "M4V", "mkv", "MKV", "avi", "AVI",
                            "webm", "WEBM",
                        ],
                    )
                    .pick_file()
                {
                    self.load_media(path);
                }
            }
            Message::FileDropped(path) => {
                self.load_media(path);
            }
            Message::EventOccurred(event) => match event {
                iced::Event::Window(iced::window::Event::Resized(size)) => {
                    self.on_viewport_resized(size.width, size.height);
                }
                iced::Event::Window(iced::window::Event::FileDropped(path)) => {
                    self.load_media(path);
                }
                _ => {}
            },
        }
    }

    /// Subscribe to window events and the animation clock.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            event::listen().map(Message::EventOccurred),
            self.ticker.subscription(),
        ])
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        ui::render_main_view(self)
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn on_viewport_resized(&mut self, width: f32, height: f32) {
        self.viewport
            .resize(width.max(0.0) as u32, height.max(0.0) as u32);
        log::debug!(
            "Viewport resized to {}x{}",
            self.viewport.width(),
            self.viewport.height()
        );
    }

    pub(crate) fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        let border = dark_mode.then_some(BorderStyle::DARK_MODE);
        self.registry.set_border_all(border, &mut self.videos);
    }

    /// Tear down the current batch and build `video_count` fresh sprites.
    pub(crate) fn repopulate(&mut self) {
        match self.registry.set_population(
            self.video_count,
            &mut self.videos,
            &self.viewport,
            &mut self.placement,
        ) {
            Ok(report) => {
                if let Some(first) = report.failures.first() {
                    self.error = Some(format!(
                        "{} of {} videos failed: {}",
                        report.failures.len(),
                        self.video_count,
                        first
                    ));
                }
                self.status = format!(
                    "{} video{}",
                    report.created,
                    if report.created == 1 { "" } else { "s" }
                );
            }
            Err(e) => {
                log::error!("Population change rejected: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn load_media(&mut self, path: PathBuf) {
        match self.videos.set_source(&path) {
            Ok(()) => {
                self.error = None;
                self.repopulate();
                if let (None, Some(source)) = (&self.error, self.videos.source()) {
                    self.status = format!(
                        "Playing {} x{}",
                        source.file_name().unwrap_or_default().to_string_lossy(),
                        self.registry.len()
                    );
                }
            }
            Err(e) => {
                log::warn!("Media rejected: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }
}
