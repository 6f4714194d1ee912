use iced::widget::{button, column, container, pin, slider, stack, text};
use iced::{Border, Color, Element, Length, Point, Theme};
use iced_video_player::VideoPlayer;

use crate::config::{
    CONTROL_PANEL_HEIGHT, CONTROL_PANEL_MARGIN, CONTROL_PANEL_WIDTH, MAX_NUM_VIDEOS,
    MIN_NUM_VIDEOS, TICK_MS_RANGE, VIDEO_SIZE_RANGE,
};
use crate::message::Message;
use crate::state::App;
use crate::video_layer::VideoSlot;
use crate::viewport::Viewport;
use crate::visual::BorderStyle;

const LIGHT_GRAY: Color = Color::from_rgb8(192, 192, 192);
const DARK_GRAY: Color = Color::from_rgb8(64, 64, 64);
const PLACEHOLDER: Color = Color::from_rgb8(24, 24, 24);

/// Background color for the window and the control panel.
pub fn backdrop_color(dark_mode: bool) -> Color {
    if dark_mode { DARK_GRAY } else { LIGHT_GRAY }
}

/// Label color on top of [`backdrop_color`].
pub fn label_color(dark_mode: bool) -> Color {
    if dark_mode { Color::WHITE } else { Color::BLACK }
}

/// Outline around each slider: a 1 px green line in dark mode, none otherwise.
pub fn slider_border(dark_mode: bool) -> Border {
    border_of(dark_mode.then_some(BorderStyle {
        width: 1.0,
        ..BorderStyle::DARK_MODE
    }))
}

/// Top-left corner of the control panel: pinned to the top-right corner.
pub fn control_panel_origin(viewport: &Viewport) -> Point {
    Point::new(
        viewport.width() as f32 - CONTROL_PANEL_WIDTH - CONTROL_PANEL_MARGIN,
        CONTROL_PANEL_MARGIN,
    )
}

fn border_of(style: Option<BorderStyle>) -> Border {
    match style {
        Some(style) => Border {
            color: Color::from_rgb8(style.rgb[0], style.rgb[1], style.rgb[2]),
            width: style.width,
            ..Border::default()
        },
        None => Border::default(),
    }
}

/// Create a video cell sized to its sprite.
fn create_video_cell(slot: &VideoSlot) -> Element<'_, Message> {
    let width = Length::Fixed(slot.bounds.extent.width as f32);
    let height = Length::Fixed(slot.bounds.extent.height as f32);

    let content: Element<'_, Message> = match &slot.video {
        Some(video) => VideoPlayer::new(video)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("no media").size(12).color(Color::WHITE))
            .center(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(PLACEHOLDER.into()),
                ..Default::default()
            })
            .into(),
    };

    let border = border_of(slot.border);
    container(content)
        .width(width)
        .height(height)
        .style(move |_theme: &Theme| container::Style {
            border,
            ..Default::default()
        })
        .into()
}

fn framed<'a>(
    content: impl Into<Element<'a, Message>>,
    dark_mode: bool,
) -> Element<'a, Message> {
    let border = slider_border(dark_mode);
    container(content)
        .padding(2)
        .style(move |_theme: &Theme| container::Style {
            border,
            ..Default::default()
        })
        .into()
}

/// Render the control panel.
fn render_control_panel(app: &App) -> Element<'_, Message> {
    let dark = app.dark_mode;
    let label = move |content: String| text(content).size(13).color(label_color(dark));

    let panel = column![
        label(format!("Tick interval: {} ms", app.ticker.interval_ms())),
        framed(
            slider(
                TICK_MS_RANGE,
                app.ticker.interval_ms(),
                Message::TickIntervalChanged
            ),
            dark
        ),
        label(format!("Size: {} px", app.video_size)),
        framed(
            slider(VIDEO_SIZE_RANGE, app.video_size, Message::VideoSizeChanged),
            dark
        ),
        label(format!("Videos: {}", app.video_count)),
        framed(
            slider(
                MIN_NUM_VIDEOS as u32..=MAX_NUM_VIDEOS as u32,
                app.video_count as u32,
                Message::VideoCountChanged
            ),
            dark
        ),
        button(text("Randomize").size(13))
            .on_press(Message::RandomizeVelocities)
            .padding(5),
        button(text("Toggle Dark Mode").size(13))
            .on_press(Message::ToggleDarkMode)
            .padding(5),
        button(text("[Browse]").size(13))
            .on_press(Message::BrowseFile)
            .padding(5),
        text(app.error.clone().unwrap_or_else(|| app.status.clone()))
            .size(11)
            .color(label_color(dark)),
        text(format!(
            "{} ticks, {} late",
            app.ticker.ticks(),
            app.ticker.late_ticks()
        ))
        .size(10)
        .color(label_color(dark)),
    ]
    .spacing(4);

    let background = backdrop_color(dark);
    container(panel)
        .padding(8)
        .width(Length::Fixed(CONTROL_PANEL_WIDTH))
        .height(Length::Fixed(CONTROL_PANEL_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

/// Render the main view: backdrop, every video at its sprite bounds, and
/// the control panel on top.
pub fn render_main_view(app: &App) -> Element<'_, Message> {
    let background = backdrop_color(app.dark_mode);
    let backdrop = container("")
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            ..Default::default()
        });

    let mut layers: Vec<Element<'_, Message>> = Vec::with_capacity(app.videos.len() + 2);
    layers.push(backdrop.into());

    for sprite in app.registry.iter() {
        if let Some(slot) = app.videos.slot(sprite.visual) {
            let origin = slot.bounds.origin;
            layers.push(
                pin(create_video_cell(slot))
                    .x(origin.x as f32)
                    .y(origin.y as f32)
                    .into(),
            );
        }
    }

    let origin = control_panel_origin(&app.viewport);
    layers.push(
        pin(render_control_panel(app))
            .x(origin.x)
            .y(origin.y)
            .into(),
    );

    stack(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
