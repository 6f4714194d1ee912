use std::path::PathBuf;
use std::time::Instant;
use iced::Event;

#[derive(Clone, Debug)]
pub enum Message {
    Tick(Instant),
    TickIntervalChanged(u32),
    VideoSizeChanged(u32),
    VideoCountChanged(u32),
    RandomizeVelocities,
    ToggleDarkMode,
    BrowseFile,
    FileDropped(PathBuf),
    EventOccurred(Event),
}
