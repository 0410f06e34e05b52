pub mod api;
pub mod app;
pub mod appearance;
pub mod config;
pub mod message;
pub mod remote;
pub mod screen;
pub mod util;
pub mod widget;

pub use app::Carta;
pub use message::Message;

pub fn run() -> iced::Result {
    iced::application("Carta", Carta::update, Carta::view)
        .subscription(Carta::subscription)
        .theme(|_| iced::Theme::Light)
        .antialiasing(true)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .run_with(Carta::new)
}
