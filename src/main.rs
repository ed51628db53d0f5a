use gui::App;
use iced::{Application, Settings};
use snooscope_core::CoreError;

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter("snooscope=debug,gui=debug,reddit_client=debug,comment_stats=debug")
        .init();

    tracing::info!("Starting Snooscope - Reddit User Analyzer");

    let settings = Settings {
        window: iced::window::Settings {
            size: iced::Size::new(1200.0, 800.0),
            min_size: Some(iced::Size::new(800.0, 600.0)),
            ..Default::default()
        },
        ..Default::default()
    };

    SnooscopeApp::run(settings).map_err(|e| {
        tracing::error!("Application error: {}", e);
        CoreError::Internal {
            message: format!("GUI error: {e}"),
        }
    })
}

struct SnooscopeApp {
    app: App,
}

impl Application for SnooscopeApp {
    type Message = gui::Message;
    type Theme = iced::Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, iced::Command<Self::Message>) {
        tracing::info!("Initializing application");
        (Self { app: App::new() }, iced::Command::none())
    }

    fn title(&self) -> String {
        "Snooscope - Reddit User Analyzer".to_string()
    }

    fn update(&mut self, message: Self::Message) -> iced::Command<Self::Message> {
        self.app.update(message)
    }

    fn view(&self) -> iced::Element<Self::Message> {
        self.app.view()
    }
}
