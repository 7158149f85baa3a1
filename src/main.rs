use pellet_mania::app::App;
use pellet_mania::constants::LOOP_TIME;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

/// The main entry point of the application.
///
/// Installs the tracing subscriber, initializes the app, and runs the main
/// loop until an exit is requested.
pub fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    let mut app = App::new().expect("Could not create app");

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    loop {
        if !app.run() {
            break;
        }
    }
}
