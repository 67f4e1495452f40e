//! Polished Pong headless runner
//!
//! Plays one computer-vs-computer match and logs the result. Runs on
//! simulated time unless `--realtime` is given.
//!
//! Usage: `polished-pong [--realtime] [--difficulty easy|normal|hard]
//! [settings.json]`. Set `RUST_LOG=debug` for per-point detail.

use polished_pong::audio::AudioManager;
use polished_pong::platform::{
    EventQueue, FrameClock, KeyState, SimulatedTime, SystemTime, TimeSource,
};
use polished_pong::renderer::{build_scene, shapes};
use polished_pong::sim::GameEvent;
use polished_pong::{App, Difficulty, PlayMode, Settings};

/// Ten minutes at 60 fps
const MAX_FRAMES: u64 = 60 * 60 * 10;

/// Command-line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    realtime: bool,
    difficulty: Option<Difficulty>,
    settings_path: Option<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Options {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--realtime" => options.realtime = true,
            "--difficulty" => match args.next().as_deref().map(Difficulty::from_str) {
                Some(Some(difficulty)) => options.difficulty = Some(difficulty),
                _ => log::warn!("--difficulty expects easy, normal or hard"),
            },
            _ if arg.starts_with("--") => log::warn!("Unknown option {}", arg),
            _ => options.settings_path = Some(arg),
        }
    }
    options
}

fn load_settings(path: Option<&str>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match Settings::from_json(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings in {}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {}", path, e);
            Settings::default()
        }
    }
}

fn run<T: TimeSource>(app: &mut App, mut clock: FrameClock<T>) {
    let mut audio = AudioManager::default();
    let keys = KeyState::new();
    let mut queue = EventQueue::new();

    app.start_match(clock.now_ms());

    let mut frames = 0;
    let mut vertex_count = 0;
    while app.running && frames < MAX_FRAMES {
        let time = clock.tick();
        let events = app.frame(&keys, &queue.drain(), time);
        audio.play_events(&events);

        if events.iter().any(|e| matches!(e, GameEvent::PointScored(_))) {
            if let Some(state) = app.match_state() {
                log::debug!(
                    "{} ms: {} - {}",
                    time.now_ms,
                    state.score.left,
                    state.score.right
                );
            }
        }

        vertex_count = shapes::tessellate(&build_scene(app, time.now_ms)).len();
        frames += 1;

        if app.match_state().is_some_and(|s| s.is_over()) {
            break;
        }
    }

    match app.match_state() {
        Some(state) if state.is_over() => log::info!(
            "Match over after {} frames: {} - {} ({} vertices in last frame)",
            frames,
            state.score.left,
            state.score.right,
            vertex_count
        ),
        Some(state) => log::info!(
            "Stopped after {} frames without a winner: {} - {}",
            frames,
            state.score.left,
            state.score.right
        ),
        None => log::info!("No match played"),
    }
}

fn main() {
    env_logger::init();
    log::info!("Polished Pong (headless) starting...");

    let options = parse_args(std::env::args().skip(1));
    let mut settings = load_settings(options.settings_path.as_deref());
    if let Some(difficulty) = options.difficulty {
        settings.difficulty = difficulty;
    }

    let mut app = App::new(Settings {
        mode: PlayMode::Attract,
        ..settings
    });

    if options.realtime {
        run(&mut app, FrameClock::new(SystemTime::default()));
    } else {
        run(&mut app, FrameClock::new(SimulatedTime::new(0)));
    }
}
