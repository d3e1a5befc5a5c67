//! Headless fly-through: selects every registered point in turn, re-targets
//! one flight mid-way, and logs the camera as it moves.
//!
//! ```text
//! RUST_LOG=info vantage [points.toml] [options.toml]
//! ```
//!
//! A missing options file is created with the defaults so it can be edited
//! for the next run; other `.toml` presets in its directory are listed.

use std::path::Path;
use std::thread;
use std::time::Duration;

use glam::Vec3;
use vantage::camera::CameraRig;
use vantage::framing::ModelFraming;
use vantage::options::Options;
use vantage::points::PointRegistry;
use vantage::transition::TickOutcome;
use vantage::util::frame_timing::FrameTiming;
use vantage::{NavCommand, Navigator, VantageError};

const TARGET_FPS: u32 = 60;

fn load_inputs() -> Result<(PointRegistry, Options), VantageError> {
    let mut args = std::env::args().skip(1);
    let registry = match args.next() {
        Some(path) => PointRegistry::load(Path::new(&path))?,
        None => PointRegistry::builtin(),
    };
    let options = match args.next() {
        Some(path) => load_options(Path::new(&path))?,
        None => Options::default(),
    };
    Ok((registry, options))
}

fn load_options(path: &Path) -> Result<Options, VantageError> {
    if !path.exists() {
        let options = Options::default();
        options.save(path)?;
        log::info!("wrote default options to {}", path.display());
        return Ok(options);
    }
    let options = Options::load(path)?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    log::info!(
        "presets in {}: {:?}",
        dir.display(),
        Options::list_presets(dir)
    );
    Ok(options)
}

/// Frames in half of a `duration_ms` flight at the target rate.
fn half_flight_frames(duration_ms: u64) -> usize {
    duration_ms as usize * TARGET_FPS as usize / 2000
}

/// Run frames in real time until the flight ends, or until `frame_budget`
/// frames have passed.
fn fly(navigator: &mut Navigator, timing: &mut FrameTiming, frame_budget: usize) {
    let mut frames = 0;
    while frames < frame_budget {
        if !timing.should_render() {
            thread::sleep(Duration::from_millis(1));
            continue;
        }
        let dt = timing.begin_frame();
        frames += 1;
        match navigator.frame(dt) {
            TickOutcome::Idle => return,
            TickOutcome::Animating { progress } => {
                if frames % 15 == 0 {
                    log::info!(
                        "  {:>3.0}%  eye {:.3}",
                        progress * 100.0,
                        navigator.camera().position()
                    );
                }
            }
            TickOutcome::Completed(handle) => {
                log::info!(
                    "  flight {} done: eye {:.3}, {:.1} fps",
                    handle.id(),
                    navigator.camera().position(),
                    timing.fps()
                );
                return;
            }
        }
    }
}

fn main() {
    env_logger::init();

    let (registry, options) = match load_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    // A 20-unit model is scaled into the frame the viewpoints assume.
    let framing = ModelFraming::from_bounds(
        Vec3::new(-12.0, -3.0, -4.0),
        Vec3::new(8.0, 5.0, 4.0),
        &options.framing,
    );
    log::info!(
        "model framing: offset {}, scale {:.3}",
        framing.offset,
        framing.scale
    );

    let ids: Vec<String> =
        registry.all().iter().map(|p| p.id().to_owned()).collect();
    let camera = CameraRig::from_options(&options.camera);
    let mut navigator = Navigator::new(registry, &options, camera);
    let mut timing = FrameTiming::new(TARGET_FPS);

    for id in &ids {
        log::info!("selecting {id}");
        if let Err(e) =
            navigator.execute(NavCommand::SelectPoint { id: id.clone() })
        {
            log::warn!("selection of {id} failed: {e}");
            continue;
        }
        fly(&mut navigator, &mut timing, usize::MAX);
    }

    // Re-target halfway through a flight.
    if ids.len() >= 2 {
        log::info!("selecting {} then {} mid-flight", ids[0], ids[1]);
        let first = navigator.select(&ids[0]);
        let half_flight = half_flight_frames(options.transition.duration_ms);
        fly(&mut navigator, &mut timing, half_flight);
        let second = navigator.select(&ids[1]);
        if let Err(e) = first.and(second) {
            log::warn!("re-targeting failed: {e}");
        }
        fly(&mut navigator, &mut timing, usize::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_flight_follows_target_rate() {
        assert_eq!(half_flight_frames(1500), 45);
        assert_eq!(half_flight_frames(400), 12);
    }

    #[test]
    fn missing_options_file_is_written_with_defaults() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-demo-{}", std::process::id()));
        let path = dir.join("viewer.toml");
        let _ = std::fs::remove_dir_all(&dir);

        let created = load_options(&path).unwrap();
        assert_eq!(created, Options::default());
        assert!(path.exists());

        let mut fast = Options::default();
        fast.transition.duration_ms = 300;
        fast.save(&dir.join("fast.toml")).unwrap();
        assert_eq!(load_options(&path).unwrap(), Options::default());
        assert_eq!(
            Options::list_presets(&dir),
            vec!["fast".to_owned(), "viewer".to_owned()]
        );
        let _ = std::fs::remove_dir_all(&dir);
    }
}
