use car_rig::mesh::{CpuMesh, DeformableMesh};
use car_rig::rig::{CarRig, CarRigBuilder, FramePose, HeadingMode, RigConfig, WheelSlot};
use car_rig::RigResult;
use clap::Parser;
use glam::Vec3;
use std::process::ExitCode;

const BODY_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 0.5, 2.0);
const WHEEL_RADIUS: f32 = 0.35;
const WHEEL_WIDTH: f32 = 0.25;
const WHEEL_SEGMENTS: u32 = 24;
const DEMO_SPEED: f32 = 2.0;

/// Headless driver: poses a procedural car for a number of frames and logs
/// where the body and wheels end up.
#[derive(Parser, Debug)]
#[command(name = "car-rig", version, about)]
struct Args {
    /// Rig configuration (JSON). Without it the car drives forward along +Z
    /// with its wheels rolling to match.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value = "120")]
    frames: u32,

    /// Simulated frame rate.
    #[arg(long, default_value = "60.0")]
    fps: f32,

    /// Print the last frame's composite matrices as JSON.
    #[arg(long)]
    dump: bool,
}

fn demo_config() -> RigConfig {
    let mut config = RigConfig {
        displacement: Vec3::new(0.0, 0.0, DEMO_SPEED),
        heading: HeadingMode::FollowDisplacement,
        ..RigConfig::default()
    };

    // Rolling without slipping: angular speed = linear speed / radius.
    let spin = (DEMO_SPEED / WHEEL_RADIUS).to_degrees();
    for wheel in &mut config.wheels {
        wheel.spin = spin;
    }
    config
}

fn build_rig(config: &RigConfig) -> CarRig<CpuMesh> {
    let body = CpuMesh::cuboid(BODY_HALF_EXTENTS);
    let wheels = std::array::from_fn(|_| CpuMesh::wheel(WHEEL_RADIUS, WHEEL_WIDTH, WHEEL_SEGMENTS));
    CarRigBuilder::from_config(config).build(body, wheels)
}

fn log_frame(frame: u32, rig: &CarRig<CpuMesh>, pose: &FramePose) {
    let body = rig.body().bounds();
    log::info!(
        "frame {:>4} t={:.3}s body center {:?} size {:?}",
        frame,
        pose.elapsed,
        body.center(),
        body.size()
    );
    for slot in WheelSlot::ALL {
        let wheel = rig.wheel(slot);
        log::debug!(
            "  {:?}: hub {:?}, {} vertices",
            slot,
            wheel.mesh().bounds().center(),
            wheel.mesh().vertex_count()
        );
    }
}

/// Steps `config`'s rig through `frames` frames at `fps`, returning the rig
/// and the last frame's pose.
fn simulate(config: &RigConfig, frames: u32, fps: f32) -> RigResult<(CarRig<CpuMesh>, FramePose)> {
    let mut rig = build_rig(config);
    let fps = if fps > 0.0 { fps } else { 60.0 };
    let report_every = (fps.round() as u32).max(1);

    let mut last = rig.pose(0.0);
    for frame in 0..frames {
        let elapsed = frame as f32 / fps;
        last = rig.update(elapsed)?;

        if frame % report_every == 0 || frame + 1 == frames {
            log_frame(frame, &rig, &last);
        }
    }

    Ok((rig, last))
}

fn run(args: &Args) -> RigResult<()> {
    let config = match &args.config {
        Some(path) => RigConfig::load(path)?,
        None => demo_config(),
    };

    let (_, last) = simulate(&config, args.frames, args.fps)?;

    if args.dump {
        let json = serde_json::to_string_pretty(&last)?;
        println!("{json}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_rig::math::transform_point;
    use car_rig::RigError;

    const EPS: f32 = 1e-4;

    fn args(config: Option<&str>, frames: u32, dump: bool) -> Args {
        Args {
            config: config.map(Into::into),
            frames,
            fps: 60.0,
            dump,
        }
    }

    #[test]
    fn demo_spin_matches_rolling_speed() {
        let config = demo_config();
        let expected = (DEMO_SPEED / WHEEL_RADIUS).to_degrees();
        for wheel in config.wheel_params() {
            assert!((wheel.spin - expected).abs() < EPS);
        }
    }

    #[test]
    fn demo_wheels_do_not_slip_at_ground_contact() {
        let rig = build_rig(&demo_config());
        let dt = 1.0 / 60.0;
        let contact = Vec3::new(0.0, -WHEEL_RADIUS, 0.0);

        for slot in WheelSlot::ALL {
            let before = transform_point(rig.pose(0.0).wheel(slot), contact);
            let after = transform_point(rig.pose(dt).wheel(slot), contact);
            let hub_before = transform_point(rig.pose(0.0).wheel(slot), Vec3::ZERO);
            let hub_after = transform_point(rig.pose(dt).wheel(slot), Vec3::ZERO);

            assert!((hub_after.z - hub_before.z - DEMO_SPEED * dt).abs() < EPS);
            // Only second-order drift remains at the contact point.
            assert!((after.z - before.z).abs() < 1e-3, "{slot:?} slipped");
        }
    }

    #[test]
    fn simulate_advances_one_second_at_sixty_fps() {
        let (rig, last) = simulate(&demo_config(), 61, 60.0).unwrap();
        assert_eq!(last.elapsed, 1.0);

        let center = rig.body().bounds().center();
        assert!(center.abs_diff_eq(Vec3::new(0.0, 0.0, DEMO_SPEED), EPS));
    }

    #[test]
    fn zero_frames_leaves_rig_at_rest() {
        let (rig, last) = simulate(&demo_config(), 0, 60.0).unwrap();
        assert_eq!(last.elapsed, 0.0);
        assert_eq!(rig.body().vertices(), rig.body_buffer().base());
    }

    #[test]
    fn run_with_dump_succeeds() {
        assert!(run(&args(None, 3, true)).is_ok());
    }

    #[test]
    fn run_reports_missing_config() {
        let err = run(&args(Some("/nonexistent/car-rig.json"), 3, false)).unwrap_err();
        assert!(matches!(err, RigError::Io(_)));
    }
}
