use argh::FromArgs;

use heatgrid::grid::frame::{
    unix_from_device_epoch, ProbeReadings, ThermalFrame, FRAME_HEIGHT, FRAME_LEN, FRAME_WIDTH,
};
use heatgrid::grid::{FrameSeries, GridSize};
use heatgrid::resample::{
    interpolation::{CoordinateMapping, InterpolationMode},
    parallel::ExecutionStrategy,
    resample_frame, ResampleOptions,
};

#[derive(FromArgs)]
/// Resample a synthetic thermal camera frame to a display resolution
struct Args {
    /// output width (default: 320)
    #[argh(option, default = "320")]
    width: usize,

    /// output height (default: 240)
    #[argh(option, default = "240")]
    height: usize,

    /// interpolation: bilinear, nearest (default: bilinear)
    #[argh(option, short = 'm', default = "String::from(\"bilinear\")")]
    mode: String,

    /// place the output corners on the source corners
    #[argh(switch)]
    align_corners: bool,

    /// number of worker threads, 0 to run serially (default: 0)
    #[argh(option, short = 't', default = "0")]
    threads: usize,

    /// number of synthetic frames to generate (default: 10)
    #[argh(option, default = "10")]
    num_frames: usize,

    /// device timestamp to show; the latest frame at or before it is used (default: latest)
    #[argh(option)]
    at: Option<u64>,
}

/// A warm spot drifting across the camera grid over time.
fn synthetic_frame(
    index: usize,
    num_frames: usize,
) -> Result<ThermalFrame, Box<dyn std::error::Error>> {
    let t = index as f32 / num_frames.max(1) as f32;
    let (cx, cy) = (4.0 + t * 24.0, 12.0);

    let mut temps = Vec::with_capacity(FRAME_LEN);
    for y in 0..FRAME_HEIGHT {
        for x in 0..FRAME_WIDTH {
            let d2 = (x as f32 - cx).powi(2) + (y as f32 - cy).powi(2);
            temps.push(21.0 + 35.0 * (-d2 / 18.0).exp());
        }
    }

    let probes = ProbeReadings::from_slice(&[24.0 + t, 22.5 + t, 21.0 + t])?;
    let timestamp = unix_from_device_epoch(index as u64 * 60);
    Ok(ThermalFrame::new(timestamp, temps, probes)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mode = match args.mode.as_str() {
        "nearest" => InterpolationMode::Nearest,
        "bilinear" => InterpolationMode::Bilinear,
        other => return Err(format!("unknown interpolation mode: {other}").into()),
    };
    let mapping = if args.align_corners {
        CoordinateMapping::AlignCorners
    } else {
        CoordinateMapping::Proportional
    };
    let strategy = match args.threads {
        0 => ExecutionStrategy::Serial,
        n => ExecutionStrategy::Fixed(n),
    };

    let frames = (0..args.num_frames)
        .map(|i| synthetic_frame(i, args.num_frames))
        .collect::<Result<Vec<_>, _>>()?;
    let series = FrameSeries::new(frames)?;
    let (start, end) = series.time_range();
    log::info!("generated {} frames spanning {}..{}", series.len(), start, end);

    let frame = match args.at {
        Some(device_secs) => series.at_or_before(unix_from_device_epoch(device_secs)),
        None => series.last(),
    };
    log::info!(
        "selected frame at {} (probes: {:?})",
        frame.timestamp,
        frame.probes.to_array()
    );

    let options = ResampleOptions {
        mode,
        mapping,
        strategy,
    };
    let size = GridSize::new(args.width, args.height);
    let out = resample_frame(frame, size, options)?;

    let (src_lo, src_hi) = frame.temps().min_max();
    let (lo, hi) = out.min_max();
    log::info!("source range: {src_lo:.2}..{src_hi:.2}");
    println!(
        "resampled {} -> {}: range {lo:.2}..{hi:.2}",
        frame.temps().size(),
        out.size()
    );

    Ok(())
}
