// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tundra CLI
//!
//! Developer tool for checking rotation math against editor data: Euler
//! conversion, composition, interpolation and packed rotation dumps.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use tundra_app_core::config::ConfigService;
use tundra_app_core::prefs_port::PrefsPort;
use tundra_config_fs::FsConfigStore;
use tundra_math::{Degrees, PackedQuat, Quat, Radians};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Log verbosity (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Build a rotation from bank, heading and attitude
    Euler {
        #[clap(allow_negative_numbers = true)]
        bank: f32,
        #[clap(allow_negative_numbers = true)]
        heading: f32,
        #[clap(allow_negative_numbers = true)]
        attitude: f32,
        /// Angles are given in degrees instead of radians
        #[clap(long)]
        degrees: bool,
    },
    /// Print pitch, yaw and roll (degrees) for a rotation
    ToEuler {
        #[clap(allow_negative_numbers = true, num_args = 4, value_names = ["X", "Y", "Z", "W"])]
        q: Vec<f32>,
    },
    /// Compose two rotations (a then b)
    Compose {
        #[clap(allow_negative_numbers = true, num_args = 8, value_names = ["AX", "AY", "AZ", "AW", "BX", "BY", "BZ", "BW"])]
        q: Vec<f32>,
    },
    /// Spherically interpolate between two rotations
    Slerp {
        #[clap(allow_negative_numbers = true, num_args = 8, value_names = ["AX", "AY", "AZ", "AW", "BX", "BY", "BZ", "BW"])]
        q: Vec<f32>,
        /// Blend factor in [0, 1]
        #[clap(long, default_value_t = 0.5)]
        t: f32,
    },
    /// Decode packed 16-bit rotations from hex bytes
    Unpack {
        /// Little-endian records, 16 hex digits each
        hex: String,
    },
    /// Show saved editor preferences
    Prefs,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn quat_at(values: &[f32], offset: usize) -> Result<Quat> {
    let slice = values
        .get(offset..offset + 4)
        .context("expected four quaternion components")?;
    Ok(Quat::new(slice[0], slice[1], slice[2], slice[3]))
}

fn write_quat(out: &mut impl Write, q: &Quat) -> io::Result<()> {
    let [x, y, z, w] = q.to_array();
    writeln!(out, "{x:.6} {y:.6} {z:.6} {w:.6}")
}

fn run(cmd: Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Euler {
            bank,
            heading,
            attitude,
            degrees,
        } => {
            let unit = |v: f32| {
                if degrees {
                    Radians::from(Degrees(v))
                } else {
                    Radians(v)
                }
            };
            let q = Quat::from_euler(unit(bank), unit(heading), unit(attitude));
            debug!(?q, "from_euler");
            write_quat(out, &q)?;
        }
        Command::ToEuler { q } => {
            let angles = quat_at(&q, 0)?.to_euler_degrees();
            writeln!(
                out,
                "pitch={:.4} yaw={:.4} roll={:.4}",
                angles.x(),
                angles.y(),
                angles.z()
            )?;
        }
        Command::Compose { q } => {
            let c = quat_at(&q, 0)?.compose(&quat_at(&q, 4)?);
            write_quat(out, &c)?;
        }
        Command::Slerp { q, t } => {
            let s = quat_at(&q, 0)?.slerp(&quat_at(&q, 4)?, t);
            write_quat(out, &s)?;
        }
        Command::Unpack { hex } => {
            let bytes = hex::decode(hex.trim()).context("invalid hex input")?;
            let records = PackedQuat::read_all(&bytes)?;
            info!(count = records.len(), "decoded packed rotations");
            for r in records {
                writeln!(out, "{} {} {} {}", r.x, r.y, r.z, r.w)?;
            }
        }
        Command::Prefs => {
            let store = FsConfigStore::new()?;
            writeln!(out, "# {}", store.base().display())?;
            let prefs = ConfigService::new(store).load_prefs().unwrap_or_default();
            writeln!(out, "{}", serde_json::to_string_pretty(&prefs)?)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args.cmd, &mut out)
}
