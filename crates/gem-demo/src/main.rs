// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! gem demo CLI
//!
//! Small command-line tour of the gem math crates. Results go to stdout;
//! diagnostics go to stderr through `tracing` (filter with `RUST_LOG`, e.g.
//! `RUST_LOG=debug` to see why a checked constructor rejected its input).

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gem_core::checked::{try_inverse, try_orthographic, try_perspective};
use gem_core::math::{self, deg_to_rad, rad_to_deg, Color3, Mat4, Quat, Real, Vec2, Vec3};
use gem_geom::color::{hsv_to_rgb, rgb_to_hsv};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command to execute (defaults to `tour`)
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through vector arithmetic and print the results
    Tour,
    /// Build an orthographic projection
    Ortho {
        /// Left clipping plane
        #[arg(long, allow_negative_numbers = true, default_value_t = -1.6)]
        left: Real,
        /// Right clipping plane
        #[arg(long, allow_negative_numbers = true, default_value_t = 1.6)]
        right: Real,
        /// Bottom clipping plane
        #[arg(long, allow_negative_numbers = true, default_value_t = -0.9)]
        bottom: Real,
        /// Top clipping plane
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.9)]
        top: Real,
        /// Near clipping plane
        #[arg(long, allow_negative_numbers = true, default_value_t = -1.0)]
        near: Real,
        /// Far clipping plane
        #[arg(long, allow_negative_numbers = true, default_value_t = 1.0)]
        far: Real,
    },
    /// Build a perspective projection
    Perspective {
        /// Vertical field of view in degrees
        #[arg(long, allow_negative_numbers = true, default_value_t = 60.0)]
        fov: Real,
        /// Width / height
        #[arg(long, allow_negative_numbers = true, default_value_t = 16.0 / 9.0)]
        aspect: Real,
        /// Near plane distance
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.1)]
        near: Real,
        /// Far plane distance
        #[arg(long, allow_negative_numbers = true, default_value_t = 100.0)]
        far: Real,
    },
    /// Convert Euler angles (degrees) to a quaternion and back
    Euler {
        /// Rotation about X, applied first
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        roll: Real,
        /// Rotation about Y
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        pitch: Real,
        /// Rotation about Z, applied last
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        yaw: Real,
    },
    /// Invert a 4x4 matrix given as 16 column-major values
    Invert {
        /// Matrix elements, column by column
        #[arg(num_args = 16, required = true, allow_negative_numbers = true)]
        values: Vec<Real>,
    },
    /// Convert a 0-255 RGB color to HSV and back
    Hsv {
        /// Red channel
        r: Real,
        /// Green channel
        g: Real,
        /// Blue channel
        b: Real,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args.cmd.unwrap_or(Command::Tour), &mut out)
}

fn run(cmd: Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Tour => tour(out),
        Command::Ortho {
            left,
            right,
            bottom,
            top,
            near,
            far,
        } => {
            info!(left, right, bottom, top, near, far, "building orthographic projection");
            let m = try_orthographic(left, right, bottom, top, near, far)
                .context("invalid orthographic bounds")?;
            writeln!(out, "{m}")?;
            Ok(())
        }
        Command::Perspective {
            fov,
            aspect,
            near,
            far,
        } => {
            info!(fov, aspect, near, far, "building perspective projection");
            let m = try_perspective(fov, aspect, near, far)
                .context("invalid perspective parameters")?;
            writeln!(out, "{m}")?;
            Ok(())
        }
        Command::Euler { roll, pitch, yaw } => euler(roll, pitch, yaw, out),
        Command::Invert { values } => {
            let data = <[Real; 16]>::try_from(values.as_slice())
                .context("expected exactly 16 matrix values")?;
            let m = Mat4::new(data);
            info!(determinant = m.determinant(), "inverting matrix");
            let inv = try_inverse(&m).context("matrix is not invertible")?;
            writeln!(out, "{inv}")?;
            Ok(())
        }
        Command::Hsv { r, g, b } => {
            let rgb = Color3::new(r, g, b);
            let hsv = rgb_to_hsv(rgb);
            info!(%rgb, %hsv, "converted color");
            writeln!(out, "hsv {hsv}")?;
            writeln!(out, "rgb {}", hsv_to_rgb(hsv))?;
            Ok(())
        }
    }
}

fn euler(roll: Real, pitch: Real, yaw: Real, out: &mut impl Write) -> Result<()> {
    let radians = Vec3::new(deg_to_rad(roll), deg_to_rad(pitch), deg_to_rad(yaw));
    let q = Quat::from_euler_angles(radians);
    info!(%q, "quaternion from euler angles");

    let back = q.to_euler_angles();
    writeln!(out, "quat {q}")?;
    writeln!(out, "{}", q.to_mat4())?;
    writeln!(
        out,
        "euler {}",
        Vec3::new(rad_to_deg(back.x()), rad_to_deg(back.y()), rad_to_deg(back.z()))
    )?;
    Ok(())
}

fn tour(out: &mut impl Write) -> Result<()> {
    writeln!(out, "VEC2 ==============")?;
    {
        let b: Vec2 = Vec2::splat(1.0);
        let c = Vec2::new(2.0, 1.5);
        let mut a = b + c - Vec2::new(2.0, -5.0);
        a += Vec2::new(1.0, -5.0);

        writeln!(out, "{}", a.magnitude())?;
        math::normalize(&mut a);
        writeln!(out, "{}", a.magnitude())?;

        // Method and free-function forms agree.
        writeln!(out, "{}", a.dot(&b))?;
        writeln!(out, "{}", math::dot(&a, &b))?;
        writeln!(out, "{a} {b} {c}")?;

        let right_angle = math::angle(&Vec2::<Real>::UNIT_X, &Vec2::UNIT_Y);
        writeln!(out, "{}", rad_to_deg(right_angle))?;

        if a == b {
            writeln!(out, "a and b are equal")?;
        } else {
            writeln!(out, "a and b are different")?;
        }
        a += b;
        writeln!(out, "{a}")?;
    }

    writeln!(out, "VEC3 ==============")?;
    {
        let b: Vec3 = Vec3::splat(1.0);
        let c = Vec3::new(2.0, 1.5, 4.25);
        let mut a = b + c - Vec3::new(2.0, -5.0, 1.0);
        a += Vec3::new(1.0, -5.0, 3.0);

        writeln!(out, "{}", a.magnitude())?;
        writeln!(out, "{}", a.dot(&b))?;
        writeln!(out, "{}", math::dot(&a, &b))?;
        writeln!(out, "{a} {b} {c}")?;
        writeln!(out, "{}", Vec3::<Real>::UNIT_X.cross(&Vec3::UNIT_Y))?;
    }

    writeln!(out, "MAT4 ==============")?;
    {
        let ortho_camera: Mat4 = Mat4::orthographic_2d(-1.6, 1.6, -0.9, 0.9);
        let perspective_camera: Mat4 = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
        writeln!(out, "{ortho_camera}")?;
        writeln!(out, "{perspective_camera}")?;
        writeln!(out, "{}", perspective_camera * ortho_camera.inverse())?;
    }
    Ok(())
}
