//! A command line front end for colorlab.
//!
//! `colorlab convert` converts a coordinate triple between two color spaces,
//! whereas `colorlab show` prints a color in all four color spaces together
//! with its hashed hexadecimal format.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn, LevelFilter};

use colorlab::{Color, ColorSpace, Float};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "colorlab",
    version,
    about = "Convert colors between RGB, HSV, XYZ, and L*a*b*"
)]
struct CommandOptions {
    /// Digits after the decimal when printing coordinates, at most 15
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=15))]
    precision: u8,

    /// Suppress warnings about out-of-gamut colors
    #[arg(short, long)]
    quiet: bool,

    /// Minimum level of log messages, overriding RUST_LOG
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert coordinates from one color space to another
    Convert {
        /// The source color space: rgb, hsv, xyz, or lab
        #[arg(long)]
        from: ColorSpace,

        /// The target color space: rgb, hsv, xyz, or lab
        #[arg(long)]
        to: ColorSpace,

        /// Print the result clipped to the target's gamut
        #[arg(long)]
        clamp: bool,

        /// The three coordinates in the source color space
        #[arg(
            num_args = 3,
            required = true,
            allow_negative_numbers = true,
            value_name = "COORDINATE"
        )]
        coordinates: Vec<Float>,
    },

    /// Show a color in all four color spaces
    Show {
        /// The color, e.g., `#3399cc` or `lab(59.7 -12 -34.5)`
        color: String,
    },
}

fn init_logger(opts: &CommandOptions) {
    // default log level : warn
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if opts.quiet {
        builder.filter_level(LevelFilter::Error);
    } else if let Some(level) = opts.log_level {
        builder.filter_level(level.into());
    }

    builder.format_target(false).format_module_path(false).init();
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates and print the result in functional notation.
///
/// If the target color space is bounded and the result is out of gamut, this
/// function logs a warning. With `clamp`, it also clips the result.
fn convert<W: Write>(
    out: &mut W,
    from: ColorSpace,
    to: ColorSpace,
    coordinates: [Float; 3],
    clamp: bool,
    precision: usize,
) -> io::Result<()> {
    debug!("converting {:?} from {} to {}", coordinates, from, to);
    let mut color = Color::new(from, coordinates).to(to);

    if to.is_bounded() && !color.in_gamut() {
        warn!(
            "{} → {}: value {} out of range{}",
            from,
            to,
            color,
            if clamp { ", clipping" } else { "" }
        );
        if clamp {
            color = color.clip();
        }
    }

    writeln!(out, "{:.*}", precision, color)
}

/// Print the color in all four color spaces and as hashed hexadecimal.
///
/// The hexadecimal format is clamped to 24 bits. If that loses information,
/// this function logs a warning naming the color's original color space.
fn show<W: Write>(out: &mut W, color: &Color, precision: usize) -> io::Result<()> {
    let [r, g, b] = color.to_24bit_checked().unwrap_or_else(|err| {
        warn!("{}", err);
        err.clamped
    });
    writeln!(out, "#{:02x}{:02x}{:02x}", r, g, b)?;

    for space in [
        ColorSpace::Rgb,
        ColorSpace::Hsv,
        ColorSpace::Xyz,
        ColorSpace::Lab,
    ] {
        writeln!(out, "{:.*}", precision, color.to(space))?;
    }

    Ok(())
}

fn run<W: Write>(
    command: Command,
    precision: usize,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Convert {
            from,
            to,
            clamp,
            coordinates,
        } => {
            let coordinates = <[Float; 3]>::try_from(coordinates.as_slice())?;
            convert(out, from, to, coordinates, clamp, precision)?;
        }
        Command::Show { color } => {
            let color: Color = color.parse()?;
            debug!("parsed {:?}", color);
            show(out, &color, precision)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let opts = match CommandOptions::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logger(&opts);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(opts.command, usize::from(opts.precision), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr(), "error: {}", err);
            ExitCode::FAILURE
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{run, Command, CommandOptions};
    use clap::Parser;
    use colorlab::ColorSpace;

    fn output(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let opts = CommandOptions::try_parse_from(args)?;
        let mut out = Vec::new();
        run(opts.command, usize::from(opts.precision), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_options() -> Result<(), clap::Error> {
        let opts = CommandOptions::try_parse_from([
            "colorlab", "--precision", "1", "convert", "--from", "LAB", "--to", "rgb", "50",
            "-20", "30",
        ])?;
        assert_eq!(opts.precision, 1, "precision");
        assert!(
            matches!(
                opts.command,
                Command::Convert {
                    from: ColorSpace::Lab,
                    to: ColorSpace::Rgb,
                    clamp: false,
                    ..
                }
            ),
            "convert command"
        );

        assert!(
            CommandOptions::try_parse_from([
                "colorlab", "convert", "--from", "cmyk", "--to", "rgb", "1", "2", "3"
            ])
            .is_err(),
            "unknown color space"
        );
        assert!(
            CommandOptions::try_parse_from([
                "colorlab", "convert", "--from", "rgb", "--to", "hsv", "1", "2"
            ])
            .is_err(),
            "missing coordinate"
        );
        Ok(())
    }

    #[test]
    fn test_precision_bounds() -> Result<(), clap::Error> {
        let opts = CommandOptions::try_parse_from([
            "colorlab", "--precision", "15", "show", "#fff",
        ])?;
        assert_eq!(opts.precision, 15, "largest precision");

        for precision in ["16", "400", "-1"] {
            assert!(
                CommandOptions::try_parse_from([
                    "colorlab", "--precision", precision, "show", "#fff"
                ])
                .is_err(),
                "precision {} accepted",
                precision
            );
        }
        Ok(())
    }

    #[test]
    fn test_convert() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            output(&["colorlab", "convert", "--from", "rgb", "--to", "hsv", "51", "153", "204"])?,
            "hsv(200 75 80)\n",
            "steel blue in HSV"
        );
        assert_eq!(
            output(&["colorlab", "convert", "--from", "hsv", "--to", "rgb", "0", "150", "100"])?,
            "rgb(255 -127.5 -127.5)\n",
            "unclamped result"
        );
        assert_eq!(
            output(&[
                "colorlab", "convert", "--clamp", "--from", "hsv", "--to", "rgb", "0", "150", "100"
            ])?,
            "rgb(255 0 0)\n",
            "clamped result"
        );
        assert_eq!(
            output(&[
                "colorlab", "--precision", "1", "convert", "--from", "rgb", "--to", "lab", "51",
                "153", "204"
            ])?,
            "lab(59.7 -12 -34.5)\n",
            "steel blue in Lab"
        );
        Ok(())
    }

    #[test]
    fn test_show() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            output(&["colorlab", "show", "#3399cc"])?,
            concat!(
                "#3399cc\n",
                "rgb(51 153 204)\n",
                "hsv(200 75 80)\n",
                "xyz(23.651 27.843 61.243)\n",
                "lab(59.747 -12.003 -34.495)\n",
            ),
            "steel blue"
        );

        let lines = output(&["colorlab", "show", "lab(100 127 127)"])?;
        assert!(lines.starts_with("#ff4600\n"), "clamped hex for {}", lines);

        assert!(output(&["colorlab", "show", "lab(100 127"]).is_err(), "malformed color");
        Ok(())
    }
}
