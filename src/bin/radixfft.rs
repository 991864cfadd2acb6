use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use radixfft::reference::{max_abs_difference, reference_fft};
use radixfft::{dft, fft, fft_cooley_tukey, pad_and_transform, pad_to_power_of_two};
use radixfft::{Complex, Result, Spectrum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_SAMPLES: [f64; 8] = [0.5, 0.7, 0.3, 0.56, 0.56, 0.34, 0.77, 0.34];

type Transform = fn(&[Complex<f64>]) -> Result<Spectrum<f64>>;

#[derive(Parser, Debug)]
#[command(name = "radixfft")]
#[command(about = "Compare the hand-written transforms against rustfft", long_about = None)]
struct Cli {
    /// Which transform to run next to the reference.
    #[arg(long, value_enum, default_value_t = Variant::All)]
    variant: Variant,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Samples to transform. Zero padded to the next power of two.
    #[arg(value_name = "SAMPLES", allow_negative_numbers = true)]
    samples: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    All,
    Dft,
    Fft,
    CooleyTukey,
}

impl Variant {
    fn transforms(self) -> Vec<(&'static str, Transform)> {
        let all: [(&'static str, Transform, Variant); 3] = [
            ("DFT", dft, Variant::Dft),
            ("FFT", fft, Variant::Fft),
            ("COOLEY-TUKEY", fft_cooley_tukey, Variant::CooleyTukey),
        ];
        all.into_iter()
            .filter(|(_, _, variant)| self == Variant::All || self == *variant)
            .map(|(name, transform, _)| (name, transform))
            .collect()
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_spectrum(name: &str, spectrum: &[Complex<f64>]) {
    println!("{name}:");
    let bins: Vec<String> = spectrum.iter().map(|bin| format!("{bin:.8}")).collect();
    println!("[{}]", bins.join(", "));
}

fn run(samples: &[f64], variant: Variant) -> Result<()> {
    let reference = reference_fft(&pad_to_power_of_two(samples)?)?;
    print_spectrum("RUSTFFT", &reference);

    for (name, transform) in variant.transforms() {
        let spectrum = pad_and_transform(samples, transform)?;
        print_spectrum(name, &spectrum);
        if let Some(difference) = max_abs_difference(&reference, &spectrum) {
            info!(transform = name, difference, "compared against rustfft");
            println!("max deviation from RUSTFFT: {difference:e}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let samples = if cli.samples.is_empty() {
        DEFAULT_SAMPLES.to_vec()
    } else {
        cli.samples
    };
    info!(samples = samples.len(), variant = ?cli.variant, "transforming");

    match run(&samples, cli.variant) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "transform failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(variant: Variant) -> Vec<&'static str> {
        variant.transforms().into_iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn single_variant_runs_only_its_transform() {
        assert_eq!(names(Variant::Dft), ["DFT"]);
        assert_eq!(names(Variant::Fft), ["FFT"]);
        assert_eq!(names(Variant::CooleyTukey), ["COOLEY-TUKEY"]);
    }

    #[test]
    fn all_runs_every_transform() {
        assert_eq!(names(Variant::All), ["DFT", "FFT", "COOLEY-TUKEY"]);
    }

    #[test]
    fn names_match_their_transforms() {
        let samples = [Complex::new(1.0_f64, 0.0), Complex::new(0.0, 0.0)];
        for (name, transform) in Variant::All.transforms() {
            let expected = match name {
                "DFT" => dft(&samples),
                "FFT" => fft(&samples),
                _ => fft_cooley_tukey(&samples),
            };
            assert_eq!(transform(&samples), expected, "{name}");
        }
    }

    #[test]
    fn parses_negative_samples_and_variant() {
        let args = ["radixfft", "--variant", "cooley-tukey", "-0.5", "1"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.variant, Variant::CooleyTukey);
        assert_eq!(cli.samples, [-0.5, 1.0]);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn run_rejects_an_empty_signal() {
        assert!(run(&[], Variant::All).is_err());
    }
}
