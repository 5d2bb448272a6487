//! Command-line interface for spiralizing tile images

use crate::io::configuration::{
    DEFAULT_A, DEFAULT_B, DEFAULT_RANGE, DEFAULT_SCALE, DEFAULT_SIZE, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::export_raster;
use crate::io::progress::ProgressManager;
use crate::io::session::{RenderRequest, Session};
use crate::mapping::grid::{OutputSize, SampleWindow};
use crate::mapping::lens::Lens;
use crate::mapping::spiral::SpiralParams;
use clap::Parser;
use std::path::{Path, PathBuf};

fn parse_lens(value: &str) -> std::result::Result<Lens, String> {
    Lens::from_cli_name(value).ok_or_else(|| {
        let names: Vec<&str> = Lens::all().iter().map(|l| l.cli_name()).collect();
        format!("unknown function '{value}' (expected one of: {})", names.join(", "))
    })
}

#[derive(Parser)]
#[command(name = "spiraltile")]
#[command(
    author,
    version,
    about = "Generate Escher-like spiral tilings from a source tile image"
)]
/// Command-line arguments for the spiral tiling tool
pub struct Cli {
    /// Input tile PNG file or directory of tiles to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// File to save the image to; defaults to <tile>_spiral.png
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Parameter 'a' for scaling/rotating the spiral
    #[arg(short, long, default_value_t = DEFAULT_A, allow_hyphen_values = true)]
    pub a: i32,

    /// Parameter 'b' for scaling/rotating the spiral
    #[arg(short, long, default_value_t = DEFAULT_B, allow_hyphen_values = true)]
    pub b: i32,

    /// Size in pixels of the final image, width height
    #[arg(
        short = 's',
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        default_values_t = [DEFAULT_SIZE, DEFAULT_SIZE]
    )]
    pub size: Vec<usize>,

    /// Scaling factor controlling tile repeats per spiral winding
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Boundary of the complex plane sample window, +/- this value on both axes
    #[arg(short, long, default_value_t = DEFAULT_RANGE)]
    pub range: f64,

    /// Analytic function applied before the spiral step
    #[arg(short = 'f', long = "function", value_parser = parse_lens, default_value = "log")]
    pub function: Lens,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Assemble the render request described by the arguments
    pub fn render_request(&self) -> RenderRequest {
        let width = self.size.first().copied().unwrap_or(DEFAULT_SIZE);
        let height = self.size.get(1).copied().unwrap_or(DEFAULT_SIZE);
        RenderRequest {
            params: SpiralParams::new(self.a, self.b, self.scale),
            window: SampleWindow::symmetric(self.range),
            size: OutputSize::new(width, height),
            lens: self.function,
        }
    }
}

/// Orchestrates batch spiralizing of tile files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// A failed file is reported and the batch continues, so one bad
    /// tile or parameter set does not abandon the rest of the run.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let request = self.cli.render_request();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &request);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            if self.cli.outfile.is_some() {
                return Err(crate::io::error::io_error(
                    "--outfile applies to single-file targets, not directories",
                ));
            }
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback on per-file failures
    #[allow(clippy::print_stderr)]
    fn process_file(&self, input_path: &Path, request: &RenderRequest) {
        let output_path = self.output_path_for(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let result = Session::load(input_path)
            .and_then(|session| session.render(request))
            .and_then(|raster| export_raster(&raster, &output_path));

        match result {
            Ok(()) => {
                if let Some(ref pm) = self.progress_manager {
                    pm.complete_file();
                }
            }
            Err(error) => {
                eprintln!("Failed: {}: {error}", input_path.display());
                if let Some(ref pm) = self.progress_manager {
                    pm.complete_file();
                }
            }
        }
    }

    fn output_path_for(&self, input_path: &Path) -> PathBuf {
        if let Some(ref outfile) = self.cli.outfile {
            return outfile.clone();
        }

        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_documented_parameter_set() {
        let cli = Cli::parse_from(["spiraltile", "tile.png"]);
        let request = cli.render_request();
        assert_eq!(request.params.a, 3);
        assert_eq!(request.params.b, 5);
        assert!((request.params.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(request.size, OutputSize::new(3000, 3000));
        assert!((request.window.x.0 - -30.0).abs() < f64::EPSILON);
        assert_eq!(request.lens, Lens::Log);
    }

    #[test]
    fn test_function_and_size_arguments_parse() {
        let cli = Cli::parse_from([
            "spiraltile",
            "tile.png",
            "-f",
            "mobius",
            "-s",
            "640",
            "480",
            "--scale",
            "2.5",
        ]);
        let request = cli.render_request();
        assert_eq!(request.lens, Lens::Mobius);
        assert_eq!(request.size, OutputSize::new(640, 480));
        assert!((request.params.scale - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_function_is_rejected() {
        let result = Cli::try_parse_from(["spiraltile", "tile.png", "-f", "tangent"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_spiral_parameters_parse() {
        let cli = Cli::parse_from(["spiraltile", "tile.png", "-a", "-2", "-b", "-7"]);
        assert_eq!(cli.a, -2);
        assert_eq!(cli.b, -7);
    }
}
