use std::fs;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use console::style;
use scifig::{Config, Mode};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Incremental builds for scientific figures")]
struct Args {
    /// Project directory holding `src/`, `build/` and the database.
    #[arg(short, long, default_value = ".")]
    workdir: Utf8PathBuf,

    /// Lower the default log level to `debug`.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Build every stale figure.
    Build {
        /// Export new artifacts into this directory.
        #[arg(long)]
        dest: Option<Utf8PathBuf>,

        /// Stop after the PDF.
        #[arg(long)]
        pdf: bool,

        /// Resolution of the PNG output.
        #[arg(long, default_value_t = 600)]
        dpi: u32,
    },
    /// Remove the build directory and forget every build.
    Clean,
    /// List the graphics included by a LaTeX file.
    Extract {
        tex: Utf8PathBuf,

        /// Print each path once.
        #[arg(long)]
        unique: bool,
    },
    /// Copy the figures included as `OUTPUT/<name>` into OUTPUT.
    Select {
        figures: Utf8PathBuf,
        tex: Utf8PathBuf,
        output: Utf8PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    scifig::utils::init_logging(args.debug)?;

    match args.command {
        Command::Build { dest, pdf, dpi } => {
            let mode = if pdf { Mode::Pdf } else { Mode::Full };
            eprintln!(
                "Running {} in {} mode.",
                style("scifig").red(),
                style(mode).blue()
            );

            let project = Config::new(&args.workdir).dpi(dpi).finish();
            let report = project.run(mode, dest.as_deref())?;

            eprintln!("{report}");
            if !report.is_success() {
                anyhow::bail!("some figures failed to build");
            }
        }
        Command::Clean => {
            Config::new(&args.workdir).finish().clean()?;
        }
        Command::Extract { tex, unique } => {
            let text = fs::read_to_string(&tex)?;
            for path in scifig::select::graphics_paths(&text, unique) {
                println!("{path}");
            }
        }
        Command::Select {
            figures,
            tex,
            output,
        } => {
            let selection = scifig::select::select(&figures, &tex, &output)?;
            for missing in &selection.missing {
                println!("{missing} does not exist.");
            }
        }
    }

    Ok(())
}
