use charsep::*;
use charsep_core::{Error, PixelMatrix, find_separation_in_matrix};
use clap::Parser;
use std::time::Instant;

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(&args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {error}")));
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Error> {
    let pixels = PixelMatrix::open(&args.image)?;

    if args.verbose && !args.json {
        display_analysis_info(&args.image, &pixels, colors);
    }

    let analysis_timer = Instant::now();
    let separation = find_separation_in_matrix(&pixels)?;
    let analysis_time = analysis_timer.elapsed().as_secs_f64();

    if let Some(mark_path) = &args.mark {
        let marked = mark_separations(&pixels, &separation);
        marked.save(mark_path).map_err(Error::Image)?;
        if args.verbose && !args.json {
            println!(
                "{} Marked copy written to {}",
                colors.success("✅"),
                colors.heading(&mark_path.display().to_string())
            );
        }
    }

    if args.json {
        let output = create_json_output(&args.image, &pixels, separation, analysis_time);
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON output is always serializable")
        );
    } else {
        display_separation(&separation, colors);
        if args.verbose {
            display_statistics(analysis_time, colors);
        }
    }

    Ok(())
}
