use charsep_core::find_separation;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arg = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: separate <image>");
        std::process::exit(1);
    });

    let image_path = Path::new(&arg);
    if !image_path.exists() {
        eprintln!("Error: {} not found", image_path.display());
        std::process::exit(1);
    }

    let separation = find_separation(image_path)?;

    println!("whitespace rows:    {:?}", separation.rows);
    println!("whitespace columns: {:?}", separation.cols);

    Ok(())
}
