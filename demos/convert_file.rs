use std::env;

use eolcheck::{convert_file_to, LineEnding};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input> <output>", args[0]);
        std::process::exit(1);
    }
    let input_path = &args[1];
    let output_path = &args[2];

    convert_file_to(input_path, output_path, LineEnding::Dos, LineEnding::Unix)?;
    Ok(())
}
