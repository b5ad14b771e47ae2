use std::env;

use eolcheck::{check, convert, LineEnding, Problem};

fn main() {
    let text = b"Line one\r\nLine two\nLine three\r\n";

    match check(text, None) {
        Ok(_) => println!("consistent"),
        Err(problem @ Problem::Mixed { .. }) => {
            println!("before: {problem}");
            let fixed = convert(text, LineEnding::Dos, LineEnding::Unix);
            println!("after: {:?}", check(&fixed, Some(LineEnding::Unix)));
        }
        Err(problem) => println!("{problem}"),
    }

    if let Some(path) = env::args().nth(1) {
        let status = eolcheck::classify(&path, None, true, true);
        std::process::exit(status);
    }
}
