use std::env::args_os;
use std::process;

use ssim_index::{compare_images, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = match cli_parser.parse(args_os()) {
        Some(arguments) => arguments,
        None => return,
    };
    match compare_images(&arguments) {
        Ok(index) => println!("SSIM = {:.6}", index),
        Err(e) => {
            eprintln!("Comparison failed because of: {}", e);
            process::exit(1);
        }
    }
}
