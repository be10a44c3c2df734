use colored::Colorize;
use std::process;

use rsid_annotator::config::InputConfig;
use rsid_annotator::log_utils::init_log;

fn main() {
    let config = InputConfig::build().unwrap_or_else(|err| {
        if !err.use_stderr() {
            // --help and --version
            err.exit();
        }
        println!("{}", InputConfig::usage());
        let message = err.to_string();
        eprintln!(
            "Problem parsing arguments: {}",
            message.lines().next().unwrap_or_default().red().bold()
        );
        process::exit(1);
    });

    if let Err(e) = init_log(config.log_level) {
        eprintln!("Could not initialise logging: {}", e.to_string().red().bold());
    }

    let output_file = config.output_file.clone();
    if let Err(e) = rsid_annotator::run(config) {
        eprintln!("Application error: {}", format!("{:#}", e).red().bold());
        process::exit(1);
    }
    println!("Results written to {}", output_file.display());
}
