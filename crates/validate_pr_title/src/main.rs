// crates/validate_pr_title/src/main.rs

use clap::{Arg, Command};

use validate_pr_title::validate_title;

fn main() {
    let matches = Command::new("validate_pr_title")
        .version("0.1.0")
        .about("Checks a PR title against the conventional prefix and length rules")
        .arg(
            Arg::new("title")
                .required(true)
                .num_args(1)
                .help("The pull-request title to validate"),
        )
        .get_matches();

    let title = matches.get_one::<String>("title").unwrap();

    // Diagnostic echo for the automation log; the exit status is the signal.
    println!("The title is: {}", title);

    if let Err(err) = validate_title(title) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
