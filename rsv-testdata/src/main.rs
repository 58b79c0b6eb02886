use rsv_testdata::{generate, ConsoleProgress};
use std::path::PathBuf;

fn main() {
    let dir = std::env::var_os("RSV_TESTDATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("TestFiles"));

    let mut progress = ConsoleProgress;
    match generate(&dir, &mut progress) {
        Ok(summary) => {
            println!(
                "{} valid and {} invalid fixtures written to {}",
                summary.valid,
                summary.invalid,
                dir.display()
            );
        }
        Err(err) => {
            eprintln!("fixture generation aborted: {}", err);
            std::process::exit(1);
        }
    }
}
