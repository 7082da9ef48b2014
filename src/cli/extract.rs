use std::path::PathBuf;

use clap::Parser;

use crate::modules::extract::extract_frames;

use super::*;

#[derive(Parser)]
#[command(name = "extract", about = "Saves every frame of a sprite as PNG")]
struct ExtractArgs {
    /// Sprite file
    path: PathBuf,
    /// Output folder, created if missing
    out_dir: PathBuf,
}

pub struct Extract;
impl Cli for Extract {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn cli(&self) -> CliRes {
        let args = match ExtractArgs::try_parse_from(module_args()) {
            Ok(args) => args,
            Err(err) => {
                println!("{}", err);
                self.cli_help();
                return CliRes::Err;
            }
        };

        match extract_frames(&args.path, &args.out_dir) {
            Ok(paths) => {
                paths
                    .iter()
                    .for_each(|path| println!("{}", path.display()));
                CliRes::Ok
            }
            Err(err) => {
                println!("{:?}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        println!(
            "\
Extract frames

<sprite> <output folder>
"
        )
    }
}
