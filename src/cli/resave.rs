use std::path::PathBuf;

use clap::Parser;

use crate::modules::resave::resave;

use super::*;

#[derive(Parser)]
#[command(name = "resave", about = "Opens a 32-bit sprite and saves it again")]
struct ResaveArgs {
    /// Sprite file
    path: PathBuf,
    /// Output sprite file
    out: PathBuf,
    /// Fails without writing when the output differs from the input
    #[arg(long)]
    check: bool,
}

pub struct Resave;
impl Cli for Resave {
    fn name(&self) -> &'static str {
        "resave"
    }

    fn cli(&self) -> CliRes {
        let args = match ResaveArgs::try_parse_from(module_args()) {
            Ok(args) => args,
            Err(err) => {
                println!("{}", err);
                self.cli_help();
                return CliRes::Err;
            }
        };

        if let Err(err) = resave(&args.path, &args.out, args.check) {
            println!("{:?}", err);
            return CliRes::Err;
        }

        println!("Done");

        CliRes::Ok
    }

    fn cli_help(&self) {
        println!(
            "\
Resave

<sprite> <output sprite> [--check]
"
        )
    }
}
