use std::path::PathBuf;

use clap::Parser;

use crate::modules::info::sprite_info;

use super::*;

#[derive(Parser)]
#[command(name = "info", about = "Prints sprite geometry and the frame table")]
struct InfoArgs {
    /// Sprite file
    path: PathBuf,
}

pub struct Info;
impl Cli for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn cli(&self) -> CliRes {
        let args = match InfoArgs::try_parse_from(module_args()) {
            Ok(args) => args,
            Err(err) => {
                println!("{}", err);
                self.cli_help();
                return CliRes::Err;
            }
        };

        match sprite_info(&args.path) {
            Ok(res) => {
                print!("{}", res);
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
Sprite info

<sprite>
"
        )
    }
}
