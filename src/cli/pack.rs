use std::path::PathBuf;

use clap::Parser;

use crate::modules::pack::{pack, PackOptions};

use super::*;

#[derive(Parser)]
#[command(name = "pack", about = "Builds a 32-bit sprite from same-sized images")]
struct PackArgs {
    /// Frame images, in order
    #[arg(required = true)]
    images: Vec<PathBuf>,
    /// Output sprite file
    #[arg(short, long)]
    out: PathBuf,
    /// Keep transparency (0x19) instead of plain RGB (0x0f)
    #[arg(long)]
    alpha: bool,
    /// Defaults to frame width times frame count
    #[arg(long)]
    canvas_width: Option<u32>,
    /// Defaults to frame height
    #[arg(long)]
    canvas_height: Option<u32>,
}

pub struct Pack;
impl Cli for Pack {
    fn name(&self) -> &'static str {
        "pack"
    }

    fn cli(&self) -> CliRes {
        let args = match PackArgs::try_parse_from(module_args()) {
            Ok(args) => args,
            Err(err) => {
                println!("{}", err);
                self.cli_help();
                return CliRes::Err;
            }
        };

        let options = PackOptions {
            alpha: args.alpha,
            canvas_width: args.canvas_width,
            canvas_height: args.canvas_height,
        };

        if let Err(err) = pack(&args.images, &args.out, &options) {
            println!("{:?}", err);
            return CliRes::Err;
        }

        println!("Done");

        CliRes::Ok
    }

    fn cli_help(&self) {
        println!(
            "\
Pack

<images...> --out <output sprite> [--alpha] [--canvas-width <w>] [--canvas-height <h>]
"
        )
    }
}
