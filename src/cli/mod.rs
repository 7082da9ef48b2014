use self::{extract::Extract, info::Info, pack::Pack, resave::Resave};

mod extract;
mod info;
mod pack;
mod resave;

pub enum CliRes {
    Ok,
    Err,
    NoCli,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// Each module has to handle the arguments by itself.
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

/// Runs command-line options
pub fn cli() -> CliRes {
    let args: Vec<String> = std::env::args().collect();

    // Add new modules here.
    let modules: &[&dyn Cli] = &[&Info, &Extract, &Resave, &Pack];

    let help = || {
        println!(
            "\
sprtool

Available modules:"
        );
        for module in modules {
            println!("{}", module.name());
        }
    };

    // No arguments
    if args.len() <= 1 {
        help();
        return CliRes::NoCli;
    }

    let command = &args[1];

    for module in modules {
        if command == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    help();

    CliRes::Err
}

/// Arguments for a module, as clap sees them: module name first.
fn module_args() -> impl Iterator<Item = String> {
    std::env::args().skip(1)
}
