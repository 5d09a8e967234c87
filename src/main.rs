use env_logger::Env;
use log::info;

use galaxygen::cli::args::{self, USAGE};
use galaxygen::io::{self, OutputWriter, TerminalIO};
use galaxygen::{GenResult, Generator};

fn run() -> GenResult<()> {
    let args = args::parse()?;
    if args.help {
        TerminalIO.writeln(USAGE)?;
        return Ok(());
    }

    match args.seed {
        Some(seed) => info!("generating with seed {}", seed),
        None => info!("generating with an entropy seed"),
    }
    let galaxies = Generator::new(args.seed)?.generate();
    io::emit(&galaxies, &mut TerminalIO)?;
    info!("done");
    Ok(())
}

fn main() {
    let env = Env::default()
        .filter_or("LOG_LEVEL", "warn")
        .write_style_or("LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
