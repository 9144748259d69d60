use asv_geometry::args::ArgError;

fn main() {
    env_logger::init();

    // 1. Parse commandline arguments
    let cli = match asv_geometry::args::parse_cli_args() {
        Ok(cli) => cli,
        // Help, version and usage errors are printed by clap itself
        Err(ArgError::ClapError(err)) => err.exit(),
        Err(err) => {
            eprintln!("CLI ERROR!");
            eprintln!("{}", err);
            std::process::exit(2);
        },
    };

    // 2. Run the command and print its report
    match asv_geometry::run_command(cli) {
        Ok(rendered) => {
            println!("{}", rendered.trim_end());
        },
        Err(err) => {
            eprintln!("PROCESS ERROR!");
            eprintln!("{}", err);
            std::process::exit(1);
        },
    }
}
