use p0::Commands;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = p0::cli();
    p0::init_logger(cli.verbose)?;
    match cli.command {
        Commands::Prelude { module, output } => {
            match output {
                Some(path) => {
                    let file = File::create(&path).unwrap_or_else(p0::fatal);
                    p0::write_prelude(&module, file)?;
                    log::info!("wrote {}", path.display());
                }
                None => p0::write_prelude(&module, std::io::stdout().lock())?,
            }
            Ok(())
        }
        Commands::Build { path, output } => {
            let exe = p0::build(&path, output.as_deref()).unwrap_or_else(p0::fatal);
            log::info!("built {}", exe.display());
            Ok(())
        }
        Commands::Run { path } => {
            let code = p0::run(&path, std::io::stdout().lock()).unwrap_or_else(p0::fatal);
            log::debug!("exited with code {code}");
            std::process::exit(code);
        }
        Commands::Version => {
            println!("p0 {} (p0-runtime {})", p0::VERSION, p0_runtime::VERSION);
            Ok(())
        }
    }
}
