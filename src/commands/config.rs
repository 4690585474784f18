use crate::*;

pub fn handle_config_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Config { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ConfigCommands::Show => {
            let cfg = load_config(cli.config.as_deref())?;
            let settings = resolve_settings(&cfg, &Overrides::default());
            print_one(cli.json, settings, |s| {
                format!(
                    "input: {}\noutput: {}\nname: {}\nsyntax: {}\nmode: {}",
                    s.input.display(),
                    s.output.display(),
                    s.name,
                    s.syntax,
                    s.mode
                )
            })?;
        }
        // Does not read the existing file, so a broken config can be replaced with --force.
        ConfigCommands::Init { force } => {
            let report = init_config(cli.config.as_deref(), *force)?;
            print_one(cli.json, report, |r| format!("wrote {}", r.path.display()))?;
        }
    }

    Ok(true)
}
