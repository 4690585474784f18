use crate::*;
use anyhow::Context;

pub fn handle_word_commands(cli: &Cli, cfg: &ConfigFile) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Transcode {
            source,
            output,
            mode,
        } => {
            let flags = Overrides {
                output: output.as_deref(),
                mode: *mode,
                ..Overrides::from_source(source)
            };
            let settings = resolve_settings(cfg, &flags);
            let report = transcode(&settings)
                .with_context(|| format!("failed to transcode {}", settings.input.display()))?;
            print_one(cli.json, report, |r| {
                format!(
                    "wrote {} entries to {} as {}",
                    r.entries,
                    r.output.display(),
                    r.name
                )
            })?;
        }
        Commands::Preview { source } => {
            let settings = resolve_settings(cfg, &Overrides::from_source(source));
            let words = read_words(&settings.input)?;
            let text = render_declaration(&settings.name, &words, settings.syntax);
            if cli.json {
                print_json(PreviewReport {
                    name: settings.name,
                    syntax: settings.syntax,
                    entries: words.len(),
                    text,
                })?;
            } else {
                print!("{}", text);
            }
        }
        Commands::Inspect { input } => {
            let flags = Overrides {
                input: input.as_deref(),
                ..Overrides::default()
            };
            let settings = resolve_settings(cfg, &flags);
            let report = inspect(&settings.input)?;
            if cli.json {
                print_json(report)?;
            } else {
                println!("input: {}", report.input.display());
                println!("entries: {}", report.entries);
                println!("empty: {}", report.empty_entries);
                for q in &report.unescaped_quotes {
                    println!("unescaped quote\t{}\t{}", q.line, q.word);
                }
            }
        }
        Commands::Config { .. } => {}
    }
    Ok(())
}
