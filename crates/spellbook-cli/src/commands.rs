use std::path::Path;

use anyhow::{Context, Result, bail};
use spellbook_config::Config;
use spellbook_engine::{ParseOptions, Pipeline};

use crate::cli::{BuildArgs, ParserArgs};

/// Look up config from an explicit path, or the default locations.
fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => {
            let config = Config::load_from_path(path)?
                .with_context(|| format!("config file not found: {}", path.display()))?;
            log::info!("Using config file {}", path.display());
            Ok(Some(config))
        }
        None => Ok(Config::load()?),
    }
}

fn apply_parser_args(options: &mut ParseOptions, args: &ParserArgs) {
    if args.strict {
        options.strict = true;
    }
    if let Some(nesting) = args.nesting {
        options.nesting = nesting;
    }
}

pub fn run_render(config_path: Option<&Path>, file: &Path, args: &ParserArgs) -> Result<()> {
    let mut options = load_config(config_path)?
        .map(|config| config.parser)
        .unwrap_or_default();
    apply_parser_args(&mut options, args);

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let html = Pipeline::new(options)
        .render(&text)
        .with_context(|| format!("failed to render {}", file.display()))?;
    print!("{html}");
    Ok(())
}

/// Merge command-line flags over whatever config was found.
fn resolve_build_config(config: Option<Config>, args: &BuildArgs) -> Result<Config> {
    let mut config = match (config, &args.source, &args.content_app) {
        (Some(config), _, _) => config,
        (None, Some(source), Some(app)) => Config::new(source, app),
        (None, _, _) => bail!(
            "no config file found; pass --source and --content-app or create {}",
            spellbook_config::LOCAL_CONFIG_FILE
        ),
    };

    if let Some(source) = &args.source {
        config.markdown_path = source.clone();
    }
    if let Some(app) = &args.content_app {
        config.content_app = app.clone();
    }
    if let Some(path) = &args.content_app_path {
        config.content_app_path = Some(path.clone());
    }
    if let Some(base) = &args.base_template {
        config.base_template = Some(base.clone());
    }
    apply_parser_args(&mut config.parser, &args.parser);
    Ok(config)
}

pub fn run_build(config_path: Option<&Path>, args: &BuildArgs) -> Result<()> {
    let config = resolve_build_config(load_config(config_path)?, args)?;
    let site = config.site();
    log::debug!("Building {:?}", site);

    let summary = site
        .build(&config.pipeline())
        .with_context(|| format!("failed to build {}", site.source_dir.display()))?;

    println!(
        "Processed {} markdown files into {}",
        summary.routes.len(),
        site.template_dir().display()
    );
    if !summary.unterminated.is_empty() {
        println!(
            "{} file(s) had unterminated tags; see warnings above",
            summary.unterminated.len()
        );
    }
    Ok(())
}
