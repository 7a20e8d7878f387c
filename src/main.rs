use anyhow::Result;
use clap::{crate_description, crate_version, App as Cli, Arg, ArgMatches};
use folio_tui::{
    app::{App, Launch},
    config::Config,
    error::AppError,
    state::Page,
    theme::Theme,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("folio-tui")
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (default ~/.config/folio-tui)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("route")
                .short("r")
                .long("route")
                .value_name("ROUTE")
                .help("Route to open first, e.g. /contact")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("THEME")
                .help("Initial theme: dark or light")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    config.apply_env();
    let launch = launch_options(&matches, config.theme)?;
    App::start(config, launch).await?;
    Ok(())
}

/// Read the initial theme and page from the command line. `--theme` wins
/// over the theme from the configuration file.
///
fn launch_options(matches: &ArgMatches, configured: Option<Theme>) -> Result<Launch, AppError> {
    let theme = match matches.value_of("theme") {
        Some(value) => value
            .parse::<Theme>()
            .map_err(|e| AppError::Argument(e.to_string()))?,
        None => configured.unwrap_or_default(),
    };
    let page = matches
        .value_of("route")
        .map_or(Page::Intro, Page::from_route);
    Ok(Launch { theme, page })
}
