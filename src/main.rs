use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::error;
use msolve::{
    app::{self, AppError, RunOptions},
    loader::{GridSize, MazeSource},
    logging,
    render::RenderOptions,
    settings::{Settings, StrategyChoice},
};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "msolve")]
struct Args {
    #[clap(help = "Maze file, a text drawing or a .ron grid", conflicts_with = "generate")]
    maze: Option<PathBuf>,
    #[clap(short, long, value_name = "ROWSxCOLS", help = "Generate a random maze instead")]
    generate: Option<GridSize>,
    #[clap(long, requires = "generate", help = "Seed for the generated maze")]
    seed: Option<u64>,
    #[clap(short = 'a', long, value_enum, help = "Search to run")]
    strategy: Option<StrategyChoice>,
    #[clap(short, long, action, help = "Print the path as coordinates")]
    coords: bool,
    #[clap(short, long, action, help = "Mark cells the search explored")]
    explored: bool,
    #[clap(long, action, help = "Plain output without colors")]
    no_color: bool,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, repeat for more")]
    verbose: u8,
    #[clap(long, value_name = "PATH", help = "Save the maze as RON")]
    save_ron: Option<PathBuf>,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let settings_path = Settings::default_path();

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&settings_path)?.populate());
        return Ok(());
    }

    better_panic::install();

    let mut settings = Settings::load(&settings_path)?;
    if let Some(strategy) = args.strategy {
        settings = settings.set_strategy(strategy);
    }
    if args.coords {
        settings = settings.set_show_coords(true);
    }
    if args.explored {
        settings = settings.set_show_explored(true);
    }
    if args.no_color {
        settings = settings.set_color(false);
    }

    logging::init(
        settings.get_log_level().raised(args.verbose).to_filter(),
        settings.get_color(),
    )?;

    let source = match (args.maze, args.generate) {
        (Some(path), _) => MazeSource::File(path),
        (None, Some(size)) => MazeSource::Generated {
            size,
            seed: args.seed,
        },
        (None, None) => return Err(AppError::NoMaze),
    };

    let options = RunOptions {
        source,
        strategies: settings.get_strategy().strategies(),
        render: RenderOptions::from_settings(&settings),
        save_ron: args.save_ron,
    };

    let stdout = std::io::stdout();
    app::run(&options, &mut stdout.lock()).inspect_err(|err| error!("{}", err))
}
