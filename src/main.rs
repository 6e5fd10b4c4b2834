#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use memory_match::{
    autoplay, init_logging, Board, Game, GameConfig, GameStatus, MemoryPlayer, RenderSink,
    Session, StdinInput, TerminalRenderer, ASCII_PALETTE, DEFAULT_DIMENSION, EMOJI_PALETTE,
    RESOLVE_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, default_value_t = DEFAULT_DIMENSION, help = "Side length of the board (must be even)")]
    dimension: usize,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Use letters and digits instead of emoji")]
    ascii: bool,
}

#[derive(clap::Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal. Enter a position (5), a coordinate (B3), `start` or `quit`.
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Watch the memory AI clear a board in simulated time.
    Auto {
        #[command(flatten)]
        board: BoardArgs,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (board will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn make_game(args: &BoardArgs, rng: &mut SmallRng) -> anyhow::Result<Game<&'static str>> {
    let palette: &[&'static str] = if args.ascii {
        &ASCII_PALETTE
    } else {
        &EMOJI_PALETTE
    };
    let config = GameConfig::with_dimension(args.dimension);
    let board = Board::generate(rng, config.dimension, palette).map_err(|e| anyhow::anyhow!(e))?;
    Ok(Game::new(board, config))
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { board } => {
            let mut rng = make_rng(board.seed);
            let game = make_game(&board, &mut rng)?;
            println!("Flip two cards at a time and find every pair.");
            let input = StdinInput::new(board.dimension);
            let mut session = Session::new(game, input, TerminalRenderer::stdout());
            let outcome = session.run().await?;
            if outcome.status != GameStatus::Won {
                println!(
                    "Game left unfinished after {} moves and {} seconds.",
                    outcome.moves, outcome.elapsed_seconds
                );
            }
        }
        Commands::Auto { board } => {
            let mut rng = make_rng(board.seed);
            let mut game = make_game(&board, &mut rng)?;
            let mut player = MemoryPlayer::new();
            let max_steps = game.board().len() * 16;
            let summary = autoplay(&mut game, &mut player, &mut rng, RESOLVE_DELAY_MS, max_steps)
                .ok_or_else(|| anyhow::anyhow!("AI did not finish the board"))?;
            let mut renderer = TerminalRenderer::stdout();
            renderer.render_board(game.board())?;
            RenderSink::<&str>::render_win(&mut renderer, &summary)?;
        }
    }
    Ok(())
}
