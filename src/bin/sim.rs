use memory_match::{autoplay, Game, GameConfig, MemoryPlayer, ASCII_PALETTE, RESOLVE_DELAY_MS};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [dimension]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let dimension: usize = match args.get(2) {
        Some(d) => d.parse()?,
        None => memory_match::DEFAULT_DIMENSION,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::with_dimension(dimension);
    let mut game =
        Game::generate(&mut rng, config, &ASCII_PALETTE).map_err(|e| anyhow::anyhow!(e))?;
    let mut player = MemoryPlayer::new();
    let max_steps = game.board().len() * 16;
    let summary = autoplay(&mut game, &mut player, &mut rng, RESOLVE_DELAY_MS, max_steps);

    let result = json!({
        "seed": seed,
        "dimension": dimension,
        "status": format!("{:?}", game.status()),
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
