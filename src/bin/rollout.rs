//! Rollout Binary
//!
//! Plays scripted episodes through the battle or draft environment, one bot
//! in the learner's seat and another as its opponent, and reports how the
//! learner's seat fared.
//!
//! Options: --task, --episodes, --seed, --learner, --opponent, --role, --config

use cardgym::*;
use clap::Parser;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Task {
    Battle,
    Draft,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play scripted episodes and report the learner's results", long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "battle")]
    task: Task,
    #[arg(long, default_value_t = 100)]
    episodes: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "random")]
    learner: Bot,
    #[arg(long, default_value = "max-attack")]
    opponent: Bot,
    #[arg(long, default_value = "first")]
    role: Role,
    #[arg(long, default_value_t = 1)]
    battles: usize,
    #[arg(long)]
    no_items: bool,
    #[arg(long)]
    history: bool,
    #[arg(long)]
    curve: bool,
    #[arg(long)]
    sorted: bool,
    /// JSON config; replaces every option above except task, episodes and bots
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config {
                seed: self.seed,
                items: !self.no_items,
                history: self.history,
                curve: self.curve,
                sorted: self.sorted,
                battles: self.battles,
                role: self.role,
                ..Config::default()
            },
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let config = args.config()?;
    let mut learner = args.learner.clone();
    if let Some(seed) = config.seed {
        learner.seed(seed);
    }
    log::info!("[rollout] {:?} with {} against {} as {}", args.task, args.learner, args.opponent, config.role);
    let opponent = Scripted::from(args.opponent.clone());
    match args.task {
        Task::Battle => run(
            Versus::new(BattleEnv::<Duel>::from(config.clone()), opponent, config.role),
            learner,
            args.episodes,
        ),
        Task::Draft => run(
            Versus::new(DraftEnv::<Duel>::from(config.clone()), opponent, config.role),
            learner,
            args.episodes,
        ),
    }
}

fn run<E, O>(mut versus: Versus<E, O>, mut learner: Bot, episodes: usize) -> anyhow::Result<()>
where
    E: Arena,
    O: Opponent<E::G>,
{
    for episode in 0..episodes {
        versus.reset();
        loop {
            let action = learner.act(versus.env().game());
            let step = versus.step(Command::Act(action))?;
            if step.done {
                log::debug!("[rollout] episode {} as {}: {}", episode, versus.seat(), step.reward);
                break;
            }
        }
    }
    let rewards = versus.rewards();
    let n = rewards.len().max(1) as Reward;
    let wins = rewards.iter().filter(|r| **r > 0.).count() as Reward;
    let mean = rewards.iter().sum::<Reward>() / n;
    log::info!(
        "[rollout] {} episodes, learner won {:.2}%, mean reward {:+.3}",
        rewards.len(),
        100. * wins / n,
        mean
    );
    Ok(())
}
