criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        dealing_a_draft,
        observing_a_battle,
        observing_a_draft,
        decoding_every_battle_code,
        masking_battle_codes,
        playing_a_battle,
        evaluating_a_draft,
        stepping_a_versus_episode,
}

fn drafted(seed: u64) -> Duel {
    let mut game = Duel::start(Rules::default(), seed);
    while game.is_drafting() {
        game.apply(Action::Pick(0));
    }
    game
}

fn dealing_a_draft(c: &mut criterion::Criterion) {
    c.bench_function("deal a fresh Duel", |b| {
        b.iter(|| Duel::start(Rules::default(), 0))
    });
}

fn observing_a_battle(c: &mut criterion::Criterion) {
    let ref game = drafted(0);
    let observer = BattleObserver::<Normalized>::from(true);
    c.bench_function("observe a battle state", |b| {
        b.iter(|| observer.observe(game))
    });
}

fn observing_a_draft(c: &mut criterion::Criterion) {
    let ref game = Duel::start(Rules::default(), 0);
    let ref picks = drafted(0).current().deck().to_vec();
    let observer = DraftObserver::new(3, 30, Normalized)
        .with_history(true)
        .with_curve(true)
        .with_sorted(true);
    c.bench_function("observe a draft state with full history", |b| {
        b.iter(|| observer.observe(game, picks))
    });
}

fn decoding_every_battle_code(c: &mut criterion::Criterion) {
    let ref game = drafted(0);
    let codec = Codec::from(true);
    c.bench_function("decode all 145 battle codes", |b| {
        b.iter(|| {
            (0..BATTLE_ACTIONS)
                .filter_map(|code| codec.decode_battle(code, game).ok().flatten())
                .count()
        })
    });
}

fn masking_battle_codes(c: &mut criterion::Criterion) {
    let ref game = drafted(0);
    let codec = Codec::from(true);
    let ordering = Ordering::identity(0);
    c.bench_function("mask legal battle codes", |b| {
        b.iter(|| codec.mask(game, &ordering))
    });
}

fn playing_a_battle(c: &mut criterion::Criterion) {
    let game = drafted(0);
    c.bench_function("play a battle between random agents", |b| {
        b.iter(|| Evaluator::play(&mut game.clone(), [RandomAgent::from(0), RandomAgent::from(1)]))
    });
}

fn evaluating_a_draft(c: &mut criterion::Criterion) {
    let game = drafted(0);
    let evaluator = Evaluator::new(8, [MaxAttackAgent, MaxAttackAgent]);
    c.bench_function("evaluate a draft over 8 battles", |b| {
        b.iter(|| evaluator.evaluate(&mut game.clone()))
    });
}

fn stepping_a_versus_episode(c: &mut criterion::Criterion) {
    let config = Config {
        seed: Some(0),
        ..Config::default()
    };
    let env = BattleEnv::<Duel>::from(config);
    let mut versus = Versus::new(env, Scripted::from(RandomAgent::from(0)), Role::First);
    let mut learner = RandomAgent::from(1);
    c.bench_function("play a battle episode against a scripted opponent", |b| {
        b.iter(|| {
            versus.reset();
            loop {
                let action = learner.act(versus.env().game());
                match versus.step(Command::Act(action)) {
                    Ok(step) if !step.done => continue,
                    _ => break,
                }
            }
        })
    });
}

use cardgym::*;
