use playlab::bandit::*;
use playlab::fictitious::*;
use playlab::montecarlo::*;
use playlab::random::*;
use playlab::*;

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
        playing_fictitious_game,
        selecting_best_response,
        estimating_monte_carlo,
        sampling_thompson_trajectory,
        sampling_ucb_trajectory,
}

fn playing_fictitious_game(c: &mut criterion::Criterion) {
    c.bench_function("play the 3x4 fictitious game", |b| {
        let ref mut game = Config::default().build().unwrap();
        let ref mut rng = Dice::seeded(0);
        b.iter(|| game.play(rng).unwrap())
    });
}

fn selecting_best_response(c: &mut criterion::Criterion) {
    c.bench_function("select a best response", |b| {
        let ref mut game = Config::default().build().unwrap();
        game.play(&mut Dice::seeded(0)).unwrap();
        b.iter(|| game.p1().select_best_response())
    });
}

fn estimating_monte_carlo(c: &mut criterion::Criterion) {
    c.bench_function("estimate E[cos²Z] from 10k draws", |b| {
        let ref mut rng = Dice::random();
        b.iter(|| Estimate::try_from_sample(&sample(rng, MONTE_CARLO_SAMPLES)))
    });
}

fn sampling_thompson_trajectory(c: &mut criterion::Criterion) {
    c.bench_function("run Thompson sampling for 3k pulls", |b| {
        let ref mut rng = Dice::seeded(0);
        let bandit = Bandit::random(BANDIT_ARMS, rng);
        b.iter(|| Trajectory::run(&bandit, &mut Thompson::new(BANDIT_ARMS), 3000, rng).unwrap())
    });
}

fn sampling_ucb_trajectory(c: &mut criterion::Criterion) {
    c.bench_function("run UCB for 3k pulls", |b| {
        let ref mut rng = Dice::seeded(0);
        let bandit = Bandit::random(BANDIT_ARMS, rng);
        b.iter(|| Trajectory::run(&bandit, &mut Ucb::new(BANDIT_ARMS, 0.1), 3000, rng).unwrap())
    });
}
