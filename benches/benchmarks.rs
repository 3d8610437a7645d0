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
        scoring_target_hand,
        scoring_face_hand,
        checking_winning_hand,
        choosing_computer_discard,
        shuffling_fresh_deck,
        simulating_computer_round,
}

fn hand(s: &str) -> Hand {
    Hand::from(Card::parse(s).unwrap())
}

fn scoring_target_hand(c: &mut criterion::Criterion) {
    let hand = hand("As Kd 4c 4h 7h 9s 2c");
    c.bench_function("score a 7-card Hand by target ranks", |b| {
        b.iter(|| hand.score(Scoring::Target))
    });
}

fn scoring_face_hand(c: &mut criterion::Criterion) {
    let hand = hand("As Kd 4c 8h 7h 9s 2c");
    c.bench_function("score a 7-card Hand by face value", |b| {
        b.iter(|| hand.score(Scoring::Face))
    });
}

fn checking_winning_hand(c: &mut criterion::Criterion) {
    let hand = hand("As Kd 4c 4h 7h");
    c.bench_function("check a 5-card Hand for the target set", |b| {
        b.iter(|| hand.is_winning())
    });
}

fn choosing_computer_discard(c: &mut criterion::Criterion) {
    let hand = hand("As Kd 4c 4h 7h Ac Kh");
    c.bench_function("choose a computer discard among duplicates", |b| {
        b.iter(|| Computer::choose_discard(&hand))
    });
}

fn shuffling_fresh_deck(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("shuffle a 52-card Pile", |b| {
        b.iter(|| {
            let mut pile = Pile::deck();
            pile.shuffle(rng);
            pile
        })
    });
}

fn simulating_computer_round(c: &mut criterion::Criterion) {
    c.bench_function("play a full computer-vs-computer round", |b| {
        b.iter(|| {
            let mut session = Session::new(Config::default()).unwrap();
            while !session.is_round_over() {
                session.play(Seat::Human, &mut Computer::default()).unwrap();
                if !session.is_round_over() {
                    session.computer_take_turn().unwrap();
                }
            }
            session.round_winner()
        })
    });
}

use ak47::cards::*;
use ak47::play::*;
use ak47::players::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
