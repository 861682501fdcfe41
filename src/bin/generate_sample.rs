//! Writes a deterministic synthetic personality dataset to
//! `dataset/processed_data.csv` so the dashboard runs out of the box.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Biased coin flip.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Per-personality trait distributions: (mean, std_dev) per numeric column
/// plus yes-probabilities for the categorical ones.
struct Profile {
    personality: &'static str,
    time_spent_alone: (f64, f64),
    social_event_attendance: (f64, f64),
    going_outside: (f64, f64),
    friends_circle_size: (f64, f64),
    post_frequency: (f64, f64),
    stage_fear_p: f64,
    drained_p: f64,
}

const PROFILES: [Profile; 2] = [
    Profile {
        personality: "Introvert",
        time_spent_alone: (7.0, 2.0),
        social_event_attendance: (2.5, 1.5),
        going_outside: (2.0, 1.2),
        friends_circle_size: (4.0, 2.0),
        post_frequency: (2.0, 1.5),
        stage_fear_p: 0.8,
        drained_p: 0.85,
    },
    Profile {
        personality: "Extrovert",
        time_spent_alone: (2.0, 1.5),
        social_event_attendance: (7.0, 1.8),
        going_outside: (5.5, 1.5),
        friends_circle_size: (10.0, 3.0),
        post_frequency: (6.0, 2.0),
        stage_fear_p: 0.15,
        drained_p: 0.1,
    },
];

fn clamp_trait(v: f64, max: f64) -> f64 {
    (v.clamp(0.0, max) * 10.0).round() / 10.0
}

fn main() {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("dataset").expect("Failed to create dataset directory");
    let output_path = "dataset/processed_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Time_spent_Alone",
            "Stage_fear",
            "Social_event_attendance",
            "Going_outside",
            "Drained_after_socializing",
            "Friends_circle_size",
            "Post_frequency",
            "Personality",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for profile in &PROFILES {
        for _ in 0..250 {
            let alone = clamp_trait(rng.gauss(profile.time_spent_alone.0, profile.time_spent_alone.1), 11.0);
            let events = clamp_trait(
                rng.gauss(profile.social_event_attendance.0, profile.social_event_attendance.1),
                10.0,
            );
            let outside = clamp_trait(rng.gauss(profile.going_outside.0, profile.going_outside.1), 7.0);
            let friends =
                clamp_trait(rng.gauss(profile.friends_circle_size.0, profile.friends_circle_size.1), 15.0)
                    .round();
            let posts = clamp_trait(rng.gauss(profile.post_frequency.0, profile.post_frequency.1), 10.0);
            let stage_fear = if rng.chance(profile.stage_fear_p) { "Yes" } else { "No" };
            let drained = if rng.chance(profile.drained_p) { "Yes" } else { "No" };

            writer
                .write_record([
                    alone.to_string(),
                    stage_fear.to_string(),
                    events.to_string(),
                    outside.to_string(),
                    drained.to_string(),
                    friends.to_string(),
                    posts.to_string(),
                    profile.personality.to_string(),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} observations to {output_path}");
}
