use anyhow::{Context, Result};
use serde::Serialize;

/// One row in the column layout the dashboard reads.
#[derive(Debug, Serialize)]
struct LaunchRow {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'static str,
}

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster eras in flight order: (category, serial prefix, first flight,
/// payload ceiling in kg, success probability).
const ERAS: [(&str, &str, u32, f64, f64); 5] = [
    ("v1.0", "F9 v1.0  B000", 1, 1_000.0, 0.2),
    ("v1.1", "F9 v1.1  B10", 6, 4_500.0, 0.35),
    ("FT", "F9 FT B10", 21, 9_600.0, 0.7),
    ("B4", "F9 B4 B10", 45, 7_000.0, 0.8),
    ("B5", "F9 B5 B10", 51, 15_600.0, 0.95),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "spacex_launch_dash.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let flights = 56;
    for flight_number in 1..=flights {
        let (category, serial, _, ceiling, p_success) = ERAS
            .iter()
            .rev()
            .find(|era| flight_number >= era.2)
            .copied()
            .unwrap_or(ERAS[0]);

        // Early flights all flew from LC-40.
        let launch_site = if flight_number <= 5 {
            SITES[0]
        } else {
            *rng.pick(&SITES)
        };

        let payload_mass_kg = (rng.next_f64() * ceiling).round();
        let class = u8::from(rng.next_f64() < p_success);

        writer
            .serialize(LaunchRow {
                flight_number,
                launch_site,
                class,
                payload_mass_kg,
                booster_version: format!("{serial}{:02}", flight_number % 100),
                booster_version_category: category,
            })
            .with_context(|| format!("writing flight {flight_number}"))?;
    }

    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {flights} launch records to {output_path}");
    Ok(())
}
