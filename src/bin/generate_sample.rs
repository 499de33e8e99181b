//! Writes a deterministic sample launch dataset so the dashboard runs out of
//! the box: the real column layout with synthetic rows.

/// Site names as they appear in the real launch data.  Note that the data
/// carries `KSC LC-39A` while the dashboard's fixed selector offers
/// `KSC SC-39A`; those rows are visible only in the all-sites view.
const SITES: [&str; 4] = [
    "CCAFS LC-40",
    "CCAFS SLC-40",
    "KSC LC-39A",
    "VAFB SLC-4E",
];

/// Booster eras: (last flight number, category, typical payload kg,
/// success rate).
const ERAS: [(u32, &str, f64, f64); 5] = [
    (5, "v1.0", 1500.0, 0.4),
    (20, "v1.1", 3500.0, 0.6),
    (42, "FT", 5000.0, 0.8),
    (50, "B4", 5500.0, 0.85),
    (56, "B5", 6000.0, 0.95),
];

fn era_for(flight: u32) -> (&'static str, f64, f64) {
    for &(last, category, mean_payload, success_rate) in &ERAS {
        if flight <= last {
            return (category, mean_payload, success_rate);
        }
    }
    let &(_, category, mean_payload, success_rate) = ERAS.last().unwrap();
    (category, mean_payload, success_rate)
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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "spacex_launch_dash.csv".to_string());
    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version",
            "Booster Version Category",
        ])
        .expect("Failed to write header");

    let flights = 56u32;
    for flight in 1..=flights {
        let (category, mean_payload, success_rate) = era_for(flight);
        let site = SITES[(rng.next_u64() % SITES.len() as u64) as usize];

        let payload = rng.gauss(mean_payload, 1800.0).clamp(0.0, 9600.0);
        let class = u8::from(rng.next_f64() < success_rate);
        let booster_version = format!("F9 {category} B{}", 1000 + flight);

        writer
            .write_record([
                flight.to_string(),
                site.to_string(),
                class.to_string(),
                format!("{payload:.1}"),
                booster_version,
                category.to_string(),
            ])
            .expect("Failed to write record");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {flights} launch records to {output_path}");
}
