use anyhow::{Context, Result};
use chrono::Duration;

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

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let start = chrono::NaiveDate::from_ymd_opt(2024, 3, 18)
        .and_then(|d| d.and_hms_micro_opt(9, 30, 0, 0))
        .expect("valid start timestamp");

    let rows: i64 = 600;
    let step_ms: i64 = 100;

    std::fs::create_dir_all("data").context("creating data directory")?;
    let output_path = "data/sample_run.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    writer.write_record([
        "Date_Time",
        "AQ Press [mbar]",
        "Oil Press [mbar]",
        "Droplet Dia From Area [um]",
    ])?;

    for i in 0..rows {
        let ts = start + Duration::milliseconds(i * step_ms);
        let t = i as f64 * step_ms as f64 / 1000.0;

        // Aqueous pressure ramps up over the run; oil pressure drifts
        // slowly around its setpoint.
        let aq_press = 1000.0 + 2.5 * t + rng.gauss(0.0, 1.5);
        let oil_press = 1010.0 + 8.0 * (t / 30.0 * std::f64::consts::TAU).sin()
            + rng.gauss(0.0, 1.2);

        // Droplet size tracks the pressure differential.
        let droplet_dia = 48.0 + 0.05 * (oil_press - aq_press).abs() + rng.gauss(0.0, 1.8);

        writer.write_record([
            ts.format("%Y%m%d %H:%M:%S%.6f").to_string(),
            format!("{aq_press:.2}"),
            format!("{oil_press:.2}"),
            format!("{droplet_dia:.3}"),
        ])?;
    }

    writer.flush()?;
    println!("Wrote {rows} rows at {step_ms} ms spacing to {output_path}");

    Ok(())
}
