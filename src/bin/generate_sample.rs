use anyhow::Context;

/// Point-lens (Paczyński) magnification for impact parameter `u0`, peak time
/// `t0` and Einstein crossing time `te`.
fn magnification(t: f64, t0: f64, u0: f64, te: f64) -> f64 {
    let tau = (t - t0) / te;
    let u = (u0 * u0 + tau * tau).sqrt();
    (u * u + 2.0) / (u * (u * u + 4.0).sqrt())
}

/// Seeded Gaussian noise: splitmix64 uniforms fed through Box-Muller,
/// keeping the second normal of each pair for the next call.
struct Noise {
    state: u64,
    spare: Option<f64>,
}

impl Noise {
    fn new(seed: u64) -> Self {
        Noise { state: seed, spare: None }
    }

    /// Uniform in [0, 1).
    fn uniform(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal sample scaled by `sigma`.
    fn gauss(&mut self, sigma: f64) -> f64 {
        if let Some(z) = self.spare.take() {
            return sigma * z;
        }
        let r = (-2.0 * self.uniform().max(1e-15).ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * self.uniform();
        self.spare = Some(r * theta.sin());
        sigma * r * theta.cos()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut noise_source = Noise::new(42);

    // 60 days of observations, one every 6 hours, event peaking on day 30.
    let (t0, u0, te) = (30.0, 0.1, 8.0);
    let noise = 0.02;
    let output_path = "sample_light_curve.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["time", "magnification", "error"])?;

    let n_points = 240;
    for i in 0..n_points {
        let t = i as f64 * 0.25;
        let a = magnification(t, t0, u0, te);
        let observed = a * (1.0 + noise_source.gauss(noise));
        writer.write_record([
            format!("{t:.2}"),
            format!("{observed:.5}"),
            format!("{:.5}", a * noise),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote {n_points} points to {output_path}");
    println!("Wrote {n_points} observations (peak at t = {t0}) to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnification_peaks_at_t0() {
        let peak = magnification(30.0, 30.0, 0.1, 8.0);
        assert!(peak > magnification(29.0, 30.0, 0.1, 8.0));
        assert!(peak > magnification(31.0, 30.0, 0.1, 8.0));
        // Far from the event the source is unmagnified.
        assert!((magnification(1000.0, 30.0, 0.1, 8.0) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn noise_is_seeded_and_centred() {
        let mut a = Noise::new(7);
        let mut b = Noise::new(7);
        let xs: Vec<f64> = (0..4000).map(|_| a.gauss(1.0)).collect();
        let ys: Vec<f64> = (0..4000).map(|_| b.gauss(1.0)).collect();
        assert_eq!(xs, ys);

        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
        assert!(mean.abs() < 0.1);
        assert!((var - 1.0).abs() < 0.15);
        assert!(xs.iter().all(|x| x.is_finite()));
    }
}
