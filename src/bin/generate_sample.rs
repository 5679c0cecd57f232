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

    /// Uniform integer in `0..n`.
    fn index(&mut self, n: usize) -> usize {
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let cities: &[(&str, &str, f64, f64)] = &[
        ("phoenix", "az", 33.4484, -112.0740),
        ("seattle", "wa", 47.6062, -122.3321),
        ("roswell", "nm", 33.3943, -104.5230),
        ("chicago", "il", 41.8781, -87.6298),
        ("portland", "or", 45.5152, -122.6784),
        ("austin", "tx", 30.2672, -97.7431),
        ("denver", "co", 39.7392, -104.9903),
        ("miami", "fl", 25.7617, -80.1918),
        ("anchorage", "ak", 61.2181, -149.9003),
        ("gulf breeze", "fl", 30.3570, -87.1638),
    ];

    // Roughly in NUFORC frequency order so the top-10 ranking has texture.
    let shapes = [
        "light", "triangle", "circle", "fireball", "disk", "sphere", "oval",
        "formation", "cigar", "chevron", "teardrop", "diamond",
    ];

    let descriptions = [
        "bright object moving silently across the sky",
        "three lights in a rigid triangular formation",
        "hovering craft with a pulsing orange glow",
        "metallic object reflecting the setting sun",
        "fast mover that stopped dead and reversed course",
        "ring of lights rotating above the treeline",
        "slow cigar-shaped object with no wings or sound",
        "glowing sphere that faded out over the water",
    ];

    let output_path = "sample_sightings.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Date_time",
            "city",
            "state/province",
            "UFO_shape",
            "description",
            "latitude",
            "longitude",
        ])
        .expect("Failed to write header");

    let total = 5000;
    let mut malformed = 0;

    for row in 0..total {
        let (city, state, lat, lon) = cities[rng.index(cities.len())];

        // Squared draw skews the shape pick toward the common labels.
        let shape = shapes[((rng.next_f64().powi(2) * shapes.len() as f64) as usize)
            .min(shapes.len() - 1)];
        let description = descriptions[rng.index(descriptions.len())];

        // Squared draw again: sightings cluster in the recent decades.
        let year = 2014 - (rng.next_f64().powi(2) * 49.0) as i32;
        let month = 1 + rng.index(12);
        let day = 1 + rng.index(28);
        let minute = rng.index(60);

        // A few percent of rows are deliberately broken the way real NUFORC
        // exports are: unparseable coordinates and 24:00 timestamps.
        let roll = rng.next_f64();
        let (date_time, latitude) = if roll < 0.02 {
            malformed += 1;
            (
                format!("{month}/{day}/{year} {:02}:{minute:02}", rng.index(24)),
                "unknown".to_string(),
            )
        } else if roll < 0.03 {
            malformed += 1;
            (
                format!("{month}/{day}/{year} 24:00"),
                format!("{:.4}", rng.gauss(lat, 0.35)),
            )
        } else {
            (
                format!("{month}/{day}/{year} {:02}:{minute:02}", rng.index(24)),
                format!("{:.4}", rng.gauss(lat, 0.35)),
            )
        };
        let longitude = format!("{:.4}", rng.gauss(lon, 0.35));

        writer
            .write_record([
                date_time.as_str(),
                city,
                state,
                shape,
                description,
                latitude.as_str(),
                longitude.as_str(),
            ])
            .unwrap_or_else(|e| panic!("Failed to write row {row}: {e}"));
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {total} sightings ({malformed} malformed on purpose) to {output_path}");
}
