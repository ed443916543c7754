use std::fs::File;

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

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Hosts with deliberately uneven portfolio sizes so the ranking output
    // has an interesting shape.
    let hosts: &[(&str, &str, usize)] = &[
        ("h1001", "Alice", 8),
        ("h1002", "Bob", 3),
        ("h1003", "Carmen", 12),
        ("h1004", "Deniz", 3),
        ("h1005", "Elena", 1),
    ];
    let neighbourhoods = ["Old Town", "Harbour", "Midtown", "Riverside"];

    let output_path = "sample_listings.csv";
    let file = File::create(output_path).expect("Failed to create output file");
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record([
            "id",
            "price",
            "bedrooms",
            "review_scores_rating",
            "host_id",
            "host_name",
            "neighbourhood",
        ])
        .expect("Failed to write header");

    let mut listing_id: u64 = 10_000;
    for &(host_id, host_name, count) in hosts {
        for _ in 0..count {
            let bedrooms = rng.range(1, 5);
            // Price scales with room count, with noise and currency
            // formatting matching the source datasets ("$1,234.00").
            let base = 60.0 + 45.0 * bedrooms as f64;
            let price = base * (0.8 + 0.4 * rng.next_f64());
            let score = 3.0 + 2.0 * rng.next_f64();
            let neighbourhood = neighbourhoods[rng.range(0, 3) as usize];

            writer
                .write_record([
                    listing_id.to_string(),
                    format_price(price),
                    bedrooms.to_string(),
                    format!("{score:.1}"),
                    host_id.to_string(),
                    host_name.to_string(),
                    neighbourhood.to_string(),
                ])
                .expect("Failed to write row");
            listing_id += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");

    let total: usize = hosts.iter().map(|&(_, _, n)| n).sum();
    println!("Wrote {total} listings for {} hosts to {output_path}", hosts.len());
}

/// Format a price the way the source datasets do: `$1,234.00`.
fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}.{frac:02}")
}
