use anyhow::Context;
use used_car_sales::config::DEFAULT_DATASET;
use used_car_sales::data::records::{
    DEPRECIATION_RATE, IS_NEW_CAR, MAKE, PURCHASE_DATE, RESELL_PRICE, SALE_PRICE, TOP_SPEED,
    ZIPCODE,
};

const ROWS: usize = 500;

/// (make, base price, base top speed)
const MAKES: [(&str, f64, f64); 6] = [
    ("Porsche", 85_000.0, 180.0),
    ("BMW", 48_000.0, 155.0),
    ("Toyota", 26_000.0, 115.0),
    ("Honda", 24_000.0, 120.0),
    ("Ford", 31_000.0, 125.0),
    ("Chevrolet", 29_000.0, 130.0),
];

/// Fixed-seed splitmix64 stream; the dataset only needs integer and float
/// draws from it.
struct SampleRng(u64);

impl SampleRng {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Integer in `lo..=hi`.
    fn between(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next() % (hi - lo + 1)
    }

    /// Float in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

fn cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut rng = SampleRng(42);

    let output_path = DEFAULT_DATASET;
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        ZIPCODE,
        MAKE,
        SALE_PRICE,
        RESELL_PRICE,
        DEPRECIATION_RATE,
        PURCHASE_DATE,
        TOP_SPEED,
        IS_NEW_CAR,
    ])?;

    for _ in 0..ROWS {
        let (make, base_price, base_speed) = MAKES[rng.between(0, MAKES.len() as u64 - 1) as usize];

        // Written unpadded, as a spreadsheet export would: 501, 2134, 98101 …
        let zipcode = rng.between(501, 99_950);
        let sale_price = cents(base_price * rng.uniform(0.6, 1.4));
        let resell_price = cents(sale_price * rng.uniform(0.7, 1.15));
        let rate = cents(rng.uniform(0.05, 0.25));
        let purchase_date = format!(
            "{:02}/{:02}/{}",
            rng.between(1, 12),
            rng.between(1, 28),
            rng.between(2012, 2023)
        );
        let top_speed = (base_speed * rng.uniform(0.85, 1.15)).round();
        let is_new_car = if rng.uniform(0.0, 1.0) < 0.2 { "True" } else { "False" };

        writer.write_record([
            zipcode.to_string(),
            make.to_string(),
            format!("{sale_price:.2}"),
            format!("{resell_price:.2}"),
            format!("{rate:.2}"),
            purchase_date,
            format!("{top_speed:.0}"),
            is_new_car.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} sales to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_bounds_and_repeat_per_seed() {
        let mut a = SampleRng(42);
        let mut b = SampleRng(42);
        for _ in 0..1000 {
            let zip = a.between(501, 99_950);
            assert!((501..=99_950).contains(&zip));
            let f = a.uniform(0.6, 1.4);
            assert!((0.6..1.4).contains(&f));
        }
        for _ in 0..1000 {
            b.between(501, 99_950);
            b.uniform(0.6, 1.4);
        }
        assert_eq!(a.next(), b.next());
    }
}
