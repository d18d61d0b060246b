use serde::Serialize;

use crate::config::TOP_N;
use crate::data::records::RatioRecord;

/// A record with its price/top-speed ratio attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedCar {
    pub record: RatioRecord,
    pub ratio: f64,
}

/// Projection shown in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioRow {
    #[serde(rename = "Sale Price")]
    pub sale_price: f64,
    #[serde(rename = "Top Speed")]
    pub top_speed: f64,
    #[serde(rename = "Ratio")]
    pub ratio: f64,
}

/// Attach `Sale Price / Top Speed` to every record.
pub fn sales_ratio(records: &[RatioRecord]) -> Vec<RatedCar> {
    records
        .iter()
        .map(|r| RatedCar {
            record: r.clone(),
            ratio: r.sale_price / r.top_speed,
        })
        .collect()
}

/// Used cars only, highest ratio first, at most [`TOP_N`] rows.
pub fn set_top_10(cars: &[RatedCar]) -> Vec<RatioRow> {
    let mut used: Vec<&RatedCar> = cars.iter().filter(|c| !c.record.is_new_car).collect();
    used.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    used.into_iter()
        .take(TOP_N)
        .map(|c| RatioRow {
            sale_price: c.record.sale_price,
            top_speed: c.record.top_speed,
            ratio: c.ratio,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<RatioRecord> {
        [
            ("Toyota", 10000.0, 120.0, false),
            ("Honda", 15000.0, 130.0, false),
            ("Ford", 12000.0, 110.0, true),
            ("Chevrolet", 18000.0, 140.0, false),
        ]
        .into_iter()
        .map(|(_make, price, speed, is_new)| RatioRecord {
            sale_price: price,
            top_speed: speed,
            is_new_car: is_new,
        })
        .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn ratio_is_price_over_speed() {
        let rated = sales_ratio(&sample_records());
        let ratios: Vec<f64> = rated.iter().map(|c| c.ratio).collect();
        let expected = [83.333, 115.385, 109.091, 128.571];
        assert!(ratios.iter().zip(expected).all(|(a, b)| close(*a, b)));
    }

    #[test]
    fn top_ten_skips_new_cars_and_sorts_descending() {
        let top = set_top_10(&sales_ratio(&sample_records()));

        assert_eq!(top.len(), 3);
        let prices: Vec<f64> = top.iter().map(|r| r.sale_price).collect();
        let speeds: Vec<f64> = top.iter().map(|r| r.top_speed).collect();
        assert_eq!(prices, vec![18000.0, 15000.0, 10000.0]);
        assert_eq!(speeds, vec![140.0, 130.0, 120.0]);
        assert!(close(top[0].ratio, 128.571));
        assert!(close(top[2].ratio, 83.333));
    }

    #[test]
    fn top_ten_caps_length() {
        let records: Vec<RatioRecord> = (1..=15)
            .map(|i| RatioRecord {
                sale_price: 1000.0 * i as f64,
                top_speed: 100.0,
                is_new_car: false,
            })
            .collect();
        let top = set_top_10(&sales_ratio(&records));
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0].sale_price, 15000.0);
        assert_eq!(top[9].sale_price, 6000.0);
    }
}
