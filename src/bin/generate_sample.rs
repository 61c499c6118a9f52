use std::sync::Arc;

use arrow::array::{Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Baseline residential price (cents/kWh) around 2001, per state.
#[rustfmt::skip]
const STATES: [(&str, f64); 51] = [
    ("AL", 7.0), ("AK", 11.8), ("AZ", 8.3), ("AR", 7.1), ("CA", 12.8),
    ("CO", 7.4), ("CT", 10.9), ("DE", 8.6), ("DC", 7.9), ("FL", 8.1),
    ("GA", 7.6), ("HI", 16.4), ("ID", 6.0), ("IL", 8.4), ("IN", 7.0),
    ("IA", 8.4), ("KS", 7.6), ("KY", 5.5), ("LA", 8.0), ("ME", 12.3),
    ("MD", 7.9), ("MA", 11.6), ("MI", 8.5), ("MN", 7.6), ("MS", 7.1),
    ("MO", 7.0), ("MT", 7.2), ("NE", 6.7), ("NV", 8.9), ("NH", 12.5),
    ("NJ", 10.8), ("NM", 8.4), ("NY", 14.0), ("NC", 8.2), ("ND", 6.4),
    ("OH", 8.6), ("OK", 7.3), ("OR", 6.2), ("PA", 9.6), ("RI", 11.3),
    ("SC", 7.6), ("SD", 7.4), ("TN", 6.3), ("TX", 9.2), ("UT", 6.6),
    ("VT", 12.1), ("VA", 7.8), ("WA", 5.9), ("WV", 6.2), ("WI", 8.3),
    ("WY", 6.9),
];

const FIRST_YEAR: i32 = 2001;
const LAST_YEAR: i32 = 2020;

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "US_State")]
    state: &'a str,
    #[serde(rename = "Residential Price")]
    residential_price: f64,
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

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut years = Vec::new();
    let mut states = Vec::new();
    let mut prices = Vec::new();

    for &(state, base) in &STATES {
        // Each state drifts upward at its own rate, 1.5–3.5 % a year.
        let growth = 1.015 + 0.02 * rng.next_f64();
        for year in FIRST_YEAR..=LAST_YEAR {
            let trend = base * growth.powi(year - FIRST_YEAR);
            let price = (trend + rng.gauss(0.0, 0.25)).max(1.0);
            years.push(year);
            states.push(state);
            prices.push((price * 100.0).round() / 100.0);
        }
    }

    // ---- CSV ----
    let csv_path = "electricity.csv";
    let mut writer = csv::Writer::from_path(csv_path)?;
    for ((&year, &state), &residential_price) in years.iter().zip(&states).zip(&prices) {
        writer.serialize(Row {
            year,
            state,
            residential_price,
        })?;
    }
    writer.flush()?;

    // ---- Parquet ----
    let schema = Arc::new(Schema::new(vec![
        Field::new("Year", DataType::Int32, false),
        Field::new("US_State", DataType::Utf8, false),
        Field::new("Residential Price", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int32Array::from(years.clone())),
            Arc::new(StringArray::from(states.clone())),
            Arc::new(Float64Array::from(prices.clone())),
        ],
    )?;

    let parquet_path = "electricity.parquet";
    let file = std::fs::File::create(parquet_path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    println!("{}", pretty_format_batches(&[batch.slice(0, 5)])?);
    println!(
        "Wrote {} records ({} states, {FIRST_YEAR}–{LAST_YEAR}) to {csv_path} and {parquet_path}",
        years.len(),
        STATES.len()
    );
    Ok(())
}
