//! Writes a deterministic synthetic launch dataset with the same columns as
//! the course file, as both CSV and Parquet.

use std::sync::Arc;

use anyhow::Context;
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use spacex_dash::config::DEFAULT_DATA_FILE;
use spacex_dash::data::model::{
    COL_BOOSTER_CATEGORY, COL_BOOSTER_VERSION, COL_CLASS, COL_FLIGHT_NUMBER, COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS, LaunchRecord, Outcome,
};

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

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in flight order: (category, flights, payload kg range, success rate).
const GENERATIONS: [(&str, usize, (f64, f64), f64); 5] = [
    ("v1.0", 5, (0.0, 700.0), 0.2),
    ("v1.1", 15, (400.0, 4600.0), 0.35),
    ("FT", 24, (2000.0, 9600.0), 0.65),
    ("B4", 11, (2200.0, 9600.0), 0.55),
    ("B5", 1, (3600.0, 3700.0), 1.0),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn generate(rng: &mut SimpleRng) -> Vec<LaunchRecord> {
    let mut records = Vec::new();
    let mut flight: i64 = 1;
    for (category, flights, (low, high), success_rate) in GENERATIONS {
        for serial in 0..flights {
            // Early flights all left from LC-40.
            let site = if flight <= 5 { SITES[0] } else { rng.pick(&SITES) };
            let payload = (rng.uniform(low, high) * 10.0).round() / 10.0;
            let outcome = if rng.next_f64() < success_rate {
                Outcome::Success
            } else {
                Outcome::Failure
            };
            records.push(LaunchRecord {
                flight_number: Some(flight),
                launch_site: site.to_string(),
                outcome,
                payload_mass_kg: payload,
                booster_version: Some(format!("F9 {category}  B{:04}", 1000 + serial)),
                booster_category: category.to_string(),
            });
            flight += 1;
        }
    }
    records
}

fn write_csv(path: &str, records: &[LaunchRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for rec in records {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, records: &[LaunchRecord]) -> anyhow::Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new(COL_FLIGHT_NUMBER, DataType::Int64, true),
        Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
        Field::new(COL_CLASS, DataType::Int64, false),
        Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
        Field::new(COL_BOOSTER_VERSION, DataType::Utf8, true),
        Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(
                records.iter().map(|r| r.flight_number).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records.iter().map(|r| r.launch_site.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records.iter().map(|r| i64::from(r.outcome)).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                records.iter().map(|r| r.payload_mass_kg).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records.iter().map(|r| r.booster_version.as_deref()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                records.iter().map(|r| r.booster_category.as_str()).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let records = generate(&mut rng);

    write_csv(DEFAULT_DATA_FILE, &records)?;
    let parquet_path = DEFAULT_DATA_FILE.replace(".csv", ".parquet");
    write_parquet(&parquet_path, &records)?;

    println!(
        "Wrote {} launch records to {DEFAULT_DATA_FILE} and {parquet_path}",
        records.len()
    );
    Ok(())
}
