/// Example reading a whitespace-separated measurement file.
///
/// Usage: cargo run --example read_records -- <file> [sentinel]
use nanval::record::{RecordConfig, RecordReader};
use nanval::{DEFAULT_SENTINEL, ValueConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or("usage: read_records <file> [sentinel]")?;
    let sentinel = match args.next() {
        Some(s) => nanval::parse_val(&s, None)?,
        None => DEFAULT_SENTINEL,
    };

    let config = RecordConfig::whitespace().with_value(ValueConfig::new().with_sentinel(sentinel));
    let mut missing = 0usize;
    let mut total = 0usize;

    for record in RecordReader::<_, f64>::open(&path, config)? {
        let record = record?;
        missing += record.values.iter().filter(|&&v| v == sentinel).count();
        total += record.values.len();
        println!("{:>6}: {:?}", record.line, record.values);
    }

    println!("\n{} values, {} missing", total, missing);
    Ok(())
}
