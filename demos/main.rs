use seqpart_rs::Partitioner;
use std::env;
use std::fs::File;
use std::io::{BufReader, Read};

/// Partitions the bytes of a file into span-confined segments.
///
/// Usage: cargo run --example main <filename>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    // Open file
    let file = File::open(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    // Read file byte by byte into the partitioner
    let mut part = Partitioner::new();
    let reader = BufReader::new(file);

    for byte_result in reader.bytes() {
        let byte = byte_result.expect("Error reading file");
        part.push(byte);
    }

    let partition = part.partition();
    let stats = partition.stats();

    println!("=== Partition ===");
    let shown = 20.min(partition.segment_count());
    println!(
        "First {} segment lengths: {:?}",
        shown,
        &partition.lengths()[..shown]
    );

    println!("\n=== Statistics ===");
    println!("Total bytes read: {}", stats.input_length);
    println!("Segments produced: {}", stats.num_segments);
    println!("Longest segment: {} bytes", stats.longest_segment);
    println!("Mean segment length: {:.2} bytes", stats.mean_segment_len());
}
