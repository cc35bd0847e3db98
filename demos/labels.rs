use seqpart_rs::partition;

fn main() {
    // Partition a string so every letter stays within one piece
    let inputs = [
        "ababcbacadefegdehijhklij",
        "eccbbbbdec",
        "caedbdedda",
    ];

    for input in inputs {
        let values: Vec<char> = input.chars().collect();
        let result = partition(values.iter().copied());

        println!("input:    {}", input);
        println!("lengths:  {:?}", result.lengths());

        let pieces: Vec<String> = result
            .split_slice(&values)
            .map(|segment| segment.iter().collect())
            .collect();
        println!("pieces:   {}\n", pieces.join(" | "));
    }

    // Works over any Hash + Eq tokens, not just characters
    let words = ["red", "blue", "red", "green", "green", "cyan"];
    let result = partition(words.iter().copied());

    println!("words:    {:?}", words);
    println!("lengths:  {:?}", result.lengths());
    for segment in result.split_slice(&words) {
        println!("segment:  {:?}", segment);
    }
}
