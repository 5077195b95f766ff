//! Basic usage of the silabeo API

use silabeo_api::{
    divide_word, DivideRequest, Options, SplitRequest, SyllabifyRequest, SyllableProcessor,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience function
    println!("=== Method 1: Convenience Function ===");
    let response = divide_word("palabra");
    println!("{} -> {}\n", response.word, response.syllables.join("-"));

    // Method 2: Processor with default presets
    println!("=== Method 2: Default Processor ===");
    let processor = SyllableProcessor::new();
    let response = processor.divide(DivideRequest::new("murciélago"))?;
    println!("{} -> {}", response.word, response.syllables.join("-"));

    let response = processor.split(SplitRequest::new("¿Qué hora es? Son las tres..."))?;
    println!("{} tokens: {:?}\n", response.count, response.tokens);

    // Method 3: Per-request options
    println!("=== Method 3: Request Options ===");
    let options = Options {
        attach_punct: Some("left".into()),
        lower: Some(true),
        ..Default::default()
    };
    let request = SplitRequest::new("¿Qué hora es?").with_options(options);
    println!("{:?}\n", processor.split(request)?.tokens);

    // Method 4: Syllabified breakdown
    println!("=== Method 4: Breakdown ===");
    let response = processor.syllabify(SyllabifyRequest::new("¡Hola, amigo!"))?;
    for item in &response.items {
        match item.syllables() {
            Some(syllables) => println!("  {:<12} {}", item.token(), syllables.join("-")),
            None => println!("  {:<12} ({:?})", item.token(), item.kind()),
        }
    }
    println!(
        "{} words, {} syllables",
        response.counts.words, response.counts.syllables_total
    );

    Ok(())
}
