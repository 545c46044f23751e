use std::io::{self, BufRead};

use tabletag::{TagConfig, TagPipeline};

fn main() {
    env_logger::init();
    log::info!("{} v{} starting", tabletag::NAME, tabletag::VERSION);

    let config = TagConfig::load();
    let pipeline = match TagPipeline::new(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut titles: Vec<String> = std::env::args().skip(1).collect();
    let as_json = titles.iter().any(|arg| arg == "--json");
    titles.retain(|arg| arg != "--json");

    if titles.is_empty() {
        // No arguments: tag each stdin line.
        for line in io::stdin().lock().lines() {
            match line {
                Ok(title) => print_tag(&pipeline, title.trim(), as_json),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    } else {
        for title in &titles {
            print_tag(&pipeline, title, as_json);
        }
    }
}

fn print_tag(pipeline: &TagPipeline, title: &str, as_json: bool) {
    if title.is_empty() {
        return;
    }
    let result = pipeline.generate(title);
    if as_json {
        match serde_json::to_string(&result) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    } else {
        println!("{}", result.tag);
    }
}
